use std::sync::Arc;

/// WHOIS query: a host plus an optional explicit server list.
/// Uses `Arc<str>` so the query is cheap to clone across resolver → coalescer → task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisQuery {
    pub host: Arc<str>,
    pub servers: Arc<[Arc<str>]>,
}

impl WhoisQuery {
    /// Trims, lower-cases and drops a trailing root dot from `host`.
    pub fn new(host: &str) -> Self {
        let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
        Self {
            host: Arc::from(host),
            servers: Arc::from([]),
        }
    }

    /// Bypasses TLD matching: each server is tried in order with the plain dialect.
    pub fn with_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.servers = servers
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Arc::from)
            .collect();
        self
    }

    pub fn has_explicit_servers(&self) -> bool {
        !self.servers.is_empty()
    }

    /// Key shared by the cache and the in-flight registry.
    ///
    /// Queries pinned to explicit servers never share a key with routed ones.
    pub fn key(&self) -> Arc<str> {
        if self.servers.is_empty() {
            return Arc::clone(&self.host);
        }
        let servers: Vec<&str> = self.servers.iter().map(|s| s.as_ref()).collect();
        Arc::from(format!("{}@{}", self.host, servers.join(",")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_is_normalized() {
        let query = WhoisQuery::new("  Example.COM. ");
        assert_eq!(&*query.host, "example.com");
    }

    #[test]
    fn test_bare_tld_keeps_leading_dot() {
        assert_eq!(&*WhoisQuery::new(".COM").host, ".com");
    }

    #[test]
    fn test_key_is_host_without_servers() {
        assert_eq!(&*WhoisQuery::new("example.com").key(), "example.com");
    }

    #[test]
    fn test_key_includes_explicit_servers() {
        let query = WhoisQuery::new("example.com").with_servers(["whois.a.test", " ", "whois.b.test"]);
        assert_eq!(query.servers.len(), 2);
        assert_eq!(&*query.key(), "example.com@whois.a.test,whois.b.test");
    }
}
