use crate::DomainError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// WHOIS query dialect spoken by a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectKind {
    /// Hostname sent as-is.
    Plain,
    /// Hostname substituted into a registry-specific template.
    Formatted,
    Afilias,
    /// `=` prefix, exact non-recursive lookup.
    Verisign,
    /// Reverse-DNS zones, unsupported.
    Arpa,
    /// Registry without any WHOIS service.
    None,
    /// Registry only reachable through a web form.
    Web,
}

impl DialectKind {
    pub const ALL: [DialectKind; 7] = [
        Self::Plain,
        Self::Formatted,
        Self::Afilias,
        Self::Verisign,
        Self::Arpa,
        Self::None,
        Self::Web,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Formatted => "formatted",
            Self::Afilias => "afilias",
            Self::Verisign => "verisign",
            Self::Arpa => "arpa",
            Self::None => "none",
            Self::Web => "web",
        }
    }
}

impl FromStr for DialectKind {
    type Err = DomainError;

    /// The empty string is the data file's spelling of the default dialect.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "plain" => Ok(Self::Plain),
            "formatted" => Ok(Self::Formatted),
            "afilias" => Ok(Self::Afilias),
            "verisign" => Ok(Self::Verisign),
            "arpa" => Ok(Self::Arpa),
            "none" => Ok(Self::None),
            "web" => Ok(Self::Web),
            other => Err(DomainError::DialectNotFound(other.to_string())),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-TLD dialect options as they appear in the TLD data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions(HashMap<String, String>);

impl QueryOptions {
    pub const FORMAT: &'static str = "format";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `format` template; empty values count as missing.
    pub fn format(&self) -> Option<&str> {
        self.get(Self::FORMAT).filter(|f| !f.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for QueryOptions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
