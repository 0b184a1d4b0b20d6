pub mod whois_cache;
pub mod whois_resolver;
pub mod whois_transport;

pub use whois_cache::WhoisCachePort;
pub use whois_resolver::{WhoisResolution, WhoisResolver};
pub use whois_transport::{WhoisTransport, DEFAULT_WHOIS_PORT};
