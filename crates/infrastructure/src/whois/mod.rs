pub mod cache;
pub mod coalescer;
pub mod dialect;
pub mod matcher;
pub mod resolver;
pub mod tld_loader;
pub mod tld_table;
pub mod transport;

pub use cache::{CacheMetrics, WhoisCache};
pub use coalescer::RequestCoalescer;
pub use dialect::{create_dialect, Dialect};
pub use matcher::{TldMatcher, ROOT_WHOIS_SERVER};
pub use resolver::{CachedWhoisResolver, CoreWhoisResolver, ResolverConfig, WhoisResolverBuilder};
pub use tld_loader::load_tld_table;
pub use tld_table::TldTable;
pub use transport::TcpTransport;
