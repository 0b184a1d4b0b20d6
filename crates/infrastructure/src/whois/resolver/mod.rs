//! WHOIS resolver, layered with the decorator pattern:
//!
//! - **Cache**: answers repeated queries within the TTL (outermost, optional)
//! - **Core**: TLD matching, request coalescing and dialect dispatch
//!
//! ```no_run
//! use whoisd_infrastructure::whois::resolver::WhoisResolverBuilder;
//! use whoisd_infrastructure::whois::{load_tld_table, WhoisCache};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let table = load_tld_table(None).unwrap();
//! let resolver = WhoisResolverBuilder::new(table)
//!     .with_cache(Arc::new(WhoisCache::new(Duration::from_secs(3600), 64 << 20)))
//!     .build();
//! ```

pub mod builder;
pub mod cache_layer;
pub mod config;
pub mod core;

pub use builder::WhoisResolverBuilder;
pub use cache_layer::CachedWhoisResolver;
pub use config::ResolverConfig;
pub use core::CoreWhoisResolver;
