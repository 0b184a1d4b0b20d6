pub mod cache;
pub mod health;
pub mod index;
pub mod whois;

pub use cache::get_cache_stats;
pub use health::health_check;
pub use index::index_page;
pub use whois::{get_whois_record, lookup_whois};
