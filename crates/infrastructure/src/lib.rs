//! whoisd Infrastructure Layer
pub mod whois;
