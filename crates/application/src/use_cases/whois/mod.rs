pub mod lookup;

pub use lookup::{LookupWhoisUseCase, WhoisLookup};
