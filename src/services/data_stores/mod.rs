mod hashmap_record_store;
mod postgres_record_store;
mod postgrest_record_store;

pub use hashmap_record_store::*;
pub use postgres_record_store::*;
pub use postgrest_record_store::*;
