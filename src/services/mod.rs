pub mod data_stores;
pub mod session_store;
