pub mod json_store;
pub mod remote;
pub mod traits;
