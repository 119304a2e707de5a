pub mod registry;
pub mod traits;

// Bucket source implementations
pub mod banks;
pub mod investments;
pub mod metals;
pub mod vault;
