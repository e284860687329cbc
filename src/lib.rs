pub mod error;
pub mod executor;
pub mod query;
pub mod relation;
pub mod report;
pub mod store;
