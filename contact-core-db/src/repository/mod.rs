pub mod exist_by_ids;
pub mod load_batch;
pub mod pagination;
pub mod passport_repository;

// Re-exports
pub use exist_by_ids::*;
pub use load_batch::*;
pub use pagination::*;
pub use passport_repository::*;
