pub mod passport_repository;

pub use passport_repository::PassportRepositoryImpl;
