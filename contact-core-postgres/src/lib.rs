pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::{ConfigError, PostgresConfig};
pub use postgres_repositories::{PassportRepositories, PostgresRepositories};
pub use repository::contact::ContactRepositoryImpl;
pub use repository::passport::PassportRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
