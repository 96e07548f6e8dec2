pub mod repo_impl;
pub mod create;
pub mod delete;
pub mod load;
pub mod load_with_passport;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ContactRepositoryImpl;
