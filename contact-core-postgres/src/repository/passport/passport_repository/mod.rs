pub mod repo_impl;
pub mod create_passport;
pub mod create_or_update_passport;
pub mod delete_passport;
pub mod exist_by_ids;
pub mod load_batch;
pub mod read_passport;
pub mod read_passports;
pub mod update_passport;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::PassportRepositoryImpl;
