pub mod contact;
pub mod db_init;
pub mod passport;
