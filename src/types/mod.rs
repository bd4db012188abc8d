pub mod account;
pub mod balance;
pub mod ids;
pub mod user;
