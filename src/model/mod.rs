pub mod user;
pub mod customer;
pub mod address;
