pub mod user_dto;
pub mod customer_dto;
