pub mod home_router;
pub mod user_router;
