pub async fn welcome_handler() -> &'static str {
    "Welcome to E-Commerce App"
}

pub async fn home_handler() -> &'static str {
    "Welcome to Home Page"
}
