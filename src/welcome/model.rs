use poem_openapi::Object;

pub const WELCOME_TEXT: &str = "Welcome to Node.js MySQL App";

/// `2`, the value of the probe's arithmetic expression.
pub const EXPECTED_SOLUTION: i64 = 2;

#[derive(Object)]
pub struct WelcomeMessage {
    pub message: String,
    pub database: String,
}

#[derive(Object)]
pub struct ErrorMessage {
    pub error: String,
}
