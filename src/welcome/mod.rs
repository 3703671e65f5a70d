mod handler;
mod model;

pub use model::WELCOME_TEXT;

pub fn welcome_api() -> handler::Welcome {
    handler::Welcome
}
