pub mod health;
pub mod hello;
pub mod user_info;
