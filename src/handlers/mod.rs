pub mod api;
pub mod browse;
pub mod question;
