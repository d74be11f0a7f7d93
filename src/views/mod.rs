pub mod browse;
pub mod components;
pub mod context;
pub mod layout;
pub mod question;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
