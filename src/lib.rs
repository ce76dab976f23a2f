pub mod app;
pub mod config;
pub mod shared;
pub mod suggestions;
pub mod tui;
pub mod verification;
pub mod wizard;
