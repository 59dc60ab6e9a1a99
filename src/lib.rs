pub mod cli;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rawg;
pub mod ranking;
pub mod steam;
