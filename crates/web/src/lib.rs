pub mod config;
pub mod error;
pub mod handler;
pub mod purchase;
pub mod state;
pub mod templates;
