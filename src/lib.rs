pub mod config;
pub mod debugger;
pub mod error;
pub mod handlers;
pub mod html;
pub mod models;
pub mod state;
