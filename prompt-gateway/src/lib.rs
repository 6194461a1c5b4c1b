pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod prompts;
pub mod schema;
pub mod services;
pub mod startup;
