pub mod entities;
pub mod config;
pub mod state;
pub mod handlers;
pub mod errors;
pub mod extractors;
pub mod repositories;
pub mod routes;
pub mod services;
