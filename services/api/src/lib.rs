pub mod adapters;
pub mod config;
pub mod error;
pub mod facade;
pub mod seed;
pub mod state;
