//! Pokecache - A read-through caching service for the PokeAPI
//!
//! Serves normalized pokemon entities from an in-memory TTL cache,
//! fetching from the upstream API on cache misses.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod repository;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
