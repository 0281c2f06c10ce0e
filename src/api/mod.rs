//! API Module
//!
//! HTTP handlers and routing for the pokemon REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Cache statistics
//! - `GET /api/v1/pokemon` - List pokemon (paged)
//! - `GET /api/v1/pokemon/:id` - Retrieve a pokemon by id
//! - `GET /api/v1/pokemon/name/:name` - Retrieve a pokemon by name

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
