//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{get_pokemon, get_pokemon_by_name, health, list_pokemon, stats, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `GET /stats` - Cache statistics
/// - `GET /api/v1/pokemon` - List pokemon (paged via limit/offset)
/// - `GET /api/v1/pokemon/:id` - Retrieve a pokemon by id
/// - `GET /api/v1/pokemon/name/:name` - Retrieve a pokemon by name
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/pokemon", get(list_pokemon))
        .route("/pokemon/:id", get(get_pokemon))
        .route("/pokemon/name/:name", get(get_pokemon_by_name));

    Router::new()
        .route("/health", get(health))
        .route("/stats", get(stats))
        .nest("/api/v1", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
