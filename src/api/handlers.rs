//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, Pokemon, PokemonFilter, PokemonList, StatsResponse};
use crate::pokeapi::PokeApiClient;
use crate::repository::{PokemonCache, PokemonRepository};
use crate::service::PokemonService;

// == App State ==
/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Entity retrieval operations
    pub service: PokemonService,
    /// Shared cache, exposed for the stats endpoint and the sweep task
    pub cache: Arc<RwLock<PokemonCache>>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(service: PokemonService, cache: Arc<RwLock<PokemonCache>>) -> Self {
        Self { service, cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache, upstream client, repository and service wiring.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Arc::new(RwLock::new(CacheStore::new(config.cache_ttl)));
        let client = PokeApiClient::new(&config.pokeapi_base_url)?;
        let repo = PokemonRepository::new(client, cache.clone());

        Ok(Self::new(PokemonService::new(repo), cache))
    }
}

/// Handler for GET /api/v1/pokemon/:id
///
/// Retrieves a pokemon by numeric id. Upstream failures degrade to a
/// placeholder entity rather than an error response.
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pokemon>> {
    let pokemon = state.service.get_by_id(&id).await?;

    Ok(Json(pokemon))
}

/// Handler for GET /api/v1/pokemon/name/:name
///
/// Retrieves a pokemon by name.
pub async fn get_pokemon_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Arc<Pokemon>>> {
    let pokemon = state.service.get_by_name(&name).await?;

    Ok(Json(pokemon))
}

/// Handler for GET /api/v1/pokemon
///
/// Retrieves one page of pokemon, fully materialized.
pub async fn list_pokemon(
    State(state): State<AppState>,
    Query(filter): Query<PokemonFilter>,
) -> Result<Json<Arc<PokemonList>>> {
    let list = state.service.get_all(&filter).await?;

    Ok(Json(list))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.cache.read().await.stats();

    Json(StatsResponse::new(snapshot))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
