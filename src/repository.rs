//! Cache-aside repository.
//!
//! Single entry point for entity retrieval: checks the cache, fetches from
//! the upstream API on a miss, and populates the cache only after a
//! verified-successful result. Failed fetches are never cached. There is no
//! request coalescing: concurrent misses on one key may fetch twice, and the
//! last write wins.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::{Pokemon, PokemonFilter, PokemonList};
use crate::pokeapi::PokeApiClient;

// == Cached Object ==
/// The value shape stored in the shared cache.
///
/// A tagged union instead of a type-erased value, so reads never downcast.
/// Entities sit behind `Arc`: cache hits hand back the stored allocation and
/// cached values are never mutated.
#[derive(Debug, Clone)]
pub enum CachedObject {
    Pokemon(Arc<Pokemon>),
    PokemonList(Arc<PokemonList>),
}

/// The concrete cache type shared between the repository and the sweep task.
pub type PokemonCache = CacheStore<CachedObject>;

// == Pokemon Repository ==
/// Cache-aside repository over the upstream PokeAPI.
#[derive(Debug, Clone)]
pub struct PokemonRepository {
    client: PokeApiClient,
    cache: Arc<RwLock<PokemonCache>>,
}

impl PokemonRepository {
    // == Constructor ==
    /// Creates a repository over `client`, sharing `cache`.
    pub fn new(client: PokeApiClient, cache: Arc<RwLock<PokemonCache>>) -> Self {
        Self { client, cache }
    }

    // == Get By Id ==
    /// Retrieves a single pokemon by its numeric id.
    pub async fn get_by_id(&self, id: i64) -> Result<Arc<Pokemon>> {
        let key = format!("pokemon:id:{id}");
        self.get_pokemon(&key, &id.to_string()).await
    }

    // == Get By Name ==
    /// Retrieves a single pokemon by name.
    pub async fn get_by_name(&self, name: &str) -> Result<Arc<Pokemon>> {
        let key = format!("pokemon:name:{name}");
        self.get_pokemon(&key, name).await
    }

    // == Get All ==
    /// Retrieves one page of fully materialized pokemon.
    ///
    /// On a list-key miss this fetches the reference page, then resolves
    /// every reference through the single-entity path (each resolution
    /// reads/populates its own cache entry). The first failing resolution
    /// aborts the whole call; the assembled list is cached only on full
    /// success, so a transient failure is never served back from the cache.
    pub async fn get_all(&self, filter: &PokemonFilter) -> Result<Arc<PokemonList>> {
        let offset = filter.effective_offset();
        let limit = filter.effective_limit();
        let key = format!("pokemon:list:offset:{offset}:limit:{limit}");

        let cached = self.cache.read().await.get(&key);
        if let Some(CachedObject::PokemonList(list)) = cached {
            debug!("cache hit for pokemon list (offset: {}, limit: {})", offset, limit);
            return Ok(list);
        }
        debug!("cache miss for pokemon list (offset: {}, limit: {})", offset, limit);

        let url = self.client.pokemon_list_url(offset, limit);
        let page = self.client.fetch_page(&url).await?;

        let mut pokemons = Vec::with_capacity(page.results.len());
        for reference in &page.results {
            let pokemon = self.get_by_name(&reference.name).await?;
            pokemons.push(pokemon.as_ref().clone());
        }

        let list = Arc::new(PokemonList {
            count: page.count,
            next: page.next.unwrap_or_default(),
            previous: page.previous.unwrap_or_default(),
            pokemons,
        });

        self.cache
            .write()
            .await
            .set(key, CachedObject::PokemonList(list.clone()));

        Ok(list)
    }

    // == Cache Handle ==
    /// The shared cache, for the sweep task and the stats endpoint.
    pub fn cache(&self) -> Arc<RwLock<PokemonCache>> {
        self.cache.clone()
    }

    // == Single-Entity Path ==
    /// Cache-aside lookup shared by the id and name operations.
    async fn get_pokemon(&self, key: &str, id_or_name: &str) -> Result<Arc<Pokemon>> {
        let cached = self.cache.read().await.get(key);
        if let Some(CachedObject::Pokemon(pokemon)) = cached {
            debug!("cache hit for {}", key);
            return Ok(pokemon);
        }
        debug!("cache miss for {}", key);

        let url = self.client.pokemon_url(id_or_name);
        let pokemon = Arc::new(self.client.fetch_pokemon(&url).await?);

        self.cache
            .write()
            .await
            .set(key, CachedObject::Pokemon(pokemon.clone()));

        Ok(pokemon)
    }
}
