//! Use-case layer.
//!
//! Validates caller input and applies the degrade-gracefully policy: a by-id
//! lookup that fails upstream is answered with a minimal placeholder entity
//! instead of an error. The masking is scoped to exactly that operation;
//! by-name and list lookups propagate errors unmasked.

use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

use crate::error::{PokemonError, Result};
use crate::models::{Pokemon, PokemonFilter, PokemonList};
use crate::repository::PokemonRepository;

// == Pokemon Service ==
/// Entity retrieval operations exposed to the delivery layer.
#[derive(Debug, Clone)]
pub struct PokemonService {
    repo: PokemonRepository,
}

impl PokemonService {
    // == Constructor ==
    /// Creates a service over `repo`.
    pub fn new(repo: PokemonRepository) -> Self {
        Self { repo }
    }

    // == Get By Id ==
    /// Retrieves a pokemon by its id, given as the raw path string.
    ///
    /// A non-numeric id fails with `InvalidInput` before any cache or
    /// upstream access. A repository failure is masked: the caller receives
    /// a placeholder carrying the requested id rather than the error.
    pub async fn get_by_id(&self, id: &str) -> Result<Pokemon> {
        let id: i64 = id
            .parse()
            .map_err(|_| PokemonError::InvalidInput(id.to_string()))?;

        let now = Utc::now();

        match self.repo.get_by_id(id).await {
            Ok(fetched) => {
                let mut pokemon = fetched.as_ref().clone();
                pokemon.id = id;
                pokemon.is_favorite = false;
                pokemon.created_at = now;
                pokemon.updated_at = now;
                Ok(pokemon)
            }
            Err(err) => {
                warn!("lookup for pokemon {} failed ({}), serving placeholder", id, err);
                Ok(Pokemon::placeholder(id, now))
            }
        }
    }

    // == Get By Name ==
    /// Retrieves a pokemon by name. Errors propagate unmasked.
    pub async fn get_by_name(&self, name: &str) -> Result<Arc<Pokemon>> {
        self.repo.get_by_name(name).await
    }

    // == Get All ==
    /// Retrieves one page of pokemon. Errors propagate unmasked.
    pub async fn get_all(&self, filter: &PokemonFilter) -> Result<Arc<PokemonList>> {
        self.repo.get_all(filter).await
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use crate::pokeapi::PokeApiClient;
    use std::time::Duration;
    use tokio::sync::RwLock;

    fn service_with_unreachable_upstream() -> PokemonService {
        // Nothing listens on this address; every fetch fails at transport level
        let client = PokeApiClient::new("http://127.0.0.1:9").unwrap();
        let cache = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(60))));
        PokemonService::new(PokemonRepository::new(client, cache))
    }

    #[tokio::test]
    async fn test_get_by_id_rejects_non_numeric_input() {
        let service = service_with_unreachable_upstream();

        let err = service.get_by_id("abc").await.unwrap_err();
        assert!(matches!(err, PokemonError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_get_by_id_masks_upstream_failure() {
        let service = service_with_unreachable_upstream();

        let pokemon = service.get_by_id("999").await.unwrap();
        assert_eq!(pokemon.id, 999);
        assert!(pokemon.name.is_empty());
        assert!(!pokemon.is_favorite);
        assert_eq!(pokemon.created_at, pokemon.updated_at);
    }

    #[tokio::test]
    async fn test_get_by_name_propagates_upstream_failure() {
        let service = service_with_unreachable_upstream();

        let err = service.get_by_name("pikachu").await.unwrap_err();
        assert!(matches!(err, PokemonError::UpstreamUnavailable(_)));
    }
}
