//! Upstream HTTP client.
//!
//! Bounded-timeout GET requests against the PokeAPI, with HTTP outcomes
//! classified into the domain error taxonomy. No retries: a failed attempt
//! surfaces immediately and the caller decides what to do with it.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::error::{PokemonError, Result};
use crate::models::Pokemon;
use crate::pokeapi::normalize;
use crate::pokeapi::types::{PokeApiPage, PokeApiPokemon};

/// Fixed per-request timeout for upstream calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// == PokeAPI Client ==
/// HTTP client for the upstream PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a new client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| PokemonError::Internal(format!("failed to build http client: {err}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    // == URL Builders ==
    /// Detail endpoint for a single pokemon; accepts an id or a name.
    pub fn pokemon_url(&self, id_or_name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, id_or_name)
    }

    /// Index endpoint for one page of references.
    pub fn pokemon_list_url(&self, offset: i64, limit: i64) -> String {
        format!("{}/pokemon?offset={}&limit={}", self.base_url, offset, limit)
    }

    // == Fetch Pokemon ==
    /// Fetches and normalizes a single pokemon from `url`.
    pub async fn fetch_pokemon(&self, url: &str) -> Result<Pokemon> {
        let response = self.send_get(url).await?;
        let status = response.status().as_u16();
        let raw: PokeApiPokemon = response
            .json()
            .await
            .map_err(|err| PokemonError::malformed_payload(status, err))?;

        Ok(normalize::map_pokemon(raw))
    }

    // == Fetch Page ==
    /// Fetches one page of the pokemon index from `url`.
    pub async fn fetch_page(&self, url: &str) -> Result<PokeApiPage> {
        let response = self.send_get(url).await?;
        let status = response.status().as_u16();

        response
            .json()
            .await
            .map_err(|err| PokemonError::malformed_payload(status, err))
    }

    // == Send ==
    /// Issues the GET and classifies the HTTP outcome.
    async fn send_get(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| PokemonError::UpstreamUnavailable(err.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(PokemonError::NotFound),
            status if !status.is_success() => Err(PokemonError::upstream_status(status.as_u16())),
            _ => Ok(response),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_url() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2").unwrap();
        assert_eq!(
            client.pokemon_url("25"),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
        assert_eq!(
            client.pokemon_url("pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn test_pokemon_list_url() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2").unwrap();
        assert_eq!(
            client.pokemon_list_url(40, 10),
            "https://pokeapi.co/api/v2/pokemon?offset=40&limit=10"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/").unwrap();
        assert_eq!(
            client.pokemon_url("1"),
            "https://pokeapi.co/api/v2/pokemon/1"
        );
    }
}
