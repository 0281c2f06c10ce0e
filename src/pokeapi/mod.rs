//! PokeAPI Module
//!
//! Upstream HTTP client, the wire shapes it decodes, and the normalizer
//! that maps them into domain entities.

mod client;
pub mod normalize;
mod types;

pub use client::PokeApiClient;
pub use types::{PokeApiAbility, PokeApiPage, PokeApiPokemon, PokeApiResource, PokeApiSprites, PokeApiStat, PokeApiType};
