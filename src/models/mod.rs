//! Domain entities and DTOs for the pokemon API
//!
//! This module defines the pokemon entity shapes served to callers, the
//! list filter, and the bodies of the auxiliary HTTP endpoints.

pub mod filter;
pub mod pokemon;
pub mod responses;

// Re-export commonly used types
pub use filter::PokemonFilter;
pub use pokemon::{NamedResource, Pokemon, PokemonAbility, PokemonList, PokemonStat, PokemonType, Sprites};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
