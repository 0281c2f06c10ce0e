//! Pokemon domain entities
//!
//! Normalized shapes served to callers. Entities are immutable after
//! construction; cached copies are shared, never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Pokemon ==
/// A fully materialized pokemon.
///
/// `created_at` and `updated_at` are both stamped at fetch time; nothing is
/// persisted across process restarts, so the two are always equal. The
/// upstream identifier appears both as `id` and `pokeapi_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub base_experience: i64,
    pub types: Vec<PokemonType>,
    pub abilities: Vec<PokemonAbility>,
    pub sprites: Sprites,
    pub stats: Vec<PokemonStat>,
    /// Always false: there is no persistence layer backing favorites yet.
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pokeapi_id: i64,
}

impl Pokemon {
    // == Placeholder ==
    /// Minimal entity served when an upstream by-id lookup cannot be
    /// completed: the requested id, empty attributes, fresh timestamps.
    pub fn placeholder(id: i64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            name: String::new(),
            height: 0,
            weight: 0,
            base_experience: 0,
            types: Vec::new(),
            abilities: Vec::new(),
            sprites: Sprites::default(),
            stats: Vec::new(),
            is_favorite: false,
            created_at: timestamp,
            updated_at: timestamp,
            pokeapi_id: 0,
        }
    }
}

// == Pokemon List ==
/// One page of pokemon, assembled from the upstream index plus one detail
/// fetch per entry. `next`/`previous` are opaque upstream page URLs and may
/// be empty at either end of the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonList {
    pub count: i64,
    pub next: String,
    pub previous: String,
    pub pokemons: Vec<Pokemon>,
}

// == Sub-attributes ==
/// A typed slot entry, ordered as received from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

/// An ability slot entry, ordered as received from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: i64,
    pub ability: NamedResource,
}

/// A base-stat entry, ordered as received from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: i64,
    pub effort: i64,
    pub stat: NamedResource,
}

/// Image reference bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: String,
    pub front_shiny: String,
    pub back_default: String,
    pub back_shiny: String,
}

/// A name plus the upstream URL where the full resource lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_shape() {
        let now = Utc::now();
        let pokemon = Pokemon::placeholder(999, now);

        assert_eq!(pokemon.id, 999);
        assert!(pokemon.name.is_empty());
        assert!(!pokemon.is_favorite);
        assert_eq!(pokemon.created_at, pokemon.updated_at);
        assert_eq!(pokemon.pokeapi_id, 0);
        assert!(pokemon.types.is_empty());
    }

    #[test]
    fn test_pokemon_serialize_field_names() {
        let pokemon = Pokemon::placeholder(25, Utc::now());
        let json = serde_json::to_value(&pokemon).unwrap();

        assert!(json.get("base_experience").is_some());
        assert!(json.get("is_favorite").is_some());
        assert!(json.get("pokeapi_id").is_some());
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn test_type_slot_serializes_as_type() {
        let slot = PokemonType {
            slot: 1,
            type_info: NamedResource {
                name: "electric".to_string(),
                url: "https://pokeapi.co/api/v2/type/13/".to_string(),
            },
        };
        let json = serde_json::to_value(&slot).unwrap();

        assert_eq!(json["type"]["name"], "electric");
        assert!(json.get("type_info").is_none());
    }
}
