//! Normalizer
//!
//! Maps upstream wire records into the domain entity shape. Pure apart from
//! stamping the current wall-clock time into both timestamp fields.

use chrono::Utc;

use crate::models::{NamedResource, Pokemon, PokemonAbility, PokemonStat, PokemonType, Sprites};
use crate::pokeapi::types::{PokeApiPokemon, PokeApiResource};

impl From<PokeApiResource> for NamedResource {
    fn from(resource: PokeApiResource) -> Self {
        Self {
            name: resource.name,
            url: resource.url,
        }
    }
}

// == Map Pokemon ==
/// Builds a domain `Pokemon` from the upstream detail record.
///
/// Sub-attribute lists keep their upstream order exactly; nullable upstream
/// fields become their zero values; the upstream id lands in both `id` and
/// `pokeapi_id`.
pub fn map_pokemon(raw: PokeApiPokemon) -> Pokemon {
    let now = Utc::now();

    let types = raw
        .types
        .into_iter()
        .map(|t| PokemonType {
            slot: t.slot,
            type_info: t.type_info.into(),
        })
        .collect();

    let abilities = raw
        .abilities
        .into_iter()
        .map(|a| PokemonAbility {
            is_hidden: a.is_hidden,
            slot: a.slot,
            ability: a.ability.into(),
        })
        .collect();

    let stats = raw
        .stats
        .into_iter()
        .map(|s| PokemonStat {
            base_stat: s.base_stat,
            effort: s.effort,
            stat: s.stat.into(),
        })
        .collect();

    Pokemon {
        id: raw.id,
        name: raw.name,
        height: raw.height,
        weight: raw.weight,
        base_experience: raw.base_experience.unwrap_or_default(),
        types,
        abilities,
        sprites: Sprites {
            front_default: raw.sprites.front_default.unwrap_or_default(),
            front_shiny: raw.sprites.front_shiny.unwrap_or_default(),
            back_default: raw.sprites.back_default.unwrap_or_default(),
            back_shiny: raw.sprites.back_shiny.unwrap_or_default(),
        },
        stats,
        is_favorite: false,
        created_at: now,
        updated_at: now,
        pokeapi_id: raw.id,
    }
}
