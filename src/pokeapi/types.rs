//! Upstream wire shapes.
//!
//! Decode-only mirrors of the PokeAPI JSON. Fields the upstream may omit or
//! null out decode through defaults/`Option` and are zero-filled during
//! normalization.

use serde::Deserialize;

/// Detail record for a single pokemon.
#[derive(Debug, Clone, Deserialize)]
pub struct PokeApiPokemon {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub weight: i64,
    /// Null upstream for pokemon without battle experience data.
    #[serde(default)]
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub types: Vec<PokeApiType>,
    #[serde(default)]
    pub abilities: Vec<PokeApiAbility>,
    #[serde(default)]
    pub sprites: PokeApiSprites,
    #[serde(default)]
    pub stats: Vec<PokeApiStat>,
}

/// Page envelope returned by the index endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PokeApiPage {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<PokeApiResource>,
}

/// Lightweight `{name, url}` pointer; list entries resolve to full records
/// through one additional fetch each.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokeApiResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokeApiType {
    #[serde(default)]
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_info: PokeApiResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokeApiAbility {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: i64,
    pub ability: PokeApiResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokeApiStat {
    #[serde(default)]
    pub base_stat: i64,
    #[serde(default)]
    pub effort: i64,
    pub stat: PokeApiResource,
}

/// Sprite URLs are frequently null upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokeApiSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
}
