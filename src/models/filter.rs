//! List filter
//!
//! Query parameters accepted by the list endpoint.

use serde::Deserialize;

/// Default page size when the caller supplies none (or a non-positive one).
pub const DEFAULT_LIMIT: i64 = 20;

// == Pokemon Filter ==
/// Filtering and paging options for list retrieval.
///
/// Only `limit` and `offset` affect the fetch today. `name`, `type` and
/// `is_favorite` are accepted for forward compatibility but are not applied
/// to the upstream query or as a post-filter on results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonFilter {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl PokemonFilter {
    // == Effective Offset ==
    /// The offset actually used: the filter value when positive, else 0.
    pub fn effective_offset(&self) -> i64 {
        if self.offset > 0 {
            self.offset
        } else {
            0
        }
    }

    // == Effective Limit ==
    /// The page size actually used: the filter value when positive, else 20.
    pub fn effective_limit(&self) -> i64 {
        if self.limit > 0 {
            self.limit
        } else {
            DEFAULT_LIMIT
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults() {
        let filter = PokemonFilter::default();
        assert_eq!(filter.effective_offset(), 0);
        assert_eq!(filter.effective_limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_filter_positive_values_pass_through() {
        let filter = PokemonFilter {
            limit: 10,
            offset: 40,
            ..Default::default()
        };
        assert_eq!(filter.effective_offset(), 40);
        assert_eq!(filter.effective_limit(), 10);
    }

    #[test]
    fn test_filter_negative_values_fall_back() {
        let filter = PokemonFilter {
            limit: -5,
            offset: -1,
            ..Default::default()
        };
        assert_eq!(filter.effective_offset(), 0);
        assert_eq!(filter.effective_limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_filter_deserialize_from_query_shape() {
        let filter: PokemonFilter =
            serde_json::from_str(r#"{"limit": 5, "offset": 10, "type": "grass", "is_favorite": true}"#)
                .unwrap();
        assert_eq!(filter.limit, 5);
        assert_eq!(filter.offset, 10);
        assert_eq!(filter.type_name.as_deref(), Some("grass"));
        assert_eq!(filter.is_favorite, Some(true));
    }
}
