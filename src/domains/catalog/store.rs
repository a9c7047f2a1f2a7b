//! Queries over the static travel datasets.

use serde::{Deserialize, Serialize};

use super::data;
use super::error::CatalogError;

/// A curated travel destination.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique lower-case slug.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub attractions: &'static [&'static str],
    pub best_time_to_visit: &'static str,
    pub average_cost: &'static str,
    pub climate: &'static str,
}

/// The brief listing form of a destination.
#[derive(Debug, Clone, Serialize)]
pub struct DestinationSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixed set of travel-tip categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Packing,
    Safety,
    Budgeting,
    Cultural,
}

impl TipCategory {
    pub const ALL: [TipCategory; 4] = [
        TipCategory::Packing,
        TipCategory::Safety,
        TipCategory::Budgeting,
        TipCategory::Cultural,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TipCategory::Packing => "packing",
            TipCategory::Safety => "safety",
            TipCategory::Budgeting => "budgeting",
            TipCategory::Cultural => "cultural",
        }
    }

    /// Parse a category key, rejecting anything outside the enumeration.
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == input)
            .ok_or_else(|| CatalogError::UnknownTipCategory {
                category: input.to_string(),
                available: Self::ALL.map(TipCategory::as_str).join(", "),
            })
    }
}

/// An ordered tip list for one category.
#[derive(Debug, Clone, Serialize)]
pub struct TipList {
    pub category: TipCategory,
    pub tips: &'static [&'static str],
}

/// All destinations in fixed catalog order.
pub fn all() -> &'static [Destination] {
    data::DESTINATIONS
}

/// Brief listings of all destinations, in catalog order.
pub fn summaries() -> Vec<DestinationSummary> {
    data::DESTINATIONS
        .iter()
        .map(|d| DestinationSummary {
            id: d.id,
            name: d.name,
            description: d.description,
        })
        .collect()
}

/// Look up one destination by id or display-name fragment.
///
/// An exact id match (case-insensitive) wins; otherwise the first destination
/// whose display name contains the fragment (case-insensitive) is returned.
pub fn find(query: &str) -> Result<&'static Destination, CatalogError> {
    let needle = query.to_lowercase();

    data::DESTINATIONS
        .iter()
        .find(|d| d.id == needle)
        .or_else(|| {
            data::DESTINATIONS
                .iter()
                .find(|d| d.name.to_lowercase().contains(&needle))
        })
        .ok_or_else(|| CatalogError::DestinationNotFound {
            query: query.to_string(),
            available: data::DESTINATIONS
                .iter()
                .map(|d| d.id)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// All destinations matching the query in name, description, or any
/// attraction (case-insensitive substring). An empty query matches all.
pub fn search(query: &str) -> Vec<&'static Destination> {
    let needle = query.to_lowercase();

    data::DESTINATIONS
        .iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&needle)
                || d.description.to_lowercase().contains(&needle)
                || d.attractions
                    .iter()
                    .any(|a| a.to_lowercase().contains(&needle))
        })
        .collect()
}

/// The ordered tip list for a category key.
pub fn tips(category: &str) -> Result<TipList, CatalogError> {
    let category = TipCategory::parse(category)?;
    Ok(TipList {
        category,
        tips: data::tips_for(category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for d in all() {
            assert_eq!(d.id, d.id.to_lowercase());
            assert!(seen.insert(d.id), "duplicate id: {}", d.id);
        }
    }

    #[test]
    fn test_find_every_listed_id() {
        // list -> find round-trip must never miss
        for summary in summaries() {
            let found = find(summary.id).unwrap();
            assert_eq!(found.id, summary.id);
        }
    }

    #[test]
    fn test_find_exact_id_case_insensitive() {
        let d = find("PARIS").unwrap();
        assert_eq!(d.id, "paris");
    }

    #[test]
    fn test_find_by_name_fragment() {
        let d = find("york").unwrap();
        assert_eq!(d.id, "newyork");
    }

    #[test]
    fn test_find_unknown_lists_valid_ids() {
        let err = find("atlantis").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"atlantis\" not found"));
        assert!(msg.contains("paris, tokyo, newyork, barcelona, sydney"));
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        assert_eq!(search("").len(), all().len());
    }

    #[test]
    fn test_search_results_satisfy_match() {
        let query = "beach";
        for d in search(query) {
            let matches = d.name.to_lowercase().contains(query)
                || d.description.to_lowercase().contains(query)
                || d.attractions.iter().any(|a| a.to_lowercase().contains(query));
            assert!(matches, "{} does not match '{}'", d.id, query);
        }
    }

    #[test]
    fn test_search_matches_attraction_names() {
        let results = search("eiffel");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "paris");
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        // barcelona and sydney both match "beach"; catalog order has
        // barcelona first
        let order: Vec<_> = search("beach").iter().map(|d| d.id).collect();
        assert_eq!(order, vec!["barcelona", "sydney"]);
    }

    #[test]
    fn test_tips_every_category_non_empty() {
        for category in TipCategory::ALL {
            let list = tips(category.as_str()).unwrap();
            assert!(!list.tips.is_empty());
            // idempotent: same data on repeated calls
            assert_eq!(list.tips, tips(category.as_str()).unwrap().tips);
        }
    }

    #[test]
    fn test_tips_unknown_category_lists_valid_keys() {
        let err = tips("invalid").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"invalid\" not found"));
        assert!(msg.contains("packing, safety, budgeting, cultural"));
    }
}
