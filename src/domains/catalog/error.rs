//! Catalog-specific error types.

use thiserror::Error;

/// Errors that can occur when querying the travel catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No destination matched the query. The message echoes the query and
    /// the full list of valid ids.
    #[error("Destination \"{query}\" not found. Available destinations: {available}")]
    DestinationNotFound { query: String, available: String },

    /// The tip category is outside the fixed enumeration.
    #[error("Category \"{category}\" not found. Available categories: {available}")]
    UnknownTipCategory { category: String, available: String },
}
