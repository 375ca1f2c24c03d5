//! # Error Types
//!
//! Domain-specific error types for shopflow-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopflow-core errors (this file)                                      │
//! │  ├── CoreError        - Rejected intents                               │
//! │  └── ValidationError  - Bad seed catalog or category list              │
//! │                                                                         │
//! │  storefront app errors (in app)                                        │
//! │  └── ApiError         - What the renderer sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Renderer               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both runtime variants are local validation failures. They point at a
//! renderer that offered a choice which doesn't exist, so callers reject
//! and move on. Nothing here is retried.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by [`CatalogState`](crate::CatalogState) intents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Category is not part of the session's enumeration.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Product id is not present in the seed catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Seed data validation errors.
///
/// Raised while building a session, never by intents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A mandatory member of a set is absent.
    #[error("{field} must include '{value}'")]
    Missing { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
