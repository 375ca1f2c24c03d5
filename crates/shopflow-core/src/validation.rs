//! # Validation Module
//!
//! Checks run once, when a session is built from seed data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Construction (THIS MODULE)                                            │
//! │  ├── product ids unique, titles present, prices positive               │
//! │  └── categories present, unique, include "All"                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Intents (catalog.rs)                                                  │
//! │  ├── select_category: value must be in the enumeration                 │
//! │  └── toggle_*: id must be in the catalog                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Once construction passes, the catalog and category list never change, so
//! intents only need membership checks.
//!
//! ## Usage
//! ```rust
//! use shopflow_core::seed;
//! use shopflow_core::validation::{validate_catalog, validate_categories};
//!
//! validate_catalog(&seed::default_catalog()).unwrap();
//! validate_categories(&seed::default_categories()).unwrap();
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::ALL_CATEGORY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ```rust
/// use shopflow_core::validation::validate_product_title;
///
/// assert!(validate_product_title("Sup Hair Repair Oil").is_ok());
/// assert!(validate_product_title("  ").is_err());
/// ```
pub fn validate_product_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a product price. Free items are not part of the storefront.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a seed catalog.
///
/// ## Rules
/// - Every product passes [`validate_product_title`] and [`validate_price`]
/// - No two products share an id
///
/// An empty catalog is allowed; every filter then yields nothing.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product_title(&product.title)?;
        validate_price(product.price)?;

        if !seen.insert(product.id) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a category enumeration.
///
/// ## Rules
/// - No blank entries
/// - No duplicates (exact match)
/// - Must contain the `"All"` sentinel
///
/// ```rust
/// use shopflow_core::validation::validate_categories;
///
/// let ok = vec!["All".to_string(), "Skin".to_string()];
/// assert!(validate_categories(&ok).is_ok());
///
/// let missing_all = vec!["Skin".to_string()];
/// assert!(validate_categories(&missing_all).is_err());
/// ```
pub fn validate_categories(categories: &[String]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(categories.len());

    for category in categories {
        if category.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "category".to_string(),
            });
        }

        if !seen.insert(category.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "category".to_string(),
                value: category.clone(),
            });
        }
    }

    if !seen.contains(ALL_CATEGORY) {
        return Err(ValidationError::Missing {
            field: "categories".to_string(),
            value: ALL_CATEGORY.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_product_title() {
        assert!(validate_product_title("Sup Lotion").is_ok());
        assert!(validate_product_title("").is_err());
        assert!(validate_product_title("\t ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_units(2799)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_units(-1)).is_err());
    }

    #[test]
    fn test_validate_catalog_rejects_duplicate_ids() {
        let products = vec![
            Product::new(1, "Sup Skin", 2799, "product_1"),
            Product::new(1, "Sup Lotion", 3299, "product_2"),
        ];

        assert_eq!(
            validate_catalog(&products),
            Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_catalog_rejects_bad_fields() {
        let blank = vec![Product::new(1, " ", 2799, "product_1")];
        assert!(matches!(
            validate_catalog(&blank),
            Err(ValidationError::Required { .. })
        ));

        let free = vec![Product::new(1, "Sup Skin", 0, "product_1")];
        assert!(matches!(
            validate_catalog(&free),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_catalog_allows_empty() {
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_validate_categories() {
        assert!(validate_categories(&categories(&["All"])).is_ok());
        assert!(validate_categories(&categories(&["All", "Skin", "Hair"])).is_ok());

        assert!(matches!(
            validate_categories(&categories(&[])),
            Err(ValidationError::Missing { .. })
        ));
        assert!(matches!(
            validate_categories(&categories(&["All", "Skin", "Skin"])),
            Err(ValidationError::Duplicate { .. })
        ));
        assert!(matches!(
            validate_categories(&categories(&["All", ""])),
            Err(ValidationError::Required { .. })
        ));
        // The sentinel is matched exactly.
        assert!(matches!(
            validate_categories(&categories(&["all", "Skin"])),
            Err(ValidationError::Missing { .. })
        ));
    }
}
