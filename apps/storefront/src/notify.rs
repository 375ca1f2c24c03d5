//! # Notifications
//!
//! Snackbar texts and badge labels shown after gestures.
//!
//! The renderer decides how long and where these show. The texts
//! themselves are fixed here so every renderer says the same thing.

/// "{title} added to cart"
pub fn added_to_cart(title: &str) -> String {
    format!("{} added to cart", title)
}

/// "{title} removed from cart"
pub fn removed_from_cart(title: &str) -> String {
    format!("{} removed from cart", title)
}

/// "{title} added to favorites"
pub fn added_to_favorites(title: &str) -> String {
    format!("{} added to favorites", title)
}

/// "{title} removed from favorites"
pub fn removed_from_favorites(title: &str) -> String {
    format!("{} removed from favorites", title)
}

/// "Viewing {title}"
pub fn viewing(title: &str) -> String {
    format!("Viewing {}", title)
}

/// Shown when the search icon is tapped.
pub fn search_opened() -> String {
    "Search opened".to_string()
}

/// Summary shown when the cart icon is tapped.
pub fn cart_summary(count: usize) -> String {
    if count == 0 {
        "Cart is empty".to_string()
    } else {
        format!("Cart: {} items", count)
    }
}

/// Summary shown when the favorites icon is tapped.
pub fn favorites_summary(count: usize) -> String {
    if count == 0 {
        "No favorites".to_string()
    } else {
        format!("Favorites: {} items", count)
    }
}

/// Icon badge text. Hidden while the count is zero.
pub fn badge(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}
