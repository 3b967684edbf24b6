//! Catalog Models

use dasher::catalog::{MenuItem, Restaurant};

/// Menu items sharing a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// A restaurant with its menu split into sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub sections: Vec<MenuSection>,
}
