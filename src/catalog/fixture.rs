//! Catalog fixtures
//!
//! Loads a whole catalog from a single YAML document with `restaurants`,
//! `categories` and `menu_items` lists. Menu items reference their restaurant and
//! category by id; dangling references are rejected.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{
    Catalog,
    models::{Category, MenuItem, Restaurant},
};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A menu item references a restaurant that is not in the catalog
    #[error("Menu item {item} references unknown restaurant {restaurant}")]
    UnknownRestaurant {
        /// Menu item id
        item: String,
        /// Referenced restaurant id
        restaurant: String,
    },

    /// A menu item references a category that is not in the catalog
    #[error("Menu item {item} references unknown category {category}")]
    UnknownCategory {
        /// Menu item id
        item: String,
        /// Referenced category id
        category: String,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    #[serde(default)]
    restaurants: Vec<Restaurant>,

    #[serde(default)]
    categories: Vec<Category>,

    #[serde(default)]
    menu_items: Vec<MenuItem>,
}

impl Catalog {
    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a menu item
    /// references an unknown restaurant or category.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Parse a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed, or if a menu item
    /// references an unknown restaurant or category.
    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;

        for item in &fixture.menu_items {
            if !fixture.restaurants.iter().any(|r| r.id == item.restaurant) {
                return Err(CatalogError::UnknownRestaurant {
                    item: item.id.clone(),
                    restaurant: item.restaurant.clone(),
                });
            }

            if let Some(category) = &item.category
                && !fixture.categories.iter().any(|c| &c.id == category)
            {
                return Err(CatalogError::UnknownCategory {
                    item: item.id.clone(),
                    category: category.clone(),
                });
            }
        }

        Ok(Catalog::new(
            fixture.restaurants,
            fixture.menu_items,
            fixture.categories,
        ))
    }
}
