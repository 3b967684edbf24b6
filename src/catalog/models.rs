//! Catalog Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::items::{LineItemDescriptor, RestaurantRef};

/// Hosted image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Original asset URL
    pub url: String,

    /// URL of the image-processing proxy for the same asset
    pub imgix_url: String,
}

/// Cuisine selector value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuisine {
    /// Machine key
    pub key: String,

    /// Display label
    pub value: String,
}

/// Restaurant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Restaurant identifier
    pub id: String,

    /// URL slug
    pub slug: String,

    /// Object title, used when no name is set
    pub title: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Cuisine type
    #[serde(default)]
    pub cuisine: Option<Cuisine>,

    /// Street address
    #[serde(default)]
    pub address: String,

    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Flat delivery fee
    #[serde(default, with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,

    /// Minimum order value
    #[serde(default, with = "rust_decimal::serde::float")]
    pub minimum_order: Decimal,

    /// Human readable delivery estimate, e.g. "25-35 min"
    #[serde(default)]
    pub delivery_time: String,

    /// Header image
    #[serde(default)]
    pub image: Option<Image>,

    /// Average rating
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub rating: Option<Decimal>,

    /// Whether the restaurant is currently listed
    #[serde(default)]
    pub is_active: bool,
}

impl Restaurant {
    /// Display name, falling back to the title.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.title)
    }

    /// Snapshot stored on cart lines.
    pub fn snapshot(&self) -> RestaurantRef {
        RestaurantRef::new(&self.id, self.display_name(), self.delivery_fee)
    }
}

/// Menu category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    pub id: String,

    /// URL slug
    pub slug: String,

    /// Object title, used when no name is set
    pub title: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    /// Display name, falling back to the title.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.title)
    }
}

/// Menu item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Menu item identifier
    pub id: String,

    /// URL slug
    pub slug: String,

    /// Object title, used when no name is set
    pub title: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,

    /// Id of the restaurant serving this item
    pub restaurant: String,

    /// Id of the item's category
    #[serde(default)]
    pub category: Option<String>,

    /// Food photo
    #[serde(default)]
    pub image: Option<Image>,

    /// Whether the item can currently be ordered
    #[serde(default)]
    pub is_available: bool,

    /// Energy content
    #[serde(default)]
    pub calories: Option<u32>,

    /// Comma separated ingredient list
    #[serde(default)]
    pub ingredients: Option<String>,
}

impl MenuItem {
    /// Display name, falling back to the title.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.title)
    }

    /// Cart descriptor for this item as sold by `restaurant`.
    ///
    /// Items without a price are added at zero.
    pub fn line_item(&self, restaurant: &Restaurant) -> LineItemDescriptor {
        LineItemDescriptor {
            id: self.id.clone(),
            name: self.display_name().to_string(),
            unit_price: self.price.unwrap_or(Decimal::ZERO),
            image: self.image.as_ref().map(|image| image.imgix_url.clone()),
            restaurant: restaurant.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: Option<&str>) -> Restaurant {
        Restaurant {
            id: "r1".to_string(),
            slug: "pizza-palace".to_string(),
            title: "Pizza Palace Object".to_string(),
            name: name.map(str::to_string),
            description: None,
            cuisine: None,
            address: "1 Main St".to_string(),
            phone: None,
            delivery_fee: Decimal::new(399, 2),
            minimum_order: Decimal::from(10),
            delivery_time: "30 min".to_string(),
            image: None,
            rating: None,
            is_active: true,
        }
    }

    fn menu_item() -> MenuItem {
        MenuItem {
            id: "m1".to_string(),
            slug: "margherita".to_string(),
            title: "Margherita Title".to_string(),
            name: None,
            description: None,
            price: None,
            restaurant: "r1".to_string(),
            category: None,
            image: Some(Image {
                url: "https://cdn.example/m.jpg".to_string(),
                imgix_url: "https://imgix.example/m.jpg".to_string(),
            }),
            is_available: true,
            calories: None,
            ingredients: None,
        }
    }

    #[test]
    fn line_item_falls_back_to_title_and_zero_price() {
        let descriptor = menu_item().line_item(&restaurant(None));

        assert_eq!(descriptor.id, "m1");
        assert_eq!(descriptor.name, "Margherita Title");
        assert_eq!(descriptor.unit_price, Decimal::ZERO);
        assert_eq!(
            descriptor.image.as_deref(),
            Some("https://imgix.example/m.jpg")
        );
        assert_eq!(descriptor.restaurant.name, "Pizza Palace Object");
        assert_eq!(descriptor.restaurant.delivery_fee, Decimal::new(399, 2));
    }

    #[test]
    fn line_item_prefers_names_and_price() {
        let mut item = menu_item();
        item.name = Some("Margherita".to_string());
        item.price = Some(Decimal::new(1250, 2));

        let descriptor = item.line_item(&restaurant(Some("Pizza Palace")));

        assert_eq!(descriptor.name, "Margherita");
        assert_eq!(descriptor.unit_price, Decimal::new(1250, 2));
        assert_eq!(descriptor.restaurant.name, "Pizza Palace");
    }
}
