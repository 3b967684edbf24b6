//! Catalog
//!
//! Restaurants, menu items and categories, with the listing and search rules the
//! storefront applies on top of the raw content store data.

use std::cmp::Reverse;

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;

pub mod fixture;
pub mod models;

pub use fixture::CatalogError;
pub use models::{Category, Cuisine, Image, MenuItem, Restaurant};

/// Group name for menu items without a category.
pub const UNCATEGORISED: &str = "Other";

/// An in-memory catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    menu_items: Vec<MenuItem>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from its parts.
    pub fn new(
        restaurants: Vec<Restaurant>,
        menu_items: Vec<MenuItem>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            restaurants,
            menu_items,
            categories,
        }
    }

    /// Active restaurants, best rated first. Unrated restaurants count as zero.
    pub fn restaurants(&self) -> Vec<&Restaurant> {
        let mut restaurants: Vec<&Restaurant> = self
            .restaurants
            .iter()
            .filter(|restaurant| restaurant.is_active)
            .collect();

        restaurants.sort_by_key(|restaurant| Reverse(restaurant.rating.unwrap_or(Decimal::ZERO)));

        restaurants
    }

    /// Find an active restaurant by slug.
    pub fn restaurant_by_slug(&self, slug: &str) -> Option<&Restaurant> {
        self.restaurants
            .iter()
            .find(|restaurant| restaurant.slug == slug && restaurant.is_active)
    }

    /// Find any restaurant by id, active or not.
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|restaurant| restaurant.id == id)
    }

    /// Find any menu item by id, available or not.
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id == id)
    }

    /// Available menu items of a restaurant, sorted by title.
    pub fn menu_items(&self, restaurant_id: &str) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self
            .menu_items
            .iter()
            .filter(|item| item.restaurant == restaurant_id && item.is_available)
            .collect();

        items.sort_by(|a, b| a.title.cmp(&b.title));

        items
    }

    /// All categories, sorted by title.
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();

        categories.sort_by(|a, b| a.title.cmp(&b.title));

        categories
    }

    /// Find a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Active restaurants with at least one menu item in the category with the given slug.
    pub fn restaurants_in_category(&self, category_slug: &str) -> Vec<&Restaurant> {
        let Some(category) = self
            .categories
            .iter()
            .find(|category| category.slug == category_slug)
        else {
            return Vec::new();
        };

        let restaurant_ids: FxHashSet<&str> = self
            .menu_items
            .iter()
            .filter(|item| item.category.as_deref() == Some(category.id.as_str()))
            .map(|item| item.restaurant.as_str())
            .collect();

        self.restaurants()
            .into_iter()
            .filter(|restaurant| restaurant_ids.contains(restaurant.id.as_str()))
            .collect()
    }

    /// Active restaurants whose name or cuisine contains `query`, ignoring case.
    pub fn search_restaurants(&self, query: &str) -> Vec<&Restaurant> {
        let query = query.to_lowercase();

        self.restaurants()
            .into_iter()
            .filter(|restaurant| {
                restaurant.display_name().to_lowercase().contains(&query)
                    || restaurant
                        .cuisine
                        .as_ref()
                        .is_some_and(|cuisine| cuisine.value.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Group menu items by category name, keeping the order groups are first seen in.
    pub fn group_by_category<'a>(
        &self,
        items: impl IntoIterator<Item = &'a MenuItem>,
    ) -> Vec<(String, Vec<&'a MenuItem>)> {
        let mut groups: Vec<(String, Vec<&'a MenuItem>)> = Vec::new();

        for item in items {
            let name = item
                .category
                .as_deref()
                .and_then(|id| self.category(id))
                .map_or(UNCATEGORISED, Category::display_name);

            if let Some((_, group)) = groups.iter_mut().find(|(group, _)| group.as_str() == name) {
                group.push(item);
            } else {
                groups.push((name.to_string(), vec![item]));
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r#"
categories:
  - { id: c-mains, slug: mains, title: Mains }
  - { id: c-desserts, slug: desserts, title: Desserts, name: Sweet Things }
  - { id: c-drinks, slug: drinks, title: Drinks }
restaurants:
  - id: r-pizza
    slug: pizza-palace
    title: Pizza Palace
    cuisine: { key: italian, value: Italian }
    delivery_fee: 2.99
    rating: 4.2
    is_active: true
  - id: r-sushi
    slug: sushi-go
    title: Sushi Go
    cuisine: { key: japanese, value: Japanese }
    delivery_fee: 3.5
    rating: 4.8
    is_active: true
  - id: r-tacos
    slug: taco-town
    title: Taco Town
    cuisine: { key: mexican, value: Mexican }
    delivery_fee: 1.99
    is_active: true
  - id: r-closed
    slug: closed-cafe
    title: Closed Cafe
    rating: 5.0
    is_active: false
menu_items:
  - { id: m-marg, slug: margherita, title: Margherita, price: 11.5, restaurant: r-pizza, category: c-mains, is_available: true }
  - { id: m-tira, slug: tiramisu, title: Tiramisu, price: 6.0, restaurant: r-pizza, category: c-desserts, is_available: true }
  - { id: m-cal, slug: calzone, title: Calzone, price: 12.0, restaurant: r-pizza, category: c-mains, is_available: true }
  - { id: m-soda, slug: soda, title: Soda, price: 2.0, restaurant: r-pizza, is_available: true }
  - { id: m-gone, slug: gone, title: Anchovy Special, price: 9.0, restaurant: r-pizza, category: c-mains, is_available: false }
  - { id: m-roll, slug: roll, title: California Roll, price: 8.0, restaurant: r-sushi, category: c-mains, is_available: true }
  - { id: m-mochi, slug: mochi, title: Mochi, price: 4.0, restaurant: r-closed, category: c-desserts, is_available: true }
"#;

    fn catalog() -> Result<Catalog, CatalogError> {
        Catalog::from_yaml_str(CATALOG)
    }

    fn slugs(restaurants: &[&Restaurant]) -> Vec<String> {
        restaurants.iter().map(|r| r.slug.clone()).collect()
    }

    #[test]
    fn restaurants_are_active_and_sorted_by_rating() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            slugs(&catalog.restaurants()),
            ["sushi-go", "pizza-palace", "taco-town"]
        );

        Ok(())
    }

    #[test]
    fn restaurant_by_slug_hides_inactive() -> TestResult {
        let catalog = catalog()?;

        assert!(catalog.restaurant_by_slug("pizza-palace").is_some());
        assert!(catalog.restaurant_by_slug("closed-cafe").is_none());
        assert!(catalog.restaurant("r-closed").is_some());

        Ok(())
    }

    #[test]
    fn menu_items_are_available_and_sorted_by_title() -> TestResult {
        let catalog = catalog()?;

        let titles: Vec<_> = catalog
            .menu_items("r-pizza")
            .iter()
            .map(|item| item.title.as_str())
            .collect();

        assert_eq!(titles, ["Calzone", "Margherita", "Soda", "Tiramisu"]);

        Ok(())
    }

    #[test]
    fn categories_sorted_by_title() -> TestResult {
        let catalog = catalog()?;

        let titles: Vec<_> = catalog.categories().iter().map(|c| c.title.as_str()).collect();

        assert_eq!(titles, ["Desserts", "Drinks", "Mains"]);

        Ok(())
    }

    #[test]
    fn restaurants_in_category_only_lists_active_matches() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            slugs(&catalog.restaurants_in_category("mains")),
            ["sushi-go", "pizza-palace"]
        );
        assert_eq!(
            slugs(&catalog.restaurants_in_category("desserts")),
            ["pizza-palace"]
        );
        assert!(catalog.restaurants_in_category("drinks").is_empty());
        assert!(catalog.restaurants_in_category("unknown").is_empty());

        Ok(())
    }

    #[test]
    fn search_matches_name_or_cuisine_case_insensitively() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(slugs(&catalog.search_restaurants("PIZZA")), ["pizza-palace"]);
        assert_eq!(slugs(&catalog.search_restaurants("japan")), ["sushi-go"]);
        assert!(catalog.search_restaurants("closed").is_empty());

        Ok(())
    }

    #[test]
    fn group_by_category_keeps_first_seen_order() -> TestResult {
        let catalog = catalog()?;

        let groups = catalog.group_by_category(catalog.menu_items("r-pizza"));

        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|(name, items)| {
                (
                    name.as_str(),
                    items.iter().map(|item| item.id.as_str()).collect(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            [
                ("Mains", vec!["m-cal", "m-marg"]),
                ("Other", vec!["m-soda"]),
                ("Sweet Things", vec!["m-tira"]),
            ]
        );

        Ok(())
    }
}
