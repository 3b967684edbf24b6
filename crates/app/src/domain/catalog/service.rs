//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use dasher::{
    catalog::{Catalog, Category, MenuItem, Restaurant},
    items::LineItemDescriptor,
};
use mockall::automock;

use crate::domain::catalog::{
    errors::CatalogServiceError,
    models::{MenuSection, RestaurantMenu},
};

/// Serves a catalog loaded up front, typically from a YAML fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalogService {
    catalog: Arc<Catalog>,
}

impl FixtureCatalogService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[async_trait]
impl CatalogService for FixtureCatalogService {
    async fn list_restaurants(&self) -> Vec<Restaurant> {
        self.catalog.restaurants().into_iter().cloned().collect()
    }

    async fn restaurant_by_slug(&self, slug: &str) -> Result<Restaurant, CatalogServiceError> {
        self.catalog
            .restaurant_by_slug(slug)
            .cloned()
            .ok_or_else(|| CatalogServiceError::RestaurantNotFound(slug.to_string()))
    }

    async fn menu_items(&self, restaurant_id: &str) -> Vec<MenuItem> {
        self.catalog
            .menu_items(restaurant_id)
            .into_iter()
            .cloned()
            .collect()
    }

    async fn menu(&self, slug: &str) -> Result<RestaurantMenu, CatalogServiceError> {
        let restaurant = self.restaurant_by_slug(slug).await?;

        let sections = self
            .catalog
            .group_by_category(self.catalog.menu_items(&restaurant.id))
            .into_iter()
            .map(|(name, items)| MenuSection {
                name,
                items: items.into_iter().cloned().collect(),
            })
            .collect();

        Ok(RestaurantMenu {
            restaurant,
            sections,
        })
    }

    async fn categories(&self) -> Vec<Category> {
        self.catalog.categories().into_iter().cloned().collect()
    }

    async fn restaurants_in_category(&self, category_slug: &str) -> Vec<Restaurant> {
        self.catalog
            .restaurants_in_category(category_slug)
            .into_iter()
            .cloned()
            .collect()
    }

    async fn search_restaurants(&self, query: &str) -> Vec<Restaurant> {
        self.catalog
            .search_restaurants(query)
            .into_iter()
            .cloned()
            .collect()
    }

    async fn line_item(
        &self,
        menu_item_id: &str,
    ) -> Result<LineItemDescriptor, CatalogServiceError> {
        let item = self
            .catalog
            .menu_item(menu_item_id)
            .ok_or_else(|| CatalogServiceError::MenuItemNotFound(menu_item_id.to_string()))?;

        let restaurant = self
            .catalog
            .restaurant(&item.restaurant)
            .ok_or_else(|| CatalogServiceError::RestaurantNotFound(item.restaurant.clone()))?;

        if !item.is_available || !restaurant.is_active {
            return Err(CatalogServiceError::Unavailable(menu_item_id.to_string()));
        }

        Ok(item.line_item(restaurant))
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Active restaurants, best rated first.
    async fn list_restaurants(&self) -> Vec<Restaurant>;

    /// Find an active restaurant by its slug.
    async fn restaurant_by_slug(&self, slug: &str) -> Result<Restaurant, CatalogServiceError>;

    /// Available menu items of a restaurant, by title.
    async fn menu_items(&self, restaurant_id: &str) -> Vec<MenuItem>;

    /// A restaurant's menu grouped by category.
    async fn menu(&self, slug: &str) -> Result<RestaurantMenu, CatalogServiceError>;

    /// All categories, by title.
    async fn categories(&self) -> Vec<Category>;

    /// Active restaurants serving at least one item in the category.
    async fn restaurants_in_category(&self, category_slug: &str) -> Vec<Restaurant>;

    /// Active restaurants whose name or cuisine matches the query.
    async fn search_restaurants(&self, query: &str) -> Vec<Restaurant>;

    /// Cart descriptor for an orderable menu item.
    async fn line_item(&self, menu_item_id: &str)
    -> Result<LineItemDescriptor, CatalogServiceError>;
}
