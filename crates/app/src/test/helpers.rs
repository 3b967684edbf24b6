//! Test Helpers

use dasher::{
    catalog::{Catalog, CatalogError},
    orders::{CustomerDetails, OrderRequest},
};
use jiff::civil::date;

use crate::domain::orders::models::{Order, OrderUuid};

const CATALOG: &str = r"
restaurants:
  - id: r-pizza
    slug: pizza-palace
    title: Pizza Palace
    cuisine: { key: italian, value: Italian }
    delivery_fee: 2.99
    rating: 4.2
    is_active: true
  - id: r-sushi
    slug: sushi-bar
    title: Sushi Bar
    cuisine: { key: japanese, value: Japanese }
    delivery_fee: 4.5
    rating: 4.8
    is_active: true
  - id: r-closed
    slug: closed-cafe
    title: Closed Cafe
    rating: 5.0
    is_active: false
categories:
  - { id: c-mains, slug: mains, title: Mains }
  - { id: c-drinks, slug: drinks, title: Drinks }
menu_items:
  - { id: m-margherita, slug: margherita, title: Margherita, price: 12.0, restaurant: r-pizza, category: c-mains, is_available: true }
  - { id: m-cola, slug: cola, title: Cola, price: 2.5, restaurant: r-pizza, category: c-drinks, is_available: true }
  - { id: m-calzone, slug: calzone, title: Calzone, price: 14.0, restaurant: r-pizza, category: c-mains, is_available: false }
  - { id: m-nigiri, slug: nigiri, title: Nigiri, price: 9.5, restaurant: r-sushi, category: c-mains, is_available: true }
";

/// Two open restaurants, one closed, and a handful of menu items.
pub(crate) fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_yaml_str(CATALOG)
}

pub(crate) fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Ada Lovelace".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Analytical Way".to_string(),
        special_instructions: Some("Leave at the door".to_string()),
    }
}

/// A placed order wrapping `request`, as a collaborator would return it.
pub(crate) fn placed_order(request: OrderRequest) -> Order {
    Order {
        uuid: OrderUuid::now_v7(),
        request,
        status: dasher::orders::OrderStatus::Placed,
        order_date: date(2026, 1, 15),
    }
}
