//! Cart Example
//!
//! Fills an in-memory cart from a small catalog and prints the receipt.

use std::io;

use anyhow::Result;

use dasher::prelude::*;

const CATALOG: &str = r"
restaurants:
  - id: r-diner
    slug: diner
    title: Sunrise Diner
    delivery_fee: 4.99
    rating: 4.5
    is_active: true
menu_items:
  - { id: m-pancakes, slug: pancakes, title: Pancakes, price: 10.0, restaurant: r-diner, is_available: true }
  - { id: m-coffee, slug: coffee, title: Coffee, price: 3.5, restaurant: r-diner, is_available: true }
";

/// Cart Example
pub fn main() -> Result<()> {
    let catalog = Catalog::from_yaml_str(CATALOG)?;
    let store = CartStore::new(MemoryStorage::new());

    let restaurant = catalog
        .restaurant_by_slug("diner")
        .ok_or_else(|| anyhow::anyhow!("diner missing from catalog"))?;

    for item in catalog.menu_items(&restaurant.id) {
        store.add(item.line_item(restaurant), 1);
    }

    store.set_quantity("m-pancakes", 2);

    let cart = store.load();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    CartReceipt::new(&cart).write_to(&mut handle)?;

    Ok(())
}
