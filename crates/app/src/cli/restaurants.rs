use clap::{Args, Subcommand};
use dasher::{
    catalog::{MenuItem, Restaurant},
    receipt::usd,
};
use dasher_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct RestaurantsCommand {
    #[command(subcommand)]
    command: RestaurantsSubcommand,
}

#[derive(Debug, Subcommand)]
enum RestaurantsSubcommand {
    /// List open restaurants, best rated first
    List,
    /// Find restaurants by name or cuisine
    Search(SearchArgs),
    /// Show a restaurant's menu
    Menu(SlugArgs),
    /// List restaurants serving a category
    Category(SlugArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Text to look for
    query: String,
}

#[derive(Debug, Args)]
struct SlugArgs {
    /// URL slug
    slug: String,
}

pub(crate) async fn run(command: RestaurantsCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        RestaurantsSubcommand::List => {
            print_restaurants(&ctx.catalog.list_restaurants().await);
        }
        RestaurantsSubcommand::Search(args) => {
            print_restaurants(&ctx.catalog.search_restaurants(&args.query).await);
        }
        RestaurantsSubcommand::Category(args) => {
            print_restaurants(&ctx.catalog.restaurants_in_category(&args.slug).await);
        }
        RestaurantsSubcommand::Menu(args) => {
            let menu = ctx
                .catalog
                .menu(&args.slug)
                .await
                .map_err(|error| format!("failed to load menu: {error}"))?;

            print_restaurant(&menu.restaurant);

            for section in menu.sections {
                println!();
                println!("{}", section.name);

                for item in &section.items {
                    print_menu_item(item);
                }
            }
        }
    }

    Ok(())
}

fn print_restaurants(restaurants: &[Restaurant]) {
    if restaurants.is_empty() {
        println!("no restaurants found");
        return;
    }

    for restaurant in restaurants {
        print_restaurant(restaurant);
    }
}

fn print_restaurant(restaurant: &Restaurant) {
    let cuisine = restaurant
        .cuisine
        .as_ref()
        .map_or("", |cuisine| cuisine.value.as_str());

    let rating = restaurant
        .rating
        .map_or_else(|| "-".to_string(), |rating| rating.to_string());

    println!(
        "{} [{}] {} | rating {} | {} | delivery {}",
        restaurant.display_name(),
        restaurant.slug,
        cuisine,
        rating,
        restaurant.delivery_time,
        usd(restaurant.delivery_fee),
    );
}

fn print_menu_item(item: &MenuItem) {
    let price = item.price.map_or_else(|| "-".to_string(), usd);

    println!("  {:<24} {:>10}  ({})", item.display_name(), price, item.id);
}
