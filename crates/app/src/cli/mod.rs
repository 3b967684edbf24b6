use clap::{Parser, Subcommand};
use dasher::{cart::Cart, receipt::CartReceipt};
use dasher_app::{config::AppConfig, context::AppContext};

mod cart;
mod checkout;
mod orders;
mod restaurants;

#[derive(Debug, Parser)]
#[command(name = "dasher", about = "Dasher food delivery CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect and edit the cart
    Cart(cart::CartCommand),
    /// Browse restaurants and menus
    Restaurants(restaurants::RestaurantsCommand),
    /// Place an order for the cart
    Checkout(checkout::CheckoutArgs),
    /// Look up and update placed orders
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let ctx = AppContext::from_config(&self.config.storage)
            .map_err(|error| format!("failed to start: {error}"))?;

        match self.command {
            Commands::Cart(command) => cart::run(command, &ctx).await,
            Commands::Restaurants(command) => restaurants::run(command, &ctx).await,
            Commands::Checkout(args) => checkout::run(args, &ctx).await,
            Commands::Orders(command) => orders::run(command, &ctx).await,
        }
    }
}

fn print_cart(cart: &Cart) -> Result<(), String> {
    CartReceipt::new(cart)
        .write_to(std::io::stdout().lock())
        .map_err(|error| format!("failed to print cart: {error}"))
}
