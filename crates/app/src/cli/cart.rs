use clap::{Args, Subcommand};
use dasher_app::context::AppContext;

use super::print_cart;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart and its totals
    Show,
    /// Add a menu item
    Add(AddArgs),
    /// Change an item's quantity; zero or less removes it
    Set(SetArgs),
    /// Remove an item
    Remove(RemoveArgs),
    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Menu item id
    menu_item_id: String,

    /// Units to add
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    quantity: u32,
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Menu item id
    item_id: String,

    /// New quantity
    #[arg(allow_negative_numbers = true)]
    quantity: i64,
}

#[derive(Debug, Args)]
struct RemoveArgs {
    /// Menu item id
    item_id: String,
}

pub(crate) async fn run(command: CartCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        CartSubcommand::Show => print_cart(&ctx.cart.load()),
        CartSubcommand::Add(args) => {
            let item = ctx
                .catalog
                .line_item(&args.menu_item_id)
                .await
                .map_err(|error| format!("failed to add item: {error}"))?;

            print_cart(&ctx.cart.add(item, args.quantity))
        }
        CartSubcommand::Set(args) => {
            print_cart(&ctx.cart.set_quantity(&args.item_id, args.quantity))
        }
        CartSubcommand::Remove(args) => print_cart(&ctx.cart.remove(&args.item_id)),
        CartSubcommand::Clear => {
            ctx.cart.clear();

            println!("cart cleared");

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: CartSubcommand,
    }

    fn add_quantity(args: &[&str]) -> Result<u32, Box<dyn Error>> {
        let argv = ["dasher", "add", "m-1"].into_iter().chain(args.iter().copied());

        match TestCli::try_parse_from(argv)?.command {
            CartSubcommand::Add(args) => Ok(args.quantity),
            other => Err(format!("expected add, got {other:?}").into()),
        }
    }

    #[test]
    fn add_quantity_defaults_to_one() -> TestResult {
        assert_eq!(add_quantity(&[])?, 1);
        assert_eq!(add_quantity(&["--quantity", "3"])?, 3);
        assert_eq!(add_quantity(&["-q", "2"])?, 2);

        Ok(())
    }

    #[test]
    fn add_rejects_zero_quantity() {
        assert!(add_quantity(&["--quantity", "0"]).is_err());
        assert!(add_quantity(&["--quantity", "-1"]).is_err());
    }

    #[test]
    fn set_accepts_negative_quantities() -> TestResult {
        let cli = TestCli::try_parse_from(["dasher", "set", "m-1", "-2"])?;

        assert!(matches!(
            cli.command,
            CartSubcommand::Set(SetArgs { quantity: -2, .. })
        ));

        Ok(())
    }
}
