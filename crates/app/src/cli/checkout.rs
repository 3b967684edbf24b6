use clap::Args;
use dasher::orders::CustomerDetails;
use dasher_app::context::AppContext;

use super::orders::print_order;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Customer name
    #[arg(long)]
    name: String,

    /// Contact phone number
    #[arg(long)]
    phone: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    /// Notes for the restaurant
    #[arg(long)]
    instructions: Option<String>,
}

pub(crate) async fn run(args: CheckoutArgs, ctx: &AppContext) -> Result<(), String> {
    let customer = CustomerDetails {
        name: args.name,
        phone: args.phone,
        address: args.address,
        special_instructions: args.instructions,
    };

    let order = ctx
        .checkout
        .place_order(&customer)
        .await
        .map_err(|error| format!("failed to place order: {error}"))?;

    println!("order placed");
    print_order(&order);

    Ok(())
}
