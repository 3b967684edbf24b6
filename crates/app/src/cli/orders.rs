use clap::{Args, Subcommand};
use dasher::{orders::OrderStatus, receipt::usd};
use dasher_app::{
    context::AppContext,
    domain::orders::models::{Order, OrderUuid},
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List placed orders, newest first
    List,
    /// Show a single order
    Show(ShowArgs),
    /// Move an order to another status
    Status(StatusArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Order UUID
    uuid: OrderUuid,
}

#[derive(Debug, Args)]
struct StatusArgs {
    /// Order UUID
    uuid: OrderUuid,

    /// New status (placed, confirmed, preparing, ready, out-for-delivery, delivered, cancelled)
    status: OrderStatus,
}

pub(crate) async fn run(command: OrdersCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List => {
            let orders = ctx
                .orders
                .list_orders()
                .await
                .map_err(|error| format!("failed to list orders: {error}"))?;

            if orders.is_empty() {
                println!("no orders found");
            }

            for order in orders {
                print_order(&order);
                println!();
            }
        }
        OrdersSubcommand::Show(args) => {
            let order = ctx
                .orders
                .get_order(args.uuid)
                .await
                .map_err(|error| format!("failed to get order: {error}"))?;

            print_order(&order);
        }
        OrdersSubcommand::Status(args) => {
            let order = ctx
                .orders
                .update_order_status(args.uuid, args.status)
                .await
                .map_err(|error| format!("failed to update order: {error}"))?;

            print_order(&order);
        }
    }

    Ok(())
}

pub(crate) fn print_order(order: &Order) {
    let request = &order.request;

    println!("order_uuid: {}", order.uuid);
    println!("order_number: {}", request.order_number);
    println!("status: {}", order.status);
    println!("order_date: {}", order.order_date);
    println!("customer: {} ({})", request.customer_name, request.customer_phone);
    println!("deliver_to: {}", request.delivery_address);

    for item in &request.items {
        println!(
            "  {} x{} @ {} = {}",
            item.item_name,
            item.quantity,
            usd(item.price),
            usd(item.subtotal)
        );
    }

    println!("subtotal: {}", usd(request.subtotal));
    println!("delivery_fee: {}", usd(request.delivery_fee));
    println!("tax: {}", usd(request.tax));
    println!("total: {}", usd(request.total_amount));

    if !request.special_instructions.is_empty() {
        println!("instructions: {}", request.special_instructions);
    }
}
