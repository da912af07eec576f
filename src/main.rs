//! Demo walkthrough of the order subsystem: catalog setup, a multi-item
//! order, a fulfillment advance, and a cancellation with stock restoration.

use adminia::lifecycle::{setup_tracing, OrderSystem};
use adminia::model::{
    OrderCreate, OrderItemRequest, OrderStatus, PaymentMethod, ProductCreate, ShippingDetails,
    UserCreate,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting Adminia order system");
    let system = OrderSystem::new();

    // Seed a customer and two catalog products.
    let customer_id = async {
        info!("Creating customer");
        system
            .user_client
            .create_user(UserCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("customer_creation"))
    .await?;
    info!(customer_id = %customer_id, "Customer created");

    let widget_id = system
        .product_client
        .create_product(ProductCreate {
            title: "Widget".to_string(),
            sku: "WID-001".to_string(),
            price: 10.0,
            stock: 3,
        })
        .await
        .map_err(|e| e.to_string())?;
    let gadget_id = system
        .product_client
        .create_product(ProductCreate {
            title: "Gadget".to_string(),
            sku: "GAD-001".to_string(),
            price: 5.0,
            stock: 8,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%widget_id, %gadget_id, "Catalog seeded");

    // Place a multi-item order: 2 widgets + 1 gadget = 25.0 total.
    let order_result = async {
        info!("Placing order");
        system
            .order_client
            .create_order(OrderCreate {
                customer: customer_id.clone(),
                items: vec![
                    OrderItemRequest {
                        product_id: widget_id.clone(),
                        quantity: 2,
                    },
                    OrderItemRequest {
                        product_id: gadget_id.clone(),
                        quantity: 1,
                    },
                ],
                shipping: Some(ShippingDetails {
                    full_name: "Alice Example".to_string(),
                    address: "1 Main St".to_string(),
                    city: "Springfield".to_string(),
                    postal_code: "12345".to_string(),
                    phone: "555-0100".to_string(),
                }),
                payment: PaymentMethod::Card,
                notes: Some("Gift wrap, please".to_string()),
            })
            .await
    }
    .instrument(tracing::info_span!("order_processing"))
    .await;

    let order_id = match order_result {
        Ok(order_id) => order_id,
        Err(e) => {
            error!(error = %e, "Order placement failed");
            return Err(e.to_string());
        }
    };

    let details = system
        .order_client
        .get_expanded(order_id.clone())
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "order vanished".to_string())?;
    info!(
        order_id = %order_id,
        number = %details.order.number,
        total = details.order.total,
        customer = ?details.customer.as_ref().map(|c| c.name.as_str()),
        "Order placed"
    );

    // Advance along the fulfillment path.
    let order = system
        .order_client
        .advance_status(order_id.clone(), OrderStatus::Processing)
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order_id, status = %order.status, "Order advanced");

    // Cancel: stock goes back to the catalog.
    let cancelled = system
        .order_client
        .cancel_order(order_id.clone())
        .await
        .map_err(|e| e.to_string())?;
    let widget_stock = system
        .product_client
        .check_stock(widget_id.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(
        order_id = %order_id,
        status = %cancelled.status,
        widget_stock,
        "Order cancelled, stock restored"
    );

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
