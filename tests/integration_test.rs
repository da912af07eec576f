//! Full end-to-end tests with all real actors running.

use adminia::clients::ActorClient;
use adminia::lifecycle::OrderSystem;
use adminia::model::{
    OrderCreate, OrderItemRequest, OrderStatus, OrderUpdate, PaymentMethod, ProductCreate,
    ProductId, ProductUpdate, UserCreate, UserId,
};
use adminia::order_actor::OrderError;

async fn seed_customer(system: &OrderSystem, name: &str) -> UserId {
    system
        .user_client
        .create_user(UserCreate {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
        .expect("Failed to create user")
}

async fn seed_product(system: &OrderSystem, title: &str, price: f64, stock: u32) -> ProductId {
    system
        .product_client
        .create_product(ProductCreate {
            title: title.to_string(),
            sku: format!("SKU-{}", title.to_uppercase()),
            price,
            stock,
        })
        .await
        .expect("Failed to create product")
}

fn single_item_order(customer: UserId, product: ProductId, quantity: u32) -> OrderCreate {
    OrderCreate {
        customer,
        items: vec![OrderItemRequest {
            product_id: product,
            quantity,
        }],
        shipping: None,
        payment: PaymentMethod::Cash,
        notes: None,
    }
}

#[tokio::test]
async fn test_order_creation_snapshots_and_reserves() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Alice").await;

    // The worked example: [{A, price 10, qty 2}, {B, price 5, qty 1}].
    let product_a = seed_product(&system, "Widget", 10.0, 3).await;
    let product_b = seed_product(&system, "Gadget", 5.0, 8).await;

    let order_id = system
        .order_client
        .create_order(OrderCreate {
            customer: customer.clone(),
            items: vec![
                OrderItemRequest {
                    product_id: product_a.clone(),
                    quantity: 2,
                },
                OrderItemRequest {
                    product_id: product_b.clone(),
                    quantity: 1,
                },
            ],
            shipping: None,
            payment: PaymentMethod::Card,
            notes: Some("first order".to_string()),
        })
        .await
        .expect("Failed to create order");

    let order = system
        .order_client
        .get(order_id.clone())
        .await
        .unwrap()
        .expect("Order not found");

    assert_eq!(order.total, 25.0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].title, "Widget");
    assert_eq!(order.items[0].subtotal, 20.0);
    assert_eq!(order.items[1].subtotal, 5.0);
    assert!(order.number.0.starts_with("ORD-"));

    // Stock was reserved at creation time.
    assert_eq!(
        system.product_client.check_stock(product_a).await.unwrap(),
        1
    );
    assert_eq!(
        system.product_client.check_stock(product_b).await.unwrap(),
        7
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_total_is_immune_to_later_price_changes() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Bob").await;
    let product = seed_product(&system, "Widget", 10.0, 10).await;

    let order_id = system
        .order_client
        .create_order(single_item_order(customer, product.clone(), 2))
        .await
        .unwrap();

    // Reprice and rename the product after the fact.
    system
        .product_client
        .update_product(
            product.clone(),
            ProductUpdate {
                title: Some("Deluxe Widget".to_string()),
                price: Some(99.0),
                stock: None,
                active: None,
            },
        )
        .await
        .unwrap();

    let details = system
        .order_client
        .get_expanded(order_id)
        .await
        .unwrap()
        .expect("Order not found");

    // The order keeps its creation-time snapshot...
    assert_eq!(details.order.total, 20.0);
    assert_eq!(details.order.items[0].price, 10.0);
    assert_eq!(details.order.items[0].title, "Widget");
    // ...while the expanded reference shows the current catalog state.
    assert_eq!(details.products[0].price, 99.0);
    assert_eq!(details.products[0].title, "Deluxe Widget");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_order_is_rejected_and_persists_nothing() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Carol").await;

    let result = system
        .order_client
        .create_order(OrderCreate {
            customer,
            items: vec![],
            shipping: None,
            payment: PaymentMethod::Cash,
            notes: None,
        })
        .await;

    assert_eq!(result.unwrap_err(), OrderError::EmptyOrder);
    assert!(system.order_client.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_quantity_item_is_rejected() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Carla").await;
    let product = seed_product(&system, "Widget", 10.0, 5).await;

    let result = system
        .order_client
        .create_order(single_item_order(customer, product.clone(), 0))
        .await;

    assert_eq!(
        result.unwrap_err(),
        OrderError::InvalidQuantity {
            product: product.clone()
        }
    );
    assert_eq!(
        system.product_client.check_stock(product).await.unwrap(),
        5
    );
    assert!(system.order_client.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_insufficient_stock_rolls_back_earlier_reservations() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Dave").await;
    let product_a = seed_product(&system, "Widget", 10.0, 5).await;
    let product_b = seed_product(&system, "Gadget", 5.0, 1).await;

    let result = system
        .order_client
        .create_order(OrderCreate {
            customer,
            items: vec![
                OrderItemRequest {
                    product_id: product_a.clone(),
                    quantity: 2,
                },
                OrderItemRequest {
                    product_id: product_b.clone(),
                    quantity: 3,
                },
            ],
            shipping: None,
            payment: PaymentMethod::Cash,
            notes: None,
        })
        .await;

    assert_eq!(
        result.unwrap_err(),
        OrderError::InsufficientStock {
            product: product_b.clone(),
            requested: 3,
            available: 1,
        }
    );

    // The first item's decrement must not survive the failed request.
    assert_eq!(
        system.product_client.check_stock(product_a).await.unwrap(),
        5
    );
    assert_eq!(
        system.product_client.check_stock(product_b).await.unwrap(),
        1
    );
    assert!(system.order_client.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unavailable_product_rejects_order() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Erin").await;
    let product = seed_product(&system, "Widget", 10.0, 5).await;

    system
        .product_client
        .update_product(
            product.clone(),
            ProductUpdate {
                title: None,
                price: None,
                stock: None,
                active: Some(false),
            },
        )
        .await
        .unwrap();

    let result = system
        .order_client
        .create_order(single_item_order(customer.clone(), product.clone(), 1))
        .await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::ProductUnavailable(product.clone())
    );

    // A reference to a product that never existed fails the same way.
    let missing = ProductId(999);
    let result = system
        .order_client
        .create_order(single_item_order(customer, missing.clone(), 1))
        .await;
    assert_eq!(result.unwrap_err(), OrderError::ProductUnavailable(missing));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_customer_rejects_order() {
    let system = OrderSystem::new();
    let product = seed_product(&system, "Widget", 10.0, 5).await;

    let result = system
        .order_client
        .create_order(single_item_order(UserId(42), product.clone(), 1))
        .await;

    assert_eq!(
        result.unwrap_err(),
        OrderError::InvalidUser("user_42".to_string())
    );
    assert_eq!(
        system.product_client.check_stock(product).await.unwrap(),
        5
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_restores_stock_exactly_once() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Frank").await;
    let product = seed_product(&system, "Widget", 10.0, 3).await;

    let order_id = system
        .order_client
        .create_order(single_item_order(customer, product.clone(), 2))
        .await
        .unwrap();
    assert_eq!(
        system
            .product_client
            .check_stock(product.clone())
            .await
            .unwrap(),
        1
    );

    let cancelled = system
        .order_client
        .cancel_order(order_id.clone())
        .await
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(
        system
            .product_client
            .check_stock(product.clone())
            .await
            .unwrap(),
        3
    );

    // Re-cancelling is rejected; stock is not restored twice.
    let result = system.order_client.cancel_order(order_id).await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::InvalidTransition {
            from: OrderStatus::Cancelled,
            to: OrderStatus::Cancelled,
        }
    );
    assert_eq!(
        system.product_client.check_stock(product).await.unwrap(),
        3
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_of_delivered_order_is_rejected() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Grace").await;
    let product = seed_product(&system, "Widget", 10.0, 5).await;

    let order_id = system
        .order_client
        .create_order(single_item_order(customer, product.clone(), 2))
        .await
        .unwrap();

    for status in [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        system
            .order_client
            .advance_status(order_id.clone(), status)
            .await
            .unwrap();
    }

    let result = system.order_client.cancel_order(order_id).await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Cancelled,
        }
    );
    assert_eq!(
        system.product_client.check_stock(product).await.unwrap(),
        3
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_advance_enforces_forward_only_transitions() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Heidi").await;
    let product = seed_product(&system, "Widget", 10.0, 5).await;

    let order_id = system
        .order_client
        .create_order(single_item_order(customer, product, 1))
        .await
        .unwrap();

    // Skipping a state is rejected.
    let result = system
        .order_client
        .advance_status(order_id.clone(), OrderStatus::Shipped)
        .await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Shipped,
        }
    );

    // Cancellation cannot sneak in through the advance path.
    let result = system
        .order_client
        .advance_status(order_id.clone(), OrderStatus::Cancelled)
        .await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Cancelled,
        }
    );

    // The legal edge works, and backward moves are rejected afterwards.
    let order = system
        .order_client
        .advance_status(order_id.clone(), OrderStatus::Processing)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Processing);

    let result = system
        .order_client
        .advance_status(order_id, OrderStatus::Pending)
        .await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::InvalidTransition {
            from: OrderStatus::Processing,
            to: OrderStatus::Pending,
        }
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_skips_deleted_products() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Ivan").await;
    let kept = seed_product(&system, "Widget", 10.0, 5).await;
    let doomed = seed_product(&system, "Gadget", 5.0, 5).await;

    let order_id = system
        .order_client
        .create_order(OrderCreate {
            customer,
            items: vec![
                OrderItemRequest {
                    product_id: kept.clone(),
                    quantity: 1,
                },
                OrderItemRequest {
                    product_id: doomed.clone(),
                    quantity: 2,
                },
            ],
            shipping: None,
            payment: PaymentMethod::Cash,
            notes: None,
        })
        .await
        .unwrap();

    system.product_client.delete(doomed).await.unwrap();

    let cancelled = system.order_client.cancel_order(order_id).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(
        system.product_client.check_stock(kept).await.unwrap(),
        5
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_order_does_not_restore_stock() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Judy").await;
    let product = seed_product(&system, "Widget", 10.0, 5).await;

    let order_id = system
        .order_client
        .create_order(single_item_order(customer, product.clone(), 2))
        .await
        .unwrap();

    system.order_client.delete(order_id.clone()).await.unwrap();

    assert!(system
        .order_client
        .get(order_id.clone())
        .await
        .unwrap()
        .is_none());
    // Deletion is administrative removal, distinct from cancellation.
    assert_eq!(
        system.product_client.check_stock(product).await.unwrap(),
        3
    );

    let result = system.order_client.delete(order_id.clone()).await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::NotFound(order_id.to_string())
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_operations_on_missing_orders_fail_with_not_found() {
    let system = OrderSystem::new();
    let missing = adminia::model::OrderId(404);

    assert!(system
        .order_client
        .get(missing.clone())
        .await
        .unwrap()
        .is_none());
    assert!(system
        .order_client
        .get_expanded(missing.clone())
        .await
        .unwrap()
        .is_none());

    let result = system
        .order_client
        .advance_status(missing.clone(), OrderStatus::Processing)
        .await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::NotFound(missing.to_string())
    );

    let result = system.order_client.cancel_order(missing.clone()).await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::NotFound(missing.to_string())
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_orders_newest_first_and_per_customer() {
    let system = OrderSystem::new();
    let alice = seed_customer(&system, "Alice").await;
    let bob = seed_customer(&system, "Bob").await;
    let product = seed_product(&system, "Widget", 10.0, 100).await;

    let first = system
        .order_client
        .create_order(single_item_order(alice.clone(), product.clone(), 1))
        .await
        .unwrap();
    let second = system
        .order_client
        .create_order(single_item_order(bob.clone(), product.clone(), 1))
        .await
        .unwrap();
    let third = system
        .order_client
        .create_order(single_item_order(alice.clone(), product, 1))
        .await
        .unwrap();

    let all = system.order_client.list_orders().await.unwrap();
    let ids: Vec<_> = all.iter().map(|o| o.id.clone()).collect();
    assert_eq!(ids, vec![third.clone(), second.clone(), first.clone()]);

    let alices = system
        .order_client
        .list_orders_for_customer(alice)
        .await
        .unwrap();
    let ids: Vec<_> = alices.iter().map(|o| o.id.clone()).collect();
    assert_eq!(ids, vec![third, first]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_touches_metadata_but_not_items() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Mallory").await;
    let product = seed_product(&system, "Widget", 10.0, 5).await;

    let order_id = system
        .order_client
        .create_order(single_item_order(customer, product, 2))
        .await
        .unwrap();
    let before = system
        .order_client
        .get(order_id.clone())
        .await
        .unwrap()
        .unwrap();

    let after = system
        .order_client
        .update_order(
            order_id,
            OrderUpdate {
                notes: Some("ring the bell".to_string()),
                shipping: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(after.notes.as_deref(), Some("ring the bell"));
    assert_eq!(after.items, before.items);
    assert_eq!(after.total, before.total);
    assert_eq!(after.number, before.number);
    assert!(after.updated_at >= before.updated_at);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_expansion_reflects_current_customer_record() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Peggy").await;
    let product = seed_product(&system, "Widget", 10.0, 5).await;

    let order_id = system
        .order_client
        .create_order(single_item_order(customer.clone(), product, 1))
        .await
        .unwrap();

    system
        .user_client
        .update_user(
            customer,
            adminia::model::UserUpdate {
                name: Some("Peggy Ann".to_string()),
                email: None,
            },
        )
        .await
        .unwrap();

    let details = system
        .order_client
        .get_expanded(order_id)
        .await
        .unwrap()
        .expect("Order not found");
    assert_eq!(details.customer.unwrap().name, "Peggy Ann");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Niaj").await;
    // 15 orders of 2 units compete for 20 units of stock.
    let product = seed_product(&system, "Limited Widget", 10.0, 20).await;

    let mut handles = vec![];
    for _ in 0..15 {
        let order_client = system.order_client.clone();
        let customer = customer.clone();
        let product = product.clone();
        handles.push(tokio::spawn(async move {
            order_client
                .create_order(single_item_order(customer, product, 2))
                .await
        }));
    }

    let mut successful = 0;
    let mut out_of_stock = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(OrderError::InsufficientStock { .. }) => out_of_stock += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successful, 10, "Expected exactly 10 admitted orders");
    assert_eq!(out_of_stock, 5, "Expected the rest to be rejected");
    assert_eq!(
        system.product_client.check_stock(product).await.unwrap(),
        0
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_numbers_are_unique_under_concurrency() {
    let system = OrderSystem::new();
    let customer = seed_customer(&system, "Olivia").await;
    let product = seed_product(&system, "Widget", 10.0, 100).await;

    let mut handles = vec![];
    for _ in 0..25 {
        let order_client = system.order_client.clone();
        let customer = customer.clone();
        let product = product.clone();
        handles.push(tokio::spawn(async move {
            order_client
                .create_order(single_item_order(customer, product, 1))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let orders = system.order_client.list_orders().await.unwrap();
    assert_eq!(orders.len(), 25);

    let numbers: std::collections::HashSet<_> =
        orders.iter().map(|o| o.number.clone()).collect();
    assert_eq!(numbers.len(), 25, "order numbers must never collide");

    system.shutdown().await.unwrap();
}
