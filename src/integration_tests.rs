#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tokio::sync::mpsc;

    use crate::actor_framework::{FrameworkError, ResourceRequest};
    use crate::clients::{CustomerClient, OrderClient, ProductClient, SalesPersonClient, TailorClient};
    use crate::customer_actor::{CustomerAction, CustomerActionResult};
    use crate::domain::{
        Customer, LineItem, NewOrder, Order, OrderStatus, OrderType, PaymentRequest, PaymentType,
        Product, SalesPerson, Tailor,
    };
    use crate::inventory_actor::{InventoryError, ProductAction, ProductActionResult};
    use crate::mock_framework::{create_mock_client, expect_action, expect_create, expect_delete, expect_get};
    use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
    use crate::staff_actor::{
        SalesPersonAction, SalesPersonActionResult, StaffError, TailorAction, TailorActionResult,
    };

    struct Mocks {
        customer_rx: mpsc::Receiver<ResourceRequest<Customer>>,
        salesperson_rx: mpsc::Receiver<ResourceRequest<SalesPerson>>,
        tailor_rx: mpsc::Receiver<ResourceRequest<Tailor>>,
        product_rx: mpsc::Receiver<ResourceRequest<Product>>,
        order_rx: mpsc::Receiver<ResourceRequest<Order>>,
    }

    fn setup() -> (OrderClient, Mocks) {
        let (customer_inner, customer_rx) = create_mock_client::<Customer>(10);
        let (salesperson_inner, salesperson_rx) = create_mock_client::<SalesPerson>(10);
        let (tailor_inner, tailor_rx) = create_mock_client::<Tailor>(10);
        let (product_inner, product_rx) = create_mock_client::<Product>(10);
        let (order_inner, order_rx) = create_mock_client::<Order>(10);

        let client = OrderClient::new(
            order_inner,
            CustomerClient::new(customer_inner),
            SalesPersonClient::new(salesperson_inner),
            TailorClient::new(tailor_inner),
            ProductClient::new(product_inner),
        );
        (client, Mocks { customer_rx, salesperson_rx, tailor_rx, product_rx, order_rx })
    }

    fn customer() -> Customer {
        Customer {
            id: "customer_1".into(),
            name: "Amina Yusuf".into(),
            phone: "0700 111 222".into(),
            email: None,
            address: None,
            total_orders: 0,
            total_spent: Decimal::ZERO,
            orders_on_record: 0,
        }
    }

    fn salesperson() -> SalesPerson {
        SalesPerson {
            id: "salesperson_1".into(),
            name: "Grace".into(),
            phone: "0711 222 333".into(),
            email: None,
            total_orders: 0,
            total_sales_amount: Decimal::ZERO,
            orders_on_record: 0,
        }
    }

    fn tailor() -> Tailor {
        Tailor {
            id: "tailor_1".into(),
            name: "Joseph".into(),
            phone: "0733 444 555".into(),
            specialty: "Suits".into(),
            active_orders: 1,
            completed_orders: 0,
        }
    }

    fn new_order(items: Vec<LineItem>) -> NewOrder {
        NewOrder {
            order_type: OrderType::Stitching,
            customer_id: "customer_1".into(),
            salesperson_id: "salesperson_1".into(),
            items,
            initial_payment: None,
            notes: None,
            delivery_date: None,
        }
    }

    #[tokio::test]
    async fn test_order_creation_flow() {
        let (order_client, mut mocks) = setup();

        let order_task = tokio::spawn(async move {
            let mut order = new_order(vec![
                LineItem::new("Suit", "Menswear", Decimal::new(20000, 2), 1),
                LineItem::new("Tie", "Accessories", Decimal::new(1500, 2), 2).from_stock("product_1"),
            ]);
            order.initial_payment = Some(PaymentRequest::new(PaymentType::Visa, Decimal::new(10000, 2)));
            order_client.create_order(order).await
        });

        // Customer lookup
        let (customer_id, responder) = expect_get(&mut mocks.customer_rx).await.expect("Expected Customer Get");
        assert_eq!(customer_id, "customer_1");
        responder.send(Ok(Some(customer()))).unwrap();

        // Salesperson lookup
        let (sp_id, responder) = expect_get(&mut mocks.salesperson_rx).await.expect("Expected SalesPerson Get");
        assert_eq!(sp_id, "salesperson_1");
        responder.send(Ok(Some(salesperson()))).unwrap();

        // Only the stocked item reserves
        let (product_id, action, responder) =
            expect_action(&mut mocks.product_rx).await.expect("Expected Product Action");
        assert_eq!(product_id, "product_1");
        match action {
            ProductAction::Reserve(qty) => assert_eq!(qty, 2),
            _ => panic!("Unexpected action: {:?}", action),
        }
        responder.send(Ok(ProductActionResult::Reserved { remaining: 8 })).unwrap();

        // Order create carries the customer's name
        let (payload, responder) = expect_create(&mut mocks.order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.customer_name, "Amina Yusuf");
        assert_eq!(payload.items.len(), 2);
        responder.send(Ok("INV-00001".to_string())).unwrap();

        // Initial payment
        let (order_id, action, responder) = expect_action(&mut mocks.order_rx).await.expect("Expected Order Action");
        assert_eq!(order_id, "INV-00001");
        let OrderAction::AddPayment(payment) = action else {
            panic!("Unexpected action: {:?}", action);
        };
        assert_eq!(payment.amount, Decimal::new(10000, 2));
        let mut order = crate::order_actor::entity::tests::sample_order(OrderType::Stitching);
        let OrderActionResult::PaymentRecorded(transaction) =
            crate::actor_framework::Entity::handle_action(&mut order, OrderAction::AddPayment(payment)).unwrap()
        else {
            panic!("payment was not recorded");
        };
        responder.send(Ok(OrderActionResult::PaymentRecorded(transaction))).unwrap();

        // Aggregates, customer first
        let (_, action, responder) = expect_action(&mut mocks.customer_rx).await.expect("Expected Customer Action");
        match action {
            CustomerAction::RecordOrder { amount } => assert_eq!(amount, Decimal::new(23000, 2)),
            _ => panic!("Unexpected action: {:?}", action),
        }
        responder.send(Ok(CustomerActionResult::OrderRecorded(customer()))).unwrap();

        let (_, action, responder) =
            expect_action(&mut mocks.salesperson_rx).await.expect("Expected SalesPerson Action");
        match action {
            SalesPersonAction::RecordSale { amount } => assert_eq!(amount, Decimal::new(23000, 2)),
            _ => panic!("Unexpected action: {:?}", action),
        }
        responder.send(Ok(SalesPersonActionResult::SaleRecorded(salesperson()))).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(result, Ok("INV-00001".to_string()));
    }

    #[tokio::test]
    async fn test_failed_reservation_releases_earlier_items() {
        let (order_client, mut mocks) = setup();

        let order_task = tokio::spawn(async move {
            let order = new_order(vec![
                LineItem::new("Tie", "Accessories", Decimal::new(1500, 2), 2).from_stock("product_1"),
                LineItem::new("Scarf", "Accessories", Decimal::new(900, 2), 3).from_stock("product_2"),
            ]);
            order_client.create_order(order).await
        });

        let (_, responder) = expect_get(&mut mocks.customer_rx).await.expect("Expected Customer Get");
        responder.send(Ok(Some(customer()))).unwrap();
        let (_, responder) = expect_get(&mut mocks.salesperson_rx).await.expect("Expected SalesPerson Get");
        responder.send(Ok(Some(salesperson()))).unwrap();

        let (_, _, responder) = expect_action(&mut mocks.product_rx).await.expect("Expected first reservation");
        responder.send(Ok(ProductActionResult::Reserved { remaining: 3 })).unwrap();

        let (product_id, _, responder) =
            expect_action(&mut mocks.product_rx).await.expect("Expected second reservation");
        assert_eq!(product_id, "product_2");
        responder
            .send(Err(FrameworkError::Entity(InventoryError::InsufficientStock { requested: 3, available: 1 })))
            .unwrap();

        // The first reservation is handed back
        let (product_id, action, responder) =
            expect_action(&mut mocks.product_rx).await.expect("Expected Release");
        assert_eq!(product_id, "product_1");
        match action {
            ProductAction::Release(qty) => assert_eq!(qty, 2),
            _ => panic!("Unexpected action: {:?}", action),
        }
        responder.send(Ok(ProductActionResult::Released { stock: 5 })).unwrap();

        let result = order_task.await.unwrap();
        assert!(matches!(result, Err(OrderError::InsufficientStock(_))));
        assert!(mocks.order_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_unknown_customer_stops_the_flow() {
        let (order_client, mut mocks) = setup();

        let order_task = tokio::spawn(async move {
            let order = new_order(vec![LineItem::new("Suit", "Menswear", Decimal::new(20000, 2), 1)]);
            order_client.create_order(order).await
        });

        let (_, responder) = expect_get(&mut mocks.customer_rx).await.expect("Expected Customer Get");
        responder.send(Ok(None)).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(result, Err(OrderError::InvalidCustomer("customer_1".into())));
        assert!(mocks.salesperson_rx.try_recv().is_err());
        assert!(mocks.order_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_delivery_completes_tailor_work() {
        let (order_client, mut mocks) = setup();

        let advance_task = tokio::spawn(async move {
            order_client.advance_status("INV-00001".into(), OrderStatus::Ready).await
        });

        let (_, action, responder) = expect_action(&mut mocks.order_rx).await.expect("Expected Order Action");
        assert!(matches!(action, OrderAction::Advance { expected: OrderStatus::Ready }));
        let mut order = crate::order_actor::entity::tests::sample_order(OrderType::Stitching);
        order.tailor_id = Some("tailor_1".into());
        for expected in [OrderStatus::Confirmed, OrderStatus::Processing, OrderStatus::Tailoring, OrderStatus::Ready] {
            crate::actor_framework::Entity::handle_action(&mut order, OrderAction::Advance { expected }).unwrap();
        }
        responder.send(Ok(OrderActionResult::Advanced(order))).unwrap();

        let (tailor_id, action, responder) =
            expect_action(&mut mocks.tailor_rx).await.expect("Expected Tailor Action");
        assert_eq!(tailor_id, "tailor_1");
        assert!(matches!(action, TailorAction::CompleteOrder));
        responder.send(Ok(TailorActionResult::Completed(tailor()))).unwrap();

        let delivered = advance_task.await.unwrap().unwrap();
        assert_eq!(delivered.status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn test_invalid_deposit_rejected_before_stock_is_touched() {
        let (order_client, mut mocks) = setup();

        let order_task = tokio::spawn(async move {
            let mut order = new_order(vec![
                LineItem::new("Tie", "Accessories", Decimal::new(1500, 2), 1).from_stock("product_1"),
            ]);
            order.initial_payment = Some(PaymentRequest::new(PaymentType::Cash, Decimal::new(-50, 0)));
            order_client.create_order(order).await
        });

        let (_, responder) = expect_get(&mut mocks.customer_rx).await.expect("Expected Customer Get");
        responder.send(Ok(Some(customer()))).unwrap();
        let (_, responder) = expect_get(&mut mocks.salesperson_rx).await.expect("Expected SalesPerson Get");
        responder.send(Ok(Some(salesperson()))).unwrap();

        let result = order_task.await.unwrap();
        assert!(matches!(result, Err(OrderError::ValidationError(_))));
        assert!(mocks.product_rx.try_recv().is_err());
        assert!(mocks.order_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rejected_deposit_abandons_the_order() {
        let (order_client, mut mocks) = setup();

        let order_task = tokio::spawn(async move {
            let mut order = new_order(vec![
                LineItem::new("Tie", "Accessories", Decimal::new(1500, 2), 2).from_stock("product_1"),
            ]);
            order.initial_payment = Some(PaymentRequest::new(PaymentType::Cash, Decimal::new(1000, 2)));
            order_client.create_order(order).await
        });

        let (_, responder) = expect_get(&mut mocks.customer_rx).await.expect("Expected Customer Get");
        responder.send(Ok(Some(customer()))).unwrap();
        let (_, responder) = expect_get(&mut mocks.salesperson_rx).await.expect("Expected SalesPerson Get");
        responder.send(Ok(Some(salesperson()))).unwrap();
        let (_, _, responder) = expect_action(&mut mocks.product_rx).await.expect("Expected Reserve");
        responder.send(Ok(ProductActionResult::Reserved { remaining: 3 })).unwrap();
        let (_, responder) = expect_create(&mut mocks.order_rx).await.expect("Expected Order Create");
        responder.send(Ok("INV-00001".to_string())).unwrap();

        let (_, action, responder) = expect_action(&mut mocks.order_rx).await.expect("Expected AddPayment");
        assert!(matches!(action, OrderAction::AddPayment(_)));
        let rejection = OrderError::ValidationError("amount out of range".into());
        responder.send(Err(FrameworkError::Entity(rejection.clone()))).unwrap();

        // Cancelled, purged, stock handed back
        let (order_id, action, responder) = expect_action(&mut mocks.order_rx).await.expect("Expected Cancel");
        assert_eq!(order_id, "INV-00001");
        assert!(matches!(action, OrderAction::Cancel));
        let mut cancelled = crate::order_actor::entity::tests::sample_order(OrderType::Stitching);
        crate::actor_framework::Entity::handle_action(&mut cancelled, OrderAction::Cancel).unwrap();
        responder.send(Ok(OrderActionResult::Cancelled(cancelled))).unwrap();

        let (order_id, responder) = expect_delete(&mut mocks.order_rx).await.expect("Expected Delete");
        assert_eq!(order_id, "INV-00001");
        responder.send(Ok(())).unwrap();

        let (product_id, action, responder) = expect_action(&mut mocks.product_rx).await.expect("Expected Release");
        assert_eq!(product_id, "product_1");
        assert!(matches!(action, ProductAction::Release(2)));
        responder.send(Ok(ProductActionResult::Released { stock: 5 })).unwrap();

        assert_eq!(order_task.await.unwrap(), Err(rejection));
        // No aggregates for an order that does not exist
        assert!(mocks.customer_rx.try_recv().is_err());
        assert!(mocks.salesperson_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_missing_tailor_leaves_order_untouched() {
        let (order_client, mut mocks) = setup();

        let assign_task = tokio::spawn(async move {
            order_client.assign_tailor("INV-00001".into(), "tailor_1".into()).await
        });

        let (_, responder) = expect_get(&mut mocks.tailor_rx).await.expect("Expected Tailor Get");
        responder.send(Ok(Some(tailor()))).unwrap();

        let (_, responder) = expect_get(&mut mocks.order_rx).await.expect("Expected Order Get");
        let mut order = crate::order_actor::entity::tests::sample_order(OrderType::Stitching);
        order.tailor_id = Some("tailor_0".into());
        responder.send(Ok(Some(order))).unwrap();

        // Tailor removed between the check and the booking
        let (tailor_id, action, responder) = expect_action(&mut mocks.tailor_rx).await.expect("Expected Tailor Action");
        assert_eq!(tailor_id, "tailor_1");
        assert!(matches!(action, TailorAction::AssignOrder));
        responder.send(Err(FrameworkError::NotFound("tailor_1".into()))).unwrap();

        let result = assign_task.await.unwrap();
        assert!(matches!(result, Err(OrderError::InvalidTailor(_))));
        // Neither the order nor the previous tailor was touched
        assert!(mocks.order_rx.try_recv().is_err());
        assert!(mocks.tailor_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rejected_assignment_hands_booking_back() {
        let (order_client, mut mocks) = setup();

        let assign_task = tokio::spawn(async move {
            order_client.assign_tailor("INV-00001".into(), "tailor_1".into()).await
        });

        let (_, responder) = expect_get(&mut mocks.tailor_rx).await.expect("Expected Tailor Get");
        responder.send(Ok(Some(tailor()))).unwrap();
        let (_, responder) = expect_get(&mut mocks.order_rx).await.expect("Expected Order Get");
        responder
            .send(Ok(Some(crate::order_actor::entity::tests::sample_order(OrderType::Stitching))))
            .unwrap();

        let (_, action, responder) = expect_action(&mut mocks.tailor_rx).await.expect("Expected booking");
        assert!(matches!(action, TailorAction::AssignOrder));
        responder.send(Ok(TailorActionResult::Assigned(tailor()))).unwrap();

        // The order was delivered in the meantime
        let (_, action, responder) = expect_action(&mut mocks.order_rx).await.expect("Expected AssignTailor");
        assert!(matches!(action, OrderAction::AssignTailor(_)));
        let rejection = OrderError::InvalidTransition { from: OrderStatus::Delivered, action: "assign a tailor to" };
        responder.send(Err(FrameworkError::Entity(rejection.clone()))).unwrap();

        let (tailor_id, action, responder) = expect_action(&mut mocks.tailor_rx).await.expect("Expected release");
        assert_eq!(tailor_id, "tailor_1");
        assert!(matches!(action, TailorAction::ReleaseOrder));
        responder.send(Err(FrameworkError::Entity(StaffError::NoActiveOrders))).unwrap();

        assert_eq!(assign_task.await.unwrap(), Err(rejection));
    }
}
