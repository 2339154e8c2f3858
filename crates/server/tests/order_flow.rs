use async_trait::async_trait;
use foodhome_server::{
    abstract_trait::{
        CartRepositoryTrait, NotificationRepositoryTrait, OrderCommandRepositoryTrait,
        OrderCommandServiceTrait, OrderQueryRepositoryTrait, SellerRepositoryTrait,
    },
    domain::requests::{CreateOrderRequest, RegisterSellerRequest},
    model::{
        CartItem, FoodCategory, NewCartItem, NewOrder, Notification, NotificationKind, Order,
        OrderItem, OrderStatus, Seller, SellerStatus,
    },
    service::{OrderCommandService, OrderCommandServiceDeps},
};
use shared::errors::{RepositoryError, ServiceError};
use std::sync::{Arc, Mutex};

const CART_ID: &str = "3e0f9a8a-1f4e-4ac2-9a39-1f0f4ed01f6b";

fn cart_line(food_item_id: i64, seller_id: i64, price: i64, quantity: i32) -> CartItem {
    CartItem {
        id: food_item_id,
        cart_id: CART_ID.to_string(),
        food_item_id,
        seller_id,
        name: format!("item-{food_item_id}"),
        price,
        quantity,
        image_url: String::new(),
        category: FoodCategory::Veg,
    }
}

fn checkout_request() -> CreateOrderRequest {
    CreateOrderRequest {
        cart_id: CART_ID.to_string(),
        customer_name: "Asha".into(),
        customer_email: "asha@example.com".into(),
        customer_phone: "9876543210".into(),
    }
}

#[derive(Default)]
struct StubCartRepository {
    items: Mutex<Vec<CartItem>>,
}

#[async_trait]
impl CartRepositoryTrait for StubCartRepository {
    async fn create_cart(&self) -> Result<String, RepositoryError> {
        Ok(CART_ID.to_string())
    }

    async fn cart_exists(&self, cart_id: &str) -> Result<bool, RepositoryError> {
        Ok(cart_id == CART_ID)
    }

    async fn items(&self, _cart_id: &str) -> Result<Vec<CartItem>, RepositoryError> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn upsert_item(
        &self,
        _cart_id: &str,
        _item: &NewCartItem,
    ) -> Result<(), RepositoryError> {
        unimplemented!("not exercised here")
    }

    async fn set_quantity(
        &self,
        _cart_id: &str,
        _food_item_id: i64,
        _quantity: i32,
    ) -> Result<(), RepositoryError> {
        unimplemented!("not exercised here")
    }

    async fn remove_item(
        &self,
        _cart_id: &str,
        _food_item_id: i64,
    ) -> Result<(), RepositoryError> {
        unimplemented!("not exercised here")
    }

    async fn clear(&self, _cart_id: &str) -> Result<(), RepositoryError> {
        self.items.lock().unwrap().clear();
        Ok(())
    }
}

/// Order rows shared between the query and command stubs, the way the real
/// repositories share a table.
type OrderStore = Arc<Mutex<Vec<Order>>>;

/// Captures what checkout writes; the cart is emptied in the same call,
/// mirroring the transactional repository.
struct RecordingOrderCommandRepository {
    orders: OrderStore,
    cart: Arc<StubCartRepository>,
}

#[async_trait]
impl OrderCommandRepositoryTrait for RecordingOrderCommandRepository {
    async fn checkout(
        &self,
        _cart_id: &str,
        order: &NewOrder,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        self.cart.items.lock().unwrap().clear();

        let mut orders = self.orders.lock().unwrap();
        let id = orders.len() as i64 + 1;

        let row = Order {
            id,
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            total_amount: order.total_amount,
            status: OrderStatus::Pending,
            seller_id: order.seller_id,
            created_at: None,
            updated_at: None,
        };
        orders.push(row.clone());

        let items = order
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| OrderItem {
                id: idx as i64 + 1,
                order_id: id,
                food_item_id: item.food_item_id,
                name: item.name.clone(),
                price: item.price,
                quantity: item.quantity,
            })
            .collect();

        Ok((row, items))
    }

    async fn update_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or(RepositoryError::NotFound)?;
        order.status = status;
        Ok(order.clone())
    }
}

struct StubOrderQueryRepository {
    orders: OrderStore,
}

#[async_trait]
impl OrderQueryRepositoryTrait for StubOrderQueryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        Ok(self.orders.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn items(&self, _order_id: i64) -> Result<Vec<OrderItem>, RepositoryError> {
        Ok(vec![])
    }

    async fn find_for_seller(
        &self,
        seller_id: i64,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.seller_id.is_none() || o.seller_id == Some(seller_id))
            .filter(|o| status.is_none_or(|wanted| o.status == wanted))
            .cloned()
            .collect())
    }

    async fn find_all(
        &self,
        _status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.lock().unwrap().clone())
    }
}

struct StubSellerRepository {
    seller: Seller,
}

impl StubSellerRepository {
    fn approved(id: i64) -> Self {
        Self {
            seller: Seller {
                id,
                name: "Rajesh Kumar".into(),
                email: "rajesh@example.com".into(),
                password: "$2b$12$irrelevant".into(),
                restaurant_name: "Spice Garden".into(),
                phone: "9876543210".into(),
                address: "MG Road, Hyderabad".into(),
                status: SellerStatus::Approved,
                created_at: None,
            },
        }
    }

    fn pending(id: i64) -> Self {
        let mut repo = Self::approved(id);
        repo.seller.status = SellerStatus::Pending;
        repo
    }
}

#[async_trait]
impl SellerRepositoryTrait for StubSellerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, RepositoryError> {
        Ok((self.seller.email == email).then(|| self.seller.clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Seller>, RepositoryError> {
        Ok((self.seller.id == id).then(|| self.seller.clone()))
    }

    async fn find_all(
        &self,
        _status: Option<SellerStatus>,
    ) -> Result<Vec<Seller>, RepositoryError> {
        Ok(vec![self.seller.clone()])
    }

    async fn create(
        &self,
        _req: &RegisterSellerRequest,
        _password_hash: &str,
    ) -> Result<Seller, RepositoryError> {
        unimplemented!("not exercised here")
    }

    async fn update_status(
        &self,
        _id: i64,
        _status: SellerStatus,
    ) -> Result<Seller, RepositoryError> {
        unimplemented!("not exercised here")
    }
}

#[derive(Default)]
struct RecordingNotificationRepository {
    notifications: Mutex<Vec<Notification>>,
}

#[async_trait]
impl NotificationRepositoryTrait for RecordingNotificationRepository {
    async fn create(
        &self,
        seller_id: i64,
        kind: NotificationKind,
        message: &str,
        order_id: Option<i64>,
    ) -> Result<Notification, RepositoryError> {
        let mut notifications = self.notifications.lock().unwrap();
        let notification = Notification {
            id: notifications.len() as i64 + 1,
            seller_id,
            kind,
            message: message.to_string(),
            order_id,
            is_read: false,
            created_at: None,
        };
        notifications.push(notification.clone());
        Ok(notification)
    }

    async fn find_by_seller(
        &self,
        seller_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>, RepositoryError> {
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.seller_id == seller_id && (!unread_only || !n.is_read))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Notification>, RepositoryError> {
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn mark_read(&self, id: i64) -> Result<Notification, RepositoryError> {
        let mut notifications = self.notifications.lock().unwrap();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(RepositoryError::NotFound)?;
        notification.is_read = true;
        Ok(notification.clone())
    }
}

struct Fixture {
    service: OrderCommandService,
    cart: Arc<StubCartRepository>,
    notifications: Arc<RecordingNotificationRepository>,
}

fn fixture(
    cart_items: Vec<CartItem>,
    seller_repo: StubSellerRepository,
    initial_orders: Vec<Order>,
) -> Fixture {
    let cart = Arc::new(StubCartRepository {
        items: Mutex::new(cart_items),
    });
    let notifications = Arc::new(RecordingNotificationRepository::default());
    let orders: OrderStore = Arc::new(Mutex::new(initial_orders));

    let service = OrderCommandService::new(OrderCommandServiceDeps {
        command: Arc::new(RecordingOrderCommandRepository {
            orders: orders.clone(),
            cart: cart.clone(),
        }),
        query: Arc::new(StubOrderQueryRepository { orders }),
        cart_repository: cart.clone(),
        seller_repository: Arc::new(seller_repo),
        notification_repository: notifications.clone(),
    });

    Fixture {
        service,
        cart,
        notifications,
    }
}

#[tokio::test]
async fn checkout_of_empty_cart_is_rejected() {
    let f = fixture(
        vec![],
        StubSellerRepository::approved(1),
        vec![],
    );

    let err = f.service.checkout(&checkout_request()).await.unwrap_err();

    match err {
        ServiceError::BadRequest(msg) => assert_eq!(msg, "Cart is empty"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn checkout_totals_lines_assigns_seller_and_notifies() {
    let f = fixture(
        vec![cart_line(1, 1, 250, 2), cart_line(2, 1, 80, 1)],
        StubSellerRepository::approved(1),
        vec![],
    );

    let response = f.service.checkout(&checkout_request()).await.unwrap();
    let order = response.data;

    assert_eq!(order.total_amount, 250 * 2 + 80);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.seller_id, Some(1));
    assert_eq!(order.items.len(), 2);

    let notifications = f.notifications.notifications.lock().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::NewOrder);
    assert_eq!(notifications[0].order_id, Some(order.id));
}

#[tokio::test]
async fn mixed_seller_checkout_leaves_order_unassigned() {
    let f = fixture(
        vec![cart_line(1, 1, 250, 1), cart_line(2, 2, 80, 1)],
        StubSellerRepository::approved(1),
        vec![],
    );

    let response = f.service.checkout(&checkout_request()).await.unwrap();

    assert_eq!(response.data.seller_id, None);
    assert!(f.notifications.notifications.lock().unwrap().is_empty());
}

#[tokio::test]
async fn checkout_empties_the_cart() {
    let f = fixture(
        vec![cart_line(1, 1, 250, 1)],
        StubSellerRepository::approved(1),
        vec![],
    );

    f.service.checkout(&checkout_request()).await.unwrap();

    assert!(f.cart.items.lock().unwrap().is_empty());
}

#[tokio::test]
async fn checkout_against_unknown_cart_is_not_found() {
    let f = fixture(
        vec![cart_line(1, 1, 250, 1)],
        StubSellerRepository::approved(1),
        vec![],
    );

    let mut req = checkout_request();
    req.cart_id = "00000000-0000-0000-0000-000000000000".into();

    let err = f.service.checkout(&req).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

fn pending_order(id: i64, seller_id: Option<i64>) -> Order {
    Order {
        id,
        customer_name: "Asha".into(),
        customer_email: "asha@example.com".into(),
        customer_phone: "9876543210".into(),
        total_amount: 250,
        status: OrderStatus::Pending,
        seller_id,
        created_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn seller_advances_own_order_one_step() {
    let f = fixture(
        vec![],
        StubSellerRepository::approved(1),
        vec![pending_order(1, Some(1))],
    );

    let response = f
        .service
        .update_status(1, 1, OrderStatus::Preparing)
        .await
        .unwrap();

    assert_eq!(response.data.status, OrderStatus::Preparing);
}

#[tokio::test]
async fn skipping_a_step_is_rejected() {
    let f = fixture(
        vec![],
        StubSellerRepository::approved(1),
        vec![pending_order(1, Some(1))],
    );

    let err = f
        .service
        .update_status(1, 1, OrderStatus::Completed)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::BadRequest(_)));
}

#[tokio::test]
async fn another_sellers_order_is_forbidden() {
    let f = fixture(
        vec![],
        StubSellerRepository::approved(2),
        vec![pending_order(1, Some(1))],
    );

    let err = f
        .service
        .update_status(2, 1, OrderStatus::Preparing)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Forbidden(_)));
}

#[tokio::test]
async fn pending_sellers_cannot_manage_orders() {
    let f = fixture(
        vec![],
        StubSellerRepository::pending(1),
        vec![pending_order(1, Some(1))],
    );

    let err = f
        .service
        .update_status(1, 1, OrderStatus::Preparing)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Forbidden(_)));
}
