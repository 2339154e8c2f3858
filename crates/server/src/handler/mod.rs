mod admin;
mod auth;
mod cart;
mod food_item;
mod notification;
mod order;

use crate::state::AppState;
use anyhow::Result;
use axum::{Json, extract::DefaultBodyLimit, response::IntoResponse, routing::get};
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::admin::admin_routes;
pub use self::auth::auth_routes;
pub use self::cart::cart_routes;
pub use self::food_item::food_item_routes;
pub use self::notification::notification_routes;
pub use self::order::order_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_seller_handler,
        auth::login_seller_handler,
        auth::me_handler,

        food_item::get_food_items,
        food_item::get_food_items_by_category,
        food_item::get_my_food_items,
        food_item::create_food_item,
        food_item::update_food_item,
        food_item::update_food_item_availability,
        food_item::delete_food_item,

        cart::create_cart,
        cart::get_cart,
        cart::add_cart_item,
        cart::update_cart_item,
        cart::remove_cart_item,
        cart::clear_cart,

        order::checkout_handler,
        order::get_order,
        order::get_seller_orders,
        order::update_order_status,

        admin::get_sellers,
        admin::approve_seller,
        admin::reject_seller,
        admin::get_all_orders,

        notification::get_notifications,
        notification::mark_notification_read,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Seller registration and login"),
        (name = "FoodItem", description = "Menu browsing and seller menu management"),
        (name = "Cart", description = "Anonymous session carts"),
        (name = "Order", description = "Checkout and order lifecycle"),
        (name = "Admin", description = "Seller approval and oversight"),
        (name = "Notification", description = "Seller notifications"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
        components.add_security_scheme(
            "admin_key",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

/// The banner route the storefront has always answered on `/`.
pub async fn banner_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "FoodHome backend is running!",
        "endpoints": [
            "GET /api/food-items",
            "GET /api/food-items/category/:category",
            "POST /api/sellers/register",
            "POST /api/sellers/login",
            "POST /api/carts",
            "POST /api/orders"
        ]
    }))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(banner_handler))
            .merge(auth_routes(shared_state.clone()))
            .merge(food_item_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(admin_routes(shared_state.clone()))
            .merge(notification_routes(shared_state.clone()));

        // The storefront SPA is served from another origin.
        let router_with_layers = api_router
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
