//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::middleware::resolve_identity;
use crate::server::routes::{
    add_participant_handler, add_sale_item_handler, clerk_webhook_handler, create_event_handler,
    create_product_handler, delete_product_handler, event_analytics_handler,
    event_details_handler, event_sale_items_handler, get_product_handler, health_handler,
    list_events_handler, list_products_handler, list_users_handler, me_handler,
    my_events_handler, my_products_handler, participate_handler, product_availability_handler,
    products_page_handler, remove_participant_handler, remove_sale_item_handler,
    update_listing_status_handler, update_product_handler, users_page_handler,
};

/// Build the Axum application router.
///
/// Middleware layers apply in reverse order of addition, so tracing and
/// CORS wrap identity resolution, which wraps the handlers.
pub fn build_app(deps: Arc<ServerDeps>, allowed_origins: &[String]) -> Router {
    let cors = cors_layer(allowed_origins);

    Router::new()
        .route("/health", get(health_handler))
        .route("/clerk-users-webhook", post(clerk_webhook_handler))
        .route("/me", get(me_handler))
        .route("/users", get(list_users_handler))
        .route("/users/page", get(users_page_handler))
        .route(
            "/products",
            post(create_product_handler).get(list_products_handler),
        )
        .route("/products/mine", get(my_products_handler))
        .route("/products/page", get(products_page_handler))
        .route(
            "/products/:id",
            get(get_product_handler)
                .patch(update_product_handler)
                .delete(delete_product_handler),
        )
        .route(
            "/products/:id/availability",
            post(product_availability_handler),
        )
        .route(
            "/events",
            post(create_event_handler).get(list_events_handler),
        )
        .route("/events/mine", get(my_events_handler))
        .route("/events/:id", get(event_details_handler))
        .route("/events/:id/participants", post(add_participant_handler))
        .route(
            "/events/:id/participants/:user_id",
            delete(remove_participant_handler),
        )
        .route("/events/:id/participate", post(participate_handler))
        .route(
            "/events/:id/products",
            post(add_sale_item_handler).get(event_sale_items_handler),
        )
        .route("/events/:id/analytics", get(event_analytics_handler))
        .route(
            "/event-products/:id",
            patch(update_listing_status_handler).delete(remove_sale_item_handler),
        )
        .layer(middleware::from_fn_with_state(
            deps.clone(),
            resolve_identity,
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(deps)
}

/// CORS for the configured origins; an empty list opens the surface up
/// for development.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}
