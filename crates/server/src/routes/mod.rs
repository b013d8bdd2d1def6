use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth::require_bearer_token;
use crate::metrics::{metrics, track_requests};
use crate::state::ServerState;

pub mod custom_fields;
pub mod licenses;
pub mod offer_codes;
pub mod products;
pub mod resource_subscriptions;
pub mod sales;
pub mod subscribers;
pub mod user;
pub mod variants;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public catalogue routes plus the
/// seller-only routes behind bearer auth.
///
/// The product segment is always named `:id`; axum rejects sibling routes
/// that name the same segment differently.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/products", get(products::list_products).post(products::create_product))
        .route("/products/:id", get(products::get_product).delete(products::delete_product))
        .route("/products/:id/enable", put(products::enable_product))
        .route("/products/:id/disable", put(products::disable_product))
        .route(
            "/products/:id/variant_categories",
            get(variants::list_categories).post(variants::create_category),
        )
        .route(
            "/products/:id/variant_categories/:category_id",
            get(variants::get_category)
                .put(variants::edit_category)
                .delete(variants::delete_category),
        )
        .route(
            "/products/:id/variant_categories/:category_id/variants",
            get(variants::list_variants).post(variants::create_variant),
        )
        .route(
            "/products/:id/variant_categories/:category_id/variants/:variant_id",
            get(variants::get_variant)
                .put(variants::edit_variant)
                .delete(variants::delete_variant),
        )
        .route("/licenses/verify", post(licenses::verify))
        .route("/licenses/enable", put(licenses::enable))
        .route("/licenses/disable", put(licenses::disable))
        .route("/licenses/decrement_uses_count", put(licenses::decrement_uses_count))
        .route("/sales", get(sales::list_sales))
        .route("/sales/:id", get(sales::get_sale))
        .route("/sales/:id/mark_as_shipped", put(sales::mark_as_shipped))
        .route("/sales/:id/refund", put(sales::refund))
        .route(
            "/subscribers/products/:id/subscribers",
            get(subscribers::list_subscribers),
        )
        .route("/subscribers/subscribers/:id", get(subscribers::get_subscriber));

    // 需要卖家身份的路由
    let protected = Router::new()
        .route(
            "/products/:id/custom_fields",
            get(custom_fields::list_custom_fields).post(custom_fields::create_custom_field),
        )
        .route(
            "/products/:id/custom_fields/:name",
            get(custom_fields::get_custom_field)
                .put(custom_fields::edit_custom_field)
                .delete(custom_fields::delete_custom_field),
        )
        .route(
            "/products/:id/offer_codes",
            get(offer_codes::list_offer_codes).post(offer_codes::create_offer_code),
        )
        .route(
            "/products/:id/offer_codes/:code_id",
            get(offer_codes::get_offer_code)
                .put(offer_codes::edit_offer_code)
                .delete(offer_codes::delete_offer_code),
        )
        .route(
            "/resourceSubscriptions",
            get(resource_subscriptions::list_subscriptions)
                .put(resource_subscriptions::subscribe),
        )
        .route(
            "/resourceSubscriptions/:id",
            delete(resource_subscriptions::unsubscribe),
        )
        .route("/user", get(user::get_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer_token));

    public
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn(track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时记录状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
