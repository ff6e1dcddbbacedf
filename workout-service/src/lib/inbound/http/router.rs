use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_token;
use super::handlers::create_user;
use super::handlers::create_workout;
use super::handlers::delete_workout;
use super::handlers::get_current_user;
use super::handlers::get_workout;
use super::handlers::health_check;
use super::handlers::update_current_user;
use super::handlers::update_workout;
use super::middleware::authenticate;
use super::middleware::require_user;
use crate::domain::token::service::TokenService;
use crate::domain::user::service::UserService;
use crate::domain::workout::service::WorkoutService;
use crate::outbound::repositories::PostgresTokenRepository;
use crate::outbound::repositories::PostgresUserRepository;
use crate::outbound::repositories::PostgresWorkoutRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub token_service: Arc<TokenService<PostgresUserRepository, PostgresTokenRepository>>,
    pub workout_service: Arc<WorkoutService<PostgresWorkoutRepository>>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    token_service: Arc<TokenService<PostgresUserRepository, PostgresTokenRepository>>,
    workout_service: Arc<WorkoutService<PostgresWorkoutRepository>>,
    request_timeout: Duration,
) -> Router {
    let state = AppState {
        user_service,
        token_service,
        workout_service,
    };

    let public_routes = Router::new()
        .route("/users", post(create_user))
        .route("/tokens", post(create_token));

    let protected_routes = Router::new()
        .route("/users/me", get(get_current_user).put(update_current_user))
        .route("/workouts", post(create_workout))
        .route(
            "/workouts/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route_layer(middleware::from_fn(require_user));

    // Headers are left out of the span so bearer tokens never reach the log.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
