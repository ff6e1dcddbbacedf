use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use http::HeaderValue;

use crate::domain::token::errors::TokenError;
use crate::domain::token::ports::TokenServicePort;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity resolved for the current request.
///
/// Inserted into request extensions by [`authenticate`] on every request that
/// gets past it.
#[derive(Debug, Clone)]
pub enum CurrentUser {
    Anonymous,
    Authenticated(User),
}

/// Identity of a request that passed [`require_user`].
///
/// Handlers take this as `Extension<AuthenticatedUser>`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerError {
    NotVisibleAscii,
    Malformed,
}

/// Extract the bearer token from the Authorization header.
///
/// Returns `Ok(None)` when the header is absent. A present header must be
/// exactly two space-separated parts, `Bearer` and a non-empty token.
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, BearerError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| BearerError::NotVisibleAscii)?;

    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        ["Bearer", token] if !token.is_empty() => Ok(Some(*token)),
        _ => Err(BearerError::Malformed),
    }
}

fn with_vary(mut response: Response) -> Response {
    response
        .headers_mut()
        .append(header::VARY, HeaderValue::from_static("authorization"));
    response
}

/// First stage: resolve the bearer token, if any, to a user.
///
/// Absent credentials are not an error here; see [`require_user`].
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(req.headers()) {
        Ok(token) => token.map(str::to_owned),
        Err(e) => {
            tracing::warn!(reason = ?e, "Rejected malformed Authorization header");
            return with_vary(
                ApiError::Unauthorized("invalid authorization".to_string()).into_response(),
            );
        }
    };

    let current = match token {
        None => CurrentUser::Anonymous,
        Some(token) => match state.token_service.authenticate_token(&token).await {
            Ok(user) => CurrentUser::Authenticated(user),
            Err(e) => {
                match &e {
                    TokenError::NotFound => tracing::warn!("Bearer token not found"),
                    TokenError::Expired => tracing::warn!("Bearer token expired"),
                    TokenError::OwnerNotFound(user_id) => {
                        tracing::warn!(user_id = %user_id, "Bearer token owner missing")
                    }
                    _ => {}
                }
                return with_vary(ApiError::from(e).into_response());
            }
        },
    };

    req.extensions_mut().insert(current);

    with_vary(next.run(req).await)
}

/// Second stage: reject anonymous requests on routes that need a user.
pub async fn require_user(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let user = match req.extensions().get::<CurrentUser>() {
        Some(CurrentUser::Authenticated(user)) => user.clone(),
        Some(CurrentUser::Anonymous) | None => {
            return Err(ApiError::Unauthorized(
                "you must be logged in to access this route".to_string(),
            ));
        }
    };

    req.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(req).await)
}
