//! Route guard middleware.
//!
//! Runs before every handler. Protected views (checkout, account) are only
//! rendered for a signed-in shopper; everyone else is sent to the login page
//! with the requested path and query carried in `?from=`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::guard::{self, GuardDecision};
use crate::state::AppState;

/// Evaluate the navigation guard for the incoming request.
///
/// The session is read at the moment the request arrives; the lock is
/// released before the handler runs.
pub async fn route_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let requested = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), ToString::to_string);

    let is_authenticated = state.storefront().lock().await.session().is_authenticated();

    let decision = guard::evaluate_path(&requested, is_authenticated);
    match decision.redirect_uri() {
        Some(uri) => {
            tracing::debug!(requested = %requested, "Guarded route, redirecting to login");
            Redirect::to(&uri).into_response()
        }
        None => {
            debug_assert_eq!(decision, GuardDecision::Allowed);
            next.run(request).await
        }
    }
}
