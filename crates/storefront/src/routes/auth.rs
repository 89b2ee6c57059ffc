//! Authentication route handlers.
//!
//! Login and registration go through the session store; failures re-render
//! the form with an inline message and keep what the shopper typed.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::guard;
use crate::routes::Layout;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
    /// Where the route guard intercepted the shopper.
    pub from: Option<String>,
}

/// Registration form data.
#[derive(Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// Query parameters for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub from: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub layout: Layout,
    pub error: Option<String>,
    pub email: String,
    pub from: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub layout: Layout,
    pub error: Option<String>,
    pub name: String,
    pub email: String,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
#[instrument(skip(state))]
pub async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        layout: Layout::from_storefront(&*state.storefront().lock().await),
        error: None,
        email: String::new(),
        from: query.from,
    }
}

/// Handle login form submission.
///
/// On success redirects to the `from` path (default `/account`).
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let mut storefront = state.storefront().lock().await;

    match storefront.session_mut().login(&form.email, &form.password) {
        Ok(user) => {
            set_sentry_user(&user);
            Redirect::to(&guard::return_path(form.from.as_deref())).into_response()
        }
        Err(e) => {
            tracing::info!(error = %e, "Login rejected");
            LoginTemplate {
                layout: Layout::from_storefront(&storefront),
                error: Some(e.user_message().to_string()),
                email: form.email,
                from: form.from,
            }
            .into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
#[instrument(skip(state))]
pub async fn register_page(State(state): State<AppState>) -> impl IntoResponse {
    RegisterTemplate {
        layout: Layout::from_storefront(&*state.storefront().lock().await),
        error: None,
        name: String::new(),
        email: String::new(),
    }
}

/// Handle registration form submission.
///
/// On success the new shopper is signed in and sent to `/account`.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    let mut storefront = state.storefront().lock().await;

    match storefront
        .session_mut()
        .register(&form.name, &form.email, &form.password)
    {
        Ok(user) => {
            set_sentry_user(&user);
            Redirect::to("/account").into_response()
        }
        Err(e) => {
            tracing::info!(error = %e, "Registration rejected");
            RegisterTemplate {
                layout: Layout::from_storefront(&storefront),
                error: Some(e.user_message().to_string()),
                name: form.name,
                email: form.email,
            }
            .into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Sign out and return to the home page.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Redirect {
    state.storefront().lock().await.session_mut().logout();
    clear_sentry_user();

    Redirect::to("/")
}
