//! Contact form route handlers.
//!
//! Messages are acknowledged and logged; nothing is sent.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use optimistics_core::Email;

use crate::filters;
use crate::routes::Layout;
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub error: Option<String>,
    pub success: bool,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Display the contact form.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    ContactTemplate {
        layout: Layout::from_storefront(&*state.storefront().lock().await),
        error: None,
        success: false,
        name: String::new(),
        email: String::new(),
        message: String::new(),
    }
}

/// Acknowledge a contact message.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<ContactForm>) -> Response {
    let layout = Layout::from_storefront(&*state.storefront().lock().await);

    let error = if Email::parse(&form.email).is_err() {
        Some("Please enter a valid email address.")
    } else if form.name.trim().is_empty() || form.message.trim().is_empty() {
        Some("Name and message are required.")
    } else {
        None
    };

    if let Some(error) = error {
        return (
            StatusCode::BAD_REQUEST,
            ContactTemplate {
                layout,
                error: Some(error.to_string()),
                success: false,
                name: form.name,
                email: form.email,
                message: form.message,
            },
        )
            .into_response();
    }

    tracing::info!(name = %form.name.trim(), "Contact message received");
    ContactTemplate {
        layout,
        error: None,
        success: true,
        name: String::new(),
        email: String::new(),
        message: String::new(),
    }
    .into_response()
}
