//! Static content page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use optimistics_core::Price;

use crate::content::{
    self, BlogPost, FAQS, Faq, GALLERY, GalleryImage, LoyaltyTier, TESTIMONIALS, Testimonial,
};
use crate::filters;
use crate::routes::Layout;
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
}

/// Gallery page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/gallery.html")]
pub struct GalleryTemplate {
    pub layout: Layout,
    pub images: &'static [GalleryImage],
}

/// Blog index template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/blog.html")]
pub struct BlogTemplate {
    pub layout: Layout,
    pub posts: &'static [BlogPost],
}

/// Testimonials page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/testimonials.html")]
pub struct TestimonialsTemplate {
    pub layout: Layout,
    pub testimonials: &'static [Testimonial],
}

/// Shipping and returns policy template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/policy.html")]
pub struct PolicyTemplate {
    pub layout: Layout,
}

/// FAQ page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/faq.html")]
pub struct FaqTemplate {
    pub layout: Layout,
    pub faqs: &'static [Faq],
}

/// Loyalty programme template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/loyalty.html")]
pub struct LoyaltyTemplate {
    pub layout: Layout,
    pub cart_total: Price,
    /// Points the current cart would earn.
    pub potential_points: u64,
    pub naira_per_point: u64,
    pub tiers: &'static [LoyaltyTier],
    pub signup_bonus: u64,
}

async fn layout(state: &AppState) -> Layout {
    Layout::from_storefront(&*state.storefront().lock().await)
}

/// Display the About page.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> impl IntoResponse {
    AboutTemplate {
        layout: layout(&state).await,
    }
}

/// Display the Gallery page.
#[instrument(skip(state))]
pub async fn gallery(State(state): State<AppState>) -> impl IntoResponse {
    GalleryTemplate {
        layout: layout(&state).await,
        images: GALLERY,
    }
}

/// Display the Blog index.
#[instrument(skip(state))]
pub async fn blog(State(state): State<AppState>) -> impl IntoResponse {
    BlogTemplate {
        layout: layout(&state).await,
        posts: content::BLOG_POSTS,
    }
}

/// Display the Testimonials page.
#[instrument(skip(state))]
pub async fn testimonials(State(state): State<AppState>) -> impl IntoResponse {
    TestimonialsTemplate {
        layout: layout(&state).await,
        testimonials: TESTIMONIALS,
    }
}

/// Display the Policy page.
#[instrument(skip(state))]
pub async fn policy(State(state): State<AppState>) -> impl IntoResponse {
    PolicyTemplate {
        layout: layout(&state).await,
    }
}

/// Display the FAQ page.
#[instrument(skip(state))]
pub async fn faq(State(state): State<AppState>) -> impl IntoResponse {
    FaqTemplate {
        layout: layout(&state).await,
        faqs: FAQS,
    }
}

/// Display the Loyalty page with the points the current cart would earn.
#[instrument(skip(state))]
pub async fn loyalty(State(state): State<AppState>) -> impl IntoResponse {
    let storefront = state.storefront().lock().await;
    let cart_total = storefront.cart().total();

    LoyaltyTemplate {
        layout: Layout::from_storefront(&storefront),
        cart_total,
        potential_points: content::loyalty_points(cart_total.kobo()),
        naira_per_point: content::NAIRA_PER_POINT,
        tiers: content::LOYALTY_TIERS,
        signup_bonus: content::SIGNUP_BONUS_POINTS,
    }
}
