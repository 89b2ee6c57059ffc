//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, no-store, etc.)
//! 5. Route guard (protected views require a signed-in shopper)

pub mod auth;
pub mod request_id;
pub mod security_headers;

pub use auth::route_guard;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
