//! Route table and navigation guard.
//!
//! The guard is a pure function of the requested route and whether a
//! shopper is signed in at the moment of evaluation. It keeps no state
//! between navigations.
//!
//! ```text
//! requested ──► protected? ──no──► Allowed
//!                   │
//!                  yes ──► signed in? ──yes──► Allowed
//!                               │
//!                               no ──► Redirected { to: /login, from: requested }
//! ```

use optimistics_core::ProductId;

/// Every navigable view of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Shop,
    Product(ProductId),
    About,
    Gallery,
    Blog,
    Testimonials,
    Cart,
    Checkout,
    Policy,
    Wishlist,
    Login,
    Register,
    Contact,
    Faq,
    Loyalty,
    Account,
}

/// Metadata attached to each route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    /// Requires a signed-in shopper.
    pub protected: bool,
}

impl Route {
    /// Resolve a request path (query string ignored) to a route.
    ///
    /// Trailing slashes are tolerated. Returns `None` for paths outside the
    /// route table.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        let route = match trimmed {
            "" => Self::Home,
            "/shop" => Self::Shop,
            "/about" => Self::About,
            "/gallery" => Self::Gallery,
            "/blog" => Self::Blog,
            "/testimonials" => Self::Testimonials,
            "/cart" => Self::Cart,
            "/checkout" => Self::Checkout,
            "/policy" => Self::Policy,
            "/wishlist" => Self::Wishlist,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/contact" => Self::Contact,
            "/faq" => Self::Faq,
            "/loyalty" => Self::Loyalty,
            "/account" => Self::Account,
            other => {
                let id = other.strip_prefix("/product/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Self::Product(ProductId::new(id))
            }
        };
        Some(route)
    }

    /// The canonical path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Shop => "/shop".to_owned(),
            Self::Product(id) => format!("/product/{id}"),
            Self::About => "/about".to_owned(),
            Self::Gallery => "/gallery".to_owned(),
            Self::Blog => "/blog".to_owned(),
            Self::Testimonials => "/testimonials".to_owned(),
            Self::Cart => "/cart".to_owned(),
            Self::Checkout => "/checkout".to_owned(),
            Self::Policy => "/policy".to_owned(),
            Self::Wishlist => "/wishlist".to_owned(),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Contact => "/contact".to_owned(),
            Self::Faq => "/faq".to_owned(),
            Self::Loyalty => "/loyalty".to_owned(),
            Self::Account => "/account".to_owned(),
        }
    }

    /// Metadata for this route.
    #[must_use]
    pub const fn meta(&self) -> RouteMeta {
        RouteMeta {
            protected: matches!(self, Self::Checkout | Self::Account),
        }
    }
}

/// Outcome of evaluating a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Allowed,
    /// Send the shopper elsewhere, remembering where they were going.
    Redirected {
        /// Where to send the shopper.
        to: Route,
        /// The originally requested path and query.
        from: String,
    },
}

impl GuardDecision {
    /// The URI to redirect to, with the return path as a `from` parameter.
    #[must_use]
    pub fn redirect_uri(&self) -> Option<String> {
        match self {
            Self::Allowed => None,
            Self::Redirected { to, from } => Some(format!(
                "{}?from={}",
                to.path(),
                urlencoding::encode(from)
            )),
        }
    }
}

/// Decide whether a navigation to `route` may proceed.
///
/// `requested` is the full path and query the shopper asked for; it is
/// carried in the redirect so login can send them back.
#[must_use]
pub fn evaluate(route: &Route, requested: &str, is_authenticated: bool) -> GuardDecision {
    if route.meta().protected && !is_authenticated {
        return GuardDecision::Redirected {
            to: Route::Login,
            from: requested.to_owned(),
        };
    }
    GuardDecision::Allowed
}

/// Evaluate a raw request path. Paths outside the route table are allowed
/// through so the router can answer them (usually with a 404).
#[must_use]
pub fn evaluate_path(requested: &str, is_authenticated: bool) -> GuardDecision {
    Route::parse(requested).map_or(GuardDecision::Allowed, |route| {
        evaluate(&route, requested, is_authenticated)
    })
}

/// Where to go after a successful login.
///
/// Falls back to the account page when `from` is missing, not a same-site
/// path, or points back at login/register.
#[must_use]
pub fn return_path(from: Option<&str>) -> String {
    same_site_path(from)
        .filter(|path| !matches!(Route::parse(path), Some(Route::Login | Route::Register)))
        .map_or_else(|| Route::Account.path(), str::to_owned)
}

/// `path` if it is a non-empty absolute path on this site.
///
/// External URLs, protocol-relative (`//host`) and backslash forms are
/// rejected, as is any inner whitespace or control character: browsers
/// strip tabs and newlines, which would turn `/\t/host` into `//host`.
#[must_use]
pub fn same_site_path(path: Option<&str>) -> Option<&str> {
    path.map(str::trim).filter(|p| {
        p.starts_with('/')
            && !p.starts_with("//")
            && !p.contains('\\')
            && !p.chars().any(|c| c.is_whitespace() || c.is_control())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_table() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/shop?category=oils"), Some(Route::Shop));
        assert_eq!(Route::parse("/checkout/"), Some(Route::Checkout));
        assert_eq!(Route::parse("/faq"), Some(Route::Faq));
        assert_eq!(
            Route::parse("/product/castor-oil"),
            Some(Route::Product(ProductId::new("castor-oil")))
        );
        assert_eq!(Route::parse("/product/"), None);
        assert_eq!(Route::parse("/product/a/b"), None);
        assert_eq!(Route::parse("/admin"), None);
    }

    #[test]
    fn test_paths_roundtrip() {
        let routes = [
            Route::Home,
            Route::Shop,
            Route::Product(ProductId::new("coconut-oil")),
            Route::Checkout,
            Route::Account,
            Route::Loyalty,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_only_checkout_and_account_are_protected() {
        assert!(Route::Checkout.meta().protected);
        assert!(Route::Account.meta().protected);
        assert!(!Route::Cart.meta().protected);
        assert!(!Route::Wishlist.meta().protected);
        assert!(!Route::Login.meta().protected);
    }

    #[test]
    fn test_checkout_redirects_when_signed_out() {
        let decision = evaluate(&Route::Checkout, "/checkout", false);
        assert_eq!(
            decision,
            GuardDecision::Redirected {
                to: Route::Login,
                from: "/checkout".to_string()
            }
        );
        assert_eq!(
            decision.redirect_uri().as_deref(),
            Some("/login?from=%2Fcheckout")
        );
    }

    #[test]
    fn test_checkout_allowed_when_signed_in() {
        assert_eq!(
            evaluate(&Route::Checkout, "/checkout", true),
            GuardDecision::Allowed
        );
    }

    #[test]
    fn test_public_routes_always_allowed() {
        assert_eq!(evaluate_path("/cart", false), GuardDecision::Allowed);
        assert_eq!(evaluate_path("/product/x", false), GuardDecision::Allowed);
        assert_eq!(evaluate_path("/health", false), GuardDecision::Allowed);
    }

    #[test]
    fn test_requested_query_is_preserved() {
        let decision = evaluate_path("/account?tab=orders", false);
        assert_eq!(
            decision,
            GuardDecision::Redirected {
                to: Route::Login,
                from: "/account?tab=orders".to_string()
            }
        );
    }

    #[test]
    fn test_return_path() {
        assert_eq!(return_path(Some("/checkout")), "/checkout");
        assert_eq!(return_path(Some("/shop?category=oils")), "/shop?category=oils");
        assert_eq!(return_path(None), "/account");
        assert_eq!(return_path(Some("")), "/account");
        assert_eq!(return_path(Some("https://evil.example")), "/account");
        assert_eq!(return_path(Some("//evil.example")), "/account");
        assert_eq!(return_path(Some("/\t/evil.example")), "/account");
        assert_eq!(return_path(Some("/\n/evil.example")), "/account");
        assert_eq!(return_path(Some("/login")), "/account");
        assert_eq!(return_path(Some("/register?from=%2Fcheckout")), "/account");
    }

    #[test]
    fn test_same_site_path() {
        assert_eq!(same_site_path(Some(" /cart ")), Some("/cart"));
        assert_eq!(same_site_path(Some("/")), Some("/"));
        assert_eq!(same_site_path(Some("cart")), None);
        assert_eq!(same_site_path(Some("/\\evil.example")), None);
        assert_eq!(same_site_path(Some("/\r\n/evil.example")), None);
        assert_eq!(same_site_path(Some("/shop two")), None);
        assert_eq!(same_site_path(None), None);
    }
}
