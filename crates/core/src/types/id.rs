//! Newtype IDs for type-safe entity references.
//!
//! Catalog, shopper, and order identifiers are all opaque strings in
//! persisted snapshots. The `define_id!` macro wraps each one in its own
//! type so a product id can never be passed where a user id is expected.

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `Display`, `From<String>`, `From<&str>` and `AsRef<str>`
///
/// # Example
///
/// ```rust
/// # use optimistics_core::define_id;
/// define_id!(SkuId);
/// define_id!(BasketId);
///
/// let sku = SkuId::new("castor-oil");
/// let basket = BasketId::new("castor-oil");
///
/// assert_eq!(sku.as_str(), basket.as_str());
/// // These are different types, so this won't compile:
/// // let _: SkuId = basket;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(UserId);
define_id!(ProductId);
define_id!(OrderId);

impl UserId {
    /// Generate a fresh, globally unique user ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_user_ids_are_unique() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = ProductId::new("shea-butter");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"shea-butter\"");

        let back: ProductId = serde_json::from_str("\"shea-butter\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display_matches_inner_value() {
        assert_eq!(OrderId::from("ORD-12345").to_string(), "ORD-12345");
    }
}
