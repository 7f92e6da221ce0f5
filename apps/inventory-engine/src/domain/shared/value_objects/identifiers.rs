//! Strongly-typed identifiers for domain entities.
//!
//! These prevent passing a category ID where a product ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier using UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(CategoryId, "Unique identifier for a product category.");
define_id!(SupplierId, "Unique identifier for a supplier.");
define_id!(ProductId, "Unique identifier for a catalog product.");
define_id!(OrderId, "Unique identifier for a placed order.");
define_id!(UserId, "Unique identifier for a user account.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_new_and_display() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
        assert_eq!(format!("{id}"), "prod-123");
    }

    #[test]
    fn order_id_generate_is_unique() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn category_id_from_string() {
        let id: CategoryId = "cat-1".into();
        assert_eq!(id.as_str(), "cat-1");

        let id: CategoryId = String::from("cat-2").into();
        assert_eq!(id.into_inner(), "cat-2");
    }

    #[test]
    fn product_ids_order_lexicographically() {
        let a = ProductId::new("a-product");
        let b = ProductId::new("b-product");
        assert!(a < b);
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = UserId::new("user-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"user-7\"");
    }
}
