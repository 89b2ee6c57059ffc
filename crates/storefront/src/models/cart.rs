//! Cart line items.

use serde::{Deserialize, Serialize};

use optimistics_core::{Price, ProductId};

/// The product fields a cart line carries with it.
///
/// Copied from the catalog at add time so the cart renders without a
/// catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    /// Product identifier, unique within the cart.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price in kobo.
    pub price: Price,
    /// Product image URL.
    pub image_url: String,
}

/// A line in the cart: a product and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: CartProduct,
    pub quantity: u32,
}

impl CartItem {
    /// The product id of this line.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Derived cart values broadcast to subscribers after every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of quantities across all lines.
    pub count: u64,
    /// Sum of line totals.
    pub total: Price,
}
