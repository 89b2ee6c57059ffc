//! Past orders shown in the account area.
//!
//! There is no order backend; history is a fixed sample.

use optimistics_core::{OrderId, OrderStatus, Price};

/// A previously placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastOrder {
    pub id: OrderId,
    /// ISO date the order was placed.
    pub date: &'static str,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<&'static str>,
}

/// Sample order history for the signed-in shopper.
#[must_use]
pub fn sample_history() -> Vec<PastOrder> {
    vec![
        PastOrder {
            id: OrderId::new("ORD-12345"),
            date: "2023-10-26",
            total: Price::from_naira(15_290),
            status: OrderStatus::Delivered,
            items: vec!["Castor Oil", "Coconut Oil"],
        },
        PastOrder {
            id: OrderId::new("ORD-12346"),
            date: "2023-11-15",
            total: Price::from_naira(5_000),
            status: OrderStatus::Processing,
            items: vec!["Radiant Glow Face Shea Butter"],
        },
    ]
}
