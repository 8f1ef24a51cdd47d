//! Dashboard statistics derived from the order collection.

use serde::{Deserialize, Serialize};

use crate::order::{OrderStatus, PurchaseOrder};

/// Aggregate counters shown on the dashboard.
///
/// `total_cost` sums the derived `item_total_price` of every order
/// (saturating; the dashboard shows a figure, not a ledger).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub approved_orders: u64,
    pub total_cost: u64,
}

impl OrderStats {
    pub fn from_orders(orders: &[PurchaseOrder]) -> Self {
        let mut stats = Self::default();
        for order in orders {
            stats.total_orders += 1;
            match order.purchase_order_status {
                OrderStatus::Pending => stats.pending_orders += 1,
                OrderStatus::Approved => stats.approved_orders += 1,
            }
            stats.total_cost = stats.total_cost.saturating_add(order.items.item_total_price);
        }
        stats
    }
}
