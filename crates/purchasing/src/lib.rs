//! `orderdesk-purchasing` — the purchase order domain model.
//!
//! Pure domain types and rules: record shapes, field validation, merge-patch
//! semantics and the derived-total invariant. No storage or HTTP concerns.

pub mod order;
pub mod stats;

pub use order::{
    generate_order_number, Item, OrderPatch, OrderStatus, PurchaseOrder, Vendor,
};
pub use stats::OrderStats;
