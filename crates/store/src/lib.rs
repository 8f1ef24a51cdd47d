//! `orderdesk-store` — durable keeping of the purchase order collection.
//!
//! The store owns the identity and derived-field invariants: unique
//! `purchase_order_id`, pending status on create, and a recomputed
//! `item_total_price` on every write that touches the item. Each operation is
//! a self-contained read-full -> compute -> write-full cycle against the
//! backing document; no state is cached across calls, so the in-memory view
//! can never diverge from what is persisted.

pub mod document;
pub mod error;
pub mod file;
pub mod memory;

use std::sync::Arc;

use orderdesk_core::OrderId;
use orderdesk_purchasing::{OrderPatch, PurchaseOrder};

pub use document::OrderDocument;
pub use error::StoreError;
pub use file::FileOrderStore;
pub use memory::InMemoryOrderStore;

/// Keyed CRUD store for the purchase order collection.
///
/// Implementations preserve insertion order on `list` and treat `delete` of
/// an absent id as idempotent success. Concurrent writers are not serialized:
/// two interleaved read-modify-write cycles race and the last write wins,
/// which is the accepted contract for a single-operator tool.
pub trait OrderStore: Send + Sync {
    /// Validate, normalize (pending status, recomputed total) and append.
    ///
    /// Rejects a `purchase_order_id` already present with a conflict.
    fn create(&self, order: PurchaseOrder) -> Result<(), StoreError>;

    /// All records in insertion order.
    fn list(&self) -> Result<Vec<PurchaseOrder>, StoreError>;

    /// The record with the given id, or `NotFound`.
    fn get(&self, id: OrderId) -> Result<PurchaseOrder, StoreError>;

    /// Shallow-merge `patch` over the addressed record and persist.
    ///
    /// `NotFound` leaves the collection unchanged. A patch carrying an
    /// `items` object gets its derived total recomputed before the write.
    fn update(&self, id: OrderId, patch: OrderPatch) -> Result<PurchaseOrder, StoreError>;

    /// Remove the matching record. An absent id is idempotent success.
    fn delete(&self, id: OrderId) -> Result<(), StoreError>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn create(&self, order: PurchaseOrder) -> Result<(), StoreError> {
        (**self).create(order)
    }

    fn list(&self) -> Result<Vec<PurchaseOrder>, StoreError> {
        (**self).list()
    }

    fn get(&self, id: OrderId) -> Result<PurchaseOrder, StoreError> {
        (**self).get(id)
    }

    fn update(&self, id: OrderId, patch: OrderPatch) -> Result<PurchaseOrder, StoreError> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: OrderId) -> Result<(), StoreError> {
        (**self).delete(id)
    }
}
