use std::io;
use std::sync::RwLock;

use orderdesk_core::{DomainError, OrderId};
use orderdesk_purchasing::{OrderPatch, PurchaseOrder};

use crate::error::StoreError;
use crate::OrderStore;

/// In-memory order store for tests/dev.
///
/// Same contract as [`crate::FileOrderStore`] (insertion order, idempotent
/// delete, pending-on-create, recomputed totals) without touching disk.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Vec<PurchaseOrder>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Io(io::Error::other("order store lock poisoned"))
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, order: PurchaseOrder) -> Result<(), StoreError> {
        let order = order.into_pending()?;
        let mut data = self.inner.write().map_err(|_| poisoned())?;
        if data
            .iter()
            .any(|o| o.purchase_order_id == order.purchase_order_id)
        {
            return Err(DomainError::conflict(format!(
                "purchase_order_id {} already exists",
                order.purchase_order_id
            ))
            .into());
        }
        data.push(order);
        Ok(())
    }

    fn list(&self) -> Result<Vec<PurchaseOrder>, StoreError> {
        Ok(self.inner.read().map_err(|_| poisoned())?.clone())
    }

    fn get(&self, id: OrderId) -> Result<PurchaseOrder, StoreError> {
        self.inner
            .read()
            .map_err(|_| poisoned())?
            .iter()
            .find(|o| o.purchase_order_id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found().into())
    }

    fn update(&self, id: OrderId, patch: OrderPatch) -> Result<PurchaseOrder, StoreError> {
        let mut data = self.inner.write().map_err(|_| poisoned())?;
        let Some(pos) = data.iter().position(|o| o.purchase_order_id == id) else {
            return Err(DomainError::not_found().into());
        };
        let updated = data[pos].merged(patch)?;
        data[pos] = updated.clone();
        Ok(updated)
    }

    fn delete(&self, id: OrderId) -> Result<(), StoreError> {
        let mut data = self.inner.write().map_err(|_| poisoned())?;
        data.retain(|o| o.purchase_order_id != id);
        Ok(())
    }
}
