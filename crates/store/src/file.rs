use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use orderdesk_core::{DomainError, OrderId};
use orderdesk_purchasing::{OrderPatch, PurchaseOrder};

use crate::document::OrderDocument;
use crate::error::StoreError;
use crate::OrderStore;

/// File-backed order store.
///
/// Holds only the path: every operation re-reads the document and writes it
/// back in full, so there is no cross-call cache to diverge from disk. A
/// missing file loads as the empty document, so a fresh deployment needs no
/// seed file.
///
/// Writers are not serialized here; wrapping each public operation in a
/// mutex is the hardening step for a multi-actor deployment.
#[derive(Debug, Clone)]
pub struct FileOrderStore {
    path: PathBuf,
}

impl FileOrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<OrderDocument, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Parse(e.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(OrderDocument::default()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn persist(&self, doc: &OrderDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes =
            serde_json::to_vec(doc).map_err(|e| StoreError::Parse(e.to_string()))?;
        fs::write(&self.path, bytes)?;
        tracing::debug!(path = %self.path.display(), records = doc.data.len(), "order database persisted");
        Ok(())
    }
}

impl OrderStore for FileOrderStore {
    fn create(&self, order: PurchaseOrder) -> Result<(), StoreError> {
        let order = order.into_pending()?;
        let mut doc = self.load()?;
        if doc
            .data
            .iter()
            .any(|o| o.purchase_order_id == order.purchase_order_id)
        {
            return Err(DomainError::conflict(format!(
                "purchase_order_id {} already exists",
                order.purchase_order_id
            ))
            .into());
        }
        let id = order.purchase_order_id;
        doc.data.push(order);
        self.persist(&doc)?;
        tracing::info!(order_id = %id, "purchase order created");
        Ok(())
    }

    fn list(&self) -> Result<Vec<PurchaseOrder>, StoreError> {
        Ok(self.load()?.data)
    }

    fn get(&self, id: OrderId) -> Result<PurchaseOrder, StoreError> {
        self.load()?
            .data
            .into_iter()
            .find(|o| o.purchase_order_id == id)
            .ok_or_else(|| DomainError::not_found().into())
    }

    fn update(&self, id: OrderId, patch: OrderPatch) -> Result<PurchaseOrder, StoreError> {
        let mut doc = self.load()?;
        let Some(pos) = doc.data.iter().position(|o| o.purchase_order_id == id) else {
            return Err(DomainError::not_found().into());
        };
        let updated = doc.data[pos].merged(patch)?;
        doc.data[pos] = updated.clone();
        self.persist(&doc)?;
        tracing::info!(order_id = %id, "purchase order updated");
        Ok(updated)
    }

    fn delete(&self, id: OrderId) -> Result<(), StoreError> {
        let mut doc = self.load()?;
        // Absent id: the collection is rewritten unchanged (idempotent success).
        doc.data.retain(|o| o.purchase_order_id != id);
        self.persist(&doc)?;
        tracing::info!(order_id = %id, "purchase order deleted");
        Ok(())
    }
}
