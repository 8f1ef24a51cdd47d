use serde::{Deserialize, Serialize};

use orderdesk_purchasing::PurchaseOrder;

/// On-disk shape of the order database: a single JSON document
/// `{ "data": [...] }`. Every mutation rewrites it in full, on the same
/// path, synchronously before the operation returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDocument {
    pub data: Vec<PurchaseOrder>,
}
