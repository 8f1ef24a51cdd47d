use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, ItemId, OrderId, VendorId};

/// Purchase order status.
///
/// There is no transition guard: any write may set the field directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
}

/// Vendor details embedded in an order (one per order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub vendor_address: String,
    pub phone_number: String,
    pub account_number: String,
    pub bank_name: String,
    pub account_name: String,
}

impl Vendor {
    fn validate(&self) -> DomainResult<()> {
        let required = [
            ("vendor_name", &self.vendor_name),
            ("vendor_address", &self.vendor_address),
            ("phone_number", &self.phone_number),
            ("account_number", &self.account_number),
            ("bank_name", &self.bank_name),
            ("account_name", &self.account_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Line item embedded in an order (the model carries exactly one per order).
///
/// `item_total_price` is derived: it must equal
/// `item_quantity * item_unit_price` at the moment of last write. Prices are
/// minor-unit currency integers, no fractional cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub item_name: String,
    pub item_quantity: u64,
    pub item_unit_price: u64,
    pub item_total_price: u64,
}

impl Item {
    /// Recompute the derived total from quantity and unit price.
    ///
    /// Whatever total the caller supplied is overwritten; it is never
    /// persisted inconsistent with its inputs.
    pub fn recompute_total(&mut self) -> DomainResult<()> {
        self.item_total_price = self
            .item_quantity
            .checked_mul(self.item_unit_price)
            .ok_or_else(|| {
                DomainError::validation("item_total_price overflows u64")
            })?;
        Ok(())
    }

    fn validate(&self) -> DomainResult<()> {
        if self.item_name.trim().is_empty() {
            return Err(DomainError::validation("item_name must not be empty"));
        }
        Ok(())
    }
}

/// A purchase order: one vendor, one item line, one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub purchase_order_id: OrderId,
    pub purchase_order_number: u32,
    pub purchase_order_status: OrderStatus,
    pub ordered_by: String,
    pub created_on: DateTime<Utc>,
    pub vendor: Vendor,
    pub items: Item,
}

impl PurchaseOrder {
    /// Normalize a caller-supplied record for insertion.
    ///
    /// New orders always start `pending`, and the derived total is recomputed
    /// from quantity and unit price regardless of what the caller sent.
    pub fn into_pending(mut self) -> DomainResult<Self> {
        self.purchase_order_status = OrderStatus::Pending;
        self.items.recompute_total()?;
        self.validate()?;
        Ok(self)
    }

    /// Produce a new record: this record shallow-merged with `patch`.
    ///
    /// Patch fields overwrite same-named top-level fields entirely; a present
    /// `vendor` or `items` replaces the whole nested object. When the patch
    /// carries an `items` object the derived total is recomputed, so a patch
    /// cannot desynchronize it. `purchase_order_id` and `created_on` are not
    /// representable in a patch and stay untouched.
    pub fn merged(&self, patch: OrderPatch) -> DomainResult<Self> {
        let mut merged = self.clone();
        if let Some(number) = patch.purchase_order_number {
            merged.purchase_order_number = number;
        }
        if let Some(status) = patch.purchase_order_status {
            merged.purchase_order_status = status;
        }
        if let Some(ordered_by) = patch.ordered_by {
            merged.ordered_by = ordered_by;
        }
        if let Some(vendor) = patch.vendor {
            merged.vendor = vendor;
        }
        if let Some(items) = patch.items {
            merged.items = items;
            merged.items.recompute_total()?;
        }
        merged.validate()?;
        Ok(merged)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.vendor.validate()?;
        self.items.validate()?;
        let expected = self
            .items
            .item_quantity
            .checked_mul(self.items.item_unit_price)
            .ok_or_else(|| {
                DomainError::validation("item_total_price overflows u64")
            })?;
        if self.items.item_total_price != expected {
            return Err(DomainError::validation(format!(
                "item_total_price {} does not equal quantity * unit price ({expected})",
                self.items.item_total_price
            )));
        }
        Ok(())
    }
}

/// Partial-field input to an update: `None` means "leave as is".
///
/// Shallow merge only. There is deliberately no slot for the immutable
/// `purchase_order_id` and `created_on` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Vendor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Item>,
}

/// Generate a short human-facing order number label (4 digits).
///
/// Labels are not unique by design; `purchase_order_id` is the only key.
pub fn generate_order_number() -> u32 {
    rand::thread_rng().gen_range(1000..=9999)
}
