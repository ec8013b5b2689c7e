use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::UnitLabel;
use crate::state::AppState;

/// Per-unit barcode labels generated as PO items are received.
#[derive(Clone)]
pub struct UnitLabelService {
    state: Arc<AppState>,
}

impl UnitLabelService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Generates one label per received unit, each with a unique barcode
    /// number, pending print.
    #[instrument(skip(self), fields(po_id = %po_id, sku = %sku, qty = qty))]
    pub fn generate_for_receipt(
        &self,
        po_id: &str,
        sku: &str,
        product_name: &str,
        price: Decimal,
        qty: u32,
    ) -> Vec<UnitLabel> {
        let now = Utc::now();
        let mut rng = rand::thread_rng();
        let labels: Vec<UnitLabel> = (0..qty)
            .map(|_| UnitLabel {
                id: format!("UL-{}", Uuid::new_v4().simple()),
                sku: sku.to_string(),
                product_name: product_name.to_string(),
                price,
                print_status: false,
                po_id: po_id.to_string(),
                received_at: now,
                barcode_number: format!("89{:011}", rng.gen_range(0..100_000_000_000u64)),
            })
            .collect();

        {
            let mut unit_labels = self.state.unit_labels.write().unwrap();
            unit_labels.extend(labels.iter().cloned());
        }

        info!(count = labels.len(), "Unit labels generated");
        labels
    }

    pub fn mark_printed(&self, label_id: &str) -> Result<(), ServiceError> {
        let mut unit_labels = self.state.unit_labels.write().unwrap();
        let label = unit_labels
            .iter_mut()
            .find(|l| l.id == label_id)
            .ok_or_else(|| ServiceError::not_found("Unit label", label_id))?;
        label.print_status = true;
        Ok(())
    }

    pub fn list_for_po(&self, po_id: &str) -> Vec<UnitLabel> {
        self.state
            .unit_labels
            .read()
            .unwrap()
            .iter()
            .filter(|l| l.po_id == po_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn generates_one_label_per_unit_with_unique_barcodes() {
        let state = Arc::new(AppState::new());
        let service = UnitLabelService::new(state);

        let labels =
            service.generate_for_receipt("PO-TEST", "TSH-BLK-M", "Classic T-Shirt", dec!(999), 5);
        assert_eq!(labels.len(), 5);
        assert!(labels.iter().all(|l| !l.print_status));
        assert!(labels.iter().all(|l| l.barcode_number.len() == 13));

        let mut barcodes: Vec<&str> =
            labels.iter().map(|l| l.barcode_number.as_str()).collect();
        barcodes.sort_unstable();
        barcodes.dedup();
        assert_eq!(barcodes.len(), 5);

        service.mark_printed(&labels[0].id).unwrap();
        let listed = service.list_for_po("PO-TEST");
        assert_eq!(listed.iter().filter(|l| l.print_status).count(), 1);
    }
}
