use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::models::{Settlement, SettlementStatus};
use crate::state::AppState;

/// Marketplace settlement reconciliation.
#[derive(Clone)]
pub struct SettlementService {
    state: Arc<AppState>,
}

impl SettlementService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn record(&self, settlement: Settlement) {
        let mut settlements = self.state.settlements.write().unwrap();
        settlements.insert(0, settlement);
    }

    /// Matches a bank credit against the expected payout. An exact match
    /// reconciles the settlement; anything else is flagged as a mismatch for
    /// manual follow-up.
    #[instrument(skip(self), fields(settlement_id = %settlement_id, utr = %bank_utr))]
    pub fn reconcile(
        &self,
        settlement_id: &str,
        bank_utr: String,
        bank_credit_amount: Decimal,
    ) -> Result<Settlement, ServiceError> {
        let mut settlements = self.state.settlements.write().unwrap();
        let settlement = settlements
            .iter_mut()
            .find(|s| s.id == settlement_id)
            .ok_or_else(|| ServiceError::not_found("Settlement", settlement_id))?;

        settlement.bank_utr = Some(bank_utr);
        settlement.bank_credit_amount = Some(bank_credit_amount);
        settlement.status = if bank_credit_amount == settlement.net_expected {
            SettlementStatus::Reconciled
        } else {
            SettlementStatus::Mismatch
        };

        info!(status = %settlement.status, "Settlement reconciled");
        Ok(settlement.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SettlementFees;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn settlement(id: &str, net_expected: Decimal) -> Settlement {
        Settlement {
            id: id.to_string(),
            channel: "Amazon".to_string(),
            date: Utc::now(),
            total_amount: dec!(10000),
            status: SettlementStatus::Pending,
            orders_count: 12,
            fees: SettlementFees {
                commission: dec!(800),
                shipping: dec!(400),
                collection: dec!(100),
                gst: dec!(234),
            },
            net_expected,
            bank_utr: None,
            bank_credit_amount: None,
        }
    }

    #[test]
    fn exact_credit_reconciles_and_short_credit_mismatches() {
        let state = Arc::new(AppState::new());
        let service = SettlementService::new(state);
        service.record(settlement("SET-1", dec!(8466)));
        service.record(settlement("SET-2", dec!(8466)));

        let ok = service
            .reconcile("SET-1", "UTR001".to_string(), dec!(8466))
            .unwrap();
        assert_eq!(ok.status, SettlementStatus::Reconciled);

        let short = service
            .reconcile("SET-2", "UTR002".to_string(), dec!(8000))
            .unwrap();
        assert_eq!(short.status, SettlementStatus::Mismatch);
        assert_eq!(short.bank_credit_amount, Some(dec!(8000)));
    }
}
