use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{ReturnCondition, ReturnRequest, ReturnStatus};
use crate::state::AppState;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CreateReturnRequest {
    #[validate(length(min = 1, message = "Order id is required"))]
    pub order_id: String,
    pub awb: String,
    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,
    pub product_name: String,
    pub reason: String,
    pub expected_qty: u32,
    pub channel: String,
}

/// Return-request tracking. No cross-entity invariant couples returns to the
/// inventory ledger here; restocking a resellable unit is an explicit,
/// separate ledger call by the operator.
#[derive(Clone)]
pub struct ReturnService {
    state: Arc<AppState>,
    event_sender: EventSender,
}

impl ReturnService {
    pub fn new(state: Arc<AppState>, event_sender: EventSender) -> Self {
        Self {
            state,
            event_sender,
        }
    }

    #[instrument(skip(self, request), fields(order_id = %request.order_id, sku = %request.sku))]
    pub async fn create_return(
        &self,
        request: CreateReturnRequest,
    ) -> Result<ReturnRequest, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let suffix = Uuid::new_v4().simple().to_string();
        let request_record = ReturnRequest {
            id: format!("RET-{}", &suffix[..8].to_uppercase()),
            order_id: request.order_id,
            awb: request.awb,
            sku: request.sku,
            product_name: request.product_name,
            reason: request.reason,
            status: ReturnStatus::Pending,
            condition: None,
            date: Utc::now(),
            expected_qty: request.expected_qty,
            received_qty: 0,
            channel: request.channel,
        };

        {
            let mut returns = self.state.returns.write().unwrap();
            returns.insert(0, request_record.clone());
        }

        info!(return_id = %request_record.id, "Return created");

        self.event_sender
            .send(Event::ReturnCreated {
                return_id: request_record.id.clone(),
                order_id: request_record.order_id.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(request_record)
    }

    /// Records inspection progress on a return: status, assessed condition,
    /// and how many units have physically arrived so far.
    #[instrument(skip(self), fields(return_id = %return_id, status = %status))]
    pub fn process_return(
        &self,
        return_id: &str,
        status: ReturnStatus,
        condition: Option<ReturnCondition>,
        received_qty: Option<u32>,
    ) -> Result<ReturnRequest, ServiceError> {
        let mut returns = self.state.returns.write().unwrap();
        let record = returns
            .iter_mut()
            .find(|r| r.id == return_id)
            .ok_or_else(|| ServiceError::not_found("Return", return_id))?;

        record.status = status;
        if condition.is_some() {
            record.condition = condition;
        }
        if let Some(qty) = received_qty {
            record.received_qty = qty;
        }
        Ok(record.clone())
    }
}
