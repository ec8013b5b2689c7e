use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{GatePass, GatePassItem, GatePassType};
use crate::state::AppState;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CreateGatePassRequest {
    pub pass_type: GatePassType,
    pub is_returnable: bool,
    #[validate(length(min = 1, message = "Person name is required"))]
    pub person_name: String,
    pub destination: String,
    pub purpose: String,
    pub vehicle_number: String,
    pub remarks: String,
    #[validate(length(min = 1, message = "At least one item is required"))]
    pub items: Vec<GatePassItem>,
    pub reference_id: Option<String>,
}

/// Gate pass issuance for goods moving through the warehouse gate.
#[derive(Clone)]
pub struct GatePassService {
    state: Arc<AppState>,
    event_sender: EventSender,
}

impl GatePassService {
    pub fn new(state: Arc<AppState>, event_sender: EventSender) -> Self {
        Self {
            state,
            event_sender,
        }
    }

    #[instrument(skip(self, request), fields(person = %request.person_name, pass_type = %request.pass_type))]
    pub async fn issue(
        &self,
        request: CreateGatePassRequest,
        issued_by: &str,
    ) -> Result<GatePass, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let suffix = Uuid::new_v4().simple().to_string();
        let pass = GatePass {
            id: format!("GP-{}", &suffix[..8].to_uppercase()),
            pass_type: request.pass_type,
            is_returnable: request.is_returnable,
            person_name: request.person_name,
            destination: request.destination,
            date: Utc::now(),
            purpose: request.purpose,
            vehicle_number: request.vehicle_number,
            remarks: request.remarks,
            items: request.items,
            issued_by: issued_by.to_string(),
            reference_id: request.reference_id,
        };

        {
            let mut gate_passes = self.state.gate_passes.write().unwrap();
            gate_passes.insert(0, pass.clone());
        }

        info!(gate_pass_id = %pass.id, "Gate pass issued");

        self.event_sender
            .send(Event::GatePassIssued {
                gate_pass_id: pass.id.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(pass)
    }
}
