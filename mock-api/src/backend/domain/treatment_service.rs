//! Recording treatments against schedules.
//!
//! ## Business Rules
//!
//! - Only a schedule still in `scheduled` status can be treated, and only once
//! - The animal on the request must be the schedule's animal
//! - Treatment, dosage and date are required; cost must be a non-negative number
//! - Recording a treatment closes the schedule as `treated`; the animal's
//!   health status is left to the separate livestock endpoint

use std::sync::Arc;

use shared::{parse_calendar_date, RecordTreatmentRequest, ScheduleStatus, TreatmentRecord};
use tracing::info;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::storage::{ScheduleStorage, TreatmentStorage};

pub struct TreatmentService<S> {
    store: Arc<S>,
}

impl<S> Clone for TreatmentService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ScheduleStorage + TreatmentStorage> TreatmentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn record_treatment(
        &self,
        request: RecordTreatmentRequest,
    ) -> Result<TreatmentRecord, ApiError> {
        validate(&request)?;

        let schedule = self
            .store
            .get_schedule(&request.schedule_id)
            .await?
            .ok_or_else(|| ApiError::ScheduleNotFound(request.schedule_id.clone()))?;

        if !schedule.status.is_scheduled() {
            return Err(ApiError::ScheduleClosed(
                schedule.id,
                schedule.status.to_string(),
            ));
        }
        if !self
            .store
            .list_treatments_for_schedule(&schedule.id)
            .await?
            .is_empty()
        {
            return Err(ApiError::ScheduleClosed(
                schedule.id,
                ScheduleStatus::Treated.to_string(),
            ));
        }
        if schedule.animal_id.id() != request.animal_id {
            return Err(ApiError::Validation(format!(
                "Animal {} is not the animal of schedule {}",
                request.animal_id, schedule.id
            )));
        }

        let treatment = TreatmentRecord {
            id: format!("trt-{}", Uuid::new_v4()),
            schedule_id: request.schedule_id,
            animal_id: request.animal_id,
            treatment_given: request.treatment_given.trim().to_string(),
            health_status: request.health_status,
            dosage: request.dosage.trim().to_string(),
            date: request.date,
            cost: request.cost,
            notes: request.notes,
        };

        self.store.store_treatment(&treatment).await?;
        self.store
            .update_schedule_status(&treatment.schedule_id, ScheduleStatus::Treated)
            .await?;

        info!(
            schedule_id = %treatment.schedule_id,
            treatment_id = %treatment.id,
            "recorded treatment"
        );
        Ok(treatment)
    }
}

fn validate(request: &RecordTreatmentRequest) -> Result<(), ApiError> {
    if request.treatment_given.trim().is_empty() {
        return Err(ApiError::Validation("treatmentGiven cannot be empty".to_string()));
    }
    if request.dosage.trim().is_empty() {
        return Err(ApiError::Validation("dosage cannot be empty".to_string()));
    }
    if parse_calendar_date(&request.date).is_none() {
        return Err(ApiError::Validation(format!("'{}' is not a valid date", request.date)));
    }
    if !request.cost.is_finite() || request.cost < 0.0 {
        return Err(ApiError::Validation("cost must be a non-negative number".to_string()));
    }
    Ok(())
}
