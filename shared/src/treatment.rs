//! Recording a treatment against a schedule, and the form validation that precedes it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::animal::HealthStatus;
use crate::schedule::{parse_calendar_date, ScheduleRecord};

pub const MAX_NOTES_LENGTH: usize = 1000;

/// Body of `POST /treatments/record`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTreatmentRequest {
    pub schedule_id: String,
    pub animal_id: String,
    pub treatment_given: String,
    pub health_status: HealthStatus,
    pub dosage: String,
    /// YYYY-MM-DD
    pub date: String,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Treatment as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub schedule_id: String,
    pub animal_id: String,
    pub treatment_given: String,
    pub health_status: HealthStatus,
    pub dosage: String,
    pub date: String,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Raw input of the treatment form, exactly as typed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreatmentForm {
    pub treatment_given: String,
    pub health_status: HealthStatus,
    pub dosage: String,
    pub date: String,
    pub cost: String,
    pub notes: String,
}

impl TreatmentForm {
    /// Empty form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreatmentValidationError {
    EmptyTreatment,
    EmptyDosage,
    EmptyDate,
    InvalidDate(String),
    DateInFuture,
    InvalidCost(String),
    NegativeCost,
    NotesTooLong(usize),
}

impl fmt::Display for TreatmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreatmentValidationError::EmptyTreatment => write!(f, "Describe the treatment given"),
            TreatmentValidationError::EmptyDosage => write!(f, "Dosage is required"),
            TreatmentValidationError::EmptyDate => write!(f, "Treatment date is required"),
            TreatmentValidationError::InvalidDate(raw) => write!(f, "'{}' is not a valid date", raw),
            TreatmentValidationError::DateInFuture => write!(f, "Treatment date cannot be in the future"),
            TreatmentValidationError::InvalidCost(raw) => write!(f, "'{}' is not a valid cost", raw),
            TreatmentValidationError::NegativeCost => write!(f, "Cost cannot be negative"),
            TreatmentValidationError::NotesTooLong(len) => {
                write!(f, "Notes are {} characters long (max {})", len, MAX_NOTES_LENGTH)
            }
        }
    }
}

impl std::error::Error for TreatmentValidationError {}

/// Outcome of validating a [`TreatmentForm`]
#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentFormValidation {
    pub is_valid: bool,
    pub errors: Vec<TreatmentValidationError>,
    pub cleaned_cost: Option<f64>,
    pub cleaned_date: Option<NaiveDate>,
}

/// Validate a form against `today`. An empty cost counts as zero.
pub fn validate_treatment_form(form: &TreatmentForm, today: NaiveDate) -> TreatmentFormValidation {
    let mut errors = Vec::new();

    if form.treatment_given.trim().is_empty() {
        errors.push(TreatmentValidationError::EmptyTreatment);
    }
    if form.dosage.trim().is_empty() {
        errors.push(TreatmentValidationError::EmptyDosage);
    }

    let cleaned_date = if form.date.trim().is_empty() {
        errors.push(TreatmentValidationError::EmptyDate);
        None
    } else {
        match parse_calendar_date(&form.date) {
            Some(date) if date > today => {
                errors.push(TreatmentValidationError::DateInFuture);
                None
            }
            Some(date) => Some(date),
            None => {
                errors.push(TreatmentValidationError::InvalidDate(form.date.trim().to_string()));
                None
            }
        }
    };

    let cost_input = form.cost.trim().trim_start_matches('$');
    let cleaned_cost = if cost_input.is_empty() {
        Some(0.0)
    } else {
        match cost_input.parse::<f64>() {
            Ok(cost) if !cost.is_finite() => {
                errors.push(TreatmentValidationError::InvalidCost(form.cost.trim().to_string()));
                None
            }
            Ok(cost) if cost < 0.0 => {
                errors.push(TreatmentValidationError::NegativeCost);
                None
            }
            Ok(cost) => Some(cost),
            Err(_) => {
                errors.push(TreatmentValidationError::InvalidCost(form.cost.trim().to_string()));
                None
            }
        }
    };

    let notes_len = form.notes.trim().chars().count();
    if notes_len > MAX_NOTES_LENGTH {
        errors.push(TreatmentValidationError::NotesTooLong(notes_len));
    }

    TreatmentFormValidation {
        is_valid: errors.is_empty(),
        errors,
        cleaned_cost,
        cleaned_date,
    }
}

/// Build the request for `schedule` from a validated form
pub fn build_treatment_request(
    form: &TreatmentForm,
    schedule: &ScheduleRecord,
    today: NaiveDate,
) -> Result<RecordTreatmentRequest, Vec<TreatmentValidationError>> {
    let validation = validate_treatment_form(form, today);
    match (validation.is_valid, validation.cleaned_date, validation.cleaned_cost) {
        (true, Some(date), Some(cost)) => {
            let notes = form.notes.trim();
            Ok(RecordTreatmentRequest {
                schedule_id: schedule.id.clone(),
                animal_id: schedule.animal_id.id().to_string(),
                treatment_given: form.treatment_given.trim().to_string(),
                health_status: form.health_status,
                dosage: form.dosage.trim().to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                cost,
                notes: (!notes.is_empty()).then(|| notes.to_string()),
            })
        }
        _ => Err(validation.errors),
    }
}

/// What a submit has to send, given what the backend already accepted
#[derive(Debug, Clone, PartialEq)]
pub enum TreatmentSubmission {
    /// Nothing recorded yet: POST the treatment, then PUT the health status
    RecordThenUpdate(RecordTreatmentRequest),
    /// The treatment was recorded but the health update failed: repeat only
    /// the PUT, with the status from the recorded treatment
    UpdateOnly(RecordTreatmentRequest),
}

impl TreatmentSubmission {
    pub fn request(&self) -> &RecordTreatmentRequest {
        match self {
            TreatmentSubmission::RecordThenUpdate(request) => request,
            TreatmentSubmission::UpdateOnly(request) => request,
        }
    }
}

/// Plan the next submit. Once a request has been `accepted`, the form is
/// ignored so the health update always matches the stored treatment.
pub fn plan_treatment_submission(
    accepted: Option<&RecordTreatmentRequest>,
    form: &TreatmentForm,
    schedule: &ScheduleRecord,
    today: NaiveDate,
) -> Result<TreatmentSubmission, Vec<TreatmentValidationError>> {
    match accepted {
        Some(request) => Ok(TreatmentSubmission::UpdateOnly(request.clone())),
        None => build_treatment_request(form, schedule, today).map(TreatmentSubmission::RecordThenUpdate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tests::{day, record};

    fn filled_form() -> TreatmentForm {
        TreatmentForm {
            treatment_given: "Oxytetracycline".to_string(),
            health_status: HealthStatus::Recovering,
            dosage: "10 ml".to_string(),
            date: "2026-03-15".to_string(),
            cost: "12.50".to_string(),
            notes: "  Follow up in a week ".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let validation = validate_treatment_form(&filled_form(), day(2026, 3, 15));
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
        assert_eq!(validation.cleaned_cost, Some(12.5));
        assert_eq!(validation.cleaned_date, Some(day(2026, 3, 15)));
    }

    #[test]
    fn test_new_form_is_dated_today() {
        let form = TreatmentForm::new(day(2026, 1, 5));
        assert_eq!(form.date, "2026-01-05");
        assert_eq!(form.health_status, HealthStatus::Healthy);
    }

    #[test]
    fn test_empty_form_reports_every_missing_field() {
        let form = TreatmentForm::default();
        let validation = validate_treatment_form(&form, day(2026, 3, 15));

        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![
                TreatmentValidationError::EmptyTreatment,
                TreatmentValidationError::EmptyDosage,
                TreatmentValidationError::EmptyDate,
            ]
        );
        // Empty cost is free, not an error
        assert_eq!(validation.cleaned_cost, Some(0.0));
    }

    #[test]
    fn test_cost_validation() {
        let today = day(2026, 3, 15);

        let mut form = filled_form();
        form.cost = "$7".to_string();
        assert_eq!(validate_treatment_form(&form, today).cleaned_cost, Some(7.0));

        form.cost = "-3".to_string();
        assert_eq!(
            validate_treatment_form(&form, today).errors,
            vec![TreatmentValidationError::NegativeCost]
        );

        form.cost = "twelve".to_string();
        assert_eq!(
            validate_treatment_form(&form, today).errors,
            vec![TreatmentValidationError::InvalidCost("twelve".to_string())]
        );

        form.cost = "NaN".to_string();
        assert!(!validate_treatment_form(&form, today).is_valid);
    }

    #[test]
    fn test_date_validation() {
        let today = day(2026, 3, 15);

        let mut form = filled_form();
        form.date = "2026-03-16".to_string();
        assert_eq!(
            validate_treatment_form(&form, today).errors,
            vec![TreatmentValidationError::DateInFuture]
        );

        form.date = "yesterday".to_string();
        assert_eq!(
            validate_treatment_form(&form, today).errors,
            vec![TreatmentValidationError::InvalidDate("yesterday".to_string())]
        );
    }

    #[test]
    fn test_notes_length_limit() {
        let mut form = filled_form();
        form.notes = "x".repeat(MAX_NOTES_LENGTH + 1);
        assert_eq!(
            validate_treatment_form(&form, day(2026, 3, 15)).errors,
            vec![TreatmentValidationError::NotesTooLong(MAX_NOTES_LENGTH + 1)]
        );
    }

    #[test]
    fn test_build_treatment_request() {
        let schedule = record("sch-9", "2026-03-15", "scheduled");
        let request = build_treatment_request(&filled_form(), &schedule, day(2026, 3, 15))
            .expect("form is valid");

        assert_eq!(request.schedule_id, "sch-9");
        assert_eq!(request.animal_id, "animal-sch-9");
        assert_eq!(request.cost, 12.5);
        assert_eq!(request.notes.as_deref(), Some("Follow up in a week"));

        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(body["scheduleId"], "sch-9");
        assert_eq!(body["treatmentGiven"], "Oxytetracycline");
        assert_eq!(body["healthStatus"], "recovering");
        assert_eq!(body["date"], "2026-03-15");
    }

    #[test]
    fn test_build_treatment_request_rejects_invalid_form() {
        let schedule = record("sch-9", "2026-03-15", "scheduled");
        let mut form = filled_form();
        form.dosage = "   ".to_string();

        let errors = build_treatment_request(&form, &schedule, day(2026, 3, 15))
            .expect_err("dosage missing");
        assert_eq!(errors, vec![TreatmentValidationError::EmptyDosage]);
    }

    #[test]
    fn test_retry_after_recorded_treatment_reuses_accepted_request() {
        let schedule = record("sch-9", "2026-03-15", "scheduled");
        let today = day(2026, 3, 15);

        let first = plan_treatment_submission(None, &filled_form(), &schedule, today)
            .expect("form is valid");
        let accepted = match first {
            TreatmentSubmission::RecordThenUpdate(request) => request,
            other => panic!("expected a fresh record, got {:?}", other),
        };
        assert_eq!(accepted.health_status, HealthStatus::Recovering);

        // Health update failed; the form is edited before retrying
        let mut edited = filled_form();
        edited.health_status = HealthStatus::Sick;
        edited.dosage = String::new();

        let retry = plan_treatment_submission(Some(&accepted), &edited, &schedule, today)
            .expect("retry ignores the form");
        assert_eq!(retry, TreatmentSubmission::UpdateOnly(accepted.clone()));
        assert_eq!(retry.request().health_status, HealthStatus::Recovering);
    }
}
