//! Animal references as they appear on schedule records and the livestock endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health status of an animal, lower-case on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Sick,
    Recovering,
    Quarantined,
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    /// Values offered by the treatment form
    pub const SELECTABLE: [HealthStatus; 4] = [
        HealthStatus::Healthy,
        HealthStatus::Sick,
        HealthStatus::Recovering,
        HealthStatus::Quarantined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Sick => "sick",
            HealthStatus::Recovering => "recovering",
            HealthStatus::Quarantined => "quarantined",
            HealthStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Sick => "Sick",
            HealthStatus::Recovering => "Recovering",
            HealthStatus::Quarantined => "Quarantined",
            HealthStatus::Unknown => "Unknown",
        }
    }

    /// Parse a form value; anything unrecognised is `None`
    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::SELECTABLE
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Populated animal as returned by the schedule detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
}

impl AnimalSummary {
    /// "Bessie (#A-102)", falling back to whichever part is known
    pub fn display_name(&self) -> String {
        match (self.name.as_deref(), self.tag_number.as_deref()) {
            (Some(name), Some(tag)) => format!("{} (#{})", name, tag),
            (Some(name), None) => name.to_string(),
            (None, Some(tag)) => format!("#{}", tag),
            (None, None) => self.id.clone(),
        }
    }
}

/// Either a bare animal id or the populated animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimalRef {
    Id(String),
    Populated(AnimalSummary),
}

impl AnimalRef {
    pub fn id(&self) -> &str {
        match self {
            AnimalRef::Id(id) => id,
            AnimalRef::Populated(animal) => &animal.id,
        }
    }

    pub fn summary(&self) -> Option<&AnimalSummary> {
        match self {
            AnimalRef::Id(_) => None,
            AnimalRef::Populated(animal) => Some(animal),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            AnimalRef::Id(id) => id.clone(),
            AnimalRef::Populated(animal) => animal.display_name(),
        }
    }
}

/// Body of `PUT /livestock/:animalId/health-status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHealthStatusRequest {
    pub health_status: HealthStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_ref_accepts_id_or_populated() {
        let bare: AnimalRef = serde_json::from_str(r#""cow-1""#).expect("bare id");
        assert_eq!(bare.id(), "cow-1");
        assert!(bare.summary().is_none());

        let populated: AnimalRef = serde_json::from_str(
            r#"{"_id":"cow-2","tagNumber":"A-102","name":"Bessie","healthStatus":"sick"}"#,
        )
        .expect("populated animal");
        assert_eq!(populated.id(), "cow-2");
        assert_eq!(populated.display_name(), "Bessie (#A-102)");
        assert_eq!(
            populated.summary().and_then(|a| a.health_status),
            Some(HealthStatus::Sick)
        );
    }

    #[test]
    fn test_unknown_health_status_does_not_fail_parsing() {
        let animal: AnimalSummary =
            serde_json::from_str(r#"{"id":"goat-3","healthStatus":"deceased"}"#).expect("animal");
        assert_eq!(animal.health_status, Some(HealthStatus::Unknown));
        assert_eq!(animal.display_name(), "goat-3");
    }

    #[test]
    fn test_health_status_form_values() {
        assert_eq!(HealthStatus::from_form_value("Recovering"), Some(HealthStatus::Recovering));
        assert_eq!(HealthStatus::from_form_value("sick"), Some(HealthStatus::Sick));
        assert_eq!(HealthStatus::from_form_value("unknown"), None);
        assert_eq!(HealthStatus::from_form_value(""), None);
    }

    #[test]
    fn test_update_health_status_wire_format() {
        let body = serde_json::to_value(UpdateHealthStatusRequest {
            health_status: HealthStatus::Quarantined,
        })
        .expect("serialize");
        assert_eq!(body, serde_json::json!({ "healthStatus": "quarantined" }));
    }
}
