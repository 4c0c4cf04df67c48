use thiserror::Error;

/// Failure talking to the livestock API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Request was cancelled")]
    Aborted,
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

/// What the user is shown inline when a view action fails
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Could not load schedules. {0}")]
    FetchFailure(ApiError),

    #[error("Could not load this schedule. {0}")]
    DetailFetchFailure(ApiError),

    #[error("Could not save the treatment. {0}")]
    SubmitFailure(ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_errors_name_what_failed() {
        let missing = ApiError::Status {
            status: 404,
            body: "Schedule sch-999 not found".to_string(),
        };

        assert_eq!(
            ViewError::DetailFetchFailure(missing.clone()).to_string(),
            "Could not load this schedule. Server error 404: Schedule sch-999 not found"
        );
        assert_eq!(
            ViewError::FetchFailure(ApiError::Network("offline".to_string())).to_string(),
            "Could not load schedules. Network error: offline"
        );
        assert!(ViewError::SubmitFailure(missing).to_string().starts_with("Could not save the treatment."));
    }
}
