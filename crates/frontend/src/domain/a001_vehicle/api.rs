use std::fmt;

use contracts::domain::a001_vehicle::VehicleDetail;

use crate::shared::api_utils::{fetch_json, FetchError};

/// Failure of a vehicle lookup; an unknown van number is reported on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleLookupError {
    NotFound { van_number: String },
    Failed(String),
}

impl VehicleLookupError {
    pub fn from_fetch(van_number: &str, err: FetchError) -> Self {
        match err {
            FetchError::Status { status: 404, .. } => VehicleLookupError::NotFound {
                van_number: van_number.to_string(),
            },
            other => VehicleLookupError::Failed(other.to_string()),
        }
    }
}

impl fmt::Display for VehicleLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleLookupError::NotFound { van_number } => {
                write!(f, "No vehicle found with van number {}", van_number)
            }
            VehicleLookupError::Failed(message) => write!(f, "{}", message),
        }
    }
}

pub async fn lookup_vehicle(van_number: &str) -> Result<VehicleDetail, VehicleLookupError> {
    fetch_json(&format!(
        "/api/vehicles/lookup/{}",
        urlencoding::encode(van_number)
    ))
    .await
    .map_err(|e| VehicleLookupError::from_fetch(van_number, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_van_is_not_found() {
        let err = VehicleLookupError::from_fetch(
            "999",
            FetchError::Status {
                status: 404,
                detail: "Vehicle with van number 999 not found".into(),
            },
        );
        assert_eq!(err.to_string(), "No vehicle found with van number 999");
    }

    #[test]
    fn other_failures_keep_the_fetch_message() {
        let err = VehicleLookupError::from_fetch("407", FetchError::Network("offline".into()));
        assert_eq!(err, VehicleLookupError::Failed("Failed to send request: offline".into()));
    }
}
