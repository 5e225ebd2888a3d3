use std::fmt;

use contracts::dashboards::d401_cost_analysis::{
    AllVehicleCostsResponse, ServiceCostResponse, VehicleAnalysisResponse, VehicleCostData,
};

use crate::shared::api_utils::{fetch_json, get_json, FetchError};

const API_BASE: &str = "/api/cost";

pub async fn get_all_vehicle_costs() -> Result<AllVehicleCostsResponse, String> {
    get_json(&format!("{}/all-vehicles", API_BASE)).await
}

pub async fn get_vehicle_analysis() -> Result<Vec<VehicleCostData>, String> {
    let response: VehicleAnalysisResponse =
        get_json(&format!("{}/vehicle-analysis", API_BASE)).await?;
    Ok(response.vehicles)
}

/// Failure of a service cost lookup. An unknown van number is its own case
/// so the page can say so plainly.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCostError {
    NotFound { van_number: String },
    Http { status: u16, message: String },
    /// The server answered but the body was not a service cost report.
    Parse(String),
    Network(String),
}

impl ServiceCostError {
    pub fn from_fetch(van_number: &str, err: FetchError) -> Self {
        match err {
            FetchError::Status { status: 404, .. } => ServiceCostError::NotFound {
                van_number: van_number.to_string(),
            },
            FetchError::Status { status, detail } => ServiceCostError::Http {
                status,
                message: if detail.is_empty() {
                    "Failed to fetch service costs".to_string()
                } else {
                    detail
                },
            },
            FetchError::Parse(e) => ServiceCostError::Parse(e),
            FetchError::Network(e) => ServiceCostError::Network(e),
        }
    }
}

impl fmt::Display for ServiceCostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceCostError::NotFound { van_number } => {
                write!(f, "Vehicle with van number {} not found", van_number)
            }
            ServiceCostError::Http { status, message } => write!(f, "{} (HTTP {})", message, status),
            ServiceCostError::Parse(e) => write!(f, "Unexpected response from the server: {}", e),
            ServiceCostError::Network(e) => write!(f, "Could not reach the server: {}", e),
        }
    }
}

/// Trimmed van number to look up, or the message to show instead.
pub fn lookup_target(input: &str) -> Result<String, String> {
    let van = input.trim();
    if van.is_empty() {
        Err("Please enter a van number".to_string())
    } else {
        Ok(van.to_string())
    }
}

pub async fn get_service_cost(van_number: &str) -> Result<ServiceCostResponse, ServiceCostError> {
    fetch_json(&format!(
        "{}/service/{}",
        API_BASE,
        urlencoding::encode(van_number)
    ))
    .await
    .map_err(|e| ServiceCostError::from_fetch(van_number, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinct() {
        let err = ServiceCostError::from_fetch(
            "999",
            FetchError::Status {
                status: 404,
                detail: "whatever".into(),
            },
        );
        assert_eq!(
            err,
            ServiceCostError::NotFound {
                van_number: "999".into()
            }
        );
        assert_eq!(err.to_string(), "Vehicle with van number 999 not found");
    }

    #[test]
    fn other_statuses_keep_their_detail() {
        let err = ServiceCostError::from_fetch(
            "407",
            FetchError::Status {
                status: 500,
                detail: String::new(),
            },
        );
        assert_eq!(err.to_string(), "Failed to fetch service costs (HTTP 500)");
        assert!(matches!(
            ServiceCostError::from_fetch("407", FetchError::Network("offline".into())),
            ServiceCostError::Network(_)
        ));
    }

    #[test]
    fn unreadable_body_is_a_parse_error() {
        let err = ServiceCostError::from_fetch("407", FetchError::Parse("missing field `vehicle`".into()));
        assert_eq!(err, ServiceCostError::Parse("missing field `vehicle`".into()));
        assert_eq!(
            err.to_string(),
            "Unexpected response from the server: missing field `vehicle`"
        );
    }

    #[test]
    fn blank_van_number_is_rejected_before_fetching() {
        assert_eq!(lookup_target("  "), Err("Please enter a van number".to_string()));
        assert_eq!(lookup_target(" 407 "), Ok("407".to_string()));
    }
}
