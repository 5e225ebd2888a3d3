use contracts::dashboards::d402_driver_performance::{sample_drivers, DriverMetrics};

use crate::shared::api_utils::get_json;

/// Where the figures on screen came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverData {
    Live(Vec<DriverMetrics>),
    /// The API failed; bundled demo figures are shown instead.
    Sample { drivers: Vec<DriverMetrics>, reason: String },
}

impl DriverData {
    pub fn from_result(result: Result<Vec<DriverMetrics>, String>) -> Self {
        match result {
            Ok(drivers) => DriverData::Live(drivers),
            Err(reason) => DriverData::Sample {
                drivers: sample_drivers(),
                reason,
            },
        }
    }

    pub fn drivers(&self) -> &[DriverMetrics] {
        match self {
            DriverData::Live(drivers) => drivers,
            DriverData::Sample { drivers, .. } => drivers,
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, DriverData::Sample { .. })
    }
}

pub async fn get_driver_performance() -> Result<Vec<DriverMetrics>, String> {
    get_json("/api/drivers/performance").await
}

/// Live figures, or the sample set when the API cannot be reached.
pub async fn load_drivers() -> DriverData {
    let result = get_driver_performance().await;
    if let Err(e) = &result {
        log::warn!("Driver performance API failed, showing sample data: {}", e);
    }
    DriverData::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_falls_back_to_samples() {
        let data = DriverData::from_result(Err("Failed to send request: offline".into()));
        assert!(data.is_sample());
        assert_eq!(data.drivers().len(), sample_drivers().len());
    }

    #[test]
    fn success_is_live_even_when_empty() {
        let data = DriverData::from_result(Ok(Vec::new()));
        assert!(!data.is_sample());
        assert!(data.drivers().is_empty());
    }
}
