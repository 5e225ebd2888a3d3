use serde::{Deserialize, Serialize};

use super::aggregate::VehicleRecord;
use crate::domain::a003_allocation::AllocationRecord;

pub const NO_DRIVER_ASSIGNED: &str = "No driver assigned";

/// One vehicle with everything the lookup and asset pages show about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetail {
    pub vehicle: VehicleRecord,
    #[serde(default)]
    pub year: Option<i32>,
    /// Engineer on the current allocation, or [`NO_DRIVER_ASSIGNED`].
    pub driver_name: String,
    /// Newest first.
    pub allocations: Vec<AllocationRecord>,
}

impl VehicleDetail {
    pub fn new(vehicle: VehicleRecord, year: Option<i32>, allocations: Vec<AllocationRecord>) -> Self {
        let driver_name = assigned_driver(&allocations);
        VehicleDetail {
            vehicle,
            year,
            driver_name,
            allocations,
        }
    }
}

/// Name of the engineer holding the vehicle now.
pub fn assigned_driver(allocations: &[AllocationRecord]) -> String {
    allocations
        .iter()
        .filter(|a| a.is_current())
        .max_by_key(|a| a.start_date)
        .map(|a| {
            a.engineer_name
                .clone()
                .unwrap_or_else(|| a.service_resource_id.clone())
        })
        .unwrap_or_else(|| NO_DRIVER_ASSIGNED.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetListResponse {
    pub total: usize,
    pub assets: Vec<VehicleRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn allocation(engineer: &str, name: Option<&str>, start: (i32, u32, u32), ended: bool) -> AllocationRecord {
        let start = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        AllocationRecord {
            id: format!("AL-{}", engineer),
            vehicle_id: "V1".into(),
            service_resource_id: engineer.into(),
            engineer_name: name.map(str::to_string),
            start_date: start,
            end_date: ended.then_some(start),
            contact_number: None,
        }
    }

    #[test]
    fn driver_comes_from_the_current_allocation() {
        let history = vec![
            allocation("E2", Some("Priya Shah"), (2025, 5, 1), false),
            allocation("E1", Some("Tom Reed"), (2024, 1, 1), true),
        ];
        assert_eq!(assigned_driver(&history), "Priya Shah");
    }

    #[test]
    fn unnamed_engineer_falls_back_to_id() {
        let history = vec![allocation("E7", None, (2025, 5, 1), false)];
        assert_eq!(assigned_driver(&history), "E7");
    }

    #[test]
    fn no_current_allocation_means_no_driver() {
        assert_eq!(assigned_driver(&[]), NO_DRIVER_ASSIGNED);
        let history = vec![allocation("E1", Some("Tom Reed"), (2024, 1, 1), true)];
        assert_eq!(assigned_driver(&history), NO_DRIVER_ASSIGNED);
    }
}
