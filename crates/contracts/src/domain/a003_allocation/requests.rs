use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::AllocationRecord;

pub const ENGINEER_AND_START_REQUIRED: &str = "Engineer and start date are required";

/// Parse a `YYYY-MM-DD` date as produced by an `<input type="date">`.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| format!("Invalid date: {}", raw))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ============================================================================
// Create
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAllocationRequest {
    pub vehicle_id: String,
    pub service_resource_id: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
}

impl CreateAllocationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.vehicle_id.trim().is_empty() {
            return Err("Vehicle is required".into());
        }
        if self.service_resource_id.trim().is_empty() || self.start_date.trim().is_empty() {
            return Err(ENGINEER_AND_START_REQUIRED.into());
        }
        let start = parse_iso_date(&self.start_date)?;
        if let Some(end) = non_blank(&self.end_date) {
            if parse_iso_date(end)? < start {
                return Err("End date cannot be before start date".into());
            }
        }
        Ok(())
    }

    pub fn parsed_start_date(&self) -> Result<NaiveDate, String> {
        parse_iso_date(&self.start_date)
    }

    pub fn parsed_end_date(&self) -> Result<Option<NaiveDate>, String> {
        non_blank(&self.end_date).map(parse_iso_date).transpose()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationCreatedResponse {
    pub success: bool,
    pub message: String,
    pub allocation_id: String,
    pub previous_allocation_closed: bool,
}

// ============================================================================
// Update
// ============================================================================

/// Partial update; `None` leaves a field unchanged.
///
/// For `end_date`, `Some("")` clears it and makes the allocation current again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateAllocationRequest {
    pub allocation_id: String,
    #[serde(default)]
    pub service_resource_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
}

impl UpdateAllocationRequest {
    pub fn has_changes(&self) -> bool {
        self.service_resource_id.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.contact_number.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.allocation_id.trim().is_empty() {
            return Err("Allocation id is required".into());
        }
        if !self.has_changes() {
            return Err("No fields provided to update".into());
        }
        if let Some(engineer) = &self.service_resource_id {
            if engineer.trim().is_empty() {
                return Err(ENGINEER_AND_START_REQUIRED.into());
            }
        }
        let start = match &self.start_date {
            Some(raw) if raw.trim().is_empty() => return Err(ENGINEER_AND_START_REQUIRED.into()),
            Some(raw) => Some(parse_iso_date(raw)?),
            None => None,
        };
        if let Some(end) = non_blank(&self.end_date) {
            let end = parse_iso_date(end)?;
            if matches!(start, Some(s) if end < s) {
                return Err("End date cannot be before start date".into());
            }
        }
        Ok(())
    }

    /// Apply the changes to `record`. Call [`validate`](Self::validate) first.
    pub fn apply_to(&self, record: &mut AllocationRecord) -> Result<(), String> {
        if let Some(engineer) = &self.service_resource_id {
            if engineer != &record.service_resource_id {
                record.engineer_name = None;
            }
            record.service_resource_id = engineer.trim().to_string();
        }
        if let Some(start) = &self.start_date {
            record.start_date = parse_iso_date(start)?;
        }
        if let Some(end) = &self.end_date {
            record.end_date = match end.trim() {
                "" => None,
                raw => Some(parse_iso_date(raw)?),
            };
        }
        if let Some(phone) = &self.contact_number {
            record.contact_number = Some(phone.trim().to_string()).filter(|p| !p.is_empty());
        }
        if let Some(end) = record.end_date {
            if end < record.start_date {
                return Err("End date cannot be before start date".into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationUpdatedResponse {
    pub success: bool,
    pub message: String,
    pub allocation: AllocationRecord,
}

// ============================================================================
// Delete
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAllocationRequest {
    pub allocation_id: String,
}

impl DeleteAllocationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.allocation_id.trim().is_empty() {
            return Err("Allocation id is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationDeletedResponse {
    pub success: bool,
    pub message: String,
    pub allocation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationHistoryResponse {
    pub vehicle_id: String,
    pub allocations: Vec<AllocationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_allocation::AllocationStatus;

    fn create(engineer: &str, start: &str) -> CreateAllocationRequest {
        CreateAllocationRequest {
            vehicle_id: "V1".into(),
            service_resource_id: engineer.into(),
            start_date: start.into(),
            end_date: None,
            contact_number: None,
        }
    }

    fn record() -> AllocationRecord {
        AllocationRecord {
            id: "A1".into(),
            vehicle_id: "V1".into(),
            service_resource_id: "E1".into(),
            engineer_name: Some("Alice Walker".into()),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: None,
            contact_number: Some("07700 900551".into()),
        }
    }

    #[test]
    fn create_requires_engineer_and_start_date() {
        assert_eq!(create("", "2025-04-01").validate(), Err(ENGINEER_AND_START_REQUIRED.to_string()));
        assert_eq!(create("E1", "").validate(), Err(ENGINEER_AND_START_REQUIRED.to_string()));
        assert!(create("E1", "2025-04-01").validate().is_ok());
        assert!(create("E1", "01/04/2025").validate().is_err());
    }

    #[test]
    fn create_rejects_end_before_start() {
        let mut req = create("E1", "2025-04-01");
        req.end_date = Some("2025-03-01".into());
        assert!(req.validate().is_err());
        req.end_date = Some(String::new());
        assert!(req.validate().is_ok());
        assert_eq!(req.parsed_end_date(), Ok(None));
    }

    #[test]
    fn update_without_fields_is_rejected() {
        let req = UpdateAllocationRequest {
            allocation_id: "A1".into(),
            ..Default::default()
        };
        assert_eq!(req.validate(), Err("No fields provided to update".to_string()));
    }

    #[test]
    fn update_sets_and_clears_end_date() {
        let mut rec = record();
        let close = UpdateAllocationRequest {
            allocation_id: "A1".into(),
            end_date: Some("2025-09-30".into()),
            ..Default::default()
        };
        close.validate().unwrap();
        close.apply_to(&mut rec).unwrap();
        assert_eq!(rec.status(), AllocationStatus::Past);
        assert_eq!(rec.start_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());

        let reopen = UpdateAllocationRequest {
            allocation_id: "A1".into(),
            end_date: Some(String::new()),
            ..Default::default()
        };
        reopen.apply_to(&mut rec).unwrap();
        assert_eq!(rec.status(), AllocationStatus::Current);
    }

    #[test]
    fn update_keeps_manually_edited_contact_number() {
        let mut rec = record();
        let req = UpdateAllocationRequest {
            allocation_id: "A1".into(),
            contact_number: Some("01632 960000".into()),
            ..Default::default()
        };
        req.apply_to(&mut rec).unwrap();
        assert_eq!(rec.contact_number.as_deref(), Some("01632 960000"));
        assert_eq!(rec.service_resource_id, "E1");
    }

    #[test]
    fn delete_needs_an_allocation_id() {
        let blank = DeleteAllocationRequest {
            allocation_id: "  ".into(),
        };
        assert_eq!(blank.validate(), Err("Allocation id is required".to_string()));
        let named = DeleteAllocationRequest {
            allocation_id: "AL-001".into(),
        };
        assert!(named.validate().is_ok());
    }
}
