use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an allocation is still running. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    Current,
    Past,
}

impl AllocationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AllocationStatus::Current => "Current",
            AllocationStatus::Past => "Past",
        }
    }
}

/// Assignment of a vehicle to an engineer over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub id: String,
    pub vehicle_id: String,
    pub service_resource_id: String,
    #[serde(default)]
    pub engineer_name: Option<String>,
    pub start_date: NaiveDate,
    /// `None` while the allocation is current.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Copied from the engineer when selected, editable afterwards.
    #[serde(default)]
    pub contact_number: Option<String>,
}

impl AllocationRecord {
    pub fn status(&self) -> AllocationStatus {
        match self.end_date {
            None => AllocationStatus::Current,
            Some(_) => AllocationStatus::Past,
        }
    }

    pub fn is_current(&self) -> bool {
        self.status() == AllocationStatus::Current
    }

    /// Close the allocation on `end_date`; everything else is kept.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(end: Option<NaiveDate>) -> AllocationRecord {
        AllocationRecord {
            id: "A1".into(),
            vehicle_id: "V1".into(),
            service_resource_id: "E1".into(),
            engineer_name: Some("Alice Walker".into()),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: end,
            contact_number: Some("07700 900551".into()),
        }
    }

    #[test]
    fn open_allocation_is_current() {
        assert_eq!(record(None).status(), AllocationStatus::Current);
    }

    #[test]
    fn setting_end_date_makes_it_past_and_keeps_start() {
        let original = record(None);
        let closed = original.clone().with_end_date(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
        assert_eq!(closed.status(), AllocationStatus::Past);
        assert_eq!(closed.start_date, original.start_date);
        assert_eq!(closed.contact_number, original.contact_number);
    }
}
