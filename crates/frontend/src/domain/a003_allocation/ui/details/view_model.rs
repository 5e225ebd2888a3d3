use chrono::NaiveDate;
use contracts::domain::a002_engineer::Engineer;
use contracts::domain::a003_allocation::{
    AllocationRecord, AllocationStatus, CreateAllocationRequest, UpdateAllocationRequest,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

/// Status the record would have with `end_date` as typed.
fn status_for(end_date: &str) -> AllocationStatus {
    if end_date.trim().is_empty() {
        AllocationStatus::Current
    } else {
        AllocationStatus::Past
    }
}

/// Fields of the "new allocation" form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AllocationFormState {
    pub vehicle_id: String,
    pub engineer: Option<Engineer>,
    pub start_date: String,
    pub end_date: String,
    pub contact_number: String,
}

impl AllocationFormState {
    pub fn new(vehicle_id: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            start_date: today.format(DATE_FORMAT).to_string(),
            ..Default::default()
        }
    }

    /// Picks `engineer` and copies their number into the contact field.
    /// Later edits to the contact field are left alone.
    pub fn select_engineer(&mut self, engineer: Engineer) {
        self.contact_number = engineer.contact_number.clone().unwrap_or_default();
        self.engineer = Some(engineer);
    }

    pub fn clear_engineer(&mut self) {
        self.engineer = None;
    }

    pub fn set_contact(&mut self, value: String) {
        self.contact_number = value;
    }

    pub fn set_start_date(&mut self, value: String) {
        self.start_date = value;
    }

    pub fn set_end_date(&mut self, value: String) {
        self.end_date = value;
    }

    pub fn status(&self) -> AllocationStatus {
        status_for(&self.end_date)
    }

    pub fn to_request(&self) -> CreateAllocationRequest {
        CreateAllocationRequest {
            vehicle_id: self.vehicle_id.clone(),
            service_resource_id: self
                .engineer
                .as_ref()
                .map(|e| e.id.clone())
                .unwrap_or_default(),
            start_date: self.start_date.trim().to_string(),
            end_date: optional(&self.end_date),
            contact_number: optional(&self.contact_number),
        }
    }

    /// Validates and hands the request to `send`. Nothing is sent when
    /// validation fails.
    pub fn submit<F: FnOnce(CreateAllocationRequest)>(&self, send: F) -> Result<(), String> {
        let request = self.to_request();
        request.validate()?;
        send(request);
        Ok(())
    }
}

/// In-place edit of an existing allocation. Only changed fields are sent.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationEditState {
    original: AllocationRecord,
    pub engineer_id: String,
    pub engineer_name: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub contact_number: String,
}

impl AllocationEditState {
    pub fn from_record(record: &AllocationRecord) -> Self {
        Self {
            original: record.clone(),
            engineer_id: record.service_resource_id.clone(),
            engineer_name: record.engineer_name.clone(),
            start_date: record.start_date.format(DATE_FORMAT).to_string(),
            end_date: record
                .end_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            contact_number: record.contact_number.clone().unwrap_or_default(),
        }
    }

    pub fn allocation_id(&self) -> &str {
        &self.original.id
    }

    pub fn select_engineer(&mut self, engineer: Engineer) {
        self.contact_number = engineer.contact_number.clone().unwrap_or_default();
        self.engineer_id = engineer.id;
        self.engineer_name = Some(engineer.name);
    }

    pub fn status(&self) -> AllocationStatus {
        status_for(&self.end_date)
    }

    pub fn to_request(&self) -> UpdateAllocationRequest {
        let original = Self::from_record(&self.original);
        let changed = |now: &str, before: &str| {
            let now = now.trim();
            (now != before.trim()).then(|| now.to_string())
        };
        UpdateAllocationRequest {
            allocation_id: self.original.id.clone(),
            service_resource_id: changed(&self.engineer_id, &original.engineer_id),
            start_date: changed(&self.start_date, &original.start_date),
            // An emptied end date goes out as "" and reopens the allocation.
            end_date: changed(&self.end_date, &original.end_date),
            contact_number: changed(&self.contact_number, &original.contact_number),
        }
    }

    pub fn submit<F: FnOnce(UpdateAllocationRequest)>(&self, send: F) -> Result<(), String> {
        let request = self.to_request();
        request.validate()?;
        send(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_allocation::requests::ENGINEER_AND_START_REQUIRED;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alice() -> Engineer {
        Engineer {
            id: "E1".into(),
            name: "Alice Walker".into(),
            email: Some("alice@fleet.example".into()),
            contact_number: Some("07700 900551".into()),
        }
    }

    fn record() -> AllocationRecord {
        AllocationRecord {
            id: "A1".into(),
            vehicle_id: "V1".into(),
            service_resource_id: "E1".into(),
            engineer_name: Some("Alice Walker".into()),
            start_date: date(2025, 4, 1),
            end_date: Some(date(2025, 9, 30)),
            contact_number: Some("07700 900551".into()),
        }
    }

    #[test]
    fn new_form_starts_today_without_engineer() {
        let form = AllocationFormState::new("V1", date(2025, 10, 2));
        assert_eq!(form.start_date, "2025-10-02");
        assert!(form.engineer.is_none());
        assert_eq!(form.status(), AllocationStatus::Current);
    }

    #[test]
    fn submit_without_engineer_never_sends() {
        let form = AllocationFormState::new("V1", date(2025, 10, 2));
        let mut sent = false;
        let result = form.submit(|_| sent = true);
        assert_eq!(result, Err(ENGINEER_AND_START_REQUIRED.to_string()));
        assert!(!sent);
    }

    #[test]
    fn submit_without_start_date_never_sends() {
        let mut form = AllocationFormState::new("V1", date(2025, 10, 2));
        form.select_engineer(alice());
        form.set_start_date(String::new());
        let mut sent = false;
        assert!(form.submit(|_| sent = true).is_err());
        assert!(!sent);
    }

    #[test]
    fn selecting_engineer_fills_contact_and_manual_edit_sticks() {
        let mut form = AllocationFormState::new("V1", date(2025, 10, 2));
        form.select_engineer(alice());
        assert_eq!(form.contact_number, "07700 900551");

        form.set_contact("01632 960000".into());
        let mut sent = None;
        form.submit(|req| sent = Some(req)).unwrap();
        let req = sent.unwrap();
        assert_eq!(req.service_resource_id, "E1");
        assert_eq!(req.contact_number.as_deref(), Some("01632 960000"));
        assert_eq!(req.end_date, None);
    }

    #[test]
    fn clearing_engineer_blocks_submission_again() {
        let mut form = AllocationFormState::new("V1", date(2025, 10, 2));
        form.select_engineer(alice());
        form.clear_engineer();
        assert!(form.submit(|_| {}).is_err());
    }

    #[test]
    fn end_date_marks_new_allocation_past() {
        let mut form = AllocationFormState::new("V1", date(2025, 10, 2));
        form.set_end_date("2025-12-31".into());
        assert_eq!(form.status(), AllocationStatus::Past);
    }

    #[test]
    fn unchanged_edit_is_rejected() {
        let edit = AllocationEditState::from_record(&record());
        let mut sent = false;
        let result = edit.submit(|_| sent = true);
        assert_eq!(result, Err("No fields provided to update".to_string()));
        assert!(!sent);
    }

    #[test]
    fn edit_sends_only_changed_fields() {
        let mut edit = AllocationEditState::from_record(&record());
        edit.contact_number = "01632 960000".into();
        let req = edit.to_request();
        assert_eq!(req.allocation_id, "A1");
        assert_eq!(req.contact_number.as_deref(), Some("01632 960000"));
        assert_eq!(req.start_date, None);
        assert_eq!(req.end_date, None);
        assert_eq!(req.service_resource_id, None);
    }

    #[test]
    fn clearing_end_date_reopens_allocation() {
        let mut edit = AllocationEditState::from_record(&record());
        assert_eq!(edit.status(), AllocationStatus::Past);
        edit.end_date = String::new();
        assert_eq!(edit.status(), AllocationStatus::Current);
        assert_eq!(edit.to_request().end_date.as_deref(), Some(""));
    }

    #[test]
    fn changing_engineer_refills_contact() {
        let mut edit = AllocationEditState::from_record(&record());
        edit.select_engineer(Engineer {
            id: "E2".into(),
            name: "Bob Stone".into(),
            email: None,
            contact_number: Some("07700 900123".into()),
        });
        let req = edit.to_request();
        assert_eq!(req.service_resource_id.as_deref(), Some("E2"));
        assert_eq!(req.contact_number.as_deref(), Some("07700 900123"));
        assert_eq!(edit.engineer_name.as_deref(), Some("Bob Stone"));
    }
}
