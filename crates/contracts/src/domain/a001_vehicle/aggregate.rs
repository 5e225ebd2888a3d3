use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::money::parse_money;

// ============================================================================
// Status
// ============================================================================

/// Operational status of a vehicle as recorded in the fleet register.
///
/// The register is free-text, so several spellings map onto one variant.
/// Matching ignores case. Variants with aliases keep the register's label so
/// a record reads back the way it was entered, and anything unknown is kept
/// verbatim in [`VehicleStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum VehicleStatus {
    Allocated,
    Spare(&'static str),
    SpareNotAvailable,
    InGarage(&'static str),
    DueService(&'static str),
    Reserved,
    WrittenOff,
    Sold,
    Other(String),
}

const SPARE_LABELS: [&str; 5] = ["Spare", "Spare Ready", "Spare_Ready", "Spare Tankers", "Spare in Garage"];
const GARAGE_LABELS: [&str; 3] = ["Garage", "In Garage", "Under Repair"];
const DUE_SERVICE_LABELS: [&str; 3] = ["Due for Service", "Service Due", "Due_Service"];

fn known_label(labels: &[&'static str], raw: &str) -> Option<&'static str> {
    labels.iter().copied().find(|label| label.eq_ignore_ascii_case(raw))
}

impl VehicleStatus {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(label) = known_label(&SPARE_LABELS, raw) {
            return VehicleStatus::Spare(label);
        }
        if let Some(label) = known_label(&GARAGE_LABELS, raw) {
            return VehicleStatus::InGarage(label);
        }
        if let Some(label) = known_label(&DUE_SERVICE_LABELS, raw) {
            return VehicleStatus::DueService(label);
        }
        match raw.to_ascii_lowercase().as_str() {
            "allocated" => VehicleStatus::Allocated,
            "spare not available" => VehicleStatus::SpareNotAvailable,
            "reserved" => VehicleStatus::Reserved,
            "written off" | "written_off" => VehicleStatus::WrittenOff,
            "sold" => VehicleStatus::Sold,
            _ => VehicleStatus::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VehicleStatus::Allocated => "Allocated",
            VehicleStatus::Spare(label)
            | VehicleStatus::InGarage(label)
            | VehicleStatus::DueService(label) => *label,
            VehicleStatus::SpareNotAvailable => "Spare Not Available",
            VehicleStatus::Reserved => "Reserved",
            VehicleStatus::WrittenOff => "Written Off",
            VehicleStatus::Sold => "Sold",
            VehicleStatus::Other(raw) => raw,
        }
    }

    pub fn is_spare(&self) -> bool {
        matches!(self, VehicleStatus::Spare(_))
    }

    /// Dashboard counter this status contributes to, if any.
    pub fn bucket(&self) -> Option<StatusBucket> {
        match self {
            VehicleStatus::Allocated => Some(StatusBucket::Allocated),
            VehicleStatus::InGarage(_) => Some(StatusBucket::Garage),
            VehicleStatus::DueService(_) => Some(StatusBucket::DueService),
            VehicleStatus::Spare(_) | VehicleStatus::SpareNotAvailable => Some(StatusBucket::SpareReady),
            VehicleStatus::Reserved => Some(StatusBucket::Reserved),
            VehicleStatus::WrittenOff => Some(StatusBucket::WrittenOff),
            VehicleStatus::Sold | VehicleStatus::Other(_) => None,
        }
    }
}

impl From<String> for VehicleStatus {
    fn from(value: String) -> Self {
        VehicleStatus::parse(&value)
    }
}

// Equivalent to `#[serde(from = "String")]`; written by hand because the
// derive adds a `'de: 'static` bound for the `&'static str` fields.
impl<'de> Deserialize<'de> for VehicleStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(VehicleStatus::from)
    }
}

impl From<VehicleStatus> for String {
    fn from(value: VehicleStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Friendly status keys used by the dashboard drill-down URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Allocated,
    Garage,
    DueService,
    SpareReady,
    Reserved,
    WrittenOff,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 6] = [
        StatusBucket::Allocated,
        StatusBucket::Garage,
        StatusBucket::DueService,
        StatusBucket::SpareReady,
        StatusBucket::Reserved,
        StatusBucket::WrittenOff,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StatusBucket::Allocated => "allocated",
            StatusBucket::Garage => "garage",
            StatusBucket::DueService => "due_service",
            StatusBucket::SpareReady => "spare_ready",
            StatusBucket::Reserved => "reserved",
            StatusBucket::WrittenOff => "written_off",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::Allocated => "Allocated",
            StatusBucket::Garage => "In Garage",
            StatusBucket::DueService => "Due Service",
            StatusBucket::SpareReady => "Spare Ready",
            StatusBucket::Reserved => "Reserved",
            StatusBucket::WrittenOff => "Written Off",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A vehicle in the fleet register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub van_number: String,
    pub reg_no: String,
    pub status: VehicleStatus,
    pub vehicle_type: String,
    pub trade_group: String,
    /// Currency-formatted, e.g. `"GBP 1,070.03"`.
    pub service_cost: String,
    /// Currency-formatted, e.g. `"GBP 0.00"`.
    pub maintenance_cost: String,
    #[serde(default)]
    pub make_model: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub vehicle_ownership: Option<String>,
    #[serde(default)]
    pub next_mot_due: Option<NaiveDate>,
    #[serde(default)]
    pub road_tax_due: Option<NaiveDate>,
    #[serde(default)]
    pub next_service_due: Option<NaiveDate>,
}

impl VehicleRecord {
    pub fn service_cost_value(&self) -> f64 {
        parse_money(&self.service_cost)
    }

    pub fn maintenance_cost_value(&self) -> f64 {
        parse_money(&self.maintenance_cost)
    }

    /// Display name: make/model when known, otherwise the van number.
    pub fn display_name(&self) -> String {
        match &self.make_model {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Van {}", self.van_number),
        }
    }

    /// True when `due` falls within `days` of `today` (inclusive), overdue included.
    fn due_within(due: Option<NaiveDate>, today: NaiveDate, days: i64) -> bool {
        match due {
            Some(date) => (date - today).num_days() <= days,
            None => false,
        }
    }

    pub fn mot_due_within(&self, today: NaiveDate, days: i64) -> bool {
        Self::due_within(self.next_mot_due, today, days)
    }

    pub fn tax_due_within(&self, today: NaiveDate, days: i64) -> bool {
        Self::due_within(self.road_tax_due, today, days)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.van_number.trim().is_empty() {
            return Err("Van number must not be empty".into());
        }
        if self.reg_no.trim().is_empty() {
            return Err("Registration must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(status: &str) -> VehicleRecord {
        VehicleRecord {
            id: "V1".into(),
            van_number: "1001".into(),
            reg_no: "AB12 CDE".into(),
            status: VehicleStatus::parse(status),
            vehicle_type: "Medium Van".into(),
            trade_group: "Plumbing".into(),
            service_cost: "GBP 1,070.03".into(),
            maintenance_cost: "GBP 0.00".into(),
            make_model: None,
            transmission: None,
            vehicle_ownership: None,
            next_mot_due: NaiveDate::from_ymd_opt(2026, 3, 10),
            road_tax_due: None,
            next_service_due: None,
        }
    }

    #[test]
    fn status_aliases_map_to_one_bucket() {
        for raw in ["Garage", "In Garage", "Under Repair"] {
            assert_eq!(VehicleStatus::parse(raw).bucket(), Some(StatusBucket::Garage));
        }
        for raw in ["Due for Service", "Service Due", "Due_Service"] {
            assert_eq!(VehicleStatus::parse(raw).bucket(), Some(StatusBucket::DueService));
        }
        for raw in ["Spare", "Spare Ready", "Spare Tankers", "Spare in Garage", "Spare Not Available"] {
            assert_eq!(VehicleStatus::parse(raw).bucket(), Some(StatusBucket::SpareReady));
        }
        assert_eq!(VehicleStatus::parse("Sold").bucket(), None);
        assert_eq!(VehicleStatus::parse("Mystery").bucket(), None);
    }

    #[test]
    fn unknown_status_survives_serde() {
        let status: VehicleStatus = serde_json::from_str("\"On Loan\"").unwrap();
        assert_eq!(status, VehicleStatus::Other("On Loan".into()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"On Loan\"");
    }

    #[test]
    fn status_matching_ignores_case() {
        assert_eq!(VehicleStatus::parse("allocated"), VehicleStatus::Allocated);
        assert_eq!(VehicleStatus::parse(" reserved "), VehicleStatus::Reserved);
        assert_eq!(VehicleStatus::parse("garage").bucket(), Some(StatusBucket::Garage));
        assert_eq!(VehicleStatus::parse("WRITTEN OFF"), VehicleStatus::WrittenOff);
        assert_eq!(VehicleStatus::parse("sold"), VehicleStatus::Sold);
    }

    #[test]
    fn aliases_keep_their_register_label() {
        for raw in ["Spare in Garage", "Spare Tankers", "Under Repair", "Service Due"] {
            let status = VehicleStatus::parse(raw);
            assert_eq!(status.as_str(), raw);
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", raw));
        }
        assert_eq!(VehicleStatus::parse("spare in garage").as_str(), "Spare in Garage");
        assert!(VehicleStatus::parse("Spare Tankers").is_spare());
        assert!(!VehicleStatus::parse("Spare Not Available").is_spare());
    }

    #[test]
    fn bucket_keys_round_trip() {
        for bucket in StatusBucket::ALL {
            assert_eq!(StatusBucket::from_key(bucket.key()), Some(bucket));
        }
        assert_eq!(StatusBucket::from_key("total"), None);
    }

    #[test]
    fn parses_cost_strings_and_due_dates() {
        let v = vehicle("Allocated");
        assert_eq!(v.service_cost_value(), 1070.03);
        assert_eq!(v.maintenance_cost_value(), 0.0);
        assert_eq!(v.display_name(), "Van 1001");

        let today = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
        assert!(v.mot_due_within(today, 30));
        assert!(!v.mot_due_within(today, 10));
        assert!(!v.tax_due_within(today, 365));
    }
}
