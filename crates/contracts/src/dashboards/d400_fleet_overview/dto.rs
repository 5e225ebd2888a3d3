use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::a001_vehicle::VehicleRecord;

/// Status counters shown on the fleet overview cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub total: u32,
    pub allocated: u32,
    pub garage: u32,
    pub due_service: u32,
    pub spare_ready: u32,
    pub reserved: u32,
    pub written_off: u32,
    /// MOT due within the configured window
    pub mot_due: u32,
    /// Road tax due within the configured window
    pub tax_due: u32,
}

/// Vehicles behind one summary card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleListResponse {
    /// Status key or window name, e.g. "allocated" or "mot_due"
    pub filter: String,
    pub count: usize,
    pub vehicles: Vec<VehicleRecord>,
}

/// One bar of the trade-group stacked chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeGroupRow {
    pub name: String,
    pub allocated: u32,
    pub spare: u32,
    pub reserved: u32,
    pub spare_not_available: u32,
}

impl TradeGroupRow {
    pub fn total(&self) -> u32 {
        self.allocated + self.spare + self.reserved + self.spare_not_available
    }
}

/// Vehicle-type mix of one trade group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleTypeRow {
    pub name: String,
    /// vehicle type -> count
    pub counts: BTreeMap<String, u32>,
}

impl VehicleTypeRow {
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: u32,
}

/// A vehicle flagged for service because of its spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDueRow {
    pub van_number: String,
    pub reg_no: String,
    pub trade_group: String,
    pub service_cost: f64,
    pub maintenance_cost: f64,
}

/// Everything the fleet overview charts need, in one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetOverviewResponse {
    pub summary: VehicleSummary,
    pub trade_groups: Vec<TradeGroupRow>,
    pub vehicle_types: Vec<VehicleTypeRow>,
    pub vehicle_type_totals: Vec<NamedCount>,
    pub spare_by_trade_group: Vec<NamedCount>,
    pub service_due: Vec<ServiceDueRow>,
}
