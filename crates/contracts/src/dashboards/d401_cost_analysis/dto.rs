use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Vehicle analysis
// ============================================================================

/// Annual spend per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub insurance: f64,
    pub repairs: f64,
    pub fuel: f64,
    pub tax: f64,
    pub other: f64,
}

/// Cost categories in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Insurance,
    Repairs,
    Fuel,
    Tax,
    Other,
}

impl CostCategory {
    pub const ALL: [CostCategory; 5] = [
        CostCategory::Insurance,
        CostCategory::Repairs,
        CostCategory::Fuel,
        CostCategory::Tax,
        CostCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Insurance => "Insurance",
            CostCategory::Repairs => "Repairs",
            CostCategory::Fuel => "Fuel",
            CostCategory::Tax => "Tax",
            CostCategory::Other => "Other",
        }
    }
}

impl CostCategory {
    /// Category a ledger payment type is reported under.
    pub fn from_payment_type(payment_type: &str) -> Self {
        let kind = payment_type.trim().to_lowercase();
        if kind.contains("insurance") {
            CostCategory::Insurance
        } else if kind.contains("fuel") {
            CostCategory::Fuel
        } else if kind.contains("tax") {
            CostCategory::Tax
        } else if ["repair", "service", "maintenance", "tyre", "parts"]
            .iter()
            .any(|k| kind.contains(k))
            || kind.split(|c: char| !c.is_alphanumeric()).any(|word| word == "mot")
        {
            CostCategory::Repairs
        } else {
            CostCategory::Other
        }
    }
}

impl CostBreakdown {
    pub fn add_amount(&mut self, category: CostCategory, amount: f64) {
        match category {
            CostCategory::Insurance => self.insurance += amount,
            CostCategory::Repairs => self.repairs += amount,
            CostCategory::Fuel => self.fuel += amount,
            CostCategory::Tax => self.tax += amount,
            CostCategory::Other => self.other += amount,
        }
    }

    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Insurance => self.insurance,
            CostCategory::Repairs => self.repairs,
            CostCategory::Fuel => self.fuel,
            CostCategory::Tax => self.tax,
            CostCategory::Other => self.other,
        }
    }

    pub fn total(&self) -> f64 {
        self.insurance + self.repairs + self.fuel + self.tax + self.other
    }

    pub fn add(&mut self, other: &CostBreakdown) {
        self.insurance += other.insurance;
        self.repairs += other.repairs;
        self.fuel += other.fuel;
        self.tax += other.tax;
        self.other += other.other;
    }
}

/// Spend in one calendar month, e.g. `"Jan 2025"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCost {
    pub month: String,
    pub total: f64,
}

impl MonthlyCost {
    /// Month name without the year, for axis labels.
    pub fn short_label(&self) -> &str {
        self.month.split(' ').next().unwrap_or(&self.month)
    }
}

/// Cost profile of one vehicle over the last year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleCostData {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub vehicle_type: String,
    pub costs: CostBreakdown,
    /// Oldest month first; twelve points expected.
    pub monthly_history: Vec<MonthlyCost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleAnalysisResponse {
    pub vehicles: Vec<VehicleCostData>,
}

// ============================================================================
// Service cost lookup
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub id: String,
    pub name: String,
    pub van_number: String,
    pub registration: String,
    pub vehicle_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCosts {
    pub total_cost: f64,
    pub monthly_average: f64,
    /// payment type -> amount
    pub cost_by_type: BTreeMap<String, f64>,
    pub cost_types_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCostResponse {
    pub success: bool,
    pub vehicle: VehicleInfo,
    pub service_costs: ServiceCosts,
}

// ============================================================================
// Fleet cost overview
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetCostSummary {
    pub total_fleet_cost: f64,
    pub average_vehicle_cost: f64,
    pub vehicle_count: usize,
    pub vehicles_with_costs: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleCostTotal {
    pub vehicle_id: String,
    pub name: String,
    pub van_number: String,
    pub registration: String,
    pub vehicle_type: String,
    pub status: String,
    pub total_cost: f64,
    pub cost_breakdown: BTreeMap<String, f64>,
    pub monthly_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllVehicleCostsResponse {
    pub success: bool,
    pub summary: FleetCostSummary,
    pub cost_breakdown_by_type: BTreeMap<String, f64>,
    /// Sorted by total cost, highest first
    pub vehicles: Vec<VehicleCostTotal>,
    pub top_cost_vehicles: Vec<VehicleCostTotal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_types_map_to_categories() {
        assert_eq!(CostCategory::from_payment_type("Insurance Premium"), CostCategory::Insurance);
        assert_eq!(CostCategory::from_payment_type("Fuel Card"), CostCategory::Fuel);
        assert_eq!(CostCategory::from_payment_type("Road Tax"), CostCategory::Tax);
        assert_eq!(CostCategory::from_payment_type("Maintenance"), CostCategory::Repairs);
        assert_eq!(CostCategory::from_payment_type("Tyres"), CostCategory::Repairs);
        assert_eq!(CostCategory::from_payment_type("Congestion Charge"), CostCategory::Other);
    }

    #[test]
    fn mot_is_matched_as_a_word() {
        assert_eq!(CostCategory::from_payment_type("MOT"), CostCategory::Repairs);
        assert_eq!(CostCategory::from_payment_type("MOT Test"), CostCategory::Repairs);
        assert_eq!(CostCategory::from_payment_type("Annual MOT/retest"), CostCategory::Repairs);
        assert_eq!(CostCategory::from_payment_type("Motorway toll"), CostCategory::Other);
        assert_eq!(CostCategory::from_payment_type("Remote locking"), CostCategory::Other);
    }

    #[test]
    fn short_month_label() {
        let m = MonthlyCost {
            month: "Mar 2025".into(),
            total: 1.0,
        };
        assert_eq!(m.short_label(), "Mar");
    }
}
