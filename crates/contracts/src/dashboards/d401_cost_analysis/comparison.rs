use serde::{Deserialize, Serialize};

use super::dto::{CostCategory, VehicleCostData};

pub const MAX_COMPARED_VEHICLES: usize = 4;

/// Ordered set of vehicle ids picked for side-by-side comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    pub fn new(initial: impl IntoIterator<Item = String>) -> Self {
        let mut selection = Self::default();
        for id in initial {
            selection.add(id);
        }
        selection
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARED_VEHICLES
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Returns false when the selection is full or already has `id`.
    pub fn add(&mut self, id: String) -> bool {
        if self.is_full() || self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|s| s != id);
    }

    /// Selected vehicles in selection order; unknown ids are skipped.
    pub fn selected<'a>(&self, vehicles: &'a [VehicleCostData]) -> Vec<&'a VehicleCostData> {
        self.ids
            .iter()
            .filter_map(|id| vehicles.iter().find(|v| &v.id == id))
            .collect()
    }

    /// Vehicles that can still be added.
    pub fn available<'a>(&self, vehicles: &'a [VehicleCostData]) -> Vec<&'a VehicleCostData> {
        vehicles.iter().filter(|v| !self.contains(&v.id)).collect()
    }
}

/// One category of the comparison chart: a value per selected vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub category: CostCategory,
    /// (vehicle id, amount) in selection order
    pub values: Vec<(String, f64)>,
}

pub fn comparison_rows(selected: &[&VehicleCostData]) -> Vec<ComparisonRow> {
    CostCategory::ALL
        .into_iter()
        .map(|category| ComparisonRow {
            category,
            values: selected
                .iter()
                .map(|v| (v.id.clone(), v.costs.get(category)))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d401_cost_analysis::dto::CostBreakdown;

    fn vehicle(id: &str, fuel: f64) -> VehicleCostData {
        VehicleCostData {
            id: id.into(),
            name: id.into(),
            year: 2020,
            vehicle_type: "Van".into(),
            costs: CostBreakdown {
                fuel,
                ..Default::default()
            },
            monthly_history: Vec::new(),
        }
    }

    #[test]
    fn selection_caps_at_four_and_ignores_duplicates() {
        let mut selection = ComparisonSelection::default();
        for id in ["A", "B", "C", "D"] {
            assert!(selection.add(id.into()));
        }
        assert!(!selection.add("E".into()));
        assert_eq!(selection.len(), MAX_COMPARED_VEHICLES);

        selection.remove("B");
        assert!(!selection.add("A".into()));
        assert!(selection.add("E".into()));
        assert_eq!(selection.ids(), &["A", "C", "D", "E"]);
    }

    #[test]
    fn rows_follow_selection_order() {
        let fleet = vec![vehicle("A", 10.0), vehicle("B", 20.0), vehicle("C", 30.0)];
        let selection = ComparisonSelection::new(vec!["C".to_string(), "A".to_string(), "X".to_string()]);
        let selected = selection.selected(&fleet);
        assert_eq!(selected.len(), 2);
        assert_eq!(selection.available(&fleet).len(), 1);

        let rows = comparison_rows(&selected);
        let fuel = rows.iter().find(|r| r.category == CostCategory::Fuel).unwrap();
        assert_eq!(fuel.values, vec![("C".to_string(), 30.0), ("A".to_string(), 10.0)]);
    }
}
