//! Rule-based observations shown next to the cost charts.

use serde::{Deserialize, Serialize};

use super::analytics::{
    fleet_average, fleet_average_cost, fleet_total, high_cost_vehicles, highest_cost_vehicle,
    highest_fuel_vehicle, lowest_cost_vehicle, percent_deviation, rising_cost_vehicles, total_cost,
    HIGH_COST_RATIO,
};
use super::dto::VehicleCostData;
use crate::shared::money::format_gbp_whole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

pub fn fleet_insights(vehicles: &[VehicleCostData]) -> Vec<Insight> {
    let (Some(cheapest), Some(dearest)) = (lowest_cost_vehicle(vehicles), highest_cost_vehicle(vehicles)) else {
        return Vec::new();
    };
    let average = fleet_average_cost(vehicles);
    let mut insights = Vec::new();

    let fuel: Vec<f64> = vehicles.iter().map(|v| v.costs.fuel).collect();
    if let Some(thirstiest) = highest_fuel_vehicle(vehicles) {
        insights.push(Insight {
            kind: InsightKind::Warning,
            title: format!("{} has the highest fuel costs", thirstiest.name),
            description: format!(
                "At {}/year, fuel costs are {:.0}% above the fleet average. Consider route optimisation or replacement.",
                format_gbp_whole(thirstiest.costs.fuel),
                percent_deviation(thirstiest.costs.fuel, fleet_average(&fuel)),
            ),
        });
    }

    let rising = rising_cost_vehicles(vehicles);
    insights.push(Insight {
        kind: InsightKind::Warning,
        title: format!("{} vehicles show rising costs", rising.len()),
        description: if rising.is_empty() {
            "All vehicles have stable or declining cost trends.".to_string()
        } else {
            format!(
                "{} are trending upward. Consider scheduling preventive inspections.",
                rising.iter().map(|v| v.id.as_str()).collect::<Vec<_>>().join(", ")
            )
        },
    });

    insights.push(Insight {
        kind: InsightKind::Success,
        title: format!("{} is the most cost-efficient", cheapest.name),
        description: format!(
            "Annual cost of {} is {:.0}% below the fleet average.",
            format_gbp_whole(total_cost(cheapest)),
            -percent_deviation(total_cost(cheapest), average),
        ),
    });

    let main_driver = if dearest.costs.repairs > dearest.costs.fuel { "repairs" } else { "fuel" };
    insights.push(Insight {
        kind: InsightKind::Info,
        title: format!("{} needs attention", dearest.name),
        description: format!(
            "{} in annual costs ({:.0}% above average), mostly from {}.",
            format_gbp_whole(total_cost(dearest)),
            percent_deviation(total_cost(dearest), average),
            main_driver,
        ),
    });

    insights.push(Insight {
        kind: InsightKind::Info,
        title: "Fleet cost summary".to_string(),
        description: format!(
            "The {}-vehicle fleet costs {}/year. {} vehicles exceed the {} high-cost threshold.",
            vehicles.len(),
            format_gbp_whole(fleet_total(vehicles)),
            high_cost_vehicles(vehicles).len(),
            format_gbp_whole(average * HIGH_COST_RATIO),
        ),
    });

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d401_cost_analysis::dto::CostBreakdown;

    fn vehicle(id: &str, repairs: f64, fuel: f64) -> VehicleCostData {
        VehicleCostData {
            id: id.into(),
            name: format!("Van {}", id),
            year: 2022,
            vehicle_type: "Van".into(),
            costs: CostBreakdown {
                repairs,
                fuel,
                ..Default::default()
            },
            monthly_history: Vec::new(),
        }
    }

    #[test]
    fn empty_fleet_has_no_insights() {
        assert!(fleet_insights(&[]).is_empty());
    }

    #[test]
    fn names_extremes() {
        let fleet = vec![vehicle("1", 100.0, 100.0), vehicle("2", 3000.0, 500.0)];
        let insights = fleet_insights(&fleet);
        assert_eq!(insights.len(), 5);
        assert_eq!(insights[0].title, "Van 2 has the highest fuel costs");
        assert_eq!(insights[2].title, "Van 1 is the most cost-efficient");
        assert!(insights[3].description.contains("mostly from repairs"));
        assert_eq!(insights[1].description, "All vehicles have stable or declining cost trends.");
    }

    #[test]
    fn fuel_tie_names_the_first_vehicle() {
        let fleet = vec![
            vehicle("1", 100.0, 800.0),
            vehicle("2", 200.0, 800.0),
            vehicle("3", 300.0, 400.0),
        ];
        assert_eq!(fleet_insights(&fleet)[0].title, "Van 1 has the highest fuel costs");
    }
}
