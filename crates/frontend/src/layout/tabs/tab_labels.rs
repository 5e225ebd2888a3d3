//! Page titles, shared by the sidebar and the tab strip.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_fleet_overview" => "Fleet Overview",
        "d401_cost_analysis" => "Cost Analysis",
        "d401_service_cost" => "Service Cost Lookup",
        "d402_driver_performance" => "Driver Performance",
        "a001_vehicle_lookup" => "Vehicle Lookup",
        "a003_allocation" => "Vehicle Allocations",
        _ => "Page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_has_generic_title() {
        assert_eq!(tab_label_for_key("d400_fleet_overview"), "Fleet Overview");
        assert_eq!(tab_label_for_key("nope"), "Page");
    }
}
