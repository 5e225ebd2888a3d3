//! Reference data loaded into an empty database on first start.
//!
//! Vehicles come from the fleet register export; engineers, allocations and
//! payments are generated deterministically around `today` so the dashboards
//! have twelve months of history to show.

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use contracts::dashboards::d402_driver_performance::{sample_drivers, DriverMetrics};
use contracts::domain::a001_vehicle::{VehicleRecord, VehicleStatus};
use contracts::domain::a002_engineer::Engineer;
use contracts::domain::a003_allocation::AllocationRecord;
use contracts::shared::money::round2;

use crate::dashboards::d402_driver_performance::repository as drivers;
use crate::domain::{a001_vehicle, a002_engineer, a003_allocation, a004_cost_payment};

struct VehicleSeed {
    van_number: &'static str,
    reg_no: &'static str,
    status: &'static str,
    vehicle_type: &'static str,
    trade_group: &'static str,
    service_cost: &'static str,
    maintenance_cost: &'static str,
    transmission: &'static str,
    ownership: &'static str,
    /// Days from today until the MOT, negative when overdue
    mot_in_days: i64,
    tax_in_days: i64,
}

const fn v(
    van_number: &'static str,
    reg_no: &'static str,
    status: &'static str,
    vehicle_type: &'static str,
    trade_group: &'static str,
    service_cost: &'static str,
    maintenance_cost: &'static str,
    mot_in_days: i64,
    tax_in_days: i64,
) -> VehicleSeed {
    VehicleSeed {
        van_number,
        reg_no,
        status,
        vehicle_type,
        trade_group,
        service_cost,
        maintenance_cost,
        transmission: "Manual",
        ownership: "Via HSBC",
        mot_in_days,
        tax_in_days,
    }
}

const LWB_HIGH: &str = "Long wheel base high roof";
const LWB_LOW: &str = "Long wheel base low roof";
const SWB: &str = "Short wheel base";
const CARS: &str = "Cars";

const ENVIRONMENTAL: &str = "Environmental Services";
const OFFICE: &str = "Office";
const FIRE: &str = "Fire Safety";
const LEAK: &str = "Leak Detection, Damp & Restoration";
const DRAINAGE: &str = "Drainage & Plumbing";
const HVAC: &str = "HVAC & Electrical";
const FABRIC: &str = "Building Fabric";

const VEHICLES: &[VehicleSeed] = &[
    v("407", "FX23DHL", "Allocated", LWB_HIGH, ENVIRONMENTAL, "GBP 0.00", "GBP 214.08", 140, 25),
    v("433", "BG75VBF", "Allocated", SWB, ENVIRONMENTAL, "GBP 0.00", "GBP 0.00", 320, 210),
    v("412", "BN75XZE", "Allocated", SWB, OFFICE, "GBP 0.00", "GBP 0.00", 300, 190),
    v("384", "YC74 ZPK", "Allocated", LWB_LOW, FIRE, "GBP 750.86", "GBP 0.00", 95, 160),
    v("373", "DY24HZC", "Allocated", LWB_HIGH, DRAINAGE, "GBP 1,070.03", "GBP 0.00", 180, 10),
    v("372", "DY24HZD", "Allocated", LWB_HIGH, DRAINAGE, "GBP 0.00", "GBP 420.53", 185, 120),
    v("374", "DY24HZA", "Allocated", LWB_HIGH, DRAINAGE, "GBP 501.06", "GBP 270.61", 190, 130),
    v("371", "DY24HZE", "Allocated", LWB_LOW, DRAINAGE, "GBP 722.28", "GBP 318.10", 175, 65),
    v("369", "YB73RHX", "Allocated", LWB_LOW, FIRE, "GBP 654.64", "GBP 468.86", -3, 45),
    v("366", "YF73ETO", "Allocated", LWB_LOW, LEAK, "GBP 835.46", "GBP 0.00", 12, 200),
    v("365", "YF73 ETR", "Allocated", LWB_LOW, LEAK, "GBP 218.87", "GBP 0.00", 20, 205),
    v("363", "YF73 RVM", "Allocated", LWB_LOW, LEAK, "GBP 0.00", "GBP 1,578.37", 5, 28),
    v("368", "HN73PFO", "Allocated", CARS, OFFICE, "GBP 95.70", "GBP 1,218.21", 28, 150),
    v("380", "YB24UVG", "Allocated", LWB_LOW, FIRE, "GBP 208.03", "GBP 968.79", 210, 90),
    v("355", "YE72AHP", "Allocated", LWB_LOW, HVAC, "GBP 0.00", "GBP 1,036.18", 60, 240),
    v("359", "YE72AHN", "Due for Service", LWB_LOW, DRAINAGE, "GBP 2,762.16", "GBP 1,647.58", 70, 250),
    v("435", "BD75FHW", "Reserved", LWB_LOW, LEAK, "GBP 0.00", "GBP 205.50", 330, 300),
    v("349", "YF72TTV", "Spare", LWB_LOW, HVAC, "GBP 0.00", "GBP 0.00", 110, 80),
    v("350", "LJ72BZM", "Spare", LWB_LOW, DRAINAGE, "GBP 346.00", "GBP 0.00", 115, 85),
    v("VEH-00332", "BK21EVV", "Spare", LWB_HIGH, LEAK, "GBP 4,879.31", "GBP 6,498.69", 40, 18),
    v("VEH-00198", "BX64UGL", "Spare", LWB_LOW, ENVIRONMENTAL, "GBP 7,276.21", "GBP 506.12", 55, 100),
    v("VEH-00173", "OV63CPZ", "Spare Not Available", SWB, OFFICE, "GBP 195.00", "GBP 446.90", 75, 140),
    v("VEH-00256", "FN19NWK", "In Garage", LWB_LOW, HVAC, "GBP 195.00", "GBP 25.20", 35, 170),
    v("VEH-00241", "LO67TUU", "In Garage", LWB_LOW, DRAINAGE, "GBP 195.00", "GBP 672.22", 150, 60),
    v("VEH-00101", "AB12CDE", "Written Off", LWB_LOW, FABRIC, "N/A", "N/A", -200, -180),
    v("VEH-00104", "GH78IJK", "Written Off", CARS, OFFICE, "N/A", "N/A", -250, -220),
];

const ENGINEERS: &[(&str, &str)] = &[
    ("Aisha Patel", "07700 900112"),
    ("Ben Carter", "07700 900155"),
    ("Chloe Evans", "07700 900203"),
    ("Daniel Hughes", "07700 900247"),
    ("Emma Walsh", "07700 900318"),
    ("Farhan Ali", "07700 900364"),
    ("Grace Morgan", "07700 900421"),
    ("Harry Bennett", "07700 900489"),
    ("Isla Murphy", "07700 900532"),
    ("Jack Turner", "07700 900576"),
];

/// Payment rows as `(vehicle_id, payment_type, amount, date)`.
pub type SeedPayment = (String, String, f64, NaiveDate);

pub struct SeedData {
    pub vehicles: Vec<(VehicleRecord, Option<i32>)>,
    pub engineers: Vec<Engineer>,
    pub allocations: Vec<AllocationRecord>,
    pub payments: Vec<SeedPayment>,
    pub drivers: Vec<DriverMetrics>,
}

/// Build year from a UK registration: `"FX23DHL"` → 2023, `"YF73ETO"` → 2023.
fn registration_year(reg_no: &str) -> Option<i32> {
    let digits: String = reg_no.chars().skip(2).take(2).collect();
    let code: i32 = digits.parse().ok()?;
    Some(if code >= 50 { 2000 + code - 50 } else { 2000 + code })
}

fn make_model(vehicle_type: &str) -> &'static str {
    match vehicle_type {
        LWB_HIGH => "Ford Transit 350 L3H3",
        LWB_LOW => "Ford Transit Custom L2H1",
        SWB => "Vauxhall Vivaro L1",
        CARS => "Toyota Corolla Hybrid",
        _ => "Ford Transit",
    }
}

/// Fifteenth of the month `months_back` months before `today`'s month.
fn mid_month(today: NaiveDate, months_back: i32) -> Option<NaiveDate> {
    let index = today.year() * 12 + today.month0() as i32 - months_back;
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 15)
}

fn vehicle_payments(i: usize, vehicle: &VehicleRecord, today: NaiveDate) -> Vec<SeedPayment> {
    let rising = i % 4 == 0;
    let base_fuel = 180.0 + (i % 5) as f64 * 25.0;
    let service = vehicle.service_cost_value();
    let service_each = if service > 0.0 { service / 2.0 } else { 150.0 + i as f64 * 7.0 };
    let maintenance = vehicle.maintenance_cost_value();

    let mut rows = Vec::new();
    // month 0 is the oldest of the twelve
    for month in 0..12 {
        let Some(date) = mid_month(today, 11 - month) else {
            continue;
        };
        let mut push = |kind: &str, amount: f64| {
            rows.push((vehicle.id.clone(), kind.to_string(), round2(amount), date));
        };

        let fuel = if rising {
            base_fuel * (1.0 + 0.08 * month as f64)
        } else {
            base_fuel
        };
        push("Fuel", fuel);
        if month % 3 == 0 {
            push("Insurance", 210.0 + (i % 3) as f64 * 30.0);
        }
        if month == 2 {
            push("Road Tax", 290.0);
        }
        if month == 4 || month == 10 {
            push("Service", service_each);
        }
        if month == 7 && maintenance > 0.0 {
            push("Maintenance", maintenance);
        }
        if month == 9 && i % 3 == 1 {
            push("Repair", 320.0 + i as f64 * 11.0);
        }
    }
    rows
}

/// Everything the empty database is populated with.
pub fn build_seed(today: NaiveDate) -> SeedData {
    let vehicles: Vec<(VehicleRecord, Option<i32>)> = VEHICLES
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let record = VehicleRecord {
                id: format!("V{:03}", i + 1),
                van_number: seed.van_number.to_string(),
                reg_no: seed.reg_no.to_string(),
                status: VehicleStatus::parse(seed.status),
                vehicle_type: seed.vehicle_type.to_string(),
                trade_group: seed.trade_group.to_string(),
                service_cost: seed.service_cost.to_string(),
                maintenance_cost: seed.maintenance_cost.to_string(),
                make_model: Some(make_model(seed.vehicle_type).to_string()),
                transmission: Some(
                    if seed.vehicle_type == CARS { "Automatic" } else { seed.transmission }.to_string(),
                ),
                vehicle_ownership: Some(seed.ownership.to_string()),
                next_mot_due: Some(today + Duration::days(seed.mot_in_days)),
                road_tax_due: Some(today + Duration::days(seed.tax_in_days)),
                next_service_due: Some(today + Duration::days(seed.mot_in_days + 30)),
            };
            (record, registration_year(seed.reg_no))
        })
        .collect();

    let engineers: Vec<Engineer> = ENGINEERS
        .iter()
        .enumerate()
        .map(|(i, (name, phone))| Engineer {
            id: format!("ENG-{:03}", i + 1),
            name: name.to_string(),
            email: Some(format!("{}@fleet.example", name.to_lowercase().replace(' ', "."))),
            contact_number: Some(phone.to_string()),
        })
        .collect();

    let mut allocations = Vec::new();
    let allocated = vehicles
        .iter()
        .filter(|(v, _)| v.status == VehicleStatus::Allocated)
        .zip(engineers.iter().cycle());
    for (n, ((vehicle, _), engineer)) in allocated.enumerate() {
        let start = today - Duration::days(30 + 17 * n as i64);
        if n < 3 {
            let previous = &engineers[(n + 5) % engineers.len()];
            allocations.push(AllocationRecord {
                id: format!("AL-{:03}", allocations.len() + 1),
                vehicle_id: vehicle.id.clone(),
                service_resource_id: previous.id.clone(),
                engineer_name: None,
                start_date: start - Duration::days(400),
                end_date: Some(start - Duration::days(1)),
                contact_number: previous.contact_number.clone(),
            });
        }
        allocations.push(AllocationRecord {
            id: format!("AL-{:03}", allocations.len() + 1),
            vehicle_id: vehicle.id.clone(),
            service_resource_id: engineer.id.clone(),
            engineer_name: None,
            start_date: start,
            end_date: None,
            contact_number: engineer.contact_number.clone(),
        });
    }

    let payments = vehicles
        .iter()
        .enumerate()
        .filter(|(_, (v, _))| v.status != VehicleStatus::WrittenOff)
        .flat_map(|(i, (v, _))| vehicle_payments(i, v, today))
        .collect();

    SeedData {
        vehicles,
        engineers,
        allocations,
        payments,
        drivers: sample_drivers(),
    }
}

/// Populate reference tables when the vehicle table is empty.
pub async fn seed_if_empty() -> Result<()> {
    if a001_vehicle::repository::count().await? > 0 {
        tracing::info!("Reference data present, skipping seed");
        return Ok(());
    }

    let data = build_seed(Utc::now().date_naive());
    for (vehicle, year) in &data.vehicles {
        a001_vehicle::service::create(vehicle, *year).await?;
    }
    for engineer in &data.engineers {
        a002_engineer::repository::insert(engineer).await?;
    }
    for allocation in &data.allocations {
        a003_allocation::repository::insert(allocation).await?;
    }
    for (vehicle_id, kind, amount, date) in &data.payments {
        a004_cost_payment::repository::insert(vehicle_id, kind, *amount, *date).await?;
    }
    for driver in &data.drivers {
        drivers::insert(driver).await?;
    }

    tracing::info!(
        "Seeded {} vehicles, {} engineers, {} allocations, {} payments, {} drivers",
        data.vehicles.len(),
        data.engineers.len(),
        data.allocations.len(),
        data.payments.len(),
        data.drivers.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d401_cost_analysis::{classify_trend, monthly_history, CostTrend};
    use contracts::shared::money::parse_money;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn registration_year_from_plate() {
        assert_eq!(registration_year("FX23DHL"), Some(2023));
        assert_eq!(registration_year("YF73 ETO"), Some(2023));
        assert_eq!(registration_year("BG75VBF"), Some(2025));
        assert_eq!(registration_year("LO67TUU"), Some(2017));
        assert_eq!(registration_year("TEST"), None);
    }

    #[test]
    fn vehicles_are_valid_and_unique() {
        let data = build_seed(today());
        let vans: HashSet<_> = data.vehicles.iter().map(|(v, _)| v.van_number.clone()).collect();
        assert_eq!(vans.len(), data.vehicles.len());
        for (vehicle, _) in &data.vehicles {
            assert!(vehicle.validate().is_ok(), "{} invalid", vehicle.van_number);
            assert!(!matches!(vehicle.status, VehicleStatus::Other(_)));
        }
        let spare = data
            .vehicles
            .iter()
            .find(|(v, _)| v.van_number == "VEH-00332")
            .map(|(v, _)| v)
            .unwrap();
        assert_eq!(spare.status, VehicleStatus::Spare("Spare"));
        assert_eq!(parse_money(&spare.maintenance_cost), 6498.69);
    }

    #[test]
    fn allocations_reference_seeded_rows() {
        let data = build_seed(today());
        let vehicle_ids: HashSet<_> = data.vehicles.iter().map(|(v, _)| v.id.as_str()).collect();
        let engineer_ids: HashSet<_> = data.engineers.iter().map(|e| e.id.as_str()).collect();

        let mut current = HashSet::new();
        for a in &data.allocations {
            assert!(vehicle_ids.contains(a.vehicle_id.as_str()));
            assert!(engineer_ids.contains(a.service_resource_id.as_str()));
            if let Some(end) = a.end_date {
                assert!(end >= a.start_date);
            } else {
                assert!(current.insert(a.vehicle_id.clone()), "two current allocations");
            }
        }
        let allocated = data
            .vehicles
            .iter()
            .filter(|(v, _)| v.status == VehicleStatus::Allocated)
            .count();
        assert_eq!(current.len(), allocated);
        assert!(data.allocations.iter().any(|a| a.end_date.is_some()));
    }

    #[test]
    fn payments_cover_twelve_months_and_skip_written_off() {
        let data = build_seed(today());
        let written_off: HashSet<_> = data
            .vehicles
            .iter()
            .filter(|(v, _)| v.status == VehicleStatus::WrittenOff)
            .map(|(v, _)| v.id.clone())
            .collect();
        assert!(data.payments.iter().all(|(id, _, _, _)| !written_off.contains(id)));

        let months: HashSet<_> = data.payments.iter().map(|(_, _, _, d)| (d.year(), d.month())).collect();
        assert_eq!(months.len(), 12);
        assert!(data.payments.iter().all(|(_, _, amount, _)| *amount > 0.0));
    }

    #[test]
    fn first_vehicle_costs_are_rising() {
        let data = build_seed(today());
        let first = &data.vehicles[0].0;
        let dated: Vec<(NaiveDate, f64)> = data
            .payments
            .iter()
            .filter(|(id, _, _, _)| id == &first.id)
            .map(|(_, _, amount, date)| (*date, *amount))
            .collect();
        let totals: Vec<f64> = monthly_history(&dated, today()).iter().map(|m| m.total).collect();
        assert_eq!(classify_trend(&totals), CostTrend::Rising);
    }

    #[test]
    fn engineer_numbers_are_searchable() {
        let data = build_seed(today());
        let hits = contracts::domain::a002_engineer::filter_engineers(&data.engineers, "55");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ben Carter");
        assert_eq!(data.drivers.len(), 3);
    }
}
