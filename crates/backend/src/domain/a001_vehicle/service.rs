use contracts::domain::a001_vehicle::{VehicleDetail, VehicleRecord};

use super::repository;
use crate::domain::a003_allocation;

pub async fn list_all() -> anyhow::Result<Vec<VehicleRecord>> {
    repository::list_all().await
}

/// Look up by van number, ignoring surrounding whitespace.
pub async fn get_by_van_number(van_number: &str) -> anyhow::Result<Option<repository::Model>> {
    let van_number = van_number.trim();
    if van_number.is_empty() {
        return Ok(None);
    }
    repository::get_by_van_number(van_number).await
}

pub async fn exists(id: &str) -> anyhow::Result<bool> {
    Ok(repository::get_by_id(id).await?.is_some())
}

async fn detail_of(model: repository::Model) -> anyhow::Result<VehicleDetail> {
    let year = model.year;
    let allocations = a003_allocation::service::history_of_known_vehicle(&model.id).await?;
    Ok(VehicleDetail::new(model.into(), year, allocations))
}

pub async fn detail_by_id(id: &str) -> anyhow::Result<Option<VehicleDetail>> {
    match repository::get_by_id(id.trim()).await? {
        Some(model) => Ok(Some(detail_of(model).await?)),
        None => Ok(None),
    }
}

pub async fn detail_by_van_number(van_number: &str) -> anyhow::Result<Option<VehicleDetail>> {
    match get_by_van_number(van_number).await? {
        Some(model) => Ok(Some(detail_of(model).await?)),
        None => Ok(None),
    }
}

/// Validate and store a register entry.
pub async fn create(vehicle: &VehicleRecord, year: Option<i32>) -> anyhow::Result<()> {
    vehicle
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed for vehicle {}: {}", vehicle.id, e))?;
    repository::insert(vehicle, year).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_vehicle::VehicleStatus;

    #[tokio::test]
    async fn create_rejects_a_vehicle_without_registration() {
        let vehicle = VehicleRecord {
            id: "V900".into(),
            van_number: "VEH-00900".into(),
            reg_no: "  ".into(),
            status: VehicleStatus::Allocated,
            vehicle_type: "Cars".into(),
            trade_group: "Office".into(),
            service_cost: "GBP 0.00".into(),
            maintenance_cost: "GBP 0.00".into(),
            make_model: None,
            transmission: None,
            vehicle_ownership: None,
            next_mot_due: None,
            road_tax_due: None,
            next_service_due: None,
        };
        let err = create(&vehicle, None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed for vehicle V900: Registration must not be empty"
        );
    }
}
