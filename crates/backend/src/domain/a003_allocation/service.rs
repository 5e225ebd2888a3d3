use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use contracts::domain::a003_allocation::{
    AllocationCreatedResponse, AllocationRecord, CreateAllocationRequest, DeleteAllocationRequest,
    UpdateAllocationRequest,
};
use sea_orm::{ConnectionTrait, TransactionTrait};

use super::repository;
use crate::domain::{a001_vehicle, a002_engineer};
use crate::shared::data::db::get_connection;

#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("{0}")]
    Validation(String),
    #[error("Vehicle {0} not found")]
    VehicleNotFound(String),
    #[error("Engineer {0} not found")]
    EngineerNotFound(String),
    #[error("Allocation {0} not found")]
    AllocationNotFound(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// End date used when a newer allocation replaces `previous`.
fn closing_date(previous: &AllocationRecord, today: NaiveDate) -> NaiveDate {
    today.max(previous.start_date)
}

fn clean_contact(contact: &Option<String>) -> Option<String> {
    contact
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

/// Store `record`. A current record first closes the vehicle's running
/// allocations; a historical one leaves them alone.
///
/// Returns whether anything was closed.
async fn write_new_allocation<C: ConnectionTrait>(
    db: &C,
    record: &AllocationRecord,
    today: NaiveDate,
) -> anyhow::Result<bool> {
    let mut closed_any = false;
    if record.is_current() {
        for previous in repository::list_current_for_vehicle_txn(db, &record.vehicle_id).await? {
            let end = closing_date(&previous, today);
            tracing::info!(
                "Closing allocation {} of vehicle {} on {}",
                previous.id,
                record.vehicle_id,
                end
            );
            repository::update_txn(db, &previous.with_end_date(end)).await?;
            closed_any = true;
        }
    }
    repository::insert_txn(db, record).await?;
    Ok(closed_any)
}

/// Create an allocation. The close of the previous one and the insert
/// commit together.
pub async fn create(request: CreateAllocationRequest) -> Result<AllocationCreatedResponse, AllocationError> {
    request.validate().map_err(AllocationError::Validation)?;

    let vehicle_id = request.vehicle_id.trim().to_string();
    let engineer_id = request.service_resource_id.trim().to_string();
    if !a001_vehicle::service::exists(&vehicle_id).await? {
        return Err(AllocationError::VehicleNotFound(vehicle_id));
    }
    if a002_engineer::service::get_by_id(&engineer_id).await?.is_none() {
        return Err(AllocationError::EngineerNotFound(engineer_id));
    }

    let record = AllocationRecord {
        id: uuid::Uuid::new_v4().to_string(),
        vehicle_id,
        service_resource_id: engineer_id,
        engineer_name: None,
        start_date: request.parsed_start_date().map_err(AllocationError::Validation)?,
        end_date: request.parsed_end_date().map_err(AllocationError::Validation)?,
        contact_number: clean_contact(&request.contact_number),
    };

    let txn = get_connection().begin().await.map_err(anyhow::Error::from)?;
    let previous_allocation_closed =
        write_new_allocation(&txn, &record, Utc::now().date_naive()).await?;
    txn.commit().await.map_err(anyhow::Error::from)?;
    tracing::info!(
        "Allocated vehicle {} to engineer {} from {}",
        record.vehicle_id,
        record.service_resource_id,
        record.start_date
    );

    Ok(AllocationCreatedResponse {
        success: true,
        message: "Allocation created successfully".to_string(),
        allocation_id: record.id,
        previous_allocation_closed,
    })
}

/// Apply a partial update and return the stored record.
pub async fn update(request: UpdateAllocationRequest) -> Result<AllocationRecord, AllocationError> {
    request.validate().map_err(AllocationError::Validation)?;

    let id = request.allocation_id.trim().to_string();
    let mut record = repository::get_by_id(&id)
        .await?
        .ok_or_else(|| AllocationError::AllocationNotFound(id.clone()))?;
    let was_current = record.is_current();

    if let Some(engineer_id) = &request.service_resource_id {
        if a002_engineer::service::get_by_id(engineer_id.trim()).await?.is_none() {
            return Err(AllocationError::EngineerNotFound(engineer_id.trim().to_string()));
        }
    }

    request
        .apply_to(&mut record)
        .map_err(AllocationError::Validation)?;

    let txn = get_connection().begin().await.map_err(anyhow::Error::from)?;
    if record.is_current() && !was_current {
        let others = repository::list_current_for_vehicle_txn(&txn, &record.vehicle_id).await?;
        if others.iter().any(|other| other.id != record.id) {
            return Err(AllocationError::Validation(
                "Vehicle already has a current allocation".to_string(),
            ));
        }
    }
    repository::update_txn(&txn, &record).await?;
    txn.commit().await.map_err(anyhow::Error::from)?;

    fill_engineer_names(vec![record])
        .await?
        .pop()
        .ok_or_else(|| AllocationError::AllocationNotFound(id))
}

/// Remove an allocation for good. Returns the id that was removed.
pub async fn delete(request: DeleteAllocationRequest) -> Result<String, AllocationError> {
    request.validate().map_err(AllocationError::Validation)?;
    let id = request.allocation_id.trim().to_string();
    if !repository::delete(&id).await? {
        return Err(AllocationError::AllocationNotFound(id));
    }
    tracing::info!("Deleted allocation {}", id);
    Ok(id)
}

/// Allocation history of a vehicle, newest first, with engineer names.
pub async fn history(vehicle_id: &str) -> Result<Vec<AllocationRecord>, AllocationError> {
    if !a001_vehicle::service::exists(vehicle_id).await? {
        return Err(AllocationError::VehicleNotFound(vehicle_id.to_string()));
    }
    Ok(history_of_known_vehicle(vehicle_id).await?)
}

/// History for a vehicle id the caller has already resolved.
pub async fn history_of_known_vehicle(vehicle_id: &str) -> anyhow::Result<Vec<AllocationRecord>> {
    let records = repository::list_for_vehicle(vehicle_id).await?;
    fill_engineer_names(records).await
}

async fn fill_engineer_names(records: Vec<AllocationRecord>) -> anyhow::Result<Vec<AllocationRecord>> {
    let names: HashMap<String, String> = a002_engineer::repository::list_active()
        .await?
        .into_iter()
        .map(|e| (e.id, e.name))
        .collect();
    Ok(records
        .into_iter()
        .map(|mut record| {
            record.engineer_name = names.get(&record.service_resource_id).cloned();
            record
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_memory_database;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(start: NaiveDate) -> AllocationRecord {
        allocation("A1", "E1", start, None)
    }

    fn allocation(id: &str, engineer: &str, start: NaiveDate, end: Option<NaiveDate>) -> AllocationRecord {
        AllocationRecord {
            id: id.into(),
            vehicle_id: "V1".into(),
            service_resource_id: engineer.into(),
            engineer_name: None,
            start_date: start,
            end_date: end,
            contact_number: None,
        }
    }

    async fn stored<C: ConnectionTrait>(db: &C) -> Vec<AllocationRecord> {
        let mut rows = repository::list_for_vehicle_txn(db, "V1").await.unwrap();
        rows.sort_by(|a, b| a.id.cmp(&b.id));
        rows
    }

    #[test]
    fn closing_date_never_precedes_start() {
        let today = date(2025, 6, 1);
        let past = record(date(2025, 1, 1));
        assert_eq!(closing_date(&past, today), today);

        let future = record(date(2025, 7, 1));
        assert_eq!(closing_date(&future, today), future.start_date);
    }

    #[test]
    fn blank_contact_is_dropped() {
        assert_eq!(clean_contact(&Some("  ".into())), None);
        assert_eq!(clean_contact(&Some(" 07700 ".into())).as_deref(), Some("07700"));
        assert_eq!(clean_contact(&None), None);
    }

    #[tokio::test]
    async fn current_create_closes_the_running_allocation() {
        let db = open_memory_database().await.unwrap();
        let today = date(2025, 9, 1);

        let first = allocation("A1", "E1", date(2025, 6, 1), None);
        assert!(!write_new_allocation(&db, &first, today).await.unwrap());

        let second = allocation("A2", "E2", today, None);
        assert!(write_new_allocation(&db, &second, today).await.unwrap());

        let rows = stored(&db).await;
        assert_eq!(rows[0].end_date, Some(today));
        assert!(rows[1].is_current());
        let current = repository::list_current_for_vehicle_txn(&db, "V1").await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, "A2");
    }

    #[tokio::test]
    async fn closing_a_future_dated_allocation_ends_it_on_its_start() {
        let db = open_memory_database().await.unwrap();
        let today = date(2025, 9, 1);

        let booked = allocation("A1", "E1", date(2025, 10, 1), None);
        write_new_allocation(&db, &booked, today).await.unwrap();
        let replacement = allocation("A2", "E2", today, None);
        assert!(write_new_allocation(&db, &replacement, today).await.unwrap());

        let rows = stored(&db).await;
        assert_eq!(rows[0].end_date, Some(date(2025, 10, 1)));
    }

    #[tokio::test]
    async fn historical_create_leaves_the_running_allocation_open() {
        let db = open_memory_database().await.unwrap();
        let today = date(2025, 9, 1);

        let running = allocation("A1", "E1", date(2025, 6, 1), None);
        write_new_allocation(&db, &running, today).await.unwrap();

        let backfill = allocation("A2", "E2", date(2024, 1, 1), Some(date(2024, 3, 31)));
        assert!(!write_new_allocation(&db, &backfill, today).await.unwrap());

        let current = repository::list_current_for_vehicle_txn(&db, "V1").await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, "A1");
        assert_eq!(stored(&db).await.len(), 2);
    }

    #[tokio::test]
    async fn failed_insert_does_not_close_anything() {
        let db = open_memory_database().await.unwrap();
        let today = date(2025, 9, 1);
        let running = allocation("A1", "E1", date(2025, 6, 1), None);
        write_new_allocation(&db, &running, today).await.unwrap();

        // same id as the running allocation, so the insert hits the primary key
        let txn = db.begin().await.unwrap();
        let clash = allocation("A1", "E2", today, None);
        assert!(write_new_allocation(&txn, &clash, today).await.is_err());
        txn.rollback().await.unwrap();

        let rows = stored(&db).await;
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_current());
        assert_eq!(rows[0].service_resource_id, "E1");
    }
}
