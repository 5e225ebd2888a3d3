use chrono::{NaiveDate, Utc};
use contracts::domain::a003_allocation::AllocationRecord;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_allocation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub vehicle_id: String,
    pub service_resource_id: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub contact_number: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AllocationRecord {
    fn from(m: Model) -> Self {
        AllocationRecord {
            id: m.id,
            vehicle_id: m.vehicle_id,
            service_resource_id: m.service_resource_id,
            engineer_name: None,
            start_date: m.start_date,
            end_date: m.end_date,
            contact_number: m.contact_number,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<AllocationRecord>> {
    Ok(Entity::find()
        .order_by_desc(Column::StartDate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Allocations of one vehicle, newest first.
pub async fn list_for_vehicle(vehicle_id: &str) -> anyhow::Result<Vec<AllocationRecord>> {
    list_for_vehicle_txn(conn(), vehicle_id).await
}

pub async fn list_for_vehicle_txn<C: ConnectionTrait>(
    db: &C,
    vehicle_id: &str,
) -> anyhow::Result<Vec<AllocationRecord>> {
    Ok(Entity::find()
        .filter(Column::VehicleId.eq(vehicle_id))
        .order_by_desc(Column::StartDate)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Allocations of one vehicle without an end date.
pub async fn list_current_for_vehicle_txn<C: ConnectionTrait>(
    db: &C,
    vehicle_id: &str,
) -> anyhow::Result<Vec<AllocationRecord>> {
    Ok(Entity::find()
        .filter(Column::VehicleId.eq(vehicle_id))
        .filter(Column::EndDate.is_null())
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<AllocationRecord>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(record: &AllocationRecord) -> anyhow::Result<()> {
    insert_txn(conn(), record).await
}

pub async fn insert_txn<C: ConnectionTrait>(db: &C, record: &AllocationRecord) -> anyhow::Result<()> {
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(record.id.clone()),
        vehicle_id: Set(record.vehicle_id.clone()),
        service_resource_id: Set(record.service_resource_id.clone()),
        start_date: Set(record.start_date),
        end_date: Set(record.end_date),
        contact_number: Set(record.contact_number.clone()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn update_txn<C: ConnectionTrait>(db: &C, record: &AllocationRecord) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(record.id.clone()),
        vehicle_id: Set(record.vehicle_id.clone()),
        service_resource_id: Set(record.service_resource_id.clone()),
        start_date: Set(record.start_date),
        end_date: Set(record.end_date),
        contact_number: Set(record.contact_number.clone()),
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(Some(Utc::now())),
    };
    active.update(db).await?;
    Ok(())
}

/// Returns false when no row had `id`.
pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
