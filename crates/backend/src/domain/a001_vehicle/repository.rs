use chrono::NaiveDate;
use contracts::domain::a001_vehicle::{VehicleRecord, VehicleStatus};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub van_number: String,
    pub reg_no: String,
    pub status: String,
    pub vehicle_type: String,
    pub trade_group: String,
    pub service_cost: String,
    pub maintenance_cost: String,
    pub make_model: Option<String>,
    pub year: Option<i32>,
    pub transmission: Option<String>,
    pub vehicle_ownership: Option<String>,
    pub next_mot_due: Option<NaiveDate>,
    pub road_tax_due: Option<NaiveDate>,
    pub next_service_due: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for VehicleRecord {
    fn from(m: Model) -> Self {
        VehicleRecord {
            id: m.id,
            van_number: m.van_number,
            reg_no: m.reg_no,
            status: VehicleStatus::parse(&m.status),
            vehicle_type: m.vehicle_type,
            trade_group: m.trade_group,
            service_cost: m.service_cost,
            maintenance_cost: m.maintenance_cost,
            make_model: m.make_model,
            transmission: m.transmission,
            vehicle_ownership: m.vehicle_ownership,
            next_mot_due: m.next_mot_due,
            road_tax_due: m.road_tax_due,
            next_service_due: m.next_service_due,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Raw rows, for callers that need columns the aggregate does not carry.
pub async fn list_models() -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .order_by_asc(Column::VanNumber)
        .all(conn())
        .await?)
}

pub async fn list_all() -> anyhow::Result<Vec<VehicleRecord>> {
    Ok(list_models().await?.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id.to_string()).one(conn()).await?)
}

pub async fn get_by_van_number(van_number: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find()
        .filter(Column::VanNumber.eq(van_number))
        .one(conn())
        .await?)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(vehicle: &VehicleRecord, year: Option<i32>) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(vehicle.id.clone()),
        van_number: Set(vehicle.van_number.clone()),
        reg_no: Set(vehicle.reg_no.clone()),
        status: Set(vehicle.status.as_str().to_string()),
        vehicle_type: Set(vehicle.vehicle_type.clone()),
        trade_group: Set(vehicle.trade_group.clone()),
        service_cost: Set(vehicle.service_cost.clone()),
        maintenance_cost: Set(vehicle.maintenance_cost.clone()),
        make_model: Set(vehicle.make_model.clone()),
        year: Set(year),
        transmission: Set(vehicle.transmission.clone()),
        vehicle_ownership: Set(vehicle.vehicle_ownership.clone()),
        next_mot_due: Set(vehicle.next_mot_due),
        road_tax_due: Set(vehicle.road_tax_due),
        next_service_due: Set(vehicle.next_service_due),
    };
    active.insert(conn()).await?;
    Ok(())
}
