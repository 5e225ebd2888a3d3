use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

/// A single payment booked against a vehicle.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_cost_payment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub vehicle_id: String,
    pub payment_type: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .order_by_asc(Column::PaymentDate)
        .all(conn())
        .await?)
}

pub async fn list_for_vehicle(vehicle_id: &str) -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .filter(Column::VehicleId.eq(vehicle_id))
        .order_by_asc(Column::PaymentDate)
        .all(conn())
        .await?)
}

pub async fn insert(vehicle_id: &str, payment_type: &str, amount: f64, payment_date: NaiveDate) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        vehicle_id: Set(vehicle_id.to_string()),
        payment_type: Set(payment_type.to_string()),
        amount: Set(amount),
        payment_date: Set(payment_date),
    };
    active.insert(conn()).await?;
    Ok(())
}
