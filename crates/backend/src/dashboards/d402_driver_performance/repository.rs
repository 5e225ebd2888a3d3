use contracts::dashboards::d402_driver_performance::DriverMetrics;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "d402_driver_performance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub driver_name: String,
    pub total_trips: i32,
    pub avg_rating: f64,
    pub safety_score: i32,
    pub fuel_efficiency: f64,
    pub on_time_percentage: i32,
    pub violations: i32,
    pub miles_driven: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DriverMetrics {
    fn from(m: Model) -> Self {
        DriverMetrics {
            driver_name: m.driver_name,
            total_trips: m.total_trips.max(0) as u32,
            avg_rating: m.avg_rating,
            safety_score: m.safety_score.max(0) as u32,
            fuel_efficiency: m.fuel_efficiency,
            on_time_percentage: m.on_time_percentage.max(0) as u32,
            violations: m.violations.max(0) as u32,
            miles_driven: m.miles_driven.max(0) as u32,
        }
    }
}

pub async fn list_all() -> anyhow::Result<Vec<DriverMetrics>> {
    Ok(Entity::find()
        .order_by_desc(Column::AvgRating)
        .order_by_asc(Column::DriverName)
        .all(get_connection())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn insert(metrics: &DriverMetrics) -> anyhow::Result<()> {
    let active = ActiveModel {
        driver_name: Set(metrics.driver_name.clone()),
        total_trips: Set(metrics.total_trips as i32),
        avg_rating: Set(metrics.avg_rating),
        safety_score: Set(metrics.safety_score as i32),
        fuel_efficiency: Set(metrics.fuel_efficiency),
        on_time_percentage: Set(metrics.on_time_percentage as i32),
        violations: Set(metrics.violations as i32),
        miles_driven: Set(metrics.miles_driven as i32),
    };
    active.insert(get_connection()).await?;
    Ok(())
}
