use contracts::domain::a002_engineer::Engineer;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_engineer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Engineer {
    fn from(m: Model) -> Self {
        Engineer {
            id: m.id,
            name: m.name,
            email: m.email,
            contact_number: m.contact_number,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_active() -> anyhow::Result<Vec<Engineer>> {
    Ok(Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Engineer>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(engineer: &Engineer) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(engineer.id.clone()),
        name: Set(engineer.name.clone()),
        email: Set(engineer.email.clone()),
        contact_number: Set(engineer.contact_number.clone()),
        is_active: Set(true),
    };
    active.insert(conn()).await?;
    Ok(())
}
