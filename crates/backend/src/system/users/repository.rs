use anyhow::{Context, Result};
use contracts::system::auth::{AuthUser, UserRole};
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

use crate::shared::data::db::get_connection;

/// Row of `sys_users` without the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct SysUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub engineer_id: Option<String>,
    pub managed_engineer_ids: Option<Vec<String>>,
    pub is_active: bool,
}

impl SysUser {
    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            engineer_id: self.engineer_id.clone(),
            managed_engineer_ids: self.managed_engineer_ids.clone(),
        }
    }
}

const USER_COLUMNS: &str = "id, email, name, role, engineer_id, managed_engineer_ids, is_active";

fn user_from_row(row: &QueryResult) -> Result<SysUser> {
    let role: String = row.try_get("", "role")?;
    let managed: Option<String> = row.try_get("", "managed_engineer_ids")?;
    Ok(SysUser {
        id: row.try_get("", "id")?,
        email: row.try_get("", "email")?,
        name: row.try_get("", "name")?,
        role: UserRole::parse(&role)
            .ok_or_else(|| anyhow::anyhow!("Unknown user role: {}", role))?,
        engineer_id: row.try_get("", "engineer_id")?,
        managed_engineer_ids: decode_id_list(managed.as_deref())?,
        is_active: row.try_get::<i32>("", "is_active")? != 0,
    })
}

/// Managed engineer ids are stored as a JSON array.
fn encode_id_list(ids: Option<&Vec<String>>) -> Result<Option<String>> {
    ids.map(|ids| serde_json::to_string(ids).context("Failed to encode engineer ids"))
        .transpose()
}

fn decode_id_list(raw: Option<&str>) -> Result<Option<Vec<String>>> {
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| serde_json::from_str(s).context("Failed to decode engineer ids"))
        .transpose()
}

/// Create user with password hash
pub async fn create_with_password(user: &SysUser, password_hash: &str) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_users (id, email, name, role, engineer_id, managed_engineer_ids, password_hash, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            [
                user.id.clone().into(),
                user.email.clone().into(),
                user.name.clone().into(),
                user.role.as_str().into(),
                user.engineer_id.clone().into(),
                encode_id_list(user.managed_engineer_ids.as_ref())?.into(),
                password_hash.to_string().into(),
                (if user.is_active { 1 } else { 0 }).into(),
                now.into(),
            ],
        ))
        .await
        .context("Failed to insert user")?;
    Ok(())
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<SysUser>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!("SELECT {} FROM sys_users WHERE id = ?", USER_COLUMNS),
            [id.into()],
        ))
        .await?;
    row.as_ref().map(user_from_row).transpose()
}

/// Get user by email, case-insensitive
pub async fn get_by_email(email: &str) -> Result<Option<SysUser>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &format!(
                "SELECT {} FROM sys_users WHERE lower(email) = lower(?)",
                USER_COLUMNS
            ),
            [email.into()],
        ))
        .await?;
    row.as_ref().map(user_from_row).transpose()
}

/// Get password hash for user
pub async fn get_password_hash(user_id: &str) -> Result<Option<String>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [user_id.into()],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "password_hash")?)),
        None => Ok(None),
    }
}

pub async fn update_last_login(user_id: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_users SET last_login_at = ? WHERE id = ?",
            [chrono::Utc::now().to_rfc3339().into(), user_id.into()],
        ))
        .await?;
    Ok(())
}

pub async fn count_users() -> Result<i64> {
    let row = get_connection()
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM sys_users".to_string(),
        ))
        .await?;
    match row {
        Some(row) => Ok(row.try_get("", "cnt")?),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engineer_id_list_is_stored_as_json() {
        let ids = vec!["ENG-001".to_string(), "ENG-002".to_string()];
        let encoded = encode_id_list(Some(&ids)).unwrap();
        assert_eq!(encoded.as_deref(), Some(r#"["ENG-001","ENG-002"]"#));
        assert_eq!(decode_id_list(encoded.as_deref()).unwrap(), Some(ids));
        assert_eq!(encode_id_list(None).unwrap(), None);
        assert_eq!(decode_id_list(Some("  ")).unwrap(), None);
        assert!(decode_id_list(Some("not json")).is_err());
    }

    #[test]
    fn auth_user_drops_storage_fields() {
        let user = SysUser {
            id: "U1".into(),
            email: "manager@fleet.example".into(),
            name: "Morgan Hale".into(),
            role: UserRole::Manager,
            engineer_id: None,
            managed_engineer_ids: Some(vec!["ENG-001".into()]),
            is_active: true,
        };
        let auth = user.to_auth_user();
        assert_eq!(auth.name, "Morgan Hale");
        assert_eq!(auth.role, UserRole::Manager);
        assert_eq!(auth.managed_engineer_ids, Some(vec!["ENG-001".to_string()]));
    }
}
