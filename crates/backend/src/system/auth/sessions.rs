use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

/// Sessions are stored by token hash so a leaked table cannot be replayed.
pub fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub async fn store(user_id: &str, token: &str, expires_at: DateTime<Utc>) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_sessions (id, user_id, token_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                uuid::Uuid::new_v4().to_string().into(),
                user_id.to_string().into(),
                hash_token(token).into(),
                expires_at.to_rfc3339().into(),
                Utc::now().to_rfc3339().into(),
            ],
        ))
        .await?;
    Ok(())
}

/// True when the token was issued here, is unexpired and not revoked.
pub async fn is_active(token: &str) -> Result<bool> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id FROM sys_sessions
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), Utc::now().to_rfc3339().into()],
        ))
        .await?;
    Ok(row.is_some())
}

pub async fn revoke(token: &str) -> Result<bool> {
    let result = get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_sessions SET revoked_at = ? WHERE token_hash = ? AND revoked_at IS NULL",
            [Utc::now().to_rfc3339().into(), hash_token(token).into()],
        ))
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_hex_sha256() {
        let hash = hash_token("abc");
        assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
        assert_ne!(hash_token("abd"), hash);
    }
}
