use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use contracts::system::auth::{SessionClaims, UserRole};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

/// Issue a session token valid for `lifetime_hours`.
pub async fn generate_session_token(
    user_id: &str,
    email: &str,
    role: UserRole,
    lifetime_hours: i64,
) -> Result<(String, DateTime<Utc>)> {
    let secret = get_jwt_secret().await?;
    encode_claims(user_id, email, role, lifetime_hours, &secret)
}

fn encode_claims(
    user_id: &str,
    email: &str,
    role: UserRole,
    lifetime_hours: i64,
    secret: &str,
) -> Result<(String, DateTime<Utc>)> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::hours(lifetime_hours);
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")?;
    Ok((token, expires_at))
}

/// Validate JWT token and extract claims
pub async fn validate_token(token: &str) -> Result<SessionClaims> {
    let secret = get_jwt_secret().await?;
    decode_claims(token, &secret)
}

fn decode_claims(token: &str, secret: &str) -> Result<SessionClaims> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Get or create JWT secret from database
pub async fn get_jwt_secret() -> Result<String> {
    match get_jwt_secret_from_db().await {
        Ok(Some(secret)) => Ok(secret),
        Ok(None) | Err(_) => {
            let secret = generate_jwt_secret();
            save_jwt_secret_to_db(&secret).await?;
            tracing::info!("Generated new JWT secret");
            Ok(secret)
        }
    }
}

/// 256 random bits, base64 encoded
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn get_jwt_secret_from_db() -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let result = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            ["jwt_secret".into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(secret: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let now = Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                "jwt_secret".into(),
                secret.to_string().into(),
                "Auto-generated JWT secret for session tokens".into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_survive_encode_decode() {
        let secret = generate_jwt_secret();
        let (token, expires_at) = encode_claims("U1", "fsm@fleet.example", UserRole::Fsm, 2, &secret).unwrap();
        let claims = decode_claims(&token, &secret).unwrap();
        assert_eq!(claims.sub, "U1");
        assert_eq!(claims.role, UserRole::Fsm);
        assert_eq!(claims.exp, expires_at.timestamp() as usize);
    }

    #[test]
    fn rejects_foreign_secret_and_expired_tokens() {
        let (token, _) = encode_claims("U1", "a@b", UserRole::Manager, 1, "one").unwrap();
        assert!(decode_claims(&token, "two").is_err());

        let (expired, _) = encode_claims("U1", "a@b", UserRole::Manager, -2, "one").unwrap();
        assert!(decode_claims(&expired, "one").is_err());
    }
}
