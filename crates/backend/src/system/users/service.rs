use anyhow::Result;
use contracts::system::auth::UserRole;

use super::repository::{self, SysUser};
use crate::system::auth::password;

pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub engineer_id: Option<String>,
    pub managed_engineer_ids: Option<Vec<String>>,
}

/// Create a new user
pub async fn create(new_user: NewUser) -> Result<String> {
    let email = new_user.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(anyhow::anyhow!("Invalid email format"));
    }
    if new_user.name.trim().is_empty() {
        return Err(anyhow::anyhow!("Name cannot be empty"));
    }
    if repository::get_by_email(&email).await?.is_some() {
        return Err(anyhow::anyhow!("Email already registered"));
    }

    let password_hash = password::hash_password(&new_user.password)?;
    let user = SysUser {
        id: uuid::Uuid::new_v4().to_string(),
        email,
        name: new_user.name.trim().to_string(),
        role: new_user.role,
        engineer_id: new_user.engineer_id,
        managed_engineer_ids: new_user.managed_engineer_ids,
        is_active: true,
    };
    repository::create_with_password(&user, &password_hash).await?;
    Ok(user.id)
}

pub async fn get_by_id(id: &str) -> Result<Option<SysUser>> {
    repository::get_by_id(id).await
}

/// Verify credentials and return the user on success.
/// Unknown email, inactive account and wrong password all yield `None`.
pub async fn verify_credentials(email: &str, password: &str) -> Result<Option<SysUser>> {
    let user = match repository::get_by_email(email.trim()).await? {
        Some(user) if user.is_active => user,
        _ => return Ok(None),
    };

    let hash = match repository::get_password_hash(&user.id).await? {
        Some(hash) => hash,
        None => return Ok(None),
    };

    if !password::verify_password(password, &hash)? {
        return Ok(None);
    }

    repository::update_last_login(&user.id).await?;
    Ok(Some(user))
}
