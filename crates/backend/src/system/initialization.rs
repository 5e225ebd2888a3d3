use anyhow::Result;
use contracts::system::auth::UserRole;

use crate::system::users::{repository, service};

/// Shared password of the demo accounts created on an empty user table.
const DEMO_PASSWORD: &str = "fleet-demo";

struct DemoAccount {
    email: &'static str,
    name: &'static str,
    role: UserRole,
    engineer_id: Option<&'static str>,
    managed: &'static [&'static str],
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "engineer@fleet.example",
        name: "Aisha Patel",
        role: UserRole::Engineer,
        engineer_id: Some("ENG-001"),
        managed: &[],
    },
    DemoAccount {
        email: "manager@fleet.example",
        name: "Morgan Hale",
        role: UserRole::Manager,
        engineer_id: None,
        managed: &["ENG-001", "ENG-002", "ENG-003", "ENG-004", "ENG-005"],
    },
    DemoAccount {
        email: "fsm@fleet.example",
        name: "Riley Shaw",
        role: UserRole::Fsm,
        engineer_id: None,
        managed: &["ENG-006", "ENG-007", "ENG-008"],
    },
    DemoAccount {
        email: "stakeholder@fleet.example",
        name: "Sam Okafor",
        role: UserRole::Stakeholder,
        engineer_id: None,
        managed: &[],
    },
    DemoAccount {
        email: "ooh@fleet.example",
        name: "Jordan Reid",
        role: UserRole::OohManager,
        engineer_id: None,
        managed: &["ENG-009", "ENG-010"],
    },
];

/// Create one demo user per role when the user table is empty.
pub async fn ensure_demo_users_exist() -> Result<()> {
    if repository::count_users().await? > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating demo accounts...");
    for account in DEMO_ACCOUNTS {
        service::create(service::NewUser {
            email: account.email.to_string(),
            name: account.name.to_string(),
            password: DEMO_PASSWORD.to_string(),
            role: account.role,
            engineer_id: account.engineer_id.map(str::to_string),
            managed_engineer_ids: (!account.managed.is_empty())
                .then(|| account.managed.iter().map(|id| id.to_string()).collect()),
        })
        .await?;
        tracing::warn!("  {:<28} {}", account.email, account.role.display_name());
    }
    tracing::warn!("Demo accounts created with password '{}'. Change them before going live.", DEMO_PASSWORD);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn one_demo_account_per_role() {
        let roles: HashSet<_> = DEMO_ACCOUNTS.iter().map(|a| a.role).collect();
        assert_eq!(roles.len(), UserRole::ALL.len());
        let engineer = DEMO_ACCOUNTS.iter().find(|a| a.role == UserRole::Engineer).unwrap();
        assert!(engineer.engineer_id.is_some());
    }
}
