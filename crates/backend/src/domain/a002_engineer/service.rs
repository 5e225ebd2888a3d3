use std::collections::HashMap;

use contracts::domain::a002_engineer::Engineer;
use contracts::domain::a003_allocation::AllocationRecord;

use super::repository;
use crate::domain::a003_allocation::repository as allocation_repository;

/// Active engineers, each with the contact number of their latest allocation.
pub async fn list_with_latest_contact() -> anyhow::Result<Vec<Engineer>> {
    let engineers = repository::list_active().await?;
    let allocations = allocation_repository::list_all().await?;
    Ok(apply_latest_contacts(engineers, &allocations))
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Engineer>> {
    repository::get_by_id(id).await
}

/// Prefer the contact number recorded on an engineer's most recent
/// allocation; keep the engineer's own number when none was recorded.
pub fn apply_latest_contacts(engineers: Vec<Engineer>, allocations: &[AllocationRecord]) -> Vec<Engineer> {
    let mut latest: HashMap<&str, &AllocationRecord> = HashMap::new();
    for allocation in allocations {
        let has_contact = allocation
            .contact_number
            .as_deref()
            .map(|c| !c.trim().is_empty())
            .unwrap_or(false);
        if !has_contact {
            continue;
        }
        latest
            .entry(allocation.service_resource_id.as_str())
            .and_modify(|current| {
                if allocation.start_date > current.start_date {
                    *current = allocation;
                }
            })
            .or_insert(allocation);
    }

    engineers
        .into_iter()
        .map(|mut engineer| {
            if let Some(allocation) = latest.get(engineer.id.as_str()) {
                engineer.contact_number = allocation.contact_number.clone();
            }
            engineer
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn allocation(engineer: &str, start: (i32, u32, u32), contact: Option<&str>) -> AllocationRecord {
        AllocationRecord {
            id: format!("{}-{:?}", engineer, start),
            vehicle_id: "V1".into(),
            service_resource_id: engineer.into(),
            engineer_name: None,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: None,
            contact_number: contact.map(Into::into),
        }
    }

    fn engineer(id: &str, contact: Option<&str>) -> Engineer {
        Engineer {
            id: id.into(),
            name: id.into(),
            email: None,
            contact_number: contact.map(Into::into),
        }
    }

    #[test]
    fn newest_allocation_contact_wins() {
        let allocations = vec![
            allocation("E1", (2024, 1, 1), Some("111")),
            allocation("E1", (2025, 1, 1), Some("222")),
            allocation("E1", (2025, 6, 1), Some("  ")),
        ];
        let result = apply_latest_contacts(vec![engineer("E1", Some("000"))], &allocations);
        assert_eq!(result[0].contact_number.as_deref(), Some("222"));
    }

    #[test]
    fn falls_back_to_engineer_contact() {
        let result = apply_latest_contacts(vec![engineer("E2", Some("000")), engineer("E3", None)], &[]);
        assert_eq!(result[0].contact_number.as_deref(), Some("000"));
        assert_eq!(result[1].contact_number, None);
    }
}
