use serde::{Deserialize, Serialize};

/// A field engineer (service resource) that vehicles are allocated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
}

impl Engineer {
    /// Case-insensitive match of an already trimmed, lowercased query.
    fn matches(&self, needle: &str) -> bool {
        if self.name.to_lowercase().contains(needle) {
            return true;
        }
        if let Some(phone) = &self.contact_number {
            if phone.to_lowercase().contains(needle) {
                return true;
            }
        }
        self.email
            .as_deref()
            .map(|email| email.to_lowercase().contains(needle))
            .unwrap_or(false)
    }
}

/// Engineers whose name, contact number or email contains `query`.
///
/// The query is trimmed and compared case-insensitively. An empty query
/// returns every engineer; order is always preserved.
pub fn filter_engineers(engineers: &[Engineer], query: &str) -> Vec<Engineer> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return engineers.to_vec();
    }
    engineers
        .iter()
        .filter(|e| e.matches(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineersResponse {
    pub engineers: Vec<Engineer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engineer(id: &str, name: &str, email: Option<&str>, phone: Option<&str>) -> Engineer {
        Engineer {
            id: id.into(),
            name: name.into(),
            email: email.map(Into::into),
            contact_number: phone.map(Into::into),
        }
    }

    fn roster() -> Vec<Engineer> {
        vec![
            engineer("E1", "Alice Walker", Some("alice@fleet.example"), Some("07700 900551")),
            engineer("E2", "Bob Stone", None, Some("07700 900123")),
            engineer("E3", "Carol Khan", Some("c.khan@fleet.example"), None),
        ]
    }

    #[test]
    fn blank_query_returns_everyone_in_order() {
        let all = roster();
        assert_eq!(filter_engineers(&all, ""), all);
        assert_eq!(filter_engineers(&all, "   "), all);
    }

    #[test]
    fn matches_name_case_insensitively_after_trim() {
        let hits = filter_engineers(&roster(), "  BOB ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "E2");
    }

    #[test]
    fn matches_contact_number_substring() {
        let hits = filter_engineers(&roster(), "55");
        assert_eq!(hits.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["E1"]);

        let hits = filter_engineers(&roster(), "07700");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn matches_email_and_tolerates_missing_fields() {
        let hits = filter_engineers(&roster(), "C.KHAN@");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "E3");
        assert!(filter_engineers(&roster(), "nobody").is_empty());
    }
}
