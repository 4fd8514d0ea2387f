use crate::LeadStatus;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLeadStatus {
    pub status: LeadStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocation {
    pub name: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Filter and pagination parameters for the list endpoints.
///
/// Unset filters are left out of the query string entirely. Changing any
/// filter returns to the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            status: None,
            search: None,
            space_type: None,
            city: None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ListQuery {
    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn with_status(self, status: &str) -> Self {
        Self {
            status: non_empty(status),
            page: 1,
            ..self
        }
    }

    pub fn with_search(self, search: &str) -> Self {
        Self {
            search: non_empty(search),
            page: 1,
            ..self
        }
    }

    pub fn with_space_type(self, space_type: &str) -> Self {
        Self {
            space_type: non_empty(space_type),
            page: 1,
            ..self
        }
    }

    pub fn with_city(self, city: &str) -> Self {
        Self {
            city: non_empty(city),
            page: 1,
            ..self
        }
    }

    /// Query parameters in wire order, leaving out unset filters.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        let filters = [
            ("status", &self.status),
            ("search", &self.search),
            ("spaceType", &self.space_type),
            ("city", &self.city),
        ];
        pairs.extend(
            filters
                .into_iter()
                .filter_map(|(key, value)| Some((key, value.clone()?))),
        );
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filters_are_omitted() {
        let query = ListQuery::default();
        assert_eq!(
            query.to_pairs(),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn filters_reset_page_and_ignore_blank_values() {
        let query = ListQuery::default()
            .with_page(3)
            .with_search("  kochi ")
            .with_status("")
            .with_space_type("virtual-office");
        assert_eq!(query.page, 1);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "1".to_string()),
                ("limit", "10".to_string()),
                ("search", "kochi".to_string()),
                ("spaceType", "virtual-office".to_string()),
            ]
        );
    }

    #[test]
    fn page_never_drops_below_one() {
        assert_eq!(ListQuery::default().with_page(0).page, 1);
    }

    #[test]
    fn serde_defaults_match_the_first_page() {
        let query: ListQuery =
            serde_json::from_str(r#"{"status":"new"}"#).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(query.status.as_deref(), Some("new"));
    }
}
