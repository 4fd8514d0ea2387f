use crate::User;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The envelope every endpoint except login responds with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    // No `default` here: serde would then demand `T: Default`. A missing
    // `Option` field already reads as `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::ok(data)
        }
    }

    pub fn message(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            data: None,
            message: Some(message.into()),
            pagination: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(u64::from(limit)) as u32;
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive range of items on this page, `None` when empty.
    pub fn item_range(&self) -> Option<(u64, u64)> {
        let start = u64::from(self.page.saturating_sub(1)) * u64::from(self.limit) + 1;
        if self.total == 0 || start > self.total {
            return None;
        }
        let end = (start + u64::from(self.limit) - 1).min(self.total);
        Some((start, end))
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadStats {
    pub total: u64,
    pub new: u64,
    pub contacted: u64,
    pub qualified: u64,
    pub converted: u64,
    pub lost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSpace {
    pub name: String,
    pub city: String,
    pub bookings: u64,
    pub revenue: Decimal,
}

/// Pre-aggregated figures for the dashboard. Changes are percentages
/// relative to the previous period, except `spaces_change` which is a count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: Decimal,
    pub revenue_change: f64,
    pub active_bookings: u64,
    pub bookings_change: f64,
    pub total_spaces: u64,
    pub spaces_change: i64,
    pub occupancy_rate: f64,
    pub occupancy_change: f64,
    #[serde(default)]
    pub revenue_trend: Vec<RevenuePoint>,
    #[serde(default)]
    pub spaces_by_type: Vec<LabelCount>,
    #[serde(default)]
    pub bookings_by_city: Vec<LabelCount>,
    #[serde(default)]
    pub top_spaces: Vec<TopSpace>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_counts_pages() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next());
        assert_eq!(p.item_range(), None);

        let p = Pagination::new(3, 10, 25);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.item_range(), Some((21, 25)));
    }

    #[test]
    fn envelope_without_data_parses() {
        let body: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"message":"Nope"}"#)
                .unwrap();
        assert!(!body.success);
        assert!(body.data.is_none());
        assert_eq!(body.message.as_deref(), Some("Nope"));
    }

    #[test]
    fn envelope_for_a_record_without_data_parses() {
        let body: ApiResponse<crate::Space> =
            serde_json::from_str(r#"{"success":false,"message":"Space not found"}"#)
                .unwrap();
        assert!(!body.success);
        assert!(body.data.is_none());
        assert!(body.pagination.is_none());
        assert_eq!(body.message.as_deref(), Some("Space not found"));
    }
}
