//! In-memory state behind the mock API.
//!
//! Everything lives behind one mutex. Handlers never hold the lock across
//! an await point.

use jiff::Timestamp;
use payloads::requests::{CreateLocation, ListQuery};
use payloads::responses::{
    DashboardStats, LabelCount, LeadStats, Paginated, Pagination,
};
use payloads::{
    Lead, LeadId, LeadStatus, Location, LocationId, Space, SpaceDetails,
    SpaceId, User, UserId,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Current password is incorrect")]
    WrongPassword,
    #[error("Space not found")]
    SpaceNotFound,
    #[error("Lead not found")]
    LeadNotFound,
    #[error("Location not found")]
    LocationNotFound,
    #[error("Please select a valid city")]
    UnknownCity,
    #[error("A location named {0} already exists")]
    DuplicateLocation(String),
    #[error("Location is still used by {0} space(s)")]
    LocationInUse(usize),
    #[error("Store lock poisoned")]
    Poisoned,
}

/// A request as seen by the server, kept for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub bearer: Option<String>,
}

impl RecordedRequest {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        actix_web::web::Query::<Vec<(String, String)>>::from_query(&self.query)
            .map(|q| q.into_inner())
            .unwrap_or_default()
    }
}

#[derive(Debug)]
struct State {
    admin: User,
    admin_password: String,
    tokens: HashMap<String, UserId>,
    spaces: Vec<Space>,
    leads: Vec<Lead>,
    locations: Vec<Location>,
    dashboard: DashboardStats,
    requests: Vec<RecordedRequest>,
    space_counter: u32,
}

/// Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct MockStore {
    state: Arc<Mutex<State>>,
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn location_name<'a>(locations: &'a [Location], id: &LocationId) -> &'a str {
    locations
        .iter()
        .find(|l| &l.id == id)
        .map(|l| l.name.as_str())
        .unwrap_or_default()
}

fn paginate<T>(items: Vec<T>, query: &ListQuery) -> Paginated<T> {
    let limit = query.limit.max(1);
    let page = query.page.max(1);
    let pagination = Pagination::new(page, limit, items.len() as u64);
    let skip = (page as usize - 1) * limit as usize;
    Paginated {
        items: items.into_iter().skip(skip).take(limit as usize).collect(),
        pagination,
    }
}

impl MockStore {
    pub fn new(admin: User, admin_password: String) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                admin,
                admin_password,
                tokens: HashMap::new(),
                spaces: Vec::new(),
                leads: Vec::new(),
                locations: Vec::new(),
                dashboard: DashboardStats::default(),
                requests: Vec::new(),
                space_counter: 0,
            })),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn record(&self, request: RecordedRequest) {
        if let Ok(mut state) = self.state() {
            state.requests.push(request);
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }

    pub fn clear_requests(&self) {
        if let Ok(mut state) = self.state() {
            state.requests.clear();
        }
    }

    /// Issue a fresh token for the admin account.
    pub fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, User), StoreError> {
        let mut state = self.state()?;
        if !state.admin.email.eq_ignore_ascii_case(email.trim())
            || state.admin_password != password
        {
            return Err(StoreError::InvalidCredentials);
        }
        let token = new_id();
        let user = state.admin.clone();
        state.tokens.insert(token.clone(), user.id.clone());
        Ok((token, user))
    }

    pub fn session_user(&self, token: &str) -> Option<UserId> {
        self.state().ok()?.tokens.get(token).cloned()
    }

    pub fn logout(&self, token: &str) -> Result<(), StoreError> {
        self.state()?.tokens.remove(token);
        Ok(())
    }

    /// Drop every issued token, as if they had all expired.
    pub fn revoke_all_tokens(&self) -> Result<(), StoreError> {
        self.state()?.tokens.clear();
        Ok(())
    }

    pub fn change_password(
        &self,
        current: &str,
        new: &str,
    ) -> Result<(), StoreError> {
        let mut state = self.state()?;
        if state.admin_password != current {
            return Err(StoreError::WrongPassword);
        }
        state.admin_password = new.to_string();
        Ok(())
    }

    pub fn list_spaces(
        &self,
        query: &ListQuery,
    ) -> Result<Paginated<Space>, StoreError> {
        let state = self.state()?;
        let matches: Vec<Space> = state
            .spaces
            .iter()
            .filter(|s| {
                query
                    .status
                    .as_deref()
                    .is_none_or(|status| s.status.as_str() == status)
            })
            .filter(|s| {
                query
                    .space_type
                    .as_deref()
                    .is_none_or(|t| s.space_type.as_str() == t)
            })
            .filter(|s| query.city.as_deref().is_none_or(|c| s.city.0 == c))
            .filter(|s| {
                query.search.as_deref().is_none_or(|term| {
                    contains_ci(&s.space_name, term)
                        || contains_ci(location_name(&state.locations, &s.city), term)
                        || s.space_id
                            .as_deref()
                            .is_some_and(|id| contains_ci(id, term))
                })
            })
            .cloned()
            .collect();
        Ok(paginate(matches, query))
    }

    pub fn get_space(&self, id: &SpaceId) -> Result<Space, StoreError> {
        self.state()?
            .spaces
            .iter()
            .find(|s| &s.id == id)
            .cloned()
            .ok_or(StoreError::SpaceNotFound)
    }

    pub fn create_space(
        &self,
        details: SpaceDetails,
    ) -> Result<Space, StoreError> {
        let mut state = self.state()?;
        if !state.locations.iter().any(|l| l.id == details.city) {
            return Err(StoreError::UnknownCity);
        }
        state.space_counter += 1;
        let now = Timestamp::now();
        let space = Space {
            id: SpaceId(new_id()),
            space_id: Some(format!("SP-{:04}", state.space_counter)),
            details,
            created_at: Some(now),
            updated_at: Some(now),
        };
        state.spaces.push(space.clone());
        Ok(space)
    }

    pub fn update_space(
        &self,
        id: &SpaceId,
        details: SpaceDetails,
    ) -> Result<Space, StoreError> {
        let mut state = self.state()?;
        if !state.locations.iter().any(|l| l.id == details.city) {
            return Err(StoreError::UnknownCity);
        }
        let space = state
            .spaces
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(StoreError::SpaceNotFound)?;
        space.details = details;
        space.updated_at = Some(Timestamp::now());
        Ok(space.clone())
    }

    pub fn delete_space(&self, id: &SpaceId) -> Result<(), StoreError> {
        let mut state = self.state()?;
        let before = state.spaces.len();
        state.spaces.retain(|s| &s.id != id);
        match state.spaces.len() < before {
            true => Ok(()),
            false => Err(StoreError::SpaceNotFound),
        }
    }

    pub fn insert_lead(&self, lead: Lead) -> Result<(), StoreError> {
        self.state()?.leads.push(lead);
        Ok(())
    }

    /// Newest first.
    pub fn list_leads(
        &self,
        query: &ListQuery,
    ) -> Result<Paginated<Lead>, StoreError> {
        let state = self.state()?;
        let mut matches: Vec<Lead> = state
            .leads
            .iter()
            .filter(|l| {
                query
                    .status
                    .as_deref()
                    .is_none_or(|status| l.status.as_str() == status)
            })
            .filter(|l| {
                query.search.as_deref().is_none_or(|term| {
                    contains_ci(&l.name, term)
                        || contains_ci(&l.email, term)
                        || contains_ci(&l.lead_id, term)
                        || contains_ci(&l.enquired_for, term)
                })
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(paginate(matches, query))
    }

    pub fn lead_stats(&self) -> Result<LeadStats, StoreError> {
        let state = self.state()?;
        let count = |status: LeadStatus| {
            state.leads.iter().filter(|l| l.status == status).count() as u64
        };
        Ok(LeadStats {
            total: state.leads.len() as u64,
            new: count(LeadStatus::New),
            contacted: count(LeadStatus::Contacted),
            qualified: count(LeadStatus::Qualified),
            converted: count(LeadStatus::Converted),
            lost: count(LeadStatus::Lost),
        })
    }

    pub fn update_lead_status(
        &self,
        id: &LeadId,
        status: LeadStatus,
    ) -> Result<Lead, StoreError> {
        let mut state = self.state()?;
        let lead = state
            .leads
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or(StoreError::LeadNotFound)?;
        lead.status = status;
        Ok(lead.clone())
    }

    pub fn delete_lead(&self, id: &LeadId) -> Result<(), StoreError> {
        let mut state = self.state()?;
        let before = state.leads.len();
        state.leads.retain(|l| &l.id != id);
        match state.leads.len() < before {
            true => Ok(()),
            false => Err(StoreError::LeadNotFound),
        }
    }

    pub fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        let mut locations = self.state()?.locations.clone();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }

    pub fn create_location(
        &self,
        details: CreateLocation,
    ) -> Result<Location, StoreError> {
        let mut state = self.state()?;
        let name = details.name.trim().to_string();
        if state
            .locations
            .iter()
            .any(|l| l.name.eq_ignore_ascii_case(&name))
        {
            return Err(StoreError::DuplicateLocation(name));
        }
        let location = Location {
            id: LocationId(new_id()),
            name,
            is_active: details.is_active,
            image: details.image,
            description: details.description,
        };
        state.locations.push(location.clone());
        Ok(location)
    }

    pub fn delete_location(&self, id: &LocationId) -> Result<(), StoreError> {
        let mut state = self.state()?;
        if !state.locations.iter().any(|l| &l.id == id) {
            return Err(StoreError::LocationNotFound);
        }
        let in_use = state.spaces.iter().filter(|s| &s.city == id).count();
        if in_use > 0 {
            return Err(StoreError::LocationInUse(in_use));
        }
        state.locations.retain(|l| &l.id != id);
        Ok(())
    }

    /// Seed the figures that cannot be derived from stored records.
    pub fn set_dashboard(&self, stats: DashboardStats) -> Result<(), StoreError> {
        self.state()?.dashboard = stats;
        Ok(())
    }

    /// Seeded figures, with space and booking breakdowns derived from the
    /// stored spaces and leads.
    pub fn dashboard_stats(&self) -> Result<DashboardStats, StoreError> {
        let state = self.state()?;

        let mut by_type: BTreeMap<&str, u64> = BTreeMap::new();
        for space in &state.spaces {
            *by_type.entry(space.space_type.label()).or_default() += 1;
        }
        let mut by_city: BTreeMap<&str, u64> = BTreeMap::new();
        for lead in &state.leads {
            *by_city.entry(lead.location.as_str()).or_default() += 1;
        }
        let to_counts = |map: BTreeMap<&str, u64>| -> Vec<LabelCount> {
            map.into_iter()
                .map(|(label, count)| LabelCount {
                    label: label.to_string(),
                    count,
                })
                .collect()
        };

        Ok(DashboardStats {
            total_spaces: state.spaces.len() as u64,
            spaces_by_type: to_counts(by_type),
            bookings_by_city: to_counts(by_city),
            ..state.dashboard.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::Role;

    fn store() -> MockStore {
        MockStore::new(
            User {
                id: UserId::from("admin"),
                email: "admin@cowork.test".into(),
                name: "Admin".into(),
                role: Role::SuperAdmin,
            },
            "Admin@123".into(),
        )
    }

    #[test]
    fn login_issues_distinct_tokens() {
        let store = store();
        assert!(store.login("admin@cowork.test", "wrong").is_err());
        let (a, _) = store.login("ADMIN@cowork.test", "Admin@123").unwrap();
        let (b, _) = store.login("admin@cowork.test", "Admin@123").unwrap();
        assert_ne!(a, b);
        assert!(store.session_user(&a).is_some());
        store.logout(&a).unwrap();
        assert!(store.session_user(&a).is_none());
        assert!(store.session_user(&b).is_some());
    }

    #[test]
    fn paginate_slices_the_requested_page() {
        let query = ListQuery::default().with_page(2);
        let page = paginate((1..=25).collect::<Vec<u32>>(), &query);
        assert_eq!(page.items, (11..=20).collect::<Vec<u32>>());
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn locations_in_use_cannot_be_deleted() {
        let store = store();
        let location = store
            .create_location(CreateLocation {
                name: "Kochi".into(),
                is_active: true,
                image: None,
                description: None,
            })
            .unwrap();
        assert!(matches!(
            store.create_location(CreateLocation {
                name: "kochi".into(),
                is_active: true,
                image: None,
                description: None,
            }),
            Err(StoreError::DuplicateLocation(_))
        ));
        store.delete_location(&location.id).unwrap();
        assert!(store.list_locations().unwrap().is_empty());
    }
}
