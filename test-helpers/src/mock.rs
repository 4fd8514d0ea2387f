//! Sample data for local UI development.
//!
//! Locations and spaces are created through the API client, the same way
//! the admin panel creates them. Leads and the dashboard's revenue figures
//! have no create endpoint, so they are written into the store directly.

use crate::{TestApp, space_details_a};
use anyhow::Result;
use jiff::{Span, Timestamp};
use payloads::requests::CreateLocation;
use payloads::responses::{DashboardStats, RevenuePoint, TopSpace};
use payloads::{
    Lead, LeadId, LeadStatus, Location, Pricing, Space, SpaceCategory,
    SpaceDetails, SpaceStatus, SpaceType,
};
use rust_decimal::Decimal;

const CITIES: &[(&str, bool)] = &[
    ("Kochi", true),
    ("Bangalore", true),
    ("Mumbai", true),
    ("Pune", true),
    ("Chennai", false),
];

const LEAD_NAMES: &[&str] = &[
    "Asha Menon",
    "Ravi Kumar",
    "Neha Sharma",
    "Arjun Pillai",
    "Fatima Sheikh",
    "Vikram Rao",
    "Meera Iyer",
    "Karan Mehta",
    "Divya Nair",
    "Rahul Verma",
    "Sneha Kulkarni",
    "Aditya Joshi",
    "Pooja Reddy",
    "Imran Khan",
    "Lakshmi Das",
    "Siddharth Bose",
    "Ananya Ghosh",
    "Nikhil Jain",
    "Priyanka Singh",
    "Manoj Thomas",
    "Kavya Hegde",
    "Rohan Desai",
];

const SEAT_TYPES: &[&str] = &["Hot Desk", "Dedicated Desk", "Cabin", "Day Pass"];

pub struct DevDataset {
    pub locations: Vec<Location>,
    pub spaces: Vec<Space>,
    pub leads: Vec<Lead>,
}

impl DevDataset {
    /// Populate the app. The client must already be logged in.
    pub async fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("📍 Creating locations");
        let mut locations = Vec::new();
        for &(name, is_active) in CITIES {
            let details = CreateLocation {
                name: name.into(),
                is_active,
                image: None,
                description: Some(format!("Workspaces across {name}")),
            };
            locations.push(app.client.create_location(&details).await?);
        }

        tracing::info!("🏢 Creating spaces");
        let mut spaces = Vec::new();
        for (i, details) in space_variants(&locations).into_iter().enumerate() {
            let space = app.client.create_space(&details).await?;
            tracing::debug!("created space {} ({})", space.space_name, i);
            spaces.push(space);
        }

        tracing::info!("📨 Inserting leads");
        let leads = sample_leads(&spaces, &locations);
        for lead in &leads {
            app.store.insert_lead(lead.clone())?;
        }

        app.store
            .set_dashboard(dashboard_baseline(&spaces, &locations))?;
        tracing::info!("✅ Development dataset created");

        Ok(DevDataset {
            locations,
            spaces,
            leads,
        })
    }

    /// Print a summary of the created test data
    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        for location in &self.locations {
            let spaces: Vec<&Space> = self
                .spaces
                .iter()
                .filter(|s| s.city == location.id)
                .collect();
            tracing::info!(
                "   📍 {} ({}){}",
                location.name,
                location.id,
                if location.is_active { "" } else { " [inactive]" }
            );
            for (i, space) in spaces.iter().enumerate() {
                let branch = if i + 1 == spaces.len() { "└─" } else { "├─" };
                tracing::info!(
                    "      {branch} {} [{}, {}]",
                    space.space_name,
                    space.space_type.label(),
                    space.status
                );
            }
        }
        tracing::info!("   📨 {} leads", self.leads.len());
    }
}

/// One listing per active city plus a few extra shapes: a virtual office,
/// a private office and a pending listing.
fn space_variants(locations: &[Location]) -> Vec<SpaceDetails> {
    let active: Vec<&Location> =
        locations.iter().filter(|l| l.is_active).collect();
    let mut variants: Vec<SpaceDetails> = active
        .iter()
        .map(|location| SpaceDetails {
            space_name: format!("WorkHub {}", location.name),
            short_description: format!(
                "Modern coworking in the heart of {}",
                location.name
            ),
            ..space_details_a(&location.id)
        })
        .collect();

    if let Some(location) = active.get(1) {
        variants.push(SpaceDetails {
            space_name: format!("{} Business Address", location.name),
            space_type: SpaceType::VirtualOffice,
            space_category: SpaceCategory::Budget,
            short_description: "Registered business address and mail handling"
                .into(),
            long_description: "A virtual office with a prestigious address, \
                               GST registration support and mail forwarding."
                .into(),
            amenities: vec!["Reception".into(), "Security".into()],
            pricing: Pricing::default(),
            ..space_details_a(&location.id)
        });
    }
    if let Some(location) = active.get(2) {
        variants.push(SpaceDetails {
            space_name: format!("Executive Suites {}", location.name),
            space_type: SpaceType::PrivateOffice,
            space_category: SpaceCategory::Standard,
            short_description: "Lockable private cabins for small teams".into(),
            pricing: Pricing {
                private_office: Some(Decimal::from(45000)),
                meeting_room: Some(Decimal::from(800)),
                ..Pricing::default()
            },
            ..space_details_a(&location.id)
        });
    }
    if let Some(location) = active.first() {
        variants.push(SpaceDetails {
            space_name: format!("{} Startup Loft", location.name),
            space_category: SpaceCategory::Budget,
            status: SpaceStatus::Pending,
            ..space_details_a(&location.id)
        });
    }
    variants
}

fn sample_leads(spaces: &[Space], locations: &[Location]) -> Vec<Lead> {
    const STATUSES: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Converted,
        LeadStatus::Lost,
    ];
    let now = Timestamp::now();
    if spaces.is_empty() {
        return Vec::new();
    }

    LEAD_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let space = &spaces[i % spaces.len()];
            let location = city_name(locations, space);
            let first = name.split_whitespace().next().unwrap_or(name);
            Lead {
                id: LeadId(format!("lead-{:03}", i + 1)),
                lead_id: format!("LD-2025-{:03}", i + 1),
                name: name.to_string(),
                email: format!("{}@example.com", first.to_lowercase()),
                phone: format!("98765{:05}", 10000 + i * 137),
                enquired_for: space.space_name.clone(),
                space_type: SEAT_TYPES[i % SEAT_TYPES.len()].into(),
                number_of_seats: (i % 6 + 1) as u32,
                location,
                message: (i % 3 == 0).then(|| {
                    "Looking to move in next month, is parking included?"
                        .to_string()
                }),
                date: now - Span::new().hours(i as i64 * 19),
                // most enquiries are recent and still new
                status: if i < 6 {
                    LeadStatus::New
                } else {
                    STATUSES[i % STATUSES.len()]
                },
            }
        })
        .collect()
}

fn city_name(locations: &[Location], space: &Space) -> String {
    locations
        .iter()
        .find(|l| l.id == space.city)
        .map(|l| l.name.clone())
        .unwrap_or_default()
}

fn dashboard_baseline(
    spaces: &[Space],
    locations: &[Location],
) -> DashboardStats {
    let months = ["May", "Jun", "Jul", "Aug", "Sep", "Oct"];
    let revenue_trend = months
        .iter()
        .enumerate()
        .map(|(i, month)| RevenuePoint {
            month: month.to_string(),
            revenue: Decimal::from(280_000 + i as i64 * 27_500),
        })
        .collect();
    let top_spaces = spaces
        .iter()
        .filter(|s| s.status == SpaceStatus::Active)
        .take(4)
        .enumerate()
        .map(|(i, s)| TopSpace {
            name: s.space_name.clone(),
            city: city_name(locations, s),
            bookings: 48 - i as u64 * 9,
            revenue: Decimal::from(125_000 - i as i64 * 21_000),
        })
        .collect();

    DashboardStats {
        total_revenue: Decimal::from(420_000),
        revenue_change: 12.5,
        active_bookings: 156,
        bookings_change: 8.2,
        spaces_change: 2,
        occupancy_rate: 87.0,
        occupancy_change: -3.1,
        revenue_trend,
        top_spaces,
        ..DashboardStats::default()
    }
}
