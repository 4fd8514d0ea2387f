pub mod api_client;
pub mod export;
pub mod requests;
pub mod responses;
pub mod space_form;
pub mod token_store;
pub mod validation;

pub use api_client::{APIClient, ClientError};
pub use token_store::{MemoryTokenStore, TokenStore};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Identifiers are opaque strings issued by the API.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::From,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(UserId);
string_id!(
    /// Database id of a space, distinct from its human-readable `spaceId`.
    SpaceId
);
string_id!(LeadId);
string_id!(LocationId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// The identity and access token of a signed-in staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub access_token: String,
}

impl Session {
    pub fn new(access_token: String, user: User) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            access_token,
        }
    }

    pub fn user(&self) -> User {
        User {
            id: self.user_id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Implements the string conversions shared by the fixed option sets the
/// API accepts.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// The value sent over the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(UnknownOption(s.to_string())),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown option: {0}")]
pub struct UnknownOption(pub String);

option_set!(SpaceType {
    CoworkingSpace => ("coworking-space", "Coworking Space"),
    VirtualOffice => ("virtual-office", "Virtual Office"),
    PrivateOffice => ("private-office", "Private Office"),
});

option_set!(SpaceCategory {
    Premium => ("premium", "Premium"),
    Standard => ("standard", "Standard"),
    Budget => ("budget", "Budget"),
});

option_set!(
    /// Listing state of a space. New listings start out pending review.
    SpaceStatus {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
        Pending => ("pending", "Pending"),
    }
);

option_set!(
    /// Where a lead sits in the sales pipeline.
    LeadStatus {
        New => ("new", "New"),
        Contacted => ("contacted", "Contacted"),
        Qualified => ("qualified", "Qualified"),
        Converted => ("converted", "Converted"),
        Lost => ("lost", "Lost"),
    }
);

impl Default for SpaceStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Amenities a space can advertise.
pub const AMENITY_OPTIONS: &[&str] = &[
    "WiFi",
    "Air Conditioning",
    "Power Backup",
    "Parking",
    "Meeting Rooms",
    "Cafeteria",
    "Coffee",
    "Printer",
    "Lockers",
    "24/7 Access",
    "Reception",
    "Security",
];

/// Prices are monthly rupee amounts unless noted otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_desk: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_desk: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabin_seat: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_capacity: Option<u32>,
    /// Per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_pass: Option<Decimal>,
    /// Per hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_room: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_office: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceAddress {
    pub address: String,
    pub pincode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The editable body of a space listing, as sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceDetails {
    pub space_name: String,
    pub space_type: SpaceType,
    /// The location this space belongs to. Responses may populate the whole
    /// location object; only its id is kept.
    #[serde(deserialize_with = "deserialize_city")]
    pub city: LocationId,
    pub space_category: SpaceCategory,
    pub short_description: String,
    pub long_description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub pricing: Pricing,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location: SpaceAddress,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
    #[serde(default)]
    pub status: SpaceStatus,
}

fn deserialize_city<'de, D>(deserializer: D) -> Result<LocationId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CityRef {
        Id(LocationId),
        Populated {
            #[serde(alias = "_id")]
            id: LocationId,
        },
    }

    Ok(match CityRef::deserialize(deserializer)? {
        CityRef::Id(id) => id,
        CityRef::Populated { id } => id,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    #[serde(alias = "_id")]
    pub id: SpaceId,
    /// Human-readable identifier, e.g. `SP-2025-001`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(flatten)]
    pub details: SpaceDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl std::ops::Deref for Space {
    type Target = SpaceDetails;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(alias = "_id")]
    pub id: LeadId,
    /// Human-readable identifier, e.g. `LD-2025-001`.
    pub lead_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Name of the workspace the enquiry was made for.
    pub enquired_for: String,
    pub space_type: String,
    pub number_of_seats: u32,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub date: Timestamp,
    pub status: LeadStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(alias = "_id")]
    pub id: LocationId,
    pub name: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_accepts_populated_city_and_mongo_id() {
        let json = r#"{
            "_id": "65f0c0ffee",
            "spaceId": "SP-2025-001",
            "spaceName": "WorkHub Kochi",
            "spaceType": "coworking-space",
            "city": { "_id": "loc-1", "name": "Kochi", "isActive": true },
            "spaceCategory": "premium",
            "shortDescription": "Modern coworking space",
            "longDescription": "A long description of the space",
            "pricing": { "hotDesk": 5000, "totalCapacity": 50 },
            "status": "active"
        }"#;
        let space: Space = serde_json::from_str(json).unwrap();
        assert_eq!(space.id, SpaceId::from("65f0c0ffee"));
        assert_eq!(space.city, LocationId::from("loc-1"));
        assert_eq!(space.space_type, SpaceType::CoworkingSpace);
        assert_eq!(space.pricing.hot_desk, Some(Decimal::from(5000)));
        assert_eq!(space.pricing.total_capacity, Some(50));
        assert!(space.amenities.is_empty());
    }

    #[test]
    fn space_accepts_bare_city_id() {
        let json = r#"{
            "id": "s1",
            "spaceName": "Executive Suites",
            "spaceType": "private-office",
            "city": "loc-2",
            "spaceCategory": "standard",
            "shortDescription": "Quiet private offices",
            "longDescription": "Private offices for small teams"
        }"#;
        let space: Space = serde_json::from_str(json).unwrap();
        assert_eq!(space.city, LocationId::from("loc-2"));
        assert_eq!(space.status, SpaceStatus::Pending);
    }

    #[test]
    fn option_sets_parse_their_wire_values() {
        assert_eq!("virtual-office".parse(), Ok(SpaceType::VirtualOffice));
        assert_eq!("converted".parse(), Ok(LeadStatus::Converted));
        assert!("archived".parse::<SpaceStatus>().is_err());
        assert_eq!(LeadStatus::Qualified.to_string(), "qualified");
    }
}
