//! The multi-step space editor.
//!
//! Every step owns a fixed subset of [`SpaceField`]s and can only be left
//! forwards once those fields validate. All steps edit one [`SpaceDraft`],
//! which is converted into typed [`SpaceDetails`] on submission.

use crate::validation::{FieldRule, check_email, check_phone};
use crate::{
    AMENITY_OPTIONS, Contact, LocationId, Pricing, Space, SpaceAddress,
    SpaceCategory, SpaceDetails, SpaceId, SpaceStatus, SpaceType,
};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

pub const MAX_IMAGES: usize = 10;

pub type FieldErrors = BTreeMap<SpaceField, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormStep {
    BasicInfo,
    Amenities,
    Pricing,
    Media,
    Location,
    Contact,
    Additional,
}

impl FormStep {
    pub const ALL: [FormStep; 7] = [
        Self::BasicInfo,
        Self::Amenities,
        Self::Pricing,
        Self::Media,
        Self::Location,
        Self::Contact,
        Self::Additional,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::BasicInfo => "basic-info",
            Self::Amenities => "amenities",
            Self::Pricing => "pricing",
            Self::Media => "media",
            Self::Location => "location",
            Self::Contact => "contact",
            Self::Additional => "additional",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Amenities => "Amenities",
            Self::Pricing => "Pricing",
            Self::Media => "Media",
            Self::Location => "Location",
            Self::Contact => "Contact",
            Self::Additional => "Additional",
        }
    }

    /// The fields this step is responsible for.
    pub fn fields(self) -> &'static [SpaceField] {
        use SpaceField::*;
        match self {
            Self::BasicInfo => &[
                SpaceName,
                SpaceType,
                City,
                SpaceCategory,
                ShortDescription,
                LongDescription,
            ],
            Self::Amenities => &[Amenities],
            Self::Pricing => &[
                HotDesk,
                DedicatedDesk,
                CabinSeat,
                TotalCapacity,
                DayPass,
                MeetingRoom,
                PrivateOffice,
            ],
            Self::Media => &[Images],
            Self::Location => &[Address, Pincode, Latitude, Longitude],
            Self::Contact => &[ContactName, ContactEmail, ContactPhone],
            Self::Additional => &[OperatingHours, Status],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpaceField {
    SpaceName,
    SpaceType,
    City,
    SpaceCategory,
    ShortDescription,
    LongDescription,
    Amenities,
    HotDesk,
    DedicatedDesk,
    CabinSeat,
    TotalCapacity,
    DayPass,
    MeetingRoom,
    PrivateOffice,
    Images,
    Address,
    Pincode,
    Latitude,
    Longitude,
    ContactName,
    ContactEmail,
    ContactPhone,
    OperatingHours,
    Status,
}

const SPACE_NAME: FieldRule =
    FieldRule::new("Space name").required().min_len(3).max_len(100);
const SPACE_TYPE: FieldRule = FieldRule::new("Space type")
    .required()
    .one_of(SpaceType::VALUES);
const CITY: FieldRule = FieldRule::new("City").required();
const SPACE_CATEGORY: FieldRule = FieldRule::new("Space category")
    .required()
    .one_of(SpaceCategory::VALUES);
const SHORT_DESCRIPTION: FieldRule = FieldRule::new("Short description")
    .required()
    .min_len(10)
    .max_len(200);
const LONG_DESCRIPTION: FieldRule = FieldRule::new("Long description")
    .required()
    .min_len(50)
    .max_len(1000);
const ADDRESS: FieldRule =
    FieldRule::new("Address").required().min_len(5).max_len(200);
const CONTACT_NAME: FieldRule =
    FieldRule::new("Contact name").required().min_len(2).max_len(100);
const OPERATING_HOURS: FieldRule =
    FieldRule::new("Operating hours").max_len(100);
const STATUS: FieldRule = FieldRule::new("Status")
    .required()
    .one_of(SpaceStatus::VALUES);

impl SpaceField {
    pub fn step(self) -> FormStep {
        FormStep::ALL
            .into_iter()
            .find(|step| step.fields().contains(&self))
            .unwrap_or(FormStep::BasicInfo)
    }

    /// Dotted path of the field in the request body.
    pub fn key(self) -> &'static str {
        match self {
            Self::SpaceName => "spaceName",
            Self::SpaceType => "spaceType",
            Self::City => "city",
            Self::SpaceCategory => "spaceCategory",
            Self::ShortDescription => "shortDescription",
            Self::LongDescription => "longDescription",
            Self::Amenities => "amenities",
            Self::HotDesk => "pricing.hotDesk",
            Self::DedicatedDesk => "pricing.dedicatedDesk",
            Self::CabinSeat => "pricing.cabinSeat",
            Self::TotalCapacity => "pricing.totalCapacity",
            Self::DayPass => "pricing.dayPass",
            Self::MeetingRoom => "pricing.meetingRoom",
            Self::PrivateOffice => "pricing.privateOffice",
            Self::Images => "images",
            Self::Address => "location.address",
            Self::Pincode => "location.pincode",
            Self::Latitude => "location.latitude",
            Self::Longitude => "location.longitude",
            Self::ContactName => "contact.name",
            Self::ContactEmail => "contact.email",
            Self::ContactPhone => "contact.phone",
            Self::OperatingHours => "operatingHours",
            Self::Status => "status",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingDraft {
    pub hot_desk: String,
    pub dedicated_desk: String,
    pub cabin_seat: String,
    pub total_capacity: String,
    pub day_pass: String,
    pub meeting_room: String,
    pub private_office: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub address: String,
    pub pincode: String,
    pub latitude: String,
    pub longitude: String,
}

/// Form input exactly as typed. May be partial or invalid while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceDraft {
    pub space_name: String,
    pub space_type: String,
    pub city: String,
    pub space_category: String,
    pub short_description: String,
    pub long_description: String,
    pub amenities: Vec<String>,
    pub pricing: PricingDraft,
    pub images: Vec<String>,
    pub location: AddressDraft,
    pub contact: Contact,
    pub operating_hours: String,
    pub status: String,
}

impl Default for SpaceDraft {
    fn default() -> Self {
        Self {
            space_name: String::new(),
            space_type: String::new(),
            city: String::new(),
            space_category: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            amenities: Vec::new(),
            pricing: PricingDraft::default(),
            images: Vec::new(),
            location: AddressDraft::default(),
            contact: Contact::default(),
            operating_hours: String::new(),
            status: SpaceStatus::default().as_str().to_string(),
        }
    }
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl SpaceDraft {
    pub fn from_space(space: &Space) -> Self {
        let details = &space.details;
        Self {
            space_name: details.space_name.clone(),
            space_type: details.space_type.as_str().to_string(),
            city: details.city.0.clone(),
            space_category: details.space_category.as_str().to_string(),
            short_description: details.short_description.clone(),
            long_description: details.long_description.clone(),
            amenities: details.amenities.clone(),
            pricing: PricingDraft {
                hot_desk: opt_to_string(details.pricing.hot_desk),
                dedicated_desk: opt_to_string(details.pricing.dedicated_desk),
                cabin_seat: opt_to_string(details.pricing.cabin_seat),
                total_capacity: opt_to_string(details.pricing.total_capacity),
                day_pass: opt_to_string(details.pricing.day_pass),
                meeting_room: opt_to_string(details.pricing.meeting_room),
                private_office: opt_to_string(details.pricing.private_office),
            },
            images: details.images.clone(),
            location: AddressDraft {
                address: details.location.address.clone(),
                pincode: details.location.pincode.clone(),
                latitude: opt_to_string(details.location.latitude),
                longitude: opt_to_string(details.location.longitude),
            },
            contact: details.contact.clone(),
            operating_hours: details.operating_hours.clone().unwrap_or_default(),
            status: details.status.as_str().to_string(),
        }
    }

    fn text_mut(&mut self, field: SpaceField) -> Option<&mut String> {
        use SpaceField::*;
        Some(match field {
            SpaceName => &mut self.space_name,
            SpaceType => &mut self.space_type,
            City => &mut self.city,
            SpaceCategory => &mut self.space_category,
            ShortDescription => &mut self.short_description,
            LongDescription => &mut self.long_description,
            HotDesk => &mut self.pricing.hot_desk,
            DedicatedDesk => &mut self.pricing.dedicated_desk,
            CabinSeat => &mut self.pricing.cabin_seat,
            TotalCapacity => &mut self.pricing.total_capacity,
            DayPass => &mut self.pricing.day_pass,
            MeetingRoom => &mut self.pricing.meeting_room,
            PrivateOffice => &mut self.pricing.private_office,
            Address => &mut self.location.address,
            Pincode => &mut self.location.pincode,
            Latitude => &mut self.location.latitude,
            Longitude => &mut self.location.longitude,
            ContactName => &mut self.contact.name,
            ContactEmail => &mut self.contact.email,
            ContactPhone => &mut self.contact.phone,
            OperatingHours => &mut self.operating_hours,
            Status => &mut self.status,
            Amenities | Images => return None,
        })
    }

    /// The value of a text field. `None` for the list-valued fields.
    pub fn text(&self, field: SpaceField) -> Option<&str> {
        use SpaceField::*;
        Some(match field {
            SpaceName => &self.space_name,
            SpaceType => &self.space_type,
            City => &self.city,
            SpaceCategory => &self.space_category,
            ShortDescription => &self.short_description,
            LongDescription => &self.long_description,
            HotDesk => &self.pricing.hot_desk,
            DedicatedDesk => &self.pricing.dedicated_desk,
            CabinSeat => &self.pricing.cabin_seat,
            TotalCapacity => &self.pricing.total_capacity,
            DayPass => &self.pricing.day_pass,
            MeetingRoom => &self.pricing.meeting_room,
            PrivateOffice => &self.pricing.private_office,
            Address => &self.location.address,
            Pincode => &self.location.pincode,
            Latitude => &self.location.latitude,
            Longitude => &self.location.longitude,
            ContactName => &self.contact.name,
            ContactEmail => &self.contact.email,
            ContactPhone => &self.contact.phone,
            OperatingHours => &self.operating_hours,
            Status => &self.status,
            Amenities | Images => return None,
        })
    }

    /// Returns false if `field` is not a text field.
    pub fn set_text(&mut self, field: SpaceField, value: String) -> bool {
        match self.text_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn is_coworking(&self) -> bool {
        self.space_type == SpaceType::CoworkingSpace.as_str()
    }

    pub fn validate_field(&self, field: SpaceField) -> Option<String> {
        use SpaceField::*;
        let coworking = self.is_coworking();
        let result = match field {
            SpaceName => SPACE_NAME.check(&self.space_name),
            SpaceType => SPACE_TYPE.check(&self.space_type),
            City => CITY.check(&self.city),
            SpaceCategory => SPACE_CATEGORY.check(&self.space_category),
            ShortDescription => SHORT_DESCRIPTION.check(&self.short_description),
            LongDescription => LONG_DESCRIPTION.check(&self.long_description),
            Amenities => check_amenities(&self.amenities),
            HotDesk => check_price("Hot desk price", &self.pricing.hot_desk, coworking),
            DedicatedDesk => {
                check_price("Dedicated desk price", &self.pricing.dedicated_desk, false)
            }
            CabinSeat => check_price("Cabin seat price", &self.pricing.cabin_seat, false),
            TotalCapacity => check_capacity(&self.pricing.total_capacity, coworking),
            DayPass => check_price("Day pass price", &self.pricing.day_pass, false),
            MeetingRoom => {
                check_price("Meeting room price", &self.pricing.meeting_room, false)
            }
            PrivateOffice => {
                check_price("Private office price", &self.pricing.private_office, false)
            }
            Images => check_images(&self.images),
            Address => ADDRESS.check(&self.location.address),
            Pincode => check_pincode(&self.location.pincode),
            Latitude => check_coordinate("Latitude", &self.location.latitude, 90.0),
            Longitude => check_coordinate("Longitude", &self.location.longitude, 180.0),
            ContactName => CONTACT_NAME.check(&self.contact.name),
            ContactEmail => check_email("Contact email", &self.contact.email),
            ContactPhone => check_phone("Contact phone", &self.contact.phone),
            OperatingHours => OPERATING_HOURS.check(&self.operating_hours),
            Status => STATUS.check(&self.status),
        };
        result.err()
    }

    pub fn validate_step(&self, step: FormStep) -> FieldErrors {
        validate_fields(self, step.fields().iter().copied())
    }

    pub fn validate(&self) -> FieldErrors {
        validate_fields(
            self,
            FormStep::ALL.iter().flat_map(|step| step.fields().iter().copied()),
        )
    }

    /// Convert into a request body, or every validation failure.
    pub fn to_details(&self) -> Result<SpaceDetails, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        // Every parse below was just checked by `validate`.
        let invalid = |field: SpaceField| {
            FieldErrors::from([(field, format!("Invalid {}", field.key()))])
        };
        let parse_enum = |field: SpaceField| -> Result<&str, FieldErrors> {
            self.text(field).map(str::trim).ok_or_else(|| invalid(field))
        };
        let space_type = parse_enum(SpaceField::SpaceType)?
            .parse::<SpaceType>()
            .map_err(|_| invalid(SpaceField::SpaceType))?;
        let space_category = parse_enum(SpaceField::SpaceCategory)?
            .parse::<SpaceCategory>()
            .map_err(|_| invalid(SpaceField::SpaceCategory))?;
        let status = parse_enum(SpaceField::Status)?
            .parse::<SpaceStatus>()
            .map_err(|_| invalid(SpaceField::Status))?;
        let total_capacity = parse_optional::<u32>(&self.pricing.total_capacity)
            .map_err(|_| invalid(SpaceField::TotalCapacity))?;

        let price = |field: SpaceField| -> Result<Option<Decimal>, FieldErrors> {
            parse_optional::<Decimal>(self.text(field).unwrap_or_default())
                .map_err(|_| invalid(field))
        };
        let coordinate = |field: SpaceField| -> Result<Option<f64>, FieldErrors> {
            parse_optional::<f64>(self.text(field).unwrap_or_default())
                .map_err(|_| invalid(field))
        };
        let operating_hours = self.operating_hours.trim();

        Ok(SpaceDetails {
            space_name: self.space_name.trim().to_string(),
            space_type,
            city: LocationId(self.city.trim().to_string()),
            space_category,
            short_description: self.short_description.trim().to_string(),
            long_description: self.long_description.trim().to_string(),
            amenities: self.amenities.clone(),
            pricing: Pricing {
                hot_desk: price(SpaceField::HotDesk)?,
                dedicated_desk: price(SpaceField::DedicatedDesk)?,
                cabin_seat: price(SpaceField::CabinSeat)?,
                total_capacity,
                day_pass: price(SpaceField::DayPass)?,
                meeting_room: price(SpaceField::MeetingRoom)?,
                private_office: price(SpaceField::PrivateOffice)?,
            },
            images: self.images.iter().map(|url| url.trim().to_string()).collect(),
            location: SpaceAddress {
                address: self.location.address.trim().to_string(),
                pincode: self.location.pincode.trim().to_string(),
                latitude: coordinate(SpaceField::Latitude)?,
                longitude: coordinate(SpaceField::Longitude)?,
            },
            contact: Contact {
                name: self.contact.name.trim().to_string(),
                email: self.contact.email.trim().to_string(),
                phone: self.contact.phone.trim().to_string(),
            },
            operating_hours: (!operating_hours.is_empty())
                .then(|| operating_hours.to_string()),
            status,
        })
    }
}

fn validate_fields(
    draft: &SpaceDraft,
    fields: impl Iterator<Item = SpaceField>,
) -> FieldErrors {
    fields
        .filter_map(|field| {
            draft.validate_field(field).map(|message| (field, message))
        })
        .collect()
}

fn parse_optional<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}

fn check_amenities(amenities: &[String]) -> Result<(), String> {
    if amenities.is_empty() {
        return Err("Select at least one amenity".into());
    }
    match amenities
        .iter()
        .find(|a| !AMENITY_OPTIONS.contains(&a.as_str()))
    {
        Some(unknown) => Err(format!("Unknown amenity: {unknown}")),
        None => Ok(()),
    }
}

fn check_price(label: &str, value: &str, required: bool) -> Result<(), String> {
    match parse_optional::<Decimal>(value) {
        Ok(None) if required => {
            Err(format!("{label} is required for coworking spaces"))
        }
        Ok(None) => Ok(()),
        Ok(Some(price)) if price.is_sign_negative() && !price.is_zero() => {
            Err(format!("{label} cannot be negative"))
        }
        Ok(Some(_)) => Ok(()),
        Err(_) => Err(format!("{label} must be a number")),
    }
}

fn check_capacity(value: &str, required: bool) -> Result<(), String> {
    if value.trim().is_empty() {
        return match required {
            true => Err("Total capacity is required for coworking spaces".into()),
            false => Ok(()),
        };
    }
    match parse_optional::<u32>(value) {
        Ok(_) => Ok(()),
        Err(_) => Err("Total capacity must be a whole number".into()),
    }
}

fn check_images(images: &[String]) -> Result<(), String> {
    if images.is_empty() {
        return Err("Add at least one image".into());
    }
    if images.len() > MAX_IMAGES {
        return Err(format!("At most {MAX_IMAGES} images are allowed"));
    }
    for (i, url) in images.iter().enumerate() {
        if !is_http_url(url) {
            return Err(format!("Image {} must be an http(s) URL", i + 1));
        }
    }
    Ok(())
}

pub fn is_http_url(url: &str) -> bool {
    let url = url.trim();
    ["http://", "https://"].iter().any(|scheme| {
        url.strip_prefix(scheme).is_some_and(|rest| {
            !rest.is_empty() && !rest.chars().any(char::is_whitespace)
        })
    })
}

fn check_pincode(pincode: &str) -> Result<(), String> {
    let pincode = pincode.trim();
    if pincode.is_empty() {
        return Err("Pincode is required".into());
    }
    if pincode.len() != 6 || !pincode.chars().all(|c| c.is_ascii_digit()) {
        return Err("Pincode must be exactly 6 digits".into());
    }
    Ok(())
}

fn check_coordinate(label: &str, value: &str, bound: f64) -> Result<(), String> {
    match parse_optional::<f64>(value) {
        Ok(None) => Ok(()),
        Ok(Some(v)) if v.is_finite() && (-bound..=bound).contains(&v) => Ok(()),
        Ok(Some(_)) => Err(format!("{label} must be between -{bound} and {bound}")),
        Err(_) => Err(format!("{label} must be a number")),
    }
}

/// What a successful submit asks the caller to send.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(SpaceDetails),
    Update(SpaceId, SpaceDetails),
}

impl Submission {
    pub fn details(&self) -> &SpaceDetails {
        match self {
            Self::Create(details) | Self::Update(_, details) => details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Complete the remaining steps before publishing")]
    NotOnFinalStep,
    #[error("Please fix the highlighted fields")]
    Invalid { step: FormStep },
    #[error("A submission is already in progress")]
    InProgress,
}

/// State of the multi-step space editor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceForm {
    step: FormStep,
    draft: SpaceDraft,
    errors: FieldErrors,
    touched: BTreeSet<SpaceField>,
    existing_id: Option<SpaceId>,
    submit_error: Option<String>,
    submitting: bool,
}

impl Default for SpaceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceForm {
    pub fn new() -> Self {
        Self {
            step: FormStep::BasicInfo,
            draft: SpaceDraft::default(),
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            existing_id: None,
            submit_error: None,
            submitting: false,
        }
    }

    /// Start editing an existing space.
    pub fn edit(space: &Space) -> Self {
        Self {
            draft: SpaceDraft::from_space(space),
            existing_id: Some(space.id.clone()),
            ..Self::new()
        }
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn draft(&self) -> &SpaceDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: SpaceField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_touched(&self, field: SpaceField) -> bool {
        self.touched.contains(&field)
    }

    pub fn existing_id(&self) -> Option<&SpaceId> {
        self.existing_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.existing_id.is_some()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_text(&mut self, field: SpaceField, value: String) {
        if !self.draft.set_text(field, value) {
            return;
        }
        self.revalidate_touched(field);
        // Pricing requirements depend on the space type.
        if field == SpaceField::SpaceType {
            for &pricing_field in FormStep::Pricing.fields() {
                self.revalidate_touched(pricing_field);
            }
        }
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        let amenities = &mut self.draft.amenities;
        match amenities.iter().position(|a| a == amenity) {
            Some(i) => {
                amenities.remove(i);
            }
            None => amenities.push(amenity.to_string()),
        }
        self.revalidate_touched(SpaceField::Amenities);
    }

    /// Blank URLs are ignored.
    pub fn add_image(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        self.draft.images.push(url.to_string());
        self.revalidate_touched(SpaceField::Images);
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.draft.images.len() {
            self.draft.images.remove(index);
            self.revalidate_touched(SpaceField::Images);
        }
    }

    /// Mark a field touched and validate it immediately.
    pub fn blur(&mut self, field: SpaceField) {
        self.touched.insert(field);
        self.record(field, self.draft.validate_field(field));
    }

    /// Validate the active step and advance if it passes.
    pub fn next(&mut self) -> bool {
        if !self.check_step(self.step) {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step without validating.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Jump to a step. Moving forward validates every step passed over and
    /// stops at the first one that fails.
    pub fn go_to(&mut self, target: FormStep) -> FormStep {
        if target <= self.step {
            self.step = target;
        } else {
            while self.step < target && self.next() {}
        }
        self.step
    }

    /// Validate the whole draft and produce the request to send.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InProgress);
        }
        if !self.step.is_last() {
            return Err(SubmitError::NotOnFinalStep);
        }

        let details = match self.draft.to_details() {
            Ok(details) => details,
            Err(errors) => {
                let step = errors
                    .keys()
                    .map(|field| field.step())
                    .min()
                    .unwrap_or(self.step);
                self.touched.extend(errors.keys().copied());
                self.errors = errors;
                self.step = step;
                return Err(SubmitError::Invalid { step });
            }
        };

        self.errors.clear();
        self.submit_error = None;
        self.submitting = true;
        Ok(match &self.existing_id {
            Some(id) => Submission::Update(id.clone(), details),
            None => Submission::Create(details),
        })
    }

    /// The request was rejected. Data and position are kept.
    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.submit_error = Some(message);
    }

    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.submit_error = None;
    }

    fn check_step(&mut self, step: FormStep) -> bool {
        let mut valid = true;
        for &field in step.fields() {
            self.touched.insert(field);
            let error = self.draft.validate_field(field);
            valid &= error.is_none();
            self.record(field, error);
        }
        valid
    }

    fn revalidate_touched(&mut self, field: SpaceField) {
        if self.touched.contains(&field) {
            self.record(field, self.draft.validate_field(field));
        }
    }

    fn record(&mut self, field: SpaceField, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_basic_info(form: &mut SpaceForm) {
        form.set_text(SpaceField::SpaceName, "WorkHub Kochi".into());
        form.set_text(SpaceField::SpaceType, "coworking-space".into());
        form.set_text(SpaceField::City, "loc-1".into());
        form.set_text(SpaceField::SpaceCategory, "premium".into());
        form.set_text(
            SpaceField::ShortDescription,
            "Modern coworking near the metro".into(),
        );
        form.set_text(
            SpaceField::LongDescription,
            "A bright, fully serviced coworking floor with fast internet and \
             meeting rooms."
                .into(),
        );
    }

    fn fill_all(form: &mut SpaceForm) {
        fill_basic_info(form);
        form.toggle_amenity("WiFi");
        form.set_text(SpaceField::HotDesk, "5000".into());
        form.set_text(SpaceField::TotalCapacity, "50".into());
        form.add_image("https://images.example.com/kochi.jpg");
        form.set_text(SpaceField::Address, "12 MG Road, Ernakulam".into());
        form.set_text(SpaceField::Pincode, "682016".into());
        form.set_text(SpaceField::ContactName, "Priya".into());
        form.set_text(SpaceField::ContactEmail, "priya@workhub.test".into());
        form.set_text(SpaceField::ContactPhone, "+91 98765 43210".into());
    }

    fn walk_to_last(form: &mut SpaceForm) {
        while form.next() {}
        assert_eq!(form.step(), FormStep::Additional);
    }

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        let all: Vec<SpaceField> = FormStep::ALL
            .iter()
            .flat_map(|step| step.fields().iter().copied())
            .collect();
        let unique: BTreeSet<SpaceField> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(all.len(), 24);
    }

    #[test]
    fn next_blocks_on_invalid_step_and_marks_fields() {
        let mut form = SpaceForm::new();
        assert!(!form.next());
        assert_eq!(form.step(), FormStep::BasicInfo);
        assert!(form.is_touched(SpaceField::SpaceName));
        assert_eq!(form.error(SpaceField::City), Some("City is required"));

        fill_basic_info(&mut form);
        assert!(form.errors().is_empty());
        assert!(form.next());
        assert_eq!(form.step(), FormStep::Amenities);
    }

    #[test]
    fn amenities_step_requires_a_selection() {
        let mut form = SpaceForm::new();
        fill_basic_info(&mut form);
        form.next();
        assert!(!form.next());
        form.toggle_amenity("Parking");
        assert!(form.next());
        assert_eq!(form.step(), FormStep::Pricing);
    }

    #[test]
    fn coworking_pricing_needs_hot_desk_and_capacity() {
        let mut form = SpaceForm::new();
        fill_basic_info(&mut form);
        form.toggle_amenity("WiFi");
        form.go_to(FormStep::Pricing);
        assert_eq!(form.step(), FormStep::Pricing);

        assert!(!form.next());
        assert!(form.error(SpaceField::HotDesk).is_some());
        assert!(form.error(SpaceField::TotalCapacity).is_some());

        form.set_text(SpaceField::HotDesk, "-1".into());
        assert_eq!(
            form.error(SpaceField::HotDesk),
            Some("Hot desk price cannot be negative")
        );
        form.set_text(SpaceField::HotDesk, "4999.50".into());
        form.set_text(SpaceField::TotalCapacity, "12.5".into());
        assert_eq!(
            form.error(SpaceField::TotalCapacity),
            Some("Total capacity must be a whole number")
        );

        // Switching away from coworking lifts the requirement.
        form.set_text(SpaceField::TotalCapacity, String::new());
        form.set_text(SpaceField::SpaceType, "virtual-office".into());
        assert_eq!(form.error(SpaceField::TotalCapacity), None);
        assert!(form.next());
    }

    #[test]
    fn previous_keeps_data_and_skips_validation() {
        let mut form = SpaceForm::new();
        fill_basic_info(&mut form);
        form.next();
        let draft = form.draft().clone();
        assert!(form.previous());
        assert_eq!(form.step(), FormStep::BasicInfo);
        assert_eq!(form.draft(), &draft);
        assert!(!form.previous());
    }

    #[test]
    fn go_to_forward_stops_at_first_invalid_step() {
        let mut form = SpaceForm::new();
        fill_basic_info(&mut form);
        assert_eq!(form.go_to(FormStep::Contact), FormStep::Amenities);
        assert_eq!(form.go_to(FormStep::BasicInfo), FormStep::BasicInfo);
    }

    #[test]
    fn submit_only_from_last_step() {
        let mut form = SpaceForm::new();
        fill_all(&mut form);
        assert_eq!(form.submit(), Err(SubmitError::NotOnFinalStep));
    }

    #[test]
    fn valid_submit_creates_once() {
        let mut form = SpaceForm::new();
        fill_all(&mut form);
        walk_to_last(&mut form);

        let Ok(Submission::Create(details)) = form.submit() else {
            panic!("expected a create submission");
        };
        assert_eq!(details.space_type, SpaceType::CoworkingSpace);
        assert_eq!(details.pricing.hot_desk, Some(Decimal::from(5000)));
        assert_eq!(details.pricing.total_capacity, Some(50));
        assert_eq!(details.status, SpaceStatus::Pending);
        assert_eq!(details.operating_hours, None);
        assert!(form.is_submitting());

        assert_eq!(form.submit(), Err(SubmitError::InProgress));
    }

    #[test]
    fn submit_jumps_to_first_invalid_step() {
        let mut form = SpaceForm::new();
        fill_all(&mut form);
        walk_to_last(&mut form);
        form.go_to(FormStep::Media);
        form.remove_image(0);
        form.go_to(FormStep::BasicInfo);
        form.set_text(SpaceField::Status, "archived".into());

        // Walk forward again without re-checking Media by editing directly.
        form.step = FormStep::Additional;
        assert_eq!(
            form.submit(),
            Err(SubmitError::Invalid {
                step: FormStep::Media
            })
        );
        assert_eq!(form.step(), FormStep::Media);
        assert!(form.error(SpaceField::Images).is_some());
        assert!(form.error(SpaceField::Status).is_some());
        assert!(!form.is_submitting());
    }

    #[test]
    fn editing_submits_an_update_and_survives_failure() {
        let mut form = SpaceForm::new();
        fill_all(&mut form);
        walk_to_last(&mut form);
        let Ok(Submission::Create(details)) = form.submit() else {
            panic!("expected a create submission");
        };
        let space = Space {
            id: SpaceId::from("s-42"),
            space_id: Some("SP-2025-042".into()),
            details,
            created_at: None,
            updated_at: None,
        };

        let mut form = SpaceForm::edit(&space);
        assert!(form.is_editing());
        assert_eq!(form.draft().pricing.hot_desk, "5000");
        walk_to_last(&mut form);

        let submission = form.submit();
        assert!(matches!(
            submission,
            Ok(Submission::Update(ref id, _)) if id == &space.id
        ));

        form.submit_failed("Space name already taken".into());
        assert_eq!(form.submit_error(), Some("Space name already taken"));
        assert!(!form.is_submitting());
        assert_eq!(form.step(), FormStep::Additional);
        assert_eq!(form.draft().space_name, "WorkHub Kochi");
    }

    #[test]
    fn touched_fields_revalidate_on_edit() {
        let mut form = SpaceForm::new();
        form.set_text(SpaceField::Pincode, "12".into());
        assert_eq!(form.error(SpaceField::Pincode), None);

        form.blur(SpaceField::Pincode);
        assert_eq!(
            form.error(SpaceField::Pincode),
            Some("Pincode must be exactly 6 digits")
        );
        form.set_text(SpaceField::Pincode, "682016".into());
        assert_eq!(form.error(SpaceField::Pincode), None);
    }

    #[test]
    fn image_rules() {
        let mut draft = SpaceDraft::default();
        draft.images = vec!["ftp://files.example.com/a.png".into()];
        assert_eq!(
            draft.validate_field(SpaceField::Images),
            Some("Image 1 must be an http(s) URL".into())
        );
        draft.images = vec!["https://cdn.example.com/a.png".into(); 11];
        assert!(draft.validate_field(SpaceField::Images).is_some());
        draft.images.truncate(10);
        assert_eq!(draft.validate_field(SpaceField::Images), None);
    }

    #[test]
    fn coordinates_are_optional_but_bounded() {
        let mut draft = SpaceDraft::default();
        assert_eq!(draft.validate_field(SpaceField::Latitude), None);
        draft.location.latitude = "91".into();
        assert!(draft.validate_field(SpaceField::Latitude).is_some());
        draft.location.longitude = "76.2673".into();
        assert_eq!(draft.validate_field(SpaceField::Longitude), None);
    }
}
