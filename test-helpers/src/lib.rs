pub mod mock;

use jiff::Timestamp;
use mock_api::store::{MockStore, RecordedRequest};
use mock_api::{Config, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, telemetry};
use payloads::requests::{self, CreateLocation};
use payloads::{
    Contact, Lead, LeadId, LeadStatus, Location, LocationId, MemoryTokenStore,
    Pricing, Session, Space, SpaceAddress, SpaceCategory, SpaceDetails,
    SpaceStatus, SpaceType, TokenStore,
};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    pub port: u16,
    pub client: payloads::APIClient,
    /// The client's token store, for inspecting stored credentials.
    pub token_store: Arc<MemoryTokenStore>,
    /// Server-side state, shared with the running server.
    pub store: MockStore,
    login_redirects: Arc<AtomicUsize>,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// How many times the client would have sent the user to the login page.
    pub fn login_redirects(&self) -> usize {
        self.login_redirects.load(Ordering::SeqCst)
    }

    pub async fn login_admin(&self) -> anyhow::Result<Session> {
        Ok(self.client.login(&admin_credentials()).await?)
    }

    /// Requests the server received for `method` on `/api/v1/{path}`.
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        let path = format!("/api/v1/{path}");
        self.store
            .requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    /// Invalidate every issued token on the server side.
    pub fn expire_sessions(&self) -> anyhow::Result<()> {
        self.store.revoke_all_tokens()?;
        Ok(())
    }
}

/// Functions to populate test data
///
/// Using anyhow::Result lets us get a backtrace from when the error was fist
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    pub async fn create_test_location(
        &self,
        name: &str,
    ) -> anyhow::Result<Location> {
        let details = CreateLocation {
            name: name.into(),
            is_active: true,
            image: None,
            description: Some(format!("Workspaces in {name}")),
        };
        Ok(self.client.create_location(&details).await?)
    }

    pub async fn create_test_space(
        &self,
        city: &LocationId,
    ) -> anyhow::Result<Space> {
        let space = self.client.create_space(&space_details_a(city)).await?;
        Ok(space)
    }

    /// Leads arrive from the public site, so they go straight into the store.
    pub fn insert_test_lead(
        &self,
        lead_id: &str,
        name: &str,
        status: LeadStatus,
    ) -> anyhow::Result<Lead> {
        let lead = Lead {
            id: LeadId::from(lead_id.to_lowercase().as_str()),
            lead_id: lead_id.into(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "9876543210".into(),
            enquired_for: "WorkHub Kochi".into(),
            space_type: "Hot Desk".into(),
            number_of_seats: 2,
            location: "Kochi".into(),
            message: None,
            date: "2025-01-15T10:00:00Z".parse::<Timestamp>()?,
            status,
        };
        self.store.insert_lead(lead.clone())?;
        Ok(lead)
    }
}

pub async fn spawn_app_on_port(port: u16) -> anyhow::Result<TestApp> {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        admin_email: DEFAULT_ADMIN_EMAIL.into(),
        admin_password: DEFAULT_ADMIN_PASSWORD.into(),
        allowed_origins: vec!["*".to_string()],
    };
    let store = config.store();

    let server = mock_api::build(&mut config, store.clone())?;
    tokio::spawn(server);

    let token_store = Arc::new(MemoryTokenStore::new());
    let login_redirects = Arc::new(AtomicUsize::new(0));
    let redirects = login_redirects.clone();
    let client = payloads::APIClient::new(
        format!("http://127.0.0.1:{}", config.port),
        token_store.clone() as Arc<dyn TokenStore>,
    )
    .with_unauthorized_handler(move || {
        redirects.fetch_add(1, Ordering::SeqCst);
    });

    Ok(TestApp {
        port: config.port,
        client,
        token_store,
        store,
        login_redirects,
    })
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> anyhow::Result<TestApp> {
    spawn_app_on_port(0).await
}

pub fn admin_credentials() -> requests::LoginCredentials {
    requests::LoginCredentials {
        email: DEFAULT_ADMIN_EMAIL.into(),
        password: DEFAULT_ADMIN_PASSWORD.into(),
    }
}

pub fn space_details_a(city: &LocationId) -> SpaceDetails {
    SpaceDetails {
        space_name: "WorkHub Kochi".into(),
        space_type: SpaceType::CoworkingSpace,
        city: city.clone(),
        space_category: SpaceCategory::Premium,
        short_description: "Modern coworking near the metro".into(),
        long_description: "A bright, fully serviced coworking floor with \
                           fast internet, meeting rooms and a cafe."
            .into(),
        amenities: vec!["WiFi".into(), "Coffee".into()],
        pricing: Pricing {
            hot_desk: Some(Decimal::from(5000)),
            dedicated_desk: Some(Decimal::from(7500)),
            total_capacity: Some(50),
            ..Default::default()
        },
        images: vec!["https://images.example.com/workhub.jpg".into()],
        location: SpaceAddress {
            address: "12 MG Road, Ernakulam".into(),
            pincode: "682016".into(),
            latitude: Some(9.9816),
            longitude: Some(76.2999),
        },
        contact: Contact {
            name: "Priya Nair".into(),
            email: "priya@workhub.test".into(),
            phone: "+91 98765 43210".into(),
        },
        operating_hours: Some("Mon-Sat 9am-9pm".into()),
        status: SpaceStatus::Active,
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
