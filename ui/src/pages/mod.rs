pub mod dashboard;
pub mod leads;
pub mod locations;
pub mod login;
pub mod not_found;
pub mod settings;
pub mod space_editor;
pub mod spaces;

pub use dashboard::DashboardPage;
pub use leads::LeadsPage;
pub use locations::LocationsPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use settings::SettingsPage;
pub use space_editor::SpaceEditorPage;
pub use spaces::SpacesPage;
