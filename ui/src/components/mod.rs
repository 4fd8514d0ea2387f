pub mod confirmation_modal;
pub mod error_panel;
pub mod form_field;
pub mod layout;
pub mod lead_detail_modal;
pub mod login_form;
pub mod modal;
pub mod pagination_controls;
pub mod require_auth;
pub mod space_form;
pub mod stat_card;
pub mod status_badge;
pub mod toast_stack;

pub use confirmation_modal::ConfirmationModal;
pub use error_panel::{EmptyState, ErrorPanel, Spinner};
pub use form_field::{SelectField, TextAreaField, TextField};
pub use lead_detail_modal::LeadDetailModal;
pub use login_form::LoginForm;
pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use require_auth::RequireAuth;
pub use space_form::{EditorState, FormAction, SpaceFormView};
pub use stat_card::StatCard;
pub use status_badge::{
    ActiveBadge, LeadStatusBadge, SpaceStatusBadge, lead_status_select_class,
};
pub use toast_stack::ToastStack;
