mod admin_layout;
mod page_header;
mod sidebar;

pub use admin_layout::AdminLayout;
pub use page_header::PageHeader;
pub use sidebar::Sidebar;
