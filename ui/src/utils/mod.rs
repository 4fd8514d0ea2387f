pub mod download;
pub mod format;

/// True when the UI talks to a local API, which is when the seeded
/// development credentials are worth showing.
pub fn is_dev_mode() -> bool {
    let url = crate::backend_url();
    url.contains("localhost") || url.contains("127.0.0.1")
}

pub fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
