use payloads::LeadStatus;
use payloads::responses::{DashboardStats, LabelCount};
use rust_decimal::Decimal;

use test_helpers::spawn_app;

#[tokio::test]
async fn empty_dashboard() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;

    let stats = app.client.dashboard_stats().await?;
    assert_eq!(stats, DashboardStats::default());

    Ok(())
}

#[tokio::test]
async fn dashboard_combines_seeded_and_derived_figures() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    app.store.set_dashboard(DashboardStats {
        total_revenue: Decimal::from(420_000),
        revenue_change: 12.5,
        active_bookings: 156,
        total_spaces: 999,
        ..DashboardStats::default()
    })?;

    let kochi = app.create_test_location("Kochi").await?;
    app.create_test_space(&kochi.id).await?;
    app.create_test_space(&kochi.id).await?;
    app.insert_test_lead("LD-001", "Asha", LeadStatus::New)?;

    let stats = app.client.dashboard_stats().await?;
    assert_eq!(stats.total_revenue, Decimal::from(420_000));
    assert_eq!(stats.revenue_change, 12.5);
    assert_eq!(stats.active_bookings, 156);
    // counts come from the stored records, not the seed
    assert_eq!(stats.total_spaces, 2);
    assert_eq!(
        stats.spaces_by_type,
        vec![LabelCount {
            label: "Coworking Space".into(),
            count: 2
        }]
    );
    assert_eq!(stats.bookings_by_city[0].label, "Kochi");

    Ok(())
}
