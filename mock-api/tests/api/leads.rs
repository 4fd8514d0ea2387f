use payloads::export::{LEAD_CSV_HEADER, leads_csv};
use payloads::requests::ListQuery;
use payloads::{LeadId, LeadStatus};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn list_and_filter_leads() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    app.insert_test_lead("LD-001", "Asha", LeadStatus::New)?;
    app.insert_test_lead("LD-002", "Ravi", LeadStatus::Contacted)?;
    app.insert_test_lead("LD-003", "Neha", LeadStatus::New)?;

    let page = app.client.list_leads(&ListQuery::default()).await?;
    assert_eq!(page.pagination.total, 3);

    let new = app
        .client
        .list_leads(&ListQuery::default().with_status("new"))
        .await?;
    let mut names: Vec<_> = new.items.iter().map(|l| l.name.as_str()).collect();
    names.sort();
    assert_eq!(names, ["Asha", "Neha"]);

    let found = app
        .client
        .list_leads(&ListQuery::default().with_search("ld-002"))
        .await?;
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].name, "Ravi");

    Ok(())
}

#[tokio::test]
async fn lead_stats_follow_status_changes() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    let asha = app.insert_test_lead("LD-001", "Asha", LeadStatus::New)?;
    app.insert_test_lead("LD-002", "Ravi", LeadStatus::Lost)?;

    let stats = app.client.lead_stats().await?;
    assert_eq!((stats.total, stats.new, stats.lost), (2, 1, 1));

    let updated = app
        .client
        .update_lead_status(&asha.id, LeadStatus::Qualified)
        .await?;
    assert_eq!(updated.status, LeadStatus::Qualified);
    assert_eq!(updated.lead_id, "LD-001");

    let stats = app.client.lead_stats().await?;
    assert_eq!((stats.new, stats.qualified), (0, 1));

    let requests =
        app.requests_to("PATCH", &format!("leads/{}/status", asha.id));
    assert_eq!(requests.len(), 1);

    Ok(())
}

#[tokio::test]
async fn unknown_lead_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    let missing = LeadId::from("missing");

    assert_status_code(
        app.client
            .update_lead_status(&missing, LeadStatus::Converted)
            .await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.delete_lead(&missing).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn delete_lead() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    let lead = app.insert_test_lead("LD-001", "Asha", LeadStatus::New)?;

    app.client.delete_lead(&lead.id).await?;

    let page = app.client.list_leads(&ListQuery::default()).await?;
    assert!(page.items.is_empty());
    assert_eq!(app.client.lead_stats().await?.total, 0);

    Ok(())
}

#[tokio::test]
async fn export_listed_leads() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    app.insert_test_lead("LD-001", "Asha", LeadStatus::New)?;
    app.insert_test_lead("LD-002", "Ravi", LeadStatus::Converted)?;

    let page = app.client.list_leads(&ListQuery::default()).await?;
    let csv = leads_csv(&page.items)?;
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        LEAD_CSV_HEADER
            .iter()
            .map(|h| format!("\"{h}\""))
            .collect::<Vec<_>>()
            .join(",")
    );
    assert!(csv.contains("\"LD-002\",\"Ravi\",\"ravi@example.com\""));
    assert!(csv.contains("\"2025-01-15\",\"converted\""));

    Ok(())
}
