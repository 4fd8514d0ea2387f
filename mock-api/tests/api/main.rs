mod auth;
mod dashboard;
mod leads;
mod locations;
mod spaces;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    app.client.health_check().await?;

    Ok(())
}
