use payloads::ClientError;
use payloads::requests::CreateLocation;
use reqwest::StatusCode;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn create_and_list_locations() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;

    app.create_test_location("Pune").await?;
    let kochi = app.create_test_location("Kochi").await?;
    assert!(kochi.is_active);

    let names: Vec<String> = app
        .client
        .list_locations()
        .await?
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, ["Kochi", "Pune"]);

    Ok(())
}

#[tokio::test]
async fn location_names_are_validated() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    app.create_test_location("Kochi").await?;

    let body = CreateLocation {
        name: "K".into(),
        is_active: true,
        image: None,
        description: None,
    };
    assert_status_code(
        app.client.create_location(&body).await,
        StatusCode::BAD_REQUEST,
    );

    let body = CreateLocation {
        name: " KOCHI ".into(),
        ..body
    };
    match app.client.create_location(&body).await {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(text, "A location named KOCHI already exists");
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn delete_location() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    let kochi = app.create_test_location("Kochi").await?;
    let pune = app.create_test_location("Pune").await?;
    let space = app.create_test_space(&kochi.id).await?;

    // still referenced by a space
    match app.client.delete_location(&kochi.id).await {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(text, "Location is still used by 1 space(s)");
        }
        _ => panic!("Expected APIError"),
    }

    app.client.delete_location(&pune.id).await?;
    app.client.delete_space(&space.id).await?;
    app.client.delete_location(&kochi.id).await?;
    assert!(app.client.list_locations().await?.is_empty());

    assert_status_code(
        app.client.delete_location(&kochi.id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
