use payloads::requests::ListQuery;
use payloads::space_form::{FormStep, SpaceField, SpaceForm, Submission};
use payloads::{ClientError, SpaceDetails, SpaceStatus, SpaceType};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, space_details_a, spawn_app};

#[tokio::test]
async fn space_lifecycle() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    let kochi = app.create_test_location("Kochi").await?;

    let space = app.create_test_space(&kochi.id).await?;
    assert_eq!(space.space_name, "WorkHub Kochi");
    assert_eq!(space.space_id.as_deref(), Some("SP-0001"));
    assert_eq!(space.city, kochi.id);

    let fetched = app.client.get_space(&space.id).await?;
    assert_eq!(fetched, space);

    let details = SpaceDetails {
        space_name: "WorkHub Kochi Marine Drive".into(),
        status: SpaceStatus::Inactive,
        ..space.details.clone()
    };
    let updated = app.client.update_space(&space.id, &details).await?;
    assert_eq!(updated.space_name, "WorkHub Kochi Marine Drive");
    assert_eq!(updated.status, SpaceStatus::Inactive);
    assert_eq!(updated.space_id, space.space_id);

    app.client.delete_space(&space.id).await?;
    assert_status_code(
        app.client.get_space(&space.id).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.delete_space(&space.id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn space_requires_known_city() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;

    let result = app
        .client
        .create_space(&space_details_a(&"nowhere".into()))
        .await;
    match result {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(text, "Please select a valid city");
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn list_query_is_sent_verbatim() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;

    let query = ListQuery::default()
        .with_status("active")
        .with_search("  hub ")
        .with_space_type("coworking-space")
        .with_page(3);
    app.client.list_spaces(&query).await?;

    let requests = app.requests_to("GET", "spaces");
    assert_eq!(requests.len(), 1);
    let pairs = requests[0].query_pairs();
    let expected = [
        ("page", "3"),
        ("limit", "10"),
        ("status", "active"),
        ("search", "hub"),
        ("spaceType", "coworking-space"),
    ];
    assert_eq!(
        pairs,
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
    );

    // empty filters are left out
    app.store.clear_requests();
    app.client
        .list_spaces(&ListQuery::default().with_status(""))
        .await?;
    let pairs = app.requests_to("GET", "spaces")[0].query_pairs();
    assert_eq!(pairs.len(), 2);

    Ok(())
}

#[tokio::test]
async fn list_spaces_filters_and_paginates() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    let kochi = app.create_test_location("Kochi").await?;
    let pune = app.create_test_location("Pune").await?;

    for i in 0..12 {
        let details = SpaceDetails {
            space_name: format!("Kochi Desk {i:02}"),
            ..space_details_a(&kochi.id)
        };
        app.client.create_space(&details).await?;
    }
    let details = SpaceDetails {
        space_name: "Riverside Offices".into(),
        space_type: SpaceType::PrivateOffice,
        status: SpaceStatus::Pending,
        ..space_details_a(&pune.id)
    };
    let riverside = app.client.create_space(&details).await?;

    let page = app.client.list_spaces(&ListQuery::default()).await?;
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.pagination.total, 13);
    assert_eq!(page.pagination.total_pages, 2);
    assert!(page.pagination.has_next());

    let page = app
        .client
        .list_spaces(&ListQuery::default().with_page(2))
        .await?;
    assert_eq!(page.items.len(), 3);
    assert!(!page.pagination.has_next());

    let pending = app
        .client
        .list_spaces(&ListQuery::default().with_status("pending"))
        .await?;
    assert_eq!(pending.items, vec![riverside.clone()]);

    let private = app
        .client
        .list_spaces(&ListQuery::default().with_space_type("private-office"))
        .await?;
    assert_eq!(private.pagination.total, 1);

    // search matches the city name as well as the space name
    let in_pune = app
        .client
        .list_spaces(&ListQuery::default().with_search("pUNE"))
        .await?;
    assert_eq!(in_pune.items, vec![riverside.clone()]);

    let by_id = app
        .client
        .list_spaces(&ListQuery::default().with_search("SP-0013"))
        .await?;
    assert_eq!(by_id.items, vec![riverside]);

    let by_city = app
        .client
        .list_spaces(&ListQuery::default().with_city(&kochi.id.0))
        .await?;
    assert_eq!(by_city.pagination.total, 12);

    Ok(())
}

#[tokio::test]
async fn space_form_creates_then_updates() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    let kochi = app.create_test_location("Kochi").await?;

    let mut form = SpaceForm::new();
    form.set_text(SpaceField::SpaceName, "Harbour Works".into());
    form.set_text(SpaceField::SpaceType, "coworking-space".into());
    form.set_text(SpaceField::City, kochi.id.to_string());
    form.set_text(SpaceField::SpaceCategory, "standard".into());
    form.set_text(
        SpaceField::ShortDescription,
        "Sea-facing desks in Fort Kochi".into(),
    );
    form.set_text(
        SpaceField::LongDescription,
        "Quiet coworking in a restored warehouse with fibre internet, \
         phone booths and a rooftop terrace."
            .into(),
    );
    form.toggle_amenity("WiFi");
    form.set_text(SpaceField::HotDesk, "4500".into());
    form.set_text(SpaceField::TotalCapacity, "30".into());
    form.add_image("https://images.example.com/harbour.jpg");
    form.set_text(SpaceField::Address, "3 Beach Road, Fort Kochi".into());
    form.set_text(SpaceField::Pincode, "682001".into());
    form.set_text(SpaceField::ContactName, "Anil".into());
    form.set_text(SpaceField::ContactEmail, "anil@harbour.test".into());
    form.set_text(SpaceField::ContactPhone, "9876501234".into());

    assert_eq!(form.go_to(FormStep::Additional), FormStep::Additional);
    let submission = form.submit()?;
    assert!(matches!(submission, Submission::Create(_)));

    let created = app.client.submit_space(&submission).await?;
    form.submit_succeeded();
    assert_eq!(created.space_name, "Harbour Works");
    assert_eq!(created.status, SpaceStatus::Pending);

    let mut form = SpaceForm::edit(&created);
    form.set_text(SpaceField::Status, "active".into());
    form.go_to(FormStep::Additional);
    let submission = form.submit()?;
    let Submission::Update(id, _) = &submission else {
        panic!("Expected an update");
    };
    assert_eq!(id, &created.id);

    let updated = app.client.submit_space(&submission).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status, SpaceStatus::Active);
    let path = format!("spaces/{}", created.id);
    assert_eq!(app.requests_to("PUT", &path).len(), 1);

    Ok(())
}
