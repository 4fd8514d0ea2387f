use payloads::requests::{ChangePassword, LoginCredentials};
use payloads::{ClientError, Role, TokenStore};
use reqwest::StatusCode;

use test_helpers::{admin_credentials, assert_status_code, spawn_app};

#[tokio::test]
async fn login_stores_session() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let session = app.login_admin().await?;
    assert_eq!(session.role, Role::SuperAdmin);
    assert_eq!(session.email, admin_credentials().email);

    assert_eq!(app.token_store.get_token(), Some(session.access_token));
    let user = app.token_store.current_user().expect("user is stored");
    assert_eq!(user.name, "Admin User");
    assert!(app.token_store.session().is_some());

    Ok(())
}

#[tokio::test]
async fn login_refused() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let body = LoginCredentials {
        email: admin_credentials().email,
        password: "not-the-password".into(),
    };
    let result = app.client.login(&body).await;

    match result {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert_eq!(text, "Invalid email or password");
        }
        _ => panic!("Expected APIError"),
    }

    // bad credentials are not an expired session
    assert_eq!(app.login_redirects(), 0);
    assert!(!app.token_store.has_token());

    Ok(())
}

#[tokio::test]
async fn malformed_login_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let body = LoginCredentials {
        email: "not-an-email".into(),
        password: "Admin@123".into(),
    };
    assert_status_code(app.client.login(&body).await, StatusCode::BAD_REQUEST);

    let body = LoginCredentials {
        email: admin_credentials().email,
        password: "short".into(),
    };
    assert_status_code(app.client.login(&body).await, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn requests_carry_bearer_token() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let session = app.login_admin().await?;

    app.client.list_locations().await?;

    let requests = app.requests_to("GET", "locations");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].bearer.as_deref(), Some(&*session.access_token));

    Ok(())
}

#[tokio::test]
async fn anonymous_requests_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let result = app.client.list_locations().await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));

    let requests = app.requests_to("GET", "locations");
    assert_eq!(requests[0].bearer, None);
    assert_eq!(app.login_redirects(), 1);

    Ok(())
}

#[tokio::test]
async fn expired_session_clears_credentials() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    assert!(app.token_store.has_token());

    app.expire_sessions()?;
    let result = app.client.dashboard_stats().await;

    assert!(matches!(result, Err(ClientError::Unauthorized)));
    assert!(!app.token_store.has_token());
    assert!(app.token_store.current_user().is_none());
    assert_eq!(app.login_redirects(), 1);

    // logging in again restores access
    app.login_admin().await?;
    app.client.dashboard_stats().await?;
    assert_eq!(app.login_redirects(), 1);

    Ok(())
}

#[tokio::test]
async fn logout_invalidates_token() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let session = app.login_admin().await?;

    app.client.logout().await?;
    assert!(!app.token_store.has_token());
    assert!(app.store.session_user(&session.access_token).is_none());

    Ok(())
}

#[tokio::test]
async fn logout_without_session_still_clears_store() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;
    app.expire_sessions()?;

    let result = app.client.logout().await;
    assert!(result.is_err());
    assert!(!app.token_store.has_token());

    Ok(())
}

#[tokio::test]
async fn change_password() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.login_admin().await?;

    let body = ChangePassword {
        current_password: "Wrong@123".into(),
        new_password: "Better@456".into(),
    };
    let result = app.client.change_password(&body).await;
    match result {
        Err(ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(text, "Current password is incorrect");
        }
        _ => panic!("Expected APIError"),
    }

    let body = ChangePassword {
        current_password: admin_credentials().password,
        new_password: "weakpassword".into(),
    };
    assert_status_code(
        app.client.change_password(&body).await,
        StatusCode::BAD_REQUEST,
    );

    let body = ChangePassword {
        current_password: admin_credentials().password,
        new_password: "Better@456".into(),
    };
    app.client.change_password(&body).await?;

    // the old password no longer works
    assert_status_code(
        app.client.login(&admin_credentials()).await,
        StatusCode::UNAUTHORIZED,
    );
    let body = LoginCredentials {
        password: "Better@456".into(),
        ..admin_credentials()
    };
    app.client.login(&body).await?;

    Ok(())
}
