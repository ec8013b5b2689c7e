//! Session and user-store tests: exact-match login, no-detail failures, and
//! immediate propagation of edits to the active session's user.

mod common;

use common::TestApp;
use wms_core::models::UserRole;
use wms_core::services::users::CreateUserRequest;
use wms_core::ServiceError;

#[tokio::test]
async fn login_requires_exact_username_and_password() {
    let app = TestApp::new();

    let user = app.services.login("admin", "123").unwrap();
    assert_eq!(user.role, UserRole::SuperAdmin);
    assert!(app.services.auth.session().is_active());

    app.services.logout();
    assert!(!app.services.auth.session().is_active());

    for (username, password) in [("admin", "wrong"), ("nobody", "123"), ("Admin", "123")] {
        let result = app.services.auth.login(username, password);
        assert!(matches!(result, Err(ServiceError::AuthenticationFailed)));
        assert!(!app.services.auth.session().is_active());
    }
}

#[tokio::test]
async fn editing_the_active_user_refreshes_the_session_immediately() {
    let app = TestApp::new();
    let mut user = app.services.login("admin", "123").unwrap();

    user.name = "Operations Lead".to_string();
    user.role = UserRole::Admin;
    app.services.users.update_user(user).await.unwrap();

    // No re-login needed: the session copy already reflects the edit.
    let session_user = app.services.auth.session().current_user().unwrap();
    assert_eq!(session_user.name, "Operations Lead");
    assert_eq!(session_user.role, UserRole::Admin);
}

#[tokio::test]
async fn editing_another_user_leaves_the_session_alone() {
    let app = TestApp::new();
    app.services.login("admin", "123").unwrap();

    let staff = app
        .services
        .users
        .add_user(CreateUserRequest {
            name: "Ravi Kumar".to_string(),
            role: UserRole::Staff,
            username: "ravi".to_string(),
            password: "pass".to_string(),
            email: None,
            phone: None,
        })
        .await
        .unwrap();

    let mut edited = staff.clone();
    edited.role = UserRole::WarehouseManager;
    app.services.users.update_user(edited).await.unwrap();

    let session_user = app.services.auth.session().current_user().unwrap();
    assert_eq!(session_user.id, "u1");
    assert_eq!(session_user.role, UserRole::SuperAdmin);
}

#[tokio::test]
async fn added_users_can_log_in_and_duplicates_are_rejected() {
    let app = TestApp::new();

    app.services
        .users
        .add_user(CreateUserRequest {
            name: "Neha Kapoor".to_string(),
            role: UserRole::InventoryExecutive,
            username: "neha".to_string(),
            password: "secret".to_string(),
            email: Some("neha@example.com".to_string()),
            phone: None,
        })
        .await
        .unwrap();

    let user = app.services.login("neha", "secret").unwrap();
    assert_eq!(user.role, UserRole::InventoryExecutive);

    let duplicate = app
        .services
        .users
        .add_user(CreateUserRequest {
            name: "Other Neha".to_string(),
            role: UserRole::Staff,
            username: "neha".to_string(),
            password: "x".to_string(),
            email: None,
            phone: None,
        })
        .await;
    assert!(matches!(duplicate, Err(ServiceError::InvalidOperation(_))));
}

#[tokio::test]
async fn deleting_a_user_removes_the_record() {
    let app = TestApp::new();

    let staff = app
        .services
        .users
        .add_user(CreateUserRequest {
            name: "Temp Staff".to_string(),
            role: UserRole::Staff,
            username: "temp".to_string(),
            password: "t".to_string(),
            email: None,
            phone: None,
        })
        .await
        .unwrap();

    app.services.users.delete_user(&staff.id).unwrap();
    assert!(app.services.state.users().iter().all(|u| u.id != staff.id));
    assert!(matches!(
        app.services.users.delete_user(&staff.id),
        Err(ServiceError::NotFound(_))
    ));
}
