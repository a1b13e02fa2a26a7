use study_group::utils::constants::GATE_PASSCODE;
use test_context::test_context;

use crate::helpers::TestApp;

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_dialogs_private_to_each_browser(app: &mut TestApp) {
    app.unlock("members", "/members/request-create").await;

    let other = app.other_browser();
    let html = other
        .get(format!("{}/", &app.address))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(!html.contains("Add New Member"));
    assert!(!html.contains("Access Granted"));
    assert_eq!(app.sessions.len().await, 2);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_show_own_writes_immediately(app: &mut TestApp) {
    let other = app.other_browser();
    other
        .get(format!("{}/", &app.address))
        .send()
        .await
        .unwrap();

    app.unlock("members", "/members/request-create").await;
    app.post_form(
        "/members/form",
        &[
            ("name", "Ana Li"),
            ("code", "G4-07"),
            ("email", "ana@example.com"),
        ],
    )
    .await;

    let html = app.get_page_html().await;
    assert!(html.contains("Ana Li"));

    let html = other
        .post(format!("{}/members/refresh", &app.address))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Ana Li"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_share_unlocked_gate_between_browsers(app: &mut TestApp) {
    app.post("/members/request-create").await;

    let other = app.other_browser();
    let html = other
        .post(format!("{}/members/gate", &app.address))
        .form(&[("password", GATE_PASSCODE)])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(!html.contains("Add New Member"));
    assert!(!html.contains("Access Granted"));
}
