use test_context::test_context;

use crate::helpers::TestApp;

#[test_context(TestApp)]
#[tokio::test]
async fn should_add_assignment_with_optional_fields(app: &mut TestApp) {
    let html = app.unlock("assignments", "/assignments/request-create").await;
    assert!(html.contains("Add New Assignment"));
    assert!(html.contains("Enter assignment description..."));

    let html = app
        .post_form(
            "/assignments/form",
            &[
                ("title", "Capstone"),
                ("description", "Build a CLI"),
                ("link", ""),
            ],
        )
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains("Assignment added successfully"));
    assert!(html.contains("Build a CLI"));
    assert!(!html.contains("View Assignment"));

    let assignments = app.assignments().await;
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].fields.link, None);
    assert!(html.contains(&format!("Assignment #{}", assignments[0].id)));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_require_title(app: &mut TestApp) {
    app.unlock("assignments", "/assignments/request-create").await;

    let html = app
        .post_form("/assignments/form", &[("title", ""), ("description", "x")])
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains("Title is required"));
    assert!(app.assignments().await.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_clear_optional_field_on_update(app: &mut TestApp) {
    let assignment = app.seed_assignment("Capstone").await;
    app.assignment_store
        .write()
        .await
        .update(
            assignment.id,
            &study_group::domain::AssignmentFields {
                title: "Capstone".to_owned(),
                description: None,
                link: Some("https://example.com/capstone".to_owned()),
            },
        )
        .await
        .unwrap();

    app.unlock(
        "assignments",
        &format!("/assignments/{}/request-edit", assignment.id),
    )
    .await;
    let html = app
        .post_form(
            "/assignments/form",
            &[("title", "Capstone"), ("description", ""), ("link", "")],
        )
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains("Assignment updated successfully"));
    assert_eq!(app.assignments().await[0].fields.link, None);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_delete_assignment(app: &mut TestApp) {
    let assignment = app.seed_assignment("Capstone").await;

    let html = app
        .unlock(
            "assignments",
            &format!("/assignments/{}/request-delete", assignment.id),
        )
        .await;

    assert!(html.contains("Assignment deleted successfully"));
    assert!(app.assignments().await.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_refetch_listings_on_reload(app: &mut TestApp) {
    let html = app.get_page_html().await;
    assert!(!html.contains("Capstone"));

    app.seed_assignment("Capstone").await;
    app.seed_member("Zoe Other", "G4-42").await;
    let html = app.get_page_html().await;

    assert!(html.contains("Capstone"));
    assert!(html.contains("Zoe Other"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_refetch_section_with_open_dialog(app: &mut TestApp) {
    app.get_index().await;
    app.post("/assignments/request-create").await;

    app.seed_assignment("Capstone").await;
    app.seed_member("Zoe Other", "G4-42").await;
    let html = app.get_page_html().await;

    assert!(html.contains("Password Required"));
    assert!(!html.contains("Capstone"), "listing behind dialog changed");
    assert!(html.contains("Zoe Other"));

    let html = app.post("/assignments/gate/close").await.text().await.unwrap();
    assert!(html.contains("Capstone"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_refresh_on_request_while_dialog_is_open(app: &mut TestApp) {
    app.get_index().await;
    app.post("/assignments/request-create").await;
    app.seed_assignment("Capstone").await;

    let html = app.post("/assignments/refresh").await.text().await.unwrap();

    assert!(html.contains("Capstone"));
    assert!(html.contains("Password Required"));
}
