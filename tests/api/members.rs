use fake::{faker::name::en::Name, Fake};
use test_context::test_context;

use crate::helpers::TestApp;

#[test_context(TestApp)]
#[tokio::test]
async fn should_add_member_through_gate_and_form(app: &mut TestApp) {
    app.unlock("members", "/members/request-create").await;

    let name: String = Name().fake();
    let html = app
        .post_form(
            "/members/form",
            &[
                ("name", name.as_str()),
                ("code", "G4-01"),
                ("email", "member@example.com"),
                ("github", "https://github.com/member"),
                ("photo_url", ""),
            ],
        )
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains("Member added successfully"));
    assert!(html.contains("ID: G4-01"));
    assert!(html.contains("GitHub Profile"));
    assert!(!html.contains("Add New Member"), "form should be closed");

    let members = app.members().await;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].fields.name, name);
    assert_eq!(members[0].fields.photo_url, None);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_form_open_when_required_fields_are_empty(app: &mut TestApp) {
    app.unlock("members", "/members/request-create").await;

    let html = app
        .post_form(
            "/members/form",
            &[
                ("name", ""),
                ("code", "G4-01"),
                ("email", "member@example.com"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains("Name is required"));
    assert!(html.contains("Add New Member"));
    assert!(html.contains(r#"value="G4-01""#), "draft not kept");
    assert!(app.members().await.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_edit_member_with_prefilled_form(app: &mut TestApp) {
    let member = app.seed_member("Ana Li", "G4-07").await;

    let html = app
        .unlock("members", &format!("/members/{}/request-edit", member.id))
        .await;
    assert!(html.contains("Edit Member"));
    assert!(html.contains(r#"value="Ana Li""#));
    assert!(html.contains("Update"));

    let html = app
        .post_form(
            "/members/form",
            &[
                ("name", "Ana Lima"),
                ("code", "G4-07"),
                ("email", "ana@example.com"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains("Member updated successfully"));
    assert!(html.contains("Ana Lima"));

    let members = app.members().await;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, member.id);
    assert_eq!(members[0].fields.name, "Ana Lima");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_delete_member_after_correct_password(app: &mut TestApp) {
    let member = app.seed_member("Ana Li", "G4-07").await;
    app.seed_member("Ben Ode", "G4-08").await;

    let html = app
        .unlock("members", &format!("/members/{}/request-delete", member.id))
        .await;

    assert!(html.contains("Member deleted successfully"));
    assert!(!html.contains("Ana Li"));
    assert!(html.contains("Ben Ode"));
    assert_eq!(app.members().await.len(), 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_delete_member_with_wrong_password(app: &mut TestApp) {
    let member = app.seed_member("Ana Li", "G4-07").await;
    app.post(&format!("/members/{}/request-delete", member.id)).await;

    let html = app.post_gate("members", "9999").await.text().await.unwrap();

    assert!(html.contains("Access Denied"));
    assert!(html.contains("Ana Li"));
    assert_eq!(app.members().await.len(), 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_member(app: &mut TestApp) {
    app.get_index().await;

    let response = app.post("/members/999/request-edit").await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.post("/members/999/request-delete").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_ignore_form_submission_without_open_form(app: &mut TestApp) {
    let html = app
        .post_form(
            "/members/form",
            &[
                ("name", "Sneaky"),
                ("code", "G4-99"),
                ("email", "sneaky@example.com"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();

    assert!(!html.contains("added successfully"));
    assert!(app.members().await.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_discard_draft_when_form_is_cancelled(app: &mut TestApp) {
    app.unlock("members", "/members/request-create").await;

    let html = app.post("/members/form/close").await.text().await.unwrap();

    assert!(!html.contains("Add New Member"));
    assert!(app.members().await.is_empty());
}
