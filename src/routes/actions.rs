use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    domain::{Entity, RecordId, StudyGroupAPIError},
    utils::session::get_page,
};

use super::PageSection;

#[derive(Deserialize)]
pub struct GateRequest {
    pub password: Secret<String>,
}

fn back_to_page(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar, Redirect::to("/"))
}

#[tracing::instrument(name = "Request create route handler", skip_all, fields(resource = S::RESOURCE))]
pub async fn request_create<S: PageSection>(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let (jar, page) = get_page(jar, &state).await;
    let mut page = page.write().await;

    let (controller, _) = S::split(&mut page);
    controller.request_create();

    back_to_page(jar)
}

#[tracing::instrument(name = "Request edit route handler", skip(state, jar), fields(resource = S::RESOURCE))]
pub async fn request_edit<S: PageSection>(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<RecordId>,
) -> Result<(CookieJar, Redirect), StudyGroupAPIError> {
    let (jar, page) = get_page(jar, &state).await;
    let mut page = page.write().await;

    let (controller, _) = S::split(&mut page);
    let item = controller
        .item(id)
        .cloned()
        .ok_or(StudyGroupAPIError::RecordNotFound(id))?;
    controller.request_edit(item);

    Ok(back_to_page(jar))
}

#[tracing::instrument(name = "Request delete route handler", skip(state, jar), fields(resource = S::RESOURCE))]
pub async fn request_delete<S: PageSection>(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<RecordId>,
) -> Result<(CookieJar, Redirect), StudyGroupAPIError> {
    let (jar, page) = get_page(jar, &state).await;
    let mut page = page.write().await;

    let (controller, _) = S::split(&mut page);
    let item = controller
        .item(id)
        .cloned()
        .ok_or(StudyGroupAPIError::RecordNotFound(id))?;
    controller.request_delete(item);

    Ok(back_to_page(jar))
}

#[tracing::instrument(name = "Submit gate route handler", skip_all, fields(resource = S::RESOURCE))]
pub async fn submit_gate<S: PageSection>(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(request): Form<GateRequest>,
) -> (CookieJar, Redirect) {
    let (jar, page) = get_page(jar, &state).await;
    let mut page = page.write().await;

    let (controller, toasts) = S::split(&mut page);
    let outcome = controller
        .submit_gate(request.password, S::store(&state), toasts)
        .await;
    tracing::debug!(?outcome, "gate submitted");

    back_to_page(jar)
}

#[tracing::instrument(name = "Close gate route handler", skip_all, fields(resource = S::RESOURCE))]
pub async fn close_gate<S: PageSection>(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let (jar, page) = get_page(jar, &state).await;
    let mut page = page.write().await;

    let (controller, _) = S::split(&mut page);
    controller.close_gate();

    back_to_page(jar)
}

#[tracing::instrument(name = "Submit form route handler", skip_all, fields(resource = S::RESOURCE))]
pub async fn submit_form<S: PageSection>(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(draft): Form<<S as Entity>::Draft>,
) -> (CookieJar, Redirect) {
    let (jar, page) = get_page(jar, &state).await;
    let mut page = page.write().await;

    let (controller, toasts) = S::split(&mut page);
    controller.submit_form(draft, S::store(&state), toasts).await;

    back_to_page(jar)
}

#[tracing::instrument(name = "Close form route handler", skip_all, fields(resource = S::RESOURCE))]
pub async fn close_form<S: PageSection>(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let (jar, page) = get_page(jar, &state).await;
    let mut page = page.write().await;

    let (controller, _) = S::split(&mut page);
    controller.close_form();

    back_to_page(jar)
}

/// Re-reads the section's table on demand.
#[tracing::instrument(name = "Refresh route handler", skip_all, fields(resource = S::RESOURCE))]
pub async fn refresh<S: PageSection>(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let (jar, page) = get_page(jar, &state).await;
    let mut page = page.write().await;

    let (controller, toasts) = S::split(&mut page);
    controller.refresh(S::store(&state), toasts).await;

    back_to_page(jar)
}
