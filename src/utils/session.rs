use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    app_state::AppState,
    controllers::StudyGroupPage,
    domain::SessionId,
    services::session_store::PageHandle,
};

use super::constants::SESSION_COOKIE_NAME;

/// Whether the request continued an existing page session or started one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Both lists were just read from the stores.
    Started,
    Resumed,
}

/// Finds the caller's page session, or starts a new one (loading both lists)
/// and adds its cookie to the returned jar.
pub async fn get_page(jar: CookieJar, state: &AppState) -> (CookieJar, PageHandle) {
    let (jar, page, _) = resolve_page(jar, state).await;
    (jar, page)
}

#[tracing::instrument(name = "Resolving page session", skip_all)]
pub async fn resolve_page(
    jar: CookieJar,
    state: &AppState,
) -> (CookieJar, PageHandle, SessionStatus) {
    if let Some(id) = session_id_from(&jar) {
        if let Some(page) = state.sessions.get(&id).await {
            return (jar, page, SessionStatus::Resumed);
        }
        tracing::debug!("session cookie did not match a live session");
    }

    state.sessions.evict_idle().await;

    let id = SessionId::default();
    let page =
        StudyGroupPage::load(&state.member_store, &state.assignment_store)
            .await;
    let page = state.sessions.insert(id, page).await;

    (jar.add(create_session_cookie(&id)), page, SessionStatus::Started)
}

fn session_id_from(jar: &CookieJar) -> Option<SessionId> {
    let cookie = jar.get(SESSION_COOKIE_NAME)?;
    SessionId::parse(cookie.value())
        .map_err(|e| tracing::debug!("ignoring session cookie: {e}"))
        .ok()
}

fn create_session_cookie(id: &SessionId) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, id.as_ref().to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
