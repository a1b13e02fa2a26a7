use askama::Template;
use axum::{extract::State, response::Html};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    app_state::AppState,
    controllers::StudyGroupPage,
    domain::{Assignment, Member, StudyGroupAPIError},
    utils::session::{resolve_page, SessionStatus},
};

use super::{section_view, PageSection, SectionView, ToastView};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub sections: Vec<SectionView>,
    pub toasts: Vec<ToastView>,
}

/// Renders the page for the caller's session. A returning browser gets both
/// lists re-read first, except where a dialog is open. Queued toasts are
/// shown once.
#[tracing::instrument(name = "Index route handler", skip_all)]
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), StudyGroupAPIError> {
    let (jar, page, status) = resolve_page(jar, &state).await;

    let template = {
        let mut page = page.write().await;
        if status == SessionStatus::Resumed {
            reload::<Member>(&mut page, &state).await;
            reload::<Assignment>(&mut page, &state).await;
        }
        IndexTemplate {
            sections: vec![
                section_view(Member::controller(&page)),
                section_view(Assignment::controller(&page)),
            ],
            toasts: page.toasts.drain().into_iter().map(ToastView::from).collect(),
        }
    };

    let html = template
        .render()
        .map_err(|e| StudyGroupAPIError::UnexpectedError(eyre!(e)))?;

    Ok((jar, Html(html)))
}

async fn reload<S: PageSection>(page: &mut StudyGroupPage, state: &AppState) {
    let (controller, toasts) = S::split(page);
    if controller.has_open_dialog() {
        return;
    }
    controller.refresh(S::store(state), toasts).await;
}
