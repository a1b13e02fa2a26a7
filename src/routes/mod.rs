use axum::{routing::post, Router};

use crate::app_state::AppState;

mod actions;
mod index;
mod section;

pub use actions::*;
pub use index::*;
pub use section::*;

/// The gated actions of one section, to be nested under `/<resource>`.
pub fn section_routes<S: PageSection>() -> Router<AppState> {
    Router::new()
        .route("/request-create", post(request_create::<S>))
        .route("/:id/request-edit", post(request_edit::<S>))
        .route("/:id/request-delete", post(request_delete::<S>))
        .route("/gate", post(submit_gate::<S>))
        .route("/gate/close", post(close_gate::<S>))
        .route("/form", post(submit_form::<S>))
        .route("/form/close", post(close_form::<S>))
        .route("/refresh", post(refresh::<S>))
}
