use crate::domain::{Assignment, Member, RecordStoreType, ToastQueue};

use super::ListController;

/// Everything one browser sees: both listings in page order and the toasts
/// not yet shown.
#[derive(Debug)]
pub struct StudyGroupPage {
    pub members: ListController<Member>,
    pub assignments: ListController<Assignment>,
    pub toasts: ToastQueue,
}

impl StudyGroupPage {
    #[tracing::instrument(name = "Loading study group page", skip_all)]
    pub async fn load(
        member_store: &RecordStoreType<Member>,
        assignment_store: &RecordStoreType<Assignment>,
    ) -> Self {
        let mut toasts = ToastQueue::default();
        let members = ListController::load(member_store, &mut toasts).await;
        let assignments =
            ListController::load(assignment_store, &mut toasts).await;

        Self {
            members,
            assignments,
            toasts,
        }
    }
}
