use crate::{
    domain::{Assignment, Member, RecordStoreType},
    services::session_store::SessionStore,
};

pub type MemberStoreType = RecordStoreType<Member>;
pub type AssignmentStoreType = RecordStoreType<Assignment>;

#[derive(Clone)]
pub struct AppState {
    pub member_store: MemberStoreType,
    pub assignment_store: AssignmentStoreType,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        member_store: MemberStoreType,
        assignment_store: AssignmentStoreType,
        sessions: SessionStore,
    ) -> Self {
        Self {
            member_store,
            assignment_store,
            sessions,
        }
    }
}
