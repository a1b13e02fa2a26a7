use crate::domain::Entity;

/// The one action waiting for the gate to accept.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction<E: Entity> {
    None,
    OpenCreateForm,
    OpenEditForm(E),
    Delete(E),
}

impl<E: Entity> Default for PendingAction<E> {
    fn default() -> Self {
        PendingAction::None
    }
}

impl<E: Entity> PendingAction<E> {
    /// Replaces whatever was armed before.
    pub fn arm(&mut self, action: PendingAction<E>) {
        *self = action;
    }

    /// Consumes the armed action, leaving `None` behind.
    pub fn take(&mut self) -> PendingAction<E> {
        std::mem::replace(self, PendingAction::None)
    }

    pub fn is_armed(&self) -> bool {
        !matches!(self, PendingAction::None)
    }
}
