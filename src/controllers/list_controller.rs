use secrecy::Secret;

use super::{Form, Gate, GateOutcome, PendingAction};
use crate::domain::{Entity, Notifier, RecordId, RecordStoreType, Toast};

/// One listing on the page: the records, the gate in front of every write,
/// the action waiting behind the gate and the open form, if any.
#[derive(Debug)]
pub struct ListController<E: Entity> {
    items: Vec<E>,
    loading: bool,
    gate: Gate,
    pending: PendingAction<E>,
    form: Option<Form<E>>,
}

impl<E: Entity> Default for ListController<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            gate: Gate::default(),
            pending: PendingAction::None,
            form: None,
        }
    }
}

impl<E: Entity> ListController<E> {
    /// Creates the controller and performs its initial read.
    pub async fn load(
        store: &RecordStoreType<E>,
        notifier: &mut impl Notifier,
    ) -> Self {
        let mut controller = Self::default();
        controller.refresh(store, notifier).await;
        controller
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn item(&self, id: RecordId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    pub fn pending(&self) -> &PendingAction<E> {
        &self.pending
    }

    pub fn form(&self) -> Option<&Form<E>> {
        self.form.as_ref()
    }

    /// True while the gate prompt or the form is showing.
    pub fn has_open_dialog(&self) -> bool {
        self.gate.is_open() || self.form.is_some()
    }

    /// Re-reads the table. A failed read keeps the previous items.
    #[tracing::instrument(name = "Refreshing list", skip_all, fields(resource = E::RESOURCE))]
    pub async fn refresh(
        &mut self,
        store: &RecordStoreType<E>,
        notifier: &mut impl Notifier,
    ) {
        let result = store.read().await.list().await;
        match result {
            Ok(items) => self.items = items,
            Err(e) => {
                tracing::error!(error = ?e, "failed to fetch {}", E::PLURAL);
                notifier.notify(Toast::error(format!(
                    "Failed to fetch {}",
                    E::PLURAL
                )));
            }
        }
        self.loading = false;
    }

    pub fn request_create(&mut self) {
        self.arm(PendingAction::OpenCreateForm);
    }

    pub fn request_edit(&mut self, item: E) {
        self.arm(PendingAction::OpenEditForm(item));
    }

    pub fn request_delete(&mut self, item: E) {
        self.arm(PendingAction::Delete(item));
    }

    fn arm(&mut self, action: PendingAction<E>) {
        self.pending.arm(action);
        self.gate.open();
    }

    /// Hands the passcode to the gate and, once accepted, fires the pending
    /// action.
    pub async fn submit_gate(
        &mut self,
        input: Secret<String>,
        store: &RecordStoreType<E>,
        notifier: &mut impl Notifier,
    ) -> GateOutcome {
        let outcome = self.gate.submit(input, notifier);
        if outcome == GateOutcome::Accepted {
            self.fire(store, notifier).await;
        }
        outcome
    }

    pub fn close_gate(&mut self) {
        self.gate.close();
        self.pending = PendingAction::None;
    }

    async fn fire(
        &mut self,
        store: &RecordStoreType<E>,
        notifier: &mut impl Notifier,
    ) {
        match self.pending.take() {
            PendingAction::None => {}
            PendingAction::OpenCreateForm => self.form = Some(Form::create()),
            PendingAction::OpenEditForm(item) => {
                self.form = Some(Form::edit(&item))
            }
            PendingAction::Delete(item) => {
                self.delete(item.id(), store, notifier).await
            }
        }
    }

    #[tracing::instrument(name = "Deleting record", skip(self, store, notifier), fields(resource = E::RESOURCE))]
    async fn delete(
        &mut self,
        id: RecordId,
        store: &RecordStoreType<E>,
        notifier: &mut impl Notifier,
    ) {
        let result = store.write().await.delete(id).await;
        match result {
            Ok(items) => {
                notifier.notify(Toast::success(format!(
                    "{} deleted successfully",
                    E::title()
                )));
                self.items = items;
            }
            Err(e) => {
                tracing::error!(error = ?e, "failed to delete {}", E::SINGULAR);
                notifier.notify(Toast::error(format!(
                    "Failed to delete {}",
                    E::SINGULAR
                )));
            }
        }
    }

    /// Replaces the open form's draft with the submitted values and writes
    /// it. Returns whether the write succeeded.
    pub async fn submit_form(
        &mut self,
        draft: E::Draft,
        store: &RecordStoreType<E>,
        notifier: &mut impl Notifier,
    ) -> bool {
        let Some(form) = self.form.as_mut() else {
            tracing::debug!("form submitted while no {} form was open", E::SINGULAR);
            return false;
        };

        form.set_draft(draft);
        match form.submit(store, notifier).await {
            Ok(items) => {
                self.on_form_submitted(items);
                true
            }
            Err(_) => false,
        }
    }

    pub fn on_form_submitted(&mut self, items: Vec<E>) {
        self.form = None;
        self.items = items;
        self.loading = false;
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }
}
