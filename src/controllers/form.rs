use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::{
    Draft, Entity, Notifier, RecordId, RecordStoreError, RecordStoreType,
    Toast,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Form is already being submitted")]
    AlreadySubmitting,
    #[error("Validation error")]
    Validation(#[from] ValidationErrors),
    #[error("Store operation failed")]
    StoreOperationFailed(#[source] RecordStoreError),
}

/// Create-or-update dialog for one record.
#[derive(Debug)]
pub struct Form<E: Entity> {
    mode: FormMode,
    draft: E::Draft,
    /// Set while the store write is in flight. Within a session the page
    /// lock already serializes submits, so this only stays set when the
    /// request is dropped mid-write. The form then refuses to resubmit until
    /// it is dismissed.
    submitting: bool,
}

impl<E: Entity> Form<E> {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: E::Draft::default(),
            submitting: false,
        }
    }

    pub fn edit(item: &E) -> Self {
        Self {
            mode: FormMode::Edit(item.id()),
            draft: E::Draft::from_entity(item),
            submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &E::Draft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: E::Draft) {
        self.draft = draft;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Writes the draft and returns the fresh collection. On any failure
    /// the draft is left as it was so the user can retry.
    #[tracing::instrument(name = "Submitting form", skip_all, fields(resource = E::RESOURCE, mode = ?self.mode))]
    pub async fn submit(
        &mut self,
        store: &RecordStoreType<E>,
        notifier: &mut impl Notifier,
    ) -> Result<Vec<E>, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }

        if let Err(errors) = self.draft.validate() {
            notifier.notify(Toast::error(validation_message::<E>(&errors)));
            return Err(errors.into());
        }

        self.submitting = true;
        let fields = self.draft.to_fields();
        let result = match self.mode {
            FormMode::Create => store.write().await.insert(&fields).await,
            FormMode::Edit(id) => store.write().await.update(id, &fields).await,
        };
        self.submitting = false;

        let (verb, past) = match self.mode {
            FormMode::Create => ("add", "added"),
            FormMode::Edit(_) => ("update", "updated"),
        };

        match result {
            Ok(items) => {
                notifier.notify(Toast::success(format!(
                    "{} {past} successfully",
                    E::title()
                )));
                Ok(items)
            }
            Err(e) => {
                tracing::error!(error = ?e, "failed to {verb} {}", E::SINGULAR);
                notifier.notify(Toast::error(format!(
                    "Failed to {verb} {}",
                    E::SINGULAR
                )));
                Err(FormError::StoreOperationFailed(e))
            }
        }
    }
}

/// Messages of the failing fields, in form order.
fn validation_message<E: Entity>(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    E::FIELDS
        .iter()
        .filter_map(|field| field_errors.get(field.name))
        .filter_map(|errors| errors.first())
        .filter_map(|error| error.message.as_ref())
        .map(|message| message.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
