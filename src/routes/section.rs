use secrecy::ExposeSecret;

use crate::{
    app_state::AppState,
    controllers::{FormMode, ListController, StudyGroupPage},
    domain::{
        Assignment, Draft, Entity, FieldKind, Member, RecordStoreType,
        Severity, Toast, ToastQueue,
    },
};

/// A listing rendered on the page, in page order: members, then
/// assignments.
pub trait PageSection: Entity {
    const HEADING: &'static str;

    fn controller(page: &StudyGroupPage) -> &ListController<Self>;
    /// The section's controller together with the page's toast queue.
    fn split(
        page: &mut StudyGroupPage,
    ) -> (&mut ListController<Self>, &mut ToastQueue);
    fn store(state: &AppState) -> &RecordStoreType<Self>;
    fn card(&self) -> CardView;
}

impl PageSection for Member {
    const HEADING: &'static str = "Group Members";

    fn controller(page: &StudyGroupPage) -> &ListController<Self> {
        &page.members
    }

    fn split(
        page: &mut StudyGroupPage,
    ) -> (&mut ListController<Self>, &mut ToastQueue) {
        (&mut page.members, &mut page.toasts)
    }

    fn store(state: &AppState) -> &RecordStoreType<Self> {
        &state.member_store
    }

    fn card(&self) -> CardView {
        let fields = &self.fields;
        let mut links = vec![LinkView {
            href: format!("mailto:{}", fields.email),
            label: fields.email.clone(),
            external: false,
        }];
        if let Some(github) = &fields.github {
            links.push(LinkView {
                href: github.clone(),
                label: "GitHub Profile".to_owned(),
                external: true,
            });
        }

        CardView {
            id: *self.id.as_ref(),
            title: fields.name.clone(),
            avatar: Some(AvatarView {
                photo_url: fields.photo_url.clone(),
                alt: fields.name.clone(),
                initials: self.initials(),
            }),
            badge: format!("ID: {}", fields.code),
            description: None,
            links,
        }
    }
}

impl PageSection for Assignment {
    const HEADING: &'static str = "Group Assignments";

    fn controller(page: &StudyGroupPage) -> &ListController<Self> {
        &page.assignments
    }

    fn split(
        page: &mut StudyGroupPage,
    ) -> (&mut ListController<Self>, &mut ToastQueue) {
        (&mut page.assignments, &mut page.toasts)
    }

    fn store(state: &AppState) -> &RecordStoreType<Self> {
        &state.assignment_store
    }

    fn card(&self) -> CardView {
        let fields = &self.fields;
        CardView {
            id: *self.id.as_ref(),
            title: fields.title.clone(),
            avatar: None,
            badge: format!("Assignment #{}", self.id),
            description: fields.description.clone(),
            links: fields
                .link
                .iter()
                .map(|link| LinkView {
                    href: link.clone(),
                    label: "View Assignment".to_owned(),
                    external: true,
                })
                .collect(),
        }
    }
}

pub struct SectionView {
    pub resource: &'static str,
    pub heading: &'static str,
    pub add_label: String,
    pub loading_message: String,
    pub loading: bool,
    pub cards: Vec<CardView>,
    pub gate: Option<GateView>,
    pub form: Option<FormView>,
}

pub struct CardView {
    pub id: i64,
    pub title: String,
    pub avatar: Option<AvatarView>,
    pub badge: String,
    pub description: Option<String>,
    pub links: Vec<LinkView>,
}

pub struct AvatarView {
    pub photo_url: Option<String>,
    pub alt: String,
    pub initials: String,
}

pub struct LinkView {
    pub href: String,
    pub label: String,
    pub external: bool,
}

pub struct GateView {
    pub action: String,
    pub close_action: String,
    pub input: String,
}

pub struct FormView {
    pub heading: String,
    pub action: String,
    pub close_action: String,
    pub submit_label: &'static str,
    pub submitting: bool,
    pub fields: Vec<FieldView>,
}

pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub multiline: bool,
    pub required: bool,
    pub placeholder: &'static str,
    pub value: String,
}

pub struct ToastView {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl From<Toast> for ToastView {
    fn from(toast: Toast) -> Self {
        Self {
            title: toast.title,
            message: toast.message,
            is_error: toast.severity == Severity::Error,
        }
    }
}

pub fn section_view<S: PageSection>(controller: &ListController<S>) -> SectionView {
    let gate = controller.gate().is_open().then(|| GateView {
        action: format!("/{}/gate", S::RESOURCE),
        close_action: format!("/{}/gate/close", S::RESOURCE),
        input: controller
            .gate()
            .input()
            .map(|input| input.expose_secret().to_owned())
            .unwrap_or_default(),
    });

    let form = controller.form().map(|form| {
        let (heading, submit_label) = match form.mode() {
            FormMode::Create => (format!("Add New {}", S::title()), "Add"),
            FormMode::Edit(_) => (format!("Edit {}", S::title()), "Update"),
        };
        FormView {
            heading,
            action: format!("/{}/form", S::RESOURCE),
            close_action: format!("/{}/form/close", S::RESOURCE),
            submit_label: if form.is_submitting() {
                "Saving..."
            } else {
                submit_label
            },
            submitting: form.is_submitting(),
            fields: S::FIELDS
                .iter()
                .map(|field| FieldView {
                    name: field.name,
                    label: field.label,
                    input_type: field.kind.input_type(),
                    multiline: field.kind == FieldKind::TextArea,
                    required: field.required,
                    placeholder: field.placeholder.unwrap_or_default(),
                    value: form.draft().value(field.name).to_owned(),
                })
                .collect(),
        }
    });

    SectionView {
        resource: S::RESOURCE,
        heading: S::HEADING,
        add_label: format!("Add {}", S::title()),
        loading_message: format!("Loading {}...", S::PLURAL),
        loading: controller.is_loading(),
        cards: controller.items().iter().map(PageSection::card).collect(),
        gate,
        form,
    }
}
