use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{optional, Draft, Entity, FieldKind, FieldSpec, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Assignment {
    pub id: RecordId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: AssignmentFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AssignmentFields {
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl Entity for Assignment {
    type Fields = AssignmentFields;
    type Draft = AssignmentDraft;

    const RESOURCE: &'static str = "assignments";
    const SORT_KEY: &'static str = "title";
    const SINGULAR: &'static str = "assignment";
    const PLURAL: &'static str = "assignments";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "title",
            label: "Title",
            kind: FieldKind::Text,
            required: true,
            placeholder: None,
        },
        FieldSpec {
            name: "description",
            label: "Description",
            kind: FieldKind::TextArea,
            required: false,
            placeholder: Some("Enter assignment description..."),
        },
        FieldSpec {
            name: "link",
            label: "Link",
            kind: FieldKind::Url,
            required: false,
            placeholder: Some("https://example.com/assignment"),
        },
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn sort_value(&self) -> &str {
        &self.fields.title
    }

    fn fields(&self) -> &AssignmentFields {
        &self.fields
    }

    fn from_parts(id: RecordId, fields: AssignmentFields) -> Self {
        Self { id, fields }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct AssignmentDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: String,
    pub link: String,
}

impl Draft<Assignment> for AssignmentDraft {
    fn from_entity(assignment: &Assignment) -> Self {
        let fields = &assignment.fields;
        Self {
            title: fields.title.clone(),
            description: fields.description.clone().unwrap_or_default(),
            link: fields.link.clone().unwrap_or_default(),
        }
    }

    fn value(&self, field: &str) -> &str {
        match field {
            "title" => &self.title,
            "description" => &self.description,
            "link" => &self.link,
            _ => "",
        }
    }

    fn to_fields(&self) -> AssignmentFields {
        AssignmentFields {
            title: self.title.clone(),
            description: optional(&self.description),
            link: optional(&self.link),
        }
    }
}

#[test]
fn test_title_is_required() {
    let draft = AssignmentDraft {
        description: "Read chapter 4".to_owned(),
        ..Default::default()
    };
    let errors = draft.validate().expect_err("title is required");
    assert!(errors.field_errors().contains_key("title"));
}

#[test]
fn test_draft_normalizes_optional_fields() {
    let draft = AssignmentDraft {
        title: "Capstone".to_owned(),
        description: String::new(),
        link: "https://example.com/capstone".to_owned(),
    };
    assert_eq!(
        draft.to_fields(),
        AssignmentFields {
            title: "Capstone".to_owned(),
            description: None,
            link: Some("https://example.com/capstone".to_owned()),
        }
    );
}

#[test]
fn test_draft_deserializes_with_missing_optional_fields() {
    let draft: AssignmentDraft =
        serde_json::from_value(serde_json::json!({ "title": "Homework 1" }))
            .unwrap();
    assert_eq!(draft.title, "Homework 1");
    assert!(draft.description.is_empty());
    assert!(draft.link.is_empty());
}
