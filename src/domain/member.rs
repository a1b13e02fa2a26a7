use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{optional, Draft, Entity, FieldKind, FieldSpec, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: RecordId,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: MemberFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MemberFields {
    pub name: String,
    pub code: String,
    pub email: String,
    pub github: Option<String>,
    pub photo_url: Option<String>,
}

impl Member {
    /// Avatar fallback: the first character of every space-separated word.
    pub fn initials(&self) -> String {
        self.fields
            .name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl Entity for Member {
    type Fields = MemberFields;
    type Draft = MemberDraft;

    const RESOURCE: &'static str = "members";
    const SORT_KEY: &'static str = "name";
    const SINGULAR: &'static str = "member";
    const PLURAL: &'static str = "members";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "name",
            label: "Name",
            kind: FieldKind::Text,
            required: true,
            placeholder: None,
        },
        FieldSpec {
            name: "code",
            label: "ID Number",
            kind: FieldKind::Text,
            required: true,
            placeholder: None,
        },
        FieldSpec {
            name: "email",
            label: "Email",
            kind: FieldKind::Email,
            required: true,
            placeholder: None,
        },
        FieldSpec {
            name: "github",
            label: "GitHub Link",
            kind: FieldKind::Url,
            required: false,
            placeholder: Some("https://github.com/username"),
        },
        FieldSpec {
            name: "photo_url",
            label: "Photo URL",
            kind: FieldKind::Url,
            required: false,
            placeholder: Some("https://example.com/photo.jpg"),
        },
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn sort_value(&self) -> &str {
        &self.fields.name
    }

    fn fields(&self) -> &MemberFields {
        &self.fields
    }

    fn from_parts(id: RecordId, fields: MemberFields) -> Self {
        Self { id, fields }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct MemberDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "ID Number is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    pub github: String,
    pub photo_url: String,
}

impl Draft<Member> for MemberDraft {
    fn from_entity(member: &Member) -> Self {
        let fields = &member.fields;
        Self {
            name: fields.name.clone(),
            code: fields.code.clone(),
            email: fields.email.clone(),
            github: fields.github.clone().unwrap_or_default(),
            photo_url: fields.photo_url.clone().unwrap_or_default(),
        }
    }

    fn value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "code" => &self.code,
            "email" => &self.email,
            "github" => &self.github,
            "photo_url" => &self.photo_url,
            _ => "",
        }
    }

    fn to_fields(&self) -> MemberFields {
        MemberFields {
            name: self.name.clone(),
            code: self.code.clone(),
            email: self.email.clone(),
            github: optional(&self.github),
            photo_url: optional(&self.photo_url),
        }
    }
}
