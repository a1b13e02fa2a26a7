use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use validator::Validate;

use super::RecordId;

/// How a field is collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Url,
    TextArea,
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column name in the store and form field name.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

/// Schema of a record type listed on the page.
///
/// One generic controller, form and store implementation serve every type
/// that implements this trait; the consts describe everything that differs
/// between members and assignments.
pub trait Entity:
    Debug
    + Clone
    + PartialEq
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + Unpin
    + 'static
{
    /// Normalized fields written to the store. Absent optional values are
    /// `None`, never an empty string.
    type Fields: Debug + Clone + PartialEq + Serialize + Send + Sync + 'static;
    /// Raw form input.
    type Draft: Draft<Self>;

    /// Table or REST resource name.
    const RESOURCE: &'static str;
    /// Column the listing is ordered by, ascending.
    const SORT_KEY: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn id(&self) -> RecordId;
    fn sort_value(&self) -> &str;
    fn fields(&self) -> &Self::Fields;
    fn from_parts(id: RecordId, fields: Self::Fields) -> Self;

    /// Capitalized singular label, e.g. "Member".
    fn title() -> String {
        let mut chars = Self::SINGULAR.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

pub trait Draft<E: Entity>:
    Debug + Default + Clone + PartialEq + Validate + DeserializeOwned + Send + Sync + 'static
{
    fn from_entity(entity: &E) -> Self;
    /// Current raw value of the named field, empty if unknown.
    fn value(&self, field: &str) -> &str;
    fn to_fields(&self) -> E::Fields;
}

/// Empty optional input is stored as absent.
pub fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
