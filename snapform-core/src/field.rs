/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::preview::PreviewRule;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    ShortText,
    LongText,
    MultipleChoice,
    Checkboxes,
    Dropdown,
    Image,
    FileUpload,
    SectionBreak,
    Divider,
}

/// One row of the per-kind dispatch table.
#[derive(Debug)]
pub struct KindSpec {
    pub kind: FieldKind,
    pub key: &'static str,
    pub default_label: &'static str,
    pub preview: PreviewRule,
}

// Indexed by `FieldKind as usize`; keep in declaration order.
static KIND_TABLE: [KindSpec; 9] = [
    KindSpec {
        kind: FieldKind::ShortText,
        key: "short_text",
        default_label: "Short text",
        preview: PreviewRule::SingleLine { placeholder: "Short answer..." },
    },
    KindSpec {
        kind: FieldKind::LongText,
        key: "long_text",
        default_label: "Long text",
        preview: PreviewRule::MultiLine { placeholder: "Long answer..." },
    },
    KindSpec {
        kind: FieldKind::MultipleChoice,
        key: "multiple_choice",
        default_label: "Multiple choice",
        preview: PreviewRule::MockOptions { options: ["Option A", "Option B"] },
    },
    KindSpec {
        kind: FieldKind::Checkboxes,
        key: "checkboxes",
        default_label: "Checkboxes",
        preview: PreviewRule::MockOptions { options: ["Choice 1", "Choice 2"] },
    },
    KindSpec {
        kind: FieldKind::Dropdown,
        key: "dropdown",
        default_label: "Dropdown",
        preview: PreviewRule::SingleLine { placeholder: "Dropdown (mock)" },
    },
    KindSpec {
        kind: FieldKind::Image,
        key: "image",
        default_label: "Image",
        preview: PreviewRule::DashedBox { caption: "Image placeholder", tall: true },
    },
    KindSpec {
        kind: FieldKind::FileUpload,
        key: "file_upload",
        default_label: "File upload",
        preview: PreviewRule::DashedBox { caption: "File upload placeholder", tall: false },
    },
    KindSpec {
        kind: FieldKind::SectionBreak,
        key: "section_break",
        default_label: "Section",
        preview: PreviewRule::Separator { padded: true },
    },
    KindSpec {
        kind: FieldKind::Divider,
        key: "divider",
        default_label: "Divider",
        preview: PreviewRule::Separator { padded: false },
    },
];

impl FieldKind {
    pub const ALL: [FieldKind; 9] = [
        FieldKind::ShortText,
        FieldKind::LongText,
        FieldKind::MultipleChoice,
        FieldKind::Checkboxes,
        FieldKind::Dropdown,
        FieldKind::Image,
        FieldKind::FileUpload,
        FieldKind::SectionBreak,
        FieldKind::Divider,
    ];

    pub fn spec(self) -> &'static KindSpec {
        &KIND_TABLE[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.spec().key
    }

    pub fn default_label(self) -> &'static str {
        self.spec().default_label
    }

    pub fn preview(self) -> PreviewRule {
        self.spec().preview
    }

    /// Kinds whose `options` list is meaningful.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            FieldKind::MultipleChoice | FieldKind::Checkboxes | FieldKind::Dropdown
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_TABLE
            .iter()
            .find(|spec| spec.key == s)
            .map(|spec| spec.kind)
            .ok_or_else(|| CoreError::UnknownFieldKind(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `f-` followed by the first eight hex digits of a random UUID.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(format!("f-{}", &uuid[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    id: FieldId,
    #[serde(rename = "type")]
    kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDefinition {
    pub fn new(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            label: kind.default_label().to_string(),
            required: false,
            options: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn preview(&self) -> PreviewRule {
        self.kind.preview()
    }

    pub fn apply(&mut self, patch: FieldPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(options) = patch.options {
            self.options = options;
        }
    }
}

/// Partial update for a field. Identity and kind are not expressible here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..Self::default() }
    }

    pub fn required(required: bool) -> Self {
        Self { required: Some(required), ..Self::default() }
    }

    pub fn options(options: Vec<String>) -> Self {
        Self { options: Some(options), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.required.is_none() && self.options.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.spec().kind, kind);
        }
    }

    #[test]
    fn default_labels() {
        assert_eq!(FieldKind::Dropdown.default_label(), "Dropdown");
        assert_eq!(FieldKind::SectionBreak.default_label(), "Section");
        assert_eq!(FieldKind::FileUpload.default_label(), "File upload");
    }

    #[test]
    fn parses_snake_case_keys() {
        assert_eq!("multiple_choice".parse::<FieldKind>().unwrap(), FieldKind::MultipleChoice);
        assert_eq!(FieldKind::SectionBreak.to_string(), "section_break");
        assert!(matches!(
            "rating".parse::<FieldKind>(),
            Err(CoreError::UnknownFieldKind(k)) if k == "rating"
        ));
    }

    #[test]
    fn serializes_kind_under_type_key() {
        let field = FieldDefinition::new(FieldId::new("f-1"), FieldKind::ShortText)
            .with_label("Your name")
            .required();

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["id"], "f-1");
        assert_eq!(json["type"], "short_text");
        assert_eq!(json["required"], true);
        assert!(json.get("options").is_none());

        let back: FieldDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn generated_ids_have_prefix() {
        let id = FieldId::generate();
        assert!(id.as_str().starts_with("f-"));
        assert_eq!(id.as_str().len(), 10);
    }

    #[test]
    fn patch_leaves_unset_attributes() {
        let mut field = FieldDefinition::new(FieldId::new("f-9"), FieldKind::Checkboxes).required();
        field.apply(FieldPatch::options(vec!["Red".into(), "Blue".into()]));

        assert_eq!(field.label, "Checkboxes");
        assert!(field.required);
        assert_eq!(field.options, vec!["Red".to_string(), "Blue".to_string()]);
        assert!(FieldPatch::default().is_empty());
    }
}
