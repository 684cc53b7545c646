/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::drag::{DragController, DragSource, DropOutcome, DropTarget, Notice};
use crate::effects::Effects;
use crate::field::{FieldDefinition, FieldId, FieldKind, FieldPatch};
use crate::list::FieldList;

/// Top-level form properties edited in the Properties tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormMeta {
    pub title: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub require_email: bool,
}

impl Default for FormMeta {
    fn default() -> Self {
        Self {
            title: "Untitled form".to_string(),
            cover_url: String::new(),
            icon: "🧩".to_string(),
            description: "Describe your form...".to_string(),
            require_email: true,
        }
    }
}

impl FormMeta {
    /// The icon glyph, or a bullet when the user cleared it.
    pub fn icon_or_bullet(&self) -> &str {
        if self.icon.trim().is_empty() { "•" } else { &self.icon }
    }
}

#[derive(Serialize)]
struct FormDocument<'a> {
    #[serde(flatten)]
    meta: &'a FormMeta,
    fields: &'a [FieldDefinition],
}

/// The builder page's model: form properties, the field list and the drag
/// gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct FormBuilder {
    pub meta: FormMeta,
    fields: FieldList,
    drag: DragController,
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::with_fields(FormMeta::default(), FieldList::seeded())
    }

    pub fn with_fields(meta: FormMeta, fields: FieldList) -> Self {
        Self { meta, fields, drag: DragController::new() }
    }

    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Click on a palette entry: same as dropping it at the end of the list.
    pub fn add_from_palette(&mut self, kind: FieldKind, effects: &impl Effects) -> FieldId {
        let index = self.fields.len();
        let id = self.fields.add_field(kind, None);
        let outcome = DropOutcome::Added { id: id.clone(), kind, index };
        if let Some(notice) = outcome.notice() {
            effects.show(&notice);
        }
        id
    }

    pub fn start_drag(&mut self, source: DragSource) {
        self.drag.start(source);
    }

    pub fn drag_over(&mut self, target: Option<&DropTarget>) {
        self.drag.over(target, &self.fields);
    }

    pub fn end_drag(&mut self, target: Option<&DropTarget>, effects: &impl Effects) -> DropOutcome {
        let outcome = self.drag.end(target, &mut self.fields);
        if let Some(notice) = outcome.notice() {
            effects.show(&notice);
        }
        outcome
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn update_field(&mut self, id: &FieldId, patch: FieldPatch) -> bool {
        self.fields.update_field(id, patch)
    }

    pub fn remove_field(&mut self, id: &FieldId) -> bool {
        self.fields.remove_field(id)
    }

    pub fn copy_short_link(&self, config: &AppConfig, effects: &impl Effects) {
        effects.copy_to_clipboard(&config.short_link);
        effects.show(&Notice::new("Link copied", "Short link copied to clipboard."));
        info!(link = %config.short_link, "short link copied");
    }

    /// Nothing is written anywhere; the form is only logged.
    pub fn save(&self, effects: &impl Effects) {
        match self.to_json() {
            Ok(json) => debug!(form = %json, "mock save"),
            Err(e) => debug!(error = %e, "form did not serialize"),
        }
        info!(title = %self.meta.title, fields = self.fields.len(), "form saved (mock)");
        effects.show(&Notice::new("Saved", "Mock save complete."));
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&FormDocument {
            meta: &self.meta,
            fields: self.fields.fields(),
        })
    }

    /// One line per field: label and a plain-text rendering of its preview.
    pub fn outline(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}: {}", f.label, f.preview().describe()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        notices: RefCell<Vec<(String, String)>>,
        clipboard: RefCell<Vec<String>>,
    }

    impl Effects for Recorder {
        fn notify(&self, title: &str, description: &str) {
            self.notices.borrow_mut().push((title.to_string(), description.to_string()));
        }

        fn copy_to_clipboard(&self, text: &str) {
            self.clipboard.borrow_mut().push(text.to_string());
        }
    }

    #[test]
    fn click_to_add_appends_and_notifies() {
        let fx = Recorder::default();
        let mut builder = FormBuilder::new();
        let id = builder.add_from_palette(FieldKind::Checkboxes, &fx);

        assert_eq!(builder.fields().index_of(&id), Some(2));
        assert_eq!(
            fx.notices.borrow().as_slice(),
            &[("Field added".to_string(), "Inserted Checkboxes".to_string())]
        );
    }

    #[test]
    fn drop_outside_only_notifies() {
        let fx = Recorder::default();
        let mut builder = FormBuilder::new();
        let before = builder.fields().snapshot();

        builder.start_drag(DragSource::Palette(FieldKind::Image));
        builder.drag_over(None);
        let outcome = builder.end_drag(None, &fx);

        assert_eq!(outcome, DropOutcome::NotAdded { kind: FieldKind::Image });
        assert!(std::sync::Arc::ptr_eq(&before, &builder.fields().snapshot()));
        assert_eq!(fx.notices.borrow()[0].0, "Not added");
        assert!(fx.clipboard.borrow().is_empty());
    }

    #[test]
    fn reorder_is_silent() {
        let fx = Recorder::default();
        let mut builder = FormBuilder::new();
        builder.start_drag(DragSource::Field(FieldId::new("f-2")));
        let target = DropTarget::Field(FieldId::new("f-1"));
        builder.drag_over(Some(&target));
        assert!(builder.end_drag(Some(&target), &fx).mutated());
        assert_eq!(builder.fields().fields()[0].label, "Message");
        assert!(fx.notices.borrow().is_empty());
    }

    #[test]
    fn copy_link_uses_config() {
        let fx = Recorder::default();
        let config = AppConfig::default();
        FormBuilder::new().copy_short_link(&config, &fx);

        assert_eq!(fx.clipboard.borrow().as_slice(), &[config.short_link.clone()]);
        assert_eq!(fx.notices.borrow()[0].0, "Link copied");
    }

    #[test]
    fn save_notifies_and_serializes() {
        let fx = Recorder::default();
        let builder = FormBuilder::new();
        builder.save(&fx);
        assert_eq!(
            fx.notices.borrow().as_slice(),
            &[("Saved".to_string(), "Mock save complete.".to_string())]
        );

        let json: serde_json::Value = serde_json::from_str(&builder.to_json().unwrap()).unwrap();
        assert_eq!(json["title"], "Untitled form");
        assert_eq!(json["require_email"], true);
        assert_eq!(json["fields"][1]["type"], "long_text");
    }

    #[test]
    fn outline_lists_fields() {
        let builder = FormBuilder::new();
        assert_eq!(builder.outline(), "Your name: [Short answer...]\nMessage: [[Long answer...]]");
    }

    #[test]
    fn blank_icon_falls_back() {
        let meta = FormMeta { icon: "  ".to_string(), ..FormMeta::default() };
        assert_eq!(meta.icon_or_bullet(), "•");
        assert_eq!(FormMeta::default().icon_or_bullet(), "🧩");
    }
}
