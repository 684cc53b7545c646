/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use crate::{FieldDefinition, FormMeta, PreviewRule};

use dioxus::prelude::*;

/// The mock input for one field. Canvas cards, the preview tab and the
/// public form all call this.
pub fn field_body(rule: PreviewRule) -> Element {
    match rule {
        PreviewRule::SingleLine { placeholder } => rsx! {
            input { class: "sf-input", r#type: "text", placeholder: "{placeholder}" }
        },
        PreviewRule::MultiLine { placeholder } => rsx! {
            textarea { class: "sf-input sf-textarea", placeholder: "{placeholder}" }
        },
        PreviewRule::MockOptions { options } => rsx! {
            div {
                class: "sf-mock-options",
                for option in options {
                    span { "{option}" }
                }
            }
        },
        PreviewRule::DashedBox { caption, tall } => {
            let class = if tall { "sf-dashed tall" } else { "sf-dashed" };
            rsx! {
                div { class: "{class}", "{caption}" }
            }
        }
        PreviewRule::Separator { padded } => rsx! {
            if padded {
                div { class: "sf-separator-pad", hr { class: "sf-separator" } }
            } else {
                hr { class: "sf-separator" }
            }
        },
    }
}

/// A labelled field as a respondent sees it.
pub fn labelled_field(field: &FieldDefinition) -> Element {
    let marker = if field.required { " *" } else { "" };
    rsx! {
        div {
            class: "sf-preview-field",
            label { class: "sf-preview-label", "{field.label}{marker}" }
            {field_body(field.preview())}
        }
    }
}

/// Cover, icon, title, description and every field, then a submit button.
pub fn form_preview(meta: &FormMeta, fields: &[FieldDefinition]) -> Element {
    let icon = meta.icon_or_bullet().to_string();
    rsx! {
        div {
            class: "sf-form-preview",
            if meta.cover_url.is_empty() {
                div { class: "sf-cover placeholder", "Cover image" }
            } else {
                img { class: "sf-cover", src: "{meta.cover_url}", alt: "Cover" }
            }
            div {
                class: "sf-form-body",
                div {
                    class: "sf-form-heading",
                    div { class: "sf-icon", "{icon}" }
                    div { class: "sf-form-title", "{meta.title}" }
                }
                if !meta.description.is_empty() {
                    p { class: "sf-muted", "{meta.description}" }
                }
                if meta.require_email {
                    div {
                        class: "sf-preview-field",
                        label { class: "sf-preview-label", "Email *" }
                        input { class: "sf-input", r#type: "email", placeholder: "you@example.com" }
                    }
                }
                for field in fields.iter() {
                    div {
                        key: "{field.id()}",
                        {labelled_field(field)}
                    }
                }
                button { class: "sf-btn secondary full", "Submit" }
            }
        }
    }
}

#[cfg(all(test, feature = "rsx"))]
mod tests {
    use super::*;
    use crate::{FieldId, FieldKind, FieldList};

    fn render(element: Element) -> String {
        dioxus_ssr::render_element(element)
    }

    #[test]
    fn renders_every_rule() {
        let expected: [(FieldKind, &[&str]); 9] = [
            (FieldKind::ShortText, &[r#"placeholder="Short answer...""#]),
            (FieldKind::LongText, &["<textarea", r#"placeholder="Long answer...""#]),
            (FieldKind::MultipleChoice, &["Option A", "Option B"]),
            (FieldKind::Checkboxes, &["Choice 1", "Choice 2"]),
            (FieldKind::Dropdown, &[r#"placeholder="Dropdown (mock)""#]),
            (FieldKind::Image, &["sf-dashed tall", "Image placeholder"]),
            (FieldKind::FileUpload, &["sf-dashed", "File upload placeholder"]),
            (FieldKind::SectionBreak, &["sf-separator-pad", "<hr"]),
            (FieldKind::Divider, &["<hr"]),
        ];

        for (kind, fragments) in expected {
            let html = render(field_body(kind.preview()));
            for fragment in fragments {
                assert!(html.contains(fragment), "{kind}: {fragment:?} missing from {html}");
            }
        }

        let divider = render(field_body(FieldKind::Divider.preview()));
        assert!(!divider.contains("sf-separator-pad"));
        let upload = render(field_body(FieldKind::FileUpload.preview()));
        assert!(!upload.contains("tall"));
    }

    #[test]
    fn preview_reuses_canvas_bodies() {
        let fields = FieldList::new(
            FieldKind::ALL
                .iter()
                .enumerate()
                .map(|(i, kind)| FieldDefinition::new(FieldId::new(format!("f-{i}")), *kind))
                .collect(),
        );
        let html = render(form_preview(&FormMeta::default(), fields.fields()));

        for field in fields.iter() {
            let body = render(field_body(field.preview()));
            assert!(html.contains(&body), "{} body missing from preview", field.kind());
            assert!(html.contains(&field.label));
        }
    }

    #[test]
    fn renders_seeded_form() {
        let fields = FieldList::seeded();
        let html = render(form_preview(&FormMeta::default(), fields.fields()));

        assert!(html.contains("Untitled form"));
        assert!(html.contains("Cover image"));
        assert!(html.contains("Your name *"));
        assert!(html.contains("Message"));
        assert!(!html.contains("Message *"));
        assert!(html.contains("Submit"));
    }

    #[test]
    fn required_email_adds_field() {
        let fields = FieldList::seeded();
        let off = FormMeta { require_email: false, ..FormMeta::default() };

        assert!(render(form_preview(&FormMeta::default(), fields.fields())).contains("Email *"));
        assert!(!render(form_preview(&off, fields.fields())).contains("Email *"));
    }
}
