#![allow(non_snake_case)]

pub mod toast;

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use snapform_core::collision::closest_center;
use snapform_core::palette;
use snapform_core::preview_rsx::{field_body, form_preview};
use snapform_core::{
    AppConfig, DragSource, DropTarget, Effects, FieldDefinition, FieldList, FieldPatch, FormBuilder, Point,
    Rect,
};
use tracing::{info, warn};

use toast::use_effects;

pub const EDITOR_CSS: Asset = asset!("/assets/editor.css");

#[derive(Clone, Copy, Debug, PartialEq)]
enum SideTab {
    Preview,
    Properties,
}

#[component]
pub fn FormBuilderEditor(on_open_analytics: EventHandler<String>) -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let form_id = config.mock_form_id.clone();
    let effects = use_effects();

    let mut builder = use_signal(FormBuilder::new);
    let mut mounts = use_signal(HashMap::<DropTarget, Rc<MountedData>>::new);
    let mut layout = use_signal(Vec::<(DropTarget, Rect)>::new);
    let mut tab = use_signal(|| SideTab::Preview);

    // Drop-target rectangles only move between gestures, so measure once per drag.
    let measure = move || {
        spawn(async move {
            let nodes = {
                let current = builder.peek();
                prune_mounts(current.fields(), &mut *mounts.write());
                targets_in_canvas_order(current.fields(), &*mounts.peek())
            };

            let mut measured = Vec::with_capacity(nodes.len());
            for (target, node) in nodes {
                match node.get_client_rect().await {
                    Ok(r) => measured.push((
                        target,
                        Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height),
                    )),
                    Err(e) => warn!(?target, "drop target not measurable: {e:?}"),
                }
            }
            layout.set(measured);
        });
    };

    let resolve = move |x: f64, y: f64| -> Option<DropTarget> {
        closest_center(Point::new(x, y), layout.read().as_slice()).cloned()
    };

    let current = builder.read().clone();
    let fields = current.fields().snapshot();
    let marker = current.drag().marker_at();
    let active = current.drag().active_field().cloned();
    let meta = current.meta.clone();

    rsx! {
        document::Stylesheet { href: EDITOR_CSS }
        div {
            class: "builder",
            ondragover: move |evt| {
                let coords = evt.client_coordinates();
                let target = resolve(coords.x, coords.y);
                if target.is_some() {
                    evt.prevent_default();
                }
                let changed = {
                    let b = builder.peek();
                    b.drag().probe(target.as_ref(), b.fields()) != b.drag().insertion_index()
                };
                if changed {
                    builder.write().drag_over(target.as_ref());
                }
            },
            ondrop: move |evt| {
                evt.prevent_default();
                let coords = evt.client_coordinates();
                let target = resolve(coords.x, coords.y);
                builder.write().end_drag(target.as_ref(), &effects);
            },

            div {
                class: "builder-topbar",
                input {
                    class: "sf-input title-input",
                    value: "{meta.title}",
                    placeholder: "Form title",
                    aria_label: "Form title",
                    oninput: move |evt| builder.write().meta.title = evt.value(),
                }
                div {
                    class: "topbar-actions",
                    button {
                        class: "sf-btn secondary",
                        onclick: move |_| builder.read().copy_short_link(&config, &effects),
                        "Copy Short Link"
                    }
                    button {
                        class: "sf-btn ghost",
                        onclick: move |_| on_open_analytics.call(form_id.clone()),
                        "Analytics"
                    }
                    button {
                        class: "sf-btn primary",
                        onclick: move |_| builder.read().save(&effects),
                        "Save"
                    }
                }
            }

            div {
                class: "builder-workspace",

                div {
                    class: "sf-card palette",
                    h3 { "Snippets" }
                    p { class: "sf-muted", "Drag to canvas or click to add" }
                    for (category, entries) in palette::grouped() {
                        div {
                            key: "{category.label()}",
                            class: "palette-group",
                            p { class: "palette-category", "{category.label()}" }
                            div {
                                class: "palette-grid",
                                for entry in entries {
                                    div {
                                        key: "{entry.element_id()}",
                                        id: "{entry.element_id()}",
                                        class: "palette-card",
                                        role: "button",
                                        aria_label: "Add {entry.label}",
                                        draggable: "true",
                                        ondragstart: {
                                            let kind = entry.kind;
                                            move |_| {
                                                builder.write().start_drag(DragSource::Palette(kind));
                                                measure();
                                            }
                                        },
                                        ondragend: move |_| {
                                            if builder.peek().drag().is_dragging() {
                                                builder.write().end_drag(None, &effects);
                                            }
                                        },
                                        onclick: {
                                            let kind = entry.kind;
                                            move |_| {
                                                let id = builder.write().add_from_palette(kind, &effects);
                                                info!(%id, %kind, "field added by click");
                                            }
                                        },
                                        span { class: "grip", "⋮⋮" }
                                        span { "{entry.label}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "sf-card canvas-card",
                    h3 { "Form Canvas" }
                    p { class: "sf-muted", "Drag snippets here. Reorder with handles." }
                    div {
                        class: if marker.is_some() { "canvas over" } else { "canvas" },
                        onmounted: move |evt: MountedEvent| {
                            mounts.write().insert(DropTarget::Canvas, evt.data());
                        },
                        for (idx, field) in fields.iter().enumerate() {
                            div {
                                key: "{field.id()}",
                                class: "canvas-slot",
                                if marker == Some(idx) {
                                    div { class: "insertion-marker" }
                                }
                                FieldCard {
                                    field: field.clone(),
                                    dragging: active.as_ref() == Some(field.id()),
                                    on_change: {
                                        let id = field.id().clone();
                                        move |patch: FieldPatch| {
                                            builder.write().update_field(&id, patch);
                                        }
                                    },
                                    on_remove: {
                                        let id = field.id().clone();
                                        move |_| {
                                            builder.write().remove_field(&id);
                                            mounts.write().remove(&DropTarget::Field(id.clone()));
                                        }
                                    },
                                    on_handle_drag: {
                                        let id = field.id().clone();
                                        move |_| {
                                            builder.write().start_drag(DragSource::Field(id.clone()));
                                            measure();
                                        }
                                    },
                                    on_drag_end: move |_| {
                                        if builder.peek().drag().is_dragging() {
                                            builder.write().end_drag(None, &effects);
                                        }
                                    },
                                    on_mounted: {
                                        let target = DropTarget::Field(field.id().clone());
                                        move |evt: MountedEvent| {
                                            mounts.write().insert(target.clone(), evt.data());
                                        }
                                    },
                                }
                            }
                        }
                        if marker == Some(fields.len()) {
                            div { class: "insertion-marker" }
                        }
                        div {
                            class: "canvas-dropzone",
                            if fields.is_empty() {
                                "Drag snippets here"
                            }
                        }
                    }
                }

                div {
                    class: "sf-card side-panel",
                    h3 { "Preview & Properties" }
                    p { class: "sf-muted", "Adjust and preview instantly" }
                    div {
                        class: "tabs",
                        button {
                            class: if *tab.read() == SideTab::Preview { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(SideTab::Preview),
                            "Preview"
                        }
                        button {
                            class: if *tab.read() == SideTab::Properties { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(SideTab::Properties),
                            "Properties"
                        }
                    }

                    if *tab.read() == SideTab::Preview {
                        {form_preview(&meta, &fields)}
                    } else {
                        PropertiesPanel { builder }
                    }
                }
            }
        }
    }
}

#[component]
fn PropertiesPanel(mut builder: Signal<FormBuilder>) -> Element {
    let effects = use_effects();
    let meta = builder.read().meta.clone();
    let icon = meta.icon_or_bullet().to_string();

    rsx! {
        div {
            class: "properties",
            div {
                class: "control-group",
                label { r#for: "cover", "Cover image URL" }
                div {
                    class: "control-row",
                    input {
                        id: "cover",
                        class: "sf-input",
                        placeholder: "https://...",
                        value: "{meta.cover_url}",
                        oninput: move |evt| builder.write().meta.cover_url = evt.value(),
                    }
                    button {
                        class: "sf-btn outline icon",
                        aria_label: "Upload cover (mock)",
                        onclick: move |_| effects.notify("Mock upload", "Cover upload is not available in this prototype."),
                        "⇪"
                    }
                }
            }
            div {
                class: "control-group",
                label { r#for: "icon", "Icon" }
                div {
                    class: "control-row",
                    input {
                        id: "icon",
                        class: "sf-input narrow",
                        placeholder: "Emoji or letter",
                        value: "{meta.icon}",
                        oninput: move |evt| builder.write().meta.icon = evt.value(),
                    }
                    div { class: "icon-badge", "{icon}" }
                    button {
                        class: "sf-btn outline icon",
                        aria_label: "Upload icon (mock)",
                        onclick: move |_| effects.notify("Mock upload", "Icon upload is not available in this prototype."),
                        "⇪"
                    }
                }
            }
            div {
                class: "control-group",
                label { r#for: "desc", "Description" }
                textarea {
                    id: "desc",
                    class: "sf-input sf-textarea",
                    placeholder: "Describe your form...",
                    value: "{meta.description}",
                    oninput: move |evt| builder.write().meta.description = evt.value(),
                }
            }
            hr { class: "sf-separator" }
            div {
                class: "control-row spread",
                div {
                    label { r#for: "requireEmail", "Require email" }
                    p { class: "sf-muted small", "Ask for respondent email (mock)" }
                }
                input {
                    id: "requireEmail",
                    class: "switch",
                    r#type: "checkbox",
                    role: "switch",
                    checked: meta.require_email,
                    onchange: move |evt| builder.write().meta.require_email = evt.checked(),
                }
            }
        }
    }
}

#[component]
fn FieldCard(
    field: FieldDefinition,
    dragging: bool,
    on_change: EventHandler<FieldPatch>,
    on_remove: EventHandler<()>,
    on_handle_drag: EventHandler<()>,
    on_drag_end: EventHandler<()>,
    on_mounted: EventHandler<MountedEvent>,
) -> Element {
    let class_name = if dragging { "field-card dragging" } else { "field-card" };
    let required_id = format!("{}-required", field.id());

    rsx! {
        div {
            class: "{class_name}",
            onmounted: move |evt| on_mounted.call(evt),
            button {
                class: "drag-handle",
                aria_label: "Drag handle",
                draggable: "true",
                ondragstart: move |_| on_handle_drag.call(()),
                ondragend: move |_| on_drag_end.call(()),
                "⋮⋮"
            }
            div {
                class: "field-main",
                input {
                    class: "sf-input compact",
                    value: "{field.label}",
                    oninput: move |evt| on_change.call(FieldPatch::label(evt.value())),
                }
                {field_body(field.preview())}
                if !field.kind().spec().preview.is_input() {
                    span { class: "sf-muted small", "{field.kind().default_label()} block" }
                } else {
                    label {
                        class: "required-toggle",
                        r#for: "{required_id}",
                        input {
                            id: "{required_id}",
                            r#type: "checkbox",
                            checked: field.required,
                            onchange: move |evt| on_change.call(FieldPatch::required(evt.checked())),
                        }
                        "Required"
                    }
                }
            }
            button {
                class: "icon-btn remove",
                aria_label: "Remove block",
                onclick: move |_| on_remove.call(()),
                "🗑"
            }
        }
    }
}

/// Drops handles of fields that are no longer in the list.
fn prune_mounts<N>(fields: &FieldList, mounts: &mut HashMap<DropTarget, N>) {
    mounts.retain(|target, _| match target {
        DropTarget::Canvas => true,
        DropTarget::Field(id) => fields.contains(id),
    });
}

/// Fields top to bottom, then the canvas. Collision ties go to the earliest entry.
fn targets_in_canvas_order<N: Clone>(
    fields: &FieldList,
    mounts: &HashMap<DropTarget, N>,
) -> Vec<(DropTarget, N)> {
    fields
        .iter()
        .map(|f| DropTarget::Field(f.id().clone()))
        .chain(std::iter::once(DropTarget::Canvas))
        .filter_map(|target| mounts.get(&target).map(|node| (target, node.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapform_core::{FieldId, FieldKind};

    fn field(id: &str) -> DropTarget {
        DropTarget::Field(FieldId::new(id))
    }

    #[test]
    fn targets_follow_list_order_then_canvas() {
        let mut list = FieldList::seeded();
        let third = list.add_field(FieldKind::Image, Some(0));

        let mut mounts = HashMap::new();
        mounts.insert(DropTarget::Canvas, 0);
        mounts.insert(field("f-2"), 2);
        mounts.insert(DropTarget::Field(third.clone()), 3);
        mounts.insert(field("f-1"), 1);

        let order: Vec<DropTarget> = targets_in_canvas_order(&list, &mounts)
            .into_iter()
            .map(|(target, _)| target)
            .collect();
        assert_eq!(
            order,
            vec![DropTarget::Field(third), field("f-1"), field("f-2"), DropTarget::Canvas]
        );
    }

    #[test]
    fn removed_fields_are_pruned() {
        let mut list = FieldList::seeded();
        let mut mounts = HashMap::new();
        mounts.insert(DropTarget::Canvas, 0);
        mounts.insert(field("f-1"), 1);
        mounts.insert(field("f-2"), 2);

        list.remove_field(&FieldId::new("f-1"));
        prune_mounts(&list, &mut mounts);

        assert_eq!(mounts.len(), 2);
        assert!(!mounts.contains_key(&field("f-1")));
        assert!(mounts.contains_key(&DropTarget::Canvas));
        assert_eq!(targets_in_canvas_order(&list, &mounts).len(), 2);
    }

    #[test]
    fn gaps_inside_canvas_resolve_to_canvas() {
        let canvas = Rect::new(0.0, 0.0, 400.0, 300.0);
        let first = Rect::new(12.0, 12.0, 376.0, 60.0);
        let second = Rect::new(12.0, 84.0, 376.0, 60.0);
        let layout = vec![
            (field("f-1"), first),
            (field("f-2"), second),
            (DropTarget::Canvas, canvas),
        ];

        let gap = Point::new(200.0, 78.0);
        assert_eq!(closest_center(gap, layout.as_slice()), Some(&DropTarget::Canvas));

        let padding = Point::new(4.0, 40.0);
        assert_eq!(closest_center(padding, layout.as_slice()), Some(&DropTarget::Canvas));

        let on_card = Point::new(200.0, 40.0);
        assert_eq!(closest_center(on_card, layout.as_slice()), Some(&field("f-1")));
    }
}
