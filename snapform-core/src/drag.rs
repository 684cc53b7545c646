/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use tracing::debug;

use crate::field::{FieldId, FieldKind};
use crate::list::FieldList;

/// What the pointer picked up.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSource {
    Palette(FieldKind),
    Field(FieldId),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    FromPalette(FieldKind),
    Existing(FieldId),
}

/// What the pointer is over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// The empty area of the canvas below the last field.
    Canvas,
    Field(FieldId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Added { id: FieldId, kind: FieldKind, index: usize },
    NotAdded { kind: FieldKind },
    Reordered { id: FieldId, from: usize, to: usize },
    Unchanged,
    /// A drag end arrived with no gesture in progress.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

impl DropOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            DropOutcome::Added { kind, .. } => Some(Notice::new(
                "Field added",
                format!("Inserted {}", kind.default_label()),
            )),
            DropOutcome::NotAdded { .. } => {
                Some(Notice::new("Not added", "Dropped outside the canvas."))
            }
            _ => None,
        }
    }

    pub fn mutated(&self) -> bool {
        matches!(self, DropOutcome::Added { .. } | DropOutcome::Reordered { .. })
    }
}

/// Turns a drag gesture into at most one list mutation.
///
/// `over` only ever borrows the list; the single commit happens in `end`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    state: DragState,
    insertion_index: Option<usize>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    pub fn insertion_index(&self) -> Option<usize> {
        self.insertion_index
    }

    /// Where to draw the insertion marker. Only palette drags show one.
    pub fn marker_at(&self) -> Option<usize> {
        match self.state {
            DragState::FromPalette(_) => self.insertion_index,
            _ => None,
        }
    }

    pub fn active_field(&self) -> Option<&FieldId> {
        match &self.state {
            DragState::Existing(id) => Some(id),
            _ => None,
        }
    }

    pub fn start(&mut self, source: DragSource) {
        self.state = match source {
            DragSource::Palette(kind) => DragState::FromPalette(kind),
            DragSource::Field(id) => DragState::Existing(id),
        };
        self.insertion_index = None;
        debug!(state = ?self.state, "drag started");
    }

    /// The insertion index `over` would record, without recording it.
    pub fn probe(&self, target: Option<&DropTarget>, list: &FieldList) -> Option<usize> {
        if !self.is_dragging() {
            return None;
        }
        target.and_then(|t| index_for(t, list))
    }

    pub fn over(&mut self, target: Option<&DropTarget>, list: &FieldList) {
        self.insertion_index = self.probe(target, list);
    }

    pub fn end(&mut self, target: Option<&DropTarget>, list: &mut FieldList) -> DropOutcome {
        let state = std::mem::take(&mut self.state);
        let hovered = self.insertion_index.take();

        let outcome = match state {
            DragState::Idle => DropOutcome::Ignored,
            // A release without a recorded hover position appends.
            DragState::FromPalette(kind) => match target.and_then(|t| index_for(t, list)) {
                Some(_) => {
                    let index = hovered.unwrap_or(list.len()).min(list.len());
                    let id = list.add_field(kind, Some(index));
                    DropOutcome::Added { id, kind, index }
                }
                None => DropOutcome::NotAdded { kind },
            },
            DragState::Existing(id) => {
                let from = list.index_of(&id);
                let to = match target {
                    Some(DropTarget::Field(over)) => list.index_of(over),
                    _ => None,
                };
                match (from, to) {
                    (Some(from), Some(to)) if from != to => {
                        list.reorder(from, to);
                        DropOutcome::Reordered { id, from, to }
                    }
                    _ => DropOutcome::Unchanged,
                }
            }
        };

        debug!(?outcome, "drag ended");
        outcome
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
        self.insertion_index = None;
    }
}

fn index_for(target: &DropTarget, list: &FieldList) -> Option<usize> {
    match target {
        DropTarget::Canvas => Some(list.len()),
        DropTarget::Field(id) => list.index_of(id),
    }
}
