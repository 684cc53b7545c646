/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Domain model for the Snap-form builder: fields, the snippet palette, the
//! ordered field list, the drag controller and the mock catalogs the pages
//! render.

pub mod analytics;
pub mod builder;
pub mod collision;
pub mod config;
pub mod drag;
pub mod effects;
pub mod error;
pub mod field;
pub mod list;
pub mod mock;
pub mod palette;
pub mod preview;

#[cfg(feature = "rsx")]
pub mod preview_rsx;

pub use builder::{FormBuilder, FormMeta};
pub use collision::{Point, Rect};
pub use config::AppConfig;
pub use drag::{DragController, DragSource, DragState, DropOutcome, DropTarget, Notice};
pub use effects::Effects;
pub use error::CoreError;
pub use field::{FieldDefinition, FieldId, FieldKind, FieldPatch};
pub use list::FieldList;
pub use palette::{Category, PaletteEntry};
pub use preview::PreviewRule;
