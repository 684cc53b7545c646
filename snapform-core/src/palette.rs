/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use crate::field::FieldKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    InputFields,
    Choices,
    Media,
    Layout,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::InputFields,
        Category::Choices,
        Category::Media,
        Category::Layout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::InputFields => "Input Fields",
            Category::Choices => "Choices",
            Category::Media => "Media",
            Category::Layout => "Layout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub kind: FieldKind,
    pub label: &'static str,
    pub category: Category,
}

impl PaletteEntry {
    /// Stable id used for the draggable element.
    pub fn element_id(&self) -> String {
        format!("palette-{}", self.kind.key())
    }
}

static PALETTE: [PaletteEntry; 9] = [
    PaletteEntry { kind: FieldKind::ShortText, label: "Short text", category: Category::InputFields },
    PaletteEntry { kind: FieldKind::LongText, label: "Long text", category: Category::InputFields },
    PaletteEntry { kind: FieldKind::MultipleChoice, label: "Multiple choice", category: Category::Choices },
    PaletteEntry { kind: FieldKind::Checkboxes, label: "Checkboxes", category: Category::Choices },
    PaletteEntry { kind: FieldKind::Dropdown, label: "Dropdown", category: Category::Choices },
    PaletteEntry { kind: FieldKind::Image, label: "Image", category: Category::Media },
    PaletteEntry { kind: FieldKind::FileUpload, label: "File upload", category: Category::Media },
    PaletteEntry { kind: FieldKind::SectionBreak, label: "Section break", category: Category::Layout },
    PaletteEntry { kind: FieldKind::Divider, label: "Divider", category: Category::Layout },
];

pub fn entries() -> &'static [PaletteEntry] {
    &PALETTE
}

pub fn entry(kind: FieldKind) -> &'static PaletteEntry {
    &PALETTE[kind as usize]
}

pub fn in_category(category: Category) -> impl Iterator<Item = &'static PaletteEntry> {
    PALETTE.iter().filter(move |e| e.category == category)
}

/// Entries grouped by category, in display order.
pub fn grouped() -> Vec<(Category, Vec<&'static PaletteEntry>)> {
    Category::ALL
        .iter()
        .map(|&cat| (cat, in_category(cat).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_kind() {
        for kind in FieldKind::ALL {
            assert_eq!(entry(kind).kind, kind);
        }
        assert_eq!(entries().len(), FieldKind::ALL.len());
    }

    #[test]
    fn grouping_keeps_every_entry() {
        let groups = grouped();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].0.label(), "Input Fields");
        assert_eq!(groups[1].1.len(), 3);
        let total: usize = groups.iter().map(|(_, e)| e.len()).sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn palette_label_may_differ_from_default() {
        let section = entry(FieldKind::SectionBreak);
        assert_eq!(section.label, "Section break");
        assert_eq!(section.kind.default_label(), "Section");
        assert_eq!(section.element_id(), "palette-section_break");
    }
}
