/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use std::sync::Arc;

use tracing::debug;

use crate::field::{FieldDefinition, FieldId, FieldKind, FieldPatch};

/// The ordered fields of one form.
///
/// Every effective mutation swaps in a fresh `Arc`, so a holder of an older
/// [`FieldList::snapshot`] can tell the list changed with `Arc::ptr_eq`.
/// Operations that turn out to be no-ops leave the allocation untouched.
#[derive(Debug, Clone)]
pub struct FieldList {
    fields: Arc<Vec<FieldDefinition>>,
    revision: u64,
}

impl Default for FieldList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for FieldList {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl FieldList {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields: Arc::new(fields), revision: 0 }
    }

    /// The two fields every new form starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            FieldDefinition::new(FieldId::new("f-1"), FieldKind::ShortText)
                .with_label("Your name")
                .required(),
            FieldDefinition::new(FieldId::new("f-2"), FieldKind::LongText).with_label("Message"),
        ])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }

    pub fn snapshot(&self) -> Arc<Vec<FieldDefinition>> {
        Arc::clone(&self.fields)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn index_of(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn ids(&self) -> Vec<FieldId> {
        self.fields.iter().map(|f| f.id().clone()).collect()
    }

    /// Inserts a new field of `kind` at `at` (clamped to `0..=len`), or at
    /// the end when no index is given. Returns the new field's id.
    pub fn add_field(&mut self, kind: FieldKind, at: Option<usize>) -> FieldId {
        let mut id = FieldId::generate();
        while self.contains(&id) {
            id = FieldId::generate();
        }

        let index = at.map_or(self.len(), |i| i.min(self.len()));
        let mut next = self.fields.as_ref().clone();
        next.insert(index, FieldDefinition::new(id.clone(), kind));
        self.commit(next);

        debug!(%id, %kind, index, "field added");
        id
    }

    pub fn update_field(&mut self, id: &FieldId, patch: FieldPatch) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if patch.is_empty() {
            return false;
        }

        let mut next = self.fields.as_ref().clone();
        next[index].apply(patch);
        self.commit(next);
        true
    }

    pub fn remove_field(&mut self, id: &FieldId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let mut next = self.fields.as_ref().clone();
        next.remove(index);
        self.commit(next);

        debug!(%id, index, "field removed");
        true
    }

    /// Moves the field at `old_index` to `new_index`, keeping the relative
    /// order of the rest. `new_index` is clamped to the last position; an
    /// out-of-range `old_index` or an unchanged position is a no-op.
    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> bool {
        if old_index >= self.len() {
            return false;
        }
        let new_index = new_index.min(self.len() - 1);
        if old_index == new_index {
            return false;
        }

        let mut next = self.fields.as_ref().clone();
        let moved = next.remove(old_index);
        next.insert(new_index, moved);
        self.commit(next);

        debug!(old_index, new_index, "field moved");
        true
    }

    fn commit(&mut self, next: Vec<FieldDefinition>) {
        self.fields = Arc::new(next);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(list: &FieldList) -> Vec<FieldKind> {
        list.iter().map(|f| f.kind()).collect()
    }

    #[test]
    fn seeded_form() {
        let list = FieldList::seeded();
        assert_eq!(list.len(), 2);
        assert_eq!(list.fields()[0].label, "Your name");
        assert!(list.fields()[0].required);
        assert_eq!(list.fields()[1].kind(), FieldKind::LongText);
    }

    #[test]
    fn add_appends_by_default_and_clamps_index() {
        let mut list = FieldList::seeded();
        let appended = list.add_field(FieldKind::Divider, None);
        assert_eq!(list.index_of(&appended), Some(2));

        let clamped = list.add_field(FieldKind::Image, Some(99));
        assert_eq!(list.index_of(&clamped), Some(3));

        let front = list.add_field(FieldKind::Dropdown, Some(0));
        assert_eq!(list.index_of(&front), Some(0));
        assert_eq!(list.get(&front).unwrap().label, "Dropdown");
    }

    #[test]
    fn mutation_replaces_allocation() {
        let mut list = FieldList::seeded();
        let before = list.snapshot();
        list.add_field(FieldKind::ShortText, None);
        assert!(!Arc::ptr_eq(&before, &list.snapshot()));
        assert_eq!(list.revision(), 1);
        assert_eq!(before.len(), 2);
    }

    #[test]
    fn noops_keep_allocation() {
        let mut list = FieldList::seeded();
        let before = list.snapshot();

        assert!(!list.reorder(1, 1));
        assert!(!list.reorder(5, 0));
        assert!(!list.remove_field(&FieldId::new("missing")));
        assert!(!list.update_field(&FieldId::new("missing"), FieldPatch::label("x")));

        assert!(Arc::ptr_eq(&before, &list.snapshot()));
        assert_eq!(list.revision(), 0);
    }

    #[test]
    fn reorder_moves_between_neighbours() {
        let mut list = FieldList::seeded();
        list.add_field(FieldKind::Divider, None);

        assert!(list.reorder(0, 2));
        assert_eq!(
            kinds(&list),
            vec![FieldKind::LongText, FieldKind::Divider, FieldKind::ShortText]
        );

        // Past-the-end target clamps to the last slot.
        assert!(list.reorder(0, 10));
        assert_eq!(
            kinds(&list),
            vec![FieldKind::Divider, FieldKind::ShortText, FieldKind::LongText]
        );
    }

    #[test]
    fn update_changes_label_only() {
        let mut list = FieldList::seeded();
        let id = FieldId::new("f-2");
        assert!(list.update_field(&id, FieldPatch::label("Comments")));

        let field = list.get(&id).unwrap();
        assert_eq!(field.label, "Comments");
        assert_eq!(field.kind(), FieldKind::LongText);
        assert_eq!(field.id(), &id);
    }

    #[test]
    fn remove_drops_entry() {
        let mut list = FieldList::seeded();
        assert!(list.remove_field(&FieldId::new("f-1")));
        assert_eq!(list.ids(), vec![FieldId::new("f-2")]);
    }

    fn any_kind() -> impl Strategy<Value = FieldKind> {
        (0..FieldKind::ALL.len()).prop_map(|i| FieldKind::ALL[i])
    }

    proptest! {
        #[test]
        fn additions_grow_length(ops in prop::collection::vec((any_kind(), prop::option::of(0usize..20)), 0..30)) {
            let mut list = FieldList::seeded();
            for (kind, at) in &ops {
                list.add_field(*kind, *at);
            }
            prop_assert_eq!(list.len(), ops.len() + 2);

            let mut ids = list.ids();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), list.len());
        }

        #[test]
        fn reorder_preserves_ids(extra in 0usize..8, from in 0usize..12, to in 0usize..12) {
            let mut list = FieldList::seeded();
            for _ in 0..extra {
                list.add_field(FieldKind::ShortText, None);
            }
            let mut before = list.ids();
            list.reorder(from, to);
            let mut after = list.ids();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn reorder_same_index_is_identity(extra in 0usize..5, i in 0usize..8) {
            let mut list = FieldList::seeded();
            for _ in 0..extra {
                list.add_field(FieldKind::Checkboxes, None);
            }
            let before = list.clone();
            prop_assert!(!list.reorder(i, i));
            prop_assert_eq!(before, list);
        }

        #[test]
        fn update_never_touches_identity(label in ".{0,12}", required in any::<bool>()) {
            let mut list = FieldList::seeded();
            let id = FieldId::new("f-1");
            list.update_field(&id, FieldPatch { label: Some(label.clone()), required: Some(required), options: None });
            let field = list.get(&id).unwrap();
            prop_assert_eq!(field.id(), &id);
            prop_assert_eq!(field.kind(), FieldKind::ShortText);
            prop_assert_eq!(&field.label, &label);
        }
    }
}
