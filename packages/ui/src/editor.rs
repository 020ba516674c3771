//! Modal state for the resource pages and local upsert of edited items.
//!
//! Edits never reach the server: a saved form replaces the row it was opened
//! from (keeping that row's id) or appends a new row.

use api::{Ingredient, Recipe, ResourceId};

/// Which modal, if any, is open over a resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Closed,
    View(usize),
    Edit(usize),
    Add,
}

impl Panel {
    pub fn is_open(self) -> bool {
        self != Panel::Closed
    }

    /// Switch a read-only view into its edit form.
    pub fn to_edit(self) -> Panel {
        match self {
            Panel::View(index) => Panel::Edit(index),
            other => other,
        }
    }
}

pub trait Record: Clone + Default {
    fn id(&self) -> Option<&ResourceId>;
    fn set_id(&mut self, id: Option<ResourceId>);
}

impl Record for Ingredient {
    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<ResourceId>) {
        self.id = id;
    }
}

impl Record for Recipe {
    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<ResourceId>) {
        self.id = id;
    }
}

/// The form contents a panel starts with: a copy of the row, or a blank item.
pub fn draft_for<T: Record>(items: &[T], panel: Panel) -> T {
    match panel {
        Panel::View(index) | Panel::Edit(index) => items.get(index).cloned().unwrap_or_default(),
        Panel::Add | Panel::Closed => T::default(),
    }
}

/// Apply a saved form. Returns the index of the stored row.
pub fn commit<T: Record>(items: &mut Vec<T>, panel: Panel, mut draft: T) -> usize {
    if let Panel::Edit(index) = panel {
        if let Some(slot) = items.get_mut(index) {
            draft.set_id(slot.id().cloned());
            *slot = draft;
            return index;
        }
        tracing::warn!("Edited row {} no longer exists, appending", index);
    }
    items.push(draft);
    items.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: i64, english: &str) -> Ingredient {
        Ingredient {
            id: Some(ResourceId::Number(id)),
            english: english.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_edit_replaces_in_place_and_keeps_id() {
        let mut items = vec![named(1, "Salt"), named(2, "Rice")];
        let mut draft = draft_for(&items, Panel::Edit(1));
        draft.english = "Brown rice".into();
        draft.id = None;

        let at = commit(&mut items, Panel::Edit(1), draft);
        assert_eq!(at, 1);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].english, "Brown rice");
        assert_eq!(items[1].id, Some(ResourceId::Number(2)));
    }

    #[test]
    fn test_add_appends() {
        let mut items = vec![named(1, "Salt")];
        let draft = draft_for(&items, Panel::Add);
        assert_eq!(draft, Ingredient::default());

        let at = commit(
            &mut items,
            Panel::Add,
            Ingredient {
                english: "Pepper".into(),
                ..draft
            },
        );
        assert_eq!(at, 1);
        assert_eq!(items[1].english, "Pepper");
        assert_eq!(items[1].id, None);
    }

    #[test]
    fn test_edit_of_missing_row_appends() {
        let mut items: Vec<Recipe> = Vec::new();
        let at = commit(&mut items, Panel::Edit(3), Recipe::default());
        assert_eq!(at, 0);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_panel_transitions() {
        assert!(!Panel::Closed.is_open());
        assert_eq!(Panel::View(2).to_edit(), Panel::Edit(2));
        assert_eq!(Panel::Add.to_edit(), Panel::Add);
    }
}
