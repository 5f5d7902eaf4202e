//! Selection helpers shared by list widgets.
//!
//! The owner of a list keeps a [`ListSelection`] in a signal and hands the
//! widget a [`ListActions`] bundle built from it. The widget only reads the
//! selection and reports toggles back.

use leptos::prelude::*;

/// Selected row ids, in the order they were checked
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSelection {
    selected: Vec<String>,
}

impl ListSelection {
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_checked(id) {
            self.selected.retain(|s| s != id);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Clear the selection when every id in `ids` is already checked,
    /// otherwise check all of them
    pub fn toggle_all(&mut self, ids: &[String]) {
        let all_checked = !ids.is_empty() && ids.iter().all(|id| self.is_checked(id));
        if all_checked {
            self.reset();
        } else {
            self.selected = ids.to_vec();
        }
    }

    /// Drop an id that no longer exists in the list
    pub fn forget(&mut self, id: &str) {
        self.selected.retain(|s| s != id);
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }
}

/// Состояние чекбокса "выбрать все" в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

pub fn header_checkbox_state(total: usize, selected: usize) -> CheckboxState {
    if total == 0 || selected == 0 {
        CheckboxState::Unchecked
    } else if selected >= total {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Selection state and handlers passed to a list widget
#[derive(Clone)]
pub struct ListActions {
    pub selected: Signal<Vec<String>>,
    pub on_toggle: Callback<String>,
    pub on_toggle_all: Callback<Vec<String>>,
    /// Bulk actions rendered above the list while something is selected
    pub toolbar: Option<ViewFn>,
}

impl ListActions {
    pub fn from_selection(selection: RwSignal<ListSelection>, toolbar: Option<ViewFn>) -> Self {
        Self {
            selected: Signal::derive(move || selection.with(|s| s.selected.clone())),
            on_toggle: Callback::new(move |id: String| selection.update(|s| s.toggle(&id))),
            on_toggle_all: Callback::new(move |ids: Vec<String>| {
                selection.update(|s| s.toggle_all(&ids))
            }),
            toolbar,
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.selected.with(|s| s.iter().any(|x| x == id))
    }

    pub fn selected_count(&self) -> Signal<usize> {
        let selected = self.selected;
        Signal::derive(move || selected.with(Vec::len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_toggle() {
        let mut selection = ListSelection::default();
        selection.toggle("a");
        selection.toggle("b");
        assert!(selection.is_checked("a"));
        assert_eq!(selection.selected(), ids(&["a", "b"]).as_slice());

        selection.toggle("a");
        assert!(!selection.is_checked("a"));
        assert_eq!(selection.selected(), ids(&["b"]).as_slice());
    }

    #[test]
    fn test_toggle_all() {
        let all = ids(&["a", "b", "c"]);
        let mut selection = ListSelection::default();
        selection.toggle("b");

        selection.toggle_all(&all);
        assert_eq!(selection.selected(), all.as_slice());

        selection.toggle_all(&all);
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn test_toggle_all_on_empty_list() {
        let mut selection = ListSelection::default();
        selection.toggle_all(&[]);
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn test_forget() {
        let mut selection = ListSelection::default();
        selection.toggle_all(&ids(&["a", "b"]));
        selection.forget("a");
        assert_eq!(selection.selected(), ids(&["b"]).as_slice());
    }

    #[test]
    fn test_header_checkbox_state() {
        assert_eq!(header_checkbox_state(0, 0), CheckboxState::Unchecked);
        assert_eq!(header_checkbox_state(3, 0), CheckboxState::Unchecked);
        assert_eq!(header_checkbox_state(3, 1), CheckboxState::Indeterminate);
        assert_eq!(header_checkbox_state(3, 3), CheckboxState::Checked);
    }

    #[test]
    fn test_actions_update_selection() {
        let selection = RwSignal::new(ListSelection::default());
        let actions = ListActions::from_selection(selection, None);

        actions.on_toggle.run("a".to_string());
        assert!(actions.is_checked("a"));
        assert_eq!(actions.selected_count().get_untracked(), 1);

        actions.on_toggle_all.run(ids(&["a", "b"]));
        assert_eq!(selection.get_untracked().selected(), ids(&["a", "b"]).as_slice());
    }
}
