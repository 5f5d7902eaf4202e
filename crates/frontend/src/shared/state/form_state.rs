//! Editing state of a single form: initial values plus the in-progress copy.
//!
//! The page keeps a `FormState` inside a signal; sections mutate it through
//! `change`, and the save bar reads `has_changed`.

use contracts::shared::UserError;

#[derive(Clone, Debug, PartialEq)]
pub struct FormState<T> {
    initial: T,
    data: T,
}

impl<T: Clone + PartialEq> FormState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial.clone(),
            initial,
        }
    }

    /// Current (possibly edited) values
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Apply a user edit to the in-progress values
    pub fn change(&mut self, edit: impl FnOnce(&mut T)) {
        edit(&mut self.data);
    }

    pub fn has_changed(&self) -> bool {
        self.data != self.initial
    }

    /// New data arrived: `merge` moves the changed loaded values into the
    /// in-progress copy, then `initial` becomes the new baseline.
    pub fn rebase(&mut self, initial: T, merge: impl FnOnce(&mut T, &T, &T)) {
        merge(&mut self.data, &self.initial, &initial);
        self.initial = initial;
    }
}

/// First error message reported for `field`
pub fn field_error<'a>(errors: &'a [UserError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.is_for(field))
        .map(|e| e.message.as_str())
}

/// Messages that are not bound to an input
pub fn non_field_errors(errors: &[UserError]) -> Vec<String> {
    errors
        .iter()
        .filter(|e| e.field.is_none())
        .map(|e| e.message.clone())
        .collect()
}

/// Ask before leaving a form with unsaved changes.
///
/// Returns `true` when navigation may proceed.
pub fn confirm_leave(has_changed: bool) -> bool {
    if !has_changed {
        return true;
    }
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message("Есть несохранённые изменения. Уйти со страницы?")
                .ok()
        })
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Default)]
    struct Sample {
        name: String,
        flag: bool,
    }

    #[test]
    fn test_change_marks_dirty() {
        let mut state = FormState::new(Sample::default());
        assert!(!state.has_changed());

        state.change(|s| s.name = "Shirt".to_string());
        assert!(state.has_changed());
        assert_eq!(state.data().name, "Shirt");
    }

    #[test]
    fn test_reverting_edit_is_not_a_change() {
        let mut state = FormState::new(Sample::default());
        state.change(|s| s.flag = true);
        state.change(|s| s.flag = false);
        assert!(!state.has_changed());
    }

    fn take_name(data: &mut Sample, old: &Sample, new: &Sample) {
        if old.name != new.name {
            data.name = new.name.clone();
        }
    }

    #[test]
    fn test_rebase_uses_merge() {
        let mut state = FormState::new(Sample::default());
        state.change(|s| s.flag = true);

        let loaded = Sample {
            name: "Loaded".to_string(),
            flag: false,
        };
        state.rebase(loaded, take_name);
        assert_eq!(
            state.data(),
            &Sample {
                name: "Loaded".to_string(),
                flag: true,
            }
        );
        assert!(state.has_changed());
    }

    #[test]
    fn test_rebase_onto_edited_values_is_clean() {
        let mut state = FormState::new(Sample::default());
        state.change(|s| s.name = "Saved".to_string());

        state.rebase(
            Sample {
                name: "Saved".to_string(),
                flag: false,
            },
            take_name,
        );
        assert!(!state.has_changed());
    }

    #[test]
    fn test_field_errors() {
        let errors = vec![
            UserError::new("Something went wrong"),
            UserError::for_field("name", "This field is required."),
            UserError::for_field("name", "Second message"),
        ];

        assert_eq!(field_error(&errors, "name"), Some("This field is required."));
        assert_eq!(field_error(&errors, "weight"), None);
        assert_eq!(non_field_errors(&errors), vec!["Something went wrong".to_string()]);
    }

    #[test]
    fn test_confirm_leave_without_changes() {
        assert!(confirm_leave(false));
    }
}
