use std::cell::RefCell;
use std::rc::Rc;

use super::{FieldHandle, FieldKind, FormHandle, FormSnapshot, normalize_value};

#[derive(Debug)]
struct FieldState {
    name: String,
    kind: FieldKind,
    required: bool,
    label: String,
    value: Option<String>,
    baseline: Option<String>,
}

/// Headless field backed by shared in-memory state.
///
/// Clones share the same state, so the form and the controller can each hold a
/// handle to one field.
#[derive(Debug, Clone)]
pub struct MemoryField {
    state: Rc<RefCell<FieldState>>,
}

impl MemoryField {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            state: Rc::new(RefCell::new(FieldState {
                name: name.into(),
                kind,
                required: false,
                label: String::new(),
                value: None,
                baseline: None,
            })),
        }
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.state.borrow_mut().required = true;
        self
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.state.borrow().label.clone()
    }

    /// Simulates the user typing `value` into the field.
    ///
    /// Only the value changes; notifying the controller with
    /// `RangeEvent::BoundEdited` is the caller's job, as it is for a real
    /// widget's change signal.
    pub fn edit(&self, value: Option<&str>) {
        self.state.borrow_mut().value = normalize_value(value);
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        let state = self.state.borrow();
        state.value != state.baseline
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        let state = self.state.borrow();
        state.kind.accepts(state.value.as_deref(), state.required)
    }

    fn restore(&self, value: Option<&str>) {
        let mut state = self.state.borrow_mut();
        state.value = normalize_value(value);
        state.baseline = state.value.clone();
    }

    fn mark_clean(&self) {
        let mut state = self.state.borrow_mut();
        state.baseline = state.value.clone();
    }
}

impl FieldHandle for MemoryField {
    fn get(&self) -> Option<String> {
        self.state.borrow().value.clone()
    }

    fn set(&mut self, value: Option<&str>) {
        self.state.borrow_mut().value = normalize_value(value);
    }

    fn set_label(&mut self, text: &str) {
        self.state.borrow_mut().label = text.to_owned();
    }
}

/// Headless form aggregating [`MemoryField`]s in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    fields: Vec<MemoryField>,
}

impl MemoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field and returns a handle sharing its state.
    pub fn add_field(&mut self, name: impl Into<String>, kind: FieldKind) -> MemoryField {
        let field = MemoryField::new(name, kind);
        self.fields.push(field.clone());
        field
    }

    /// Registers an existing handle.
    pub fn attach(&mut self, field: &MemoryField) {
        self.fields.push(field.clone());
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&MemoryField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    #[must_use]
    pub fn fields(&self) -> &[MemoryField] {
        &self.fields
    }
}

impl FormHandle for MemoryForm {
    fn get(&self) -> FormSnapshot {
        self.fields
            .iter()
            .filter_map(|field| field.get().map(|value| (field.name(), value)))
            .collect()
    }

    fn set(&mut self, data: Option<&FormSnapshot>) {
        for field in &self.fields {
            let value = data.and_then(|data| data.get(&field.name()));
            field.restore(value.map(String::as_str));
        }
    }

    fn is_dirty(&self) -> bool {
        self.fields.iter().any(MemoryField::is_dirty)
    }

    fn clear_dirty(&mut self) {
        for field in &self.fields {
            field.mark_clean();
        }
    }

    fn validate(&self) -> bool {
        // Every field is checked, mirroring a form that flags each invalid input.
        self.fields
            .iter()
            .fold(true, |valid, field| field.is_valid() && valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_bounds() -> (MemoryForm, MemoryField, MemoryField) {
        let mut form = MemoryForm::new();
        let from = form.add_field("from", FieldKind::DateTime);
        let to = form.add_field("to", FieldKind::DateTime);
        (form, from, to)
    }

    #[test]
    fn snapshot_skips_empty_fields_and_keeps_order() {
        let (form, mut from, mut to) = form_with_bounds();
        to.set(Some("2024-01-02T00:00:00Z"));
        from.set(Some("2024-01-01T00:00:00Z"));
        let keys: Vec<_> = form.get().keys().cloned().collect();
        assert_eq!(keys, vec!["from".to_owned(), "to".to_owned()]);

        from.set(Some(""));
        assert!(!form.get().contains_key("from"));
    }

    #[test]
    fn restore_sets_clean_baseline() {
        let (mut form, from, to) = form_with_bounds();
        let mut data = FormSnapshot::new();
        data.insert("from".to_owned(), "2024-01-01T00:00:00Z".to_owned());
        form.set(Some(&data));

        assert_eq!(from.get().as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(to.get(), None);
        assert!(!form.is_dirty());

        from.edit(Some("2024-01-05T00:00:00Z"));
        assert!(form.is_dirty());
        form.clear_dirty();
        assert!(!form.is_dirty());

        form.set(None);
        assert_eq!(from.get(), None);
        assert!(!form.is_dirty());
    }

    #[test]
    fn editing_back_to_baseline_is_clean() {
        let (form, from, _) = form_with_bounds();
        from.edit(Some("2024-01-01T00:00:00Z"));
        assert!(form.is_dirty());
        from.edit(None);
        assert!(!form.is_dirty());
    }

    #[test]
    fn validation_covers_every_field() {
        let mut form = MemoryForm::new();
        let from = MemoryField::new("from", FieldKind::DateTime).required();
        form.attach(&from);
        assert!(!form.validate());

        from.edit(Some("2024-01-01T00:00:00Z"));
        assert!(form.validate());

        from.edit(Some("yesterday"));
        assert!(!form.validate());
        assert_eq!(form.field("from").map(MemoryField::is_valid), Some(false));
    }
}
