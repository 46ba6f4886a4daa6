//! GTK4 widgets backing the range controller.
//!
//! Widget signals are translated into [`RangeEvent`]s. Writes that originate
//! from the controller run under a shared guard so the resulting `changed`
//! and `notify::selected` signals are not mistaken for user input.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{RangeController, RangeEvent, RangePickerConfig};
use crate::core::{Bound, TimeRangeMode};
use crate::error::PickerResult;
use crate::extensions::{RangeContext, RangeNotification, RangeObserver};
use crate::form::{FieldHandle, FieldKind, FormHandle, FormSnapshot, normalize_value};

pub type GtkRangeController = RangeController<GtkEntryField, GtkRangeForm>;

#[derive(Debug, Clone, Default)]
struct WriteGuard(Rc<Cell<bool>>);

impl WriteGuard {
    fn run<T>(&self, write: impl FnOnce() -> T) -> T {
        let previous = self.0.replace(true);
        let out = write();
        self.0.set(previous);
        out
    }

    fn active(&self) -> bool {
        self.0.get()
    }
}

/// Labeled `gtk::Entry` holding one bound in wire form.
#[derive(Debug, Clone)]
pub struct GtkEntryField {
    name: String,
    container: gtk::Box,
    label: gtk::Label,
    entry: gtk::Entry,
    guard: WriteGuard,
}

impl GtkEntryField {
    fn new(name: &str, guard: WriteGuard) -> Self {
        let container = gtk::Box::new(gtk::Orientation::Vertical, 2);
        let label = gtk::Label::new(None);
        label.set_xalign(0.0);
        let entry = gtk::Entry::new();
        entry.set_placeholder_text(Some("YYYY-MM-DDTHH:mm:ssZ"));
        entry.set_width_chars(22);
        container.append(&label);
        container.append(&entry);
        Self {
            name: name.to_owned(),
            container,
            label,
            entry,
            guard,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.container
    }

    #[must_use]
    pub fn entry(&self) -> &gtk::Entry {
        &self.entry
    }

    fn mark_validity(&self, valid: bool) {
        if valid {
            self.entry.remove_css_class("error");
        } else {
            self.entry.add_css_class("error");
        }
    }
}

impl FieldHandle for GtkEntryField {
    fn get(&self) -> Option<String> {
        let text = self.entry.text();
        normalize_value(Some(text.as_str()))
    }

    fn set(&mut self, value: Option<&str>) {
        let entry = &self.entry;
        self.guard.run(|| entry.set_text(value.unwrap_or_default()));
    }

    fn set_label(&mut self, text: &str) {
        self.label.set_text(text);
    }
}

/// Form over the two bound entries with baseline-based dirty tracking.
#[derive(Debug, Clone)]
pub struct GtkRangeForm {
    fields: Vec<GtkEntryField>,
    baseline: Vec<Option<String>>,
}

impl GtkRangeForm {
    fn new(fields: Vec<GtkEntryField>) -> Self {
        let baseline = fields.iter().map(FieldHandle::get).collect();
        Self { fields, baseline }
    }
}

impl FormHandle for GtkRangeForm {
    fn get(&self) -> FormSnapshot {
        self.fields
            .iter()
            .filter_map(|field| field.get().map(|value| (field.name.clone(), value)))
            .collect()
    }

    fn set(&mut self, data: Option<&FormSnapshot>) {
        for field in &mut self.fields {
            let value = data.and_then(|data| data.get(&field.name)).cloned();
            field.set(value.as_deref());
            field.mark_validity(true);
        }
        self.clear_dirty();
    }

    fn is_dirty(&self) -> bool {
        self.fields
            .iter()
            .zip(&self.baseline)
            .any(|(field, baseline)| field.get() != *baseline)
    }

    fn clear_dirty(&mut self) {
        self.baseline = self.fields.iter().map(FieldHandle::get).collect();
    }

    fn validate(&self) -> bool {
        self.fields.iter().fold(true, |valid, field| {
            let field_valid = FieldKind::DateTime.accepts(field.get().as_deref(), false);
            field.mark_validity(field_valid);
            field_valid && valid
        })
    }
}

/// Keeps the unit selector in sync when the controller changes mode.
struct SelectorSync {
    selector: gtk::DropDown,
    guard: WriteGuard,
}

impl RangeObserver for SelectorSync {
    fn id(&self) -> &str {
        "gtk-unit-selector"
    }

    fn on_event(&mut self, event: RangeNotification, _context: &RangeContext) {
        if let RangeNotification::ModeChanged { current, .. } = event {
            let selector = &self.selector;
            self.guard
                .run(|| selector.set_selected(current.index() as u32));
        }
    }
}

/// Complete picker widget: two bound inputs, step buttons and unit selector.
pub struct GtkRangePicker {
    root: gtk::Box,
    controller: Rc<RefCell<GtkRangeController>>,
}

impl GtkRangePicker {
    pub fn new(config: RangePickerConfig) -> PickerResult<Self> {
        let guard = WriteGuard::default();
        let from = GtkEntryField::new(&config.from_field, guard.clone());
        let to = GtkEntryField::new(&config.to_field, guard.clone());

        let labels: Vec<&str> = TimeRangeMode::ALL.iter().map(|mode| mode.label()).collect();
        let selector = gtk::DropDown::from_strings(&labels);
        let previous = gtk::Button::with_label("<<");
        previous.add_css_class("previous-range");
        let next = gtk::Button::with_label(">>");
        next.add_css_class("next-range");

        let root = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        root.add_css_class("date-range-picker");
        root.append(from.widget());
        root.append(to.widget());
        root.append(&previous);
        root.append(&selector);
        root.append(&next);

        let form = GtkRangeForm::new(vec![from.clone(), to.clone()]);
        let mut controller = RangeController::new(from.clone(), to.clone(), form, config)?;
        controller.register_observer(Box::new(SelectorSync {
            selector: selector.clone(),
            guard: guard.clone(),
        }))?;
        let controller = Rc::new(RefCell::new(controller));

        for (field, bound) in [(&from, Bound::From), (&to, Bound::To)] {
            let controller = Rc::clone(&controller);
            let guard = guard.clone();
            field.entry().connect_changed(move |_| {
                if !guard.active() {
                    dispatch(&controller, RangeEvent::BoundEdited { bound });
                }
            });
        }

        {
            let controller = Rc::clone(&controller);
            let guard = guard.clone();
            selector.connect_selected_notify(move |selector| {
                if guard.active() {
                    return;
                }
                let unit = TimeRangeMode::from_index(selector.selected() as usize)
                    .unwrap_or_default();
                dispatch(&controller, RangeEvent::UnitSelected { unit });
            });
        }

        for (button, delta) in [(&previous, -1), (&next, 1)] {
            let controller = Rc::clone(&controller);
            button.connect_clicked(move |_| {
                dispatch(&controller, RangeEvent::StepRequested { delta });
            });
        }

        Ok(Self { root, controller })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn controller(&self) -> Rc<RefCell<GtkRangeController>> {
        Rc::clone(&self.controller)
    }
}

fn dispatch(controller: &Rc<RefCell<GtkRangeController>>, event: RangeEvent) {
    if let Err(err) = controller.borrow_mut().dispatch(event) {
        warn!(error = %err, ?event, "range picker event rejected");
    }
}
