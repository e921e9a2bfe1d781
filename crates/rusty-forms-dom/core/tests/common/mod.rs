//! In-memory host used by the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use rusty_forms_dom_core::{
    ErrorPresenter, Form, FormControl, Redraw, RedrawScheduler, ValidityFlags,
};

#[derive(Debug)]
struct ControlState {
    name: String,
    control_type: String,
    value: RefCell<String>,
    disabled: Cell<bool>,
    attributes: RefCell<HashMap<String, String>>,
    validity: Cell<ValidityFlags>,
    custom_validity: RefCell<String>,
    focus_count: Cell<usize>,
}

/// Shared handle to a fake control; clones point at the same control
#[derive(Debug, Clone)]
pub struct FakeControl(Rc<ControlState>);

impl PartialEq for FakeControl {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FakeControl {}

impl FakeControl {
    pub fn new(name: &str, control_type: &str) -> Self {
        Self(Rc::new(ControlState {
            name: name.to_string(),
            control_type: control_type.to_string(),
            value: RefCell::new(String::new()),
            disabled: Cell::new(false),
            attributes: RefCell::new(HashMap::new()),
            validity: Cell::new(ValidityFlags::valid()),
            custom_validity: RefCell::new(String::new()),
            focus_count: Cell::new(0),
        }))
    }

    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_validity(self, validity: ValidityFlags) -> Self {
        self.set_validity(validity);
        self
    }

    pub fn disabled(self) -> Self {
        self.0.disabled.set(true);
        self
    }

    pub fn set_value(&self, value: &str) {
        *self.0.value.borrow_mut() = value.to_string();
    }

    pub fn set_validity(&self, validity: ValidityFlags) {
        self.0.validity.set(validity);
    }

    pub fn custom_validity(&self) -> String {
        self.0.custom_validity.borrow().clone()
    }

    pub fn focus_count(&self) -> usize {
        self.0.focus_count.get()
    }
}

impl FormControl for FakeControl {
    fn name(&self) -> String {
        self.0.name.clone()
    }

    fn control_type(&self) -> String {
        self.0.control_type.clone()
    }

    fn value(&self) -> String {
        self.0.value.borrow().clone()
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled.get()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn validity(&self) -> ValidityFlags {
        self.0.validity.get()
    }

    fn set_custom_validity(&self, message: &str) {
        *self.0.custom_validity.borrow_mut() = message.to_string();
    }

    fn focus(&self) {
        self.0.focus_count.set(self.0.focus_count.get() + 1);
    }
}

#[derive(Debug, Default)]
pub struct FakeForm {
    controls: Vec<FakeControl>,
    novalidate: Cell<bool>,
}

impl FakeForm {
    pub fn new(controls: Vec<FakeControl>) -> Self {
        Self {
            controls,
            novalidate: Cell::new(false),
        }
    }

    pub fn control(&self, name: &str) -> FakeControl {
        self.named_control(name)
            .unwrap_or_else(|| panic!("no control named {name}"))
    }

    pub fn is_novalidate(&self) -> bool {
        self.novalidate.get()
    }
}

impl Form for FakeForm {
    type Control = FakeControl;

    fn controls(&self) -> Vec<FakeControl> {
        self.controls.clone()
    }

    fn disable_native_validation(&self) {
        self.novalidate.set(true);
    }
}

/// Records redraws until the test flushes them, like a frame callback
#[derive(Debug, Clone, Default)]
pub struct QueuedScheduler {
    queue: Rc<RefCell<Vec<Redraw<FakeControl>>>>,
}

impl QueuedScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs every pending redraw in scheduling order
    pub fn flush(&self, presenter: &FakePresenter) {
        let redraws: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for redraw in &redraws {
            redraw.apply(presenter);
        }
    }
}

impl RedrawScheduler<FakeControl> for QueuedScheduler {
    fn schedule(&self, redraw: Redraw<FakeControl>) {
        self.queue.borrow_mut().push(redraw);
    }
}

/// Rendered error lists keyed by control name
#[derive(Debug, Default)]
pub struct FakePresenter {
    lists: RefCell<HashMap<String, (String, Vec<String>)>>,
    removals: Cell<usize>,
}

impl FakePresenter {
    /// Items of the list rendered after `name`, if any
    pub fn rendered(&self, name: &str) -> Option<Vec<String>> {
        self.lists.borrow().get(name).map(|(_, items)| items.clone())
    }

    pub fn marker(&self, name: &str) -> Option<String> {
        self.lists.borrow().get(name).map(|(marker, _)| marker.clone())
    }

    pub fn removals(&self) -> usize {
        self.removals.get()
    }
}

impl ErrorPresenter<FakeControl> for FakePresenter {
    fn remove_error_list(&self, control: &FakeControl, marker: &str) {
        let mut lists = self.lists.borrow_mut();
        let name = control.name();
        if lists.get(&name).map(|(m, _)| m == marker).unwrap_or(false) {
            lists.remove(&name);
            self.removals.set(self.removals.get() + 1);
        }
    }

    fn insert_error_list(&self, control: &FakeControl, marker: &str, errors: &[String]) {
        self.lists
            .borrow_mut()
            .insert(control.name(), (marker.to_string(), errors.to_vec()));
    }
}
