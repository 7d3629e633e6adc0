//! In-memory stand-ins for browser collaborators.

use crate::app::{DisplayPanel, Vibrator};
use crate::toggle::{CheckboxView, SettingStore};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl SettingStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Storage that is never available.
pub struct NullStore;

impl SettingStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

#[derive(Clone)]
pub struct MemoryCheckbox(Rc<Cell<bool>>);

impl MemoryCheckbox {
    pub fn new(checked: bool) -> Self {
        MemoryCheckbox(Rc::new(Cell::new(checked)))
    }
}

impl CheckboxView for MemoryCheckbox {
    fn is_checked(&self) -> bool {
        self.0.get()
    }

    fn set_checked(&self, checked: bool) {
        self.0.set(checked)
    }
}

#[derive(Clone, Default)]
pub struct RecordingVibrator {
    pub patterns: Rc<RefCell<Vec<Vec<u32>>>>,
}

impl Vibrator for RecordingVibrator {
    fn vibrate(&self, pattern: &[u32]) {
        self.patterns.borrow_mut().push(pattern.to_vec());
    }
}

#[derive(Default)]
pub struct RecordingPanel {
    pub code: RefCell<String>,
    pub visible: Cell<Option<bool>>,
}

impl DisplayPanel for RecordingPanel {
    fn show_code(&self, code: &str) {
        *self.code.borrow_mut() = code.to_string();
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(Some(visible));
    }
}
