//! Boolean settings mirrored between a checkbox and durable storage.
//!
//! At startup the stored value is authoritative and is pushed onto the
//! checkbox. After that the checkbox is authoritative and every change is
//! written straight back to storage.

use crate::events::{ChangeEvent, EventHandler};
use log::debug;
use std::rc::Rc;

/// String-keyed, string-valued synchronous storage.
///
/// Implementations must not fail the caller: an unavailable backend reads as
/// absent and drops writes.
pub trait SettingStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<T: SettingStore + ?Sized> SettingStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// The checked state of a checkbox widget.
pub trait CheckboxView {
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
}

/// Dependent notified with the current setting.
pub type Observer = Box<dyn Fn(bool)>;

pub struct PersistentToggle<S, C> {
    id: String,
    store: S,
    checkbox: C,
    setting: bool,
    observers: Vec<Observer>,
}

impl<S: SettingStore, C: CheckboxView> PersistentToggle<S, C> {
    /// Restore the setting for `id` and notify `observers` once.
    pub fn new(id: impl Into<String>, store: S, checkbox: C, observers: Vec<Observer>) -> Self {
        let id = id.into();
        let displayed = checkbox.is_checked();
        let mut toggle = PersistentToggle {
            id,
            store,
            checkbox,
            setting: displayed,
            observers,
        };

        match toggle.store.get(&toggle.id) {
            Some(raw) => toggle.setting = decode(&raw),
            None => toggle.set_setting(displayed),
        }
        if toggle.setting != displayed {
            debug!("restoring #{} to {}", toggle.id, toggle.setting);
            toggle.checkbox.set_checked(toggle.setting);
        }

        toggle.notify();
        toggle
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn setting(&self) -> bool {
        self.setting
    }

    pub fn set_setting(&mut self, value: bool) {
        self.setting = value;
        self.store.set(&self.id, encode(value));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(self.setting);
        }
    }
}

impl<S: SettingStore, C: CheckboxView> EventHandler<ChangeEvent> for PersistentToggle<S, C> {
    fn handle_event(&mut self, event: &ChangeEvent) {
        self.set_setting(event.checked);
        self.notify();
    }
}

fn encode(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn decode(raw: &str) -> bool {
    raw == "1"
}
