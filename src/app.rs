//! Page controller: owns the toggles and turns button presses into pulses.

use crate::config::{DISPLAY_CODE_TOGGLE_ID, PROFILE_KEY, VIBRATE_TOGGLE_ID};
use crate::events::{ClickEvent, EventHandler};
use crate::pulse::{generate, PulseProfile};
use crate::toggle::{CheckboxView, Observer, PersistentToggle, SettingStore};
use log::{debug, warn};
use std::rc::Rc;

/// Plays a pulse pattern on the device.
pub trait Vibrator {
    fn vibrate(&self, pattern: &[u32]);
}

/// The panel that shows the last pressed code.
pub trait DisplayPanel {
    fn show_code(&self, code: &str);
    fn set_visible(&self, visible: bool);
}

/// Checkboxes the controller binds its settings to.
pub struct Controls<C> {
    pub vibrate: C,
    pub display_code: C,
}

pub struct MorseCodeApp<S, C, V, P> {
    store: S,
    profile: PulseProfile,
    vibrate: PersistentToggle<S, C>,
    display_code: PersistentToggle<S, C>,
    vibrator: V,
    panel: Rc<P>,
}

impl<S, C, V, P> MorseCodeApp<S, C, V, P>
where
    S: SettingStore + Clone,
    C: CheckboxView,
    V: Vibrator,
    P: DisplayPanel + 'static,
{
    pub fn new(store: S, controls: Controls<C>, vibrator: V, panel: Rc<P>) -> Self {
        let profile = restore_profile(&store);
        let vibrate = PersistentToggle::new(VIBRATE_TOGGLE_ID, store.clone(), controls.vibrate, Vec::new());

        let visibility: Observer = {
            let panel = panel.clone();
            Box::new(move |visible| panel.set_visible(visible))
        };
        let display_code = PersistentToggle::new(
            DISPLAY_CODE_TOGGLE_ID,
            store.clone(),
            controls.display_code,
            vec![visibility],
        );

        debug!(
            "controller ready: vibrate={} displayCode={} profile={:?}",
            vibrate.setting(),
            display_code.setting(),
            profile
        );
        MorseCodeApp {
            store,
            profile,
            vibrate,
            display_code,
            vibrator,
            panel,
        }
    }

    /// The toggle bound to the checkbox with this id.
    pub fn toggle_mut(&mut self, id: &str) -> Option<&mut PersistentToggle<S, C>> {
        match id {
            VIBRATE_TOGGLE_ID => Some(&mut self.vibrate),
            DISPLAY_CODE_TOGGLE_ID => Some(&mut self.display_code),
            _ => None,
        }
    }

    pub fn vibrate_enabled(&self) -> bool {
        self.vibrate.setting()
    }

    pub fn display_enabled(&self) -> bool {
        self.display_code.setting()
    }

    pub fn profile(&self) -> PulseProfile {
        self.profile
    }

    pub fn select_profile(&mut self, profile: PulseProfile) {
        self.profile = profile;
        match serde_json::to_string(&profile) {
            Ok(raw) => self.store.set(PROFILE_KEY, &raw),
            Err(e) => warn!("could not save timing profile: {}", e),
        }
    }
}

impl<S, C, V, P> EventHandler<ClickEvent> for MorseCodeApp<S, C, V, P>
where
    S: SettingStore + Clone,
    C: CheckboxView,
    V: Vibrator,
    P: DisplayPanel + 'static,
{
    fn handle_event(&mut self, event: &ClickEvent) {
        let pulses = generate(&event.value, self.profile.unit());
        self.panel.show_code(&event.value);
        if self.vibrate.setting() {
            self.vibrator.vibrate(&pulses);
        }
    }
}

fn restore_profile<S: SettingStore>(store: &S) -> PulseProfile {
    match store.get(PROFILE_KEY) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("ignoring stored timing profile {:?}: {}", raw, e);
            PulseProfile::default()
        }),
        None => PulseProfile::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ChangeEvent;
    use crate::testing::{MemoryCheckbox, MemoryStore, RecordingPanel, RecordingVibrator};

    type TestApp = MorseCodeApp<MemoryStore, MemoryCheckbox, RecordingVibrator, RecordingPanel>;

    fn build(store: &MemoryStore, vibrate: bool, display: bool) -> (TestApp, RecordingVibrator, Rc<RecordingPanel>) {
        let vibrator = RecordingVibrator::default();
        let panel = Rc::new(RecordingPanel::default());
        let controls = Controls {
            vibrate: MemoryCheckbox::new(vibrate),
            display_code: MemoryCheckbox::new(display),
        };
        let app = MorseCodeApp::new(store.clone(), controls, vibrator.clone(), panel.clone());
        (app, vibrator, panel)
    }

    fn press(app: &mut TestApp, code: &str) {
        app.handle_event(&ClickEvent {
            value: code.to_string(),
        });
    }

    #[test]
    fn press_shows_code_and_vibrates() {
        let (mut app, vibrator, panel) = build(&MemoryStore::default(), true, true);
        press(&mut app, ".-");
        assert_eq!(*panel.code.borrow(), ".-");
        assert_eq!(*vibrator.patterns.borrow(), vec![vec![150, 45, 450]]);
    }

    #[test]
    fn vibration_is_gated_by_toggle() {
        let (mut app, vibrator, panel) = build(&MemoryStore::default(), false, true);
        press(&mut app, "-");
        assert_eq!(*panel.code.borrow(), "-");
        assert!(vibrator.patterns.borrow().is_empty());

        app.toggle_mut(VIBRATE_TOGGLE_ID)
            .unwrap()
            .handle_event(&ChangeEvent { checked: true });
        press(&mut app, "-");
        assert_eq!(*vibrator.patterns.borrow(), vec![vec![450]]);
    }

    #[test]
    fn display_toggle_drives_panel_visibility() {
        let store = MemoryStore::default();
        let (mut app, _, panel) = build(&store, true, true);
        assert_eq!(panel.visible.get(), Some(true));

        app.toggle_mut(DISPLAY_CODE_TOGGLE_ID)
            .unwrap()
            .handle_event(&ChangeEvent { checked: false });
        assert_eq!(panel.visible.get(), Some(false));
        assert!(!app.display_enabled());

        // Stored "hidden" wins over a checked box on the next load.
        let (_, _, panel) = build(&store, true, true);
        assert_eq!(panel.visible.get(), Some(false));
    }

    #[test]
    fn unknown_toggle_id_is_none() {
        let (mut app, _, _) = build(&MemoryStore::default(), true, true);
        assert!(app.toggle_mut("sound").is_none());
    }

    #[test]
    fn selected_profile_is_used_and_persisted() {
        let store = MemoryStore::default();
        let (mut app, vibrator, _) = build(&store, true, true);
        assert_eq!(app.profile(), PulseProfile::Relaxed);

        app.select_profile(PulseProfile::Standard);
        press(&mut app, "..");
        assert_eq!(*vibrator.patterns.borrow(), vec![vec![100, 30, 100]]);

        let (app, _, _) = build(&store, true, true);
        assert_eq!(app.profile(), PulseProfile::Standard);
    }

    #[test]
    fn corrupt_profile_falls_back_to_default() {
        let store = MemoryStore::default();
        store.set(PROFILE_KEY, "not json");
        let (app, _, _) = build(&store, true, true);
        assert_eq!(app.profile(), PulseProfile::default());
        assert!(app.vibrate_enabled());
    }
}
