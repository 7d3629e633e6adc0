//! Main module for the Morse Pulse page using Yew.
//! Renders the pad, then binds the controller to the rendered checkboxes.

use log::error;
use morse_pulse::{
    app::{Controls, DisplayPanel, MorseCodeApp},
    config::*,
    dom::{register_service_worker, BrowserStorage, DomCheckbox, NavigatorVibrator},
    error::AppError,
    events::{ChangeEvent, ClickEvent, EventHandler},
    pulse::PulseProfile,
};
use std::rc::Rc;
use yew::prelude::*;

mod components;

use components::{MorseButton, ProfileSelect, ToggleBox};

type PageApp = MorseCodeApp<Rc<BrowserStorage>, DomCheckbox, NavigatorVibrator, PanelState>;

/// Display panel backed by component state.
struct PanelState {
    code: UseStateHandle<String>,
    visible: UseStateHandle<bool>,
}

impl DisplayPanel for PanelState {
    fn show_code(&self, code: &str) {
        self.code.set(code.to_string());
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

/// Bind the controller to the checkboxes already in the document.
fn build_app(panel: PanelState) -> Result<PageApp, AppError> {
    let controls = Controls {
        vibrate: DomCheckbox::bind(VIBRATE_TOGGLE_ID)?,
        display_code: DomCheckbox::bind(DISPLAY_CODE_TOGGLE_ID)?,
    };
    Ok(MorseCodeApp::new(
        Rc::new(BrowserStorage::local()),
        controls,
        NavigatorVibrator,
        Rc::new(panel),
    ))
}

#[function_component(Main)]
fn main_component() -> Html {
    let code = use_state(String::new);
    let visible = use_state(|| DEFAULT_DISPLAY_CODE);
    let vibrate_on = use_state(|| DEFAULT_VIBRATE);
    let profile = use_state(PulseProfile::default);
    let app = use_mut_ref(|| None::<PageApp>);

    // The checkboxes exist only after the first render.
    {
        let app = app.clone();
        let panel = PanelState {
            code: code.clone(),
            visible: visible.clone(),
        };
        let vibrate_on = vibrate_on.clone();
        let profile = profile.clone();
        use_effect_with((), move |_| {
            match build_app(panel) {
                Ok(built) => {
                    vibrate_on.set(built.vibrate_enabled());
                    profile.set(built.profile());
                    *app.borrow_mut() = Some(built);
                }
                Err(e) => error!("cannot start Morse pad: {}", e),
            }
            || ()
        });
    }

    let on_press = {
        let app = app.clone();
        Callback::from(move |value: String| {
            if let Some(app) = app.borrow_mut().as_mut() {
                app.handle_event(&ClickEvent { value });
            }
        })
    };

    let on_toggle = {
        let app = app.clone();
        let vibrate_on = vibrate_on.clone();
        Callback::from(move |(id, checked): (&'static str, bool)| {
            let mut slot = app.borrow_mut();
            let Some(app) = slot.as_mut() else {
                return;
            };
            if let Some(toggle) = app.toggle_mut(id) {
                toggle.handle_event(&ChangeEvent { checked });
            }
            vibrate_on.set(app.vibrate_enabled());
        })
    };

    let on_profile = {
        let app = app.clone();
        let profile = profile.clone();
        Callback::from(move |selected: PulseProfile| {
            if let Some(app) = app.borrow_mut().as_mut() {
                app.select_profile(selected);
            }
            profile.set(selected);
        })
    };

    let panel_style = if *visible {
        "visibility: visible"
    } else {
        "visibility: hidden"
    };

    html! {
        <div class="morse-pad">
            <header>
                <h1>{ "Morse Pulse" }</h1>
            </header>
            <div class="settings">
                <ToggleBox
                    id={VIBRATE_TOGGLE_ID}
                    label="Vibrate"
                    checked={*vibrate_on}
                    onchange={on_toggle.clone()}
                />
                <ToggleBox
                    id={DISPLAY_CODE_TOGGLE_ID}
                    label="Display code"
                    checked={*visible}
                    onchange={on_toggle}
                />
                <ProfileSelect selected={*profile} onchange={on_profile} />
            </div>
            <div id={DISPLAY_PANEL_ID} class="code" style={panel_style}>{ (*code).clone() }</div>
            <div id={BUTTONS_ID} class="buttons">
                { for ALPHABET.iter().map(|&(letter, morse)| html! {
                    <MorseButton key={letter.to_string()} {letter} code={morse} onpress={on_press.clone()} />
                }) }
            </div>
        </div>
    }
}

/// Entry point: installs logging, registers the offline worker and renders.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    wasm_bindgen_futures::spawn_local(register_service_worker());
    yew::Renderer::<Main>::new().render();
}
