//! Yew view components for the Morse pad.
//!
//! These only render and forward DOM events; persistence and pulse generation
//! live in the controller.

use gloo_timers::callback::Timeout;
use morse_pulse::config::RIPPLE_MS;
use morse_pulse::pulse::PulseProfile;
use morse_pulse::ripple::{random_color, Bounds, RippleAction, Ripples};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// A letter button that reports its Morse code when pressed.
#[derive(Properties, PartialEq)]
pub struct MorseButtonProps {
    pub letter: char,
    pub code: &'static str,
    pub onpress: Callback<String>,
}

#[function_component(MorseButton)]
pub fn morse_button(props: &MorseButtonProps) -> Html {
    let ripples = use_reducer(Ripples::default);

    let onclick = {
        let ripples = ripples.clone();
        let onpress = props.onpress.clone();
        let code = props.code;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(target) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                let rect = target.get_bounding_client_rect();
                ripples.dispatch(RippleAction::Spawn {
                    x: e.client_x() as f64,
                    y: e.client_y() as f64,
                    bounds: Bounds {
                        left: rect.left(),
                        top: rect.top(),
                        width: rect.width(),
                        height: rect.height(),
                    },
                    color: random_color(),
                });
                let dispatcher = ripples.dispatcher();
                Timeout::new(RIPPLE_MS, move || dispatcher.dispatch(RippleAction::ExpireOldest)).forget();
            }
            onpress.emit(code.to_string());
        })
    };

    html! {
        <button class="morse-button" value={props.code} {onclick}>
            <span class="letter">{ props.letter.to_string() }</span>
            { for ripples.items.iter().map(|r| html! {
                <div key={r.id.to_string()} class="ripple-effect" style={r.style()}></div>
            }) }
        </button>
    }
}

/// A labelled checkbox; emits its id and new state on change.
#[derive(Properties, PartialEq)]
pub struct ToggleBoxProps {
    pub id: &'static str,
    pub label: &'static str,
    pub checked: bool,
    pub onchange: Callback<(&'static str, bool)>,
}

#[function_component(ToggleBox)]
pub fn toggle_box(props: &ToggleBoxProps) -> Html {
    let id = props.id;
    let onchange = props.onchange.reform(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (id, input.checked())
    });

    html! {
        <label class="toggle" for={id}>
            <input type="checkbox" id={id} checked={props.checked} {onchange} />
            { props.label }
        </label>
    }
}

/// Picker for the pulse timing profile.
#[derive(Properties, PartialEq)]
pub struct ProfileSelectProps {
    pub selected: PulseProfile,
    pub onchange: Callback<PulseProfile>,
}

#[function_component(ProfileSelect)]
pub fn profile_select(props: &ProfileSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(profile) = PulseProfile::from_key(&select.value()) {
                onchange.emit(profile);
            }
        })
    };

    html! {
        <label class="profile">
            { "Timing" }
            <select {onchange}>
                { for PulseProfile::ALL.iter().map(|p| html! {
                    <option value={p.key()} selected={*p == props.selected}>{ p.to_string() }</option>
                }) }
            </select>
        </label>
    }
}
