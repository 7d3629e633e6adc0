//! Morse Pulse: press a letter, feel its Morse code.
//!
//! The page converts Morse symbols into vibration patterns and keeps two
//! persisted settings in sync with their checkboxes. A service worker keeps
//! the static assets available offline.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod cache;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod pulse;
pub mod ripple;
pub mod toggle;
pub mod worker;

#[cfg(test)]
mod testing;

pub use pulse::{generate, PulseProfile, PulseUnit};

/// Pulse pattern for a Morse symbol using the default timing profile.
#[wasm_bindgen(js_name = generatePulseArray)]
pub fn generate_pulse_array(symbol: &str) -> Vec<u32> {
    generate(symbol, PulseProfile::default().unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_generator_uses_default_profile() {
        assert_eq!(generate_pulse_array("-."), vec![450, 45, 150]);
        assert!(generate_pulse_array("").is_empty());
    }
}
