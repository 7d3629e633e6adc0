//! Application-level configuration constants.

// Settings bound to checkboxes
pub const VIBRATE_TOGGLE_ID: &str = "vibrate";
pub const DISPLAY_CODE_TOGGLE_ID: &str = "displayCode";
pub const DEFAULT_VIBRATE: bool = true;
pub const DEFAULT_DISPLAY_CODE: bool = true;
pub const PROFILE_KEY: &str = "profile";

// Page elements
pub const BUTTONS_ID: &str = "buttons";
pub const DISPLAY_PANEL_ID: &str = "code";

// Offline cache
pub const CACHE_NAMESPACE: &str = "morse-code";
pub const CACHE_VERSION: &str = "v1.0.0";
pub const STATIC_ASSETS: &[&str] = &[
    "./style.css",
    "./",
    "./morse_pulse.js",
    "./morse_pulse_bg.wasm",
    "./manifest.json",
    "./sw_loader.js",
    "./sw.js",
    "./sw_bg.wasm",
    "images/morse-code.png",
    "images/morse-code.svg",
];
pub const SERVICE_WORKER_SCRIPT: &str = "./sw_loader.js";
pub const SERVICE_WORKER_SCOPE: &str = "./";

// Button press feedback
pub const RIPPLE_MS: u32 = 1000;
pub const RIPPLE_COLORS: &[&str] = &["#2196f3", "#4caf50", "#ffeb3b", "#ff9800", "#9c27b0"];

/// Letters and digits offered as buttons, with their Morse code.
pub const ALPHABET: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const INDEX: &str = include_str!("../index.html");
    const TRUNK: &str = include_str!("../Trunk.toml");

    /// Names trunk gives the wasm-bindgen output of each binary.
    fn is_build_output(asset: &str) -> bool {
        ["morse_pulse", "sw"]
            .iter()
            .any(|bin| asset == format!("./{}.js", bin) || asset == format!("./{}_bg.wasm", bin))
    }

    #[test]
    fn static_assets_ship_with_the_page() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let missing: Vec<&str> = STATIC_ASSETS
            .iter()
            .copied()
            .filter(|a| *a != "./" && !is_build_output(a))
            .filter(|a| !root.join(a.trim_start_matches("./")).is_file())
            .collect();
        assert!(missing.is_empty(), "missing assets: {:?}", missing);
    }

    #[test]
    fn static_assets_are_copied_into_dist() {
        for file in ["style.css", "manifest.json", "sw_loader.js"] {
            assert!(
                INDEX.contains(&format!("rel=\"copy-file\" href=\"{}\"", file)),
                "{} is not copied",
                file
            );
        }
        assert!(INDEX.contains("rel=\"copy-dir\" href=\"images\""));
    }

    #[test]
    fn build_outputs_keep_stable_names() {
        assert!(TRUNK.contains("filehash = false"));
        for bin in ["morse_pulse", "sw"] {
            assert!(STATIC_ASSETS.contains(&format!("./{}.js", bin).as_str()));
            assert!(STATIC_ASSETS.contains(&format!("./{}_bg.wasm", bin).as_str()));
            assert!(INDEX.contains(&format!("data-bin=\"{}\"", bin)));
        }
        assert!(STATIC_ASSETS.contains(&SERVICE_WORKER_SCRIPT));
    }
}
