//! Morse symbol to vibration pattern conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Durations in milliseconds for a dot, a dash and the gap between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseUnit {
    pub dot: u32,
    pub dash: u32,
    pub space: u32,
}

/// Named timing profiles the user can pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PulseProfile {
    Standard,
    #[default]
    Relaxed,
}

impl PulseProfile {
    pub const ALL: [PulseProfile; 2] = [PulseProfile::Standard, PulseProfile::Relaxed];

    pub fn unit(self) -> PulseUnit {
        match self {
            PulseProfile::Standard => PulseUnit {
                dot: 100,
                dash: 300,
                space: 30,
            },
            PulseProfile::Relaxed => PulseUnit {
                dot: 150,
                dash: 450,
                space: 45,
            },
        }
    }

    /// Stable identifier used in form values.
    pub fn key(self) -> &'static str {
        match self {
            PulseProfile::Standard => "standard",
            PulseProfile::Relaxed => "relaxed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for PulseProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        match self {
            PulseProfile::Standard => write!(f, "Standard ({} ms dot)", unit.dot),
            PulseProfile::Relaxed => write!(f, "Relaxed ({} ms dot)", unit.dot),
        }
    }
}

/// Build the pulse array for one Morse symbol.
///
/// Every `-` becomes a dash and anything else a dot, each followed by a gap.
/// The trailing gap is dropped, so `n` symbols yield `2n - 1` values.
pub fn generate(symbol: &str, unit: PulseUnit) -> Vec<u32> {
    let mut pulses = Vec::with_capacity(symbol.len() * 2);
    for c in symbol.chars() {
        pulses.push(if c == '-' { unit.dash } else { unit.dot });
        pulses.push(unit.space);
    }
    pulses.pop();
    pulses
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: PulseUnit = PulseUnit {
        dot: 1,
        dash: 3,
        space: 9,
    };

    #[test]
    fn empty_symbol_yields_no_pulses() {
        assert!(generate("", UNIT).is_empty());
    }

    #[test]
    fn single_dash_has_no_gap() {
        assert_eq!(generate("-", UNIT), vec![3]);
    }

    #[test]
    fn gaps_separate_symbols() {
        assert_eq!(generate(".-", UNIT), vec![1, 9, 3]);
        assert_eq!(generate("-..", UNIT), vec![3, 9, 1, 9, 1]);
    }

    #[test]
    fn length_is_twice_minus_one() {
        for (_, code) in crate::config::ALPHABET {
            let pulses = generate(code, UNIT);
            assert_eq!(pulses.len(), 2 * code.len() - 1, "code {}", code);
        }
    }

    #[test]
    fn unknown_characters_are_dots() {
        assert_eq!(generate("x-?", UNIT), vec![1, 9, 3, 9, 1]);
    }

    #[test]
    fn same_input_same_output() {
        let unit = PulseProfile::Standard.unit();
        assert_eq!(generate("-.-.", unit), generate("-.-.", unit));
    }

    #[test]
    fn profiles_carry_their_timings() {
        assert_eq!(generate(".-", PulseProfile::Standard.unit()), vec![100, 30, 300]);
        assert_eq!(generate(".-", PulseProfile::Relaxed.unit()), vec![150, 45, 450]);
        assert_eq!(PulseProfile::default(), PulseProfile::Relaxed);
    }

    #[test]
    fn profile_keys_round_trip() {
        for profile in PulseProfile::ALL {
            assert_eq!(PulseProfile::from_key(profile.key()), Some(profile));
        }
        assert_eq!(PulseProfile::from_key("turbo"), None);
    }
}
