use rand::Rng;
use rand::seq::IndexedRandom;

use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::math::angular_distance_deg;

/// The four operable control archetypes a panel can hold.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    /// Two-position toggle.
    Switch,
    /// Linear 0..=100 percent control.
    Slider,
    /// Momentary push button (unpressed -> pressed).
    Button,
    /// Rotary knob in whole degrees.
    Dial,
}

impl ControlKind {
    /// Every archetype, in declaration order.
    pub const ALL: [ControlKind; 4] = [Self::Switch, Self::Slider, Self::Button, Self::Dial];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Slider => "slider",
            Self::Button => "button",
            Self::Dial => "dial",
        }
    }

    /// Label vocabulary the generator picks from for this archetype.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Switch => &["Power", "Mode", "Enable", "State"],
            Self::Slider => &["Volume", "Speed", "Level", "Value"],
            Self::Button => &["Start", "Activate", "Run", "Execute"],
            Self::Dial => &["Rotation", "Angle", "Position"],
        }
    }
}

impl std::fmt::Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract state of one control.
///
/// The variant is keyed to the owning [`ControlKind`]: switches and buttons carry `Bool`,
/// sliders `Percent` in `[0, 100]`, dials `Angle` in `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    /// On/off or pressed/unpressed.
    Bool(bool),
    /// Slider position in percent.
    Percent(u8),
    /// Dial angle in degrees, 0 pointing up.
    Angle(u16),
}

impl ControlState {
    /// Return `true` when this variant is the one `kind` expects.
    pub fn matches(self, kind: ControlKind) -> bool {
        matches!(
            (kind, self),
            (ControlKind::Switch | ControlKind::Button, Self::Bool(_))
                | (ControlKind::Slider, Self::Percent(_))
                | (ControlKind::Dial, Self::Angle(_))
        )
    }
}

/// Minimum circular distance between a dial's initial and target angle.
pub const MIN_DIAL_DELTA_DEG: u16 = 30;

/// Generated initial/target states plus a display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatePair {
    /// State shown in the first image.
    pub initial: ControlState,
    /// State shown in the final image.
    pub target: ControlState,
    /// Short display string.
    pub label: &'static str,
}

/// Draw an initial/target state pair for `kind`.
///
/// - switch: random initial, target is its negation
/// - slider: both uniform in `[0, 100]`, target resampled until it differs
/// - button: always unpressed -> pressed
/// - dial: both uniform in `[0, 360)`, target resampled until the circular distance is at
///   least [`MIN_DIAL_DELTA_DEG`]
pub fn generate_states<R: Rng + ?Sized>(kind: ControlKind, rng: &mut R) -> StatePair {
    let (initial, target) = match kind {
        ControlKind::Switch => {
            let on = rng.random_bool(0.5);
            (ControlState::Bool(on), ControlState::Bool(!on))
        }
        ControlKind::Slider => {
            let initial = rng.random_range(0..=100u8);
            let mut target = rng.random_range(0..=100u8);
            while target == initial {
                target = rng.random_range(0..=100u8);
            }
            (ControlState::Percent(initial), ControlState::Percent(target))
        }
        ControlKind::Button => (ControlState::Bool(false), ControlState::Bool(true)),
        ControlKind::Dial => {
            let initial = rng.random_range(0..360u16);
            let mut target = rng.random_range(0..360u16);
            while angular_distance_deg(initial, target) < MIN_DIAL_DELTA_DEG {
                target = rng.random_range(0..360u16);
            }
            (ControlState::Angle(initial), ControlState::Angle(target))
        }
    };
    let label = kind.labels().choose(rng).copied().unwrap_or("Control");
    StatePair {
        initial,
        target,
        label,
    }
}

/// One operable element placed on a panel.
///
/// Controls are immutable once generated; interpolated states are computed by callers and
/// never written back.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Control {
    /// Archetype.
    pub kind: ControlKind,
    /// Center in canvas coordinates.
    pub position: Point,
    /// Bounding box size.
    pub size: Size,
    /// State in the first image.
    pub initial_state: ControlState,
    /// State in the final image.
    pub target_state: ControlState,
    /// Display label.
    pub label: String,
}

impl Control {
    /// Axis-aligned bounding box centered on [`Control::position`].
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }

    /// Font size in pixels used for this control's text.
    pub fn font_size_px(&self) -> f32 {
        let min_edge = self.size.width.min(self.size.height).floor() as u32;
        (min_edge / 6).max(12) as f32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/control.rs"]
mod tests;
