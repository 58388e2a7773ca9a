use crate::foundation::core::Canvas;
use crate::panel::control::{Control, ControlKind};
use crate::panel::layout::LayoutMode;

/// Prompt family a panel belongs to, derived from the control kinds it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Every control is a switch.
    Switches,
    /// Exactly one control, and it is a slider.
    Slider,
    /// Anything else.
    Default,
}

impl TaskType {
    /// Classify a sequence of control kinds.
    pub fn classify(kinds: &[ControlKind]) -> Self {
        if !kinds.is_empty() && kinds.iter().all(|k| *k == ControlKind::Switch) {
            Self::Switches
        } else if kinds == [ControlKind::Slider] {
            Self::Slider
        } else {
            Self::Default
        }
    }

    /// Key used by the prompt table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Switches => "switches",
            Self::Slider => "slider",
            Self::Default => "default",
        }
    }
}

/// An ordered, immutable collection of controls laid out on a canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Panel {
    canvas: Canvas,
    mode: LayoutMode,
    controls: Vec<Control>,
    task_type: TaskType,
}

impl Panel {
    /// Build a panel; `task_type` is derived from `controls`.
    pub fn new(canvas: Canvas, mode: LayoutMode, controls: Vec<Control>) -> Self {
        let kinds: Vec<ControlKind> = controls.iter().map(|c| c.kind).collect();
        Self {
            canvas,
            mode,
            task_type: TaskType::classify(&kinds),
            controls,
        }
    }

    /// Canvas the layout was computed for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Layout mode used to place the controls.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Controls in slot order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Prompt family for this panel.
    pub fn task_type(&self) -> TaskType {
        self.task_type
    }
}
