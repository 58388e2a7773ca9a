//! One draw routine per archetype.
//!
//! Routines only ever see a resolved [`ControlState`]; they never read the control's stored
//! initial/target state, so the same code serves static and interpolated frames.

use kurbo::{Circle, Line, RoundedRect};

use crate::foundation::core::{Point, Rgb8, Size};
use crate::foundation::error::{PanelError, PanelResult};
use crate::panel::control::{Control, ControlKind, ControlState};
use crate::render::cpu::{LabelFont, Surface};

const TRACK: Rgb8 = Rgb8::new(60, 60, 70);
const SWITCH_ON: Rgb8 = Rgb8::new(60, 150, 80);
const SLIDER_FILL: Rgb8 = Rgb8::new(70, 130, 200);
const KNOB: Rgb8 = Rgb8::new(220, 220, 220);
const KNOB_OUTLINE: Rgb8 = Rgb8::new(40, 40, 50);
const BUTTON_IDLE: Rgb8 = Rgb8::new(100, 120, 150);
const BUTTON_PRESSED: Rgb8 = Rgb8::new(80, 150, 80);
const BUTTON_SHADOW: Rgb8 = Rgb8::new(20, 20, 25);
const BUTTON_OUTLINE: Rgb8 = Rgb8::new(60, 60, 70);
const DIAL_BODY: Rgb8 = Rgb8::new(80, 80, 90);
const DIAL_OUTLINE: Rgb8 = Rgb8::new(60, 60, 70);
const DIAL_POINTER: Rgb8 = Rgb8::new(255, 200, 50);
const DIAL_HUB: Rgb8 = Rgb8::new(200, 200, 200);
const LABEL: Rgb8 = Rgb8::new(200, 200, 200);
const CAPTION: Rgb8 = Rgb8::new(180, 180, 180);
const BUTTON_TEXT: Rgb8 = Rgb8::new(255, 255, 255);

/// Top padding between a control's bounds and its label.
const LABEL_TOP_PAD: f64 = 5.0;
/// Distance from the bottom of a slider's bounds to its caption.
const CAPTION_BOTTOM_PAD: f64 = 20.0;

/// Draw `control` onto `surface` showing `state`.
///
/// `label` and `font` are passed explicitly; without a font the text is skipped and the
/// control body is still drawn. Fails only when `state` is not the variant `control.kind`
/// expects.
pub fn draw_control(
    surface: &mut Surface<'_>,
    control: &Control,
    state: ControlState,
    label: &str,
    font: Option<&LabelFont>,
) -> PanelResult<()> {
    let c = control.position;
    let s = control.size;
    match (control.kind, state) {
        (ControlKind::Switch, ControlState::Bool(on)) => draw_switch(surface, c, s, on, label, font),
        (ControlKind::Slider, ControlState::Percent(v)) => {
            draw_slider(surface, c, s, v, label, font)
        }
        (ControlKind::Button, ControlState::Bool(pressed)) => {
            draw_button(surface, c, s, pressed, label, font)
        }
        (ControlKind::Dial, ControlState::Angle(a)) => draw_dial(surface, c, s, a, label, font),
        (kind, state) => Err(PanelError::validation(format!(
            "state {state:?} does not fit a {kind} control"
        ))),
    }
}

fn draw_label_above(
    surface: &mut Surface<'_>,
    c: Point,
    s: Size,
    label: &str,
    font: Option<&LabelFont>,
) -> PanelResult<()> {
    let Some(font) = font else { return Ok(()) };
    let top = c.y - (s.height / 2.0).floor() + LABEL_TOP_PAD;
    surface.text(label, font, LABEL, |w, _| {
        Point::new(c.x - (w / 2.0).floor(), top)
    })
}

fn draw_switch(
    surface: &mut Surface<'_>,
    c: Point,
    s: Size,
    on: bool,
    label: &str,
    font: Option<&LabelFont>,
) -> PanelResult<()> {
    let half_w = (s.width / 2.0).floor();
    let rail_h = (s.height / 3.0).floor();
    let rail_y = c.y - (rail_h / 2.0).floor();
    let rail = RoundedRect::new(c.x - half_w, rail_y, c.x + half_w, rail_y + rail_h, rail_h / 2.0);
    surface.fill(&rail, if on { SWITCH_ON } else { TRACK });

    let knob_r = (rail_h * 0.7).max(5.0);
    let travel = (half_w - knob_r * 1.2).trunc();
    let knob_x = if on { c.x + travel } else { c.x - travel };
    let knob = Circle::new((knob_x, c.y), knob_r);
    surface.fill(&knob, KNOB);
    surface.stroke(&knob, 2.0, KNOB_OUTLINE);

    draw_label_above(surface, c, s, label, font)
}

fn draw_slider(
    surface: &mut Surface<'_>,
    c: Point,
    s: Size,
    value: u8,
    label: &str,
    font: Option<&LabelFont>,
) -> PanelResult<()> {
    let value = value.min(100);
    let half_w = (s.width / 2.0).floor();
    let track_h = (s.height / 8.0).floor();
    let half_track = (track_h / 2.0).floor();
    let left = c.x - half_w;
    let track = RoundedRect::new(left, c.y - half_track, c.x + half_w, c.y + half_track, track_h / 2.0);
    surface.fill(&track, TRACK);

    let offset = ((s.width - track_h) * f64::from(value) / 100.0).trunc();
    if offset > 0.0 {
        let filled = RoundedRect::new(left, c.y - half_track, left + offset, c.y + half_track, track_h / 2.0);
        surface.fill(&filled, SLIDER_FILL);
    }

    let thumb = Circle::new((left + offset, c.y), (track_h * 1.2).max(5.0));
    surface.fill(&thumb, KNOB);
    surface.stroke(&thumb, 2.0, KNOB_OUTLINE);

    draw_label_above(surface, c, s, label, font)?;
    if let Some(font) = font {
        let caption_top = c.y + (s.height / 2.0).floor() - CAPTION_BOTTOM_PAD;
        surface.text(&format!("{value}%"), font, CAPTION, |w, _| {
            Point::new(c.x - (w / 2.0).floor(), caption_top)
        })?;
    }
    Ok(())
}

fn draw_button(
    surface: &mut Surface<'_>,
    c: Point,
    s: Size,
    pressed: bool,
    label: &str,
    font: Option<&LabelFont>,
) -> PanelResult<()> {
    let button_w = s.width.min(s.height * 1.5);
    let button_h = (s.height / 2.0).floor();
    let radius = (button_h / 4.0).floor();
    let (color, shadow) = if pressed {
        (BUTTON_PRESSED, 1.0)
    } else {
        (BUTTON_IDLE, 3.0)
    };

    let x0 = c.x - (button_w / 2.0).floor();
    let x1 = c.x + (button_w / 2.0).floor();
    // Body is centred on the control.
    let y0 = c.y - (button_h / 2.0).floor();
    let y1 = y0 + button_h;

    let shadow_rect = RoundedRect::new(x0 + shadow, y0 + shadow, x1 + shadow, y1 + shadow, radius);
    surface.fill(&shadow_rect, BUTTON_SHADOW);
    let body = RoundedRect::new(x0, y0, x1, y1, radius);
    surface.fill(&body, color);
    surface.stroke(&body, 2.0, BUTTON_OUTLINE);

    let Some(font) = font else { return Ok(()) };
    surface.text(label, font, BUTTON_TEXT, |w, h| {
        Point::new(c.x - (w / 2.0).floor(), y0 + ((button_h - h) / 2.0).floor())
    })
}

fn draw_dial(
    surface: &mut Surface<'_>,
    c: Point,
    s: Size,
    angle: u16,
    label: &str,
    font: Option<&LabelFont>,
) -> PanelResult<()> {
    let radius = (s.width.min(s.height) / 3.0).floor().max(15.0);
    let body = Circle::new(c, radius);
    surface.fill(&body, DIAL_BODY);
    surface.stroke(&body, 3.0, DIAL_OUTLINE);

    let theta = (f64::from(angle % 360) - 90.0).to_radians();
    let len = radius * 0.7;
    let tip = Point::new(c.x + len * theta.cos(), c.y + len * theta.sin());
    surface.stroke(&Line::new(c, tip), 4.0, DIAL_POINTER);

    surface.fill(&Circle::new(c, (radius / 8.0).floor()), DIAL_HUB);

    draw_label_above(surface, c, s, label, font)
}
