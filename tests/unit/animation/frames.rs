use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::foundation::core::{Canvas, Rgb8};
use crate::panel::control::ControlKind;
use crate::panel::layout::generate_panel;
use crate::render::fonts::NoFonts;

fn setup() -> (PanelRenderer, Panel) {
    let canvas = Canvas {
        width: 256,
        height: 256,
    };
    let panel = generate_panel(canvas, 3, &ControlKind::ALL, &mut StdRng::seed_from_u64(21));
    let renderer = PanelRenderer::new(canvas, Rgb8::new(40, 40, 50), &NoFonts).unwrap();
    (renderer, panel)
}

#[test]
fn default_sequence_has_forty_frames_with_holds() {
    let (mut r, panel) = setup();
    let opts = AnimationOpts::default();
    let frames = build_frames(&mut r, &panel, opts).unwrap();
    assert_eq!(frames.len(), 40);
    assert_eq!(opts.frame_count(), 40);

    let initial = r.render(&panel, StateSelector::Initial).unwrap();
    let target = r.render(&panel, StateSelector::Target).unwrap();
    for f in &frames[..5] {
        assert_eq!(f, &initial);
    }
    for f in &frames[35..] {
        assert_eq!(f, &target);
    }
    // Transition endpoints coincide with the static renders.
    assert_eq!(frames[5], initial);
    assert_eq!(frames[34], target);
}

#[test]
fn progress_spans_unit_interval() {
    let opts = AnimationOpts {
        hold_frames: 0,
        transition_frames: 5,
    };
    let got: Vec<f64> = (0..5).map(|i| opts.progress_at(i)).collect();
    assert_eq!(got, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    let one = AnimationOpts {
        hold_frames: 0,
        transition_frames: 1,
    };
    assert_eq!(one.progress_at(0), 1.0);
}

#[test]
fn custom_lengths() {
    let (mut r, panel) = setup();
    let opts = AnimationOpts {
        hold_frames: 2,
        transition_frames: 3,
    };
    let frames = build_frames(&mut r, &panel, opts).unwrap();
    assert_eq!(frames.len(), 7);

    let none = AnimationOpts {
        hold_frames: 0,
        transition_frames: 0,
    };
    assert!(build_frames(&mut r, &panel, none).unwrap().is_empty());
}
