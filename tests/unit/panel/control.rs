use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn generated_pairs_respect_state_domains() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        for kind in ControlKind::ALL {
            let pair = generate_states(kind, &mut rng);
            assert!(pair.initial.matches(kind));
            assert!(pair.target.matches(kind));
            assert!(kind.labels().contains(&pair.label));

            match (pair.initial, pair.target) {
                (ControlState::Bool(a), ControlState::Bool(b)) if kind == ControlKind::Button => {
                    assert!(!a);
                    assert!(b);
                }
                (ControlState::Bool(a), ControlState::Bool(b)) => assert_ne!(a, b),
                (ControlState::Percent(a), ControlState::Percent(b)) => {
                    assert_ne!(a, b);
                    assert!(a <= 100 && b <= 100);
                }
                (ControlState::Angle(a), ControlState::Angle(b)) => {
                    assert!(a < 360 && b < 360);
                    assert!(angular_distance_deg(a, b) >= MIN_DIAL_DELTA_DEG);
                }
                other => panic!("unexpected state pair {other:?}"),
            }
        }
    }
}

#[test]
fn same_seed_same_states() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for kind in ControlKind::ALL {
        assert_eq!(generate_states(kind, &mut a), generate_states(kind, &mut b));
    }
}

#[test]
fn state_variant_matching() {
    assert!(ControlState::Bool(true).matches(ControlKind::Switch));
    assert!(ControlState::Bool(true).matches(ControlKind::Button));
    assert!(!ControlState::Bool(true).matches(ControlKind::Dial));
    assert!(ControlState::Percent(3).matches(ControlKind::Slider));
    assert!(ControlState::Angle(3).matches(ControlKind::Dial));
    assert!(!ControlState::Angle(3).matches(ControlKind::Slider));
}

#[test]
fn kind_names_round_trip_through_serde() {
    for kind in ControlKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
    assert!(serde_json::from_str::<ControlKind>("\"lever\"").is_err());
}

#[test]
fn font_size_has_a_floor() {
    let control = Control {
        kind: ControlKind::Switch,
        position: Point::new(100.0, 100.0),
        size: Size::new(120.0, 60.0),
        initial_state: ControlState::Bool(false),
        target_state: ControlState::Bool(true),
        label: "Power".to_string(),
    };
    assert_eq!(control.font_size_px(), 12.0);
    let big = Control {
        size: Size::new(120.0, 96.0),
        ..control.clone()
    };
    assert_eq!(big.font_size_px(), 16.0);
    assert_eq!(control.bounds(), Rect::new(40.0, 70.0, 160.0, 130.0));
}
