use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::panel::model::TaskType;

fn canvas() -> Canvas {
    Canvas {
        width: 512,
        height: 512,
    }
}

#[test]
fn count_is_clamped() {
    assert_eq!(clamp_control_count(0), 2);
    assert_eq!(clamp_control_count(1), 2);
    assert_eq!(clamp_control_count(3), 3);
    assert_eq!(clamp_control_count(5), 5);
    assert_eq!(clamp_control_count(99), 5);

    let (_, cells) = plan_cells(12, canvas());
    assert_eq!(cells.len(), 5);
    let (_, cells) = plan_cells(0, canvas());
    assert_eq!(cells.len(), 2);
}

#[test]
fn grid_iff_four_or_more() {
    for count in 0..10 {
        let (mode, _) = plan_cells(count, canvas());
        if clamp_control_count(count) >= 4 {
            assert_eq!(mode, LayoutMode::Grid { columns: 2 });
        } else {
            assert_eq!(mode, LayoutMode::Column);
        }
    }
}

#[test]
fn column_cells_match_integer_partition() {
    let (_, cells) = plan_cells(3, canvas());
    // usable 432x432, three rows of 144px.
    assert_eq!(cells[0].center, Point::new(256.0, 112.0));
    assert_eq!(cells[1].center, Point::new(256.0, 256.0));
    assert_eq!(cells[2].center, Point::new(256.0, 400.0));
    assert_eq!(cells[0].control_size, Size::new(120.0, 80.0));
}

#[test]
fn grid_cells_fill_row_major() {
    let (_, cells) = plan_cells(5, canvas());
    assert_eq!(cells[0].center, Point::new(148.0, 112.0));
    assert_eq!(cells[1].center, Point::new(364.0, 112.0));
    assert_eq!(cells[4].center, Point::new(148.0, 400.0));
}

#[test]
fn controls_never_overlap_and_stay_in_cells() {
    let sizes = [(64, 64), (200, 150), (512, 512), (1920, 1080), (300, 900)];
    for (w, h) in sizes {
        let canvas = Canvas {
            width: w,
            height: h,
        };
        for count in MIN_CONTROLS..=MAX_CONTROLS {
            let (_, cells) = plan_cells(count, canvas);
            for cell in &cells {
                let bounds = Rect::from_center_size(cell.center, cell.control_size);
                assert!(bounds.x0 >= cell.rect.x0 && bounds.x1 <= cell.rect.x1, "{w}x{h}");
                assert!(bounds.y0 >= cell.rect.y0 && bounds.y1 <= cell.rect.y1, "{w}x{h}");
            }
            for (i, a) in cells.iter().enumerate() {
                for b in &cells[i + 1..] {
                    let ba = Rect::from_center_size(a.center, a.control_size);
                    let bb = Rect::from_center_size(b.center, b.control_size);
                    let overlap = ba.intersect(bb);
                    assert!(overlap.area() <= 0.0, "controls overlap on {w}x{h}");
                }
            }
        }
    }
}

#[test]
fn palette_pool_draws_without_replacement() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut pool = PalettePool::new(&ControlKind::ALL);
    let mut first: Vec<ControlKind> = (0..4).map(|_| pool.draw(&mut rng)).collect();
    first.sort();
    assert_eq!(first, ControlKind::ALL.to_vec());

    // Refills once exhausted.
    let fifth = pool.draw(&mut rng);
    assert!(ControlKind::ALL.contains(&fifth));

    let mut empty = PalettePool::new(&[]);
    assert!(ControlKind::ALL.contains(&empty.draw(&mut rng)));
}

#[test]
fn single_kind_palette_repeats() {
    let mut rng = StdRng::seed_from_u64(11);
    let panel = generate_panel(canvas(), 4, &[ControlKind::Switch], &mut rng);
    assert_eq!(panel.controls().len(), 4);
    assert!(panel.controls().iter().all(|c| c.kind == ControlKind::Switch));
    assert_eq!(panel.task_type(), TaskType::Switches);
}

#[test]
fn generated_panel_is_reproducible() {
    let a = generate_panel(canvas(), 5, &ControlKind::ALL, &mut StdRng::seed_from_u64(5));
    let b = generate_panel(canvas(), 5, &ControlKind::ALL, &mut StdRng::seed_from_u64(5));
    assert_eq!(a, b);
    assert_eq!(a.mode(), LayoutMode::Grid { columns: 2 });
    for c in a.controls() {
        assert!(c.initial_state.matches(c.kind));
        assert!(c.target_state.matches(c.kind));
    }
}

#[test]
fn task_type_classification() {
    use ControlKind::*;
    assert_eq!(TaskType::classify(&[Switch, Switch]), TaskType::Switches);
    assert_eq!(TaskType::classify(&[Slider]), TaskType::Slider);
    assert_eq!(TaskType::classify(&[Slider, Slider]), TaskType::Default);
    assert_eq!(TaskType::classify(&[Switch, Dial]), TaskType::Default);
    assert_eq!(TaskType::classify(&[]), TaskType::Default);
}
