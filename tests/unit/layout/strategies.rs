use super::*;

fn grid() -> ItemBox {
    ItemBox {
        left: 30.0,
        top: 40.0,
        width: 20.0,
        height: 10.0,
    }
}

fn canvas() -> Canvas {
    Canvas::new(200.0, 100.0).unwrap()
}

#[test]
fn spiral_position_centers_box_on_arm() {
    let p = spiral_position(Point::new(100.0, 50.0), 0.0, 10.0, 20.0, 10.0);
    assert_eq!(p, Point::new(100.0, 45.0));
    let p = spiral_position(Point::new(100.0, 50.0), std::f64::consts::FRAC_PI_2, 10.0, 0.0, 0.0);
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!((p.y - 60.0).abs() < 1e-9);
}

#[test]
fn grid_keeps_source_geometry() {
    let p = LayoutMode::Grid.place(&grid(), 3, 10, canvas(), 55.0);
    assert_eq!(p.origin, Point::new(30.0, 40.0));
    assert_eq!(p.rotation, 0.0);
}

#[test]
fn spiral_with_zero_lerp_is_grid() {
    let p = LayoutMode::Spiral { lerp: 0.0 }.place(&grid(), 4, 10, canvas(), 80.0);
    assert_eq!(p.origin, Point::new(30.0, 40.0));
    assert_eq!(p.rotation, 0.0);
}

#[test]
fn full_spiral_reaches_arm_and_rotates_in_radians() {
    let index = 4;
    let p = LayoutMode::Spiral { lerp: 1.0 }.place(&grid(), index, 8, canvas(), 80.0);
    let angle = 0.5 * index as f64;
    let expected = spiral_position(canvas().center(), angle, 40.0, 20.0, 10.0);
    assert!((p.origin.x - expected.x).abs() < 1e-9);
    assert!((p.origin.y - expected.y).abs() < 1e-9);
    assert_eq!(p.rotation, angle);
}

#[test]
fn partial_spiral_interpolates() {
    let full = LayoutMode::Spiral { lerp: 1.0 }.place(&grid(), 2, 5, canvas(), 50.0);
    let part = LayoutMode::Spiral { lerp: 0.34 }.place(&grid(), 2, 5, canvas(), 50.0);
    let want_x = 30.0 + (full.origin.x - 30.0) * 0.34;
    assert!((part.origin.x - want_x).abs() < 1e-9);
    assert!((part.rotation - full.rotation * 0.34).abs() < 1e-12);
}

#[test]
fn wave_displaces_vertically() {
    let p = LayoutMode::Wave {
        frequency: WAVE_FREQUENCY,
        amplitude: None,
    }
    .place(&grid(), 0, 1, canvas(), 10.0);
    assert_eq!(p.origin.x, 30.0);
    assert!((p.origin.y - (40.0 + 10.0 * (30.0f64 * 0.02).sin())).abs() < 1e-9);
}

#[test]
fn wave_amplitude_overrides_page_intensity() {
    let p = LayoutMode::Wave {
        frequency: 0.1,
        amplitude: Some(25.0),
    }
    .place(&grid(), 0, 1, canvas(), 10.0);
    assert!((p.origin.y - (40.0 + 25.0 * (30.0f64 * 0.1).sin())).abs() < 1e-9);
}

#[test]
fn wave_recipe_json_fills_defaults() {
    let mode: LayoutMode = serde_json::from_str(r#"{ "mode": "wave" }"#).unwrap();
    assert_eq!(
        mode,
        LayoutMode::Wave {
            frequency: WAVE_FREQUENCY,
            amplitude: None,
        }
    );
    let mode: LayoutMode =
        serde_json::from_str(r#"{ "mode": "wave", "frequency": 0.05, "amplitude": 12 }"#)
            .unwrap();
    assert_eq!(
        mode,
        LayoutMode::Wave {
            frequency: 0.05,
            amplitude: Some(12.0),
        }
    );
}

#[test]
fn chaos_boxes_stay_in_their_ranges() {
    let mut rng = RmxRng::seed_from_u64(17);
    for _ in 0..500 {
        let b = chaos_box(canvas(), &mut rng);
        assert!((0.0..200.0).contains(&b.origin.x));
        assert!((0.0..100.0).contains(&b.origin.y));
        assert!((20.0..100.0).contains(&b.width));
        assert!((5.0..20.0).contains(&b.height));
        assert!((0.01..39.51).contains(&b.font_em));
    }
}

#[test]
fn single_word_sits_at_anchor() {
    assert_eq!(single_word_origin(canvas()), Point::new(80.0, 50.0));
}

#[test]
fn layout_mode_json_is_tagged() {
    let json = serde_json::to_string(&LayoutMode::Spiral { lerp: 0.5 }).unwrap();
    assert_eq!(json, r#"{"mode":"spiral","lerp":0.5}"#);
}
