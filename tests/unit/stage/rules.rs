use super::*;
use crate::stage::params::{MorphParams, SpiralParams};

fn canvas() -> Canvas {
    Canvas::new(400.0, 600.0).unwrap()
}

fn block(i: usize) -> LayoutBlock {
    LayoutBlock::new(
        format!("w{i}"),
        VisualState {
            x: 10.0 * i as f64,
            y: 5.0 * i as f64,
            width: 40.0,
            height: 20.0,
            rotation: 0.0,
            font_size: 8.0,
            scale: 1.0,
        },
    )
}

fn params() -> ActivationParams {
    ActivationParams {
        spiral: SpiralParams {
            tightness: 1.0,
            max_radius: 100.0,
            direction: 1.0,
        },
        morph: MorphParams {
            scale_lo: 0.5,
            scale_hi: 10.0,
        },
        survivor: Some(2),
        chaos_seed: 99,
    }
}

fn outcome(
    name: StageName,
    index: usize,
    count: usize,
    b: &LayoutBlock,
    ranks: &[usize],
) -> StageOutcome {
    let p = params();
    let ctx = StageCtx {
        index,
        count,
        canvas: canvas(),
        params: &p,
        ranks,
        morph_height_factor: 5.5,
    };
    (Stage::builtin(name).rule)(&ctx, b)
}

#[test]
fn stage_names_serialize_in_canonical_form() {
    for stage in canonical_stages() {
        let json = serde_json::to_string(&stage.name).unwrap();
        assert_eq!(json, format!("\"{}\"", stage.name.as_str()));
    }
}

#[test]
fn threshold_is_floor_of_percentage() {
    assert_eq!(replacement_threshold(10, 50), 5);
    assert_eq!(replacement_threshold(9, 10), 0);
    assert_eq!(replacement_threshold(19, 10), 1);
    assert_eq!(replacement_threshold(7, 100), 7);
    assert_eq!(replacement_threshold(0, 50), 0);
}

#[test]
fn spiral_origin_scenario() {
    let b = block(0);
    let out = outcome(StageName::Spiral, 0, 10, &b, &[]);
    assert_eq!(out.target.x, 200.0 - 20.0);
    assert_eq!(out.target.y, 300.0 - 10.0);
    assert_eq!(out.target.rotation, 0.0);
    assert_eq!(out.content, ContentDirective::Keep);
}

#[test]
fn spiral_follows_archimedean_formula() {
    let b = block(3);
    let out = outcome(StageName::Spiral, 3, 6, &b, &[]);
    let angle = 3.0f64;
    let radius = 100.0 * 0.5;
    assert!((out.target.x - (200.0 + radius * angle.cos() - 20.0)).abs() < 1e-9);
    assert!((out.target.y - (300.0 + radius * angle.sin() - 10.0)).abs() < 1e-9);
    assert!((out.target.rotation - angle.to_degrees()).abs() < 1e-9);
}

#[test]
fn rules_are_pure() {
    let ranks: Vec<usize> = (0..8).rev().collect();
    for stage in canonical_stages() {
        for i in 0..8 {
            let b = block(i);
            let a = outcome(stage.name, i, 8, &b, &ranks);
            let c = outcome(stage.name, i, 8, &b, &ranks);
            assert_eq!(a, c, "{} index {i}", stage.name);
        }
    }
}

#[test]
fn rest_stages_restore_initial_and_content() {
    let mut b = block(1);
    b.set_target(VisualState {
        x: 999.0,
        scale: 4.0,
        ..*b.initial_state()
    });
    for name in [StageName::Initial, StageName::Return] {
        let out = outcome(name, 1, 4, &b, &[]);
        assert_eq!(out.target, *b.initial_state());
        assert_eq!(out.content, ContentDirective::Original);
    }
}

#[test]
fn chaos_position_stays_in_canvas() {
    for i in 0..50 {
        let b = block(i);
        let out = outcome(StageName::ChaosPosition, i, 50, &b, &[]);
        assert!((0.0..400.0).contains(&out.target.x));
        assert!((0.0..600.0).contains(&out.target.y));
        assert!((0.0..360.0).contains(&out.target.rotation));
        assert_eq!(out.target.height, 20.0);
    }
}

#[test]
fn chaos_morph_freezes_current_position_and_swells() {
    let mut b = block(4);
    b.current.x = 123.0;
    b.current.y = 45.0;
    b.current.rotation = 77.0;
    let out = outcome(StageName::ChaosMorph, 4, 8, &b, &[]);
    assert_eq!(out.target.x, 123.0);
    assert_eq!(out.target.y, 45.0);
    assert_eq!(out.target.rotation, 77.0);
    assert_eq!(out.target.height, 20.0 * 5.5);
    assert!((0.5..10.0).contains(&out.target.scale));
}

#[test]
fn single_word_centers_survivor_and_exiles_the_rest() {
    let count = 6;
    let center = canvas().center();
    for i in 0..count {
        let b = block(i);
        let out = outcome(StageName::SingleWord, i, count, &b, &[]);
        if i == 2 {
            assert_eq!(out.target.x, center.x - 20.0);
            assert_eq!(out.target.y, center.y - 10.0);
            assert_eq!(out.target.rotation, 0.0);
        } else {
            let mid_x = out.target.x + out.target.width * 0.5;
            let mid_y = out.target.y + out.target.height * 0.5;
            let d = (mid_x - center.x).hypot(mid_y - center.y);
            assert!(d >= EXIT_DISTANCE - 1e-6);
            assert!(d > canvas().diagonal());
        }
    }
}

/// Distance from the canvas rectangle to the nearest point of the circle enclosing the
/// block's box scaled and rotated about its center. Positive means fully outside.
fn clearance(t: &VisualState, c: Canvas) -> f64 {
    let mid_x = t.x + t.width * 0.5;
    let mid_y = t.y + t.height * 0.5;
    let dx = (mid_x - mid_x.clamp(0.0, c.width)).abs();
    let dy = (mid_y - mid_y.clamp(0.0, c.height)).abs();
    dx.hypot(dy) - 0.5 * t.width.hypot(t.height) * t.scale
}

#[test]
fn single_word_casualties_leave_the_canvas_after_a_morph() {
    let c = Canvas::new(600.0, 800.0).unwrap();
    let count = 8;
    for seed in 0..200u64 {
        let mut p = params();
        p.chaos_seed = seed;
        p.survivor = Some((seed % count as u64) as usize);
        for i in 0..count {
            let mut b = LayoutBlock::new(
                format!("w{i}"),
                VisualState {
                    x: 20.0,
                    y: 40.0 * i as f64,
                    width: 560.0,
                    height: 40.0,
                    rotation: 0.0,
                    font_size: 12.0,
                    scale: 1.0,
                },
            );
            let ctx = StageCtx {
                index: i,
                count,
                canvas: c,
                params: &p,
                ranks: &[],
                morph_height_factor: 5.5,
            };
            let morph = (Stage::builtin(StageName::ChaosMorph).rule)(&ctx, &b);
            b.set_target(VisualState {
                scale: 10.0,
                ..morph.target
            });
            let out = (Stage::builtin(StageName::SingleWord).rule)(&ctx, &b);
            if p.survivor == Some(i) {
                continue;
            }
            assert_eq!(out.target.scale, 1.0);
            assert_eq!(out.target.height, 40.0);
            assert_eq!(out.target.font_size, 12.0);
            assert!(clearance(&out.target, c) > 0.0, "seed {seed} block {i}");
        }
    }
}

#[test]
fn oversized_casualties_are_pushed_past_their_own_reach() {
    let huge = LayoutBlock::new(
        "wide",
        VisualState {
            width: 9000.0,
            height: 300.0,
            scale: 3.0,
            ..*block(1).initial_state()
        },
    );
    let out = outcome(StageName::SingleWord, 1, 4, &huge, &[]);
    assert_eq!(out.target.scale, 3.0);
    assert!(clearance(&out.target, canvas()) > 0.0);
}

#[test]
fn exit_distance_grows_with_huge_canvases() {
    let big = Canvas::new(5000.0, 5000.0).unwrap();
    assert!(exit_distance(big) > big.diagonal());
    assert_eq!(exit_distance(canvas()), EXIT_DISTANCE);
}
