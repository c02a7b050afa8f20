use super::*;
use crate::model::block::VisualState;
use crate::terms::set::{Category, TermSet};

fn blocks(n: usize) -> Vec<LayoutBlock> {
    (0..n)
        .map(|i| {
            LayoutBlock::new(
                format!("orig{i}"),
                VisualState {
                    x: i as f64,
                    y: 0.0,
                    width: 60.0,
                    height: 20.0,
                    rotation: 0.0,
                    font_size: 10.0,
                    scale: 1.0,
                },
            )
        })
        .collect()
}

fn shuffled_ranks(n: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    RmxRng::seed_from_u64(seed).shuffle(&mut order);
    let mut ranks = vec![0; n];
    for (rank, &idx) in order.iter().enumerate() {
        ranks[idx] = rank;
    }
    ranks
}

#[test]
fn advance_cycles_and_wraps() {
    let mut d = StageDirector::canonical();
    assert_eq!(d.current_stage().name, StageName::Initial);
    let names: Vec<StageName> = (0..9).map(|_| d.advance()).collect();
    assert_eq!(names[0], StageName::Replace10Percent);
    assert_eq!(names[7], StageName::Return);
    assert_eq!(names[8], StageName::Initial);
    d.advance();
    d.reset();
    assert_eq!(d.current_index(), 0);
}

#[test]
fn empty_table_is_rejected() {
    assert!(StageDirector::new(Vec::new()).is_err());
}

#[test]
fn replacement_counts_are_exact_for_any_size() {
    let mut rng = RmxRng::seed_from_u64(5);
    for n in 0..40usize {
        let bs = blocks(n);
        let ranks = shuffled_ranks(n, n as u64);
        let params = ActivationParams::sample(&mut rng, n);
        for (name, k) in [
            (StageName::Replace10Percent, 10),
            (StageName::Replace50Percent, 50),
            (StageName::Replace100Percent, 100),
        ] {
            let stage = Stage::builtin(name);
            let out = StageDirector::plan(&stage, &bs, Canvas::default(), &params, &ranks, 5.5);
            let generated = out
                .iter()
                .filter(|o| o.content == ContentDirective::Generate)
                .count();
            assert_eq!(generated, n * k / 100, "n={n} k={k}");
        }
    }
}

#[test]
fn replace_family_shares_one_permutation() {
    let n = 20;
    let bs = blocks(n);
    let ranks = shuffled_ranks(n, 77);
    let params = ActivationParams::sample(&mut RmxRng::seed_from_u64(1), n);
    let marked = |name| {
        StageDirector::plan(&Stage::builtin(name), &bs, Canvas::default(), &params, &ranks, 5.5)
            .iter()
            .map(|o| o.content == ContentDirective::Generate)
            .collect::<Vec<_>>()
    };
    let ten = marked(StageName::Replace10Percent);
    let fifty = marked(StageName::Replace50Percent);
    for i in 0..n {
        if ten[i] {
            assert!(fifty[i], "block {i} replaced at 10% but not at 50%");
        }
    }
}

#[test]
fn apply_starts_staggered_reveals_and_restores_others() {
    let n = 10;
    let mut bs = blocks(n);
    bs[0].show_text("stale");
    let ranks = shuffled_ranks(n, 3);
    let mut rng = RmxRng::seed_from_u64(8);
    let params = ActivationParams::sample(&mut rng, n);
    let stage = Stage::builtin(StageName::Replace50Percent);
    let outcomes = StageDirector::plan(&stage, &bs, Canvas::default(), &params, &ranks, 5.5);

    let terms = TermSet::new().with(Category::Noun, vec!["x".to_string()]);
    let sink = ContentSink {
        generator: ContentGenerator::new(Some(&terms)),
        reveal: TextReveal::new(100.0),
        now_ms: 1000.0,
        stagger_ms: 10.0,
        fill_repeats: 3,
    };
    let report = apply_outcomes(stage.name, &mut bs, &outcomes, &sink, &mut rng);
    assert_eq!(report.generated, 5);
    assert_eq!(report.restored, 5);

    for (i, b) in bs.iter().enumerate() {
        match b.text_animation() {
            Some(anim) => {
                assert_eq!(anim.start_ms, 1000.0 + i as f64 * 10.0);
                assert!(anim.target_text.split_whitespace().all(|w| w == "x"
                    || crate::content::generator::CONNECTORS.contains(&w)));
            }
            None => assert_eq!(b.text_content(), b.original_content()),
        }
    }
}

#[test]
fn plan_on_empty_collection_is_empty() {
    let params = ActivationParams::sample(&mut RmxRng::seed_from_u64(1), 0);
    for stage in crate::stage::rules::canonical_stages() {
        assert!(StageDirector::plan(&stage, &[], Canvas::default(), &params, &[], 5.5).is_empty());
    }
}
