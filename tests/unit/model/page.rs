use super::*;

const PAGE: &str = r#"{
  "viewport": { "width": 300, "height": 400 },
  "items": [
    { "str": "Hello", "transform": [10, 0, 0, 10, 20, 350], "width": 50, "height": 10 },
    { "str": "world", "transform": [10, 2, 0, 12, 80, 350], "width": 40 }
  ]
}"#;

#[test]
fn parses_items_and_joins_text() {
    let page = SourcePage::from_json_str(PAGE).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.full_text(), "Hello world");
}

#[test]
fn missing_height_falls_back_to_matrix() {
    let page = SourcePage::from_json_str(PAGE).unwrap();
    assert_eq!(page.items[1].effective_height(), 10.0);
}

#[test]
fn fit_scale_uses_smaller_ratio() {
    let page = SourcePage::from_json_str(PAGE).unwrap();
    let canvas = Canvas::new(600.0, 1000.0).unwrap();
    assert_eq!(page.fit_scale(canvas), 2.0);
}

#[test]
fn item_box_flips_y_axis() {
    let page = SourcePage::from_json_str(PAGE).unwrap();
    let b = page.item_box(&page.items[0], 2.0);
    assert_eq!(b.left, 40.0);
    assert_eq!(b.top, (400.0 - 350.0 - 10.0) * 2.0);
    assert_eq!(b.width, 100.0);
    assert_eq!(b.height, 20.0);
}

#[test]
fn layout_blocks_apply_config_padding_and_font() {
    let page = SourcePage::from_json_str(PAGE).unwrap();
    let cfg = RemixConfig {
        canvas: Canvas::new(300.0, 400.0).unwrap(),
        ..RemixConfig::default()
    };
    let blocks = page.layout_blocks(&cfg);
    assert_eq!(blocks.len(), 2);
    let s = blocks[0].initial_state();
    assert_eq!(s.height, 10.0 + cfg.height_padding);
    assert_eq!(s.font_size, cfg.base_font_size);
    assert_eq!(s.scale, 1.0);
    assert_eq!(blocks[0].original_content(), "Hello");
}

#[test]
fn degenerate_viewport_scales_to_zero() {
    let page = SourcePage {
        viewport: Viewport {
            width: 0.0,
            height: 0.0,
        },
        items: Vec::new(),
    };
    assert_eq!(page.fit_scale(Canvas::default()), 0.0);
}

#[test]
fn invalid_geometry_is_rejected() {
    let bad = r#"{ "viewport": { "width": 10, "height": 10 },
                   "items": [ { "str": "a", "transform": [1,0,0,1,0,0], "width": -1 } ] }"#;
    assert!(matches!(
        SourcePage::from_json_str(bad),
        Err(RmxError::Validation(_))
    ));
}

#[test]
fn document_accepts_bare_page_and_picks_random_page() {
    let doc = SourceDocument::from_json_str(PAGE).unwrap();
    assert_eq!(doc.pages.len(), 1);
    let mut rng = RmxRng::seed_from_u64(1);
    let (idx, _) = doc.random_page(&mut rng).unwrap();
    assert_eq!(idx, 0);
    let empty = SourceDocument { pages: Vec::new() };
    assert!(empty.random_page(&mut rng).is_none());
}
