use folio_core::{
    HoverPreview, Point, PreviewPlacement, ProjectCatalog, ProjectEntry, SafeRect, Viewport,
    PREVIEW_SIZE,
};

fn catalog() -> ProjectCatalog {
    ProjectCatalog::from_entries(vec![
        ProjectEntry {
            id: "alpha".into(),
            image: "images/alpha-thumb.jpg".into(),
        },
        ProjectEntry {
            id: "beta".into(),
            image: "images/beta-thumb.jpg".into(),
        },
    ])
}

#[test]
fn entering_second_item_replaces_first_preview() {
    let viewport = Viewport::new(1024.0, 768.0);
    let safe = SafeRect::between(viewport, 80.0, 700.0, PREVIEW_SIZE);
    for placement in [PreviewPlacement::Follow, PreviewPlacement::Random] {
        let mut preview = HoverPreview::new(placement, catalog(), 42);
        preview.enter("alpha", Point::new(100.0, 100.0), viewport, &safe);
        preview.enter("beta", Point::new(100.0, 140.0), viewport, &safe);

        let active = preview.active().expect("beta preview visible");
        assert_eq!(active.project_id, "beta");
        assert_eq!(active.image, "images/beta-thumb.jpg");

        preview.leave();
        assert!(preview.active().is_none());
    }
}

#[test]
fn random_placement_resamples_per_hover_inside_safe_rect() {
    let viewport = Viewport::new(1440.0, 900.0);
    let safe = SafeRect::between(viewport, 120.0, 820.0, PREVIEW_SIZE);
    let mut preview = HoverPreview::new(PreviewPlacement::Random, catalog(), 0x5EED);
    let mut positions = Vec::new();
    for _ in 0..32 {
        let active = preview
            .enter("alpha", Point::new(10.0, 10.0), viewport, &safe)
            .cloned()
            .expect("alpha mapped");
        assert!(safe.contains(active.position), "{:?}", active.position);
        positions.push(active.position);
        preview.leave();
    }
    positions.dedup();
    assert!(positions.len() > 1);
}

#[test]
fn unmapped_item_never_shows_panel() {
    let viewport = Viewport::new(800.0, 600.0);
    let safe = SafeRect::between(viewport, 0.0, 600.0, PREVIEW_SIZE);
    let mut preview = HoverPreview::new(PreviewPlacement::Follow, catalog(), 1);
    assert!(preview
        .enter("gamma", Point::new(5.0, 5.0), viewport, &safe)
        .is_none());
    assert!(!preview.is_visible());
    assert_eq!(preview.pointer_move(Point::new(6.0, 6.0), viewport), None);
}
