use balloontip::{
    BalloonGeometry, BalloonStyle, Content, Edge, HasTooltipData, HoverOutcome, LayoutMode,
    LayoutRequest, PixelScale, PointerOffset, Rect, Size, Tooltip, TooltipConfig, TooltipError,
    TooltipTarget, balloon_path, layout::layout,
};
use glam::dvec2;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

fn fixed_tooltip(config: TooltipConfig, width: f64, height: f64) -> Tooltip<impl Fn(&Content, f64) -> Size> {
    Tooltip::with_measure(config, move |_: &Content, _: f64| Size::new(width, height)).unwrap()
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn clamps_at_right_edge_and_reaims_pointer() {
    let request = LayoutRequest {
        anchor: Rect::new(380.0, 50.0, 20.0, 10.0),
        container: VIEWPORT,
        content: Size::new(100.0, 16.0),
        edge: Edge::South,
    };
    let out = layout(&request, LayoutMode::FitInto, &BalloonStyle::default());
    assert_eq!(out.tooltip_left(), 300.0);
    assert_eq!(out.tooltip_left() + request.content.width, VIEWPORT.right());
    assert_eq!(out.pointer_offset.raw(), 0.9);
    assert_eq!(out.tooltip_top(), 60.0);
}

#[test]
fn anchors_with_room_are_never_clamped() {
    let style = BalloonStyle::default();
    for left in (60..=320).step_by(13) {
        for edge in [Edge::North, Edge::South] {
            let request = LayoutRequest {
                anchor: Rect::new(f64::from(left), 120.0, 20.0, 10.0),
                container: VIEWPORT,
                content: Size::new(100.0, 16.0),
                edge,
            };
            let out = layout(&request, LayoutMode::FitInto, &style);
            assert!(!out.clamped, "anchor at {left} clamped");
            assert_eq!(out.pointer_offset, PointerOffset::CENTER);
            assert!(out.tooltip_left() >= VIEWPORT.left);
            assert!(out.bounds().right() <= VIEWPORT.right());
        }
    }
}

#[test]
fn pointer_offset_stays_in_unit_range_everywhere() {
    let style = BalloonStyle::default();
    for left in (-300..=700).step_by(7) {
        for edge in Edge::ALL {
            for content in [Size::new(100.0, 16.0), Size::new(900.0, 500.0), Size::new(1.0, 1.0)] {
                let request = LayoutRequest {
                    anchor: Rect::new(f64::from(left), f64::from(left) * 0.5, 20.0, 10.0),
                    container: VIEWPORT,
                    content,
                    edge,
                };
                let offset = layout(&request, LayoutMode::FitInto, &style).pointer_offset.raw();
                assert!((0.0..=1.0).contains(&offset), "{edge} at {left}: {offset}");
            }
        }
    }
}

#[test]
fn absolute_and_fit_into_modes_differ_only_near_edges() {
    let style = BalloonStyle::default();
    let centered = LayoutRequest {
        anchor: Rect::new(190.0, 100.0, 20.0, 10.0),
        container: VIEWPORT,
        content: Size::new(100.0, 16.0),
        edge: Edge::North,
    };
    assert_eq!(
        layout(&centered, LayoutMode::AbsoluteAnchor, &style),
        layout(&centered, LayoutMode::FitInto, &style)
    );

    let near_edge = LayoutRequest { anchor: Rect::new(0.0, 100.0, 20.0, 10.0), ..centered };
    assert_ne!(
        layout(&near_edge, LayoutMode::AbsoluteAnchor, &style).origin,
        layout(&near_edge, LayoutMode::FitInto, &style).origin
    );
}

// =============================================================================
// Rendering
// =============================================================================

fn scenario_geometry(edge: Edge) -> BalloonGeometry {
    BalloonGeometry {
        body: Size::new(50.0, 30.0),
        edge,
        pointer_offset: PointerOffset::CENTER,
        corner_radius: 5.0,
        pointer_base: 10.0,
        pointer_height: 5.0,
        scale: PixelScale::try_new(2.0).unwrap(),
    }
}

#[test]
fn south_balloon_at_double_density() {
    let path = balloon_path(&scenario_geometry(Edge::South));
    insta::assert_snapshot!(
        path.to_svg_data(),
        @"M10,10 L90,10 A10,10 0 0 1 100,20 L100,50 A10,10 0 0 1 90,60 L10,60 A10,10 0 0 1 0,50 L0,20 A10,10 0 0 1 10,10 Z M50,0 L60,10 L40,10 L50,0 Z"
    );
}

#[test]
fn east_balloon_at_double_density() {
    let path = balloon_path(&scenario_geometry(Edge::East));
    insta::assert_snapshot!(
        path.to_svg_data(),
        @"M20,0 L90,0 A10,10 0 0 1 100,10 L100,50 A10,10 0 0 1 90,60 L20,60 A10,10 0 0 1 10,50 L10,10 A10,10 0 0 1 20,0 Z M0,30 L10,20 L10,40 L0,30 Z"
    );
}

#[test]
fn every_edge_produces_a_closed_path() {
    for edge in Edge::ALL {
        for offset in [0.0, 0.33, 0.5, 1.0] {
            let mut geom = scenario_geometry(edge);
            geom.pointer_offset = PointerOffset::clamped(offset);
            let path = balloon_path(&geom);
            for sub in path.subpaths() {
                assert_eq!(sub.first(), sub.last(), "{edge} at {offset}");
            }
            assert!(path.is_closed());
        }
    }
}

// =============================================================================
// Component
// =============================================================================

#[test]
fn show_paints_the_clamped_balloon() {
    let mut tip = fixed_tooltip(TooltipConfig::default(), 100.0, 16.0);
    let session = tip
        .show("Delete", &Rect::new(380.0, 50.0, 20.0, 10.0), None, VIEWPORT)
        .unwrap();
    assert_eq!(session.layout.origin, dvec2(300.0, 60.0));
    assert_eq!(session.layout.pointer_offset.raw(), 0.9);
    // painted one pixel inside the 100 x 21 body: round(0.9 * 99) = 89
    let apex = session.path.subpaths().pop().unwrap()[0];
    assert_eq!(apex, dvec2(89.0, 0.0));
    assert_eq!(tip.surface().extent(), (100, 21));
    assert!(tip.surface().alpha_at(50, 12) > 0);
}

#[test]
fn missing_anchor_is_rejected() {
    let mut tip = fixed_tooltip(TooltipConfig::default(), 10.0, 10.0);
    let result = tip.show("x", &None::<Rect>, None, VIEWPORT);
    assert_eq!(result.unwrap_err(), TooltipError::MissingAnchor);
}

#[test]
fn hide_twice_is_the_same_as_once() {
    let count = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut tip = fixed_tooltip(TooltipConfig::default(), 10.0, 10.0);
    let seen = std::rc::Rc::clone(&count);
    tip.on_visibility(move |visible| {
        if !visible {
            seen.set(seen.get() + 1);
        }
    });

    tip.show("x", &Rect::new(10.0, 10.0, 10.0, 10.0), None, VIEWPORT).unwrap();
    tip.hide();
    tip.hide();
    assert_eq!(count.get(), 1);
    assert!(!tip.is_visible());
    assert!(tip.session().is_none());
}

#[test]
fn hover_shows_first_candidate_with_content() {
    let mut tip = fixed_tooltip(TooltipConfig::default(), 60.0, 16.0);
    let chain = vec![
        TooltipTarget::plain(Rect::new(100.0, 100.0, 10.0, 10.0)),
        TooltipTarget::new(Rect::new(90.0, 90.0, 40.0, 30.0), "Open").with_edge(Edge::East),
        TooltipTarget::new(Rect::new(0.0, 0.0, 400.0, 300.0), "Outer"),
    ];
    let outcome = tip.hover(dvec2(105.0, 105.0), &chain, VIEWPORT).unwrap();
    assert_eq!(outcome, HoverOutcome::Shown);

    let session = tip.session().unwrap();
    assert_eq!(session.content, Content::text("Open"));
    assert_eq!(session.layout.edge, Edge::East);
    assert_eq!(session.anchor, Rect::new(90.0, 90.0, 40.0, 30.0));
}

#[test]
fn hover_inside_active_anchor_keeps_session() {
    let mut tip = fixed_tooltip(TooltipConfig::default(), 60.0, 16.0);
    let chain = vec![TooltipTarget::new(Rect::new(90.0, 90.0, 40.0, 30.0), "Open")];
    tip.hover(dvec2(100.0, 100.0), &chain, VIEWPORT).unwrap();
    let before = tip.session().cloned();

    let other = vec![TooltipTarget::new(Rect::new(0.0, 0.0, 400.0, 300.0), "Other")];
    let outcome = tip.hover(dvec2(130.0, 120.0), &other, VIEWPORT).unwrap();
    assert_eq!(outcome, HoverOutcome::StillInside);
    assert_eq!(tip.session().cloned(), before);
}

#[test]
fn hover_elsewhere_hides_and_finds_nothing() {
    let mut tip = fixed_tooltip(TooltipConfig::default(), 60.0, 16.0);
    let chain = vec![TooltipTarget::new(Rect::new(90.0, 90.0, 40.0, 30.0), "Open")];
    tip.hover(dvec2(100.0, 100.0), &chain, VIEWPORT).unwrap();

    let bare = vec![TooltipTarget::plain(Rect::new(300.0, 200.0, 10.0, 10.0))];
    let outcome = tip.hover(dvec2(305.0, 205.0), &bare, VIEWPORT).unwrap();
    assert_eq!(outcome, HoverOutcome::Nothing);
    assert!(!tip.is_visible());
}

#[test]
fn hover_respects_traversal_depth() {
    let rect = Rect::new(100.0, 100.0, 10.0, 10.0);
    let chain = vec![
        TooltipTarget::plain(rect),
        TooltipTarget::plain(rect),
        TooltipTarget::new(rect, "   "),
        TooltipTarget::new(rect, "Deep"),
    ];

    let mut shallow = fixed_tooltip(TooltipConfig::default(), 60.0, 16.0);
    assert_eq!(shallow.hover(dvec2(0.0, 0.0), &chain, VIEWPORT).unwrap(), HoverOutcome::Nothing);

    let mut deep = fixed_tooltip(TooltipConfig::default().max_depth(4), 60.0, 16.0);
    assert_eq!(deep.hover(dvec2(0.0, 0.0), &chain, VIEWPORT).unwrap(), HoverOutcome::Shown);
}

#[test]
fn hover_accepts_trait_objects() {
    struct Button;
    impl balloontip::Anchor for Button {
        fn bounding_rect(&self) -> Option<Rect> {
            Some(Rect::new(20.0, 20.0, 30.0, 12.0))
        }
    }
    impl HasTooltipData for Button {
        fn content(&self) -> Option<Content> {
            Some(Content::markup("<b>Print</b>"))
        }
    }

    let plain = TooltipTarget::plain(Rect::new(0.0, 0.0, 5.0, 5.0));
    let button = Button;
    let chain: Vec<&dyn HasTooltipData> = vec![&plain, &button];

    let mut tip = fixed_tooltip(TooltipConfig::default(), 40.0, 16.0);
    let outcome = tip.hover(dvec2(1.0, 1.0), chain.iter().copied(), VIEWPORT).unwrap();
    assert_eq!(outcome, HoverOutcome::Shown);
    assert_eq!(tip.session().unwrap().layout.edge, Edge::South);
}

#[test]
fn hover_candidate_without_rect_is_a_contract_violation() {
    let mut tip = fixed_tooltip(TooltipConfig::default(), 60.0, 16.0);
    let chain = vec![TooltipTarget::from_attributes(None, Some("Lost"), None)];
    let result = tip.hover(dvec2(0.0, 0.0), &chain, VIEWPORT);
    assert_eq!(result.unwrap_err(), TooltipError::MissingAnchor);
}

#[test]
fn default_measurer_drives_a_real_show() {
    let mut tip = Tooltip::new(TooltipConfig::default()).unwrap();
    tip.set_device_pixel_ratio(2.0).unwrap();
    let anchor = Rect::new(150.0, 40.0, 64.0, 24.0);
    let session = tip.show(Content::markup("Save<br>Ctrl+S"), &anchor, Some(Edge::North), VIEWPORT).unwrap();
    assert_eq!(session.layout.bounds().bottom(), anchor.top);
    assert!(session.layout.body.width > 10.0);
    let (w, h) = tip.surface().extent();
    assert!(w > 0 && h > 0);
}
