use super::*;

#[test]
fn corners_pin_their_two_edges_at_zero() {
    let cases = [
        (Position::TopLeft, [true, true, false, false]),
        (Position::TopRight, [true, false, true, false]),
        (Position::BottomLeft, [false, true, false, true]),
        (Position::BottomRight, [false, false, true, true]),
    ];
    for (position, [top, left, right, bottom]) in cases {
        let style = compute_corner_offset(position);
        assert_eq!(style.top.is_some(), top, "{position:?}");
        assert_eq!(style.left.is_some(), left, "{position:?}");
        assert_eq!(style.right.is_some(), right, "{position:?}");
        assert_eq!(style.bottom.is_some(), bottom, "{position:?}");
        assert!(
            [style.top, style.left, style.right, style.bottom]
                .into_iter()
                .flatten()
                .all(|v| v == 0.0)
        );
    }
}

#[test]
fn centered_positions_return_the_empty_style() {
    for position in [Position::Center, Position::TopCenter, Position::BottomCenter] {
        assert!(compute_corner_offset(position).is_empty(), "{position:?}");
    }
}

#[test]
fn aspect_preserving_box_keeps_design_ratio() {
    let cases = [
        (347.0, 89.0, 100.0),
        (347.0, 89.0, 40.0),
        (501.0, 235.0, 85.0),
        (10.0, 10.0, 5.0),
    ];
    for (base_w, base_h, max_pct) in cases {
        let rule = compute_responsive_box(base_w, base_h, max_pct, true);
        for (avail_w, avail_h) in [(320.0, 480.0), (768.0, 1024.0), (1.0, 1.0)] {
            let (w, h) = rule.resolve_px(avail_w, avail_h);
            assert!(
                (w / h - base_w / base_h).abs() < 1e-6,
                "ratio drift for base {base_w}x{base_h} at {max_pct}%"
            );
        }
    }
}

#[test]
fn width_percent_is_honored() {
    let rule = compute_responsive_box(347.0, 89.0, 40.0, true);
    let (w, _) = rule.resolve_px(500.0, 500.0);
    assert!((w - 200.0).abs() < 1e-9);
}

#[test]
fn non_aspect_box_stretches_each_axis_independently() {
    let rule = compute_responsive_box(347.0, 89.0, 50.0, false);
    assert_eq!(rule.height, SizeRule::Fill);
    let (w, h) = rule.resolve_px(400.0, 300.0);
    assert_eq!(w, 200.0);
    assert_eq!(h, 300.0);
}

#[test]
fn non_positive_design_size_degrades_to_square_ratio() {
    let rule = compute_responsive_box(0.0, 89.0, 100.0, true);
    assert_eq!(rule.height, SizeRule::AspectOfWidth(1.0));
}

#[test]
fn out_of_range_percent_is_clamped() {
    let rule = compute_responsive_box(100.0, 100.0, 250.0, true);
    assert_eq!(rule.width, SizeRule::Percent(100.0));
}
