use super::*;

#[test]
fn radius_and_sweep_scale_with_char_count() {
    let cases = [
        ("ab", 100.0, 40.0),
        ("abc", 130.0, 49.0),
        ("abcd", 160.0, 58.0),
        ("abcde", 190.0, 67.0),
        ("abcdef", 220.0, 76.0),
    ];
    for (text, radius, sweep) in cases {
        let layout = layout_arc_text(text, 300.0, 300.0);
        assert_eq!(layout.radius, radius, "{text}");
        assert_eq!(layout.arc_angle_deg, sweep, "{text}");
    }
}

#[test]
fn rotations_are_symmetric_about_zero() {
    for text in ["ab", "abc", "BEARS", "TWINS6"] {
        let layout = layout_arc_text(text, 300.0, 300.0);
        let first = layout.glyphs.first().unwrap().rotation_deg;
        let last = layout.glyphs.last().unwrap().rotation_deg;
        assert!((first + last).abs() < 1e-9, "{text}");
        assert!((first - (-layout.arc_angle_deg / 2.0)).abs() < 1e-9, "{text}");
    }
}

#[test]
fn middle_glyph_of_odd_text_sits_at_the_apex() {
    let layout = layout_arc_text("abc", 300.0, 300.0);
    let mid = layout.glyphs[1];
    assert_eq!(mid.rotation_deg, 0.0);
    assert_eq!(mid.x, 0.0);
    assert_eq!(mid.y, -layout.radius);
}

#[test]
fn long_text_is_clamped_for_scaling_but_fully_distributed() {
    let layout = layout_arc_text("HEROES77", 300.0, 300.0);
    assert_eq!(layout.radius, 220.0);
    assert_eq!(layout.arc_angle_deg, 76.0);
    assert_eq!(layout.glyphs.len(), 8);
    let step = layout.glyphs[1].rotation_deg - layout.glyphs[0].rotation_deg;
    assert!((step - 76.0 / 7.0).abs() < 1e-9);
}

#[test]
fn single_character_is_degenerate() {
    let layout = layout_arc_text("A", 200.0, 100.0);
    assert_eq!(layout.glyphs.len(), 1);
    let glyph = layout.glyphs[0];
    assert_eq!(glyph.rotation_deg, 0.0);
    assert_eq!(glyph.x, 0.0);
    assert_eq!(glyph.y, -layout.radius);
}

#[test]
fn empty_text_yields_no_glyphs() {
    assert!(layout_arc_text("", 200.0, 100.0).glyphs.is_empty());
}

#[test]
fn glyphs_iterate_korean_text_by_character() {
    let layout = layout_arc_text("두산베어스", 300.0, 300.0);
    assert_eq!(layout.glyphs.len(), 5);
    let chars: String = layout.glyphs.iter().map(|g| g.ch).collect();
    assert_eq!(chars, "두산베어스");
}

#[test]
fn arc_ends_curve_downward_from_the_apex() {
    let layout = layout_arc_text("BEARS", 300.0, 300.0);
    let apex_y = layout.glyphs[2].y;
    assert!(layout.glyphs[0].y > apex_y);
    assert!(layout.glyphs[4].y > apex_y);
    // Offsets are relative to the container center.
    assert_eq!(layout.center, Point::new(150.0, 150.0));
}
