use super::*;

#[test]
fn name_arc_matches_the_arc_engine_exactly() {
    let uniform = compose_uniform("BEARS", "31", 300.0, 400.0);
    assert_eq!(uniform.name_arc, layout_arc_text("BEARS", 300.0, 400.0));
}

#[test]
fn numeral_is_centered_in_a_fixed_height_band() {
    let uniform = compose_uniform("BEARS", "31", 300.0, 400.0);
    let numeral = uniform.numeral.unwrap();
    assert_eq!(numeral.text, "31");
    assert_eq!(numeral.center_x, 150.0);
    assert_eq!(numeral.band_top, 200.0);
    assert_eq!(numeral.band_height, 140.0);
}

#[test]
fn numeral_is_not_placed_on_the_arc() {
    // Same name, different number: the arc is untouched.
    let a = compose_uniform("TWINS", "7", 300.0, 400.0);
    let b = compose_uniform("TWINS", "99", 300.0, 400.0);
    assert_eq!(a.name_arc, b.name_arc);
}

#[test]
fn blank_number_yields_no_numeral_band() {
    assert!(compose_uniform("BEARS", "", 300.0, 400.0).numeral.is_none());
    assert!(compose_uniform("BEARS", "   ", 300.0, 400.0).numeral.is_none());
}
