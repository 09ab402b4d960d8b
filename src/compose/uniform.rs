use crate::layout::arc_text::{ArcLayout, layout_arc_text};

/// Vertical extent of the numeral band as fractions of the container height.
const NUMERAL_BAND_TOP_FRAC: f64 = 0.5;
const NUMERAL_BAND_HEIGHT_FRAC: f64 = 0.35;

/// Independently centered numeral block of a uniform visual.
///
/// The numeral is flex-centered within its own fixed-height band; it is not
/// placed on the arc and involves no trigonometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumeralBand {
    /// Numeral text (digits as authored).
    pub text: String,
    /// Horizontal centerline, shared with the arc's coordinate frame.
    pub center_x: f64,
    /// Top edge of the band in container coordinates.
    pub band_top: f64,
    /// Fixed band height.
    pub band_height: f64,
}

/// Two-part uniform layout: arched name above, centered numeral below.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniformLayout {
    /// Arc placement of the name lettering.
    pub name_arc: ArcLayout,
    /// Centered numeral block; `None` when no number was supplied.
    pub numeral: Option<NumeralBand>,
}

/// Lay out a uniform visual: the name on the jersey arch, the number centered
/// in a fixed-height band below. The two sub-layouts share the container's
/// coordinate frame but are computed independently.
pub fn compose_uniform(
    name: &str,
    number: &str,
    container_width: f64,
    container_height: f64,
) -> UniformLayout {
    let name_arc = layout_arc_text(name, container_width, container_height);
    let number = number.trim();
    let numeral = (!number.is_empty()).then(|| NumeralBand {
        text: number.to_string(),
        center_x: container_width / 2.0,
        band_top: container_height * NUMERAL_BAND_TOP_FRAC,
        band_height: container_height * NUMERAL_BAND_HEIGHT_FRAC,
    });
    UniformLayout { name_arc, numeral }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/uniform.rs"]
mod tests;
