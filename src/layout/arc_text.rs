use kurbo::Point;

/// Glyph count range the radius/angle scaling is calibrated for.
const SCALE_MIN_CHARS: usize = 2;
const SCALE_MAX_CHARS: usize = 6;

const BASE_RADIUS: f64 = 100.0;
const RADIUS_PER_CHAR: f64 = 30.0;
const BASE_ARC_DEG: f64 = 40.0;
const ARC_PER_CHAR_DEG: f64 = 9.0;

/// One glyph placed on the arc.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcGlyph {
    /// The character.
    pub ch: char,
    /// Rotation applied to the glyph, in degrees (negative tilts left).
    pub rotation_deg: f64,
    /// Horizontal offset from the container center.
    pub x: f64,
    /// Vertical offset from the container center (negative is upward).
    pub y: f64,
}

/// Per-character arc placement for arched jersey-style lettering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcLayout {
    /// Arc radius in px.
    pub radius: f64,
    /// Total arc sweep in degrees, symmetric about the vertical midline.
    pub arc_angle_deg: f64,
    /// Container center the glyph offsets are relative to.
    pub center: Point,
    /// Glyphs in text order.
    pub glyphs: Vec<ArcGlyph>,
}

/// Lay text out along a circular arc mimicking embroidered jersey lettering.
///
/// Radius and sweep scale with the glyph count, clamped to the 2..=6 range the
/// constants are calibrated for; distribution along the arc always uses the
/// actual count. Glyphs are only translated and rotated, never stretched, so
/// font rendering stays crisp on every backend. The apex sits above the
/// container center and the ends curve downward.
///
/// A single character is the degenerate case: one glyph at the apex with zero
/// rotation. Empty text yields no glyphs.
///
/// Both rendering backends must use this exact computation; any constant
/// drift shows up as visual mismatch between platforms.
pub fn layout_arc_text(text: &str, container_width: f64, container_height: f64) -> ArcLayout {
    let chars: Vec<char> = text.chars().collect();
    let scale_n = chars.len().clamp(SCALE_MIN_CHARS, SCALE_MAX_CHARS);
    let steps = (scale_n - SCALE_MIN_CHARS) as f64;
    let radius = BASE_RADIUS + steps * RADIUS_PER_CHAR;
    let arc_angle_deg = BASE_ARC_DEG + steps * ARC_PER_CHAR_DEG;
    let center = Point::new(container_width / 2.0, container_height / 2.0);

    let glyphs = match chars.len() {
        0 => Vec::new(),
        1 => vec![ArcGlyph {
            ch: chars[0],
            rotation_deg: 0.0,
            x: 0.0,
            y: -radius,
        }],
        count => {
            let angle_per_char = arc_angle_deg / (count - 1) as f64;
            chars
                .into_iter()
                .enumerate()
                .map(|(i, ch)| {
                    let rotation_deg = i as f64 * angle_per_char - arc_angle_deg / 2.0;
                    let rad = rotation_deg.to_radians();
                    ArcGlyph {
                        ch,
                        rotation_deg,
                        x: rad.sin() * radius,
                        y: -rad.cos() * radius,
                    }
                })
                .collect()
        }
    };

    ArcLayout {
        radius,
        arc_angle_deg,
        center,
        glyphs,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arc_text.rs"]
mod tests;
