use crate::config::model::Position;

/// A relative sizing rule, resolved to absolute pixels by the host layout
/// system (CSS `width`/`aspect-ratio` on DOM, `viewBox` scaling on vector
/// backends).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeRule {
    /// Percentage of the parent's available extent on this axis.
    Percent(f64),
    /// `extent = resolved width * ratio`; keeps the design aspect ratio.
    AspectOfWidth(f64),
    /// Fill the available extent on this axis independently.
    Fill,
}

/// A responsive box: one [`SizeRule`] per axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResponsiveBox {
    /// Horizontal sizing rule.
    pub width: SizeRule,
    /// Vertical sizing rule.
    pub height: SizeRule,
}

impl ResponsiveBox {
    /// Resolve the rules to absolute pixels against an available box.
    ///
    /// Used by vector backends (which need concrete coordinates up front) and
    /// by tests asserting the aspect-preservation invariant.
    pub fn resolve_px(&self, avail_width: f64, avail_height: f64) -> (f64, f64) {
        let width = match self.width {
            SizeRule::Percent(p) => avail_width * p / 100.0,
            SizeRule::AspectOfWidth(_) => avail_width,
            SizeRule::Fill => avail_width,
        };
        let height = match self.height {
            SizeRule::Percent(p) => avail_height * p / 100.0,
            SizeRule::AspectOfWidth(ratio) => width * ratio,
            SizeRule::Fill => avail_height,
        };
        (width, height)
    }
}

/// Compute the responsive sizing rule for an asset authored at
/// `base_width x base_height`.
///
/// Aspect-preserving: width resolves from `max_width_percent` of the parent
/// and height follows the design ratio. Otherwise both axes resolve
/// independently (width capped at `max_width_percent`, height fills).
///
/// Non-positive base dimensions degrade to a 1:1 ratio; geometry never fails.
pub fn compute_responsive_box(
    base_width: f64,
    base_height: f64,
    max_width_percent: f64,
    maintain_aspect_ratio: bool,
) -> ResponsiveBox {
    let width = SizeRule::Percent(max_width_percent.clamp(0.0, 100.0));
    if !maintain_aspect_ratio {
        return ResponsiveBox {
            width,
            height: SizeRule::Fill,
        };
    }

    let ratio = if base_width > 0.0 && base_height > 0.0 {
        base_height / base_width
    } else {
        tracing::debug!(base_width, base_height, "non-positive design size, using 1:1");
        1.0
    };
    ResponsiveBox {
        width,
        height: SizeRule::AspectOfWidth(ratio),
    }
}

/// Offset-based placement style: each set key pins that edge at the offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OffsetStyle {
    /// Offset from the top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// Offset from the left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Offset from the right edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    /// Offset from the bottom edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
}

impl OffsetStyle {
    /// The empty style: no edge pinned.
    pub const EMPTY: Self = Self {
        top: None,
        left: None,
        right: None,
        bottom: None,
    };

    /// `true` when no edge is pinned.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Corner-offset placement for a position.
///
/// The four corners pin their two adjacent edges at offset `0`. The three
/// centered positions return the empty style; the compositor places those by
/// overlay centering instead (see [`Position::is_centered`]).
pub fn compute_corner_offset(position: Position) -> OffsetStyle {
    let zero = Some(0.0);
    match position {
        Position::TopLeft => OffsetStyle {
            top: zero,
            left: zero,
            ..OffsetStyle::EMPTY
        },
        Position::TopRight => OffsetStyle {
            top: zero,
            right: zero,
            ..OffsetStyle::EMPTY
        },
        Position::BottomLeft => OffsetStyle {
            bottom: zero,
            left: zero,
            ..OffsetStyle::EMPTY
        },
        Position::BottomRight => OffsetStyle {
            bottom: zero,
            right: zero,
            ..OffsetStyle::EMPTY
        },
        Position::Center | Position::TopCenter | Position::BottomCenter => OffsetStyle::EMPTY,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/responsive.rs"]
mod tests;
