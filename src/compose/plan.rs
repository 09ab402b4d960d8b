use crate::{
    config::model::{ColorToken, ComponentRef, Position},
    layout::responsive::{OffsetStyle, ResponsiveBox},
};

/// Backend-agnostic, ready-to-draw output of the compositor.
///
/// A plan carries everything the view layer needs with no further
/// decision-making: for each decoration, the component to draw, fully
/// resolved props, a placement rect and the rendering strategy.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderPlan {
    /// Planned decorations in stacking order (`z` ascending).
    pub items: Vec<PlannedDecoration>,
}

/// One fully resolved decoration in a [`RenderPlan`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlannedDecoration {
    /// Component to draw.
    pub component: ComponentRef,
    /// Props with every default applied; nothing optional remains.
    pub props: ResolvedDecorProps,
    /// Final placement within the parent container.
    pub placement: PlacementRect,
    /// Selected drawing path.
    pub strategy: RenderStrategy,
    /// Stable stacking index: the item's position in the compositor input.
    pub z: u32,
}

/// Decoration props after the total defaulting pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDecorProps {
    /// Final color from the total resolution chain; always defined.
    pub color: ColorToken,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Anchor position.
    pub position: Position,
    /// Whether the item scales with its parent.
    pub responsive: bool,
    /// Design-resolution width.
    pub base_width: f64,
    /// Design-resolution height.
    pub base_height: f64,
    /// Whether responsive scaling keeps the design ratio.
    pub maintain_aspect_ratio: bool,
    /// Width cap as a percentage of the parent.
    pub max_width_percent: f64,
    /// Explicit fixed width in px, when authored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit fixed height in px, when authored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Final placement of a planned decoration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRect {
    /// Edge offsets; empty for overlay-centered items.
    pub offsets: OffsetStyle,
    /// Responsive sizing rule; `None` for fixed-size items.
    pub size: Option<ResponsiveBox>,
    /// Place as a full-bleed overlay with box centering instead of offsets.
    pub overlay_center: bool,
}

/// Drawing path selected per item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderStrategy {
    /// Styled rectangle / inline markup on a DOM-capable host.
    CssBox,
    /// Vector-graphics drawing on a capable native host.
    VectorGraphics,
}
