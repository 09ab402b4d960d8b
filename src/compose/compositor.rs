use crate::{
    compose::plan::{
        PlacementRect, PlannedDecoration, RenderPlan, RenderStrategy, ResolvedDecorProps,
    },
    config::model::{ColorToken, ComponentRef, DecorationItem, DecorationProps, TeamData},
    layout::responsive::{OffsetStyle, compute_corner_offset, compute_responsive_box},
};

/// Host rendering environment kind, decided once by the host shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// DOM/CSS-capable environment.
    Dom,
    /// Native environment, vector-graphics drawing when capable.
    Native,
}

/// Runtime render capabilities, probed once at startup and injected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderCaps {
    /// Whether a vector-graphics library is available on this platform.
    pub supports_vector_graphics: bool,
}

/// Per-call composition context.
#[derive(Clone, Copy, Debug)]
pub struct ComposeContext<'a> {
    /// Team context for the color resolution chain.
    pub team: Option<&'a TeamData>,
    /// Host environment kind.
    pub backend: BackendKind,
    /// Host render capabilities.
    pub caps: RenderCaps,
}

/// Total color resolution:
/// `explicit ?? team.decoration_border ?? team.main_color ?? component default`.
///
/// Always yields a defined token; the component default terminates the chain.
pub fn resolve_color(
    explicit: Option<&ColorToken>,
    team: Option<&TeamData>,
    component: &ComponentRef,
) -> ColorToken {
    explicit
        .or_else(|| team.and_then(|t| t.decoration_border.as_ref()))
        .or_else(|| team.and_then(|t| t.main_color.as_ref()))
        .cloned()
        .unwrap_or_else(|| component.default_color())
}

/// Compose resolved decoration items into a [`RenderPlan`].
///
/// For each item in list order: resolve the final color, derive the placement
/// rect (overlay centering for centered positions, corner offsets plus the
/// responsive sizing rule otherwise), select the drawing strategy for the
/// host, and assign the stacking index. Disabled or malformed items are
/// skipped silently; composition never fails.
#[tracing::instrument(skip(items, ctx), fields(count = items.len()))]
pub fn compose(items: &[DecorationItem], ctx: &ComposeContext<'_>) -> RenderPlan {
    let strategy = select_strategy(ctx);
    let mut planned = Vec::with_capacity(items.len());
    for item in items {
        let Some(component) = item.component.as_ref().filter(|c| !c.is_malformed()) else {
            tracing::debug!("skipping malformed decoration during composition");
            continue;
        };
        if !item.enabled {
            continue;
        }
        let props = finalize_props(component, &item.props, ctx.team);
        let placement = placement_for(&props);
        planned.push(PlannedDecoration {
            component: component.clone(),
            props,
            placement,
            strategy,
            z: planned.len() as u32,
        });
    }
    RenderPlan { items: planned }
}

/// Apply the documented defaults so nothing optional remains.
///
/// Tolerates raw (unresolved) items so `compose` stays total even when called
/// without going through the resolver first.
fn finalize_props(
    component: &ComponentRef,
    props: &DecorationProps,
    team: Option<&TeamData>,
) -> ResolvedDecorProps {
    let (default_w, default_h) = component.default_base_size();
    ResolvedDecorProps {
        color: resolve_color(props.color.as_ref(), team, component),
        opacity: props
            .opacity
            .unwrap_or_else(|| component.default_opacity())
            .clamp(0.0, 1.0),
        position: props.position.unwrap_or_else(|| component.default_position()),
        responsive: props.responsive.unwrap_or(true),
        base_width: props.base_width.unwrap_or(default_w),
        base_height: props.base_height.unwrap_or(default_h),
        maintain_aspect_ratio: props.maintain_aspect_ratio.unwrap_or(true),
        max_width_percent: props.max_width_percent.unwrap_or(100.0),
        width: props.width,
        height: props.height,
    }
}

fn placement_for(props: &ResolvedDecorProps) -> PlacementRect {
    let size = props.responsive.then(|| {
        compute_responsive_box(
            props.base_width,
            props.base_height,
            props.max_width_percent,
            props.maintain_aspect_ratio,
        )
    });
    if props.position.is_centered() {
        PlacementRect {
            offsets: OffsetStyle::EMPTY,
            size,
            overlay_center: true,
        }
    } else {
        PlacementRect {
            offsets: compute_corner_offset(props.position),
            size,
            overlay_center: false,
        }
    }
}

/// Strategy selection: DOM hosts draw CSS boxes; native hosts draw vector
/// graphics when capable and otherwise fall back to the plain-rectangle path.
/// Decoration is cosmetic and must never block the underlying content.
fn select_strategy(ctx: &ComposeContext<'_>) -> RenderStrategy {
    match ctx.backend {
        BackendKind::Dom => RenderStrategy::CssBox,
        BackendKind::Native if ctx.caps.supports_vector_graphics => {
            RenderStrategy::VectorGraphics
        }
        BackendKind::Native => {
            tracing::warn!("vector graphics unavailable, falling back to css-box rendering");
            RenderStrategy::CssBox
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
