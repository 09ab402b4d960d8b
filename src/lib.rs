//! Crestkit is a team visual-customization engine.
//!
//! Crestkit maintains a registry mapping a team identifier to a declarative
//! customization config, resolves at render time which decorative layers apply
//! to a team and in what order, and computes the responsive geometry
//! (aspect-ratio-preserving sizing, corner/center placement, per-character arc
//! placement for arched text) needed to render those layers consistently
//! across a DOM/CSS-capable host and a vector-graphics-capable host.
//!
//! # Pipeline overview
//!
//! 1. **Register**: `TeamCustomizationConfig`s are built once at startup and
//!    stored in a [`CustomizationRegistry`] (observable key-value store).
//! 2. **Resolve**: `(team id, TeamData) -> Vec<DecorationItem>` — registry and
//!    alias lookup, enabled-only filtering, prop merging
//!    ([`resolve_decorations`]).
//! 3. **Compose**: `Vec<DecorationItem> -> RenderPlan` — per-item color chain,
//!    placement rect and rendering strategy ([`compose`]).
//! 4. **Draw**: a host backend walks the plan through the
//!    [`DecorationSurface`] capability trait ([`execute_plan`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Best-effort decoration**: resolution and geometry paths never fail;
//!   missing or malformed configuration degrades to an empty or fallback
//!   result, because a cosmetic layer must never block primary content.
//! - **Deterministic**: resolution, composition and all geometry are pure and
//!   stable for a given input; only the registry holds state.
//! - **Single-threaded**: every operation completes synchronously within the
//!   host's current render tick.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod config;
mod engine;
mod foundation;
mod layout;
mod registry;
mod render;
mod resolve;

pub use compose::compositor::{BackendKind, ComposeContext, RenderCaps, compose, resolve_color};
pub use compose::plan::{
    PlacementRect, PlannedDecoration, RenderPlan, RenderStrategy, ResolvedDecorProps,
};
pub use compose::uniform::{NumeralBand, UniformLayout, compose_uniform};
pub use config::dsl::{ConfigBuilder, banner, chevron, stripe};
pub use config::model::{
    ColorToken, ComponentRef, CustomComponent, DecorationItem, DecorationProps, DecorationSpec,
    Position, TeamCustomizationConfig, TeamData, TeamId, UniformSpec,
};
pub use engine::CustomizationEngine;
pub use foundation::error::{CrestError, CrestResult};
pub use layout::arc_text::{ArcGlyph, ArcLayout, layout_arc_text};
pub use layout::responsive::{
    OffsetStyle, ResponsiveBox, SizeRule, compute_corner_offset, compute_responsive_box,
};
pub use registry::alias::{canonical_id_for_name, resolve_team_id};
pub use registry::store::{CustomizationRegistry, ListenerId};
pub use render::surface::{DecorationSurface, execute_plan};
pub use resolve::decorations::{resolve_decorations, resolve_decorations_with};

pub use kurbo::Point;
