use std::collections::BTreeMap;
use std::fmt;

use crate::foundation::error::{CrestError, CrestResult};

#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
/// Opaque team identifier, unique within a [`crate::CustomizationRegistry`].
pub struct TeamId(String);

impl TeamId {
    /// Build a team id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A CSS-style color token (`"#0b1f4e"`, `"navy"`, ...).
///
/// The engine treats colors as opaque tokens; parsing and rasterization are
/// host concerns. Tokens only flow through the resolution chain.
pub struct ColorToken(String);

impl ColorToken {
    /// Build a color token from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Read-only team context supplied by the caller per render.
///
/// The engine never mutates team data; it only reads colors for the
/// [color resolution chain](crate::resolve_color) and the display name for
/// [alias fallback](crate::resolve_team_id).
pub struct TeamData {
    /// Team id as known to the data layer (may differ from registry keys).
    pub id: String,
    /// Human-readable display name, used for alias fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primary brand color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_color: Option<ColorToken>,
    /// Secondary brand color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_color: Option<ColorToken>,
    /// Primary brand color for dark mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_main_color: Option<ColorToken>,
    /// Secondary brand color for dark mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_sub_color: Option<ColorToken>,
    /// Border color preferred by decorations over the main color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_border: Option<ColorToken>,
    /// Sport discipline tag (`"baseball"`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Anchor position of a decoration within its parent container.
pub enum Position {
    /// Pin to the top-left corner.
    TopLeft,
    /// Pin to the top-right corner.
    TopRight,
    /// Pin to the bottom-left corner.
    BottomLeft,
    /// Pin to the bottom-right corner.
    BottomRight,
    /// Full-bleed overlay, centered on both axes.
    #[default]
    Center,
    /// Centered horizontally, pinned to the top edge.
    TopCenter,
    /// Centered horizontally, pinned to the bottom edge.
    BottomCenter,
}

impl Position {
    /// `true` for the three positions placed by overlay centering rather than
    /// corner offsets.
    pub fn is_centered(self) -> bool {
        matches!(self, Self::Center | Self::TopCenter | Self::BottomCenter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Renderable reference carried by a decoration.
///
/// This is the framework-agnostic stand-in for a dynamic UI component handle:
/// the compositor never instantiates anything, it only tags plan entries with
/// the variant so a host backend can map it to real drawing code.
pub enum ComponentRef {
    /// Diagonal accent stripe.
    Stripe,
    /// V-shaped chevron band.
    Chevron,
    /// Horizontal banner strip.
    Banner,
    /// Team wordmark lettering block.
    Wordmark,
    /// Host-defined component looked up by key.
    Custom(String),
}

impl ComponentRef {
    /// Fallback color terminating the color resolution chain.
    ///
    /// Deliberately not part of [`ComponentRef::default_props`]: if it were
    /// merged into item props up front, team colors could never apply.
    pub fn default_color(&self) -> ColorToken {
        match self {
            Self::Stripe => ColorToken::from("#1d2951"),
            Self::Chevron => ColorToken::from("#27316e"),
            Self::Banner => ColorToken::from("#343a40"),
            Self::Wordmark => ColorToken::from("#111111"),
            Self::Custom(_) => ColorToken::from("#222222"),
        }
    }

    /// Per-component default opacity.
    pub fn default_opacity(&self) -> f64 {
        match self {
            Self::Stripe => 0.8,
            Self::Chevron => 0.7,
            Self::Banner => 0.9,
            Self::Wordmark => 0.6,
            Self::Custom(_) => 0.8,
        }
    }

    /// Design-resolution size the component's asset was authored at.
    pub fn default_base_size(&self) -> (f64, f64) {
        match self {
            Self::Stripe => (347.0, 89.0),
            Self::Chevron => (501.0, 235.0),
            Self::Banner => (347.0, 89.0),
            Self::Wordmark => (501.0, 89.0),
            Self::Custom(_) => (100.0, 100.0),
        }
    }

    /// Default anchor position.
    pub fn default_position(&self) -> Position {
        match self {
            Self::Stripe => Position::BottomLeft,
            Self::Chevron => Position::TopRight,
            Self::Banner => Position::BottomCenter,
            Self::Wordmark | Self::Custom(_) => Position::Center,
        }
    }

    /// Built-in default props for this component (lowest merge precedence).
    ///
    /// Color is excluded; see [`ComponentRef::default_color`].
    pub fn default_props(&self) -> DecorationProps {
        let (base_width, base_height) = self.default_base_size();
        DecorationProps {
            opacity: Some(self.default_opacity()),
            position: Some(self.default_position()),
            base_width: Some(base_width),
            base_height: Some(base_height),
            ..DecorationProps::default()
        }
    }

    /// A `Custom` reference with an empty key cannot be rendered and is
    /// treated as disabled by the resolver.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Custom(key) if key.trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Visual properties of a decoration; every field is optional and merged in
/// precedence order (component defaults < item props < caller overrides).
///
/// Defaults applied at composition time when still unset: `responsive = true`,
/// `maintain_aspect_ratio = true`, `position` = the component's default
/// anchor, `max_width_percent = 100`.
pub struct DecorationProps {
    /// Explicit width in px (only honored when `responsive` is off).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit height in px (only honored when `responsive` is off).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Explicit color, highest precedence in the resolution chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorToken>,
    /// Opacity in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Anchor position within the parent container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Scale with the parent container instead of using fixed px sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    /// Design-resolution width the asset was authored at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_width: Option<f64>,
    /// Design-resolution height the asset was authored at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_height: Option<f64>,
    /// Keep `base_width : base_height` when scaling responsively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    /// Max width as a percentage of the parent's available width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width_percent: Option<f64>,
}

impl DecorationProps {
    /// Merge `over` on top of `self`; set fields in `over` win.
    pub fn merged_with(&self, over: &DecorationProps) -> DecorationProps {
        DecorationProps {
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            color: over.color.clone().or_else(|| self.color.clone()),
            opacity: over.opacity.or(self.opacity),
            position: over.position.or(self.position),
            responsive: over.responsive.or(self.responsive),
            base_width: over.base_width.or(self.base_width),
            base_height: over.base_height.or(self.base_height),
            maintain_aspect_ratio: over.maintain_aspect_ratio.or(self.maintain_aspect_ratio),
            max_width_percent: over.max_width_percent.or(self.max_width_percent),
        }
    }

    fn validate(&self) -> CrestResult<()> {
        if let Some(o) = self.opacity
            && !(0.0..=1.0).contains(&o)
        {
            return Err(CrestError::validation("opacity must be within [0, 1]"));
        }
        if let Some(p) = self.max_width_percent
            && !(p > 0.0 && p <= 100.0)
        {
            return Err(CrestError::validation(
                "maxWidthPercent must be within (0, 100]",
            ));
        }
        for (key, dim) in [
            ("width", self.width),
            ("height", self.height),
            ("baseWidth", self.base_width),
            ("baseHeight", self.base_height),
        ] {
            if let Some(d) = dim
                && !(d > 0.0 && d.is_finite())
            {
                return Err(CrestError::validation(format!(
                    "{key} must be a positive finite number"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One decorative layer in a team config.
pub struct DecorationItem {
    /// Renderable reference; `None` while `enabled` marks the item malformed
    /// and it is silently skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,
    /// Declared props, merged over component defaults at resolve time.
    #[serde(default)]
    pub props: DecorationProps,
    /// Disabled items never reach the compositor.
    pub enabled: bool,
}

impl DecorationItem {
    /// `true` when the item survives resolution: enabled with a renderable
    /// component reference.
    pub fn is_renderable(&self) -> bool {
        self.enabled && self.component.as_ref().is_some_and(|c| !c.is_malformed())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// A config's `decoration` field: a single item or an ordered list.
///
/// Declaration order is meaningful: earlier entries render below later ones
/// when positions coincide.
pub enum DecorationSpec {
    /// Single decoration.
    One(DecorationItem),
    /// Ordered list of decorations.
    Many(Vec<DecorationItem>),
}

impl DecorationSpec {
    /// View the spec as an ordered slice regardless of shape.
    pub fn items(&self) -> &[DecorationItem] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Uniform visual (arched name + centered numeral) for a team.
pub struct UniformSpec {
    /// Renderable reference for the uniform body.
    pub component: ComponentRef,
    /// Declared props.
    #[serde(default)]
    pub props: DecorationProps,
    /// Disabled uniforms are ignored.
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Host-defined component slotted into a named extension point.
pub struct CustomComponent {
    /// Renderable reference resolved by the host.
    pub component: ComponentRef,
    /// Free-form props forwarded to the host component untouched.
    #[serde(default)]
    pub props: serde_json::Value,
    /// Disabled components are ignored.
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Complete declarative customization for one team.
///
/// Configs are pure data: authored in code at startup (see
/// [`crate::ConfigBuilder`]), registered into a
/// [`crate::CustomizationRegistry`], and serializable via Serde (JSON) for
/// tooling.
pub struct TeamCustomizationConfig {
    /// Canonical registry key.
    pub team_id: TeamId,
    /// Canonical display name.
    pub team_name: String,
    /// Decorative layers, single or ordered list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration: Option<DecorationSpec>,
    /// Uniform visual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniform: Option<UniformSpec>,
    /// Named extension-point components.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_components: BTreeMap<String, CustomComponent>,
    /// Declarative style fragments keyed by slot name, applied verbatim by
    /// the host's styling system.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, serde_json::Value>,
}

impl TeamCustomizationConfig {
    /// Validate authored data. Called by the builder; `register` itself
    /// accepts configs as-is.
    pub fn validate(&self) -> CrestResult<()> {
        if self.team_id.as_str().trim().is_empty() {
            return Err(CrestError::validation("teamId must be non-empty"));
        }
        if let Some(spec) = &self.decoration {
            for item in spec.items() {
                item.props.validate()?;
            }
        }
        if let Some(uniform) = &self.uniform {
            uniform.props.validate()?;
        }
        Ok(())
    }
}
