use std::collections::BTreeMap;

use crate::{
    config::model::{
        ComponentRef, CustomComponent, DecorationItem, DecorationProps, DecorationSpec, Position,
        TeamCustomizationConfig, TeamId, UniformSpec,
    },
    foundation::error::{CrestError, CrestResult},
};

/// Fluent builder for [`TeamCustomizationConfig`].
///
/// Configs are authored in code at startup; the builder validates on
/// [`ConfigBuilder::build`] so malformed authored data is caught before it
/// ever reaches a registry.
#[derive(Debug)]
pub struct ConfigBuilder {
    team_id: TeamId,
    team_name: String,
    decorations: Vec<DecorationItem>,
    uniform: Option<UniformSpec>,
    custom_components: BTreeMap<String, CustomComponent>,
    styles: BTreeMap<String, serde_json::Value>,
}

impl ConfigBuilder {
    /// Start a config for the given canonical team id and display name.
    pub fn new(team_id: impl Into<TeamId>, team_name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            team_name: team_name.into(),
            decorations: Vec::new(),
            uniform: None,
            custom_components: BTreeMap::new(),
            styles: BTreeMap::new(),
        }
    }

    /// Append a decoration layer; declaration order sets stacking order.
    pub fn decoration(mut self, item: DecorationItem) -> Self {
        self.decorations.push(item);
        self
    }

    /// Set the uniform visual.
    pub fn uniform(mut self, uniform: UniformSpec) -> Self {
        self.uniform = Some(uniform);
        self
    }

    /// Register a host component under a named extension point.
    /// Duplicate keys are a validation error.
    pub fn custom_component(
        mut self,
        key: impl Into<String>,
        component: CustomComponent,
    ) -> CrestResult<Self> {
        let key = key.into();
        if self.custom_components.contains_key(&key) {
            return Err(CrestError::validation(format!(
                "duplicate custom component key '{key}'"
            )));
        }
        self.custom_components.insert(key, component);
        Ok(self)
    }

    /// Attach a declarative style fragment under a slot name.
    /// Duplicate keys are a validation error.
    pub fn style(mut self, key: impl Into<String>, value: serde_json::Value) -> CrestResult<Self> {
        let key = key.into();
        if self.styles.contains_key(&key) {
            return Err(CrestError::validation(format!(
                "duplicate style key '{key}'"
            )));
        }
        self.styles.insert(key, value);
        Ok(self)
    }

    /// Finalize and validate the config.
    pub fn build(self) -> CrestResult<TeamCustomizationConfig> {
        let decoration = match self.decorations.len() {
            0 => None,
            1 => Some(DecorationSpec::One(
                self.decorations.into_iter().next().expect("len checked"),
            )),
            _ => Some(DecorationSpec::Many(self.decorations)),
        };
        let config = TeamCustomizationConfig {
            team_id: self.team_id,
            team_name: self.team_name,
            decoration,
            uniform: self.uniform,
            custom_components: self.custom_components,
            styles: self.styles,
        };
        config.validate()?;
        Ok(config)
    }
}

/// An enabled stripe pinned at `position`.
pub fn stripe(position: Position) -> DecorationItem {
    item_at(ComponentRef::Stripe, position)
}

/// An enabled chevron pinned at `position`.
pub fn chevron(position: Position) -> DecorationItem {
    item_at(ComponentRef::Chevron, position)
}

/// An enabled banner pinned at `position`.
pub fn banner(position: Position) -> DecorationItem {
    item_at(ComponentRef::Banner, position)
}

fn item_at(component: ComponentRef, position: Position) -> DecorationItem {
    DecorationItem {
        component: Some(component),
        props: DecorationProps {
            position: Some(position),
            ..DecorationProps::default()
        },
        enabled: true,
    }
}
