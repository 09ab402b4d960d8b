use crate::{
    compose::compositor::{BackendKind, ComposeContext, RenderCaps, compose},
    compose::plan::RenderPlan,
    compose::uniform::{UniformLayout, compose_uniform},
    config::model::{DecorationItem, TeamCustomizationConfig, TeamData, TeamId},
    registry::alias::resolve_team_id,
    registry::store::{CustomizationRegistry, ListenerId},
    resolve::decorations::resolve_decorations,
};

/// Facade owned by the application's composition root.
///
/// Bundles the registry with the backend context decided once at startup, so
/// consuming views hold a single injected object and never re-probe platform
/// capabilities per render.
#[derive(Debug)]
pub struct CustomizationEngine {
    registry: CustomizationRegistry,
    backend: BackendKind,
    caps: RenderCaps,
}

impl CustomizationEngine {
    /// Create an engine for the given host environment.
    pub fn new(backend: BackendKind, caps: RenderCaps) -> Self {
        Self {
            registry: CustomizationRegistry::new(),
            backend,
            caps,
        }
    }

    /// Borrow the underlying registry.
    pub fn registry(&self) -> &CustomizationRegistry {
        &self.registry
    }

    /// Mutably borrow the underlying registry.
    pub fn registry_mut(&mut self) -> &mut CustomizationRegistry {
        &mut self.registry
    }

    /// See [`CustomizationRegistry::register`].
    pub fn register(&mut self, config: TeamCustomizationConfig) {
        self.registry.register(config);
    }

    /// See [`CustomizationRegistry::register_multiple`].
    pub fn register_multiple(
        &mut self,
        configs: impl IntoIterator<Item = TeamCustomizationConfig>,
    ) {
        self.registry.register_multiple(configs);
    }

    /// See [`CustomizationRegistry::unregister`].
    pub fn unregister(&mut self, team_id: &TeamId) {
        self.registry.unregister(team_id);
    }

    /// See [`CustomizationRegistry::get`].
    pub fn get(&self, team_id: &TeamId) -> Option<&TeamCustomizationConfig> {
        self.registry.get(team_id)
    }

    /// See [`CustomizationRegistry::has_customization`].
    pub fn has_customization(&self, team_id: &TeamId) -> bool {
        self.registry.has_customization(team_id)
    }

    /// See [`CustomizationRegistry::add_listener`].
    pub fn add_listener(&mut self, listener: impl Fn() + 'static) -> ListenerId {
        self.registry.add_listener(listener)
    }

    /// See [`CustomizationRegistry::remove_listener`].
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.registry.remove_listener(id)
    }

    /// Resolve the decoration list for a team against this engine's registry.
    pub fn resolve_decorations(
        &self,
        team_id: &str,
        team: Option<&TeamData>,
    ) -> Vec<DecorationItem> {
        resolve_decorations(&self.registry, team_id, team)
    }

    /// Compose already-resolved items with this engine's backend context.
    pub fn compose(&self, items: &[DecorationItem], team: Option<&TeamData>) -> RenderPlan {
        compose(
            items,
            &ComposeContext {
                team,
                backend: self.backend,
                caps: self.caps,
            },
        )
    }

    /// Resolve and compose in one call; the common per-render entry point.
    pub fn plan_for_team(&self, team_id: &str, team: Option<&TeamData>) -> RenderPlan {
        let items = self.resolve_decorations(team_id, team);
        self.compose(&items, team)
    }

    /// Uniform layout for a team: the config's display name arched over a
    /// centered numeral block. `None` when the team has no enabled uniform.
    pub fn uniform_for_team(
        &self,
        team_id: &str,
        team: Option<&TeamData>,
        number: &str,
        container_width: f64,
        container_height: f64,
    ) -> Option<UniformLayout> {
        let team_name = team.and_then(|t| t.name.as_deref());
        let canonical = resolve_team_id(&self.registry, team_id, team_name)?;
        let config = self.registry.get(&canonical)?;
        let uniform = config.uniform.as_ref()?;
        uniform.enabled.then(|| {
            compose_uniform(
                &config.team_name,
                number,
                container_width,
                container_height,
            )
        })
    }
}
