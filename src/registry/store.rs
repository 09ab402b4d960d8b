use std::collections::BTreeMap;
use std::fmt;

use crate::config::model::{TeamCustomizationConfig, TeamId};

/// Opaque handle returned by [`CustomizationRegistry::add_listener`], used to
/// unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn()>;

/// Observable in-memory store of `TeamId -> TeamCustomizationConfig`.
///
/// The registry is an explicit instance owned by the application's composition
/// root and injected into consumers; there is no global singleton. It is
/// single-threaded state: every mutation and notification completes
/// synchronously within the caller's render tick.
///
/// Listeners receive no payload (a pure "something changed" signal) and are
/// invoked synchronously in registration order; consumers re-pull via
/// [`CustomizationRegistry::get`]. Because mutation requires `&mut self`, a
/// listener cannot re-enter the registry during its own notification; it can
/// only flag dirty state and re-pull after the mutating call returns.
#[derive(Default)]
pub struct CustomizationRegistry {
    configs: BTreeMap<TeamId, TeamCustomizationConfig>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl CustomizationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or silently replace the config stored under its team id, then
    /// notify listeners once. Last register wins.
    pub fn register(&mut self, config: TeamCustomizationConfig) {
        tracing::debug!(team_id = %config.team_id, "register customization");
        self.configs.insert(config.team_id.clone(), config);
        self.notify_listeners();
    }

    /// Apply all inserts, then a single notification pass.
    ///
    /// Unlike calling [`CustomizationRegistry::register`] N times, this fires
    /// exactly one change event for the whole batch.
    pub fn register_multiple(&mut self, configs: impl IntoIterator<Item = TeamCustomizationConfig>) {
        for config in configs {
            self.configs.insert(config.team_id.clone(), config);
        }
        self.notify_listeners();
    }

    /// Remove the config if present. Always notifies, even when the key was
    /// absent, so removal is idempotent for callers.
    pub fn unregister(&mut self, team_id: &TeamId) {
        self.configs.remove(team_id);
        self.notify_listeners();
    }

    /// Look up the config for a team id.
    pub fn get(&self, team_id: &TeamId) -> Option<&TeamCustomizationConfig> {
        self.configs.get(team_id)
    }

    /// `true` when a config is registered under the id.
    pub fn has_customization(&self, team_id: &TeamId) -> bool {
        self.configs.contains_key(team_id)
    }

    /// Number of registered configs.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// `true` when no configs are registered.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Registered team ids in key order.
    pub fn team_ids(&self) -> impl Iterator<Item = &TeamId> {
        self.configs.keys()
    }

    /// Subscribe to change notifications; the returned token unsubscribes via
    /// [`CustomizationRegistry::remove_listener`].
    pub fn add_listener(&mut self, listener: impl Fn() + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener; returns `false` when the token was already removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify_listeners(&self) {
        for (_, listener) in &self.listeners {
            listener();
        }
    }
}

impl fmt::Debug for CustomizationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomizationRegistry")
            .field("configs", &self.configs.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/store.rs"]
mod tests;
