use crate::{
    config::model::{DecorationItem, DecorationProps, TeamData},
    registry::alias::resolve_team_id,
    registry::store::CustomizationRegistry,
};

/// Resolve the ordered, enabled-only, prop-merged decoration list for a team.
///
/// Equivalent to [`resolve_decorations_with`] with no caller overrides.
#[tracing::instrument(skip(registry, team))]
pub fn resolve_decorations(
    registry: &CustomizationRegistry,
    team_id: &str,
    team: Option<&TeamData>,
) -> Vec<DecorationItem> {
    resolve_decorations_with(registry, team_id, team, &DecorationProps::default())
}

/// Resolve decorations with caller-supplied per-call prop overrides.
///
/// Pipeline:
/// 1. Registry lookup via the two-level id/alias resolution.
/// 2. Normalize the config's `decoration` field into an ordered list.
/// 3. Drop disabled and malformed items.
/// 4. Merge props, lowest to highest precedence: component defaults, the
///    item's declared props, then `overrides`. `enabled` is not a prop and
///    cannot be overridden.
///
/// Total: any missing piece degrades to an empty list, never an error.
#[tracing::instrument(skip(registry, team, overrides))]
pub fn resolve_decorations_with(
    registry: &CustomizationRegistry,
    team_id: &str,
    team: Option<&TeamData>,
    overrides: &DecorationProps,
) -> Vec<DecorationItem> {
    let team_name = team.and_then(|t| t.name.as_deref());
    let Some(canonical) = resolve_team_id(registry, team_id, team_name) else {
        return Vec::new();
    };
    let Some(config) = registry.get(&canonical) else {
        return Vec::new();
    };
    let Some(spec) = &config.decoration else {
        return Vec::new();
    };

    let mut resolved = Vec::with_capacity(spec.items().len());
    for item in spec.items() {
        if !item.enabled {
            continue;
        }
        let Some(component) = item.component.as_ref().filter(|c| !c.is_malformed()) else {
            tracing::debug!(team_id = %canonical, "skipping malformed decoration item");
            continue;
        };
        let props = component
            .default_props()
            .merged_with(&item.props)
            .merged_with(overrides);
        resolved.push(DecorationItem {
            component: Some(component.clone()),
            props,
            enabled: true,
        });
    }
    resolved
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/decorations.rs"]
mod tests;
