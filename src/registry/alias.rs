use crate::{config::model::TeamId, registry::store::CustomizationRegistry};

/// Display-name variants mapped to canonical registry ids.
///
/// Team identity in the data layer is not guaranteed to match registry keys,
/// so this table is a deliberate compatibility seam: new variants must be
/// added here explicitly, never inferred from string similarity.
static TEAM_NAME_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "두산" => "doosan",
    "두산베어스" => "doosan",
    "두산 베어스" => "doosan",
    "Doosan Bears" => "doosan",
    "엘지" => "lg",
    "엘지트윈스" => "lg",
    "LG 트윈스" => "lg",
    "LG Twins" => "lg",
    "롯데" => "lotte",
    "롯데자이언츠" => "lotte",
    "롯데 자이언츠" => "lotte",
    "Lotte Giants" => "lotte",
    "삼성" => "samsung",
    "삼성라이온즈" => "samsung",
    "삼성 라이온즈" => "samsung",
    "Samsung Lions" => "samsung",
    "기아" => "kia",
    "기아타이거즈" => "kia",
    "KIA 타이거즈" => "kia",
    "KIA Tigers" => "kia",
    "한화" => "hanwha",
    "한화이글스" => "hanwha",
    "한화 이글스" => "hanwha",
    "Hanwha Eagles" => "hanwha",
    "SSG" => "ssg",
    "SSG 랜더스" => "ssg",
    "SSG Landers" => "ssg",
    "NC" => "nc",
    "NC 다이노스" => "nc",
    "NC Dinos" => "nc",
    "KT" => "kt",
    "KT 위즈" => "kt",
    "KT Wiz" => "kt",
    "키움" => "kiwoom",
    "키움히어로즈" => "kiwoom",
    "키움 히어로즈" => "kiwoom",
    "Kiwoom Heroes" => "kiwoom",
};

/// Canonical registry id for a trimmed display-name variant, if known.
pub fn canonical_id_for_name(name: &str) -> Option<&'static str> {
    TEAM_NAME_ALIASES.get(name.trim()).copied()
}

/// Two-level team lookup: direct registry hit on `team_id`, else alias-table
/// fallback on `team_name` retried against the registry. A miss is not an
/// error; `None` means "no customization".
pub fn resolve_team_id(
    registry: &CustomizationRegistry,
    team_id: &str,
    team_name: Option<&str>,
) -> Option<TeamId> {
    let direct = TeamId::from(team_id);
    if registry.has_customization(&direct) {
        return Some(direct);
    }

    let canonical = TeamId::from(canonical_id_for_name(team_name?)?);
    registry.has_customization(&canonical).then_some(canonical)
}

#[cfg(test)]
#[path = "../../tests/unit/registry/alias.rs"]
mod tests;
