//! Map raw MLB person/stat payloads onto the statistic catalog.
//!
//! The MLB Stats API nests season stats several levels deep
//! (`stats[0].splits[0].stat`) and drops whole levels when a player has no
//! data for the requested season. Missing levels are not errors: every
//! statistic simply resolves to [`StatValue::Absent`]. Only payloads of the
//! wrong shape are rejected.

use serde_json::{Map, Value};

use crate::{
    cli::types::PlayerId,
    error::{CompareError, Result},
    stats::{
        catalog::{StatisticDefinition, HITTING_CATALOG},
        types::{CanonicalPlayerStats, StatValue},
    },
};


type JsonObject = Map<String, Value>;

/// Normalize a player against [`HITTING_CATALOG`].
///
/// `person_response` is the body of `/people/{id}`, `stats_response` the body
/// of `/people/{id}/stats`. `fallback_name` is used when the person record
/// carries no `fullName`.
pub fn normalize(
    person_response: &Value,
    stats_response: &Value,
    fallback_name: &str,
) -> Result<CanonicalPlayerStats> {
    normalize_with(&HITTING_CATALOG, person_response, stats_response, fallback_name)
}

/// Normalize a player against an arbitrary catalog.
pub fn normalize_with(
    catalog: &[StatisticDefinition],
    person_response: &Value,
    stats_response: &Value,
    fallback_name: &str,
) -> Result<CanonicalPlayerStats> {
    let person = select_person(person_response)?;
    let stat = select_season_stat(stats_response)?;

    let name = person
        .and_then(|p| p.get("fullName"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback_name);

    let mut player = CanonicalPlayerStats::empty(name, catalog);
    player.player_id = person
        .and_then(|p| p.get("id"))
        .and_then(Value::as_u64)
        .map(PlayerId::new);
    player.team = nested_str(person, "currentTeam", "name");
    player.position = nested_str(person, "primaryPosition", "abbreviation");

    if let Some(stat) = stat {
        for def in catalog {
            player = player.with_value(def.key, resolve_field(stat, def.sources));
        }
    }

    Ok(player)
}

/// First present, non-null field among `sources`, in priority order.
pub fn resolve_field(stat: &JsonObject, sources: &[&str]) -> StatValue {
    sources
        .iter()
        .filter_map(|field| stat.get(*field))
        .find(|value| !value.is_null())
        .map(to_stat_value)
        .unwrap_or(StatValue::Absent)
}

fn to_stat_value(value: &Value) -> StatValue {
    match value {
        Value::Null => StatValue::Absent,
        Value::Number(n) => n
            .as_f64()
            .map(StatValue::Number)
            .unwrap_or_else(|| StatValue::Text(n.to_string())),
        Value::String(s) => StatValue::Text(s.clone()),
        other => StatValue::Text(other.to_string()),
    }
}

fn select_person(person_response: &Value) -> Result<Option<&JsonObject>> {
    let root = as_object(person_response, "person response")?;
    first_element(root, "people")
}

fn select_season_stat(stats_response: &Value) -> Result<Option<&JsonObject>> {
    let root = as_object(stats_response, "stats response")?;
    let Some(group) = first_element(root, "stats")? else {
        return Ok(None);
    };
    let Some(split) = first_element(group, "splits")? else {
        return Ok(None);
    };
    match split.get("stat") {
        None | Some(Value::Null) => Ok(None),
        Some(stat) => as_object(stat, "`stat`").map(Some),
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a JsonObject> {
    value
        .as_object()
        .ok_or_else(|| CompareError::invalid_source(format!("{what} is not an object")))
}

/// `container[field][0]`; a missing field, empty array or null element is `None`.
fn first_element<'a>(container: &'a JsonObject, field: &str) -> Result<Option<&'a JsonObject>> {
    match container.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => match items.first() {
            None | Some(Value::Null) => Ok(None),
            Some(item) => as_object(item, &format!("`{field}[0]`")).map(Some),
        },
        Some(_) => Err(CompareError::invalid_source(format!(
            "`{field}` is not an array"
        ))),
    }
}

fn nested_str(object: Option<&JsonObject>, outer: &str, inner: &str) -> Option<String> {
    object?
        .get(outer)?
        .get(inner)?
        .as_str()
        .map(str::to_string)
}
