/**
 * NORMALISATION - RawLaunch -> DisplayMission
 *
 * Chaque champ d'affichage suit un chemin dans le JSON brut ; si un segment
 * manque (ou est vide), on met un texte par défaut lisible. Rien ici ne
 * peut échouer.
 */

use crate::models::RawLaunch;
use crate::payload::extract_payload;
use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime, UtcOffset};

const UNKNOWN_NAME: &str = "Unknown mission";
const UNKNOWN_DATE: &str = "Launch date unavailable";
const NO_DESCRIPTION: &str = "No description available.";
const UNKNOWN_ORBIT: &str = "Unknown orbit";
const UNKNOWN_ROCKET: &str = "Unknown rocket";
const UNKNOWN_PAD: &str = "Unknown launch pad";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMission {
    pub name: String,
    pub date_utc: String,
    pub description: String,
    pub payload: String,
    pub payload_destination: String,
    pub rocket: String,
    pub launch_pad: String,
    pub mission_patch: Option<String>,
}

impl DisplayMission {
    pub fn from_launch(launch: &RawLaunch) -> Self {
        let mission = launch.mission.as_ref();

        let mission_name = mission.and_then(|m| non_blank(&m.name));
        let description = mission.and_then(|m| non_blank(&m.description));

        // texte source du payload : description, sinon nom, sinon rien
        let payload_source = description.or(mission_name).unwrap_or("");

        let rocket = launch
            .rocket
            .as_ref()
            .and_then(|r| r.configuration.as_ref())
            .and_then(|c| non_blank(&c.full_name).or_else(|| non_blank(&c.name)));

        Self {
            name: mission_name
                .or_else(|| non_blank(&launch.name))
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            date_utc: launch
                .net
                .as_deref()
                .and_then(format_launch_date)
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            description: description.unwrap_or(NO_DESCRIPTION).to_string(),
            payload: extract_payload(payload_source),
            payload_destination: mission
                .and_then(|m| m.orbit.as_ref())
                .and_then(|o| non_blank(&o.name))
                .unwrap_or(UNKNOWN_ORBIT)
                .to_string(),
            rocket: rocket.unwrap_or(UNKNOWN_ROCKET).to_string(),
            launch_pad: launch_pad(launch),
            mission_patch: launch
                .program
                .first()
                .and_then(|p| p.mission_patches.first())
                .and_then(|patch| non_blank(&patch.image_url))
                .map(str::to_string),
        }
    }
}

/// "2025-06-10T14:30:00Z" -> "Tuesday, 10 June 2025 at 14:30 UTC"
pub fn format_launch_date(net: &str) -> Option<String> {
    let parsed = OffsetDateTime::parse(net.trim(), &Rfc3339).ok()?;
    parsed
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[weekday], [day] [month repr:long] [year] at [hour]:[minute] UTC"
        ))
        .ok()
}

fn launch_pad(launch: &RawLaunch) -> String {
    let Some(pad) = launch.pad.as_ref() else {
        return UNKNOWN_PAD.to_string();
    };
    let location = pad.location.as_ref().and_then(|l| non_blank(&l.name));
    match (non_blank(&pad.name), location) {
        (Some(name), Some(loc)) => format!("{name}, {loc}"),
        (Some(name), None) => name.to_string(),
        (None, _) => UNKNOWN_PAD.to_string(),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
