//! Schéma brut de l'API Launch Library 2 (The Space Devs).
//!
//! Tous les champs sont optionnels : l'API omet ou met à `null` ce qu'elle
//! ne connaît pas encore, et les champs inconnus sont ignorés.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LaunchPage {
    #[serde(default)]
    pub results: Vec<RawLaunch>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawLaunch {
    pub name: Option<String>,
    /// "No Earlier Than", ISO-8601 UTC
    pub net: Option<String>,
    pub mission: Option<Mission>,
    #[serde(default)]
    pub program: Vec<Program>,
    pub rocket: Option<Rocket>,
    pub pad: Option<Pad>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Mission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub orbit: Option<Orbit>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Orbit {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Program {
    #[serde(default)]
    pub mission_patches: Vec<MissionPatch>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MissionPatch {
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Rocket {
    pub configuration: Option<RocketConfiguration>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RocketConfiguration {
    pub full_name: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Pad {
    pub name: Option<String>,
    pub location: Option<PadLocation>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PadLocation {
    pub name: Option<String>,
}
