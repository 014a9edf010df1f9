/**
 * EXTRACTION PAYLOAD - Devine la charge utile depuis le texte libre
 *
 * L'API ne fournit pas la charge utile directement : on l'infère depuis la
 * description de la mission (ou son nom) avec trois règles ordonnées,
 * la première qui matche gagne. Heuristique, les faux positifs sont acceptés.
 */

use regex::Regex;
use std::sync::LazyLock;

pub const PAYLOAD_UNKNOWN: &str = "Payload unknown";

/// Programmes reconnus, avec leur casse d'affichage
const KNOWN_PROGRAMS: &[&str] = &["Starlink", "OneWeb", "Kuiper", "Iridium", "Globalstar"];

static PROGRAM_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    let names = KNOWN_PROGRAMS.join("|");
    Regex::new(&format!(r"(?i)\b(\d+)\s+({names})\b(?:\s+(?:satellites?|payloads?))?"))
        .expect("static regex")
});

static STARLINK_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bStarlink\s+Group\s+\d+-\d+\b").expect("static regex"));

static INCLUDES_PAYLOADS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bincludes\s+(\d+)\s+payloads?\b").expect("static regex"));

pub fn extract_payload(text: &str) -> String {
    if text.trim().is_empty() {
        return PAYLOAD_UNKNOWN.to_string();
    }

    if let Some(caps) = PROGRAM_COUNT.captures(text) {
        return format!("{} {}", &caps[1], canonical_program(&caps[2]));
    }

    if let Some(m) = STARLINK_GROUP.find(text) {
        return m.as_str().to_string();
    }

    if let Some(caps) = INCLUDES_PAYLOADS.captures(text) {
        return format!("{} payloads", &caps[1]);
    }

    PAYLOAD_UNKNOWN.to_string()
}

fn canonical_program(matched: &str) -> &str {
    KNOWN_PROGRAMS
        .iter()
        .find(|p| p.eq_ignore_ascii_case(matched))
        .copied()
        .unwrap_or(matched)
}
