//! Rendu HTML de la page d'accueil.
//!
//! Tout texte venant de l'API passe par `escape_html`.

use crate::mission::DisplayMission;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Next SpaceX Launch</title>
  <style>
    body { font-family: system-ui, sans-serif; background: #0b0d17; color: #e8e8f0; margin: 0; }
    header { padding: 2rem; text-align: center; }
    .toggle-mission { display: block; margin: 0 auto; padding: .75rem 1.5rem; border: 0; border-radius: 6px;
      background: #005288; color: #fff; cursor: pointer; transition: opacity .3s; }
    #missionBox { display: none; max-width: 40rem; margin: 1.5rem auto; padding: 1.5rem;
      background: #161a2e; border-radius: 8px; }
    #missionBox.show { display: block; }
    #missionBox img { float: right; max-width: 8rem; margin-left: 1rem; }
    dt { font-weight: bold; margin-top: .5rem; }
    .no-mission { text-align: center; color: #a0a0b8; }
  </style>
</head>
<body>
  <header><h1>Next SpaceX Launch</h1></header>
"#;

const PAGE_FOOT: &str = r#"  <script src="/static/script.js"></script>
</body>
</html>
"#;

pub fn render_home(mission: Option<&DisplayMission>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(PAGE_HEAD);
    match mission {
        Some(m) => push_mission_card(&mut html, m),
        None => html.push_str("  <p class=\"no-mission\">No upcoming launch available right now.</p>\n"),
    }
    html.push_str(PAGE_FOOT);
    html
}

fn push_mission_card(html: &mut String, m: &DisplayMission) {
    html.push_str("  <button class=\"toggle-mission\" onclick=\"toggleMission()\">Show next mission</button>\n");
    html.push_str("  <section id=\"missionBox\" class=\"mission-card\">\n");
    if let Some(patch) = &m.mission_patch {
        html.push_str(&format!("    <img src=\"{}\" alt=\"Mission patch\">\n", escape_html(patch)));
    }
    html.push_str(&format!("    <h2>{}</h2>\n", escape_html(&m.name)));
    html.push_str(&format!("    <p>{}</p>\n", escape_html(&m.description)));
    html.push_str("    <dl>\n");
    for (label, value) in [
        ("Launch date", &m.date_utc),
        ("Payload", &m.payload),
        ("Destination", &m.payload_destination),
        ("Rocket", &m.rocket),
        ("Launch pad", &m.launch_pad),
    ] {
        html.push_str(&format!("      <dt>{label}</dt><dd>{}</dd>\n", escape_html(value)));
    }
    html.push_str("    </dl>\n  </section>\n");
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
