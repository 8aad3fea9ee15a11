//! Plain-text outline rendering.

use crate::model::{Entry, ResumeDocument};

/// Render a document as a plain-text outline.
///
/// The name comes first, then the non-empty contact fields joined by
/// ` | `. Each section title is underlined with `=`; entries list their
/// header fields followed by `• point` lines.
pub fn to_text(doc: &ResumeDocument) -> String {
    let mut out = Vec::new();
    let personal = &doc.personal_info;

    if !personal.name.is_empty() {
        out.push(personal.name.clone());
    }
    let contact: Vec<&str> = personal
        .contact
        .fields()
        .iter()
        .map(|(_, value)| *value)
        .filter(|value| !value.is_empty())
        .collect();
    if !contact.is_empty() {
        out.push(contact.join(" | "));
    }

    for section in &doc.sections {
        out.push(String::new());
        out.push(section.title.clone());
        out.push("=".repeat(section.title.chars().count()));
        for entry in &section.entries {
            render_entry(entry, &mut out);
        }
    }

    out.join("\n").trim().to_string()
}

fn render_entry(entry: &Entry, out: &mut Vec<String>) {
    let heading = [entry.company.as_str(), entry.location.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if !heading.is_empty() {
        out.push(heading);
    }
    let role = [entry.position.as_str(), entry.duration.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ");
    if !role.is_empty() {
        out.push(role);
    }
    for point in &entry.points {
        out.push(format!("• {}", point));
    }
}
