//! Integration tests for the parsing pipeline.

use unresume::parser::{ADDITIONAL_INFORMATION_TITLE, IMPLICIT_EXPERIENCE_TITLE};
use unresume::{parse_lines, parse_text, ParseOptions, ResumeDocument, ResumeParser};

const JANE: &[&str] = &[
    "Jane Doe",
    "jane@doe.com | (555) 123-4567 | Austin, TX",
    "EXPERIENCE",
    "Acme Corp, TX",
    "Senior Engineer",
    "• Built X",
    "• Led Y",
    "EDUCATION",
    "State University, TX",
    "Bachelor of Science",
    "May 2018",
];

#[test]
fn test_full_resume() {
    let doc = parse_lines(JANE);

    assert_eq!(doc.personal_info.name, "Jane Doe");
    let contact = &doc.personal_info.contact;
    assert_eq!(contact.email, "jane@doe.com");
    assert_eq!(contact.phone, "(555) 123-4567");
    assert_eq!(contact.location, "Austin, TX");
    assert_eq!(contact.linkedin, "");
    assert_eq!(contact.github, "");

    assert_eq!(doc.section_titles(), vec!["EXPERIENCE", "EDUCATION"]);

    let experience = &doc.sections[0].entries;
    assert_eq!(experience.len(), 1);
    assert_eq!(experience[0].company, "Acme Corp");
    assert_eq!(experience[0].location, "TX");
    assert_eq!(experience[0].position, "Senior Engineer");
    assert_eq!(experience[0].points, vec!["Built X", "Led Y"]);

    let education = &doc.sections[1].entries;
    assert_eq!(education.len(), 1);
    assert_eq!(education[0].company, "State University");
    assert_eq!(education[0].location, "TX");
    assert_eq!(education[0].position, "Bachelor of Science");
    assert_eq!(education[0].duration, "May 2018");
    assert!(education[0].points.is_empty());
}

#[test]
fn test_section_order_follows_page() {
    let doc = parse_lines([
        "Jane Doe",
        "SKILLS",
        "Rust, Go",
        "PROJECTS",
        "Parser for résumés",
        "EDUCATION",
        "State University",
    ]);
    assert_eq!(doc.section_titles(), vec!["SKILLS", "PROJECTS", "EDUCATION"]);
}

#[test]
fn test_skills_split() {
    let doc = parse_lines(["Jane Doe", "SKILLS", "Python, Go; Rust|C++"]);
    let entry = &doc.sections[0].entries[0];
    assert_eq!(entry.company, "Technical Skills");
    assert_eq!(entry.points, vec!["Python", "Go", "Rust", "C++"]);
}

#[test]
fn test_fallback_only_without_headers() {
    let doc = parse_lines([
        "Jane Doe",
        "Current position at Acme",
        "Engineer",
        "• Built widgets",
    ]);
    assert_eq!(
        doc.section_titles(),
        vec![IMPLICIT_EXPERIENCE_TITLE, ADDITIONAL_INFORMATION_TITLE]
    );
    assert_eq!(doc.sections[0].entries[0].position, "Engineer");
    assert_eq!(doc.sections[1].entries[0].points, vec!["Built widgets"]);

    let with_header = parse_lines([
        "Jane Doe",
        "Current position at Acme",
        "SKILLS",
        "Rust",
    ]);
    assert_eq!(with_header.section_titles(), vec!["SKILLS"]);
}

#[test]
fn test_date_line_after_position_opens_entry() {
    let lines = [
        "Jane Doe",
        "EXPERIENCE",
        "Acme Corp",
        "Engineer",
        "Jan 2020 - Present",
        "• Built",
    ];

    let entries = &parse_lines(lines).sections[0].entries;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].company, "Acme Corp");
    assert_eq!(entries[0].position, "Engineer");
    assert!(entries[0].points.is_empty());
    assert_eq!(entries[1].company, "Jan 2020 - Present");
    assert_eq!(entries[1].points, vec!["Built"]);

    let parser = ResumeParser::with_options(ParseOptions::new().merge_date_lines()).unwrap();
    let entries = &parser.parse_lines(lines).sections[0].entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].duration, "Jan 2020 - Present");
    assert_eq!(entries[0].points, vec!["Built"]);
}

#[test]
fn test_fallback_dedupe_option() {
    let lines = ["Jane Doe", "Work at Acme", "Engineer", "• Built widgets", "• Chess"];
    let parser = ResumeParser::with_options(ParseOptions::new().dedupe_fallback()).unwrap();
    let doc = parser.parse_lines(lines);
    assert_eq!(doc.sections[0].entries[0].points, vec!["Built widgets", "Chess"]);
    assert!(doc.sections[1].entries[0].points.is_empty());
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(parse_lines(Vec::<String>::new()), ResumeDocument::default());
    assert_eq!(parse_lines(["", "   ", "\t"]), ResumeDocument::default());
    assert_eq!(parse_text(""), ResumeDocument::default());
}

#[test]
fn test_name_only() {
    let doc = parse_lines(["  Jane Doe  "]);
    assert_eq!(doc.personal_info.name, "Jane Doe");
    assert!(doc.personal_info.contact.is_empty());
    assert!(doc.sections.is_empty());
}

#[test]
fn test_bullet_stripping_is_idempotent() {
    let parser = ResumeParser::new().unwrap();
    let classifier = parser.classifier();
    for line in ["• Built X", "- - Led Y", "* Shipped", "1. First", "[2] Second"] {
        let once = classifier.strip_bullet(line);
        assert_eq!(classifier.strip_bullet(once), once);
    }
}

#[test]
fn test_experience_with_dates_and_wrapped_prose() {
    let doc = parse_lines([
        "Jane Doe",
        "WORK EXPERIENCE",
        "Globex, Springfield, IL",
        "Jan 2019 - Dec 2021",
        "• Rebuilt the billing pipeline so that invoices are generated on time for every",
        "customer account across all regions without manual steps from the finance team",
        "• Mentored interns",
    ]);

    let entry = &doc.sections[0].entries[0];
    assert_eq!(entry.company, "Globex");
    assert_eq!(entry.location, "Springfield, IL");
    assert_eq!(entry.duration, "Jan 2019 - Dec 2021");
    assert_eq!(entry.points.len(), 2);
    assert!(entry.points[0].ends_with("finance team"));
}

#[test]
fn test_normalization_drops_page_numbers() {
    let doc = parse_text("Jane Doe\nSKILLS\nRust\n  2  \n");
    assert_eq!(doc.sections[0].entries[0].points, vec!["Rust"]);
}
