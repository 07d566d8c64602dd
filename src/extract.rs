//! Turning raw document text into [`Requirement`]s.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Requirement;

static REQUIREMENT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<id>[A-Z][A-Z0-9_]*-\d+(?:\.\d+)*):?|(?P<number>\d+(?:\.\d+)*)[.)])\s+(?P<text>\S.*)$",
    )
    .expect("requirement line pattern should compile")
});

const BULLETS: &[char] = &['-', '*', '•'];

/// Lines that open with a requirement ID (`SYS-001`, `REQ-12.3:`) or a
/// numbered marker (`1.`, `2.1)`); everything else is prose and ignored.
pub fn extract_requirements(content: &str) -> Vec<Requirement> {
    content
        .lines()
        .filter_map(|line| {
            let line = strip_bullet(line.trim());
            let captures = REQUIREMENT_LINE.captures(line)?;
            let id = captures
                .name("id")
                .or_else(|| captures.name("number"))?
                .as_str();
            let text = captures.name("text")?.as_str();
            Requirement::new(id, text)
        })
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    match line.strip_prefix(BULLETS) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

/// One requirement per non-empty line, `ID: text` or bare text.
///
/// Bare lines get `R-001`, `R-002`, ... numbered by accepted rows, so a
/// skipped line does not leave a gap. An `ID:` prefix only counts when the ID
/// has no whitespace.
pub fn parse_pasted_lines(raw: &str) -> Vec<Requirement> {
    let mut requirements = Vec::new();
    for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let requirement = match split_id(line) {
            Some((id, text)) => Requirement::new(id, text),
            None => Requirement::new(format!("R-{:03}", requirements.len() + 1), line),
        };
        requirements.extend(requirement);
    }
    requirements
}

fn split_id(line: &str) -> Option<(&str, &str)> {
    let (id, text) = line.split_once(':')?;
    let id = id.trim();
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some((id, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(requirements: &[Requirement]) -> Vec<&str> {
        requirements.iter().map(|requirement| requirement.id.as_str()).collect()
    }

    #[test]
    fn extracts_id_and_numbered_lines() {
        let content = "\
Introduction to the pump controller.
SYS-001 The system shall be tested by the operator.
REQ-12.3: The pump shall start within 2 seconds.
  - SW_CORE-7 The valve shall close.
1. The display shall show the pressure.
2.1) The alarm shall sound.
Sys-004 lower-case prefixes are prose.
SYS-005
";
        let requirements = extract_requirements(content);
        assert_eq!(
            ids(&requirements),
            vec!["SYS-001", "REQ-12.3", "SW_CORE-7", "1", "2.1"]
        );
        assert_eq!(
            requirements[1].text,
            "The pump shall start within 2 seconds."
        );
        assert_eq!(requirements[2].text, "The valve shall close.");
    }

    #[test]
    fn document_without_markers_yields_nothing() {
        assert!(extract_requirements("Just a paragraph.\n\nAnother one.").is_empty());
        assert!(extract_requirements("").is_empty());
    }

    #[test]
    fn bullets_need_following_space() {
        let requirements = extract_requirements("* SYS-010 Log faults.\n-SYS-011 Not a bullet.");
        assert_eq!(ids(&requirements), vec!["SYS-010"]);
    }

    #[test]
    fn pasted_lines_use_prefix_or_position() {
        let raw = "\nSYS-1: The pump shall start.\n\nThe valve shall close.\nNote that: it is fine\nEMPTY:   \n";
        let requirements = parse_pasted_lines(raw);
        assert_eq!(ids(&requirements), vec!["SYS-1", "R-002", "R-003"]);
        assert_eq!(requirements[0].text, "The pump shall start.");
        assert_eq!(requirements[2].text, "Note that: it is fine");
    }

    #[test]
    fn skipped_pasted_lines_do_not_consume_numbers() {
        let raw = "EMPTY:\nThe pump shall start.\nSYS-9:   \nThe valve shall close.";
        let requirements = parse_pasted_lines(raw);
        assert_eq!(ids(&requirements), vec!["R-001", "R-002"]);
        assert_eq!(requirements[1].text, "The valve shall close.");
    }
}
