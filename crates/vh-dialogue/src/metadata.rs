//! Option metadata parsing.
//!
//! Dialogue options carry a list of free-form tags. One tag shape is
//! meaningful here: a skill check directive,
//! `skillcheck:<StatName>:<Difficulty>`. Parsing is a pure function so
//! it stays independently testable.

use serde::{Deserialize, Serialize};

/// Tag prefix that marks an option as a skill check.
const MARKER: &str = "skillcheck";

/// Field separator inside a directive tag.
const DELIMITER: char = ':';

/// An embedded skill-check directive extracted from an option's tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckDirective {
    /// Stat name as written in the tag. Empty when the tag carried no
    /// fields.
    pub stat: String,
    /// Difficulty threshold. Defaults to 0 when the field is missing or
    /// fails to parse; the directive is still honored.
    pub difficulty: i32,
}

/// Scan a tag list for a skill-check directive.
///
/// Only the first tag starting with the marker is honored; scanning
/// stops there. A matching tag with fewer than three fields, or an
/// unparseable difficulty, still counts as a skill check with
/// difficulty 0. No match means the option is a plain choice.
pub fn parse_directive(tags: &[String]) -> Option<SkillCheckDirective> {
    for tag in tags {
        if !tag.starts_with(MARKER) {
            continue;
        }

        let parts: Vec<&str> = tag.split(DELIMITER).collect();
        if parts.len() < 3 {
            return Some(SkillCheckDirective {
                stat: String::new(),
                difficulty: 0,
            });
        }

        return Some(SkillCheckDirective {
            stat: parts[1].to_string(),
            difficulty: parts[2].trim().parse().unwrap_or(0),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn full_directive() {
        let directive = parse_directive(&tags(&["skillcheck:Willpower:14"])).unwrap();
        assert_eq!(directive.stat, "Willpower");
        assert_eq!(directive.difficulty, 14);
    }

    #[test]
    fn missing_difficulty_defaults_to_zero() {
        let directive = parse_directive(&tags(&["skillcheck:Insight"])).unwrap();
        assert_eq!(directive.stat, "");
        assert_eq!(directive.difficulty, 0);
    }

    #[test]
    fn bare_marker_is_still_a_check() {
        let directive = parse_directive(&tags(&["skillcheck"])).unwrap();
        assert_eq!(directive.stat, "");
        assert_eq!(directive.difficulty, 0);
    }

    #[test]
    fn unparseable_difficulty_defaults_to_zero() {
        let directive = parse_directive(&tags(&["skillcheck:Empathy:hard"])).unwrap();
        assert_eq!(directive.stat, "Empathy");
        assert_eq!(directive.difficulty, 0);
    }

    #[test]
    fn plain_tags_are_not_checks() {
        assert_eq!(parse_directive(&tags(&["greeting"])), None);
        assert_eq!(parse_directive(&tags(&[])), None);
    }

    #[test]
    fn first_match_wins() {
        let directive =
            parse_directive(&tags(&["mood:wary", "skillcheck:Insight:9", "skillcheck:Empathy:3"]))
                .unwrap();
        assert_eq!(directive.stat, "Insight");
        assert_eq!(directive.difficulty, 9);
    }

    #[test]
    fn directive_among_other_tags() {
        let directive = parse_directive(&tags(&["greeting", "skillcheck:Willpower:6"])).unwrap();
        assert_eq!(directive.stat, "Willpower");
        assert_eq!(directive.difficulty, 6);
    }
}
