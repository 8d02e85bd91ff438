//! Local keyword fallback for skill extraction.
//!
//! Used by the profile stage when the analyzer service is unreachable, so
//! a profile always carries a skills list.

use regex::Regex;
use std::sync::OnceLock;

/// Skills the fallback can detect.
const KEYWORDS: [&str; 13] = [
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "HTML",
    "CSS",
    "SQL",
    "Git",
    "Docker",
    "AWS",
    "Java",
    "C++",
    "PHP",
];

fn patterns() -> &'static Vec<(&'static str, Regex)> {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        KEYWORDS
            .iter()
            .filter_map(|skill| {
                // Word boundaries keep "Java" from matching inside
                // "JavaScript". Skills ending in a symbol (C++) take no
                // trailing boundary.
                let escaped = regex::escape(&skill.to_lowercase());
                let trail = if skill
                    .chars()
                    .last()
                    .is_some_and(char::is_alphanumeric)
                {
                    r"\b"
                } else {
                    ""
                };
                Regex::new(&format!(r"(?i)\b{escaped}{trail}"))
                    .ok()
                    .map(|re| (*skill, re))
            })
            .collect()
    })
}

/// Matches the keyword list against `resume`, case-insensitively.
///
/// Returns canonical skill names in keyword-list order.
#[must_use]
pub fn fallback_skills(resume: &str) -> Vec<String> {
    patterns()
        .iter()
        .filter(|(_, re)| re.is_match(resume))
        .map(|(skill, _)| (*skill).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_skills_case_insensitively() {
        let skills = fallback_skills("Skilled in JavaScript and python");
        assert_eq!(skills, vec!["JavaScript", "Python"]);
    }

    #[test]
    fn java_does_not_match_inside_javascript() {
        let skills = fallback_skills("Five years of JavaScript");
        assert_eq!(skills, vec!["JavaScript"]);
    }

    #[test]
    fn matches_symbol_suffixed_skills() {
        let skills = fallback_skills("C++ and node.js experience");
        assert_eq!(skills, vec!["Node.js", "C++"]);
    }

    #[test]
    fn empty_resume_yields_no_skills() {
        assert!(fallback_skills("").is_empty());
        assert!(fallback_skills("gardening and carpentry").is_empty());
    }
}
