//! Role keyword table — static data mapping a target role to the vocabulary an ATS
//! filter for that role is likely to look for.
//!
//! Extend `ROLE_KEYWORDS` to support a new role; the scorer does not change.

/// Keywords every resume is checked against, whatever the role.
pub const GENERIC_KEYWORDS: &[&str] = &[
    "project",
    "management",
    "leadership",
    "team",
    "development",
    "analysis",
    "communication",
    "problem-solving",
    "results",
    "achievement",
    "improvement",
    "collaboration",
];

/// Role-specific keywords, checked in table order.
pub const ROLE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &[
            "programming",
            "coding",
            "debugging",
            "algorithms",
            "data structures",
            "git",
            "version control",
            "testing",
            "deployment",
            "frameworks",
            "databases",
            "apis",
            "agile",
            "scrum",
            "ci/cd",
        ],
    ),
    (
        "data scientist",
        &[
            "machine learning",
            "statistics",
            "python",
            "r",
            "sql",
            "data analysis",
            "visualization",
            "modeling",
            "algorithms",
            "big data",
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
        ],
    ),
    (
        "product manager",
        &[
            "roadmap",
            "stakeholder",
            "requirements",
            "user stories",
            "metrics",
            "analytics",
            "market research",
            "competitive analysis",
            "strategy",
            "prioritization",
            "cross-functional",
            "agile",
            "scrum",
        ],
    ),
    (
        "marketing manager",
        &[
            "campaigns",
            "branding",
            "digital marketing",
            "seo",
            "sem",
            "social media",
            "content marketing",
            "analytics",
            "roi",
            "lead generation",
            "conversion",
            "market research",
            "customer acquisition",
        ],
    ),
    (
        "sales representative",
        &[
            "prospecting",
            "lead generation",
            "closing",
            "negotiation",
            "crm",
            "pipeline",
            "quota",
            "territory",
            "customer relationship",
            "revenue",
            "presentations",
            "cold calling",
            "networking",
        ],
    ),
    (
        "business analyst",
        &[
            "requirements gathering",
            "process improvement",
            "stakeholder management",
            "documentation",
            "workflow",
            "analysis",
            "reporting",
            "sql",
            "excel",
            "business intelligence",
            "process mapping",
            "gap analysis",
        ],
    ),
    (
        "project manager",
        &[
            "project planning",
            "risk management",
            "budget management",
            "timeline",
            "milestone",
            "stakeholder communication",
            "resource allocation",
            "pmp",
            "agile",
            "scrum",
            "gantt",
            "project lifecycle",
        ],
    ),
    (
        "designer",
        &[
            "ui/ux",
            "user experience",
            "wireframes",
            "prototyping",
            "design thinking",
            "user research",
            "adobe",
            "figma",
            "sketch",
            "visual design",
            "typography",
            "color theory",
            "responsive design",
        ],
    ),
];

/// The keyword list a role resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRole {
    /// Table key that matched, `None` when only the generic list applies.
    pub matched_role: Option<&'static str>,
    pub keywords: Vec<&'static str>,
}

/// Resolves free-text role input to a keyword list.
///
/// A table key matches when the lower-cased role contains the whole key, or contains
/// any single word of the key. The first match in table order wins; its keywords
/// come first, followed by `GENERIC_KEYWORDS`.
pub fn resolve_role(role: &str) -> ResolvedRole {
    let role_lower = role.to_lowercase();

    let matched = ROLE_KEYWORDS.iter().find(|(key, _)| {
        role_lower.contains(key) || key.split_whitespace().any(|word| role_lower.contains(word))
    });

    match matched {
        Some((key, keywords)) => ResolvedRole {
            matched_role: Some(*key),
            keywords: keywords.iter().chain(GENERIC_KEYWORDS).copied().collect(),
        },
        None => ResolvedRole {
            matched_role: None,
            keywords: GENERIC_KEYWORDS.to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_role_resolves() {
        let resolved = resolve_role("data scientist");
        assert_eq!(resolved.matched_role, Some("data scientist"));
        assert!(resolved.keywords.contains(&"pandas"));
    }

    #[test]
    fn test_role_is_case_insensitive_and_substring_tolerant() {
        let resolved = resolve_role("Senior Software Engineer");
        assert_eq!(resolved.matched_role, Some("software engineer"));
        assert_eq!(resolved.keywords[0], "programming");
    }

    #[test]
    fn test_role_specific_keywords_precede_generic_ones() {
        let resolved = resolve_role("designer");
        let specific = ROLE_KEYWORDS
            .iter()
            .find(|(key, _)| *key == "designer")
            .map(|(_, kws)| kws.len())
            .unwrap();
        assert_eq!(resolved.keywords.len(), specific + GENERIC_KEYWORDS.len());
        assert_eq!(&resolved.keywords[specific..], GENERIC_KEYWORDS);
    }

    #[test]
    fn test_single_word_overlap_matches_first_table_entry() {
        // "engineering" contains "engineer", and software engineer comes first
        let resolved = resolve_role("Engineering Manager");
        assert_eq!(resolved.matched_role, Some("software engineer"));

        // "manager" first appears in product manager
        let resolved = resolve_role("Manager");
        assert_eq!(resolved.matched_role, Some("product manager"));
    }

    #[test]
    fn test_unknown_role_falls_back_to_generic() {
        let resolved = resolve_role("astronaut");
        assert_eq!(resolved.matched_role, None);
        assert_eq!(resolved.keywords, GENERIC_KEYWORDS.to_vec());
    }

    #[test]
    fn test_general_role_uses_generic_keywords() {
        assert_eq!(resolve_role("general").matched_role, None);
        assert_eq!(resolve_role("").matched_role, None);
    }
}
