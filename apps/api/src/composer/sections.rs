//! Deterministic composer: assembles the sectioned posting from extracted parts.

use crate::composer::extract::{
    detect_work_type, extract_nice_to_have, extract_requirements, extract_responsibilities,
    Requirements, FALLBACK_REQUIREMENT_MAX_CHARS,
};
use crate::composer::text::truncate;
use crate::models::job::JobPostingRequest;

pub const MAX_COMPANY_DESCRIPTION_CHARS: usize = 500;
pub const RESPONSIBILITY_MAX_CHARS: usize = 240;
pub const NICE_TO_HAVE_MAX_CHARS: usize = 180;
/// Cap on the deterministic output (before the ellipsis).
pub const DETERMINISTIC_MAX_CHARS: usize = 1200;

const PLACEHOLDER: &str = "—";
const NOT_SPECIFIED: &str = "Not specified";

/// A heading and its body, rendered as `heading\nbody`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: String,
}

impl Section {
    fn new(heading: &'static str, body: String) -> Self {
        Self { heading, body }
    }

    pub fn render(&self) -> String {
        format!("{}\n{}", self.heading, self.body)
    }
}

/// Composes the posting without any external call. Pure and repeatable.
pub fn compose_deterministic(request: &JobPostingRequest) -> String {
    let rendered: Vec<String> = build_sections(request)
        .iter()
        .map(Section::render)
        .collect();
    truncate(&rendered.join("\n\n"), DETERMINISTIC_MAX_CHARS)
}

/// Ordered sections for a request; optional ones are omitted when empty.
pub fn build_sections(request: &JobPostingRequest) -> Vec<Section> {
    let raw_jd = request.raw_jd.as_str();
    let responsibilities = extract_responsibilities(raw_jd);
    let requirements = extract_requirements(raw_jd, &request.skills);
    let nice_to_have = extract_nice_to_have(raw_jd);

    let mut sections = Vec::new();

    if let Some(about) = about_company(request) {
        sections.push(Section::new("About the Company", about));
    }

    let role_title = request.role_title().unwrap_or(PLACEHOLDER);
    let focus = if responsibilities.is_empty() {
        "work closely with the product and engineering teams."
    } else {
        "focus on the following:"
    };
    sections.push(Section::new(
        "Role Overview",
        format!("As a {role_title}, you will {focus}"),
    ));

    sections.push(Section::new(
        "Key Responsibilities",
        bullet_list(responsibilities.iter().map(|r| truncate(r, RESPONSIBILITY_MAX_CHARS))),
    ));

    match &requirements {
        Requirements::Primary(items) => {
            sections.push(Section::new("Requirements", bullet_list(items.iter().cloned())));
        }
        Requirements::Fallback(items) if !items.is_empty() => {
            sections.push(Section::new(
                "Requirements",
                bullet_list(
                    items
                        .iter()
                        .map(|r| truncate(r, FALLBACK_REQUIREMENT_MAX_CHARS)),
                ),
            ));
        }
        Requirements::Fallback(_) => {}
    }

    if !nice_to_have.is_empty() {
        sections.push(Section::new(
            "Nice to Have",
            bullet_list(nice_to_have.iter().map(|n| truncate(n, NICE_TO_HAVE_MAX_CHARS))),
        ));
    }

    sections.push(Section::new(
        "Location, Compensation & Work Type",
        format!(
            "Location: {}\nCompensation: {}\nWork Type: {}",
            or_not_specified(&request.location),
            or_not_specified(&request.salary),
            detect_work_type(raw_jd).unwrap_or(NOT_SPECIFIED),
        ),
    ));

    sections
}

fn about_company(request: &JobPostingRequest) -> Option<String> {
    let name = request.company.name.as_str();
    let description = truncate(&request.company.description, MAX_COMPANY_DESCRIPTION_CHARS);

    if name.is_empty() && description.is_empty() {
        return None;
    }

    let description = if description.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        description
    };
    Some(if name.is_empty() {
        description
    } else {
        format!("{name} — {description}")
    })
}

fn bullet_list(items: impl Iterator<Item = String>) -> String {
    items
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::CompanyInfo;

    fn full_request() -> JobPostingRequest {
        JobPostingRequest {
            company: CompanyInfo {
                name: "Acme Robotics".to_string(),
                description: "We build warehouse robots.".to_string(),
                website: "https://acme.example".to_string(),
            },
            title: "Backend Engineer".to_string(),
            role: "Engineer".to_string(),
            raw_jd: "- Build APIs\n- Own deployments\nMust have 3 years of Rust\nNice to have: Kafka\nHybrid (3 days/week)".to_string(),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            location: "Pune".to_string(),
            salary: "₹30L".to_string(),
        }
    }

    #[test]
    fn test_full_request_renders_every_section_in_order() {
        let composed = compose_deterministic(&full_request());
        let expected = "About the Company\n\
            Acme Robotics — We build warehouse robots.\n\n\
            Role Overview\n\
            As a Backend Engineer, you will focus on the following:\n\n\
            Key Responsibilities\n\
            - Build APIs\n\
            - Own deployments\n\n\
            Requirements\n\
            - Rust\n\
            - PostgreSQL\n\
            - Must have 3 years of Rust\n\n\
            Nice to Have\n\
            - Nice to have: Kafka\n\n\
            Location, Compensation & Work Type\n\
            Location: Pune\n\
            Compensation: ₹30L\n\
            Work Type: Hybrid";
        assert_eq!(composed, expected);
    }

    #[test]
    fn test_empty_request_still_has_overview_and_logistics() {
        let composed = compose_deterministic(&JobPostingRequest::default());
        assert_eq!(
            composed,
            "Role Overview\n\
             As a —, you will work closely with the product and engineering teams.\n\n\
             Key Responsibilities\n\n\n\
             Location, Compensation & Work Type\n\
             Location: Not specified\n\
             Compensation: Not specified\n\
             Work Type: Not specified"
        );
    }

    #[test]
    fn test_composition_is_repeatable() {
        let request = full_request();
        assert_eq!(compose_deterministic(&request), compose_deterministic(&request));
    }

    #[test]
    fn test_role_falls_back_when_title_missing() {
        let request = JobPostingRequest {
            role: "Data Engineer".to_string(),
            ..Default::default()
        };
        assert!(compose_deterministic(&request).contains("As a Data Engineer, you will"));
    }

    #[test]
    fn test_company_name_without_description_uses_placeholder() {
        let request = JobPostingRequest {
            company: CompanyInfo {
                name: "Acme".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(compose_deterministic(&request).starts_with("About the Company\nAcme — —\n\n"));
    }

    #[test]
    fn test_company_description_without_name() {
        let request = JobPostingRequest {
            company: CompanyInfo {
                description: "  A small studio.  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(compose_deterministic(&request).starts_with("About the Company\nA small studio.\n\n"));
    }

    #[test]
    fn test_company_description_is_truncated() {
        let request = JobPostingRequest {
            company: CompanyInfo {
                name: "Acme".to_string(),
                description: "d".repeat(600),
                ..Default::default()
            },
            ..Default::default()
        };
        let sections = build_sections(&request);
        assert_eq!(sections[0].body, format!("Acme — {}…", "d".repeat(500)));
    }

    #[test]
    fn test_unlisted_skill_never_appears() {
        let request = JobPostingRequest {
            raw_jd: "We build payment rails. Experience with distributed systems.".to_string(),
            skills: vec!["X".to_string(), "Y".to_string()],
            ..Default::default()
        };
        let sections = build_sections(&request);
        let requirements = sections
            .iter()
            .find(|s| s.heading == "Requirements")
            .unwrap();
        assert_eq!(
            requirements.body,
            "- X\n- Y\n- Experience with distributed systems"
        );
        assert!(!compose_deterministic(&request).contains('Z'));
    }

    #[test]
    fn test_fallback_requirements_are_truncated() {
        let long_sentence = format!("A degree in {}.", "physics ".repeat(40));
        let request = JobPostingRequest {
            raw_jd: long_sentence.clone(),
            ..Default::default()
        };
        let sections = build_sections(&request);
        let requirements = sections
            .iter()
            .find(|s| s.heading == "Requirements")
            .unwrap();
        assert_eq!(
            requirements.body,
            format!("- {}", truncate(&long_sentence, FALLBACK_REQUIREMENT_MAX_CHARS))
        );
    }

    #[test]
    fn test_requirements_omitted_when_nothing_found() {
        let request = JobPostingRequest {
            raw_jd: "Great team.".to_string(),
            ..Default::default()
        };
        assert!(build_sections(&request)
            .iter()
            .all(|s| s.heading != "Requirements"));
    }

    #[test]
    fn test_long_responsibilities_truncated_to_240() {
        let request = JobPostingRequest {
            raw_jd: format!("- {}", "a".repeat(300)),
            ..Default::default()
        };
        let sections = build_sections(&request);
        let responsibilities = sections
            .iter()
            .find(|s| s.heading == "Key Responsibilities")
            .unwrap();
        assert_eq!(responsibilities.body, format!("- {}…", "a".repeat(240)));
    }

    #[test]
    fn test_output_capped_for_adversarial_input() {
        let request = JobPostingRequest {
            raw_jd: (0..500)
                .map(|i| format!("- build component {i} with great care"))
                .collect::<Vec<_>>()
                .join("\n"),
            skills: (0..50).map(|i| format!("skill {i}")).collect(),
            ..Default::default()
        };
        let composed = compose_deterministic(&request);
        assert!(composed.ends_with('…'));
        assert!(composed.chars().count() <= DETERMINISTIC_MAX_CHARS + 1);
    }
    #[test]
    fn test_fallback_requirements_capped_at_six() {
        let request = JobPostingRequest {
            raw_jd: (1..=9)
                .map(|i| format!("A degree in field {i}."))
                .collect::<Vec<_>>()
                .join(" "),
            ..Default::default()
        };
        let sections = build_sections(&request);
        let requirements = sections
            .iter()
            .find(|s| s.heading == "Requirements")
            .unwrap();
        let items: Vec<&str> = requirements.body.lines().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], "- A degree in field 1.");
        assert_eq!(items[5], "- A degree in field 6.");
    }

    #[test]
    fn test_nice_to_have_items_truncated_to_180() {
        let line = format!("bonus {}", "k".repeat(300));
        let request = JobPostingRequest {
            raw_jd: line.clone(),
            ..Default::default()
        };
        let sections = build_sections(&request);
        let nice = sections
            .iter()
            .find(|s| s.heading == "Nice to Have")
            .unwrap();
        assert_eq!(nice.body, format!("- {}…", &line[..NICE_TO_HAVE_MAX_CHARS]));
        assert_eq!(nice.body.chars().count(), 2 + NICE_TO_HAVE_MAX_CHARS + 1);
    }
}
