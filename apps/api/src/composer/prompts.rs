// Prompt for the external generation attempt.

use crate::models::job::JobPostingRequest;

/// Replace: {company_name}, {company_description}, {role_title}, {location},
///          {salary}, {skills}, {raw_jd}
pub const JD_REFINE_PROMPT_TEMPLATE: &str = r#"You are an expert technical HR assistant.
Task: convert the recruiter's raw job description into a structured, concise job posting.
Rules:
- Use ONLY the details provided. DO NOT add new skills/tools/requirements.
- Keep under 350 words.
- Use sections: About the Company; Role Overview; Key Responsibilities; Requirements (only from input); Nice to Have (only if present); Location, Compensation, Work Type.
Company Name: {company_name}
Company Description: {company_description}
Role Title: {role_title}
Location: {location}
Salary: {salary}
Skills Required: {skills}
Raw JD:
{raw_jd}
Now produce a single plain-text refined job description (no external links), obey rules."#;

const MISSING: &str = "N/A";

/// Fills the template. Missing fields, skills included, read `N/A`; skills are comma-joined.
pub fn build_refine_prompt(request: &JobPostingRequest) -> String {
    let skills = request.skills.join(", ");
    fill_template(
        JD_REFINE_PROMPT_TEMPLATE,
        &[
            ("company_name", or_missing(&request.company.name)),
            ("company_description", or_missing(&request.company.description)),
            ("role_title", request.role_title().unwrap_or(MISSING)),
            ("location", or_missing(&request.location)),
            ("salary", or_missing(&request.salary)),
            ("skills", or_missing(&skills)),
            ("raw_jd", request.raw_jd.as_str()),
        ],
    )
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
/// Inserted values are never rescanned; unknown placeholders are kept verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() {
        MISSING
    } else {
        value
    }
}
