//! Ranked candidate board for a job, as shown to recruiters.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::models::application::ApplicationRow;

const PLACEHOLDER: &str = "—";
const UNKNOWN_CANDIDATE: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Gray,
    Green,
    Amber,
    Red,
}

impl ScoreBand {
    /// Unscored → gray; ≥80 green; ≥60 amber; otherwise red.
    pub fn for_score(score: Option<f64>) -> Self {
        match score {
            None => ScoreBand::Gray,
            Some(s) if s >= 80.0 => ScoreBand::Green,
            Some(s) if s >= 60.0 => ScoreBand::Amber,
            Some(_) => ScoreBand::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Gray => "gray",
            ScoreBand::Green => "green",
            ScoreBand::Amber => "amber",
            ScoreBand::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub application_id: Uuid,
    pub candidate_id: Uuid,
    pub display_name: String,
    pub email: String,
    pub fitment_score: Option<f64>,
    /// Score rounded to one decimal place; unscored shows 0.
    pub display_score: f64,
    pub band: ScoreBand,
    pub skill_match: String,
    pub experience: String,
    pub attrition_risk: String,
}

/// Sorts applications by score, highest first. Unscored rows count as 0; ties keep input order.
pub fn rank_applications(rows: &[ApplicationRow]) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = rows.iter().map(to_ranked).collect();
    ranked.sort_by(|a, b| {
        b.fitment_score
            .unwrap_or(0.0)
            .total_cmp(&a.fitment_score.unwrap_or(0.0))
    });
    ranked
}

pub fn display_score(score: Option<f64>) -> f64 {
    (score.unwrap_or(0.0) * 10.0).round() / 10.0
}

fn to_ranked(row: &ApplicationRow) -> RankedCandidate {
    RankedCandidate {
        application_id: row.id,
        candidate_id: row.candidate_id,
        display_name: row
            .display_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string()),
        email: row.email.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        fitment_score: row.fitment_score,
        display_score: display_score(row.fitment_score),
        band: ScoreBand::for_score(row.fitment_score),
        skill_match: sub_score(row.sub_scores.as_ref(), "skill_match"),
        experience: sub_score(row.sub_scores.as_ref(), "experience"),
        attrition_risk: sub_score(row.sub_scores.as_ref(), "attrition_risk"),
    }
}

fn sub_score(sub_scores: Option<&Value>, key: &str) -> String {
    match sub_scores.and_then(|s| s.get(key)) {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Plain-text table of the board, one candidate per line.
pub fn format_board(ranked: &[RankedCandidate]) -> String {
    if ranked.is_empty() {
        return "No applications / scores yet.".to_string();
    }

    let mut lines = vec![format!(
        "{:<4} {:<24} {:<32} {:>6} {:<6} {:>6} {:>10} {:>9}",
        "#", "Candidate", "Email", "Score", "Band", "Skill", "Experience", "Attrition"
    )];
    for (idx, r) in ranked.iter().enumerate() {
        lines.push(format!(
            "{:<4} {:<24} {:<32} {:>6} {:<6} {:>6} {:>10} {:>9}",
            idx + 1,
            r.display_name,
            r.email,
            r.display_score,
            r.band.as_str(),
            r.skill_match,
            r.experience,
            r.attrition_risk
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(name: Option<&str>, score: Option<f64>) -> ApplicationRow {
        ApplicationRow {
            id: Uuid::new_v4(),
            candidate_id: Uuid::new_v4(),
            display_name: name.map(str::to_string),
            fitment_score: score,
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_sorts_descending_with_unscored_as_zero() {
        let rows = vec![
            row(Some("low"), Some(12.0)),
            row(Some("none"), None),
            row(Some("high"), Some(91.3)),
            row(Some("negative"), Some(-1.0)),
        ];
        let names: Vec<String> = rank_applications(&rows)
            .into_iter()
            .map(|r| r.display_name)
            .collect();
        assert_eq!(names, vec!["high", "low", "none", "negative"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let rows = vec![
            row(Some("first"), Some(70.0)),
            row(Some("second"), Some(70.0)),
            row(Some("unscored"), None),
            row(Some("zero"), Some(0.0)),
        ];
        let names: Vec<String> = rank_applications(&rows)
            .into_iter()
            .map(|r| r.display_name)
            .collect();
        assert_eq!(names, vec!["first", "second", "unscored", "zero"]);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::for_score(None), ScoreBand::Gray);
        assert_eq!(ScoreBand::for_score(Some(80.0)), ScoreBand::Green);
        assert_eq!(ScoreBand::for_score(Some(79.9)), ScoreBand::Amber);
        assert_eq!(ScoreBand::for_score(Some(60.0)), ScoreBand::Amber);
        assert_eq!(ScoreBand::for_score(Some(59.99)), ScoreBand::Red);
    }

    #[test]
    fn test_display_score_rounds_to_one_decimal() {
        assert_eq!(display_score(Some(72.46)), 72.5);
        assert_eq!(display_score(Some(72.44)), 72.4);
        assert_eq!(display_score(None), 0.0);
    }

    #[test]
    fn test_missing_candidate_fields_use_placeholders() {
        let ranked = rank_applications(&[row(None, None)]);
        assert_eq!(ranked[0].display_name, "Unknown");
        assert_eq!(ranked[0].email, "—");
        assert_eq!(ranked[0].skill_match, "—");
        assert_eq!(ranked[0].attrition_risk, "—");
    }

    #[test]
    fn test_sub_scores_render_as_text() {
        let mut r = row(Some("a"), Some(88.0));
        r.sub_scores = Some(json!({"skill_match": 91, "experience": "senior", "attrition_risk": null}));
        let ranked = rank_applications(&[r]);
        assert_eq!(ranked[0].skill_match, "91");
        assert_eq!(ranked[0].experience, "senior");
        assert_eq!(ranked[0].attrition_risk, "—");
    }

    #[test]
    fn test_format_board() {
        assert_eq!(format_board(&[]), "No applications / scores yet.");

        let board = format_board(&rank_applications(&[
            row(Some("Asha"), Some(64.04)),
            row(Some("Ravi"), Some(85.0)),
        ]));
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1    Ravi"));
        assert!(lines[1].contains("green"));
        assert!(lines[2].contains("64"));
        assert!(lines[2].contains("amber"));
    }
}
