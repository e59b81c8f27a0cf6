use std::time::Duration;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::time::sleep;

use crate::{
    domain::{DraftResult, Language, QueryType},
    drafter::{departments, templates},
};

static MY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bmy\b").expect("valid pronoun regex"));
static I_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bi\b").expect("valid pronoun regex"));
static ME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bme\b").expect("valid pronoun regex"));

const SUBJECT_TOPIC_LIMIT: usize = 50;
const APPLICANT_PLACEHOLDER: &str = "[Your Name]";

/// Turns an admissible query into a formal RTI letter: department routing,
/// query-type detection, then template substitution. Stateless apart from its
/// pacing configuration; every call returns a fresh artifact.
pub struct RequestDrafter {
    delay: Duration,
    timezone: Tz,
}

impl RequestDrafter {
    pub fn new(delay: Duration, timezone: Tz) -> Self {
        Self { delay, timezone }
    }

    /// Drafts a letter for the query. Never fails on string input; unknown
    /// departments and application types degrade to generic placeholders.
    ///
    /// The configured delay paces the reply the way a slower drafting backend
    /// would; it yields to the runtime and can be disabled with a zero
    /// duration.
    pub async fn draft(&self, query: &str, language: Language) -> DraftResult {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let today = Utc::now().with_timezone(&self.timezone).date_naive();
        let result = self.render(query, today);
        tracing::info!(
            target: "drafter",
            language = %language,
            department = %result.department,
            subject = %result.subject,
            "draft generated"
        );
        result
    }

    /// Pure rendering over an explicit date, so tests run without the clock
    /// or the pacing delay.
    pub fn render(&self, query: &str, today: NaiveDate) -> DraftResult {
        let department = departments::detect(query);
        let query_type = detect_query_type(query);
        let date = today.format("%d/%m/%Y").to_string();

        let content = match query_type {
            QueryType::Status => render_status(query, department, &date),
            QueryType::Basic => render_basic(query, department, &date),
        };

        DraftResult {
            content,
            department: department.to_string(),
            subject: generate_subject(query, query_type),
        }
    }
}

/// A query mentioning any status keyword is treated as a status inquiry about
/// an existing application; everything else is a general information request.
pub fn detect_query_type(query: &str) -> QueryType {
    let lower = query.to_lowercase();
    if templates::STATUS_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        QueryType::Status
    } else {
        QueryType::Basic
    }
}

fn render_basic(query: &str, department: &str, date: &str) -> String {
    templates::BASIC_TEMPLATE
        .replace("[DEPARTMENT]", department)
        .replace("[QUERY_CONTENT]", &format_query_content(query))
        .replace("[SPECIFIC_REQUEST_1]", &specific_request(query, 1))
        .replace("[SPECIFIC_REQUEST_2]", &specific_request(query, 2))
        .replace("[APPLICANT_NAME]", APPLICANT_PLACEHOLDER)
        .replace("[DATE]", date)
}

fn render_status(query: &str, department: &str, date: &str) -> String {
    templates::STATUS_TEMPLATE
        .replace("[DEPARTMENT]", department)
        .replace("[APPLICATION_TYPE]", extract_application_type(query))
        .replace("[REF_NUMBER]", "[Please insert your reference number]")
        .replace("[SUBMISSION_DATE]", "[Please insert submission date]")
        .replace("[OFFICE_NAME]", "[Please insert office name]")
        .replace("[ADDITIONAL_REQUESTS]", templates::ADDITIONAL_STATUS_REQUESTS)
        .replace("[APPLICANT_NAME]", APPLICANT_PLACEHOLDER)
        .replace("[DATE]", date)
}

/// First listed application-type phrase found in the query, or the literal
/// instruction placeholder when none is.
pub fn extract_application_type(query: &str) -> &'static str {
    let lower = query.to_lowercase();
    templates::APPLICATION_TYPES
        .iter()
        .find(|t| lower.contains(*t))
        .copied()
        .unwrap_or(templates::APPLICATION_TYPE_PLACEHOLDER)
}

/// Recasts the citizen's first-person narrative as formal third-person text:
/// pronoun substitution, leading capital, terminal punctuation.
pub fn format_query_content(query: &str) -> String {
    let formatted = query.trim();
    let formatted = MY_RE.replace_all(formatted, "the");
    let formatted = I_RE.replace_all(&formatted, "the applicant");
    let mut formatted = ME_RE.replace_all(&formatted, "the applicant").into_owned();

    if let Some(first) = formatted.chars().next() {
        let upper = first.to_uppercase().to_string();
        formatted.replace_range(..first.len_utf8(), &upper);
    }

    if !formatted.ends_with('.') && !formatted.ends_with('?') {
        formatted.push('.');
    }

    formatted
}

fn specific_request(query: &str, position: usize) -> String {
    match templates::COMMON_REQUESTS.get(position - 1) {
        Some(clause) => (*clause).to_string(),
        None => {
            let topic: String = query.chars().take(SUBJECT_TOPIC_LIMIT).collect();
            format!("Additional information related to: {}...", topic)
        }
    }
}

fn generate_subject(query: &str, query_type: QueryType) -> String {
    match query_type {
        QueryType::Status => format!(
            "Status inquiry for {} application under RTI Act 2005",
            extract_application_type(query)
        ),
        QueryType::Basic => {
            let truncated = query.chars().count() > SUBJECT_TOPIC_LIMIT;
            let topic: String = query.chars().take(SUBJECT_TOPIC_LIMIT).collect();
            format!(
                "Request for Information regarding {}{} under RTI Act 2005",
                topic.trim(),
                if truncated { "..." } else { "" }
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafter() -> RequestDrafter {
        RequestDrafter::new(Duration::ZERO, chrono_tz::Asia::Kolkata)
    }

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn status_keywords_flag_status_queries() {
        assert_eq!(
            detect_query_type("why is my passport application pending"),
            QueryType::Status
        );
        assert_eq!(
            detect_query_type("list of sanctioned school buildings"),
            QueryType::Basic
        );
    }

    #[test]
    fn application_type_extraction_first_match_wins() {
        assert_eq!(extract_application_type("my RATION CARD application"), "ration card");
        // "ration card" is listed before "income certificate".
        assert_eq!(
            extract_application_type("ration card linked to income certificate"),
            "ration card"
        );
        assert_eq!(
            extract_application_type("application submitted last week"),
            "[Application Type]"
        );
    }

    #[test]
    fn query_content_is_formalized() {
        assert_eq!(
            format_query_content("  i want details of my school budget  "),
            "The applicant want details of the school budget."
        );
        assert_eq!(
            format_query_content("what was spent on roads?"),
            "What was spent on roads?"
        );
        // Existing terminal punctuation is kept as is.
        assert_eq!(format_query_content("budget details."), "Budget details.");
    }

    #[test]
    fn basic_letter_fills_all_placeholders() {
        let result = drafter().render(
            "details of road construction expenditure in ward 7 for 2024",
            fixed_date(),
        );
        assert_eq!(result.department, "Public Works Department");
        assert!(result.content.contains("Public Works Department"));
        assert!(result
            .content
            .contains("Details of road construction expenditure in ward 7 for 2024."));
        assert!(result
            .content
            .contains("1. Detailed breakdown of the information with supporting documents"));
        assert!(result
            .content
            .contains("2. Timeline for any pending actions related to this matter"));
        assert!(result.content.contains("[Your Name]"));
        assert!(result.content.contains("Date: 14/03/2026"));
        assert!(!result.content.contains("[QUERY_CONTENT]"));
        assert!(!result.content.contains("[SPECIFIC_REQUEST_1]"));
    }

    #[test]
    fn status_letter_for_ration_card_query() {
        let result = drafter().render(
            "What is the status of my ration card application submitted last month in Vizag?",
            fixed_date(),
        );
        // No department keyword present, so addressing falls back.
        assert_eq!(result.department, "General Administration Department");
        assert_eq!(
            result.subject,
            "Status inquiry for ration card application under RTI Act 2005"
        );
        assert!(result.content.contains("regarding my ration card application"));
        assert!(!result.content.contains("[Application Type]"));
        assert!(result.content.contains("[Please insert your reference number]"));
        assert!(result.content.contains("[Please insert submission date]"));
        assert!(result.content.contains("[Please insert office name]"));
        assert!(result
            .content
            .contains("7. Any correspondence or communication related to my application"));
        assert!(result
            .content
            .contains("10. Information about any fees paid and receipts issued"));
        assert!(!result.content.contains("[ADDITIONAL_REQUESTS]"));
    }

    #[test]
    fn status_letter_without_known_type_keeps_instruction() {
        let result = drafter().render(
            "current status of the building permit application in the municipal office",
            fixed_date(),
        );
        assert_eq!(
            result.subject,
            "Status inquiry for [Application Type] application under RTI Act 2005"
        );
        assert!(result.content.contains("[Application Type]"));
    }

    #[test]
    fn basic_subject_truncates_with_ellipsis() {
        let long = "details of all tenders floated by the municipal corporation during 2023 and 2024";
        let result = drafter().render(long, fixed_date());
        let topic: String = long.chars().take(50).collect();
        assert_eq!(
            result.subject,
            format!(
                "Request for Information regarding {}... under RTI Act 2005",
                topic.trim()
            )
        );

        let short = "school midday meal menu for 2024";
        let subject = drafter().render(short, fixed_date()).subject;
        assert_eq!(
            subject,
            "Request for Information regarding school midday meal menu for 2024 under RTI Act 2005"
        );
        assert!(!subject.contains("..."));
    }

    #[test]
    fn rendering_is_deterministic_for_a_fixed_date() {
        let d = drafter();
        let query = "copies of records about hospital medicine procurement";
        let first = d.render(query, fixed_date());
        let second = d.render(query, fixed_date());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn draft_is_idempotent_in_non_date_fields() {
        let d = drafter();
        let query = "expenditure records for the primary health centre medicine stock";
        let first = d.draft(query, Language::En).await;
        let second = d.draft(query, Language::En).await;
        assert_eq!(first.department, second.department);
        assert_eq!(first.subject, second.subject);
    }
}
