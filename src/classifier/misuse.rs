use once_cell::sync::Lazy;
use regex::Regex;

use crate::{classifier::patterns, domain::Language};

/// Queries shorter than this (after trimming) are too vague to draft from.
const MIN_QUERY_LENGTH: usize = 20;

static PERSONAL_PRONOUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(my|mine|me|i|myself)\b").expect("valid pronoun regex"));
static INFORMATION_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(information|status|details|copy|list|records)\b")
        .expect("valid information word regex")
});

/// Rule-based gatekeeper deciding whether free text is a genuine request for
/// recorded information or a grievance/action demand outside the RTI process.
pub struct MisuseClassifier;

impl MisuseClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` when the query looks like misuse of the RTI process.
    ///
    /// Three independent heuristics, checked in order: misuse indicators with
    /// no valid-request indicator, a minimum length floor, and heavy
    /// first-person phrasing without any information-seeking noun. The length
    /// and pronoun rules run even when the pattern rule does not fire.
    pub async fn classify(&self, query: &str, language: Language) -> bool {
        let tables = patterns::patterns_for(language);

        let has_misuse_patterns = tables.misuse.iter().any(|p| p.is_match(query));
        let has_valid_patterns = tables.valid_request.iter().any(|p| p.is_match(query));

        if has_misuse_patterns && !has_valid_patterns {
            tracing::debug!(
                target: "classifier",
                language = %language,
                "query rejected by indicator patterns"
            );
            return true;
        }

        if query.trim().chars().count() < MIN_QUERY_LENGTH {
            tracing::debug!(target: "classifier", "query rejected as too short");
            return true;
        }

        let personal_count = PERSONAL_PRONOUNS.find_iter(query).count();
        let info_count = INFORMATION_WORDS.find_iter(query).count();
        if personal_count > 2 && info_count == 0 {
            tracing::debug!(
                target: "classifier",
                personal_count,
                "query rejected as personal narrative without informational intent"
            );
            return true;
        }

        false
    }

    /// Fixed, ordered rewrite hints for the given language.
    pub fn suggestions(&self, language: Language) -> &'static [&'static str] {
        patterns::suggestions_for(language)
    }
}

impl Default for MisuseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> MisuseClassifier {
        MisuseClassifier::new()
    }

    #[tokio::test]
    async fn short_queries_are_always_misuse() {
        let c = classifier();
        assert!(c.classify("", Language::En).await);
        assert!(c.classify("   \t  ", Language::En).await);
        assert!(c.classify("road details", Language::En).await);
        // 19 trimmed characters, one short of the floor.
        assert!(c.classify("abcdefghij abcdefgh", Language::En).await);
    }

    #[tokio::test]
    async fn misuse_indicators_without_valid_indicators_reject() {
        let c = classifier();
        assert!(
            c.classify("fix my problem please help me right now", Language::En)
                .await
        );
        assert!(
            c.classify(
                "please take action against the officer and ensure punishment",
                Language::En
            )
            .await
        );
    }

    #[tokio::test]
    async fn valid_indicators_neutralize_misuse_indicators() {
        let c = classifier();
        // "problem" is a misuse indicator but "records" is a valid one.
        assert!(
            !c.classify(
                "please share records about the drainage problem repairs in ward 12",
                Language::En
            )
            .await
        );
    }

    #[tokio::test]
    async fn informational_queries_pass() {
        let c = classifier();
        assert!(
            !c.classify(
                "Please provide information about the road construction budget for 2024",
                Language::En
            )
            .await
        );
        assert!(
            !c.classify(
                "What is the status of my ration card application submitted last month in Vizag?",
                Language::En
            )
            .await
        );
    }

    #[tokio::test]
    async fn repeated_information_word_passes() {
        let c = classifier();
        assert!(!c.classify("information information information", Language::En).await);
    }

    #[tokio::test]
    async fn pronoun_density_without_information_words_rejects() {
        let c = classifier();
        // No misuse indicator, long enough, but three first-person hits and
        // zero information nouns.
        assert!(
            c.classify(
                "I want to tell you about me and my village school building",
                Language::En
            )
            .await
        );
    }

    #[tokio::test]
    async fn pronoun_density_with_information_word_passes() {
        let c = classifier();
        assert!(
            !c.classify(
                "I would like a copy of my house tax records for my property",
                Language::En
            )
            .await
        );
    }

    #[tokio::test]
    async fn hindi_patterns_apply_for_hindi_tag() {
        let c = classifier();
        assert!(
            c.classify("कृपया मेरी शिकायत का हल करो और मदद करो जल्दी", Language::Hi)
                .await
        );
        assert!(
            !c.classify(
                "कृपया सड़क निर्माण के बजट की जानकारी प्रदान करें",
                Language::Hi
            )
            .await
        );
    }

    #[tokio::test]
    async fn suggestions_are_ordered_and_localized() {
        let c = classifier();
        let en = c.suggestions(Language::En);
        assert_eq!(en.len(), 5);
        assert!(en[0].starts_with("Ask for specific"));
        assert_ne!(c.suggestions(Language::Te)[0], en[0]);
    }
}
