/// Response composer: turns a query match (or its absence) into a
/// displayable assistant reply.
///
/// Templating is fully deterministic — the same match always produces the
/// same content, with no randomized filler. Content uses the same
/// lightweight markup the presentation layer renders (`**bold**`,
/// numbered lines); it is display text, never executed.
use crate::matcher::QueryMatch;

/// A composed assistant reply: display content plus follow-up prompt
/// chips the user can click to continue the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedReply {
    pub content: String,
    pub suggestions: Vec<String>,
}

/// Follow-up chips shown with every answered question.
const MATCHED_SUGGESTIONS: [&str; 3] = [
    "Create support ticket",
    "Show related articles",
    "Try something else",
];

/// Example reformulations offered when nothing matched, phrased the way
/// the matcher scores well.
const NO_MATCH_SUGGESTIONS: [&str; 3] = ["Can't submit TRF", "Component stuck", "Export issue"];

const NO_MATCH_CONTENT: &str = "I'm looking into that. Could you share more details?\n\n\
    \u{2022} What screen are you on?\n\
    \u{2022} Is a button disabled or missing?\n\
    \u{2022} Are you seeing an error?\n\n\
    The more context you share, the faster I can help!";

const ESCALATION_LINE: &str =
    "If that doesn't resolve it, you can create a support ticket from the Support Center.";

/// Compose a reply for a query result.
///
/// Total over its input: a `None` match yields the clarifying-question
/// template rather than an error.
pub fn compose(query_match: Option<&QueryMatch<'_>>) -> ComposedReply {
    match query_match {
        Some(m) => compose_matched(m),
        None => ComposedReply {
            content: NO_MATCH_CONTENT.to_string(),
            suggestions: NO_MATCH_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        },
    }
}

fn compose_matched(m: &QueryMatch<'_>) -> ComposedReply {
    let article = m.article;
    let mut content = format!("**{}**", article.title);

    if article.causes.is_empty() && article.fix_steps.is_empty() {
        // How-to article rather than a troubleshooting one: lead with the
        // summary and point at the full article.
        content.push_str("\n\n");
        content.push_str(&article.summary);
        content.push_str("\n\nOpen the full article for the step-by-step walkthrough.");
    } else {
        if let Some(causes) = causal_clause(&article.causes) {
            content.push_str(&format!("\n\nThis usually happens when {causes}."));
        }
        if !article.fix_steps.is_empty() {
            content.push_str("\n\n**Quick fix:**\n");
            content.push_str(&numbered_steps(&article.fix_steps));
        }
        content.push_str("\n\n");
        content.push_str(ESCALATION_LINE);
    }

    ComposedReply {
        content,
        suggestions: MATCHED_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

/// The first one or two causes joined with "or", lowercased to read as a
/// mid-sentence clause.
fn causal_clause(causes: &[String]) -> Option<String> {
    if causes.is_empty() {
        return None;
    }
    let joined = causes
        .iter()
        .take(2)
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(" or ");
    Some(joined.to_lowercase())
}

fn numbered_steps(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::fixture_article;
    use crate::model::Article;

    fn troubleshooting_article() -> Article {
        let mut article = fixture_article("trf-submit", "Cannot submit TRF", &["trf"]);
        article.causes = vec![
            "Required fields are missing".to_string(),
            "The linked style has no approved components".to_string(),
            "A third cause that must not appear".to_string(),
        ];
        article.fix_steps = vec![
            "Check the highlighted required fields".to_string(),
            "Confirm the style has at least one approved component".to_string(),
            "Retry the submission".to_string(),
        ];
        article
    }

    #[test]
    fn matched_reply_has_causes_fix_list_and_triad() {
        let article = troubleshooting_article();
        let reply = compose(Some(&QueryMatch { article: &article, score: 10 }));

        assert!(reply.content.starts_with("**Cannot submit TRF**"));
        assert!(reply.content.contains(
            "This usually happens when required fields are missing or \
             the linked style has no approved components."
        ));
        assert!(!reply.content.contains("third cause"));
        assert!(reply.content.contains("**Quick fix:**"));
        assert!(reply.content.contains("1. Check the highlighted required fields"));
        assert!(reply.content.contains("3. Retry the submission"));
        assert!(reply.content.contains("create a support ticket"));
        assert_eq!(
            reply.suggestions,
            ["Create support ticket", "Show related articles", "Try something else"]
        );
    }

    #[test]
    fn matched_reply_is_deterministic() {
        let article = troubleshooting_article();
        let m = QueryMatch { article: &article, score: 10 };
        assert_eq!(compose(Some(&m)), compose(Some(&m)));
    }

    #[test]
    fn how_to_article_falls_back_to_summary() {
        let mut article = fixture_article("supplier-onboarding", "Supplier onboarding", &["suppliers"]);
        article.summary = "Add suppliers and invite their users in three steps.".to_string();
        let reply = compose(Some(&QueryMatch { article: &article, score: 6 }));

        assert!(reply.content.contains("Add suppliers and invite their users"));
        assert!(!reply.content.contains("Quick fix"));
        assert_eq!(reply.suggestions.len(), 3);
    }

    #[test]
    fn no_match_reply_is_the_clarifying_template() {
        let reply = compose(None);
        assert!(reply.content.contains("Could you share more details?"));
        assert!(reply.content.contains("What screen are you on?"));
        assert!(!reply.content.contains("Quick fix"));
        assert_eq!(reply.suggestions, ["Can't submit TRF", "Component stuck", "Export issue"]);
    }
}
