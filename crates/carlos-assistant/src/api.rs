use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AskCarlosParams {
    /// Client-chosen conversation identifier. A new session is created on
    /// first use and appended to on subsequent calls.
    pub session_id: String,
    /// The user's free-text question.
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchArticlesParams {
    /// The search query describing the problem or topic.
    pub query: String,
    /// Maximum number of results to return (default: 10, max: 50).
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetArticleParams {
    /// Stable article id such as "trf-submit-blocked".
    pub article_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCategoryParams {
    /// Category key such as "trfs" or "care_labelling".
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTranscriptParams {
    /// The conversation identifier passed to ask_carlos.
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchedArticle {
    pub id: String,
    pub title: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AskCarlosResponse {
    /// Id of the assistant message appended to the session.
    pub message_id: u64,
    /// Displayable reply content (lightweight markup).
    pub content: String,
    /// Follow-up prompt chips.
    pub suggestions: Vec<String>,
    /// The knowledge-base article the reply was composed from, if any.
    pub matched_article: Option<MatchedArticle>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleSearchResult {
    pub id: String,
    pub title: String,
    pub category: String,
    pub score: u32,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchArticlesResponse {
    pub results: Vec<ArticleSearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleDetailResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub body: String,
    pub tags: Vec<String>,
    pub roles_visible_to: Vec<String>,
    pub causes: Vec<String>,
    pub fix_steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInfo {
    pub key: String,
    pub article_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub category: CategoryInfo,
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptMessage {
    pub id: u64,
    pub role: String,
    pub content: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptResponse {
    pub messages: Vec<TranscriptMessage>,
}
