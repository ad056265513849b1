/// MCP server implementation for the CARLOS help assistant.
///
/// Exposes five tools:
/// - `ask_carlos`: Answer a free-text question from the knowledge base
/// - `search_articles`: Ranked lexical search over help articles
/// - `get_article`: Look up a specific article by id
/// - `list_category`: List all articles in a category
/// - `get_transcript`: Read back a conversation transcript
use std::collections::HashMap;
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::api::{
    ArticleDetailResponse, ArticleSearchResult, ArticleSummary, AskCarlosParams,
    AskCarlosResponse, CategoryInfo, CategoryListResponse, GetArticleParams, GetTranscriptParams,
    ListCategoryParams, MatchedArticle, SearchArticlesParams, SearchArticlesResponse,
    TranscriptMessage, TranscriptResponse,
};
use help_kb::composer;
use help_kb::corpus::ArticleCorpus;
use help_kb::matcher;
use help_kb::model::{Article, Category};
use help_kb::session::{ConversationSession, Message, MessageRole};

/// Per-session conversation state, behind RwLock for concurrent reads
/// and exclusive writes when a session is appended to.
pub struct AppState {
    pub sessions: HashMap<String, ConversationSession>,
}

#[derive(Clone)]
pub struct CarlosAssistantServer {
    corpus: Arc<ArticleCorpus>,
    state: Arc<RwLock<AppState>>,
    tool_router: ToolRouter<CarlosAssistantServer>,
}

impl CarlosAssistantServer {
    pub fn new(corpus: ArticleCorpus) -> Self {
        Self {
            corpus: Arc::new(corpus),
            state: Arc::new(RwLock::new(AppState {
                sessions: HashMap::new(),
            })),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl CarlosAssistantServer {
    #[tool(description = "Ask the CARLOS help assistant a question. Matches the question against the help knowledge base and returns a composed answer with follow-up suggestions, appending the exchange to the named conversation session.")]
    async fn ask_carlos(
        &self,
        Parameters(params): Parameters<AskCarlosParams>,
    ) -> Result<Json<AskCarlosResponse>, String> {
        let session_id = params.session_id.trim().to_string();
        if session_id.is_empty() {
            return Err("session_id must not be empty".to_string());
        }
        let query = params.query.trim().to_string();
        if query.is_empty() {
            return Err("query must not be empty".to_string());
        }

        let best = matcher::match_query(&self.corpus, &query);
        let reply = composer::compose(best.as_ref());
        let matched_article = best.map(|m| MatchedArticle {
            id: m.article.id.clone(),
            title: m.article.title.clone(),
            category: m.article.category.to_string(),
        });
        info!(
            query = %query,
            matched = matched_article.as_ref().map(|m| m.id.as_str()).unwrap_or("none"),
            "ask_carlos"
        );

        let mut state = self.state.write().await;
        let session = state.sessions.entry(session_id).or_default();
        session
            .append_user(&query)
            .map_err(|e| format!("invalid message: {e}"))?;
        let message = session.append_assistant(reply);

        Ok(Json(AskCarlosResponse {
            message_id: message.id,
            content: message.content.clone(),
            suggestions: message.suggestions.clone(),
            matched_article,
        }))
    }

    #[tool(description = "Search CARLOS help articles by lexical relevance. Returns ranked results matching the query.")]
    async fn search_articles(
        &self,
        Parameters(params): Parameters<SearchArticlesParams>,
    ) -> Result<Json<SearchArticlesResponse>, String> {
        let query = params.query.trim().to_string();
        if query.is_empty() {
            return Err("query must not be empty".to_string());
        }

        let limit = params.limit.unwrap_or(10).min(50) as usize;
        let ranked = matcher::rank(&self.corpus, &query, limit);
        info!(query = %query, results = ranked.len(), "search_articles");

        let results: Vec<ArticleSearchResult> = ranked
            .into_iter()
            .map(|m| ArticleSearchResult {
                id: m.article.id.clone(),
                title: m.article.title.clone(),
                category: m.article.category.to_string(),
                score: m.score,
                summary: m.article.summary.clone(),
            })
            .collect();

        Ok(Json(SearchArticlesResponse { results }))
    }

    #[tool(description = "Get the full content of a specific help article by id (e.g. 'trf-submit-blocked').")]
    async fn get_article(
        &self,
        Parameters(params): Parameters<GetArticleParams>,
    ) -> Result<Json<ArticleDetailResponse>, String> {
        let article_id = params.article_id.trim().to_string();
        if article_id.is_empty() {
            return Err("article_id must not be empty".to_string());
        }

        let article = self
            .corpus
            .get(&article_id)
            .ok_or_else(|| format!("article not found: {article_id}"))?;

        Ok(Json(to_api_article(article)))
    }

    #[tool(description = "List all help articles in a category. Valid categories: getting_started, trfs, testing, approvals, suppliers, components, care_labelling, reporting, admin.")]
    async fn list_category(
        &self,
        Parameters(params): Parameters<ListCategoryParams>,
    ) -> Result<Json<CategoryListResponse>, String> {
        let key = params.category.trim().to_string();
        if key.is_empty() {
            return Err("category must not be empty".to_string());
        }

        let category = Category::parse(&key).ok_or_else(|| {
            let available: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            format!(
                "unknown category: '{key}'. Available categories: {}",
                available.join(", ")
            )
        })?;

        let articles = self.corpus.in_category(category);
        let summaries: Vec<ArticleSummary> = articles
            .iter()
            .map(|a| ArticleSummary {
                id: a.id.clone(),
                title: a.title.clone(),
            })
            .collect();

        Ok(Json(CategoryListResponse {
            category: CategoryInfo {
                key: category.as_str().to_string(),
                article_count: summaries.len(),
            },
            articles: summaries,
        }))
    }

    #[tool(description = "Read back the ordered message transcript of a conversation session.")]
    async fn get_transcript(
        &self,
        Parameters(params): Parameters<GetTranscriptParams>,
    ) -> Result<Json<TranscriptResponse>, String> {
        let session_id = params.session_id.trim().to_string();
        if session_id.is_empty() {
            return Err("session_id must not be empty".to_string());
        }

        let state = self.state.read().await;
        let session = state
            .sessions
            .get(&session_id)
            .ok_or_else(|| format!("unknown session: {session_id}"))?;

        let messages = session.history().iter().map(to_api_message).collect();
        Ok(Json(TranscriptResponse { messages }))
    }
}

fn to_api_article(article: &Article) -> ArticleDetailResponse {
    ArticleDetailResponse {
        id: article.id.clone(),
        title: article.title.clone(),
        category: article.category.to_string(),
        summary: article.summary.clone(),
        body: article.body.clone(),
        tags: article.tags.clone(),
        roles_visible_to: article
            .roles_visible_to
            .iter()
            .map(|r| r.as_str().to_string())
            .collect(),
        causes: article.causes.clone(),
        fix_steps: article.fix_steps.clone(),
    }
}

fn to_api_message(message: &Message) -> TranscriptMessage {
    TranscriptMessage {
        id: message.id,
        role: match message.role {
            MessageRole::User => "user".to_string(),
            MessageRole::Assistant => "assistant".to_string(),
        },
        content: message.content.clone(),
        suggestions: message.suggestions.clone(),
    }
}

#[tool_handler]
impl ServerHandler for CarlosAssistantServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "carlos-assistant".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "CARLOS help assistant MCP server. Answers platform questions \
                 from the help knowledge base. Use ask_carlos for natural \
                 language questions (conversational, per session_id), \
                 search_articles for ranked article search, get_article for a \
                 specific article by id, list_category for browsing by \
                 category, and get_transcript to read a session back."
                    .to_string(),
            ),
        }
    }
}
