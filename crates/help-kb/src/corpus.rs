/// The article corpus: every help article available for matching.
///
/// The corpus is constructed explicitly (from a `Vec<Article>` or a JSON
/// file) and validated once at construction. It is immutable afterwards —
/// matching never has to defend against duplicate ids or tagless articles,
/// because a corpus violating those invariants never comes into existence.
use std::path::Path;

use crate::error::KbError;
use crate::model::{Article, Category};

#[derive(Debug)]
pub struct ArticleCorpus {
    articles: Vec<Article>,
}

impl ArticleCorpus {
    /// Build a corpus from in-memory articles, validating invariants:
    /// unique `id`, non-empty `tags`.
    pub fn new(articles: Vec<Article>) -> Result<Self, KbError> {
        let mut seen = std::collections::HashSet::new();
        for article in &articles {
            if !seen.insert(article.id.as_str()) {
                return Err(KbError::DuplicateArticleId(article.id.clone()));
            }
            if article.tags.is_empty() {
                return Err(KbError::MissingTags(article.id.clone()));
            }
        }
        Ok(Self { articles })
    }

    /// Load and validate a corpus from a JSON file containing an array of
    /// articles.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KbError> {
        let content = std::fs::read_to_string(path)?;
        let articles: Vec<Article> = serde_json::from_str(&content)?;
        Self::new(articles)
    }

    /// Look up an article by id, case-insensitively.
    pub fn get(&self, id: &str) -> Option<&Article> {
        let id = id.trim();
        self.articles.iter().find(|a| a.id.eq_ignore_ascii_case(id))
    }

    /// All articles in a category, sorted by id.
    pub fn in_category(&self, category: Category) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self
            .articles
            .iter()
            .filter(|a| a.category == category)
            .collect();
        articles.sort_by(|a, b| a.id.cmp(&b.id));
        articles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn fixture_article(id: &str, title: &str, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        category: Category::Testing,
        summary: String::new(),
        body: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        roles_visible_to: Vec::new(),
        causes: Vec::new(),
        fix_steps: Vec::new(),
    }
}
