use serde::{Deserialize, Serialize};

/// A single help-center article (e.g. "Cannot submit TRF").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Stable identifier, unique within the corpus, e.g. "trf-submit-blocked"
    pub id: String,
    /// Short human-readable name
    pub title: String,
    /// Help-center category the article is filed under
    pub category: Category,
    /// One-paragraph description, searched at the lowest weight
    pub summary: String,
    /// Full article text, lightweight markup (headings, numbered steps, bold)
    pub body: String,
    /// Match vocabulary; must be non-empty (validated at corpus load)
    pub tags: Vec<String>,
    /// Roles allowed to see the article; a presentation-layer filter,
    /// not consulted by the matcher
    #[serde(default)]
    pub roles_visible_to: Vec<Role>,
    /// "Why this usually happens" clauses, for troubleshooting articles
    #[serde(default)]
    pub causes: Vec<String>,
    /// Ordered remediation steps, for troubleshooting articles
    #[serde(default)]
    pub fix_steps: Vec<String>,
}

/// Help-center category. Closed set — the original product filed every
/// article under exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GettingStarted,
    Trfs,
    Testing,
    Approvals,
    Suppliers,
    Components,
    CareLabelling,
    Reporting,
    Admin,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::GettingStarted,
        Category::Trfs,
        Category::Testing,
        Category::Approvals,
        Category::Suppliers,
        Category::Components,
        Category::CareLabelling,
        Category::Reporting,
        Category::Admin,
    ];

    /// The wire/key form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::GettingStarted => "getting_started",
            Category::Trfs => "trfs",
            Category::Testing => "testing",
            Category::Approvals => "approvals",
            Category::Suppliers => "suppliers",
            Category::Components => "components",
            Category::CareLabelling => "care_labelling",
            Category::Reporting => "reporting",
            Category::Admin => "admin",
        }
    }

    /// Parse the wire form back to a category, case-insensitively.
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform user role, as used by article visibility filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Buyer,
    Supplier,
    LabTechnician,
    Manager,
    Admin,
}

impl Role {
    /// The wire/key form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Supplier => "supplier",
            Role::LabTechnician => "lab_technician",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
