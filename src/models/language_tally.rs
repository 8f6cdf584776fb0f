use serde::Serialize;

/// Number of repositories written in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTally {
    pub language: String,
    pub count: usize,
}
