use crate::tree::TreeSitterParser;
use std::collections::BTreeMap;
use textarea_core::{LanguageRegistry, SyntaxError};
use tracing::debug;

/// Named Tree-sitter languages.
///
/// Registering a name twice replaces the earlier language.
#[derive(Clone, Default)]
pub struct TreeSitterRegistry {
    languages: BTreeMap<String, tree_sitter::Language>,
}

impl TreeSitterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `language` under `name`.
    pub fn register_language(&mut self, name: impl Into<String>, language: tree_sitter::Language) {
        let name = name.into();
        debug!(%name, "tree-sitter language registered");
        self.languages.insert(name, language);
    }

    /// Builder form of [`register_language`](Self::register_language).
    pub fn with_language(mut self, name: impl Into<String>, language: tree_sitter::Language) -> Self {
        self.register_language(name, language);
        self
    }

    /// Look up a registered language.
    pub fn language(&self, name: &str) -> Option<&tree_sitter::Language> {
        self.languages.get(name)
    }

    /// Registered names, sorted.
    pub fn available_languages(&self) -> Vec<String> {
        self.languages.keys().cloned().collect()
    }
}

impl std::fmt::Debug for TreeSitterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeSitterRegistry")
            .field("languages", &self.languages.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl LanguageRegistry for TreeSitterRegistry {
    type Parser = TreeSitterParser;

    fn create_parser(&self, language: &str) -> Result<TreeSitterParser, SyntaxError> {
        let ts_language = self
            .languages
            .get(language)
            .ok_or_else(|| SyntaxError::UnknownLanguage(language.to_string()))?;
        TreeSitterParser::new(ts_language)
    }

    fn languages(&self) -> Vec<String> {
        self.available_languages()
    }
}
