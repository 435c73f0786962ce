#![warn(missing_docs)]
//! `textarea-treesitter` - Tree-sitter backend for `textarea-core`.
//!
//! This crate plugs Tree-sitter into the parser contract of [`textarea_core::syntax`]:
//!
//! - [`TreeSitterRegistry`]: named Tree-sitter languages, injected into a `TextEditor`
//! - [`TreeSitterParser`]: pulls the document through `TextInput` and reparses incrementally
//! - [`TreeSitterTree`] / [`TreeSitterCursor`]: the parse tree as seen by the highlight cache
//!
//! ```rust
//! use std::sync::Arc;
//! use textarea_core::{EditorConfig, TextEditor};
//! use textarea_treesitter::TreeSitterRegistry;
//!
//! let registry = TreeSitterRegistry::new();
//! let mut editor = TextEditor::new(Arc::new(registry), EditorConfig::default());
//! editor.load_text("plain text");
//! assert!(editor.set_language(Some("rust")).is_err());
//! ```

mod registry;
mod tree;

pub use registry::TreeSitterRegistry;
pub use tree::{TreeSitterCursor, TreeSitterParser, TreeSitterTree};
