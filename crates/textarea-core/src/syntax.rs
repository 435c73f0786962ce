//! Parser-agnostic syntax tree plumbing.
//!
//! This module defines the contract between the editor and an external (incremental) parser:
//!
//! - [`TextInput`]: pull-based access to the document, one row chunk at a time
//! - [`Parser`] / [`SyntaxTree`] / [`TreeCursor`]: the parser and the tree it produces
//! - [`LanguageRegistry`]: a host-owned table of languages, injected into the adapter
//!
//! [`SyntaxTreeAdapter`] owns the current tree and keeps it in step with the [`Document`].
//! Integrations (e.g. `textarea-treesitter`) implement the traits for a concrete parser.

use crate::document::{Document, DocumentEdit};
use crate::error::SyntaxError;
use std::sync::Arc;
use tracing::debug;

/// Parser coordinates: row and **byte** column within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based byte offset within the row.
    pub column: usize,
}

impl Point {
    /// Create a new point.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Byte-level description of an edit, as incremental parsers expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEdit {
    /// Byte offset where the edit starts.
    pub start_byte: usize,
    /// End of the replaced bytes in the old text.
    pub old_end_byte: usize,
    /// End of the inserted bytes in the new text.
    pub new_end_byte: usize,
    /// Point where the edit starts.
    pub start_point: Point,
    /// End of the replaced range in the old text.
    pub old_end_point: Point,
    /// End of the inserted text in the new text.
    pub new_end_point: Point,
}

/// Pull-based text source handed to a [`Parser`].
pub trait TextInput {
    /// Bytes available at `point` (`byte_offset` is the same location as a flat offset).
    ///
    /// An empty slice signals end of input.
    fn read(&self, byte_offset: usize, point: Point) -> &[u8];
}

/// A node as seen through a [`TreeCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Grammar node kind, e.g. `"identifier"`.
    pub kind: &'static str,
    /// Start point (inclusive).
    pub start: Point,
    /// End point (exclusive), possibly on a later row.
    pub end: Point,
}

/// Stateful walker over a [`SyntaxTree`], starting at the root.
pub trait TreeCursor {
    /// The node the cursor is on.
    fn node(&self) -> SyntaxNode;
    /// Move to the first child. Returns `false` (and stays put) for leaves.
    fn goto_first_child(&mut self) -> bool;
    /// Move to the next sibling. Returns `false` (and stays put) for last children.
    fn goto_next_sibling(&mut self) -> bool;
    /// Move to the parent. Returns `false` (and stays put) at the root.
    fn goto_parent(&mut self) -> bool;
}

/// A parse tree produced by a [`Parser`].
///
/// Parent spans always contain their children's spans, and siblings are in document order.
pub trait SyntaxTree: Clone {
    /// Cursor type borrowing the tree.
    type Cursor<'a>: TreeCursor
    where
        Self: 'a;

    /// Start a cursor at the root node.
    fn walk(&self) -> Self::Cursor<'_>;

    /// Shift the tree's positions to account for `edit`, before an incremental reparse.
    fn edit(&mut self, edit: &InputEdit);
}

/// A parser for one language.
pub trait Parser {
    /// The tree type produced.
    type Tree: SyntaxTree;

    /// Parse `input`. `old_tree`, if given, has already been [edited](SyntaxTree::edit) to match
    /// the new text and may be reused. Returns `None` if the parser could not produce a tree.
    fn parse(&mut self, input: &dyn TextInput, old_tree: Option<&Self::Tree>)
    -> Option<Self::Tree>;
}

/// Host-owned table of available languages.
pub trait LanguageRegistry {
    /// Parser type built by this registry.
    type Parser: Parser;

    /// Build a parser for the named language.
    fn create_parser(&self, language: &str) -> Result<Self::Parser, SyntaxError>;

    /// Names of all registered languages.
    fn languages(&self) -> Vec<String>;
}

/// Tree type produced by a registry's parsers.
pub type RegistryTree<R> = <<R as LanguageRegistry>::Parser as Parser>::Tree;

/// How the adapter updated its tree during the last [`SyntaxTreeAdapter::rebuild`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// First parse after a language was selected.
    Initial,
    /// The previous tree was edited and handed to the parser for reuse.
    Incremental,
    /// Parsed from scratch (no usable previous tree or edit record).
    FullReparse,
    /// The tree already matched the document version.
    Skipped,
    /// No language is selected; there is no tree.
    Disabled,
    /// The parser produced nothing; the previous tree was kept.
    Failed,
}

/// Owns the parser and the current tree for one document.
pub struct SyntaxTreeAdapter<R: LanguageRegistry> {
    registry: Arc<R>,
    language: Option<String>,
    parser: Option<R::Parser>,
    tree: Option<RegistryTree<R>>,
    tree_version: Option<u64>,
    last_update_mode: UpdateMode,
}

impl<R: LanguageRegistry> SyntaxTreeAdapter<R> {
    /// Create an adapter with no language selected.
    pub fn new(registry: Arc<R>) -> Self {
        Self {
            registry,
            language: None,
            parser: None,
            tree: None,
            tree_version: None,
            last_update_mode: UpdateMode::Disabled,
        }
    }

    /// The registry this adapter builds parsers from.
    pub fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    /// Currently selected language.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Current tree (`None` when no language is selected or nothing was parsed yet).
    pub fn tree(&self) -> Option<&RegistryTree<R>> {
        self.tree.as_ref()
    }

    /// Document version the current tree was built from.
    pub fn tree_version(&self) -> Option<u64> {
        self.tree_version
    }

    /// How the tree was updated by the last rebuild.
    pub fn last_update_mode(&self) -> UpdateMode {
        self.last_update_mode
    }

    /// Select a language (or disable parsing with `None`) and parse `document` from scratch.
    ///
    /// On error the adapter keeps its previous language and tree. A parse that fails after the
    /// language was accepted returns `Ok(UpdateMode::Failed)`: the language stays selected with no
    /// tree, and the next [`rebuild`](Self::rebuild) retries with a fresh parse.
    pub fn set_language(
        &mut self,
        language: Option<&str>,
        document: &Document,
    ) -> Result<UpdateMode, SyntaxError> {
        let parser = language
            .map(|name| self.registry.create_parser(name))
            .transpose()?;

        self.language = language.map(str::to_string);
        self.parser = parser;
        self.tree = None;
        self.tree_version = None;
        debug!(language = ?self.language, "syntax language set");

        Ok(self.rebuild(document, None))
    }

    /// Bring the tree up to date with `document`.
    ///
    /// `edit` is the edit that produced the current document version; when the tree matches the
    /// version right before it, the tree is edited and reused. The new tree only replaces the
    /// current one once parsing succeeded.
    pub fn rebuild(&mut self, document: &Document, edit: Option<&DocumentEdit>) -> UpdateMode {
        let mode = self.rebuild_inner(document, edit);
        debug!(?mode, version = document.version(), "syntax tree rebuilt");
        self.last_update_mode = mode;
        mode
    }

    fn rebuild_inner(&mut self, document: &Document, edit: Option<&DocumentEdit>) -> UpdateMode {
        let Some(parser) = self.parser.as_mut() else {
            self.tree = None;
            self.tree_version = None;
            return UpdateMode::Disabled;
        };

        let version = document.version();
        if self.tree.is_some() && self.tree_version == Some(version) {
            return UpdateMode::Skipped;
        }

        let reusable = match (self.tree.as_ref(), edit) {
            (Some(tree), Some(edit))
                if edit.version == version
                    && self.tree_version == Some(version.wrapping_sub(1)) =>
            {
                let mut edited = tree.clone();
                edited.edit(&edit.input_edit);
                Some(edited)
            }
            _ => None,
        };

        let mode = match (&reusable, &self.tree) {
            (Some(_), _) => UpdateMode::Incremental,
            (None, None) => UpdateMode::Initial,
            (None, Some(_)) => UpdateMode::FullReparse,
        };

        match parser.parse(document, reusable.as_ref()) {
            Some(tree) => {
                self.tree = Some(tree);
                self.tree_version = Some(version);
                mode
            }
            None => UpdateMode::Failed,
        }
    }
}
