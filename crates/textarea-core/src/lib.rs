#![warn(missing_docs)]
//! Textarea Core - headless, syntax-aware text area kernel
//!
//! # Overview
//!
//! `textarea-core` holds the state of a single-cursor text area: a line-based document, a cursor,
//! a syntax tree kept in step with every edit, and a row-indexed highlight cache that feeds a
//! terminal line renderer. The parser itself is pluggable (see [`syntax`]); `textarea-treesitter`
//! provides a Tree-sitter backend.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  TextEditor (actions, scrolling)            │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  LineRenderer (styled segments)             │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  HighlightCache (row → highlights)          │  ← Visual Enhancement
//! ├─────────────────────────────────────────────┤
//! │  SyntaxTreeAdapter (incremental parsing)    │  ← Syntax
//! ├─────────────────────────────────────────────┤
//! │  Document + Cursor                          │  ← Text Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use textarea_core::{Document, Position};
//!
//! let mut document = Document::from_text("Hello,\nworld!");
//!
//! // Insert a row between the two existing ones.
//! let end = document
//!     .insert_range(Position::new(0, 6), Position::new(0, 6), "\nbig")
//!     .unwrap();
//! assert_eq!(end, Position::new(1, 3));
//! assert_eq!(document.text(), "Hello,\nbig\nworld!");
//!
//! // Replace across rows.
//! document
//!     .insert_range(Position::new(0, 5), Position::new(2, 0), " ")
//!     .unwrap();
//! assert_eq!(document.text(), "Hello world!");
//! ```
//!
//! # Coordinates
//!
//! - [`Position`] columns count Unicode scalar values (`char`s)
//! - parser [`Point`] columns count UTF-8 bytes
//! - the renderer measures terminal cells (CJK characters take two, tabs expand to tab stops)
//!
//! # Module Description
//!
//! - [`document`] - line storage and the range edit
//! - [`cursor`] - cursor movement
//! - [`syntax`] - parser contract and the syntax tree adapter
//! - [`highlight`] - row-indexed highlight cache
//! - [`render`] - line renderer
//! - [`editor`] - the text area facade

pub mod config;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod position;
pub mod render;
pub mod style;
pub mod syntax;
mod text;
pub mod width;

pub use config::EditorConfig;
pub use cursor::Cursor;
pub use document::{Document, DocumentEdit};
pub use editor::{EditorAction, TextEditor};
pub use error::{DocumentError, EditorError, SyntaxError};
pub use highlight::{Highlight, HighlightCache};
pub use position::{Position, Range};
pub use render::{LineRenderer, RenderedLine, StyledSegment, gutter_width};
pub use style::{Color, Style, Theme};
pub use syntax::{
    InputEdit, LanguageRegistry, Parser, Point, RegistryTree, SyntaxNode, SyntaxTree,
    SyntaxTreeAdapter, TextInput, TreeCursor, UpdateMode,
};
