use textarea_core::{
    InputEdit, Parser, Point, SyntaxError, SyntaxNode, SyntaxTree, TextInput, TreeCursor,
};

fn to_ts_point(point: Point) -> tree_sitter::Point {
    tree_sitter::Point::new(point.row, point.column)
}

fn from_ts_point(point: tree_sitter::Point) -> Point {
    Point::new(point.row, point.column)
}

/// A Tree-sitter parser bound to one language.
pub struct TreeSitterParser {
    parser: tree_sitter::Parser,
}

impl TreeSitterParser {
    /// Create a parser for `language`.
    pub fn new(language: &tree_sitter::Language) -> Result<Self, SyntaxError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(language)
            .map_err(|e| SyntaxError::Language(e.to_string()))?;
        Ok(Self { parser })
    }
}

impl Parser for TreeSitterParser {
    type Tree = TreeSitterTree;

    fn parse(
        &mut self,
        input: &dyn TextInput,
        old_tree: Option<&TreeSitterTree>,
    ) -> Option<TreeSitterTree> {
        let mut read = |byte: usize, point: tree_sitter::Point| input.read(byte, from_ts_point(point));
        self.parser
            .parse_with_options(&mut read, old_tree.map(|t| &t.tree), None)
            .map(|tree| TreeSitterTree { tree })
    }
}

/// A Tree-sitter parse tree.
#[derive(Debug, Clone)]
pub struct TreeSitterTree {
    tree: tree_sitter::Tree,
}

impl TreeSitterTree {
    /// The underlying Tree-sitter tree.
    pub fn as_tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Root node.
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

impl SyntaxTree for TreeSitterTree {
    type Cursor<'a> = TreeSitterCursor<'a>;

    fn walk(&self) -> TreeSitterCursor<'_> {
        TreeSitterCursor {
            cursor: self.tree.walk(),
        }
    }

    fn edit(&mut self, edit: &InputEdit) {
        self.tree.edit(&tree_sitter::InputEdit {
            start_byte: edit.start_byte,
            old_end_byte: edit.old_end_byte,
            new_end_byte: edit.new_end_byte,
            start_position: to_ts_point(edit.start_point),
            old_end_position: to_ts_point(edit.old_end_point),
            new_end_position: to_ts_point(edit.new_end_point),
        });
    }
}

/// Walks every node of a [`TreeSitterTree`], named and anonymous.
pub struct TreeSitterCursor<'a> {
    cursor: tree_sitter::TreeCursor<'a>,
}

impl TreeCursor for TreeSitterCursor<'_> {
    fn node(&self) -> SyntaxNode {
        let node = self.cursor.node();
        SyntaxNode {
            kind: node.kind(),
            start: from_ts_point(node.start_position()),
            end: from_ts_point(node.end_position()),
        }
    }

    fn goto_first_child(&mut self) -> bool {
        self.cursor.goto_first_child()
    }

    fn goto_next_sibling(&mut self) -> bool {
        self.cursor.goto_next_sibling()
    }

    fn goto_parent(&mut self) -> bool {
        self.cursor.goto_parent()
    }
}
