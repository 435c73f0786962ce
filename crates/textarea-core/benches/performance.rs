use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use textarea_core::{
    Document, EditorConfig, InputEdit, LanguageRegistry, Parser, Point, Position, SyntaxError,
    SyntaxNode, SyntaxTree, TextEditor, TextInput, TreeCursor,
};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (textarea-core benchmark line)\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

/// One node per row, under a root spanning the document.
#[derive(Clone)]
struct RowTree {
    nodes: Vec<SyntaxNode>,
}

struct RowCursor<'a> {
    nodes: &'a [SyntaxNode],
    index: usize,
}

impl TreeCursor for RowCursor<'_> {
    fn node(&self) -> SyntaxNode {
        self.nodes[self.index]
    }

    fn goto_first_child(&mut self) -> bool {
        let ok = self.index == 0 && self.nodes.len() > 1;
        if ok {
            self.index = 1;
        }
        ok
    }

    fn goto_next_sibling(&mut self) -> bool {
        let ok = self.index > 0 && self.index + 1 < self.nodes.len();
        if ok {
            self.index += 1;
        }
        ok
    }

    fn goto_parent(&mut self) -> bool {
        let ok = self.index > 0;
        self.index = 0;
        ok
    }
}

impl SyntaxTree for RowTree {
    type Cursor<'a> = RowCursor<'a>;

    fn walk(&self) -> RowCursor<'_> {
        RowCursor {
            nodes: &self.nodes,
            index: 0,
        }
    }

    fn edit(&mut self, _edit: &InputEdit) {}
}

struct RowParser;

impl Parser for RowParser {
    type Tree = RowTree;

    fn parse(&mut self, input: &dyn TextInput, _old_tree: Option<&RowTree>) -> Option<RowTree> {
        let mut nodes = vec![SyntaxNode {
            kind: "source_file",
            start: Point::default(),
            end: Point::default(),
        }];
        let (mut offset, mut point) = (0usize, Point::default());
        loop {
            let chunk = input.read(offset, point);
            if chunk.is_empty() {
                break;
            }
            offset += chunk.len();
            if chunk == b"\n" {
                point = Point::new(point.row + 1, 0);
            } else {
                let end = Point::new(point.row, point.column + chunk.len());
                nodes.push(SyntaxNode {
                    kind: "row",
                    start: point,
                    end,
                });
                point = end;
            }
        }
        nodes[0].end = point;
        Some(RowTree { nodes })
    }
}

struct RowRegistry;

impl LanguageRegistry for RowRegistry {
    type Parser = RowParser;

    fn create_parser(&self, _language: &str) -> Result<RowParser, SyntaxError> {
        Ok(RowParser)
    }

    fn languages(&self) -> Vec<String> {
        vec!["rows".to_string()]
    }
}

fn editor(text: &str) -> TextEditor<RowRegistry> {
    let mut editor = TextEditor::new(Arc::new(RowRegistry), EditorConfig::default());
    editor.load_text(text);
    editor.set_language(Some("rows")).unwrap();
    editor
}

fn bench_large_file_open(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("large_file_open/50k_lines", |b| {
        b.iter(|| {
            let document = Document::from_text(black_box(&text));
            black_box(document.line_count());
        })
    });
}

fn bench_typing_in_middle(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("typing_middle/100_inserts", |b| {
        b.iter_batched(
            || {
                let mut editor = editor(&text);
                // Highlight only what a terminal would show.
                editor.set_highlight_window(Some(25_000..25_060));
                editor.move_cursor(Position::new(25_000, 10)).unwrap();
                editor
            },
            |mut editor| {
                for _ in 0..100 {
                    editor.insert_text("x").unwrap();
                }
                black_box(editor.cursor_position());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_viewport_render_small_slice(c: &mut Criterion) {
    let text = large_text(50_000);
    let mut editor = editor(&text);

    // Pick a row well into the file to avoid warming only the top-of-document paths.
    editor.move_cursor(Position::new(25_010, 0)).unwrap();
    editor.scroll_cursor_visible(120, 60);

    c.bench_function("viewport_render/60_lines", |b| {
        b.iter(|| {
            let lines = editor.render_viewport(black_box(120), 60);
            black_box(lines.len());
        })
    });
}

criterion_group!(
    benches,
    bench_large_file_open,
    bench_typing_in_middle,
    bench_viewport_render_small_slice
);
criterion_main!(benches);
