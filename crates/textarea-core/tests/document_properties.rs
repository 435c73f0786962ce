//! Randomized checks of the range edit.
//!
//! 1. Consistency: random replacements on a mid-sized document match a `Rope` reference.
//! 2. Round-trip, newline count and inverse law hold for random edits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ropey::Rope;
use textarea_core::{Document, Position};

const SNIPPETS: &[&str] = &["", "X", "你好", "👋", "test\n", "\n", "a\nb\nc", "\r\n"];

fn generate_text(rows: usize) -> String {
    (0..rows)
        .map(|i| match i % 4 {
            0 => "Lorem ipsum dolor sit amet,".to_string(),
            1 => String::new(),
            2 => format!("    consectetur {i} 日本語"),
            _ => "\tadipiscing elit.".to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn random_position(rng: &mut StdRng, document: &Document) -> Position {
    let row = rng.gen_range(0..document.line_count());
    let column = rng.gen_range(0..=document.line_len(row));
    Position::new(row, column)
}

fn random_range(rng: &mut StdRng, document: &Document) -> (Position, Position) {
    let a = random_position(rng, document);
    let b = if rng.gen_bool(0.5) {
        a
    } else {
        random_position(rng, document)
    };
    (a.min(b), a.max(b))
}

fn char_index(rope: &Rope, pos: Position) -> usize {
    rope.line_to_char(pos.row) + pos.column
}

#[test]
fn test_consistency_with_rope() {
    let text = generate_text(200);
    let mut document = Document::from_text(&text);
    let mut reference = Rope::from_str(&text);
    let mut rng = StdRng::seed_from_u64(0x7e57);

    for _ in 0..500 {
        let (start, end) = random_range(&mut rng, &document);
        let snippet = SNIPPETS[rng.gen_range(0..SNIPPETS.len())];

        let start_char = char_index(&reference, start);
        let end_char = char_index(&reference, end);
        reference.remove(start_char..end_char);
        reference.insert(start_char, &snippet.replace("\r\n", "\n"));

        document.insert_range(start, end, snippet).unwrap();
        assert_eq!(document.line_count(), reference.len_lines());
    }

    assert_eq!(document.text(), reference.to_string());
}

#[test]
fn test_round_trip_and_newline_count() {
    let mut document = Document::from_text(&generate_text(40));
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..200 {
        let snippet = SNIPPETS[rng.gen_range(0..SNIPPETS.len())];
        let normalized = snippet.replace("\r\n", "\n");

        let (start, end) = random_range(&mut rng, &document);
        let new_end = document.insert_range(start, end, snippet).unwrap();
        assert_eq!(document.text_range(start, new_end).unwrap(), normalized);

        let at = random_position(&mut rng, &document);
        let rows = document.line_count();
        document.insert_range(at, at, snippet).unwrap();
        assert_eq!(document.line_count(), rows + normalized.matches('\n').count());
    }
}

#[test]
fn test_delete_then_reinsert_restores_document() {
    let original = Document::from_text(&generate_text(40));
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..200 {
        let mut document = original.clone();
        let (start, end) = random_range(&mut rng, &document);

        let removed = document.text_range(start, end).unwrap();
        assert_eq!(document.delete_range(start, end).unwrap(), start);
        let restored_end = document.insert_range(start, start, &removed).unwrap();

        assert_eq!(restored_end, end);
        assert_eq!(document.lines(), original.lines());
    }
}

#[test]
fn test_last_edit_describes_byte_offsets() {
    let mut document = Document::from_text(&generate_text(12));
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let before = document.text();
        let (start, end) = random_range(&mut rng, &document);
        let snippet = SNIPPETS[rng.gen_range(1..SNIPPETS.len())];
        document.insert_range(start, end, snippet).unwrap();

        let edit = document.last_edit().unwrap().input_edit;
        let after = document.text();
        assert_eq!(before[..edit.start_byte], after[..edit.start_byte]);
        assert_eq!(before[edit.old_end_byte..], after[edit.new_end_byte..]);
        assert_eq!(
            &after[edit.start_byte..edit.new_end_byte],
            snippet.replace("\r\n", "\n")
        );
    }
}
