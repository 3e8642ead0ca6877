//! Integration tests for block parsing and lookup.

use pretty_assertions::assert_eq;
use toggle_engine::{BlockState, MarkerProfile, find, list, parse};

const JOBS: &str = "\
stages:
  - build
alpha:
  stage: build
  script: make
# beta:
#   script: make test
";

fn gitlab(text: &str) -> toggle_engine::Parsed {
    parse(text, &MarkerProfile::gitlab_ci().compile().unwrap())
}

#[test]
fn test_list_reports_blocks_in_document_order() {
    let parsed = gitlab(JOBS);
    let rows: Vec<(String, BlockState)> = list(&parsed.blocks)
        .into_iter()
        .map(|s| (s.name, s.state))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("alpha".to_string(), BlockState::Enabled),
            ("beta".to_string(), BlockState::Disabled),
        ]
    );
}

#[test]
fn test_block_extents() {
    let parsed = gitlab(JOBS);
    let alpha = &parsed.blocks[0];
    let beta = &parsed.blocks[1];

    assert_eq!((alpha.start_line, alpha.end_line), (3, 5));
    assert_eq!(alpha.raw_lines.len(), 3);
    assert_eq!((beta.start_line, beta.end_line), (6, 7));
    assert_eq!(beta.raw_lines.len(), 2);
}

#[test]
fn test_reserved_keywords_are_not_blocks() {
    let parsed = gitlab(JOBS);
    assert!(parsed.blocks.iter().all(|b| b.name != "stages"));
}

#[test]
fn test_blocks_at_same_level_do_not_overlap() {
    let parsed = gitlab(JOBS);
    for pair in parsed.blocks.windows(2) {
        assert!(pair[0].end_line < pair[1].start_line);
    }
}

#[test]
fn test_render_without_toggle_is_identity() {
    let parsed = gitlab(JOBS);
    assert_eq!(parsed.document.render(), JOBS);
}

#[test]
fn test_blank_lines_between_blocks_belong_to_preceding_block() {
    let text = "alpha:\n  script: a\n\n\nbeta:\n  script: b\n\n";
    let parsed = gitlab(text);
    assert_eq!(parsed.blocks[0].end_line, 4);
    assert_eq!(parsed.blocks[1].end_line, 6);
}

#[test]
fn test_find_missing_block() {
    let parsed = gitlab(JOBS);
    assert!(find(&parsed.blocks, "gamma").is_err());
}

#[test]
fn test_find_first_of_duplicates() {
    let text = "build:\n  script: a\nbuild:\n  script: b\n";
    let parsed = gitlab(text);
    let located = find(&parsed.blocks, "build").unwrap();

    assert_eq!(located.block.start_line, 1);
    assert_eq!(located.ambiguity.unwrap().lines, vec![1, 3]);
}

#[test]
fn test_commented_at_column_zero_keeps_extent() {
    let text = "\
repos:
  - repo: local
    hooks:
#       - id: slow
#         entry: ./slow.sh
      - id: fast
        entry: ./fast.sh
";
    let parsed = parse(text, &MarkerProfile::pre_commit().compile().unwrap());
    let spans: Vec<(&str, usize, usize, BlockState)> = parsed
        .blocks
        .iter()
        .map(|b| (b.name.as_str(), b.start_line, b.end_line, b.state))
        .collect();

    assert_eq!(
        spans,
        vec![
            ("slow", 4, 5, BlockState::Disabled),
            ("fast", 6, 7, BlockState::Enabled),
        ]
    );
}
