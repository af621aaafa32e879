//! Unit tests for the `textmas` CLI entrypoint module.

use super::{
    format_decode_output, format_encode_output, generate_tree, read_content, render_mode,
    shake_frames,
};
use super::{Cli, Commands};
use clap::Parser;
use std::io::Write;
use std::time::{Duration, Instant};
use textmas_core::session::Viewing;
use textmas_core::share::decode_input;
use textmas_core::{layout, LayoutStrategy, RenderMode, Session, TreeState, DEFAULT_BASE_URL};

#[test]
fn encode_args_parse_highlight_list() {
    let cli = Cli::try_parse_from([
        "textmas",
        "encode",
        "--content",
        "HELLO",
        "--highlight",
        "1,3",
        "--token-only",
    ])
    .expect("parse");

    let Commands::Encode {
        content,
        highlight,
        topper,
        style,
        token_only,
        ..
    } = cli.command
    else {
        panic!("expected encode command");
    };
    assert_eq!(content.as_deref(), Some("HELLO"));
    assert_eq!(highlight, vec![1, 3]);
    assert_eq!(topper, "⭐");
    assert_eq!(style, 1);
    assert!(token_only);
    assert!(!cli.json);
}

#[test]
fn json_flag_is_global() {
    let cli = Cli::try_parse_from(["textmas", "decode", "abc", "--json"]).expect("parse");
    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Decode { ref input } if input == "abc"));
}

#[test]
fn content_and_file_conflict() {
    let result = Cli::try_parse_from([
        "textmas", "encode", "--content", "x", "--file", "y.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn reveal_and_marking_conflict() {
    let result = Cli::try_parse_from(["textmas", "render", "tok", "--reveal", "--marking"]);
    assert!(result.is_err());
}

#[test]
fn shake_conflicts_with_other_modes() {
    let ok = Cli::try_parse_from(["textmas", "render", "tok", "--shake"]).expect("parse");
    assert!(matches!(ok.command, Commands::Render { shake: true, .. }));

    assert!(Cli::try_parse_from(["textmas", "render", "tok", "--shake", "--reveal"]).is_err());
    assert!(Cli::try_parse_from(["textmas", "render", "tok", "--shake", "--marking"]).is_err());
}

#[test]
fn shake_frames_reveal_then_hide() {
    let tree = TreeState::new("⭐", "HELLO").with_highlights([1, 3]);
    let rows = layout(&tree, LayoutStrategy::Classic);
    let mut session = Session::Viewing(Viewing::new(tree));

    let frames = shake_frames(&mut session, &rows, Instant::now(), Duration::from_millis(1500));
    assert_eq!(frames.len(), 2);

    let letters = |frame: &str| frame.chars().filter(char::is_ascii_uppercase).count();
    assert_eq!(letters(&frames[0]), 2);
    assert_eq!(letters(&frames[1]), 55);
    assert!(!session.is_revealed());
}

#[test]
fn render_mode_prefers_marking() {
    assert_eq!(render_mode(false, false), RenderMode::Normal);
    assert_eq!(render_mode(true, false), RenderMode::Revealed);
    assert_eq!(render_mode(false, true), RenderMode::Marking);
}

#[test]
fn read_content_prefers_inline_text() {
    let content = read_content(Some("inline".to_string()), None).expect("content");
    assert_eq!(content, "inline");
}

#[test]
fn read_content_loads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "圣诞快乐\nMerry").expect("write");

    let content = read_content(None, Some(file.path().to_path_buf())).expect("content");
    assert_eq!(content, "圣诞快乐\nMerry");
}

#[test]
fn read_content_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.txt");

    let err = read_content(None, Some(missing)).expect_err("missing file");
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn generated_link_decodes_to_the_draft() {
    let generated =
        generate_tree("HELLO", "🎄 tree", &[3, 1, 3], 2, DEFAULT_BASE_URL).expect("generate");

    assert!(generated.url.starts_with("https://textmas.tree/#tree="));
    assert!(generated.url.ends_with(&generated.token));

    let decoded = decode_input(&generated.url).expect("decode");
    assert_eq!(decoded, generated.tree);
    assert_eq!(decoded.topper, "🎄");
    assert_eq!(decoded.content, "HELLO");
    assert_eq!(decoded.highlights.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(decoded.style_index, Some(2));
}

#[test]
fn out_of_range_highlights_are_kept() {
    let generated = generate_tree("AB", "⭐", &[500], 1, DEFAULT_BASE_URL).expect("generate");
    assert!(generated.tree.highlights.contains(&500));
}

#[test]
fn encode_output_formats() {
    let generated = generate_tree("Hi", "⭐", &[], 1, "https://cards.example/x?y=1")
        .expect("generate");

    let url = format_encode_output(&generated, false, false).expect("url");
    assert_eq!(url, format!("https://cards.example/x#tree={}", generated.token));

    let token = format_encode_output(&generated, true, false).expect("token");
    assert_eq!(token, generated.token);

    let json = format_encode_output(&generated, true, true).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["token"], generated.token.as_str());
    assert_eq!(value["tree"]["c"], "Hi");
}

#[test]
fn decode_output_lists_fields() {
    let tree = TreeState::new("", "Hi").with_highlights([4, 0]);
    let text = format_decode_output(&tree, false).expect("text");
    assert_eq!(text, "Topper: ⭐\nContent: Hi\nHighlights: 0, 4\nStyle: -");

    let json = format_decode_output(&tree, true).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["t"], "");
    assert_eq!(value["h"], serde_json::json!([0, 4]));
    assert!(value.get("s").is_none());
}
