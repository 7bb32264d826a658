//! Property tests over generated markup

use proptest::prelude::*;
use regex::Regex;
use simple_markup::dialect::AwaitMode;
use simple_markup::formats::HtmlFormatter;
use simple_markup::lexer::lex_all;
use simple_markup::{convert, parse_document, Dialect};

/// Text built from words and style glyphs but no block markers
fn inline_markup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,6}",
            Just("**".to_string()),
            Just("//".to_string()),
            Just("__".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\t".to_string()),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

/// Anything the markup alphabet can spell, block markers included
fn any_markup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zó]{1,4}",
            Just("**".to_string()),
            Just("//".to_string()),
            Just("__".to_string()),
            Just("=".to_string()),
            Just("==".to_string()),
            Just("- ".to_string()),
            Just("+ ".to_string()),
            Just("* ".to_string()),
            Just("\\\\".to_string()),
            Just(" ".to_string()),
            Just("  ".to_string()),
            Just("\n".to_string()),
        ],
        0..32,
    )
    .prop_map(|parts| parts.concat())
}

/// Every tag is closed exactly once, after everything opened inside it
fn assert_well_nested(html: &str) {
    let tag = Regex::new(r"<(/?)(b|i|u|p|h[1-6]|ul|ol|li)>").unwrap();
    let mut open: Vec<String> = Vec::new();
    for caps in tag.captures_iter(html) {
        let name = caps[2].to_string();
        if caps[1].is_empty() {
            open.push(name);
        } else {
            assert_eq!(open.pop().as_deref(), Some(name.as_str()), "in {html:?}");
        }
    }
    assert!(open.is_empty(), "unclosed {open:?} in {html:?}");
}

proptest! {
    #[test]
    fn empty_output_iff_blank_input(source in inline_markup()) {
        let html = convert(&source, &Dialect::txt2tags()).unwrap();
        prop_assert_eq!(html.is_empty(), source.trim().is_empty());
    }

    #[test]
    fn paragraph_tags_balance(source in inline_markup()) {
        let html = convert(&source, &Dialect::txt2tags()).unwrap();
        prop_assert_eq!(html.matches("<p>").count(), html.matches("</p>").count());
    }

    #[test]
    fn tags_never_cross(source in any_markup()) {
        for dialect in [Dialect::txt2tags(), Dialect::dokuwiki()] {
            assert_well_nested(&convert(&source, &dialect).unwrap());
        }
    }

    #[test]
    fn rendering_is_idempotent(source in any_markup()) {
        let doc = parse_document(&source, &Dialect::dokuwiki()).unwrap();
        let formatter = HtmlFormatter::default();
        prop_assert_eq!(formatter.render(&doc), formatter.render(&doc));
    }

    #[test]
    fn await_modes_yield_identical_tokens(source in any_markup()) {
        for base in [Dialect::txt2tags(), Dialect::dokuwiki()] {
            let mut replacing = base.clone();
            replacing.await_mode = AwaitMode::Replacing;
            let mut stacked = base;
            stacked.await_mode = AwaitMode::Stacked;
            prop_assert_eq!(
                lex_all(&source, &replacing).unwrap(),
                lex_all(&source, &stacked).unwrap()
            );
        }
    }

    #[test]
    fn token_spans_cover_their_text(source in any_markup()) {
        for dialect in [Dialect::txt2tags(), Dialect::dokuwiki()] {
            for token in lex_all(&source, &dialect).unwrap() {
                prop_assert_eq!(&source[token.span.clone()], token.text.as_str());
            }
        }
    }
}

#[test]
fn heading_levels_round_trip() {
    for dialect in [Dialect::txt2tags(), Dialect::dokuwiki()] {
        for level in dialect.heading_levels() {
            let marker_len = dialect.heading_marker_len(level).unwrap();
            assert_eq!(dialect.heading_level(marker_len), Some(level));
        }
    }
}
