use minimark_core::{Feature, FeatureSet, Node, NodeKind, Parser, parse, parse_with};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn text(s: &str) -> Node {
    Node::text(s)
}

fn node(kind: NodeKind, children: Vec<Node>) -> Node {
    Node::with_children(kind, children)
}

fn strong(marker: &str, children: Vec<Node>) -> Node {
    node(NodeKind::Strong(marker.to_string()), children)
}

fn emphasis(marker: &str, children: Vec<Node>) -> Node {
    node(NodeKind::Emphasis(marker.to_string()), children)
}

/// No node anywhere has two text children next to each other.
fn assert_text_merged(doc: &Node) {
    doc.walk(&mut |n| {
        for pair in n.children().windows(2) {
            assert!(
                !(pair[0].is_text() && pair[1].is_text()),
                "adjacent text under {:?}",
                n.kind()
            );
        }
    });
}

#[rstest]
#[case("**Bold**", vec![strong("**", vec![text("Bold")])])]
#[case("__Bold__", vec![strong("__", vec![text("Bold")])])]
#[case("*Italic*", vec![emphasis("*", vec![text("Italic")])])]
#[case("_Italic_", vec![emphasis("_", vec![text("Italic")])])]
#[case(
    "*__BoldItalic__*",
    vec![emphasis("*", vec![strong("__", vec![text("BoldItalic")])])]
)]
#[case("___Bold__", vec![strong("__", vec![text("_Bold")])])]
#[case("__Bold___", vec![strong("__", vec![text("Bold")]), text("_")])]
#[case("__Italic_", vec![text("_"), emphasis("_", vec![text("Italic")])])]
#[case("_Italic__", vec![emphasis("_", vec![text("Italic")]), text("_")])]
#[case("~~gone~~", vec![node(NodeKind::Strike("~~".into()), vec![text("gone")])])]
#[case("This should render as *bold*", vec![text("This should render as "), emphasis("*", vec![text("bold")])])]
fn inline_marks(#[case] input: &str, #[case] expected: Vec<Node>) {
    init_logging();
    let doc = parse(input);
    assert_eq!(doc.children(), expected.as_slice());
}

#[rstest]
#[case("~~open")]
#[case("*dangling")]
#[case("[broken](link")]
#[case("[](empty-title)")]
#[case("[no target")]
#[case("a ` b")]
#[case("``")]
fn unmatched_syntax_is_literal_text(#[case] input: &str) {
    init_logging();
    let doc = parse(input);
    assert_eq!(doc.children(), &[text(input)]);
}

#[rstest]
#[case(r"\*not emphasis\*", "*not emphasis*")]
#[case(r"\[not](a link)", "[not](a link)")]
#[case(r"back\\slash", r"back\slash")]
#[case(r"trailing\", r"trailing\")]
fn escapes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input).children(), &[text(expected)]);
}

#[test]
fn link_keeps_title_and_target_raw() {
    let doc = parse("see [*docs*](https://docs.rs/log) here");
    assert_eq!(
        doc.children(),
        &[
            text("see "),
            Node::new(NodeKind::Link {
                title: "*docs*".to_string(),
                target: "https://docs.rs/log".to_string(),
            }),
            text(" here"),
        ]
    );
}

#[test]
fn inline_code_is_verbatim() {
    let doc = parse("run `cargo **test**` now");
    assert_eq!(
        doc.children(),
        &[
            text("run "),
            node(NodeKind::InlineCode, vec![text("cargo **test**")]),
            text(" now"),
        ]
    );
}

#[rstest]
#[case("1. One\n1. Two\n1. Three", true)]
#[case("* One\n* Two\n* Three", false)]
#[case("- One\n- Two\n- Three", false)]
fn list_items_keep_line_breaks(#[case] input: &str, #[case] ordered: bool) {
    let doc = parse(input);
    assert_eq!(doc.children().len(), 1);

    let list = &doc.children()[0];
    assert_eq!(list.kind(), &NodeKind::List { ordered });
    let items: Vec<_> = list
        .children()
        .iter()
        .map(|item| {
            assert_eq!(item.kind(), &NodeKind::ListItem);
            item.child().and_then(Node::as_str).unwrap()
        })
        .collect();
    assert_eq!(items, vec!["One\n", "Two\n", "Three"]);
}

#[test]
fn code_block_holds_one_text_node() {
    let doc = parse("```\nthis is code\n```");
    assert_eq!(
        doc.children(),
        &[node(NodeKind::CodeBlock, vec![text("this is code\n")])]
    );
}

#[test]
fn indented_fence_does_not_close_code_block() {
    let doc = parse("```\nfn main() {}\n    ```\nstill code\n```");
    assert_eq!(
        doc.children(),
        &[node(
            NodeKind::CodeBlock,
            vec![text("fn main() {}\n    ```\nstill code\n")]
        )]
    );
}

#[test]
fn indented_fence_does_not_open_code_block() {
    let doc = parse("  ```\ncode");
    assert_eq!(doc.children(), &[text("```\ncode")]);
}

#[test]
fn code_block_without_code_features_is_text() {
    let input = "```\nthis is code\n```";
    let features = FeatureSet::standard()
        .without(Feature::CodeBlock)
        .without(Feature::InlineCode);
    assert_eq!(parse_with(input, features).children(), &[text(input)]);
}

#[rstest]
#[case("> quote", Feature::BlockQuote)]
#[case("# Title", Feature::Headings)]
#[case("1. item", Feature::OrderedList)]
#[case("- item", Feature::UnorderedList)]
#[case("* item", Feature::UnorderedList)]
#[case("---", Feature::HorizontalRule)]
#[case("`code`", Feature::InlineCode)]
#[case("```\ncode\n```", Feature::CodeBlock)]
fn disabled_feature_is_literal(#[case] input: &str, #[case] feature: Feature) {
    let features = FeatureSet::standard().without(feature);
    assert_eq!(parse_with(input, features).children(), &[text(input)]);
    assert_ne!(parse(input).children(), &[text(input)]);
}

#[rstest]
#[case(FeatureSet::standard(), "a\n\nb")]
#[case(FeatureSet::standard().with(Feature::AllowMultipleLineBreaks), "a\n\n\n\nb")]
fn blank_line_runs(#[case] features: FeatureSet, #[case] expected: &str) {
    let doc = parse_with("a\n\n\n\nb", features);
    assert_eq!(doc.children(), &[text(expected)]);
}

fn quote(level: usize, children: Vec<Node>) -> Node {
    node(NodeKind::BlockQuote(level), children)
}

fn list(ordered: bool, items: &[&str]) -> Node {
    let items = items
        .iter()
        .map(|item| node(NodeKind::ListItem, vec![text(item)]))
        .collect();
    node(NodeKind::List { ordered }, items)
}

#[rstest]
#[case(
    "> a\n\n> b",
    vec![quote(1, vec![text("a\n")]), text("\n"), quote(1, vec![text("b")])]
)]
#[case(
    "- a\n\n- b",
    vec![list(false, &["a\n"]), text("\n"), list(false, &["b"])]
)]
#[case(
    "1. a\n\n1. b",
    vec![list(true, &["a\n"]), text("\n"), list(true, &["b"])]
)]
#[case(
    "> - a\n\n> - b",
    vec![
        quote(1, vec![list(false, &["a\n"])]),
        text("\n"),
        quote(1, vec![list(false, &["b"])]),
    ]
)]
fn blank_line_closes_lists_and_quotes(#[case] input: &str, #[case] expected: Vec<Node>) {
    let doc = parse(input);
    assert_eq!(doc.children(), expected.as_slice());
}

#[test]
fn pretty_prints_mixed_document() {
    let doc = parse("# Title\n> quoted *text*\n- one\n- [link](url)");
    insta::assert_snapshot!(doc.pretty(), @r#"
    Document
      Heading(1)
        Text("Title\n")
      BlockQuote(1)
        Text("quoted ")
        Emphasis("*")
          Text("text")
        Text("\n")
      List { ordered: false }
        ListItem
          Text("one\n")
        ListItem
          Link { title: "link", target: "url" }
    "#);
}

#[test]
fn pretty_prints_nested_quote_levels() {
    let doc = parse("> outer\n>> inner");
    insta::assert_snapshot!(doc.pretty(), @r#"
    Document
      BlockQuote(1)
        Text("outer\n")
      BlockQuote(2)
        Text("inner")
    "#);
}

#[test]
fn complex_fixture_structure() {
    init_logging();
    let doc = parse(&fixture("complex"));
    assert_text_merged(&doc);

    let headings: Vec<_> = doc
        .descendants()
        .filter_map(|n| match n.kind() {
            NodeKind::Heading(level) => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(headings, vec![1, 1, 2, 3, 4, 3, 3, 3]);

    let code: Vec<_> = doc
        .children()
        .iter()
        .filter(|n| n.kind() == &NodeKind::CodeBlock)
        .collect();
    assert_eq!(code.len(), 1);
    assert_eq!(
        code[0].child().and_then(Node::as_str),
        Some(
            "if (false) {\n   // this will never happen\n}\nelse {\n   // everyone likes it when we end up here!\n}\n"
        )
    );

    let quotes = doc
        .children()
        .iter()
        .filter(|n| n.kind() == &NodeKind::BlockQuote(1))
        .count();
    assert_eq!(quotes, 1);

    // Single tildes are not strike marks.
    assert!(doc.descendants().all(|n| !matches!(n.kind(), NodeKind::Strike(_))));
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("```")]
#[case("```\n```\n```")]
#[case("> > >> >")]
#[case("[[[[](((")]
#[case("***___~~~```")]
#[case("\\")]
#[case("# ")]
#[case("- ")]
#[case("1.")]
#[case("_*_*_*")]
#[case("emoji 🎉 *mid🎉dle* [t🎉](u🎉)")]
fn parse_is_total(#[case] input: &str) {
    for features in [FeatureSet::empty(), FeatureSet::standard(), FeatureSet::all()] {
        let doc = parse_with(input, features);
        assert_eq!(doc.kind(), &NodeKind::Document);
        assert_text_merged(&doc);
        assert_eq!(doc.clone().merged(), doc);
    }
}

#[test]
fn one_parser_shared_across_threads() {
    let parser = Parser::new(FeatureSet::all());
    let source = fixture("complex");
    let expected = parser.parse(&source);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| parser.parse(&source))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
