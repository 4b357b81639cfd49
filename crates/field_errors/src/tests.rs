use super::*;
use crate::extract::{extract, join_path, merge};
use dom::Id;

fn leaf_at(message: &str, element: u32) -> ErrorNode {
    ErrorNode::Leaf(Leaf::message(message).with_element(Id(element)))
}

fn three_siblings(first: &str, second: &str, third: &str) -> ErrorNode {
    ErrorNode::internal([
        ("foo", ErrorNode::leaf(first)),
        ("bar", ErrorNode::leaf(second)),
        ("baz", ErrorNode::leaf(third)),
    ])
}

#[test]
fn join_path_skips_root() {
    assert_eq!(join_path("", "a"), "a");
    assert_eq!(join_path("a", "b"), "a.b");
    assert_eq!(join_path("a.b", "0"), "a.b.0");
}

#[test]
fn merge_prefers_non_empty_and_keeps_current_on_tie() {
    let empty = ErrorRecord::empty("x");
    let a = ErrorRecord::new("a", Some("a".to_string()), None);
    let b = ErrorRecord::new("b", Some("b".to_string()), None);

    assert_eq!(merge(empty.clone(), a.clone(), NO_ORDERS), a);
    assert_eq!(merge(a.clone(), empty.clone(), NO_ORDERS), a);
    assert_eq!(merge(a.clone(), b.clone(), NO_ORDERS), a);
    assert_eq!(
        merge(empty.clone(), ErrorRecord::empty("y"), NO_ORDERS),
        empty
    );
}

#[test]
fn merge_follows_chain_verdict_over_emptiness() {
    // A rule may prefer the empty side; the fallback only applies to ties.
    struct PreferSecond;
    impl ExtractOrder for PreferSecond {
        fn compare(&self, _: &ErrorRecord, _: &ErrorRecord) -> CompareResult {
            CompareResult::Second
        }
    }

    let a = ErrorRecord::new("a", Some("a".to_string()), None);
    let empty = ErrorRecord::empty("x");
    assert_eq!(merge(a, empty.clone(), &[PreferSecond]), empty);
}

#[test]
fn full_tie_keeps_first_declared_sibling() {
    let tree = three_siblings("first", "second", "third");
    let record = FieldErrorExtractor::new(&tree)
        .best_record(NO_ORDERS)
        .expect("tree has errors");

    assert_eq!(record.path(), "foo");
    assert_eq!(record.message(), Some("first"));
}

#[test]
fn message_existence_finds_real_text_in_any_position() {
    let order = [MessageExistence::trimmed()];
    let cases = [
        three_siblings("error message", "   ", "   "),
        three_siblings("   ", "error message", "   "),
        three_siblings("   ", "   ", "error message"),
    ];

    for tree in &cases {
        assert_eq!(
            FieldErrorExtractor::new(tree).best_message(&order).as_deref(),
            Some("error message"),
            "{tree:?}"
        );
    }
}

#[test]
fn without_trim_blank_text_wins_by_declaration_order() {
    let tree = three_siblings("   ", "error message", "   ");
    let order = [MessageExistence::default()];
    assert_eq!(
        FieldErrorExtractor::new(&tree).best_message(&order).as_deref(),
        Some("   ")
    );
}

#[test]
fn extraction_is_deterministic() {
    let tree = ErrorNode::internal([
        ("a", ErrorNode::internal([("x", leaf_at("ax", 3)), ("y", leaf_at("ay", 2))])),
        ("b", leaf_at("b", 1)),
    ]);
    let document = dom::Node::Document {
        id: Id(0),
        children: (1..=3)
            .map(|i| dom::Node::Element {
                id: Id(i),
                name: "input".to_string(),
                attributes: Vec::new(),
                children: Vec::new(),
            })
            .collect(),
    };
    let position = DocumentPosition::new(&document);
    let extractor = FieldErrorExtractor::new(&tree);

    let first = extractor.best_record(&[&position]);
    for _ in 0..3 {
        assert_eq!(extractor.best_record(&[&position]), first);
    }
    let first = first.expect("tree has errors");
    assert_eq!(first.path(), "b");
    assert_eq!(first.element(), Some(Id(1)));
}

#[test]
fn own_error_of_a_group_competes_before_its_children() {
    let tree = ErrorNode::internal([(
        "list",
        ErrorNode::internal([("0", ErrorNode::leaf("row"))])
            .with_own(Leaf::message("too few rows")),
    )]);

    let record = extract(&tree, "", NO_ORDERS);
    assert_eq!(record.path(), "list");
    assert_eq!(record.message(), Some("too few rows"));

    let by_path = [PathMatch::new(["list.0"], PathMatchOptions::default())];
    let record = FieldErrorExtractor::new(&tree)
        .best_record(&by_path)
        .expect("row error");
    assert_eq!(record.path(), "list.0");
}

#[test]
fn element_only_error_is_an_error_without_message() {
    let tree = ErrorNode::internal([
        ("a", ErrorNode::Leaf(Leaf::new(None, Some(Id(4))))),
        ("b", ErrorNode::leaf("b")),
    ]);
    let extractor = FieldErrorExtractor::new(&tree);

    let record = extractor.best_record(NO_ORDERS).expect("element-only error");
    assert_eq!(record.path(), "a");
    assert_eq!(extractor.best_message(NO_ORDERS), None);
    assert_eq!(
        extractor.best_message(&[MessageExistence::default()]).as_deref(),
        Some("b")
    );
    assert_eq!(extractor.first_message(), Some("b"));
}

#[test]
fn error_free_tree_yields_nothing() {
    let tree = ErrorNode::internal([
        ("a", ErrorNode::Absent),
        ("b", ErrorNode::internal([("c", ErrorNode::Leaf(Leaf::default()))])),
        ("d", ErrorNode::internal(Vec::<(String, ErrorNode)>::new())),
    ]);
    let extractor = FieldErrorExtractor::new(&tree);

    assert_eq!(extractor.best_record(NO_ORDERS), None);
    assert_eq!(extractor.best_message(&[MessageExistence::trimmed()]), None);
    assert_eq!(extractor.first_message(), None);
    assert_eq!(FieldErrorExtractor::new(&ErrorNode::Absent).best_record(NO_ORDERS), None);
}

#[test]
fn root_leaf_reports_empty_path() {
    let tree = ErrorNode::leaf("global");
    let record = FieldErrorExtractor::new(&tree)
        .best_record(NO_ORDERS)
        .expect("global error");
    assert_eq!(record.path(), "");
    assert_eq!(record.message(), Some("global"));
}

#[test]
fn removing_the_winner_exposes_the_next_candidate() {
    let mut tree = three_siblings("first", "second", "third");
    let mut seen = Vec::new();

    while let Some(record) = FieldErrorExtractor::new(&tree).best_record(NO_ORDERS) {
        seen.push(record.message().unwrap_or_default().to_string());
        assert!(tree.remove_at(record.segments()).is_some());
    }

    assert_eq!(seen, vec!["first", "second", "third"]);
}

#[test]
fn remove_and_get_walk_dotted_paths() {
    let mut tree = ErrorNode::internal([(
        "a",
        ErrorNode::internal([("b", ErrorNode::leaf("ab")), ("c", ErrorNode::leaf("ac"))]),
    )]);

    assert_eq!(tree.get("a.c"), Some(&ErrorNode::leaf("ac")));
    assert_eq!(tree.remove("a.b"), Some(ErrorNode::leaf("ab")));
    assert_eq!(tree.remove("a.b"), None);
    assert_eq!(tree.remove("a.c.d"), None);
    assert_eq!(tree.remove(""), None);
    assert_eq!(tree.get("a.b"), None);
}

#[test]
fn dotted_keys_are_removed_by_their_own_segments() {
    let mut tree = ErrorNode::internal([
        ("a.b", ErrorNode::leaf("flat")),
        ("a", ErrorNode::internal([("b", ErrorNode::leaf("nested"))])),
    ]);
    let mut seen = Vec::new();

    while let Some(record) = FieldErrorExtractor::new(&tree).best_record(NO_ORDERS) {
        assert_eq!(record.path(), "a.b");
        seen.push(record.message().unwrap_or_default().to_string());
        assert!(tree.remove_at(record.segments()).is_some());
    }

    assert_eq!(seen, vec!["flat", "nested"]);
}

#[test]
fn string_paths_prefer_the_longest_matching_key() {
    let mut tree = ErrorNode::internal([
        ("a", ErrorNode::internal([("b", ErrorNode::leaf("nested"))])),
        ("a.b", ErrorNode::leaf("flat")),
        ("x.y", ErrorNode::internal([("z", ErrorNode::leaf("deep"))])),
    ]);

    assert_eq!(tree.get("a.b"), Some(&ErrorNode::leaf("flat")));
    assert_eq!(tree.get("x.y.z"), Some(&ErrorNode::leaf("deep")));
    assert_eq!(tree.get_at(&["a", "b"]), Some(&ErrorNode::leaf("nested")));
    assert_eq!(tree.remove("a.b"), Some(ErrorNode::leaf("flat")));
    // With the flat key gone the same path reaches the nested field.
    assert_eq!(tree.remove("a.b"), Some(ErrorNode::leaf("nested")));
    assert_eq!(tree.remove("x.y.z"), Some(ErrorNode::leaf("deep")));
}

#[test]
fn empty_key_is_a_removable_child() {
    let mut tree = ErrorNode::internal([
        ("", ErrorNode::leaf("unnamed")),
        ("b", ErrorNode::leaf("b")),
    ]);

    let record = FieldErrorExtractor::new(&tree)
        .best_record(NO_ORDERS)
        .expect("unnamed error");
    assert_eq!(record.path(), "");
    assert_eq!(record.segments(), [String::new()]);
    assert_eq!(tree.remove_at(record.segments()), Some(ErrorNode::leaf("unnamed")));

    let record = FieldErrorExtractor::new(&tree)
        .best_record(NO_ORDERS)
        .expect("next error");
    assert_eq!(record.path(), "b");
    assert_eq!(tree.remove_at::<&str>(&[]), None);
    assert_eq!(tree.remove(""), None);
}

#[test]
fn root_record_has_no_segments() {
    let tree = ErrorNode::leaf("global");
    let record = extract(&tree, "", NO_ORDERS);
    assert!(record.segments().is_empty());
    assert_eq!(tree.get_at::<&str>(&[]), Some(&tree));
}

#[test]
fn first_message_checks_own_error_before_children() {
    let tree = ErrorNode::internal([
        ("skip", ErrorNode::Leaf(Leaf::new(None, Some(Id(1))))),
        (
            "group",
            ErrorNode::internal([("inner", ErrorNode::leaf("inner"))])
                .with_own(Leaf::message("group")),
        ),
    ]);
    assert_eq!(FieldErrorExtractor::new(&tree).first_message(), Some("group"));
}

#[test]
fn trees_records_and_orders_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ErrorNode>();
    assert_send_sync::<ErrorRecord>();
    assert_send_sync::<FieldErrorExtractor<'static>>();
    assert_send_sync::<MessageExistence>();
    assert_send_sync::<DocumentPosition>();
    assert_send_sync::<PathMatch>();
    assert_send_sync::<BoxedOrder>();
}
