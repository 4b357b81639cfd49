#![no_main]

use dom::{Id, Node};
use field_errors::normalize::from_json_str;
use field_errors::{
    DocumentPosition, ExtractOrder, FieldErrorExtractor, FormFieldIndex, MessageExistence,
    NO_ORDERS, PathMatch, PathMatchOptions,
};
use libfuzzer_sys::fuzz_target;

fn document() -> Node {
    Node::Document {
        id: Id(0),
        children: (1..=8)
            .map(|i| Node::Element {
                id: Id(i),
                name: "input".to_string(),
                attributes: vec![("name".to_string(), Some(format!("f{i}")))],
                children: Vec::new(),
            })
            .collect(),
    }
}

// Any input must normalize and extract without panicking, and the answer must
// not depend on how often it is asked for.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let dom = document();
    let fields = FormFieldIndex::from_dom(&dom);
    let Ok(tree) = from_json_str(text, Some(&fields)) else {
        return;
    };

    let path = PathMatch::new(["f1", "a.b", ""], PathMatchOptions::default());
    let messages = MessageExistence::trimmed();
    let position = DocumentPosition::new(&dom);
    let chain: [&dyn ExtractOrder; 3] = [&path, &messages, &position];

    let extractor = FieldErrorExtractor::new(&tree);
    let first = extractor.best_record(&chain);
    assert_eq!(first, extractor.best_record(&chain));
    if let Some(record) = &first {
        assert!(!record.is_empty());
    }
    let _ = extractor.best_record(NO_ORDERS);
    let _ = extractor.first_message();
});
