//! Cross-checks against `serde_json`: text written here must parse there,
//! and text written there must decode here.

use serde::{Deserialize, Serialize};
use serde_jsonkit::{from_str, to_string, to_string_compact, JsonValue, Window};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
struct Record {
    id: u32,
    name: String,
    ratio: f64,
    flags: Vec<bool>,
    labels: BTreeMap<String, i64>,
    note: Option<String>,
    kind: Kind,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
enum Kind {
    Plain,
    Sized(u32),
    Pair(i8, i8),
    Named { label: String },
}

fn records() -> Vec<Record> {
    let mut labels = BTreeMap::new();
    labels.insert("zeta".to_string(), -1);
    labels.insert("alpha".to_string(), 42);

    vec![
        Record {
            id: 1,
            name: "tab\t \"quoted\" \\ back \u{1} ctl é 😀".to_string(),
            ratio: 0.1,
            flags: vec![true, false],
            labels,
            note: None,
            kind: Kind::Plain,
        },
        Record {
            id: u32::MAX,
            name: String::new(),
            ratio: -1.5e-7,
            flags: vec![],
            labels: BTreeMap::new(),
            note: Some("</script>".to_string()),
            kind: Kind::Named {
                label: "x".to_string(),
            },
        },
        Record {
            id: 3,
            name: "pair".to_string(),
            ratio: 1e21,
            flags: vec![true],
            labels: BTreeMap::new(),
            note: None,
            kind: Kind::Pair(-1, 1),
        },
        Record {
            id: 4,
            name: "sized".to_string(),
            ratio: 0.25,
            flags: vec![],
            labels: BTreeMap::new(),
            note: None,
            kind: Kind::Sized(9),
        },
    ]
}

#[test]
fn test_output_parses_with_serde_json() {
    for record in records() {
        let ours = to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&ours).unwrap();
        assert_eq!(parsed, record);
    }
}

#[test]
fn test_serde_json_output_decodes() {
    for record in records() {
        let pretty = serde_json::to_string_pretty(&record).unwrap();
        let decoded: Record = from_str(&pretty).unwrap();
        assert_eq!(decoded, record);

        let compact = serde_json::to_string(&record).unwrap();
        let decoded: Record = from_str(&compact).unwrap();
        assert_eq!(decoded, record);
    }
}

#[test]
fn test_same_structure_as_serde_json() {
    let ours = to_string_compact(&records()).unwrap();
    let ours: serde_json::Value = serde_json::from_str(&ours).unwrap();
    let theirs = serde_json::to_value(records()).unwrap();
    assert_eq!(ours, theirs);
}

#[test]
fn test_layout_matches_four_space_pretty_printer() {
    #[derive(Serialize)]
    struct Layout {
        name: &'static str,
        window: Window,
        tags: Vec<&'static str>,
        empty: Vec<i32>,
        nested: BTreeMap<String, Vec<i32>>,
    }

    let mut nested = BTreeMap::new();
    nested.insert("b".to_string(), vec![2]);
    nested.insert("a".to_string(), vec![]);
    let layout = Layout {
        name: "main",
        window: Window {
            width: 800,
            height: 600,
            x: -1,
            y: 0,
        },
        tags: vec!["a", "b"],
        empty: vec![],
        nested,
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    layout.serialize(&mut ser).unwrap();
    let expected = String::from_utf8(buf).unwrap();

    assert_eq!(to_string(&layout).unwrap(), expected);
}

#[test]
fn test_dynamic_value_agrees() {
    let text = r#"{"a": [1, -2, 3.5, "x", null, true], "b": {"c": {}}, "d": []}"#;
    let ours: JsonValue = from_str(text).unwrap();
    let reencoded = to_string_compact(&ours).unwrap();

    let a: serde_json::Value = serde_json::from_str(&reencoded).unwrap();
    let b: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_rejects_what_serde_json_rejects() {
    let bad = [
        "[1,]",
        "{\"a\":1,}",
        "[01]",
        "[1.]",
        "['a']",
        "{a:1}",
        "\"\\x\"",
        "[NaN]",
        "[1] x",
        "\"\\ud800\"",
    ];
    for input in bad {
        assert!(serde_json::from_str::<serde_json::Value>(input).is_err(), "{input}");
        assert!(from_str::<JsonValue>(input).is_err(), "{input}");
    }
}
