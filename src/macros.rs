/// Builds a [`JsonValue`](crate::JsonValue) from JSON-like syntax.
///
/// Object members keep the order they are written in. Any other
/// expression is converted with [`to_value`](crate::to_value); values that
/// cannot be encoded become `null`. Negative numbers inside arrays or
/// objects need parentheses: `json!([(-1), 2])`.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::json;
///
/// let value = json!({
///     "name": "Alice",
///     "scores": [90, 85],
///     "address": null
/// });
/// assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::JsonValue::Null
    };

    (true) => {
        $crate::JsonValue::Bool(true)
    };

    (false) => {
        $crate::JsonValue::Bool(false)
    };

    ([]) => {
        $crate::JsonValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsonValue::Array(vec![$($crate::json!($elem)),*])
    };

    ({}) => {
        $crate::JsonValue::Object($crate::JsonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::JsonValue::Object(object)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::JsonValue::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JsonMap, JsonValue, Number};

    #[test]
    fn test_json_macro_primitives() {
        assert_eq!(json!(null), JsonValue::Null);
        assert_eq!(json!(true), JsonValue::Bool(true));
        assert_eq!(json!(false), JsonValue::Bool(false));
        assert_eq!(json!(42), JsonValue::Number(Number::Integer(42)));
        assert_eq!(json!(-7), JsonValue::Number(Number::Integer(-7)));
        assert_eq!(json!(3.5), JsonValue::Number(Number::Float(3.5)));
        assert_eq!(json!("hello"), JsonValue::String("hello".to_string()));
    }

    #[test]
    fn test_json_macro_arrays() {
        assert_eq!(json!([]), JsonValue::Array(vec![]));

        let arr = json!([1, "two", [3], (-4)]);
        match arr {
            JsonValue::Array(vec) => {
                assert_eq!(vec.len(), 4);
                assert_eq!(vec[0], JsonValue::Number(Number::Integer(1)));
                assert_eq!(vec[1], JsonValue::String("two".to_string()));
                assert_eq!(
                    vec[2],
                    JsonValue::Array(vec![JsonValue::Number(Number::Integer(3))])
                );
                assert_eq!(vec[3], JsonValue::Number(Number::Integer(-4)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_json_macro_objects() {
        assert_eq!(json!({}), JsonValue::Object(JsonMap::new()));

        let obj = json!({
            "name": "Alice",
            "age": 30,
            "window": { "width": 800 }
        });

        match obj {
            JsonValue::Object(map) => {
                assert_eq!(map.len(), 3);
                let keys: Vec<_> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, ["name", "age", "window"]);
                assert_eq!(
                    map.get("window").and_then(|w| w.get("width")),
                    Some(&JsonValue::Number(Number::Integer(800)))
                );
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_json_macro_unencodable_is_null() {
        assert_eq!(json!(f64::NAN), JsonValue::Null);
    }
}
