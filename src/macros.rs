/// Builds a [`Value`](crate::Value) with JSON-like syntax.
///
/// Lists hold records only, so every element of `[...]` must be an object.
///
/// ```rust
/// use serde_lean::{lean, parse};
///
/// let expected = lean!({
///     "stream": [
///         {"ticker": "NVDA", "price": 495.5},
///         {"ticker": "TSLA", "price": 240.0}
///     ]
/// });
///
/// let parsed = parse("stream:\n  $ticker|price\n  NVDA|495.50\n  TSLA|240.00").unwrap();
/// assert_eq!(parsed, expected);
/// ```
#[macro_export]
macro_rules! lean {
    // One record of a list, as a bare Map
    (@record { $($key:literal : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut object = $crate::Map::new();
        $(
            object.insert(($key).to_string(), $crate::lean!($value));
        )*
        object
    }};

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(::std::vec::Vec::new())
    };

    ([ $($record:tt),+ $(,)? ]) => {
        $crate::Value::List(vec![$($crate::lean!(@record $record)),+])
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Value::Object($crate::lean!(@record { $($key : $value),* }))
    };

    // Any other expression with a `From` conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
