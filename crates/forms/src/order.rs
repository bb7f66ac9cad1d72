//! Pizza orders recorded in the repository README.
//!
//! An [`OrderRecord`] is read from a small JSON object. When the object uses
//! the well-known key names they are read by name; otherwise its first four
//! values are bound positionally to flavour, size, toppings and count. Both
//! forms render identical lines for the same inputs.
//!
//! Positional binding follows JavaScript property order: keys that are array
//! indices (`"0"`, `"1"`, ...) come first in ascending numeric order, then all
//! other keys in declared order. Display values that are not strings render
//! the way a JavaScript template literal would (`12`, `true`, `null`).

use serde_json::{Map, Number, Value};

use crate::collection::is_trim_whitespace;
use crate::{FormsError, GitHubLogin};

/// Number of leading characters of the count text considered for the amount.
const COUNT_PREFIX_CHARS: usize = 3;

// ---------------------------------------------------------------------------
// Order record
// ---------------------------------------------------------------------------

/// The four logical inputs of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub flavour: String,
    pub size: String,
    pub toppings: String,
    /// Free text whose leading number is the quantity (e.g. `"2 boxes"`).
    pub count: String,
}

impl OrderRecord {
    /// Builds an order from a JSON object.
    ///
    /// # Errors
    ///
    /// [`FormsError::MalformedOrder`] if `value` is not an object, has fewer
    /// than four values, or the count is not a string.
    pub fn from_json(value: &Value) -> Result<Self, FormsError> {
        let Value::Object(map) = value else {
            return Err(malformed(format!(
                "expected a JSON object, found {}",
                json_kind(value)
            )));
        };

        match Self::from_named(map)? {
            Some(order) => Ok(order),
            None => Self::from_positional(map),
        }
    }

    fn from_named(map: &Map<String, Value>) -> Result<Option<Self>, FormsError> {
        let flavour = map.get("flavour").or_else(|| map.get("flavor"));
        let (Some(flavour), Some(size), Some(toppings), Some(count)) = (
            flavour,
            map.get("size"),
            map.get("toppings"),
            map.get("count"),
        ) else {
            return Ok(None);
        };

        Ok(Some(Self {
            flavour: display_text(flavour),
            size: display_text(size),
            toppings: display_text(toppings),
            count: count_text("count", count)?,
        }))
    }

    fn from_positional(map: &Map<String, Value>) -> Result<Self, FormsError> {
        let values = js_property_order(map);
        let [(_, flavour), (_, size), (_, toppings), (count_key, count), ..] =
            values.as_slice()
        else {
            return Err(malformed(format!(
                "expected at least 4 values, found {}",
                values.len()
            )));
        };

        Ok(Self {
            flavour: display_text(flavour),
            size: display_text(size),
            toppings: display_text(toppings),
            count: count_text(count_key, count)?,
        })
    }

    /// The quantity derived from [`OrderRecord::count`].
    pub fn amount(&self) -> OrderAmount {
        OrderAmount::from_count_text(&self.count)
    }
}

/// Entries of `map` in the order JavaScript enumerates own properties.
fn js_property_order(map: &Map<String, Value>) -> Vec<(&str, &Value)> {
    let mut indexed: Vec<(u32, &str, &Value)> = Vec::new();
    let mut named: Vec<(&str, &Value)> = Vec::new();
    for (key, value) in map {
        match array_index(key) {
            Some(index) => indexed.push((index, key.as_str(), value)),
            None => named.push((key.as_str(), value)),
        }
    }
    indexed.sort_by_key(|(index, _, _)| *index);
    indexed
        .into_iter()
        .map(|(_, key, value)| (key, value))
        .chain(named)
        .collect()
}

/// A canonical array index: `"0"`, or digits without a leading zero below `2^32 - 1`.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|n| *n != u32::MAX)
}

/// The count is sliced as text, so it must be a string.
fn count_text(key: &str, value: &Value) -> Result<String, FormsError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(malformed(format!(
            "value of '{key}' must be a string, found {}",
            json_kind(other)
        ))),
    }
}

/// Converts a display value to text as a JavaScript template literal would.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn js_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_owned(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn malformed(reason: String) -> FormsError {
    FormsError::MalformedOrder { reason }
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

/// Number of pizzas in an order. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderAmount(i64);

impl OrderAmount {
    /// Amount used when the count text carries no usable number.
    pub const DEFAULT: OrderAmount = OrderAmount(1);

    /// Derives the amount from the first three characters of `text`.
    ///
    /// The prefix is read like a decimal `parseInt`: leading whitespace
    /// (including a byte-order mark) is skipped, an optional sign is accepted, and the longest run of ASCII
    /// digits is used. No digits, or a value of zero, gives [`Self::DEFAULT`].
    pub fn from_count_text(text: &str) -> Self {
        let prefix: String = text.chars().take(COUNT_PREFIX_CHARS).collect();
        match parse_int_prefix(&prefix) {
            Some(n) if n != 0 => Self(n),
            _ => Self::DEFAULT,
        }
    }

    /// Returns the underlying integer value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrderAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(is_trim_whitespace);
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Renders the README line for an order placed by `login`, newline included.
///
/// No value is checked against any menu; text is interpolated verbatim.
pub fn render_order_line(login: &GitHubLogin, order: &OrderRecord) -> String {
    format!(
        "1. [@{user}](https://github.com/{user}) orders {amount} {size} {flavour} pizza with {toppings}\n",
        user = login,
        amount = order.amount(),
        size = order.size,
        flavour = order.flavour,
        toppings = order.toppings,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn login() -> GitHubLogin {
        GitHubLogin::new("octocat").expect("non-empty login")
    }

    #[test]
    fn renders_the_reference_order() {
        let order = OrderRecord::from_json(&json!({
            "flavour": "pepperoni",
            "size": "large",
            "toppings": "extra cheese",
            "count": "2 boxes",
        }))
        .expect("valid order");

        assert_eq!(
            render_order_line(&login(), &order),
            "1. [@octocat](https://github.com/octocat) orders 2 large pepperoni pizza with extra cheese\n"
        );
    }

    #[test]
    fn unknown_keys_bind_positionally_in_declared_order() {
        let order = OrderRecord::from_json(&json!({
            "pizza-flavour": "margherita",
            "pizza-size": "small",
            "extra": "basil",
            "how-many": "3",
            "ignored": "fifth value",
        }))
        .expect("valid order");

        assert_eq!(order.flavour, "margherita");
        assert_eq!(order.size, "small");
        assert_eq!(order.toppings, "basil");
        assert_eq!(order.count, "3");
    }

    #[test]
    fn named_keys_win_over_declared_order() {
        let order = OrderRecord::from_json(&json!({
            "count": "4",
            "toppings": "olives",
            "size": "medium",
            "flavor": "veggie",
        }))
        .expect("valid order");

        assert_eq!(order.flavour, "veggie");
        assert_eq!(order.size, "medium");
        assert_eq!(order.toppings, "olives");
        assert_eq!(order.amount().as_i64(), 4);
    }

    #[test]
    fn too_few_values_is_malformed() {
        let err = OrderRecord::from_json(&json!({"a": "x", "b": "y", "c": "z"}))
            .expect_err("three values");
        assert!(matches!(err, FormsError::MalformedOrder { .. }));
    }

    #[test]
    fn non_object_or_non_string_count_is_malformed() {
        assert!(OrderRecord::from_json(&json!(["a", "b", "c", "d"])).is_err());
        let err = OrderRecord::from_json(&json!({
            "flavour": "pepperoni",
            "size": "large",
            "toppings": "none",
            "count": 2,
        }))
        .expect_err("numeric count");
        assert!(err.to_string().contains("'count'"));
    }

    #[test]
    fn non_string_display_values_render_like_template_literals() {
        let order = OrderRecord::from_json(&json!({
            "flavour": "p",
            "size": 12,
            "toppings": null,
            "count": "2",
        }))
        .expect("display values need not be strings");

        assert_eq!(order.size, "12");
        assert_eq!(order.toppings, "null");
        assert_eq!(
            render_order_line(&login(), &order),
            "1. [@octocat](https://github.com/octocat) orders 2 12 p pizza with null\n"
        );
    }

    #[test]
    fn display_text_follows_javascript_string_conversion() {
        assert_eq!(display_text(&json!(true)), "true");
        assert_eq!(display_text(&json!(1.0)), "1");
        assert_eq!(display_text(&json!(2.5)), "2.5");
        assert_eq!(display_text(&json!(-0.0)), "0");
        assert_eq!(display_text(&json!(["ham", null, 3])), "ham,,3");
        assert_eq!(display_text(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn positional_binding_lists_index_keys_first() {
        let order = OrderRecord::from_json(&json!({
            "b": "pep",
            "1": "large",
            "t": "olives",
            "c": "2",
        }))
        .expect("valid order");

        assert_eq!(order.flavour, "large");
        assert_eq!(order.size, "pep");
        assert_eq!(order.toppings, "olives");
        assert_eq!(order.count, "2");
    }

    #[test]
    fn index_keys_sort_numerically_and_reject_leading_zeros() {
        let map = json!({"x": "a", "10": "b", "2": "c", "01": "d"});
        let Value::Object(map) = map else {
            unreachable!("object literal")
        };
        let keys: Vec<&str> = js_property_order(&map).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["2", "10", "x", "01"]);
    }

    #[test]
    fn amount_reads_leading_number_of_first_three_chars() {
        assert_eq!(OrderAmount::from_count_text("2 boxes").as_i64(), 2);
        assert_eq!(OrderAmount::from_count_text("12").as_i64(), 12);
        assert_eq!(OrderAmount::from_count_text("1234").as_i64(), 123);
        assert_eq!(OrderAmount::from_count_text(" 7 slices").as_i64(), 7);
        assert_eq!(OrderAmount::from_count_text("+5").as_i64(), 5);
        assert_eq!(OrderAmount::from_count_text("-2").as_i64(), -2);
        assert_eq!(OrderAmount::from_count_text("\u{feff}5x").as_i64(), 5);
    }

    #[test]
    fn amount_defaults_to_one() {
        assert_eq!(OrderAmount::from_count_text("N/A"), OrderAmount::DEFAULT);
        assert_eq!(OrderAmount::from_count_text("0"), OrderAmount::DEFAULT);
        assert_eq!(OrderAmount::from_count_text("000"), OrderAmount::DEFAULT);
        assert_eq!(OrderAmount::from_count_text(""), OrderAmount::DEFAULT);
        assert_eq!(OrderAmount::from_count_text("a12"), OrderAmount::DEFAULT);
        assert_eq!(OrderAmount::from_count_text("-"), OrderAmount::DEFAULT);
    }

    #[test]
    fn amount_counts_characters_not_bytes() {
        assert_eq!(OrderAmount::from_count_text("é99").as_i64(), 1);
        assert_eq!(OrderAmount::from_count_text("99é").as_i64(), 99);
    }
}
