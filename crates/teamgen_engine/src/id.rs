//! Identifier normalization.
//!
//! Every name the engine looks up (species, moves, items, abilities) is
//! compared by its id: the lowercase form with every character outside
//! `[a-z0-9]` removed. `"Mr. Mime"` and `"mrmime"` name the same species.

use serde_json::Value;

/// Normalize a raw string into an id.
#[must_use]
pub fn to_id(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Something that carries its own identifier.
///
/// An explicit `id` wins over a `userid`; a value with neither normalizes to
/// the empty string.
pub trait Identified {
    /// The value's own id, if it has one.
    fn id(&self) -> Option<&str>;

    /// A fallback user id, consulted only when [`Identified::id`] is empty.
    fn userid(&self) -> Option<&str> {
        None
    }

    /// Normalize this value's identifier.
    fn to_id(&self) -> String {
        let raw = self
            .id()
            .filter(|id| !id.is_empty())
            .or_else(|| self.userid().filter(|id| !id.is_empty()))
            .unwrap_or_default();
        to_id(raw)
    }
}

/// Normalize an arbitrary JSON value into an id.
///
/// Objects contribute their truthy `id` field, else their truthy `userid`
/// field. Strings and numbers are stringified; every other value becomes the
/// empty string.
#[must_use]
pub fn to_id_value(value: &Value) -> String {
    let value = match value {
        Value::Object(map) => match (map.get("id"), map.get("userid")) {
            (Some(id), _) if is_truthy(id) => id,
            (_, Some(userid)) if is_truthy(userid) => userid,
            _ => value,
        },
        _ => value,
    };
    to_id(&stringify(value))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_string(n),
        _ => String::new(),
    }
}

/// Render a number the way a script runtime prints it: integral floats drop
/// their fractional part.
fn number_string(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct User {
        id: Option<String>,
        userid: Option<String>,
    }

    impl Identified for User {
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn userid(&self) -> Option<&str> {
            self.userid.as_deref()
        }
    }

    #[test]
    fn test_to_id_strips_and_lowercases() {
        assert_eq!(to_id("Mr. Mime"), "mrmime");
        assert_eq!(to_id("Farfetch’d"), "farfetchd");
        assert_eq!(to_id("Porygon-Z"), "porygonz");
        assert_eq!(to_id("  U-turn  "), "uturn");
        assert_eq!(to_id(""), "");
    }

    #[test]
    fn test_identified_prefers_id() {
        let user = User {
            id: Some("Red Player".to_string()),
            userid: Some("blue".to_string()),
        };
        assert_eq!(user.to_id(), "redplayer");
    }

    #[test]
    fn test_identified_falls_back_to_userid() {
        let user = User {
            id: Some(String::new()),
            userid: Some("Blue_77".to_string()),
        };
        assert_eq!(user.to_id(), "blue77");

        let nobody = User {
            id: None,
            userid: None,
        };
        assert_eq!(nobody.to_id(), "");
    }

    #[test]
    fn test_to_id_value_objects() {
        assert_eq!(to_id_value(&json!({"id": "Pikachu"})), "pikachu");
        assert_eq!(to_id_value(&json!({"id": "", "userid": "Ash K."})), "ashk");
        assert_eq!(to_id_value(&json!({"name": "Pikachu"})), "");
    }

    #[test]
    fn test_to_id_value_scalars() {
        assert_eq!(to_id_value(&json!("Tapu Koko")), "tapukoko");
        assert_eq!(to_id_value(&json!(42)), "42");
        assert_eq!(to_id_value(&json!(3.0)), "3");
        assert_eq!(to_id_value(&json!(1.5)), "15");
        assert_eq!(to_id_value(&json!(null)), "");
        assert_eq!(to_id_value(&json!(true)), "");
        assert_eq!(to_id_value(&json!(["a"])), "");
    }
}
