use std::fmt;

use super::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeErr {
    MissingProp(String),
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for DecodeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErr::MissingProp(name) => write!(f, "missing property: {name}"),
            DecodeErr::UnexpectedKind { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for DecodeErr {}

/// Builds a typed Rust value out of a parsed [`Value`] tree.
///
/// `from_missing` is consulted when an object property a field maps to is
/// absent; everything except `Option` treats that as an error. Derivable for
/// named-field structs with `#[derive(FromJson)]` from `doc_parser_macros`.
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Result<Self, DecodeErr>;

    fn from_missing(prop: &str) -> Result<Self, DecodeErr> {
        Err(DecodeErr::MissingProp(prop.to_string()))
    }
}

impl FromJson for i32 {
    fn from_json(value: &Value) -> Result<Self, DecodeErr> {
        match value {
            Value::Number(n) => Ok(*n),
            _ => Err(unexpected("number", value)),
        }
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Result<Self, DecodeErr> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(unexpected("string", value)),
        }
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Result<Self, DecodeErr> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(unexpected("bool", value)),
        }
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Result<Self, DecodeErr> {
        match value {
            Value::Array(elems) => elems.iter().map(T::from_json).collect(),
            _ => Err(unexpected("array", value)),
        }
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &Value) -> Result<Self, DecodeErr> {
        T::from_json(value).map(Some)
    }

    fn from_missing(_prop: &str) -> Result<Self, DecodeErr> {
        Ok(None)
    }
}

fn unexpected(expected: &'static str, found: &Value) -> DecodeErr {
    DecodeErr::UnexpectedKind {
        expected,
        found: found.kind_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::parse;

    #[test]
    fn test_primitives() {
        assert_eq!(Ok(1), i32::from_json(&parse("1").unwrap()));
        assert_eq!(Ok(true), bool::from_json(&parse("true").unwrap()));
        assert_eq!(
            Ok("aiueo".to_string()),
            String::from_json(&parse(r#""aiueo""#).unwrap())
        );
    }

    #[test]
    fn test_vec() {
        assert_eq!(
            Ok(vec![1, 2, 3]),
            Vec::<i32>::from_json(&parse("[1, 2, 3]").unwrap())
        );
    }

    #[test]
    fn test_option() {
        assert_eq!(Ok(Some(1)), Option::<i32>::from_json(&parse("1").unwrap()));
        assert_eq!(Ok(None), Option::<i32>::from_missing("age"));
    }

    #[test]
    fn test_kind_mismatch() {
        assert_eq!(
            Err(DecodeErr::UnexpectedKind {
                expected: "number",
                found: "bool",
            }),
            i32::from_json(&parse("true").unwrap())
        );
    }

    #[test]
    fn test_missing_prop() {
        assert_eq!(
            Err(DecodeErr::MissingProp("age".to_string())),
            i32::from_missing("age")
        );
    }
}
