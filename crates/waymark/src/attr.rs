//! Declarative attribute values.
//!
//! The wizard's configuration surface mirrors a host-markup attribute model:
//! values arrive loosely typed (booleans, strings, numbers, index lists) and
//! the widget normalizes them defensively instead of rejecting them.
//!
//! Boolean-like attributes accept a native `bool` or the literal strings
//! `"yes"`/`"no"`. Any other string normalizes to `false`; a value of an
//! unrelated kind leaves the property unchanged.
//!
//! # Example
//!
//! ```
//! use waymark::AttrValue;
//!
//! assert_eq!(AttrValue::from("yes").as_toggle(), Some(true));
//! assert_eq!(AttrValue::from("no").as_toggle(), Some(false));
//! assert_eq!(AttrValue::from(true).as_toggle(), Some(true));
//! assert_eq!(AttrValue::from(7).as_toggle(), None);
//! ```

/// A loosely typed attribute value supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A native boolean.
    Bool(bool),
    /// A string literal from markup.
    Str(String),
    /// A numeric value.
    Int(i64),
    /// A list of step indices.
    IndexList(Vec<i32>),
}

impl AttrValue {
    /// Interpret this value as a boolean-like toggle.
    ///
    /// Booleans are taken as-is; strings compare against the literal `"yes"`.
    /// Returns `None` for unrelated value kinds, which callers treat as
    /// "leave the property unchanged".
    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(value) => Some(*value),
            AttrValue::Str(text) => Some(text == "yes"),
            _ => None,
        }
    }

    /// Interpret this value as a step index.
    ///
    /// Strings are parsed as decimal integers. Returns `None` when the value
    /// cannot name an index, including numbers outside the `i32` range.
    pub fn as_index(&self) -> Option<i32> {
        match self {
            AttrValue::Int(value) => i32::try_from(*value).ok(),
            AttrValue::Str(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Interpret this value as a list of step indices.
    pub fn as_index_list(&self) -> Option<&[i32]> {
        match self {
            AttrValue::IndexList(indices) => Some(indices),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(i64::from(value))
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<Vec<i32>> for AttrValue {
    fn from(value: Vec<i32>) -> Self {
        AttrValue::IndexList(value)
    }
}

impl From<&[i32]> for AttrValue {
    fn from(value: &[i32]) -> Self {
        AttrValue::IndexList(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_bool() {
        assert_eq!(AttrValue::from(true).as_toggle(), Some(true));
        assert_eq!(AttrValue::from(false).as_toggle(), Some(false));
    }

    #[test]
    fn test_toggle_from_string() {
        assert_eq!(AttrValue::from("yes").as_toggle(), Some(true));
        assert_eq!(AttrValue::from("no").as_toggle(), Some(false));
        // Anything that is not "yes" normalizes to false
        assert_eq!(AttrValue::from("maybe").as_toggle(), Some(false));
    }

    #[test]
    fn test_toggle_rejects_unrelated_kinds() {
        assert_eq!(AttrValue::from(1).as_toggle(), None);
        assert_eq!(AttrValue::from(vec![1, 2]).as_toggle(), None);
    }

    #[test]
    fn test_index_parsing() {
        assert_eq!(AttrValue::from(3).as_index(), Some(3));
        assert_eq!(AttrValue::from("2").as_index(), Some(2));
        assert_eq!(AttrValue::from(" -1 ").as_index(), Some(-1));
        assert_eq!(AttrValue::from("two").as_index(), None);
        assert_eq!(AttrValue::from(true).as_index(), None);
    }

    #[test]
    fn test_index_out_of_i32_range_is_no_index() {
        // An unrepresentable value must not wrap into a valid-looking index.
        assert_eq!(AttrValue::from((1i64 << 32) + 1).as_index(), None);
        assert_eq!(AttrValue::from(i64::MIN).as_index(), None);
        assert_eq!(AttrValue::from(i64::from(i32::MAX)).as_index(), Some(i32::MAX));
    }

    #[test]
    fn test_index_list() {
        assert_eq!(
            AttrValue::from(vec![2, 4]).as_index_list(),
            Some(&[2, 4][..])
        );
        assert_eq!(AttrValue::from("2,4").as_index_list(), None);
    }
}
