use ordered_float::OrderedFloat;

use crate::{interpreter::value::core::Value, util::num::i64_to_f64};

impl Value {
    /// Structural equality. Never fails: mismatched types are simply unequal.
    ///
    /// - Integers and floats compare by numeric value; floats use total
    ///   equality, so `NaN` equals `NaN`.
    /// - Strings compare by content, lists element by element.
    /// - A file equals another file, or a string, naming the same file.
    /// - `Null` equals `Null`; the `NaN` sentinel equals nothing.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(2).equals(&Value::Float(2.0)));
    /// assert!(Value::from(vec![Value::Integer(1)]).equals(&Value::from(vec![Value::Float(1.0)])));
    /// assert!(!Value::Integer(1).equals(&Value::from("1")));
    /// assert!(Value::Null.equals(&Value::Null));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                OrderedFloat(i64_to_f64(*a)) == OrderedFloat(*b)
            },
            (Self::Float(a), Self::Float(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
            },
            (Self::ReadFile(_) | Self::WriteFile(_), Self::String(name))
            | (Self::String(name), Self::ReadFile(_) | Self::WriteFile(_)) => {
                self.file_name()
                    .or_else(|| other.file_name())
                    .is_some_and(|file| &file == name)
            },
            (Self::ReadFile(_) | Self::WriteFile(_), Self::ReadFile(_) | Self::WriteFile(_)) => {
                self.file_name() == other.file_name()
            },
            _ => false,
        }
    }
    /// `self > rhs` as integer `1` or `0`, or [`Value::NaN`] when the two
    /// values cannot be ordered.
    ///
    /// # Example
    /// ```
    /// use bna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Float(2.5).greater_than(&Value::Integer(2)), Value::Integer(1));
    /// assert!(matches!(Value::Integer(2).greater_than(&Value::from("a")), Value::NaN));
    /// ```
    #[must_use]
    pub fn greater_than(&self, rhs: &Self) -> Self {
        self.order(rhs, |a, b| a > b, |a, b| a > b)
    }
    /// `self < rhs` as integer `1` or `0`, or [`Value::NaN`] when the two
    /// values cannot be ordered.
    #[must_use]
    pub fn less_than(&self, rhs: &Self) -> Self {
        self.order(rhs, |a, b| a < b, |a, b| a < b)
    }
    fn order(&self,
             rhs: &Self,
             int: impl Fn(i64, i64) -> bool,
             float: impl Fn(f64, f64) -> bool)
             -> Self {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => int(*a, *b).into(),
            _ => match (self.as_float(), rhs.as_float()) {
                (Some(a), Some(b)) => float(a, b).into(),
                _ => Self::NaN,
            },
        }
    }
}
