//! All-or-nothing typed extraction.
//!
//! [`extract_all`] converts a heterogeneous slice into a `Vec<T>` with a
//! parallel [`transfer_into`]. Any element of the wrong kind makes the whole
//! extraction return `None`; the partially written output is dropped.

use tracing::debug;

use crate::container::ValueContainer;
use crate::transfer::transfer_into;
use crate::value::{Scalar, Value};

/// Extracts every element of `values` as `T`.
///
/// Returns `None` if any element is not of kind `T::KIND`. An empty slice
/// yields `Some(vec![])`.
///
/// # Examples
///
/// ```rust
/// use fixture_values::{extract_all, Value};
///
/// let values = vec![Value::U32(1), Value::U32(2)];
/// assert_eq!(extract_all::<u32>(&values), Some(vec![1, 2]));
/// assert_eq!(extract_all::<u64>(&values), None);
/// ```
pub fn extract_all<T: Scalar>(values: &[Value]) -> Option<Vec<T>> {
    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None)
        .take(values.len())
        .collect();

    let complete = transfer_into(&mut slots, |i, slot| match T::from_value(&values[i]) {
        Some(v) => {
            *slot = Some(v);
            true
        }
        None => false,
    });

    if !complete {
        debug!(kind = %T::KIND, len = values.len(), "extraction rejected");
        return None;
    }
    slots.into_iter().collect()
}

impl ValueContainer {
    /// Returns every element as `T`, or `None` if any element is another kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixture_values::ValueContainer;
    ///
    /// let mut c = ValueContainer::with_seed(1);
    /// c.put([1i64, 2, 3]);
    /// assert_eq!(c.get_all_of::<i64>(), Some(vec![1, 2, 3]));
    ///
    /// c.put(["four"]);
    /// assert_eq!(c.get_all_of::<i64>(), None);
    /// ```
    #[inline]
    pub fn get_all_of<T: Scalar>(&self) -> Option<Vec<T>> {
        extract_all(self.get_all())
    }

    #[inline]
    pub fn get_all_i32(&self) -> Option<Vec<i32>> {
        self.get_all_of()
    }

    #[inline]
    pub fn get_all_i64(&self) -> Option<Vec<i64>> {
        self.get_all_of()
    }

    #[inline]
    pub fn get_all_u32(&self) -> Option<Vec<u32>> {
        self.get_all_of()
    }

    #[inline]
    pub fn get_all_u64(&self) -> Option<Vec<u64>> {
        self.get_all_of()
    }

    #[inline]
    pub fn get_all_f32(&self) -> Option<Vec<f32>> {
        self.get_all_of()
    }

    #[inline]
    pub fn get_all_f64(&self) -> Option<Vec<f64>> {
        self.get_all_of()
    }

    #[inline]
    pub fn get_all_strings(&self) -> Option<Vec<String>> {
        self.get_all_of()
    }

    #[inline]
    pub fn get_all_bool(&self) -> Option<Vec<bool>> {
        self.get_all_of()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ScalarKind;

    fn one_of_each() -> Vec<Value> {
        vec![
            Value::I32(-1),
            Value::I64(-2),
            Value::U32(3),
            Value::U64(4),
            Value::F32(0.5),
            Value::F64(0.25),
            Value::Str("s".into()),
            Value::Bool(true),
        ]
    }

    #[test]
    fn test_empty_is_present_for_every_kind() {
        let c = ValueContainer::with_seed(0);
        assert_eq!(c.get_all_i32(), Some(vec![]));
        assert_eq!(c.get_all_i64(), Some(vec![]));
        assert_eq!(c.get_all_u32(), Some(vec![]));
        assert_eq!(c.get_all_u64(), Some(vec![]));
        assert_eq!(c.get_all_f32(), Some(vec![]));
        assert_eq!(c.get_all_f64(), Some(vec![]));
        assert_eq!(c.get_all_strings(), Some(vec![]));
        assert_eq!(c.get_all_bool(), Some(vec![]));
    }

    #[test]
    fn test_homogeneous_extraction() {
        let mut c = ValueContainer::with_seed(0);
        c.put([1u64, 5, 9]);
        assert_eq!(c.get_all_u64(), Some(vec![1, 5, 9]));
        assert_eq!(c.get_all_u32(), None);

        c.clear().put(["a", "bb"]);
        assert_eq!(
            c.get_all_strings(),
            Some(vec!["a".to_string(), "bb".to_string()])
        );

        c.clear().put([0.5f32, 1.5]);
        assert_eq!(c.get_all_f32(), Some(vec![0.5, 1.5]));
        assert_eq!(c.get_all_f64(), None);
    }

    #[test]
    fn test_mixed_is_absent_for_every_kind() {
        let values = one_of_each();
        assert_eq!(extract_all::<i32>(&values), None);
        assert_eq!(extract_all::<i64>(&values), None);
        assert_eq!(extract_all::<u32>(&values), None);
        assert_eq!(extract_all::<u64>(&values), None);
        assert_eq!(extract_all::<f32>(&values), None);
        assert_eq!(extract_all::<f64>(&values), None);
        assert_eq!(extract_all::<String>(&values), None);
        assert_eq!(extract_all::<bool>(&values), None);
    }

    #[test]
    fn test_single_mismatch_in_large_input() {
        let mut values: Vec<Value> = (0..10_000).map(Value::I32).collect();
        assert_eq!(extract_all::<i32>(&values).map(|v| v.len()), Some(10_000));

        values[6_543] = Value::I64(6_543);
        assert_eq!(extract_all::<i32>(&values), None);
    }

    #[test]
    fn test_each_singleton_extracts_only_as_its_kind() {
        for value in one_of_each() {
            let single = [value.clone()];
            for kind in ScalarKind::ALL {
                let present = match kind {
                    ScalarKind::I32 => extract_all::<i32>(&single).is_some(),
                    ScalarKind::I64 => extract_all::<i64>(&single).is_some(),
                    ScalarKind::U32 => extract_all::<u32>(&single).is_some(),
                    ScalarKind::U64 => extract_all::<u64>(&single).is_some(),
                    ScalarKind::F32 => extract_all::<f32>(&single).is_some(),
                    ScalarKind::F64 => extract_all::<f64>(&single).is_some(),
                    ScalarKind::Str => extract_all::<String>(&single).is_some(),
                    ScalarKind::Bool => extract_all::<bool>(&single).is_some(),
                };
                assert_eq!(present, kind == value.kind(), "{} as {}", value, kind);
            }
        }
    }
}
