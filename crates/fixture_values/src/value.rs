//! Scalar values stored by a fixture container.
//!
//! [`Value`] is a closed enum over the eight supported scalar kinds.
//! [`Scalar`] is implemented by the matching Rust types and drives typed
//! extraction: a value converts to `T` only when its tag is `T::KIND`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime kind tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScalarKind {
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    Str,
    Bool,
}

impl ScalarKind {
    /// All kinds, in declaration order.
    pub const ALL: [ScalarKind; 8] = [
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
        ScalarKind::Str,
        ScalarKind::Bool,
    ];

    /// Name of the Rust type carrying this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Str => "String",
            ScalarKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A dynamically-typed scalar.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Value::I32(_) => ScalarKind::I32,
            Value::I64(_) => ScalarKind::I64,
            Value::U32(_) => ScalarKind::U32,
            Value::U64(_) => ScalarKind::U64,
            Value::F32(_) => ScalarKind::F32,
            Value::F64(_) => ScalarKind::F64,
            Value::Str(_) => ScalarKind::Str,
            Value::Bool(_) => ScalarKind::Bool,
        }
    }

    /// Converts to `T` if this value is of kind `T::KIND`.
    #[inline]
    pub fn as_scalar<T: Scalar>(&self) -> Option<T> {
        T::from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{:?}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Rust types that a [`Value`] can be extracted as.
pub trait Scalar: Sized + Send + Sync + 'static {
    /// Kind tag this type corresponds to.
    const KIND: ScalarKind;

    /// Returns the contained value if `value` is of kind [`Self::KIND`].
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_copy_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                #[inline]
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_copy_scalar! {
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::Str;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let values: Vec<Value> = vec![
            1i32.into(),
            2i64.into(),
            3u32.into(),
            4u64.into(),
            0.5f32.into(),
            0.25f64.into(),
            "abc".into(),
            true.into(),
        ];
        let kinds: Vec<ScalarKind> = values.iter().map(Value::kind).collect();
        assert_eq!(kinds, ScalarKind::ALL.to_vec());
    }

    #[test]
    fn test_scalar_exact_kind_only() {
        let v = Value::I32(5);
        assert_eq!(v.as_scalar::<i32>(), Some(5));
        // No numeric widening between kinds.
        assert_eq!(v.as_scalar::<i64>(), None);
        assert_eq!(v.as_scalar::<u32>(), None);
        assert_eq!(v.as_scalar::<String>(), None);

        let s = Value::from(String::from("xy"));
        assert_eq!(s.as_scalar::<String>(), Some("xy".to_string()));
        assert_eq!(s.as_scalar::<bool>(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::U64(7).to_string(), "7");
        assert_eq!(Value::Str("hi".into()).to_string(), "\"hi\"");
        assert_eq!(ScalarKind::Str.to_string(), "String");
        assert_eq!(ScalarKind::F32.to_string(), "f32");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let value = Value::Str("fixture".into());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), value);
    }
}
