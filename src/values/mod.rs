//! Self-validating scalar value objects.
//!
//! Every type here can only be obtained through a constructor that checks
//! the government-mandated format or range. Once built, a value never
//! changes and is always valid.

use std::fmt;
use std::str::FromStr;

use crate::core::FieldError;

/// Common surface of all scalar value objects.
///
/// `to_string()` followed by `parse()` yields an equal value.
pub trait ValueObject: Clone + PartialEq + fmt::Display + FromStr<Err = FieldError> {
    /// Value equality. Decimal-backed types tolerate a difference of 1e-6.
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// String-backed newtype plumbing: `value()`, `Display`, `FromStr`, serde
/// conversions. The type must provide `fn new(&str) -> Result<Self, FieldError>`.
macro_rules! text_value_object {
    ($name:ident) => {
        impl $name {
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::core::FieldError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(&s)
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl $crate::values::ValueObject for $name {}
    };
}

/// Closed catalog of string codes (e.g. "01", "36").
macro_rules! string_code {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, error = $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn new(code: &str) -> Result<Self, $crate::core::FieldError> {
                Self::from_code(code).ok_or_else(|| {
                    $crate::core::FieldError::new(
                        $crate::core::ErrorCode::$err,
                        $field,
                        format!("one of {}", [$($code),+].join(", ")),
                        code,
                    )
                })
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            pub fn code(&self) -> &'static str {
                match self {
                    $( Self::$variant => $code ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_str(self.code())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(d)?;
                Self::new(&raw).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::values::ValueObject for $name {}
    };
}

/// Closed catalog of small integer codes (e.g. model type 1/2).
macro_rules! numeric_code {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, error = $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn new(code: u8) -> Result<Self, $crate::core::FieldError> {
                Self::from_code(code).ok_or_else(|| {
                    let codes: Vec<String> = [$($code),+].iter().map(|c: &u8| c.to_string()).collect();
                    $crate::core::FieldError::new(
                        $crate::core::ErrorCode::$err,
                        $field,
                        format!("one of {}", codes.join(", ")),
                        code,
                    )
                })
            }

            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            pub fn code(&self) -> u8 {
                match self {
                    $( Self::$variant => $code ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let code = s.trim().parse::<u8>().map_err(|_| {
                    $crate::core::FieldError::new(
                        $crate::core::ErrorCode::$err,
                        $field,
                        "a numeric code",
                        s,
                    )
                })?;
                Self::new(code)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_u8(self.code())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = <u8 as ::serde::Deserialize>::deserialize(d)?;
                Self::new(raw).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::values::ValueObject for $name {}
    };
}

/// Integer newtype constrained to an inclusive range.
macro_rules! bounded_integer {
    (
        $(#[$meta:meta])*
        $name:ident($int:ty), field = $field:literal, range = $min:literal..=$max:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name($int);

        impl $name {
            pub const MIN: $int = $min;
            pub const MAX: $int = $max;

            pub fn new(value: $int) -> Result<Self, $crate::core::FieldError> {
                if (Self::MIN..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err($crate::core::FieldError::new(
                        $crate::core::ErrorCode::OutOfRange,
                        $field,
                        format!("{}..={}", Self::MIN, Self::MAX),
                        value,
                    ))
                }
            }

            pub fn value(&self) -> $int {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().parse::<$int>().map_err(|_| {
                    $crate::core::FieldError::new(
                        $crate::core::ErrorCode::InvalidFormat,
                        $field,
                        format!("an integer in {}..={}", Self::MIN, Self::MAX),
                        s,
                    )
                })?;
                Self::new(value)
            }
        }

        impl TryFrom<$int> for $name {
            type Error = $crate::core::FieldError;

            fn try_from(value: $int) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for $int {
            fn from(v: $name) -> $int {
                v.0
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.0, s)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                let raw = <$int as ::serde::Deserialize>::deserialize(d)?;
                Self::new(raw).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::values::ValueObject for $name {}
    };
}

mod catalog;
mod codes;
mod identifiers;
mod location;
mod money;
mod temporal;
mod text;

pub use catalog::*;
pub use codes::*;
pub use identifiers::*;
pub use location::*;
pub use money::*;
pub use temporal::*;
pub use text::*;
