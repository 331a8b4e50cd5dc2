//! Document entities, the generic DTE aggregate and its capability contracts.
//!
//! Entities keep their fields private. Each field is reached through a
//! getter, a typed setter taking a value object, and a `_raw` setter taking
//! the primitive. Raw setters either commit a freshly validated value or
//! leave the entity untouched and return the [`FieldError`](crate::core::FieldError).

/// Getter, typed setter and raw setter for a required field.
///
/// `ref` getters borrow, `copy` getters return by value.
macro_rules! required {
    (ref $field:ident: $ty:ty, $set:ident, $set_raw:ident($raw:ty) = $ctor:path, $path:literal) => {
        pub fn $field(&self) -> &$ty {
            &self.$field
        }

        required!(@set $field: $ty, $set, $set_raw($raw) = $ctor, $path);
    };
    (copy $field:ident: $ty:ty, $set:ident, $set_raw:ident($raw:ty) = $ctor:path, $path:literal) => {
        pub fn $field(&self) -> $ty {
            self.$field
        }

        required!(@set $field: $ty, $set, $set_raw($raw) = $ctor, $path);
    };
    (@set $field:ident: $ty:ty, $set:ident, $set_raw:ident($raw:ty) = $ctor:path, $path:literal) => {
        pub fn $set(&mut self, value: $ty) {
            self.$field = value;
        }

        pub fn $set_raw(&mut self, raw: $raw) -> Result<(), $crate::core::FieldError> {
            self.$field = $ctor(raw).map_err(|e| e.at($path))?;
            Ok(())
        }
    };
}

/// Same as [`required!`] for an optional field; `None` clears it.
macro_rules! optional {
    (ref $field:ident: $ty:ty, $set:ident, $set_raw:ident($raw:ty) = $ctor:path, $path:literal) => {
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        optional!(@set $field: $ty, $set, $set_raw($raw) = $ctor, $path);
    };
    (copy $field:ident: $ty:ty, $set:ident, $set_raw:ident($raw:ty) = $ctor:path, $path:literal) => {
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        optional!(@set $field: $ty, $set, $set_raw($raw) = $ctor, $path);
    };
    (@set $field:ident: $ty:ty, $set:ident, $set_raw:ident($raw:ty) = $ctor:path, $path:literal) => {
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        pub fn $set_raw(&mut self, raw: Option<$raw>) -> Result<(), $crate::core::FieldError> {
            self.$field = raw.map($ctor).transpose().map_err(|e| e.at($path))?;
            Ok(())
        }
    };
}

mod contracts;
mod dte;
mod extras;
mod identification;
mod invalidation;
mod item;
mod party;
mod summary;

pub use contracts::*;
pub use dte::*;
pub use extras::*;
pub use identification::*;
pub use invalidation::*;
pub use item::*;
pub use party::*;
pub use summary::*;
