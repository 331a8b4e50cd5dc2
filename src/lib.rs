//! # dte
//!
//! Domain model and business-rule validation for El Salvador's electronic
//! tax documents (DTE): consumer invoices, fiscal-credit vouchers (CCF),
//! credit notes, retention receipts and invalidation requests.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! Validation happens in three tiers:
//!
//! 1. **Fields.** Every scalar is a value object whose constructor rejects
//!    malformed input with a [`FieldError`]. Mapping stops at the first bad
//!    field.
//! 2. **Structure.** [`DteDocument::validate`] reports every required
//!    sub-entity that is missing as one [`StructuralError`].
//! 3. **Business rules.** A [`DteValidator`] runs its strategies and
//!    collects every violation into one composite [`RuleError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use dte::*;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(Amount::for_total(dec!(10.00)).unwrap().value(), dec!(10.00));
//! let err = Amount::for_total(dec!(10.005)).unwrap_err();
//! assert_eq!(err.code, ErrorCode::InvalidDecimalPrecision);
//!
//! let doc = InvoiceDocument::new();
//! let missing = doc.validate().unwrap_err().missing;
//! assert_eq!(missing, ["identification", "issuer", "receiver", "items", "summary"]);
//!
//! let rejected = DteValidator::invoice().validate(&doc).unwrap_err();
//! assert!(rejected.contains(ErrorCode::RequiredField));
//! assert_eq!(rejected.category().http_status(), 422);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Run strategies on the rayon thread pool; error order is unchanged |

pub mod core;
pub mod document;
pub mod rules;
pub mod values;

// Re-export everything at crate root for convenience
pub use crate::core::*;
pub use crate::document::*;
pub use crate::rules::*;
pub use crate::values::*;
