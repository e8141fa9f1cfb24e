//! Interface conformance checking.
//!
//! A subject (a type under definition) declares the interfaces it conforms
//! to. Nothing is checked at declaration time: the first declaration arms a
//! one-shot trigger, and when the definition is finished the trigger fires,
//! compares every declared interface against the subject's final method
//! tables, and disarms itself.
//!
//! # Architecture
//!
//! - [`TypeSpace`] owns subjects and the trigger list; [`Definition`] is the
//!   open definition of one subject
//! - [`InterfaceRegistry`] accumulates a subject's declared interfaces
//! - [`ImplementationCheck`] computes per-interface [`ViolationRecord`]s
//! - [`compare`] decides whether two signatures are compatible
//! - [`format_errors`] renders a [`CheckResult`] as the conformance report
//!
//! # Example
//!
//! ```
//! use ifc_check::{Interface, TypeSpace};
//! use ifc_ir::Signature;
//!
//! let fooable = Interface::build("Fooable")
//!     .instance_method("foo", Signature::empty())
//!     .finish();
//!
//! let mut space = TypeSpace::new();
//! let err = space
//!     .define("Bad")
//!     .implements(&[fooable])
//!     .finish()
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Bad must implement:\n  - Fooable#foo");
//! ```

mod check;
mod compare;
mod error;
mod format;
mod interface;
mod options;
mod registry;
mod space;
mod trigger;

pub use check::{CheckResult, ImplementationCheck, ViolationRecord};
pub use compare::{compare, MismatchReason, SignatureMismatch};
pub use error::ConformanceError;
pub use format::format_errors;
pub use interface::{Interface, InterfaceBuilder};
pub use options::{CheckOptions, SignaturePolicy, UniversalBase};
pub use registry::InterfaceRegistry;
pub use space::{Definition, Subject, SubjectId, TypeSpace};
