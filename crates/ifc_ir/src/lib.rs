//! Interfaceable IR - method signature data model.
//!
//! This crate holds the shapes shared by every other crate:
//! - `Name` for method, parameter and interface identifiers
//! - `Param` / `ParamKind` for a single declared parameter
//! - `Signature` for a method's full parameter list (with cached `ShapeFlags`)
//! - `CanonicalParams` for the comparison/display form of a signature
//! - `MethodTable` for an ordered name -> signature map
//!
//! # Design Philosophy
//!
//! - **Explicit schemas**: signatures are plain data, built once and compared
//!   by pure functions. Nothing here depends on a runtime's reflection API.
//! - **Validated on construction**: a `Signature` always has its parameters in
//!   a legal order, so consumers never re-check ordering.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod canonical;
mod method_table;
mod name;
mod param;
mod signature;

pub use canonical::{CanonicalParam, CanonicalParams};
pub use method_table::{MethodDef, MethodTable};
pub use name::Name;
pub use param::{Param, ParamKind};
pub use signature::{ShapeFlags, Signature, SignatureBuilder, SignatureError};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Name, ParamKind};
    // Name is a boxed str: pointer + length.
    crate::static_assert_size!(Name, 16);
    crate::static_assert_size!(ParamKind, 1);
}
