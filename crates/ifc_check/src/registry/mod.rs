//! Per-subject interface registry.
//!
//! Declarations accumulate in call order and are never removed. The first
//! declaration in a definition lifecycle arms the subject's trigger; later
//! declarations in the same lifecycle only append.

use std::sync::Arc;

use crate::Interface;

/// The interfaces one subject has declared, plus its armed state.
#[derive(Clone, Debug, Default)]
pub struct InterfaceRegistry {
    interfaces: Vec<Arc<Interface>>,
    armed: bool,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `interfaces` in order.
    ///
    /// Returns `true` when this call armed the registry, i.e. it is the
    /// first declaration since the last [`disarm`](Self::disarm).
    pub fn declare(&mut self, interfaces: &[Arc<Interface>]) -> bool {
        self.interfaces.extend(interfaces.iter().cloned());
        !std::mem::replace(&mut self.armed, true)
    }

    /// Every declaration so far, duplicates included.
    #[inline]
    pub fn interfaces(&self) -> &[Arc<Interface>] {
        &self.interfaces
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Clear the armed flag once the trigger has fired or been abandoned.
    /// Declarations are kept.
    pub(crate) fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}
