//! Interface definitions.
//!
//! An [`Interface`] is a named, immutable contract: the class-level and
//! instance-level methods a conforming subject must provide. Interfaces are
//! built once and shared by `Arc`; subjects only ever hold references.

use std::sync::Arc;

use ifc_ir::{MethodDef, MethodTable, Name, Signature};

use crate::UniversalBase;

/// A named contract of required methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    name: Name,
    class_methods: MethodTable,
    instance_methods: MethodTable,
}

impl Interface {
    /// Start building an interface.
    pub fn build(name: impl Into<Name>) -> InterfaceBuilder {
        InterfaceBuilder {
            interface: Interface {
                name: name.into(),
                class_methods: MethodTable::new(),
                instance_methods: MethodTable::new(),
            },
        }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// All declared class-level methods, including universal ones.
    #[inline]
    pub fn class_methods(&self) -> &MethodTable {
        &self.class_methods
    }

    #[inline]
    pub fn instance_methods(&self) -> &MethodTable {
        &self.instance_methods
    }

    /// Class-level methods the interface itself requires: those not already
    /// present on every type.
    pub fn own_class_methods<'a>(
        &'a self,
        base: &'a UniversalBase,
    ) -> impl Iterator<Item = &'a MethodDef> + 'a {
        self.class_methods
            .iter()
            .filter(move |m| !base.contains(m.name.as_str()))
    }
}

/// Builder for [`Interface`].
#[derive(Clone, Debug)]
#[must_use]
pub struct InterfaceBuilder {
    interface: Interface,
}

impl InterfaceBuilder {
    /// Require a class-level method. Redeclaring a name replaces its signature.
    pub fn class_method(mut self, name: impl Into<Name>, signature: Signature) -> Self {
        self.interface.class_methods.define(name, signature);
        self
    }

    /// Require an instance-level method. Redeclaring a name replaces its signature.
    pub fn instance_method(mut self, name: impl Into<Name>, signature: Signature) -> Self {
        self.interface.instance_methods.define(name, signature);
        self
    }

    pub fn finish(self) -> Arc<Interface> {
        Arc::new(self.interface)
    }
}
