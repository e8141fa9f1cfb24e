//! Implementation checking.
//!
//! [`ImplementationCheck`] compares a subject's method tables against each
//! declared interface and collects what is missing or incompatible into one
//! [`ViolationRecord`] per failing interface. The checker never fails; it
//! returns data for the caller to report.

use std::sync::Arc;

use ifc_ir::{MethodTable, Name, Signature};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::{compare, CheckOptions, Interface, SignatureMismatch, Subject};

/// Everything one interface finds wrong with a subject.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViolationRecord {
    pub missing_class_methods: Vec<Name>,
    pub missing_instance_methods: Vec<Name>,
    pub class_method_signature_errors: Vec<(Name, SignatureMismatch)>,
    pub instance_method_signature_errors: Vec<(Name, SignatureMismatch)>,
}

impl ViolationRecord {
    pub fn is_empty(&self) -> bool {
        self.missing_class_methods.is_empty()
            && self.missing_instance_methods.is_empty()
            && self.class_method_signature_errors.is_empty()
            && self.instance_method_signature_errors.is_empty()
    }

    /// Total number of individual violations.
    pub fn len(&self) -> usize {
        self.missing_class_methods.len()
            + self.missing_instance_methods.len()
            + self.class_method_signature_errors.len()
            + self.instance_method_signature_errors.len()
    }
}

/// Failing interfaces in declaration order, each with its record.
///
/// Only non-empty records are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckResult {
    records: Vec<(Name, ViolationRecord)>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; empty records are dropped.
    pub fn push(&mut self, interface: impl Into<Name>, record: ViolationRecord) {
        if !record.is_empty() {
            self.records.push((interface.into(), record));
        }
    }

    pub fn get(&self, interface: &str) -> Option<&ViolationRecord> {
        self.records
            .iter()
            .find(|(name, _)| name == interface)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &ViolationRecord)> {
        self.records.iter().map(|(name, record)| (name, record))
    }

    /// Number of failing interfaces.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of violations across every interface.
    pub fn violation_count(&self) -> usize {
        self.records.iter().map(|(_, record)| record.len()).sum()
    }
}

impl<N: Into<Name>> FromIterator<(N, ViolationRecord)> for CheckResult {
    fn from_iter<T: IntoIterator<Item = (N, ViolationRecord)>>(iter: T) -> Self {
        let mut result = CheckResult::new();
        for (name, record) in iter {
            result.push(name, record);
        }
        result
    }
}

/// Runs the per-interface comparison for one subject.
pub struct ImplementationCheck<'a> {
    options: &'a CheckOptions,
}

impl<'a> ImplementationCheck<'a> {
    pub fn new(options: &'a CheckOptions) -> Self {
        ImplementationCheck { options }
    }

    /// Check `subject` against `interfaces`, in order.
    ///
    /// An interface listed more than once is checked once, at its first
    /// position. Repeats are recognised by identity: two distinct
    /// interfaces that share a name are both checked.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(subject = %subject.name(), interfaces = interfaces.len())
    )]
    pub fn perform(&self, subject: &Subject, interfaces: &[Arc<Interface>]) -> CheckResult {
        let mut seen: FxHashSet<*const Interface> = FxHashSet::default();
        let mut result = CheckResult::new();

        for interface in interfaces {
            if !seen.insert(Arc::as_ptr(interface)) {
                trace!(interface = %interface.name(), "skipping repeated declaration");
                continue;
            }
            let record = self.check_interface(subject, interface);
            debug!(
                interface = %interface.name(),
                violations = record.len(),
                "checked interface"
            );
            result.push(interface.name().clone(), record);
        }

        result
    }

    fn check_interface(&self, subject: &Subject, interface: &Interface) -> ViolationRecord {
        let mut record = ViolationRecord::default();
        let base = &self.options.universal_base;

        let own_class = interface
            .own_class_methods(base)
            .map(|m| (&m.name, &m.signature));
        self.check_methods(
            own_class,
            subject.class_methods(),
            &mut record.missing_class_methods,
            &mut record.class_method_signature_errors,
        );

        let instance = interface
            .instance_methods()
            .iter()
            .map(|m| (&m.name, &m.signature));
        self.check_methods(
            instance,
            subject.instance_methods(),
            &mut record.missing_instance_methods,
            &mut record.instance_method_signature_errors,
        );

        record
    }

    fn check_methods<'i>(
        &self,
        required: impl Iterator<Item = (&'i Name, &'i Signature)>,
        provided: &MethodTable,
        missing: &mut Vec<Name>,
        mismatched: &mut Vec<(Name, SignatureMismatch)>,
    ) {
        for (name, expected) in required {
            match provided.get(name.as_str()) {
                None => missing.push(name.clone()),
                Some(actual) => {
                    if let Some(mismatch) = compare(expected, actual, self.options.policy) {
                        mismatched.push((name.clone(), mismatch));
                    }
                }
            }
        }
    }
}
