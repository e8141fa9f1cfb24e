//! Type spaces and definition lifecycles.
//!
//! A [`TypeSpace`] owns every subject, the per-subject registries and the
//! trigger list. Subjects are defined through a [`Definition`]: declare
//! interfaces and attach methods in any order, then [`Definition::finish`]
//! publishes the completion event. If the subject declared interfaces
//! during this definition, its trigger fires, the check runs over every
//! interface the subject has ever declared, and the trigger is removed.
//!
//! Reopening a subject starts a new lifecycle. It is only re-checked if it
//! declares again.

use std::fmt;
use std::sync::Arc;

use ifc_ir::{MethodTable, Name, Signature};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::trigger::TriggerList;
use crate::{
    format_errors, CheckOptions, ConformanceError, ImplementationCheck, Interface,
    InterfaceRegistry,
};

/// Identity of a subject within its [`TypeSpace`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(u32);

impl SubjectId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        SubjectId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A type under definition: its methods and declared interfaces.
#[derive(Clone, Debug)]
pub struct Subject {
    id: SubjectId,
    name: Name,
    class_methods: MethodTable,
    instance_methods: MethodTable,
    registry: InterfaceRegistry,
    validations: u32,
}

impl Subject {
    fn new(id: SubjectId, name: Name) -> Self {
        Subject {
            id,
            name,
            class_methods: MethodTable::new(),
            instance_methods: MethodTable::new(),
            registry: InterfaceRegistry::new(),
            validations: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> SubjectId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn class_methods(&self) -> &MethodTable {
        &self.class_methods
    }

    #[inline]
    pub fn instance_methods(&self) -> &MethodTable {
        &self.instance_methods
    }

    /// Declared interfaces, in declaration order.
    #[inline]
    pub fn interfaces(&self) -> &[Arc<Interface>] {
        self.registry.interfaces()
    }

    #[inline]
    pub fn registry(&self) -> &InterfaceRegistry {
        &self.registry
    }

    /// How many times the conformance check has run for this subject.
    #[inline]
    pub fn validations(&self) -> u32 {
        self.validations
    }

    /// Whether the conformance check has run at least once.
    #[inline]
    pub fn is_validated(&self) -> bool {
        self.validations > 0
    }
}

/// Owner of subjects and their triggers.
#[derive(Debug, Default)]
pub struct TypeSpace {
    options: CheckOptions,
    subjects: Vec<Subject>,
    by_name: FxHashMap<Name, SubjectId>,
    triggers: TriggerList,
}

impl TypeSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CheckOptions) -> Self {
        TypeSpace {
            options,
            ..Self::default()
        }
    }

    #[inline]
    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Open a definition for `name`.
    ///
    /// A name that is already defined is reopened, like [`reopen`](Self::reopen).
    pub fn define(&mut self, name: impl Into<Name>) -> Definition<'_> {
        let name = name.into();
        let id = match self.by_name.get(&name) {
            Some(&id) => id,
            None => {
                let id = SubjectId(u32::try_from(self.subjects.len()).unwrap_or(u32::MAX));
                self.by_name.insert(name.clone(), id);
                self.subjects.push(Subject::new(id, name));
                id
            }
        };
        Definition::open(self, id)
    }

    /// Start a new definition lifecycle for an existing subject.
    ///
    /// Returns `None` if `id` does not belong to this space.
    pub fn reopen(&mut self, id: SubjectId) -> Option<Definition<'_>> {
        self.subject(id)?;
        Some(Definition::open(self, id))
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.get(id.0 as usize)
    }

    pub fn subject_named(&self, name: &str) -> Option<&Subject> {
        self.by_name.get(name).and_then(|&id| self.subject(id))
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    /// Number of triggers waiting for a definition to complete.
    pub fn armed_triggers(&self) -> usize {
        self.triggers.len()
    }

    fn subject_mut(&mut self, id: SubjectId) -> &mut Subject {
        &mut self.subjects[id.0 as usize]
    }

    /// The completion event: fire the subject's trigger if it is armed.
    #[tracing::instrument(level = "debug", skip(self))]
    fn complete(&mut self, id: SubjectId) -> Result<(), ConformanceError> {
        if !self.triggers.publish(id) {
            return Ok(());
        }

        let subject = &self.subjects[id.0 as usize];
        let result = ImplementationCheck::new(&self.options).perform(subject, subject.interfaces());
        let name = subject.name.clone();

        let subject = self.subject_mut(id);
        subject.registry.disarm();
        subject.validations += 1;
        debug!(subject = %name, failing = result.len(), "conformance checked");

        if result.is_empty() {
            return Ok(());
        }
        let report = format_errors(name.as_str(), &result);
        Err(ConformanceError::new(name, result, report))
    }

    fn abandon(&mut self, id: SubjectId) {
        if self.triggers.publish(id) {
            let subject = self.subject_mut(id);
            subject.registry.disarm();
            debug!(subject = %subject.name, "definition abandoned; trigger removed");
        }
    }
}

/// An open definition of one subject.
///
/// Dropping a definition without calling [`finish`](Self::finish) abandons
/// it: its trigger is removed without running the check.
#[must_use = "a definition is only checked when it is finished"]
pub struct Definition<'s> {
    space: &'s mut TypeSpace,
    id: SubjectId,
    finished: bool,
}

impl<'s> Definition<'s> {
    fn open(space: &'s mut TypeSpace, id: SubjectId) -> Self {
        debug!(subject = %id, "definition opened");
        Definition {
            space,
            id,
            finished: false,
        }
    }

    #[inline]
    pub fn id(&self) -> SubjectId {
        self.id
    }

    /// Declare conformance to `interfaces`. May be called any number of
    /// times; the first call arms the completion trigger.
    pub fn implements(self, interfaces: &[Arc<Interface>]) -> Self {
        let armed = self.space.subject_mut(self.id).registry.declare(interfaces);
        if armed {
            self.space.triggers.arm(self.id);
        }
        self
    }

    /// Define or redefine a class-level method.
    pub fn class_method(self, name: impl Into<Name>, signature: Signature) -> Self {
        self.space
            .subject_mut(self.id)
            .class_methods
            .define(name, signature);
        self
    }

    /// Define or redefine an instance-level method.
    pub fn instance_method(self, name: impl Into<Name>, signature: Signature) -> Self {
        self.space
            .subject_mut(self.id)
            .instance_methods
            .define(name, signature);
        self
    }

    /// Complete the definition, running the conformance check if armed.
    pub fn finish(mut self) -> Result<SubjectId, ConformanceError> {
        self.finished = true;
        self.space.complete(self.id)?;
        Ok(self.id)
    }
}

impl Drop for Definition<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.space.abandon(self.id);
        }
    }
}
