//! Deferred validation triggers.
//!
//! A trigger is an observer of definition-completed events for exactly one
//! subject. Publishing a completion event removes and returns the matching
//! trigger, if any; events for other subjects leave it in place. Nothing
//! stays registered after it fires.

use smallvec::SmallVec;
use tracing::trace;

use crate::SubjectId;

/// The armed triggers of a [`TypeSpace`](crate::TypeSpace).
#[derive(Clone, Debug, Default)]
pub(crate) struct TriggerList {
    armed: SmallVec<[SubjectId; 4]>,
}

impl TriggerList {
    /// Arm a trigger for `subject`. Arming twice is a no-op.
    pub(crate) fn arm(&mut self, subject: SubjectId) {
        if !self.armed.contains(&subject) {
            trace!(?subject, "trigger armed");
            self.armed.push(subject);
        }
    }

    /// Publish "definition of `subject` completed".
    ///
    /// Returns `true` if a trigger was armed for it; that trigger is removed.
    pub(crate) fn publish(&mut self, subject: SubjectId) -> bool {
        let Some(pos) = self.armed.iter().position(|&id| id == subject) else {
            return false;
        };
        self.armed.remove(pos);
        trace!(?subject, remaining = self.armed.len(), "trigger fired");
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.armed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_for_its_subject_only() {
        let mut triggers = TriggerList::default();
        let a = SubjectId::from_raw(0);
        let b = SubjectId::from_raw(1);

        triggers.arm(a);
        triggers.arm(a);
        assert_eq!(triggers.len(), 1);

        assert!(!triggers.publish(b));
        assert_eq!(triggers.len(), 1);

        assert!(triggers.publish(a));
        assert_eq!(triggers.len(), 0);
        assert!(!triggers.publish(a));
    }
}
