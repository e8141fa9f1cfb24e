//! JSON manifests.
//!
//! A manifest lists interfaces and subjects. Each subject is replayed as one
//! definition: every inner `implements` array is one declaration, methods
//! are attached, and the definition is finished.
//!
//! ```json
//! {
//!   "universal_base": ["new"],
//!   "interfaces": [
//!     { "name": "Fooable", "instance_methods": { "foo": "" } }
//!   ],
//!   "subjects": [
//!     { "name": "Good", "implements": [["Fooable"]], "instance_methods": { "foo": "" } }
//!   ]
//! }
//! ```
//!
//! Method maps keep their order from the file, which is the order missing
//! methods are reported in.

mod methods;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ifc_check::{
    CheckOptions, ConformanceError, Interface, SignaturePolicy, TypeSpace, UniversalBase,
};
use ifc_diagnostic::{Diagnostic, ErrorCode};
use ifc_ir::{Name, Signature, SignatureError};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use tracing::debug;

pub use methods::MethodList;

/// Why a manifest could not be checked.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{subject}` declares unknown interface `{interface}`")]
    UnknownInterface { subject: String, interface: String },

    #[error("{kind} `{name}` is defined more than once")]
    Duplicate { kind: &'static str, name: String },

    #[error("`{method}`: {source}")]
    Signature {
        method: String,
        #[source]
        source: SignatureError,
    },
}

impl ManifestError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ManifestError::Io { .. } | ManifestError::Json(_) => ErrorCode::E2004,
            ManifestError::UnknownInterface { .. } => ErrorCode::E2002,
            ManifestError::Duplicate { .. } => ErrorCode::E2003,
            ManifestError::Signature { .. } => ErrorCode::E2001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ManifestError::UnknownInterface { subject, interface } => diag
                .with_label(interface.as_str(), "not defined in this manifest")
                .with_secondary_label(subject.as_str(), "declared here")
                .with_suggestion(format!("add `{interface}` to the `interfaces` list")),
            ManifestError::Duplicate { name, .. } => {
                diag.with_label(name.as_str(), "defined again here")
            }
            ManifestError::Signature { method, .. } => diag
                .with_label(method.as_str(), "in this signature")
                .with_note(
                    "parameters go in the order: req, opt = v, *rest, req, key:, key: v, **opts, &block",
                ),
            ManifestError::Io { .. } | ManifestError::Json(_) => diag,
        }
    }
}

/// A parsed manifest.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Class-level methods every subject already has.
    #[serde(default)]
    pub universal_base: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceEntry>,
    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceEntry {
    pub name: String,
    #[serde(default)]
    pub class_methods: MethodList,
    #[serde(default)]
    pub instance_methods: MethodList,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectEntry {
    pub name: String,
    /// One inner list per declaration.
    #[serde(default)]
    pub implements: Vec<Vec<String>>,
    #[serde(default)]
    pub class_methods: MethodList,
    #[serde(default)]
    pub instance_methods: MethodList,
}

/// What checking a manifest found, one entry per subject in file order.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub outcomes: Vec<(Name, Result<(), ConformanceError>)>,
}

impl CheckReport {
    pub fn failures(&self) -> impl Iterator<Item = &ConformanceError> {
        self.outcomes.iter().filter_map(|(_, r)| r.as_ref().err())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

impl Manifest {
    pub fn from_json(src: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let src = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&src)
    }

    /// Build every interface, keyed by name.
    pub fn build_interfaces(&self) -> Result<FxHashMap<&str, Arc<Interface>>, ManifestError> {
        let mut built = FxHashMap::default();
        for entry in &self.interfaces {
            let mut builder = Interface::build(entry.name.as_str());
            for (method, src) in entry.class_methods.iter() {
                let signature = parse_signature(&format!("{}.{method}", entry.name), src)?;
                builder = builder.class_method(method, signature);
            }
            for (method, src) in entry.instance_methods.iter() {
                let signature = parse_signature(&format!("{}#{method}", entry.name), src)?;
                builder = builder.instance_method(method, signature);
            }
            if built.insert(entry.name.as_str(), builder.finish()).is_some() {
                return Err(ManifestError::Duplicate {
                    kind: "interface",
                    name: entry.name.clone(),
                });
            }
        }
        Ok(built)
    }

    pub fn check_options(&self, policy: SignaturePolicy) -> CheckOptions {
        CheckOptions::default()
            .with_policy(policy)
            .with_universal_base(
                self.universal_base
                    .iter()
                    .map(String::as_str)
                    .collect::<UniversalBase>(),
            )
    }

    /// Replay every subject definition and collect the outcomes.
    ///
    /// Manifest problems abort the whole run; conformance failures are
    /// collected per subject.
    #[tracing::instrument(level = "debug", skip_all, fields(subjects = self.subjects.len()))]
    pub fn check(&self, policy: SignaturePolicy) -> Result<CheckReport, ManifestError> {
        let interfaces = self.build_interfaces()?;
        let mut space = TypeSpace::with_options(self.check_options(policy));
        let mut seen = FxHashSet::default();
        let mut report = CheckReport::default();

        for subject in &self.subjects {
            if !seen.insert(subject.name.as_str()) {
                return Err(ManifestError::Duplicate {
                    kind: "subject",
                    name: subject.name.clone(),
                });
            }

            let mut def = space.define(subject.name.as_str());
            for group in &subject.implements {
                let resolved = group
                    .iter()
                    .map(|name| {
                        interfaces.get(name.as_str()).cloned().ok_or_else(|| {
                            ManifestError::UnknownInterface {
                                subject: subject.name.clone(),
                                interface: name.clone(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                def = def.implements(&resolved);
            }
            for (method, src) in subject.class_methods.iter() {
                let signature = parse_signature(&format!("{}.{method}", subject.name), src)?;
                def = def.class_method(method, signature);
            }
            for (method, src) in subject.instance_methods.iter() {
                let signature = parse_signature(&format!("{}#{method}", subject.name), src)?;
                def = def.instance_method(method, signature);
            }

            let outcome = def.finish().map(|_| ());
            debug!(subject = %subject.name, conforms = outcome.is_ok(), "subject checked");
            report.outcomes.push((Name::from(subject.name.as_str()), outcome));
        }

        Ok(report)
    }
}

fn parse_signature(method: &str, src: &str) -> Result<Signature, ManifestError> {
    Signature::parse(src).map_err(|source| ManifestError::Signature {
        method: method.to_string(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
