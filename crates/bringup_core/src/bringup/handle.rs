use std::fmt;
use std::sync::Arc;

use crate::error::{CoreError, Domain, ErrorKind, Payload, Result};

/// Identity of one managed node (process + lifecycle state machine).
///
/// Two handles are equal when their fully-qualified names are equal.
/// Clones share the same name allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManagedNodeHandle {
    fqn: Arc<str>,
}

impl ManagedNodeHandle {
    /// Build a handle from a namespace (may be empty) and a node name.
    ///
    /// Empty namespace segments are dropped, so `a//b/` and `/a/b` are the same namespace.
    pub fn new(namespace: &str, name: &str) -> Result<Self> {
        if name.is_empty() || name.contains('/') {
            return Err(CoreError::error()
                .domain(Domain::Config)
                .kind(ErrorKind::InvalidArgument)
                .msg("node name must be non-empty and must not contain '/'")
                .payload(Payload::Context {
                    key: "name",
                    value: name.to_string().into(),
                })
                .build());
        }

        let segments: Vec<&str> = namespace.split('/').filter(|s| !s.is_empty()).collect();
        let fqn = if segments.is_empty() {
            format!("/{name}")
        } else {
            format!("/{}/{name}", segments.join("/"))
        };

        Ok(Self { fqn: fqn.into() })
    }

    /// Fully-qualified node name, e.g. `/sensing/pe_ars408_node`.
    pub fn fqn(&self) -> &str {
        &self.fqn
    }

    pub fn name(&self) -> &str {
        self.fqn.rsplit('/').next().unwrap_or(&self.fqn)
    }
}

impl fmt::Display for ManagedNodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqn)
    }
}
