use bringup_core::error::{CoreError, Severity};

/// Emit a core error at the tracing level matching its severity.
pub fn log_core_error(err: &CoreError) {
    match err.severity {
        Severity::Trace => tracing::trace!(domain = ?err.domain, kind = ?err.kind, "{err}"),
        Severity::Debug => tracing::debug!(domain = ?err.domain, kind = ?err.kind, "{err}"),
        Severity::Info => tracing::info!(domain = ?err.domain, kind = ?err.kind, "{err}"),
        Severity::Warn => tracing::warn!(domain = ?err.domain, kind = ?err.kind, "{err}"),
        Severity::Error | Severity::Fatal => {
            tracing::error!(domain = ?err.domain, kind = ?err.kind, "{err}")
        }
    }
}
