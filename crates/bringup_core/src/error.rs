use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Convenient result alias for bringup_core.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Log/handling importance. Maps onto logging levels in the adapter crates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Where an error came from (helps triage and routing).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Domain {
    /// Lifecycle state machine (invalid transitions, unknown states).
    Lifecycle,
    /// Bring-up setup: rule registration, guards, handles.
    Config,
    /// Delivery of requests/events to the lifecycle runtime.
    Transport,
    Other,
}

/// Stable error "kind" for matching/branching.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidTransition,
    AlreadyRegistered,
    NotRegistered,
    Transport,
    Other,
}

/// Optional structured payload for rich context without forcing allocation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Payload {
    None,

    /// Generic key/value context (usually no heap alloc if using &str).
    Context {
        key: &'static str,
        value: Cow<'static, str>,
    },

    /// Lifecycle-specific context (ROS state / transition ids).
    LifecycleTransition {
        from_state: u8,
        via_transition: u8,
    },

    /// Fully-qualified name of the managed node involved.
    Node(Cow<'static, str>),
}

/// The one error type that crosses module boundaries in bringup_core.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{severity:?}: {message}")]
pub struct CoreError {
    pub domain: Domain,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: Cow<'static, str>,
    pub payload: Payload,
}

impl CoreError {
    // ---------------- Fluent entry points ----------------

    #[inline]
    pub fn warn() -> ErrB {
        ErrB::new(Severity::Warn)
    }
    #[inline]
    pub fn error() -> ErrB {
        ErrB::new(Severity::Error)
    }

    /// Construct a lifecycle InvalidTransition error with structured context.
    pub fn invalid_transition_lifecycle(from_state: u8, via_transition: u8) -> Self {
        CoreError::warn()
            .domain(Domain::Lifecycle)
            .kind(ErrorKind::InvalidTransition)
            .msg("invalid lifecycle transition")
            .payload(Payload::LifecycleTransition {
                from_state,
                via_transition,
            })
            .build()
    }

    /// Rules were already installed for this node.
    pub fn already_registered(node: &str) -> Self {
        CoreError::error()
            .domain(Domain::Config)
            .kind(ErrorKind::AlreadyRegistered)
            .msgf(format_args!("bring-up rules already registered for {node}"))
            .payload(Payload::Node(node.to_string().into()))
            .build()
    }

    /// A configuration value that could not be resolved.
    pub fn invalid_config(key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        let value = value.into();
        CoreError::error()
            .domain(Domain::Config)
            .kind(ErrorKind::InvalidArgument)
            .msgf(format_args!("invalid value {value:?} for {key}"))
            .payload(Payload::Context { key, value })
            .build()
    }

    /// True for errors raised while setting up a bring-up (fatal to that node's setup).
    pub fn is_configuration_error(&self) -> bool {
        self.domain == Domain::Config
    }
}

/// Fluent builder that behaves like iterator chains (takes self, returns Self).
/// Defaults:
/// - domain = Other
/// - kind = Other
/// - message = ""
/// - payload = None
#[derive(Debug, Clone)]
pub struct ErrB {
    domain: Domain,
    kind: ErrorKind,
    severity: Severity,
    message: Cow<'static, str>,
    payload: Payload,
}

impl ErrB {
    #[inline]
    fn new(severity: Severity) -> Self {
        Self {
            domain: Domain::Other,
            kind: ErrorKind::Other,
            severity,
            message: Cow::Borrowed(""),
            payload: Payload::None,
        }
    }

    #[inline]
    pub fn domain(mut self, d: Domain) -> Self {
        self.domain = d;
        self
    }

    #[inline]
    pub fn kind(mut self, k: ErrorKind) -> Self {
        self.kind = k;
        self
    }

    #[inline]
    pub fn msg(mut self, m: impl Into<Cow<'static, str>>) -> Self {
        self.message = m.into();
        self
    }

    /// Formatting-friendly message setter.
    #[inline]
    pub fn msgf(mut self, args: fmt::Arguments<'_>) -> Self {
        self.message = Cow::Owned(args.to_string());
        self
    }

    /// Only one payload: this replaces any previous payload.
    #[inline]
    pub fn payload(mut self, p: Payload) -> Self {
        self.payload = p;
        self
    }

    #[inline]
    pub fn build(self) -> CoreError {
        CoreError {
            domain: self.domain,
            kind: self.kind,
            severity: self.severity,
            message: self.message,
            payload: self.payload,
        }
    }
}
