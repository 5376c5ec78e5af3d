//! Protocol-independent permission evaluation.
//!
//! Both protocol adapters derive the same `(Verb, CanonicalResource)` pair
//! for semantically identical operations, so one rule set answers for both
//! surfaces. The rule list is built once at startup and walked in a fixed
//! order, first match wins; evaluation is pure and deterministic.

use std::fmt;

use axum::http::Method;

use super::Principal;

/// Canonical method token shared by both protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Idempotent, non-mutating read.
    Get,
    /// Create a new resource.
    Create,
    /// Replace an existing resource.
    Update,
    /// Remove a resource.
    Delete,
}

impl Verb {
    /// Whether this verb is a read (idempotent, non-mutating).
    pub fn is_read(self) -> bool {
        matches!(self, Verb::Get)
    }

    /// Derives the canonical verb from an HTTP method, or `None` for
    /// methods the gateway does not serve.
    pub fn from_http(method: &Method) -> Option<Verb> {
        match *method {
            Method::GET => Some(Verb::Get),
            Method::POST => Some(Verb::Create),
            Method::PUT => Some(Verb::Update),
            Method::DELETE => Some(Verb::Delete),
            _ => None,
        }
    }

    /// Lowercase token for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Delete => "delete",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource kinds the gateway knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Managed applications.
    Applications,
    /// Server settings.
    Settings,
    /// Liveness endpoint.
    Health,
    /// Build version endpoint.
    Version,
    /// Anything else; always behind the default deny.
    Unknown,
}

impl ResourceKind {
    /// Maps the leading path segment (or RPC noun) to a kind.
    pub fn from_segment(segment: &str) -> ResourceKind {
        match segment {
            "applications" => ResourceKind::Applications,
            "settings" => ResourceKind::Settings,
            "health" => ResourceKind::Health,
            "version" => ResourceKind::Version,
            _ => ResourceKind::Unknown,
        }
    }

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Applications => "applications",
            ResourceKind::Settings => "settings",
            ResourceKind::Health => "health",
            ResourceKind::Version => "version",
            ResourceKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protocol-independent resource identifier: kind plus optional name.
///
/// Equal canonical resources must come out of both protocols for the same
/// semantic operation; permission decisions only ever see this shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalResource {
    /// Resource kind.
    pub kind: ResourceKind,
    /// Specific resource name, when the operation targets one.
    pub name: Option<String>,
}

impl CanonicalResource {
    /// A whole-collection resource.
    pub fn collection(kind: ResourceKind) -> Self {
        Self { kind, name: None }
    }

    /// A named resource.
    pub fn named(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
        }
    }

    /// Derives the canonical resource from a request path. The first
    /// segment selects the kind, the second (if any) is the name.
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let kind = segments
            .next()
            .map(ResourceKind::from_segment)
            .unwrap_or(ResourceKind::Unknown);
        let name = segments.next().map(str::to_string);
        Self { kind, name }
    }
}

impl fmt::Display for CanonicalResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}/{}", self.kind, name),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// One allow rule. Anything no rule admits is denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionRule {
    /// Admins may do anything.
    AdminBypass,
    /// Open to everyone, authenticated or not.
    PublicAllow {
        /// Admitted verb.
        verb: Verb,
        /// Admitted kind.
        kind: ResourceKind,
    },
    /// Any authenticated principal may read this kind.
    ReaderAccess {
        /// Readable kind.
        kind: ResourceKind,
    },
}

impl PermissionRule {
    fn allows(&self, principal: Option<&Principal>, verb: Verb, resource: &CanonicalResource) -> bool {
        match self {
            PermissionRule::AdminBypass => principal.is_some_and(|p| p.is_admin),
            PermissionRule::PublicAllow { verb: v, kind } => {
                *v == verb && *kind == resource.kind
            }
            PermissionRule::ReaderAccess { kind } => {
                principal.is_some() && verb.is_read() && *kind == resource.kind
            }
        }
    }
}

/// Ordered rule set, built once at startup and read concurrently.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    rules: Vec<PermissionRule>,
}

impl PermissionEvaluator {
    /// The stock policy: admin bypass, then the public allow-list, then
    /// reader access to applications and settings, then default deny.
    pub fn with_defaults() -> Self {
        Self {
            rules: vec![
                PermissionRule::AdminBypass,
                PermissionRule::PublicAllow {
                    verb: Verb::Get,
                    kind: ResourceKind::Health,
                },
                PermissionRule::PublicAllow {
                    verb: Verb::Get,
                    kind: ResourceKind::Version,
                },
                PermissionRule::ReaderAccess {
                    kind: ResourceKind::Applications,
                },
                PermissionRule::ReaderAccess {
                    kind: ResourceKind::Settings,
                },
            ],
        }
    }

    /// A custom rule order, for deployments with a different policy.
    pub fn with_rules(rules: Vec<PermissionRule>) -> Self {
        Self { rules }
    }

    /// Whether the principal may perform `verb` on `resource`.
    ///
    /// Walks the rules in order; the first rule that admits the request
    /// wins, and nothing admits means deny.
    pub fn evaluate(&self, principal: &Principal, verb: Verb, resource: &CanonicalResource) -> bool {
        for rule in &self.rules {
            if rule.allows(Some(principal), verb, resource) {
                return true;
            }
        }
        false
    }

    /// Whether the public allow-list admits `(verb, resource)` without any
    /// principal. Only `PublicAllow` rules are consulted; anonymous
    /// requests never reach reader or admin rules.
    pub fn allows_public(&self, verb: Verb, resource: &CanonicalResource) -> bool {
        self.rules
            .iter()
            .filter(|rule| matches!(rule, PermissionRule::PublicAllow { .. }))
            .any(|rule| rule.allows(None, verb, resource))
    }
}
