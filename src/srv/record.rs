//! SRV records and their precedence order.

use std::cmp::Ordering;

use serde::Serialize;

/// One SRV answer.
///
/// `target` is stored lowercased and fully qualified; `(target, port)` is the
/// endpoint identity used for collision checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SrvRecord {
    target: String,
    port: u16,
    priority: u16,
    weight: u16,
}

impl SrvRecord {
    pub fn new(target: impl Into<String>, port: u16, priority: u16, weight: u16) -> Self {
        let mut target = target.into().to_ascii_lowercase();
        if !target.ends_with('.') {
            target.push('.');
        }
        Self {
            target,
            port,
            priority,
            weight,
        }
    }

    /// Fully qualified target, trailing dot included.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Target for display, trailing dot stripped.
    pub fn display_target(&self) -> &str {
        self.target.strip_suffix('.').unwrap_or(&self.target)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// `(target, port)` endpoint identity.
    pub fn endpoint(&self) -> (&str, u16) {
        (&self.target, self.port)
    }
}

/// Precedence order: lowest priority first, then highest weight. Target and
/// port only break remaining ties so output is reproducible.
impl Ord for SrvRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.weight.cmp(&self.weight))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.port.cmp(&other.port))
    }
}

impl PartialOrd for SrvRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorts records into precedence order.
pub fn sort_records(mut records: Vec<SrvRecord>) -> Vec<SrvRecord> {
    records.sort();
    records
}
