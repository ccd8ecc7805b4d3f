use std::collections::BTreeMap;
use std::fmt;

use super::TimeSpan;

/// Phases of a transaction, declared in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhaseKind {
    DomainLookup,
    Connect,
    SecureConnection,
    Request,
    Server,
    Response,
    Total,
}

impl PhaseKind {
    /// Phases measured directly by the network stack.
    pub const PRIMITIVE: [PhaseKind; 5] = [
        PhaseKind::DomainLookup,
        PhaseKind::Connect,
        PhaseKind::SecureConnection,
        PhaseKind::Request,
        PhaseKind::Response,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PhaseKind::DomainLookup => "domain lookup",
            PhaseKind::Connect => "connect",
            PhaseKind::SecureConnection => "secure connection",
            PhaseKind::Request => "request",
            PhaseKind::Server => "server",
            PhaseKind::Response => "response",
            PhaseKind::Total => "total",
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, PhaseKind::Server | PhaseKind::Total)
    }

    /// `total` only scales the other rows and feeds the summary line.
    pub fn is_row(&self) -> bool {
        !matches!(self, PhaseKind::Total)
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub span: TimeSpan,
}

impl Phase {
    pub fn new(kind: PhaseKind, span: TimeSpan) -> Self {
        Self { kind, span }
    }
}

/// Ordered phase sequence of one transaction.
///
/// Keyed by [`PhaseKind`], so iteration always follows kind order no matter
/// when a phase was inserted. A derived `server` phase added after `response`
/// still comes out between `request` and `response`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phases {
    entries: BTreeMap<PhaseKind, TimeSpan>,
}

impl Phases {
    pub fn new() -> Self { Self::default() }

    /// Stores `span` under `kind`, returning the span it replaced.
    pub fn insert(&mut self, kind: PhaseKind, span: TimeSpan) -> Option<TimeSpan> {
        self.entries.insert(kind, span)
    }

    pub fn get(&self, kind: PhaseKind) -> Option<Phase> {
        self.entries.get(&kind).map(|span| Phase::new(kind, *span))
    }

    pub fn contains(&self, kind: PhaseKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = Phase> + '_ {
        self.entries.iter().map(|(kind, span)| Phase::new(*kind, *span))
    }

    /// Phases that get a bar row, i.e. everything except `total`.
    pub fn rows(&self) -> impl Iterator<Item = Phase> + '_ {
        self.iter().filter(|phase| phase.kind.is_row())
    }

    pub fn kinds(&self) -> Vec<PhaseKind> {
        self.entries.keys().copied().collect()
    }

    pub fn first(&self) -> Option<Phase> {
        self.iter().next()
    }

    pub fn total(&self) -> Option<Phase> {
        self.get(PhaseKind::Total)
    }
}

impl FromIterator<Phase> for Phases {
    fn from_iter<I: IntoIterator<Item = Phase>>(iter: I) -> Self {
        let mut phases = Phases::new();
        for phase in iter {
            phases.insert(phase.kind, phase.span);
        }
        phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimePoint;
    use chrono::{TimeZone, Utc};

    fn t(s: i64) -> TimePoint {
        Utc.timestamp_opt(1_491_472_800 + s, 0).unwrap()
    }

    fn span(a: i64, b: i64) -> TimeSpan {
        TimeSpan::new(t(a), t(b)).unwrap()
    }

    #[test]
    fn late_insertion_lands_in_kind_order() {
        let mut phases = Phases::new();
        phases.insert(PhaseKind::Request, span(0, 1));
        phases.insert(PhaseKind::Response, span(2, 3));
        phases.insert(PhaseKind::Total, span(0, 3));
        phases.insert(PhaseKind::Server, span(1, 2));

        assert_eq!(
            phases.kinds(),
            vec![PhaseKind::Request, PhaseKind::Server, PhaseKind::Response, PhaseKind::Total]
        );
    }

    #[test]
    fn rows_skip_total() {
        let phases: Phases = [
            Phase::new(PhaseKind::Total, span(0, 4)),
            Phase::new(PhaseKind::DomainLookup, span(0, 1)),
        ]
        .into_iter()
        .collect();

        let rows: Vec<PhaseKind> = phases.rows().map(|p| p.kind).collect();
        assert_eq!(rows, vec![PhaseKind::DomainLookup]);
        assert_eq!(phases.total().map(|p| p.span), Some(span(0, 4)));
        assert_eq!(phases.first().map(|p| p.kind), Some(PhaseKind::DomainLookup));
    }

    #[test]
    fn each_kind_is_stored_once() {
        let mut phases = Phases::new();
        assert!(phases.insert(PhaseKind::Connect, span(0, 1)).is_none());
        assert_eq!(phases.insert(PhaseKind::Connect, span(1, 2)), Some(span(0, 1)));
        assert_eq!(phases.len(), 1);
    }

    #[test]
    fn names_match_row_labels() {
        assert_eq!(PhaseKind::DomainLookup.to_string(), "domain lookup");
        assert_eq!(PhaseKind::SecureConnection.name(), "secure connection");
        assert!(PhaseKind::Server.is_derived());
        assert!(!PhaseKind::Request.is_derived());
    }
}
