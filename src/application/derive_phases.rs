use tracing::{debug, warn};
use crate::domain::{PhaseKind, Phases, TimePoint, TimeSpan};
use crate::ports::Measurable;

/// Turns raw timestamp pairs into the ordered phase sequence of a transaction.
///
/// Primitive phases are kept only when both of their timestamps are present.
/// `total` runs from domain lookup start to response end. `server` is the gap
/// between the end of a non-empty request and the start of the response.
pub fn derive_phases<M: Measurable + ?Sized>(metrics: &M) -> Phases {
    let mut phases = Phases::new();

    for kind in PhaseKind::PRIMITIVE {
        let (start, end) = primitive_bounds(metrics, kind);
        if let Some(span) = measured_span(kind, start, end) {
            phases.insert(kind, span);
        }
    }

    if let Some(span) = measured_span(PhaseKind::Total, metrics.domain_lookup_start(), metrics.response_end()) {
        phases.insert(PhaseKind::Total, span);
    }

    if let Some(span) = server_span(&phases) {
        phases.insert(PhaseKind::Server, span);
    }

    phases
}

fn primitive_bounds<M: Measurable + ?Sized>(metrics: &M, kind: PhaseKind) -> (Option<TimePoint>, Option<TimePoint>) {
    match kind {
        PhaseKind::DomainLookup => (metrics.domain_lookup_start(), metrics.domain_lookup_end()),
        PhaseKind::Connect => (metrics.connect_start(), metrics.connect_end()),
        PhaseKind::SecureConnection => (metrics.secure_connection_start(), metrics.secure_connection_end()),
        PhaseKind::Request => (metrics.request_start(), metrics.request_end()),
        PhaseKind::Response => (metrics.response_start(), metrics.response_end()),
        PhaseKind::Server | PhaseKind::Total => (None, None),
    }
}

fn measured_span(kind: PhaseKind, start: Option<TimePoint>, end: Option<TimePoint>) -> Option<TimeSpan> {
    let (Some(start), Some(end)) = (start, end) else {
        debug!(phase = %kind, "timestamps absent, phase skipped");
        return None;
    };
    let span = TimeSpan::new(start, end);
    if span.is_none() {
        warn!(phase = %kind, %start, %end, "phase ends before it starts, dropped");
    }
    span
}

fn server_span(phases: &Phases) -> Option<TimeSpan> {
    let request = phases.get(PhaseKind::Request)?;
    let response = phases.get(PhaseKind::Response)?;

    if request.span.is_empty() {
        debug!("zero-length request, server phase not derived");
        return None;
    }

    let span = TimeSpan::new(request.span.end(), response.span.start());
    if span.is_none() {
        debug!("response started before request finished, server phase not derived");
    }
    span
}
