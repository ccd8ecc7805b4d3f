//! Fixed-width text timeline.
//!
//! ```text
//! Task ID: 1 lifetime: 102.3ms redirects: 0
//! GET https://nrk.no/ -> 200 text/html, through network-load
//! protocol: http/1.1 proxy: false reusedconn: false
//! domain lookup     |######                                                                          |   6.4ms
//! connect           |     #######                                                                    |   7.0ms
//! request           |           #####################                                                |  24.4ms
//! server            |                               ###                                              |   2.2ms
//! response          |                                 ###############################################|  56.8ms
//!                                                                                             total     96.9ms
//! ```

use chrono::TimeDelta;
use tracing::{debug, warn};
use crate::domain::{seconds_between, Layout, Phase, Phases, SessionMetrics, TimeSpan, TransactionMetrics};
use crate::ports::{Printer, Renderer};
use super::TracingPrinter;

/// Spaces between the word `total` and its value on the summary line.
const SUMMARY_GAP: usize = 3;

pub struct ConsoleRenderer {
    layout: Layout,
    printer: Box<dyn Printer>,
}

impl ConsoleRenderer {
    /// Renders with the default layout into the tracing log.
    pub fn new() -> Self {
        Self { layout: Layout::default(), printer: Box::new(TracingPrinter::new()) }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_printer<P: Printer + 'static>(mut self, printer: P) -> Self {
        self.printer = Box::new(printer);
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn render_lines(&self, session: &SessionMetrics) -> Vec<String> {
        let mut lines = vec![self.render_task(session)];
        for transaction in &session.transactions {
            lines.push(self.render_header(transaction));
            lines.push(self.render_meta(transaction));
            if let Some(total) = reference_span(&transaction.phases) {
                for phase in transaction.phases.rows() {
                    lines.push(self.render_duration(&phase, &total));
                }
                lines.push(self.render_summary(&total));
            }
        }
        lines
    }

    pub fn render_to_string(&self, session: &SessionMetrics) -> String {
        self.render_lines(session).join("\n")
    }

    pub fn render_task(&self, session: &SessionMetrics) -> String {
        format!(
            "Task ID: {} lifetime: {} redirects: {}",
            session.task_id,
            format_ms(session.task_span.millis()),
            session.redirect_count
        )
    }

    pub fn render_header(&self, transaction: &TransactionMetrics) -> String {
        let info = &transaction.info;
        let method = info.method.as_deref().unwrap_or("???");
        let url = info.url.as_deref().unwrap_or("???");
        let response = info.response.as_ref()
            .map(|r| r.status_line())
            .unwrap_or_else(|| "[response error]".to_string());
        format!("{} {} -> {}, through {}", method, url, response, info.fetch_type)
    }

    pub fn render_meta(&self, transaction: &TransactionMetrics) -> String {
        let info = &transaction.info;
        format!(
            "protocol: {} proxy: {} reusedconn: {}",
            info.protocol.as_deref().unwrap_or("???"),
            info.proxy,
            info.reused_connection
        )
    }

    /// One row: padded label, bar, right-aligned duration.
    ///
    /// A degenerate reference span, or a phase lying outside it, gets an
    /// empty bar instead of tripping [`ConsoleRenderer::visualize`].
    pub fn render_duration(&self, phase: &Phase, total: &TimeSpan) -> String {
        let label = pad_trailing(phase.kind.name(), self.layout.label_width);
        let bar = if total.is_empty() {
            self.blank_bar()
        } else if !phase.span.intersects(total) {
            warn!(phase = %phase.kind, "phase lies outside the reference span, bar left empty");
            self.blank_bar()
        } else {
            self.visualize(&phase.span, total)
        };
        let duration = pad_leading(&format_ms(phase.span.millis()), self.layout.duration_width);
        format!("{}{}{}", label, bar, duration)
    }

    /// Plots `interval` against `total` on `bar_width - 2` cells between borders.
    ///
    /// # Panics
    ///
    /// If `interval` does not intersect `total`, or if a non-empty interval is
    /// plotted against an empty `total`. Both are caller bugs.
    pub fn visualize(&self, interval: &TimeSpan, total: &TimeSpan) -> String {
        assert!(interval.intersects(total), "supplied interval does not intersect the reference span");

        let width = self.layout.inner_width();
        if interval.is_empty() {
            return self.blank_bar();
        }
        assert!(!total.is_empty(), "reference span has no duration");

        let span = total.seconds();
        let relative_start = seconds_between(total.start(), interval.start()) / span;
        let relative_end = 1.0 - seconds_between(interval.end(), total.end()) / span;

        let factor = 1.0 / width as f64;
        let start_index = (relative_start / factor).floor() as i64;
        let end_index = (relative_end / factor).floor() as i64;

        let cells = (0..width as i64).map(|position| {
            if position >= start_index && position <= end_index { self.layout.fill } else { self.layout.blank }
        });
        self.framed(cells)
    }

    pub fn render_summary(&self, total: &TimeSpan) -> String {
        let value = pad_leading(&format_ms(total.millis()), self.layout.duration_width);
        let text = format!("total{}{}", " ".repeat(SUMMARY_GAP), value);
        pad_leading(&text, self.layout.row_width())
    }

    fn blank_bar(&self) -> String {
        self.framed(std::iter::repeat(self.layout.blank).take(self.layout.inner_width()))
    }

    fn framed(&self, cells: impl Iterator<Item = char>) -> String {
        let mut bar = String::with_capacity(self.layout.bar_width);
        bar.push(self.layout.border);
        bar.extend(cells);
        bar.push(self.layout.border);
        bar
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&self, session: &SessionMetrics) {
        let lines = self.render_lines(session);
        debug!(task_id = %session.task_id, lines = lines.len(), "rendered session");
        self.printer.print(&lines.join("\n"));
    }
}

/// The span bars are scaled against.
///
/// Uses the `total` phase when present. Otherwise a total is synthesized:
/// it starts with the first phase and lasts as long as all phases combined.
/// `None` only for an empty sequence.
pub fn reference_span(phases: &Phases) -> Option<TimeSpan> {
    if let Some(total) = phases.total() {
        return Some(total.span);
    }
    let first = phases.first()?;
    let length = phases.iter().fold(TimeDelta::zero(), |acc, phase| acc + phase.span.duration());
    TimeSpan::starting_at(first.span.start(), length)
}

pub fn format_ms(ms: f64) -> String {
    format!("{:.1}ms", ms)
}

/// Right-aligns `text` in `width` columns, keeping its trailing characters
/// when it does not fit.
pub fn pad_leading(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().skip(len - width).collect()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}

/// Left-aligns `text` in `width` columns, cutting the tail when it does not fit.
pub fn pad_trailing(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FetchType, PhaseKind, ResponseSummary, TimePoint, TransactionInfo};
    use chrono::{TimeZone, Utc};

    fn now() -> TimePoint {
        Utc.timestamp_opt(1_491_472_800, 0).unwrap()
    }

    fn ago(seconds: i64) -> TimePoint {
        now() - TimeDelta::seconds(seconds)
    }

    fn span(from: i64, to: i64) -> TimeSpan {
        TimeSpan::new(ago(from), ago(to)).unwrap()
    }

    fn transaction() -> TransactionMetrics {
        let info = TransactionInfo {
            method: Some("GET".into()),
            url: Some("http://example.com".into()),
            response: Some(ResponseSummary::new(200, Some("text/plain".into()))),
            protocol: Some("HTTP/1.1".into()),
            proxy: false,
            reused_connection: false,
            fetch_type: FetchType::NetworkLoad,
        };
        TransactionMetrics::new(info, Phases::new(), 0)
    }

    fn interior(bar: &str) -> String {
        let chars: Vec<char> = bar.chars().collect();
        assert_eq!(chars.first(), Some(&'|'));
        assert_eq!(chars.last(), Some(&'|'));
        chars[1..chars.len() - 1].iter().collect()
    }

    #[test]
    fn header() {
        let output = ConsoleRenderer::new().render_header(&transaction());
        assert_eq!(output, "GET http://example.com -> 200 text/plain, through network-load");
    }

    #[test]
    fn header_placeholders() {
        let mut tx = transaction();
        tx.info.method = None;
        tx.info.url = None;
        tx.info.response = None;
        tx.info.fetch_type = FetchType::LocalCache;
        let output = ConsoleRenderer::new().render_header(&tx);
        assert_eq!(output, "??? ??? -> [response error], through local-cache");
    }

    #[test]
    fn meta() {
        let output = ConsoleRenderer::new().render_meta(&transaction());
        assert_eq!(output, "protocol: HTTP/1.1 proxy: false reusedconn: false");

        let mut tx = transaction();
        tx.info.protocol = None;
        tx.info.proxy = true;
        tx.info.reused_connection = true;
        assert_eq!(ConsoleRenderer::new().render_meta(&tx), "protocol: ??? proxy: true reusedconn: true");
    }

    #[test]
    fn duration_row() {
        let phase = Phase::new(PhaseKind::DomainLookup, span(3, 2));
        let output = ConsoleRenderer::new().render_duration(&phase, &span(3, 0));
        let expected = format!("domain lookup     |{}{}|1000.0ms", "#".repeat(27), " ".repeat(53));
        assert_eq!(output, expected);
        assert_eq!(output.chars().count(), 108);
    }

    #[test]
    fn synthesized_reference_span() {
        let phases: Phases = [
            Phase::new(PhaseKind::Request, span(3, 2)),
            Phase::new(PhaseKind::Response, span(2, 1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(reference_span(&phases), Some(span(3, 1)));
    }

    #[test]
    fn synthesized_span_sums_durations_across_gaps() {
        let phases: Phases = [
            Phase::new(PhaseKind::Connect, span(10, 8)),
            Phase::new(PhaseKind::Request, span(4, 3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(reference_span(&phases), Some(span(10, 7)));
    }

    #[test]
    fn total_phase_wins_over_synthesis() {
        let phases: Phases = [
            Phase::new(PhaseKind::Request, span(3, 2)),
            Phase::new(PhaseKind::Total, span(5, 0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(reference_span(&phases), Some(span(5, 0)));
        assert_eq!(reference_span(&Phases::new()), None);
    }

    #[test]
    fn summary() {
        let output = ConsoleRenderer::new().render_summary(&span(3, 0));
        assert_eq!(output, format!("{}total   3000.0ms", " ".repeat(92)));
    }

    #[test]
    fn summary_value_lines_up_with_duration_column() {
        let total = TimeSpan::starting_at(now(), TimeDelta::microseconds(2_500)).unwrap();
        let output = ConsoleRenderer::new().render_summary(&total);
        assert!(output.ends_with("total      2.5ms"));
        assert_eq!(output.len(), 108);
    }

    #[test]
    fn full_span_fills_every_cell() {
        let bar = ConsoleRenderer::new().visualize(&span(3, 0), &span(3, 0));
        assert_eq!(interior(&bar), "#".repeat(80));
    }

    #[test]
    fn empty_interval_renders_blank() {
        let bar = ConsoleRenderer::new().visualize(&span(2, 2), &span(3, 0));
        assert_eq!(interior(&bar), " ".repeat(80));
    }

    #[test]
    fn first_slice_fills_one_cell() {
        let total = TimeSpan::starting_at(now(), TimeDelta::milliseconds(82)).unwrap();
        let slice = TimeSpan::starting_at(now(), TimeDelta::milliseconds(1)).unwrap();
        let bar = ConsoleRenderer::new().visualize(&slice, &total);
        let cells = interior(&bar);
        assert_eq!(cells.matches('#').count(), 1);
        assert!(cells.starts_with('#'));
    }

    #[test]
    fn tail_slice_reaches_last_cell() {
        let bar = ConsoleRenderer::new().visualize(&span(1, 0), &span(4, 0));
        let cells = interior(&bar);
        assert_eq!(cells, format!("{}{}", " ".repeat(60), "#".repeat(20)));
    }

    #[test]
    #[should_panic(expected = "does not intersect")]
    fn disjoint_interval_is_a_contract_violation() {
        ConsoleRenderer::new().visualize(&span(10, 9), &span(3, 0));
    }

    #[test]
    fn rows_outside_reference_span_are_left_empty() {
        let phase = Phase::new(PhaseKind::Request, span(10, 9));
        let output = ConsoleRenderer::new().render_duration(&phase, &span(3, 0));
        assert!(output.contains(&format!("|{}|", " ".repeat(80))));
    }

    #[test]
    fn empty_reference_span_renders_empty_bar() {
        let phase = Phase::new(PhaseKind::Response, span(1, 1));
        let output = ConsoleRenderer::new().render_duration(&phase, &span(1, 1));
        assert_eq!(output, format!("response          |{}|   0.0ms", " ".repeat(80)));
    }

    #[test]
    fn custom_glyphs_and_widths() {
        let layout = Layout { label_width: 4, bar_width: 6, duration_width: 6, fill: '=', blank: '.', border: '!' };
        let renderer = ConsoleRenderer::new().with_layout(layout);
        let phase = Phase::new(PhaseKind::Request, span(4, 2));
        assert_eq!(renderer.render_duration(&phase, &span(4, 0)), "requ!===.!00.0ms");
    }

    #[test]
    fn padding_rules() {
        assert_eq!(pad_leading("1000.0ms", 8), "1000.0ms");
        assert_eq!(pad_leading("2.5ms", 8), "   2.5ms");
        assert_eq!(pad_leading("12345.6ms", 8), "2345.6ms");
        assert_eq!(pad_trailing("connect", 10), "connect   ");
        assert_eq!(pad_trailing("secure connection handshake", 18), "secure connection ");
    }

    #[test]
    fn lines_for_a_full_transaction() {
        let mut tx = transaction();
        tx.phases = [
            Phase::new(PhaseKind::Request, span(4, 3)),
            Phase::new(PhaseKind::Server, span(3, 2)),
            Phase::new(PhaseKind::Response, span(2, 1)),
            Phase::new(PhaseKind::Total, span(4, 1)),
        ]
        .into_iter()
        .collect();
        let session = SessionMetrics::new("1", vec![tx], 0, span(5, 0));
        let lines = ConsoleRenderer::new().render_lines(&session);

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Task ID: 1 lifetime: 5000.0ms redirects: 0");
        assert!(lines[3].starts_with("request           |"));
        assert!(lines[4].starts_with("server            |"));
        assert!(lines[5].starts_with("response          |"));
        assert!(lines[6].ends_with("total   3000.0ms"));
    }
}
