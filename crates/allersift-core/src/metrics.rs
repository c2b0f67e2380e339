//! Latency/throughput telemetry for one inference call.
//!
//! Pure derivations over wall-clock durations captured at phase boundaries.
//! Every metric is independently optional: `-1` means "not measured" and is
//! distinct from a genuine zero-millisecond duration.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Sentinel for a metric whose denominator was never observable.
pub const UNMEASURED: i64 = -1;

/// The four derived metrics, computed once per call and immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Time-to-first-token since call start (ms).
    pub ttft_ms: i64,
    /// Input tokens per second over the prefill pass.
    pub itps: i64,
    /// Output tokens per second over the decode loop.
    pub otps: i64,
    /// Decode loop elapsed time (ms).
    pub oet_ms: i64,
}

impl MetricsReport {
    pub fn unmeasured() -> Self {
        Self {
            ttft_ms: UNMEASURED,
            itps: UNMEASURED,
            otps: UNMEASURED,
            oet_ms: UNMEASURED,
        }
    }

    /// Wire form: `TTFT_MS=<i>;ITPS=<i>;OTPS=<i>;OET_MS=<i>`.
    pub fn render(&self) -> String {
        format!(
            "TTFT_MS={};ITPS={};OTPS={};OET_MS={}",
            self.ttft_ms, self.itps, self.otps, self.oet_ms
        )
    }

    /// Inverse of [`render`](Self::render); `None` on malformed input.
    /// Host apps split the metrics section on `;` and `=` the same way.
    pub fn parse(meta: &str) -> Option<Self> {
        let mut report = Self::unmeasured();
        let mut seen = 0u8;
        for field in meta.split(';') {
            let (key, value) = field.split_once('=')?;
            let value: i64 = value.parse().ok()?;
            match key {
                "TTFT_MS" => report.ttft_ms = value,
                "ITPS" => report.itps = value,
                "OTPS" => report.otps = value,
                "OET_MS" => report.oet_ms = value,
                _ => return None,
            }
            seen += 1;
        }
        (seen == 4).then_some(report)
    }
}

/// Milliseconds elapsed since `since`, saturating into `i64`.
pub fn elapsed_ms(since: Instant) -> i64 {
    since.elapsed().as_millis().min(i64::MAX as u128) as i64
}

/// `count` tokens over `elapsed` milliseconds, as tokens/second.
/// Unmeasurable when no time was observed.
pub fn rate_per_second(count: usize, elapsed: i64) -> i64 {
    if elapsed > 0 {
        (count as i64).saturating_mul(1000) / elapsed
    } else {
        UNMEASURED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_matches_wire_grammar() {
        let report = MetricsReport {
            ttft_ms: 120,
            itps: 85,
            otps: 12,
            oet_ms: 990,
        };
        assert_eq!(report.render(), "TTFT_MS=120;ITPS=85;OTPS=12;OET_MS=990");
    }

    #[test]
    fn unmeasured_renders_sentinels() {
        assert_eq!(
            MetricsReport::unmeasured().render(),
            "TTFT_MS=-1;ITPS=-1;OTPS=-1;OET_MS=-1"
        );
    }

    #[test]
    fn parse_is_inverse_of_render() {
        let report = MetricsReport {
            ttft_ms: 42,
            itps: -1,
            otps: 7,
            oet_ms: 0,
        };
        assert_eq!(MetricsReport::parse(&report.render()), Some(report));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(MetricsReport::parse(""), None);
        assert_eq!(MetricsReport::parse("TTFT_MS=1;ITPS=2"), None);
        assert_eq!(MetricsReport::parse("TTFT_MS=abc;ITPS=1;OTPS=1;OET_MS=1"), None);
        assert_eq!(MetricsReport::parse("BOGUS=1;ITPS=1;OTPS=1;OET_MS=1"), None);
    }

    #[test]
    fn rate_needs_a_nonzero_denominator() {
        assert_eq!(rate_per_second(16, 0), UNMEASURED);
        assert_eq!(rate_per_second(16, 1000), 16);
        assert_eq!(rate_per_second(3, 500), 6);
        assert_eq!(rate_per_second(0, 250), 0);
    }
}
