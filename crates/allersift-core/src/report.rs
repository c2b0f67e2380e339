//! Final result assembly: telemetry, then `|`, then the filtered allergens.

use serde::{Deserialize, Serialize};

use crate::filter::render_allergens;
use crate::metrics::MetricsReport;

/// Everything one inference call produced, before wire encoding. Tests and
/// host code can inspect the pieces without re-parsing the rendered string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceOutcome {
    pub metrics: MetricsReport,
    /// Raw accumulated model text, pre-filter. Diagnostic only.
    pub raw_text: String,
    /// Canonical allergen labels that survived the vocabulary filter.
    pub allergens: Vec<String>,
}

impl InferenceOutcome {
    /// `TTFT_MS=<i>;ITPS=<i>;OTPS=<i>;OET_MS=<i>|<allergen_csv_or_EMPTY>`
    pub fn render(&self) -> String {
        format!("{}|{}", self.metrics.render(), render_allergens(&self.allergens))
    }
}

/// Split a rendered result into its metrics and allergen sections.
/// `None` if either section is malformed.
pub fn parse_result(rendered: &str) -> Option<(MetricsReport, String)> {
    let (meta, allergens) = rendered.split_once('|')?;
    Some((MetricsReport::parse(meta)?, allergens.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_allergens;

    #[test]
    fn render_then_parse_round_trips() {
        let outcome = InferenceOutcome {
            metrics: MetricsReport {
                ttft_ms: 10,
                itps: 200,
                otps: 30,
                oet_ms: 400,
            },
            raw_text: "Milk, egg\n".to_string(),
            allergens: filter_allergens("Milk, egg\n"),
        };
        let rendered = outcome.render();
        assert_eq!(rendered, "TTFT_MS=10;ITPS=200;OTPS=30;OET_MS=400|milk,egg");

        let (metrics, allergens) = parse_result(&rendered).unwrap();
        assert_eq!(metrics, outcome.metrics);
        assert_eq!(allergens, "milk,egg");
    }

    #[test]
    fn empty_allergen_list_renders_marker() {
        let outcome = InferenceOutcome {
            metrics: MetricsReport::unmeasured(),
            raw_text: String::new(),
            allergens: Vec::new(),
        };
        assert_eq!(outcome.render(), "TTFT_MS=-1;ITPS=-1;OTPS=-1;OET_MS=-1|EMPTY");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert_eq!(parse_result("TTFT_MS=1;ITPS=1;OTPS=1;OET_MS=1"), None);
    }

    #[test]
    fn outcome_round_trips_through_json() {
        let outcome = InferenceOutcome {
            metrics: MetricsReport {
                ttft_ms: 55,
                itps: 110,
                otps: -1,
                oet_ms: 0,
            },
            raw_text: "soy, sesame\n".to_string(),
            allergens: filter_allergens("soy, sesame\n"),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: InferenceOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metrics, outcome.metrics);
        assert_eq!(back.raw_text, outcome.raw_text);
        assert_eq!(back.allergens, outcome.allergens);
    }
}
