use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::types::{BracketSource, Scope, TalentTier};

/// Tellere for oppslag og klassifisering. Valgfritt; påvirker ikke resultater.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    benchmark_lookups: IntCounterVec,
    sport_assessments: IntCounterVec,
    percentile_classifications: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let benchmark_lookups = IntCounterVec::new(
            Opts::new("talent_benchmark_lookups_total", "Benchmark lookups by outcome"),
            &["outcome"],
        )?;
        let sport_assessments = IntCounterVec::new(
            Opts::new("talent_sport_assessments_total", "Sport assessments by talent tier"),
            &["tier"],
        )?;
        let percentile_classifications = IntCounterVec::new(
            Opts::new(
                "talent_percentile_classifications_total",
                "Percentile classifications by scope and bracket source",
            ),
            &["scope", "source"],
        )?;

        registry.register(Box::new(benchmark_lookups.clone()))?;
        registry.register(Box::new(sport_assessments.clone()))?;
        registry.register(Box::new(percentile_classifications.clone()))?;

        Ok(Self {
            registry,
            benchmark_lookups,
            sport_assessments,
            percentile_classifications,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prometheus tekstformat.
    pub fn gather_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            log::warn!("failed to encode metrics: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

pub fn benchmark_lookup_total(metrics: &Metrics, found: bool) -> IntCounter {
    let outcome = if found { "found" } else { "defaulted" };
    metrics.benchmark_lookups.with_label_values(&[outcome])
}

pub fn sport_assessment_total(metrics: &Metrics, tier: TalentTier) -> IntCounter {
    metrics.sport_assessments.with_label_values(&[tier.as_str()])
}

pub fn percentile_classification_total(metrics: &Metrics, scope: Scope, source: BracketSource) -> IntCounter {
    metrics
        .percentile_classifications
        .with_label_values(&[scope.as_str(), source.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_text_output() {
        let m = Metrics::new().unwrap();
        benchmark_lookup_total(&m, false).inc();
        benchmark_lookup_total(&m, false).inc();
        sport_assessment_total(&m, TalentTier::HighPotential).inc();

        assert_eq!(benchmark_lookup_total(&m, false).get(), 2);
        assert_eq!(benchmark_lookup_total(&m, true).get(), 0);

        let text = m.gather_text();
        assert!(text.contains("talent_benchmark_lookups_total{outcome=\"defaulted\"} 2"), "{text}");
        assert!(text.contains("tier=\"High Potential\""), "{text}");
    }
}
