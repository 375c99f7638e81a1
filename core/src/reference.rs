use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::TalentError;
use crate::tables::builtin_reference;
use crate::types::{AgeGroup, AgeRange, Gender, PercentileBracket, Scope, SportProfile, TierThresholds};

/// test -> aldersgruppe -> kjønn -> metrikk -> terskler
pub type BenchmarkIndex =
    BTreeMap<String, BTreeMap<AgeGroup, BTreeMap<Gender, BTreeMap<String, TierThresholds>>>>;

/// Alle normtabeller samlet. Konstrueres én gang og leses deretter uten låsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Deklarasjonsrekkefølge = søkerekkefølge (første treff vinner).
    pub age_groups: Vec<AgeRange>,
    pub gender_factors: BTreeMap<Gender, f64>,
    pub benchmarks: BenchmarkIndex,
    /// Deklarasjonsrekkefølge bevares (brukes ved rangering).
    pub sports: Vec<SportProfile>,
    pub percentiles: BTreeMap<Scope, Vec<PercentileBracket>>,
}

static BUILTIN: Lazy<ReferenceData> = Lazy::new(builtin_reference);

impl ReferenceData {
    /// Innebygde normdata (bygges lat ved første bruk).
    pub fn builtin() -> &'static ReferenceData {
        &BUILTIN
    }

    pub fn sport(&self, name: &str) -> Option<&SportProfile> {
        self.sports.iter().find(|s| s.name == name)
    }

    pub fn sport_names(&self) -> Vec<&str> {
        self.sports.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn test_types(&self) -> Vec<&str> {
        self.benchmarks.keys().map(String::as_str).collect()
    }

    /// Sjekker invariantene som konsumentene forutsetter.
    pub fn validate(&self) -> Result<(), TalentError> {
        for r in &self.age_groups {
            if r.min > r.max {
                return Err(invalid(format!("age range {}..={} for {} is empty", r.min, r.max, r.group)));
            }
        }
        for (i, a) in self.age_groups.iter().enumerate() {
            for b in &self.age_groups[i + 1..] {
                if a.min <= b.max && b.min <= a.max {
                    return Err(invalid(format!(
                        "age ranges {}..={} ({}) and {}..={} ({}) overlap",
                        a.min, a.max, a.group, b.min, b.max, b.group
                    )));
                }
            }
        }

        for (&gender, &factor) in &self.gender_factors {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(invalid(format!("gender factor for {gender} must be positive, got {factor}")));
            }
        }

        for (test, groups) in &self.benchmarks {
            for (group, genders) in groups {
                for (gender, metrics) in genders {
                    for (metric, t) in metrics {
                        if !t.is_monotone() {
                            return Err(invalid(format!(
                                "{test}/{group}/{gender}/{metric}: thresholds must satisfy excellent >= good >= average >= poor"
                            )));
                        }
                    }
                }
            }
        }

        for sport in &self.sports {
            if sport.critical_tests.is_empty() {
                return Err(invalid(format!("sport {} has no critical tests", sport.name)));
            }
            if let Some(t) = sport.critical_tests.iter().find(|t| !(t.weight > 0.0)) {
                return Err(invalid(format!(
                    "sport {}: weight for {} must be positive, got {}",
                    sport.name, t.test_type, t.weight
                )));
            }
            if sport.elite_threshold < sport.talent_threshold {
                return Err(invalid(format!(
                    "sport {}: elite threshold {} is below talent threshold {}",
                    sport.name, sport.elite_threshold, sport.talent_threshold
                )));
            }
        }

        for (scope, brackets) in &self.percentiles {
            if let Some(b) = brackets.iter().find(|b| b.lo > b.hi) {
                return Err(invalid(format!(
                    "{} percentile {}: range {}..={} is empty",
                    scope.as_str(),
                    b.percentile,
                    b.lo,
                    b.hi
                )));
            }
        }

        Ok(())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn invalid(msg: String) -> TalentError {
    TalentError::InvalidReference(msg)
}
