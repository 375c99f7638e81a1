use log::debug;

use crate::reference::ReferenceData;
use crate::tables::{DEFAULT_AGE_GROUP, DEFAULT_THRESHOLDS};
use crate::types::{AgeGroup, BenchmarkLookup, BenchmarkTable, Gender};

impl ReferenceData {
    /// Første intervall (i deklarasjonsrekkefølge) som inneholder alderen.
    /// Ingen treff => Adult. Ingen feil for negative/ekstreme aldre.
    pub fn resolve_age_group(&self, age: i32) -> AgeGroup {
        self.age_groups
            .iter()
            .find(|r| r.contains(age))
            .map(|r| r.group)
            .unwrap_or(DEFAULT_AGE_GROUP)
    }

    /// Justeringsfaktor for kjønn. Mangler den i tabellen brukes Other sin.
    pub fn gender_factor(&self, gender: Gender) -> f64 {
        self.gender_factors
            .get(&gender)
            .or_else(|| self.gender_factors.get(&Gender::Other))
            .copied()
            .unwrap_or(1.0)
    }

    /// Oppslag med eksplisitt `found`-flagg.
    pub fn lookup_benchmark(&self, test_type: &str, age: i32, gender: Gender) -> BenchmarkLookup {
        let age_group = self.resolve_age_group(age);
        let hit = self
            .benchmarks
            .get(test_type)
            .and_then(|groups| groups.get(&age_group))
            .and_then(|genders| genders.get(&gender));

        match hit {
            Some(metrics) => BenchmarkLookup {
                age_group,
                table: BenchmarkTable::PerMetric(metrics.clone()),
                found: true,
            },
            None => {
                debug!(
                    "benchmark missing for test={test_type:?} group={age_group} gender={gender}, using default table"
                );
                BenchmarkLookup {
                    age_group,
                    table: BenchmarkTable::Uniform(DEFAULT_THRESHOLDS),
                    found: false,
                }
            }
        }
    }

    /// Stille variant: reservetabellen returneres uten signal.
    pub fn get_benchmark(&self, test_type: &str, age: i32, gender: Gender) -> BenchmarkTable {
        self.lookup_benchmark(test_type, age, gender).table
    }
}

pub fn resolve_age_group(age: i32) -> AgeGroup {
    ReferenceData::builtin().resolve_age_group(age)
}

pub fn gender_factor(gender: Gender) -> f64 {
    ReferenceData::builtin().gender_factor(gender)
}

pub fn lookup_benchmark(test_type: &str, age: i32, gender: Gender) -> BenchmarkLookup {
    ReferenceData::builtin().lookup_benchmark(test_type, age, gender)
}

/// Normtabell for (test, alder, kjønn) mot innebygde data.
pub fn get_benchmark(test_type: &str, age: i32, gender: Gender) -> BenchmarkTable {
    ReferenceData::builtin().get_benchmark(test_type, age, gender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TierThresholds;

    #[test]
    fn age_group_edges() {
        assert_eq!(resolve_age_group(12), AgeGroup::Youth);
        assert_eq!(resolve_age_group(15), AgeGroup::Youth);
        assert_eq!(resolve_age_group(16), AgeGroup::Junior);
        assert_eq!(resolve_age_group(19), AgeGroup::Junior);
        assert_eq!(resolve_age_group(20), AgeGroup::Adult);
        assert_eq!(resolve_age_group(26), AgeGroup::Senior);
        assert_eq!(resolve_age_group(40), AgeGroup::Masters);
    }

    #[test]
    fn out_of_range_age_falls_back_to_adult() {
        for age in [-3, 0, 5, 11, 41, 99, i32::MAX, i32::MIN] {
            assert_eq!(resolve_age_group(age), AgeGroup::Adult, "age={age}");
        }
    }

    #[test]
    fn gender_factors() {
        assert_eq!(gender_factor(Gender::Male), 1.0);
        assert_eq!(gender_factor(Gender::Female), 0.9);
        assert_eq!(gender_factor(Gender::Other), 0.95);
        assert_eq!(gender_factor(Gender::from_label("nonbinary")), 0.95);
    }

    #[test]
    fn gender_labels_match_table_keys_exactly() {
        assert_eq!(Gender::from_label("Male"), Gender::Male);
        assert_eq!(Gender::from_label("Female"), Gender::Female);
        assert_eq!(Gender::from_label("male"), Gender::Other);
        assert_eq!(Gender::from_label("F"), Gender::Other);
        assert!(!lookup_benchmark("Vertical Jump", 20, Gender::from_label("male")).found);
        assert!(lookup_benchmark("Vertical Jump", 20, Gender::from_label("Male")).found);
    }

    #[test]
    fn other_gender_has_no_table() {
        let l = lookup_benchmark("Push-ups", 22, Gender::Other);
        assert!(!l.found);
        assert_eq!(l.age_group, AgeGroup::Adult);
        assert_eq!(l.table, BenchmarkTable::Uniform(TierThresholds::new(90.0, 75.0, 60.0, 40.0)));
    }
}
