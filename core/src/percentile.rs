use log::debug;

use crate::reference::ReferenceData;
use crate::types::{BracketSource, PercentileBracket, PercentileRank, Scope};

/// Over denne scoren (uten brakett-treff) gis toppercentilen.
const WORLD_CLASS_FLOOR: f64 = 95.0;
const TOP_PERCENTILE: u8 = 99;
const TOP_DESCRIPTION: &str = "World-class performance";
const BELOW_PERCENTILE: u8 = 25;
const BELOW_DESCRIPTION: &str = "Below average performance";

/// Klassifiserer en score mot en bracket-tabell.
///
/// Brakettene sjekkes i synkende percentilrekkefølge og første inklusive
/// treff vinner, så en delt grense (f.eks. 75 i både 75- og 90-brakett)
/// havner i den høyeste.
pub fn classify_with(score: f64, scope: Scope, brackets: &[PercentileBracket]) -> PercentileRank {
    let mut ordered: Vec<&PercentileBracket> = brackets.iter().collect();
    ordered.sort_by(|a, b| b.percentile.cmp(&a.percentile));

    if let Some(b) = ordered.iter().find(|b| b.contains(score)) {
        return PercentileRank {
            percentile: b.percentile,
            description: b.description.clone(),
            performance_level: format!("{}th percentile {}", b.percentile, scope.adverb()),
            source: BracketSource::Bracket,
        };
    }

    debug!("score {score} outside {} brackets", scope.as_str());
    if score > WORLD_CLASS_FLOOR {
        // Teksten til 99-braketten; mangler den brukes fast tekst
        let description = ordered
            .iter()
            .find(|b| b.percentile == TOP_PERCENTILE)
            .map(|b| b.description.clone())
            .unwrap_or_else(|| TOP_DESCRIPTION.to_string());
        PercentileRank {
            percentile: TOP_PERCENTILE,
            description,
            performance_level: format!("{TOP_PERCENTILE}th percentile {}", scope.adverb()),
            source: BracketSource::AboveRange,
        }
    } else {
        PercentileRank {
            percentile: BELOW_PERCENTILE,
            description: BELOW_DESCRIPTION.to_string(),
            performance_level: format!("Below {BELOW_PERCENTILE}th percentile {}", scope.adverb()),
            source: BracketSource::BelowRange,
        }
    }
}

impl ReferenceData {
    pub fn classify(&self, score: f64, scope: Scope) -> PercentileRank {
        let brackets = self.percentiles.get(&scope).map(Vec::as_slice).unwrap_or(&[]);
        classify_with(score, scope, brackets)
    }
}

pub fn classify(score: f64, scope: Scope) -> PercentileRank {
    ReferenceData::builtin().classify(score, scope)
}

/// Sammenligning mot nasjonale normer.
pub fn compare_to_national_standards(score: f64) -> PercentileRank {
    classify(score, Scope::National)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_edges_go_to_higher_bracket() {
        assert_eq!(classify(75.0, Scope::National).percentile, 90);
        assert_eq!(classify(60.0, Scope::National).percentile, 75);
        assert_eq!(classify(95.0, Scope::National).percentile, 99);
        assert_eq!(classify(92.0, Scope::State).percentile, 99);
    }

    #[test]
    fn above_table_uses_top_description() {
        let n = classify(120.0, Scope::National);
        assert_eq!(n.percentile, 99);
        assert_eq!(n.description, "World-class performance");
        assert_eq!(n.source, BracketSource::AboveRange);

        let s = classify(101.0, Scope::State);
        assert_eq!(s.description, "Outstanding state performance");
        assert_eq!(s.performance_level, "99th percentile statewide");
    }

    #[test]
    fn empty_table_falls_through() {
        let r = classify_with(99.0, Scope::State, &[]);
        assert_eq!(r.percentile, 99);
        assert_eq!(r.description, "World-class performance");
        let r = classify_with(50.0, Scope::State, &[]);
        assert_eq!(r.percentile, 25);
        assert_eq!(r.source, BracketSource::BelowRange);
    }

    #[test]
    fn nan_is_below_range() {
        let r = classify(f64::NAN, Scope::National);
        assert_eq!(r.percentile, 25);
        assert_eq!(r.performance_level, "Below 25th percentile nationally");
    }
}
