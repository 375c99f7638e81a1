use log::debug;
use std::collections::HashMap;

use crate::reference::ReferenceData;
use crate::tables::MODERATE_CUTOFF;
use crate::types::{CriticalTestScore, SportAssessment, SportProfile, TalentTier};

const UNKNOWN_SPORT_TEXT: &str = "Sport-specific benchmarks not available";

/// Nivå ut fra sammensatt score. Høyeste terskel sjekkes først.
/// Moderate-grensen (60) er global og uavhengig av idrettens terskler.
pub fn classify_tier(score: f64, sport: &SportProfile) -> TalentTier {
    if score >= sport.elite_threshold {
        TalentTier::ElitePotential
    } else if score >= sport.talent_threshold {
        TalentTier::HighPotential
    } else if score >= MODERATE_CUTOFF {
        TalentTier::ModeratePotential
    } else {
        TalentTier::Developing
    }
}

pub fn recommendation(sport: &str, tier: TalentTier) -> String {
    match tier {
        TalentTier::ElitePotential => format!(
            "Exceptional talent for {sport}. Recommend immediate advanced training program."
        ),
        TalentTier::HighPotential => format!(
            "Strong potential for {sport}. Recommend specialized training and development."
        ),
        TalentTier::ModeratePotential => {
            format!("Shows promise for {sport}. Focus on specific skill development.")
        }
        TalentTier::Developing => {
            "Continue training fundamentals. Consider other sports that match strengths.".to_string()
        }
        TalentTier::Unknown => UNKNOWN_SPORT_TEXT.to_string(),
    }
}

/// Vektet snitt over kritiske tester som finnes i `test_scores`.
/// Manglende tester hoppes over (bidrar verken til sum eller vekt).
pub fn composite_score(sport: &SportProfile, test_scores: &HashMap<String, f64>) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for t in &sport.critical_tests {
        if let Some(score) = test_scores.get(&t.test_type) {
            weighted += score * t.weight;
            total_weight += t.weight;
        }
    }
    if total_weight > 0.0 { weighted / total_weight } else { 0.0 }
}

/// Vurdering for en kjent idrettsprofil.
pub fn assess_profile(sport: &SportProfile, test_scores: &HashMap<String, f64>) -> SportAssessment {
    let composite = composite_score(sport, test_scores);
    let tier = classify_tier(composite, sport);

    // Synlig nullfylling for tester som mangler
    let critical_tests = sport
        .critical_tests
        .iter()
        .map(|t| CriticalTestScore {
            test_type: t.test_type.clone(),
            score: test_scores.get(&t.test_type).copied().unwrap_or(0.0),
        })
        .collect();

    SportAssessment {
        sport: sport.name.clone(),
        composite_score: composite,
        talent_tier: tier,
        recommendation: recommendation(&sport.name, tier),
        critical_tests,
    }
}

fn unknown_sport(sport: &str) -> SportAssessment {
    SportAssessment {
        sport: sport.to_string(),
        composite_score: 0.0,
        talent_tier: TalentTier::Unknown,
        recommendation: UNKNOWN_SPORT_TEXT.to_string(),
        critical_tests: Vec::new(),
    }
}

impl ReferenceData {
    pub fn score_for_sport(&self, sport: &str, test_scores: &HashMap<String, f64>) -> SportAssessment {
        match self.sport(sport) {
            Some(profile) => assess_profile(profile, test_scores),
            None => {
                debug!("unknown sport {sport:?}, returning sentinel assessment");
                unknown_sport(sport)
            }
        }
    }

    /// Alle idretter vurdert, sortert på score (synkende). Stabil sortering:
    /// like scorer beholder deklarasjonsrekkefølgen.
    pub fn rank_sports(&self, test_scores: &HashMap<String, f64>) -> Vec<SportAssessment> {
        let mut out: Vec<SportAssessment> =
            self.sports.iter().map(|s| assess_profile(s, test_scores)).collect();
        out.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
        out
    }
}

pub fn score_for_sport(sport: &str, test_scores: &HashMap<String, f64>) -> SportAssessment {
    ReferenceData::builtin().score_for_sport(sport, test_scores)
}

pub fn rank_sports(test_scores: &HashMap<String, f64>) -> Vec<SportAssessment> {
    ReferenceData::builtin().rank_sports(test_scores)
}
