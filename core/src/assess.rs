use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{from_json_str, TalentError};
use crate::metrics::{
    benchmark_lookup_total, percentile_classification_total, sport_assessment_total, Metrics,
};
use crate::reference::ReferenceData;
use crate::types::{AgeGroup, BenchmarkLookup, Gender, PercentileRank, Scope, SportAssessment};

/// Inngang fra scoring-pipelinen. Kjønn tas som fri tekst (ukjent => Other).
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    pub age: i32,
    #[serde(alias = "sex")]
    pub gender: String,
    pub sport: String,
    #[serde(default, alias = "scores")]
    pub test_scores: HashMap<String, f64>,
    #[serde(default)]
    pub scope: Scope,
    /// Valgfri testtype; gir normtabell for rå metrikker i svaret.
    #[serde(default)]
    pub test_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteAssessment {
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub gender_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkLookup>,
    pub sport: SportAssessment,
    /// Sammensatt score i valgt scope.
    pub percentile: PercentileRank,
    pub national: PercentileRank,
    pub state: PercentileRank,
    /// Idretten med høyest sammensatt score (None hvis ingen tester matcher).
    pub best_fit_sport: Option<String>,
}

pub fn assess_athlete(
    reference: &ReferenceData,
    req: &AssessmentRequest,
    metrics: Option<&Metrics>,
) -> AthleteAssessment {
    let gender = Gender::from_label(&req.gender);
    let age_group = reference.resolve_age_group(req.age);

    let benchmark = req
        .test_type
        .as_deref()
        .map(|t| reference.lookup_benchmark(t, req.age, gender));

    let sport = reference.score_for_sport(&req.sport, &req.test_scores);
    let composite = sport.composite_score;

    let national = reference.classify(composite, Scope::National);
    let state = reference.classify(composite, Scope::State);
    let percentile = match req.scope {
        Scope::National => national.clone(),
        Scope::State => state.clone(),
    };

    let best_fit_sport = reference
        .rank_sports(&req.test_scores)
        .into_iter()
        .find(|s| s.composite_score > 0.0)
        .map(|s| s.sport);

    if let Some(m) = metrics {
        if let Some(b) = &benchmark {
            benchmark_lookup_total(m, b.found).inc();
        }
        sport_assessment_total(m, sport.talent_tier).inc();
        percentile_classification_total(m, req.scope, percentile.source).inc();
    }

    debug!(
        "assessed sport={} composite={:.2} tier={} percentile={}",
        sport.sport, composite, sport.talent_tier, percentile.percentile
    );

    AthleteAssessment {
        age_group,
        gender,
        gender_factor: reference.gender_factor(gender),
        benchmark,
        sport,
        percentile,
        national,
        state,
        best_fit_sport,
    }
}

/// JSON inn/ut. `reference = None` bruker innebygde normdata.
pub fn assess_athlete_json(
    request_json: &str,
    reference: Option<&ReferenceData>,
    metrics: Option<&Metrics>,
) -> Result<String, TalentError> {
    let req: AssessmentRequest = from_json_str(request_json)?;
    let reference = match reference {
        Some(r) => r,
        None => ReferenceData::builtin(),
    };
    let out = assess_athlete(reference, &req, metrics);
    Ok(serde_json::to_string(&out)?)
}
