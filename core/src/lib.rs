//! Normdata, idrettsscoring og percentilklassifisering for talentvurdering.
//!
//! Alle oppslag er rene funksjoner over uforanderlige referansetabeller.
//! Ukjente innganger gir definerte reserveverdier, aldri feil.

pub mod assess;
pub mod benchmarks;
pub mod errors;
pub mod metrics;
pub mod percentile;
pub mod reference;
pub mod sport;
pub mod storage;
pub mod tables;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use assess::{assess_athlete, assess_athlete_json, AssessmentRequest, AthleteAssessment};
pub use benchmarks::{gender_factor, get_benchmark, lookup_benchmark, resolve_age_group};
pub use errors::TalentError;
pub use metrics::Metrics;
pub use percentile::{classify, compare_to_national_standards};
pub use reference::ReferenceData;
pub use sport::{rank_sports, score_for_sport};
pub use storage::{load_reference_data, save_reference_data};
pub use types::{
    AgeGroup, BenchmarkLookup, BenchmarkTable, BracketSource, CriticalTest, CriticalTestScore, Gender,
    PercentileBracket, PercentileRank, Scope, SportAssessment, SportProfile, TalentTier, TierThresholds,
};
