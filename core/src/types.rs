use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Youth,
    Junior,
    Adult,
    Senior,
    Masters,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Youth => "Youth",
            AgeGroup::Junior => "Junior",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
            AgeGroup::Masters => "Masters",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Eksakt treff på tabellnøkkelen ("Male"/"Female"). Alt annet => Other,
    /// som ikke har egne normtabeller.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lukket aldersintervall [min, max] -> gruppe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: i32,
    pub max: i32,
    pub group: AgeGroup,
}

impl AgeRange {
    #[inline]
    pub fn contains(&self, age: i32) -> bool {
        self.min <= age && age <= self.max
    }
}

/// Fire-nivås terskel for én metrikk (gulvverdier).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub poor: f64,
}

impl TierThresholds {
    pub const fn new(excellent: f64, good: f64, average: f64, poor: f64) -> Self {
        Self { excellent, good, average, poor }
    }

    /// excellent ≥ good ≥ average ≥ poor
    pub fn is_monotone(&self) -> bool {
        self.excellent >= self.good && self.good >= self.average && self.average >= self.poor
    }
}

/// Tabell for én (testtype, aldersgruppe, kjønn).
///
/// `Uniform` er reservetabellen som gjelder likt for alle metrikknavn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BenchmarkTable {
    PerMetric(BTreeMap<String, TierThresholds>),
    Uniform(TierThresholds),
}

impl BenchmarkTable {
    /// Terskler for en metrikk. `Uniform` svarer for hvilket som helst navn.
    pub fn metric(&self, name: &str) -> Option<TierThresholds> {
        match self {
            BenchmarkTable::PerMetric(m) => m.get(name).copied(),
            BenchmarkTable::Uniform(t) => Some(*t),
        }
    }

    pub fn metric_names(&self) -> Vec<&str> {
        match self {
            BenchmarkTable::PerMetric(m) => m.keys().map(String::as_str).collect(),
            BenchmarkTable::Uniform(_) => Vec::new(),
        }
    }
}

/// Resultat fra benchmark-oppslag med eksplisitt funnet/reserve-flagg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkLookup {
    pub age_group: AgeGroup,
    pub table: BenchmarkTable,
    pub found: bool,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalTest {
    pub test_type: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportProfile {
    pub name: String,
    /// Rekkefølgen er deklarasjonsrekkefølge og styrer iterasjon.
    pub critical_tests: Vec<CriticalTest>,
    pub elite_threshold: f64,
    pub talent_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TalentTier {
    #[serde(rename = "Elite Potential")]
    ElitePotential,
    #[serde(rename = "High Potential")]
    HighPotential,
    #[serde(rename = "Moderate Potential")]
    ModeratePotential,
    Developing,
    Unknown,
}

impl TalentTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TalentTier::ElitePotential => "Elite Potential",
            TalentTier::HighPotential => "High Potential",
            TalentTier::ModeratePotential => "Moderate Potential",
            TalentTier::Developing => "Developing",
            TalentTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TalentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalTestScore {
    pub test_type: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportAssessment {
    pub sport: String,
    pub composite_score: f64,
    pub talent_tier: TalentTier,
    pub recommendation: String,
    pub critical_tests: Vec<CriticalTestScore>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    National,
    State,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::National => "national",
            Scope::State => "state",
        }
    }

    /// Brukes i "{p}th percentile {adverb}".
    pub fn adverb(&self) -> &'static str {
        match self {
            Scope::National => "nationally",
            Scope::State => "statewide",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileBracket {
    pub percentile: u8,
    pub lo: f64,
    pub hi: f64,
    pub description: String,
}

impl PercentileBracket {
    #[inline]
    pub fn contains(&self, score: f64) -> bool {
        self.lo <= score && score <= self.hi
    }
}

/// Hvordan percentilen ble bestemt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketSource {
    Bracket,
    AboveRange,
    BelowRange,
}

impl BracketSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BracketSource::Bracket => "bracket",
            BracketSource::AboveRange => "above_range",
            BracketSource::BelowRange => "below_range",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileRank {
    pub percentile: u8,
    pub description: String,
    pub performance_level: String,
    pub source: BracketSource,
}
