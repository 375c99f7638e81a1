use thiserror::Error;

/// Feil ved kantene (JSON-inngang, egendefinerte normdata). Selve
/// oppslag/scoring feiler aldri; de faller tilbake til definerte verdier.
#[derive(Debug, Error)]
pub enum TalentError {
    #[error("invalid JSON at `{path}`: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid reference data: {0}")]
    InvalidReference(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_path_to_error::Error<serde_json::Error>> for TalentError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        TalentError::Json {
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }
}

/// Parser JSON med sti til feltet som feilet (f.eks. `test_scores.Push-ups`).
pub fn from_json_str<T>(json: &str) -> Result<T, TalentError>
where
    T: serde::de::DeserializeOwned,
{
    let mut de = serde_json::Deserializer::from_str(json);
    let value = serde_path_to_error::deserialize(&mut de)?;
    de.end().map_err(|source| TalentError::Json { path: ".".to_string(), source })?;
    Ok(value)
}
