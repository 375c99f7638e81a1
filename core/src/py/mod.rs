use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use serde::Deserialize;
use std::collections::HashMap;

use crate::errors::{from_json_str, TalentError};
use crate::reference::ReferenceData;
use crate::types::{Gender, Scope};

// ──────────────────────────────────────────────────────────────────────────────
// Hjelpere
// ──────────────────────────────────────────────────────────────────────────────

fn to_py_err(e: TalentError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Tillater både str og dict/objekt; objekter serialiseres via Python sin json.dumps.
fn payload_to_json(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    if let Ok(s) = payload.extract::<&str>() {
        return Ok(s.to_owned());
    }
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    json_mod
        .call_method1("dumps", (payload,))
        .and_then(|o| o.extract::<String>())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}")))
}

fn parse_scope(scope: Option<&str>) -> PyResult<Scope> {
    match scope.map(|s| s.trim().to_lowercase()).as_deref() {
        None | Some("national") => Ok(Scope::National),
        Some("state") => Ok(Scope::State),
        Some(other) => Err(PyValueError::new_err(format!("unknown scope: {other}"))),
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Eksporterte funksjoner
// ──────────────────────────────────────────────────────────────────────────────

/// Normtabell som JSON, inkl. `found`-flagg og aldersgruppe.
#[pyfunction]
fn get_benchmark_json(test_type: &str, age: i32, gender: &str) -> PyResult<String> {
    let lookup = ReferenceData::builtin().lookup_benchmark(test_type, age, Gender::from_label(gender));
    serde_json::to_string(&lookup).map_err(|e| to_py_err(e.into()))
}

#[pyfunction]
fn score_for_sport_json(py: Python<'_>, sport: &str, test_scores: &PyAny) -> PyResult<String> {
    #[derive(Deserialize)]
    #[serde(transparent)]
    struct ScoresIn(HashMap<String, f64>);

    let json_in = payload_to_json(py, test_scores)?;
    let ScoresIn(scores) = from_json_str(&json_in).map_err(to_py_err)?;
    let out = ReferenceData::builtin().score_for_sport(sport, &scores);
    serde_json::to_string(&out).map_err(|e| to_py_err(e.into()))
}

#[pyfunction]
#[pyo3(signature = (score, scope = None))]
fn classify_percentile(score: f64, scope: Option<&str>) -> PyResult<String> {
    let scope = parse_scope(scope)?;
    let out = ReferenceData::builtin().classify(score, scope);
    serde_json::to_string(&out).map_err(|e| to_py_err(e.into()))
}

#[pyfunction]
fn assess_athlete_json(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    let json_in = payload_to_json(py, payload)?;
    crate::assess::assess_athlete_json(&json_in, None, None).map_err(to_py_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn talent_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_benchmark_json, m)?)?;
    m.add_function(wrap_pyfunction!(score_for_sport_json, m)?)?;
    m.add_function(wrap_pyfunction!(classify_percentile, m)?)?;
    m.add_function(wrap_pyfunction!(assess_athlete_json, m)?)?;
    Ok(())
}
