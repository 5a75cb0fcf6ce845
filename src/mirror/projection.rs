//! Per-trial and best-trial projection into sink paths.
//!
//! Every trial record lands under `<handle>/trials/<id>/*` where the
//! handle is `trials` for ordinary mirroring and `best` for the current
//! best trial(s). Ordinary mirroring additionally appends to the
//! cross-trial series (`trials/values`, `trials/params`, ...); best
//! mirroring overwrite-assigns its summary paths so they always reflect
//! the current best.

use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::namespace::ObjectiveNames;
use crate::study::Study;
use crate::trial::FrozenTrial;
use crate::types::TrialState;

use super::{to_json, StudyMirror};

/// Milliseconds per second, for duration conversion.
const MILLIS_PER_SEC: f64 = 1_000.0;

/// Writes the full record for one trial.
///
/// Metadata (timestamps, duration, distributions, intermediate values,
/// params) is always written; value writes are skipped entirely when the
/// trial carries no objective values.
pub(super) fn log_trial(
    mirror: &StudyMirror,
    study: &Study,
    trial: &FrozenTrial,
    names: &ObjectiveNames,
    best: bool,
) -> Result<()> {
    let handle = if best { "best" } else { "trials" };
    let record = format!("{handle}/trials/{}", trial.id);

    if let Some(start) = trial.datetime_start {
        mirror.sink.assign(
            &mirror.path(&format!("{record}/datetime_start")),
            Value::String(start.to_rfc3339()),
        )?;
    }
    if let Some(complete) = trial.datetime_complete {
        mirror.sink.assign(
            &mirror.path(&format!("{record}/datetime_complete")),
            Value::String(complete.to_rfc3339()),
        )?;
    }
    if let Some(duration) = trial.duration() {
        #[allow(clippy::cast_precision_loss)]
        let seconds = duration.num_milliseconds() as f64 / MILLIS_PER_SEC;
        mirror
            .sink
            .assign(&mirror.path(&format!("{record}/duration")), json!(seconds))?;
    }

    for (key, value) in [
        ("distributions", to_json(&record, &trial.distributions)?),
        (
            "intermediate_values",
            to_json(&record, &trial.intermediate_values)?,
        ),
        ("params", to_json(&record, &trial.params)?),
    ] {
        mirror
            .sink
            .assign(&mirror.path(&format!("{record}/{key}")), value)?;
    }

    if study.is_multi_objective() {
        log_multi_objective_values(mirror, trial, names, best, &record)?;
    } else {
        log_single_objective_value(mirror, trial, best, &record)?;
    }

    if trial.is_finished() && trial.state != TrialState::Complete {
        mirror.sink.assign(
            &mirror.path(&format!("{record}/state")),
            Value::String(trial.state.to_string()),
        )?;
    }
    Ok(())
}

fn log_single_objective_value(
    mirror: &StudyMirror,
    trial: &FrozenTrial,
    best: bool,
    record: &str,
) -> Result<()> {
    let Some(value) = trial.value() else {
        return Ok(());
    };

    mirror
        .sink
        .assign(&mirror.path(&format!("{record}/value")), json!(value))?;

    let params = to_json(record, &trial.params)?;
    let debug_line = format!("value: {value}| params: {params}");
    if best {
        mirror.sink.assign(&mirror.path("best/value"), json!(value))?;
        mirror.sink.assign(&mirror.path("best/params"), params)?;
        mirror
            .sink
            .assign(&mirror.path("best/value|params"), Value::String(debug_line))?;
    } else {
        mirror
            .sink
            .append(&mirror.path("trials/values"), json!(value), Some(trial.id))?;
        mirror
            .sink
            .append(&mirror.path("trials/params"), params, None)?;
        mirror.sink.append(
            &mirror.path("trials/values|params"),
            Value::String(debug_line),
            None,
        )?;
    }
    Ok(())
}

fn log_multi_objective_values(
    mirror: &StudyMirror,
    trial: &FrozenTrial,
    names: &ObjectiveNames,
    best: bool,
    record: &str,
) -> Result<()> {
    if trial.values.is_empty() {
        return Ok(());
    }

    let mut by_name = Map::new();
    for (index, name) in names.names().iter().enumerate() {
        if let Some(value) = trial.value_at(index) {
            by_name.insert(name.clone(), json!(value));
        }
    }
    mirror.sink.assign(
        &mirror.path(&format!("{record}/values")),
        Value::Object(by_name),
    )?;

    let handle = if best { "best" } else { "trials" };
    let params = to_json(record, &trial.params)?;
    if best {
        mirror.sink.assign(&mirror.path("best/params"), params)?;
    } else {
        mirror
            .sink
            .append(&mirror.path("trials/params"), params, None)?;
    }
    for (index, name) in names.names().iter().enumerate() {
        let Some(value) = trial.value_at(index) else {
            continue;
        };
        let path = mirror.path(&format!("{handle}/values/{name}"));
        if best {
            mirror.sink.assign(&path, json!(value))?;
        } else {
            mirror.sink.append(&path, json!(value), Some(trial.id))?;
        }
    }
    Ok(())
}

/// Appends the trial's distribution map to the running distribution
/// series.
pub(super) fn log_trial_distributions(mirror: &StudyMirror, trial: &FrozenTrial) -> Result<()> {
    let path = mirror.path("study/distributions");
    let value = to_json(&path, &trial.distributions)?;
    mirror.sink.append(&path, value, None)
}

/// Re-mirrors the current best trial(s) under `best/*`. No-op until at
/// least one trial has completed.
pub(super) fn log_best_trials(
    mirror: &StudyMirror,
    study: &Study,
    names: &ObjectiveNames,
) -> Result<()> {
    let best = study.best_trials();
    if best.is_empty() {
        return Ok(());
    }
    trace_debug!(count = best.len(), "mirroring best trial(s)");
    for trial in best {
        log_trial(mirror, study, trial, names, true)?;
    }
    Ok(())
}
