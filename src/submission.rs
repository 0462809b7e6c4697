//! One form submission, collected, predicted and presented.

use log::warn;

use crate::error::SubmitError;
use crate::form::RawForm;
use crate::predict::predict;
use crate::present::{present, Verdict};
use crate::registry::ModelRegistry;

/// Runs the whole pipeline for `form`.
///
/// A parse failure returns before any model is called.
///
/// # Errors
///
/// Returns [`SubmitError::Parse`] for unparsable input and
/// [`SubmitError::Inference`] when the model cannot produce an outcome.
pub fn submit(registry: &ModelRegistry, form: &RawForm) -> Result<Verdict, SubmitError> {
    let result = run(registry, form);
    if let Err(e) = &result {
        warn!("{} submission aborted: {e}", form.task());
    }
    result
}

fn run(registry: &ModelRegistry, form: &RawForm) -> Result<Verdict, SubmitError> {
    let task = form.task();
    let features = form.collect()?;
    let outcome = predict(registry, task, &features)?;
    Ok(present(task, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::predict::tests::{fixed_registry, registry_with, FixedModel};
    use crate::present::Severity;
    use crate::task::Task;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    #[test]
    fn defaults_invoke_predictor_once_per_task() {
        for task in Task::ALL {
            let models: Vec<FixedModel> = Task::ALL.iter().map(|t| FixedModel::new(*t, 0)).collect();
            let calls: Vec<_> = models.iter().map(|m| Arc::clone(&m.calls)).collect();
            let seen: Vec<_> = models.iter().map(|m| Arc::clone(&m.seen)).collect();
            let mut models = models.into_iter();
            let registry = registry_with(
                models.next().unwrap(),
                models.next().unwrap(),
                models.next().unwrap(),
            );

            submit(&registry, &RawForm::new(task)).unwrap();

            for (i, other) in Task::ALL.iter().enumerate() {
                let expected = usize::from(*other == task);
                assert_eq!(calls[i].load(Ordering::SeqCst), expected, "{task} vs {other}");
            }
            let idx = Task::ALL.iter().position(|t| *t == task).unwrap();
            let rows = seen[idx].lock().unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].len(), task.field_count());
            assert!(rows[0].as_slice().iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn parse_failure_skips_predictor() {
        let diabetes = FixedModel::new(Task::Diabetes, 1);
        let calls = Arc::clone(&diabetes.calls);
        let registry = registry_with(
            diabetes,
            FixedModel::new(Task::HeartDisease, 1),
            FixedModel::new(Task::Parkinsons, 1),
        );
        let mut form = RawForm::new(Task::Diabetes);
        form.set("insulin", "abc").unwrap();

        let err = submit(&registry, &form).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Parse(ParseError::InvalidNumber { field: "Insulin", raw: "abc".into() })
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn end_to_end_diabetes() {
        let diabetes = FixedModel::new(Task::Diabetes, 1);
        let seen = Arc::clone(&diabetes.seen);
        let registry = registry_with(
            diabetes,
            FixedModel::new(Task::HeartDisease, 0),
            FixedModel::new(Task::Parkinsons, 0),
        );
        let mut form = RawForm::new(Task::Diabetes);
        form.fill(["2", "120", "70", "20", "85", "25.5", "0.5", "33"]).unwrap();

        let verdict = submit(&registry, &form).unwrap();

        assert_eq!(
            seen.lock().unwrap()[0].as_slice(),
            &[2.0, 120.0, 70.0, 20.0, 85.0, 25.5, 0.5, 33.0]
        );
        assert_eq!(verdict.label, "Diabetic");
        assert_eq!(verdict.severity, Severity::Alert);
    }

    #[test]
    fn negative_outcome_is_success() {
        let registry = fixed_registry(0);
        let verdict = submit(&registry, &RawForm::new(Task::HeartDisease)).unwrap();
        assert_eq!(verdict.label, "No Heart Disease");
        assert_eq!(verdict.severity, Severity::Success);
    }
}
