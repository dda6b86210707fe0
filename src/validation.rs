//! Structural validation of problem instances.
//!
//! Checks the integrity of an [`Instance`] before an episode is created.
//! Detects:
//! - Empty or ragged matrices
//! - Shape mismatches between processing-time, routing, and setup tables
//! - Routing entries outside the machine range
//! - Instances with no schedulable work
//!
//! Validation runs once, before any step is attempted; a malformed instance
//! can never corrupt episode state.

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The instance has zero jobs or zero machines.
    EmptyInstance,
    /// A matrix row has a different length than the first row.
    RaggedMatrix,
    /// Processing-time, routing, and setup tables disagree on shape.
    DimensionMismatch,
    /// A routing entry does not name a valid machine.
    RoutingOutOfRange,
    /// Every slot has zero processing time; nothing can ever be scheduled.
    NoWork,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an instance before episode construction.
///
/// Checks:
/// 1. At least one job and one machine
/// 2. Processing-time and routing matrices are rectangular [J][M]
/// 3. Processing-time and routing matrices have identical shape
/// 4. Every routing entry is in `[0, machine_size)`
/// 5. The setup table is shaped [M][J] (machine x job family)
/// 6. At least one slot has positive processing time
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    let jobs = instance.processing_time.len();
    let machines = instance
        .processing_time
        .first()
        .map(Vec::len)
        .unwrap_or(0);

    if jobs == 0 || machines == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInstance,
            format!("instance has {jobs} jobs and {machines} machines"),
        ));
        return Err(errors);
    }

    for (i, row) in instance.processing_time.iter().enumerate() {
        if row.len() != machines {
            errors.push(ValidationError::new(
                ValidationErrorKind::RaggedMatrix,
                format!(
                    "processing-time row {i} has {} slots, expected {machines}",
                    row.len()
                ),
            ));
        }
    }

    if instance.routing.len() != jobs {
        errors.push(ValidationError::new(
            ValidationErrorKind::DimensionMismatch,
            format!(
                "routing has {} rows, processing time has {jobs}",
                instance.routing.len()
            ),
        ));
    }
    for (i, row) in instance.routing.iter().enumerate() {
        if row.len() != machines {
            errors.push(ValidationError::new(
                ValidationErrorKind::RaggedMatrix,
                format!("routing row {i} has {} slots, expected {machines}", row.len()),
            ));
        }
        for (j, &machine) in row.iter().enumerate() {
            if machine >= machines {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RoutingOutOfRange,
                    format!(
                        "routing[{i}][{j}] = {machine}, valid machines are 0..{machines}"
                    ),
                ));
            }
        }
    }

    if instance.setup_time.len() != machines {
        errors.push(ValidationError::new(
            ValidationErrorKind::DimensionMismatch,
            format!(
                "setup table has {} machine rows, expected {machines}",
                instance.setup_time.len()
            ),
        ));
    }
    for (m, row) in instance.setup_time.iter().enumerate() {
        if row.len() != jobs {
            errors.push(ValidationError::new(
                ValidationErrorKind::DimensionMismatch,
                format!(
                    "setup table row {m} has {} job families, expected {jobs}",
                    row.len()
                ),
            ));
        }
    }

    let has_work = instance
        .processing_time
        .iter()
        .flatten()
        .any(|&t| t > 0);
    if !has_work {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoWork,
            "every slot has zero processing time; nothing can be scheduled",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instance() -> Instance {
        Instance::new(
            vec![vec![3, 2], vec![4, 1]],
            vec![vec![0, 1], vec![1, 0]],
        )
    }

    #[test]
    fn test_valid_instance() {
        assert!(validate_instance(&sample_instance()).is_ok());
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(vec![], vec![]);
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyInstance));
    }

    #[test]
    fn test_ragged_processing_time() {
        let instance = Instance::new(
            vec![vec![3, 2], vec![4]],
            vec![vec![0, 1], vec![1, 0]],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RaggedMatrix));
    }

    #[test]
    fn test_routing_row_count_mismatch() {
        let instance = Instance::new(vec![vec![3, 2], vec![4, 1]], vec![vec![0, 1]]);
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DimensionMismatch));
    }

    #[test]
    fn test_routing_out_of_range() {
        let instance = Instance::new(
            vec![vec![3, 2], vec![4, 1]],
            vec![vec![0, 1], vec![1, 5]],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RoutingOutOfRange));
    }

    #[test]
    fn test_setup_table_mismatch() {
        let instance = sample_instance().with_setup_time(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DimensionMismatch));
    }

    #[test]
    fn test_no_work() {
        let instance = Instance::new(
            vec![vec![0, 0], vec![0, 0]],
            vec![vec![0, 1], vec![1, 0]],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::NoWork));
    }

    #[test]
    fn test_multiple_errors() {
        let instance = Instance::new(
            vec![vec![0, 0], vec![0, 0]],
            vec![vec![0, 9], vec![1, 0]],
        );
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
