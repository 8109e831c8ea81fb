//! Validation for the `[tutor]` section.

use crate::schema::UnfoldConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

pub(crate) fn validate_tutor(errors: &mut Vec<String>, config: &UnfoldConfig) {
    let tutor = &config.tutor;

    validate_not_blank(errors, "tutor.model", &tutor.model);
    if tutor.model.contains(['/', ' ', ':']) {
        errors.push(format!(
            "tutor.model = {:?} must be a bare model identifier",
            tutor.model
        ));
    }

    validate_range_f64(errors, "tutor.temperature", tutor.temperature, 0.0, 2.0);

    if let Some(max) = tutor.max_output_tokens {
        validate_range(errors, "tutor.max_output_tokens", max, 1, 65536);
    }
}
