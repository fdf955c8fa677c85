//! Ghost resize limit validation.

use crate::schema::TypolyConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_ghost(errors: &mut Vec<String>, config: &TypolyConfig) {
    let ghost = &config.ghost;
    validate_range_f64(errors, "ghost.min_percent", ghost.min_percent, 0.0, 100.0);
    validate_range_f64(errors, "ghost.max_percent", ghost.max_percent, 0.0, 100.0);
    if ghost.min_percent >= ghost.max_percent {
        errors.push(format!(
            "ghost.min_percent ({}) must be below ghost.max_percent ({})",
            ghost.min_percent, ghost.max_percent
        ));
    }
}
