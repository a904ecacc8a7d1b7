//! Startup content gate.

use anyhow::Result;
use platform_services::{ContentValidationResult, ServiceRegistry, Severity};

const CATEGORY: &str = "Game";

/// Validate the critical content directories and stop startup if any is missing.
///
/// With `allow_missing`, a failed check is logged as a warning and startup
/// continues; the result is still returned so callers can report it.
pub fn check_content(
    registry: &ServiceRegistry,
    allow_missing: bool,
) -> Result<ContentValidationResult> {
    let logger = registry.logger()?;
    let result = registry.asset_locator()?.validate_content();

    if result.ok {
        logger.log(Severity::Info, CATEGORY, "Content validation passed");
        return Ok(result);
    }

    let missing = result.missing_names().join(", ");
    if allow_missing {
        logger.log(
            Severity::Warning,
            CATEGORY,
            format!("Continuing without critical content: {missing}"),
        );
        return Ok(result);
    }

    logger.log(
        Severity::Fatal,
        CATEGORY,
        format!("Content validation failed! Missing: {missing}"),
    );
    result.clone().into_result()?;
    Ok(result)
}
