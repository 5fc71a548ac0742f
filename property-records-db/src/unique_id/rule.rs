use property_records_api::{RecordError, RecordResult};

use crate::models::property::{scheme_name_within_limit, SCHEME_NAME_MAX_LEN};

/// Separator between the scheme prefix and the counter.
pub const COUNTER_SEPARATOR: char = '-';
const COUNTER_WIDTH: usize = 5;

/// Derives the identifier prefix for a scheme name.
///
/// `"Green  Valley Ph-2"` becomes `"GREEN_VALLEY_PH2"`. Fails with
/// `GenerationError` when the name is absent, too long or has no
/// alphanumeric characters.
pub fn scheme_prefix(scheme_name: Option<&str>) -> RecordResult<String> {
    let scheme_name = scheme_name
        .ok_or_else(|| RecordError::GenerationError("scheme name is missing".to_string()))?;
    if !scheme_name_within_limit(scheme_name) {
        return Err(RecordError::GenerationError(format!(
            "scheme name is longer than {SCHEME_NAME_MAX_LEN} characters"
        )));
    }

    let words: Vec<String> = scheme_name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_uppercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        return Err(RecordError::GenerationError(format!(
            "scheme name '{scheme_name}' has no alphanumeric characters"
        )));
    }
    Ok(words.join("_"))
}

pub fn format_unique_id(prefix: &str, counter: u64) -> String {
    format!("{prefix}{COUNTER_SEPARATOR}{counter:0width$}", width = COUNTER_WIDTH)
}

/// Splits an identifier into prefix and counter, `None` if it is not one of ours.
pub fn parse_unique_id(unique_id: &str) -> Option<(&str, u64)> {
    let (prefix, counter) = unique_id.rsplit_once(COUNTER_SEPARATOR)?;
    if prefix.is_empty() || counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((prefix, counter.parse().ok()?))
}

/// Generates the next identifier for a scheme given the identifiers already
/// assigned.
///
/// The counter is one more than the highest counter among `existing` ids with
/// the same prefix, so the result never collides with any of them. Ids of
/// other schemes and foreign formats are ignored.
pub fn generate_unique_id<S: AsRef<str>>(
    scheme_name: Option<&str>,
    existing: &[S],
) -> RecordResult<String> {
    let prefix = scheme_prefix(scheme_name)?;
    let highest = existing
        .iter()
        .filter_map(|id| parse_unique_id(id.as_ref()))
        .filter(|(p, _)| *p == prefix)
        .map(|(_, counter)| counter)
        .max()
        .unwrap_or(0);
    let next = highest.checked_add(1).ok_or_else(|| {
        RecordError::GenerationError(format!("counter for scheme '{prefix}' is exhausted"))
    })?;
    Ok(format_unique_id(&prefix, next))
}
