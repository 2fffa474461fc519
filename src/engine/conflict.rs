use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{Reservation, Stay};

use super::EngineError;

pub(crate) fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), EngineError> {
    if check_out <= check_in {
        return Err(EngineError::Validation("check_out must be after check_in"));
    }
    Ok(())
}

/// First active reservation on `hotel_id` whose stay overlaps `stay`,
/// skipping the record whose ID equals `exclude` (an Update must not
/// conflict with its own prior state). Cancelled records never participate:
/// cancellation frees the window.
pub(crate) fn find_conflict<'a>(
    records: &'a HashMap<String, Reservation>,
    hotel_id: &str,
    stay: &Stay,
    exclude: Option<&str>,
) -> Option<&'a Reservation> {
    records.values().find(|r| {
        r.hotel_id == hotel_id
            && r.is_active()
            && exclude != Some(r.id.as_str())
            && r.stay().overlaps(stay)
    })
}

pub(crate) fn check_no_conflict(
    records: &HashMap<String, Reservation>,
    hotel_id: &str,
    stay: &Stay,
    exclude: Option<&str>,
) -> Result<(), EngineError> {
    match find_conflict(records, hotel_id, stay, exclude) {
        Some(hit) => Err(EngineError::Overlap {
            conflicting: hit.id.clone(),
        }),
        None => Ok(()),
    }
}
