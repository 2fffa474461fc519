use chrono::{NaiveDate, Utc};

use crate::model::{Reservation, ReservationStatus};

use super::EngineError;

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Cancelled reservations are immutable.
pub(crate) fn guard_update(current: &Reservation) -> Result<(), EngineError> {
    if current.status == ReservationStatus::Cancelled {
        return Err(EngineError::Lifecycle("reservation is cancelled"));
    }
    Ok(())
}

/// Cancel is refused on an already-cancelled record (no idempotent
/// success) and on a stay that has already started: check-in at or
/// before `today` means the window is no longer releasable.
pub(crate) fn guard_cancel(current: &Reservation, today: NaiveDate) -> Result<(), EngineError> {
    if current.status == ReservationStatus::Cancelled {
        return Err(EngineError::Lifecycle("reservation already cancelled"));
    }
    if current.check_in <= today {
        return Err(EngineError::Lifecycle("stay already started"));
    }
    Ok(())
}
