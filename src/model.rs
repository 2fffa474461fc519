use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Half-open stay window `[check_in, check_out)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        debug_assert!(check_in < check_out, "Stay check_in must be before check_out");
        Self { check_in, check_out }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn overlaps(&self, other: &Stay) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Returns true if `day` falls inside the window.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day < self.check_out
    }
}

/// Reservation lifecycle status. `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a status string, case-insensitively. Unknown values are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("pending") {
            Some(ReservationStatus::Pending)
        } else if s.eq_ignore_ascii_case("confirmed") {
            Some(ReservationStatus::Confirmed)
        } else if s.eq_ignore_ascii_case("cancelled") {
            Some(ReservationStatus::Cancelled)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored reservation. The store owns the canonical copy; every engine
/// operation hands out clones, never references into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub hotel_id: String,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

impl Reservation {
    pub fn stay(&self) -> Stay {
        Stay::new(self.check_in, self.check_out)
    }

    /// Active reservations are the ones that hold their window.
    pub fn is_active(&self) -> bool {
        self.status != ReservationStatus::Cancelled
    }
}

/// Input to `Engine::create`. Optional fields are assigned by the engine
/// when absent (generated ID, `pending` status, `created_at` now).
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub id: Option<String>,
    pub hotel_id: String,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub status: Option<ReservationStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub room_type: Option<String>,
    pub total_price: Option<f64>,
}

/// Partial-update delta with explicit field presence.
///
/// `None` means "not provided, keep the current value". For the clearable
/// fields the outer `Option` is presence and the inner one is the value:
/// `Some(None)` clears, `Some(Some(v))` sets.
#[derive(Debug, Clone, Default)]
pub struct ReservationPatch {
    pub hotel_id: Option<String>,
    pub user_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub status: Option<ReservationStatus>,
    pub room_type: Option<Option<String>>,
    pub total_price: Option<Option<f64>>,
}

/// Equality filters for `Engine::list`. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub hotel_id: Option<String>,
    pub user_id: Option<String>,
    pub status: Option<ReservationStatus>,
}

impl ListFilter {
    pub fn matches(&self, r: &Reservation) -> bool {
        if let Some(ref h) = self.hotel_id
            && &r.hotel_id != h {
                return false;
            }
        if let Some(ref u) = self.user_id
            && &r.user_id != u {
                return false;
            }
        if let Some(s) = self.status
            && r.status != s {
                return false;
            }
        true
    }
}

/// Notification emitted after a committed mutation, routed per hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BookingEvent {
    Created { id: String, hotel_id: String },
    Updated { id: String, hotel_id: String },
    Cancelled { id: String, hotel_id: String },
    Deleted { id: String, hotel_id: String },
}

impl BookingEvent {
    pub fn hotel_id(&self) -> &str {
        match self {
            BookingEvent::Created { hotel_id, .. }
            | BookingEvent::Updated { hotel_id, .. }
            | BookingEvent::Cancelled { hotel_id, .. }
            | BookingEvent::Deleted { hotel_id, .. } => hotel_id,
        }
    }

    pub fn reservation_id(&self) -> &str {
        match self {
            BookingEvent::Created { id, .. }
            | BookingEvent::Updated { id, .. }
            | BookingEvent::Cancelled { id, .. }
            | BookingEvent::Deleted { id, .. } => id,
        }
    }
}
