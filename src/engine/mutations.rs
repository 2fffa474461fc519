use std::time::Instant;

use chrono::Utc;

use crate::model::*;

use super::conflict::{check_no_conflict, validate_stay};
use super::lifecycle::{guard_cancel, guard_update, today};
use super::{refresh_active_gauge, Engine, EngineError};

impl Engine {
    pub fn create(&self, draft: NewReservation) -> Result<Reservation, EngineError> {
        let started = Instant::now();
        let result = self.do_create(draft);
        self.finish("create", started, result)
    }

    fn do_create(&self, draft: NewReservation) -> Result<Reservation, EngineError> {
        let hotel_id = draft.hotel_id.trim().to_string();
        let user_id = draft.user_id.trim().to_string();
        if hotel_id.is_empty() {
            return Err(EngineError::Validation("hotel_id must not be empty"));
        }
        if user_id.is_empty() {
            return Err(EngineError::Validation("user_id must not be empty"));
        }
        validate_guests(draft.guests, self.max_guests)?;
        validate_stay(draft.check_in, draft.check_out)?;

        // Existence check stays outside the lock so a slow directory can
        // never extend the exclusive section.
        if !self.directory.hotel_exists(&hotel_id) {
            return Err(EngineError::HotelNotFound(hotel_id));
        }

        let stay = Stay::new(draft.check_in, draft.check_out);
        let record = {
            let mut map = self.store.write();

            let id = match draft.id {
                Some(id) if !id.is_empty() => {
                    if map.contains_key(&id) {
                        return Err(EngineError::AlreadyExists(id));
                    }
                    id
                }
                _ => self.store.next_id(),
            };

            check_no_conflict(&map, &hotel_id, &stay, None)?;

            let record = Reservation {
                id: id.clone(),
                hotel_id,
                user_id,
                check_in: draft.check_in,
                check_out: draft.check_out,
                guests: draft.guests,
                status: draft.status.unwrap_or(ReservationStatus::Pending),
                created_at: draft.created_at.unwrap_or_else(Utc::now),
                room_type: draft.room_type,
                total_price: draft.total_price,
            };
            map.insert(id, record.clone());
            refresh_active_gauge(&map);
            record
        };

        self.events.publish(&BookingEvent::Created {
            id: record.id.clone(),
            hotel_id: record.hotel_id.clone(),
        });
        tracing::debug!(id = %record.id, hotel = %record.hotel_id, "reservation created");
        Ok(record)
    }

    pub fn update(&self, id: &str, patch: ReservationPatch) -> Result<Reservation, EngineError> {
        let started = Instant::now();
        let result = self.do_update(id, patch);
        self.finish("update", started, result)
    }

    fn do_update(&self, id: &str, patch: ReservationPatch) -> Result<Reservation, EngineError> {
        // Patch-level validation is pure and runs before the lock.
        if let Some(guests) = patch.guests {
            validate_guests(guests, self.max_guests)?;
        }
        let hotel_id = trim_key(patch.hotel_id, "hotel_id must not be empty")?;
        let user_id = trim_key(patch.user_id, "user_id must not be empty")?;

        let updated = {
            let mut map = self.store.write();
            let current = map
                .get(id)
                .ok_or_else(|| EngineError::NotFound(id.to_string()))?;
            guard_update(current)?;

            let mut merged = current.clone();
            if let Some(h) = hotel_id {
                merged.hotel_id = h;
            }
            if let Some(u) = user_id {
                merged.user_id = u;
            }
            let dates_changed = patch.check_in.is_some() || patch.check_out.is_some();
            if let Some(ci) = patch.check_in {
                merged.check_in = ci;
            }
            if let Some(co) = patch.check_out {
                merged.check_out = co;
            }
            if dates_changed {
                validate_stay(merged.check_in, merged.check_out)?;
            }
            if let Some(g) = patch.guests {
                merged.guests = g;
            }
            if let Some(s) = patch.status {
                merged.status = s;
            }
            if let Some(rt) = patch.room_type {
                merged.room_type = rt;
            }
            if let Some(tp) = patch.total_price {
                merged.total_price = tp;
            }

            check_no_conflict(&map, &merged.hotel_id, &merged.stay(), Some(id))?;

            map.insert(id.to_string(), merged.clone());
            refresh_active_gauge(&map);
            merged
        };

        self.events.publish(&BookingEvent::Updated {
            id: updated.id.clone(),
            hotel_id: updated.hotel_id.clone(),
        });
        tracing::debug!(id = %updated.id, "reservation updated");
        Ok(updated)
    }

    pub fn cancel(&self, id: &str) -> Result<Reservation, EngineError> {
        let started = Instant::now();
        let result = self.do_cancel(id);
        self.finish("cancel", started, result)
    }

    fn do_cancel(&self, id: &str) -> Result<Reservation, EngineError> {
        let cancelled = {
            let mut map = self.store.write();
            let current = map
                .get(id)
                .ok_or_else(|| EngineError::NotFound(id.to_string()))?;
            guard_cancel(current, today())?;

            let mut cancelled = current.clone();
            cancelled.status = ReservationStatus::Cancelled;
            map.insert(id.to_string(), cancelled.clone());
            refresh_active_gauge(&map);
            cancelled
        };

        self.events.publish(&BookingEvent::Cancelled {
            id: cancelled.id.clone(),
            hotel_id: cancelled.hotel_id.clone(),
        });
        tracing::debug!(id = %cancelled.id, "reservation cancelled");
        Ok(cancelled)
    }

    /// Administrative hard-remove. No lifecycle guard: a cancelled or
    /// in-progress record can still be deleted.
    pub fn delete(&self, id: &str) -> Result<Reservation, EngineError> {
        let started = Instant::now();
        let result = self.do_delete(id);
        self.finish("delete", started, result)
    }

    fn do_delete(&self, id: &str) -> Result<Reservation, EngineError> {
        let removed = {
            let mut map = self.store.write();
            let removed = map
                .remove(id)
                .ok_or_else(|| EngineError::NotFound(id.to_string()))?;
            refresh_active_gauge(&map);
            removed
        };

        self.events.publish(&BookingEvent::Deleted {
            id: removed.id.clone(),
            hotel_id: removed.hotel_id.clone(),
        });
        tracing::debug!(id = %removed.id, "reservation deleted");
        Ok(removed)
    }
}

fn validate_guests(guests: u32, max: u32) -> Result<(), EngineError> {
    if guests == 0 {
        return Err(EngineError::Validation("guests must be at least 1"));
    }
    if guests > max {
        return Err(EngineError::Validation("too many guests"));
    }
    Ok(())
}

/// Trim a provided key; a provided-but-blank key is a validation error,
/// not an absence sentinel.
fn trim_key(key: Option<String>, msg: &'static str) -> Result<Option<String>, EngineError> {
    match key {
        Some(k) => {
            let k = k.trim().to_string();
            if k.is_empty() {
                return Err(EngineError::Validation(msg));
            }
            Ok(Some(k))
        }
        None => Ok(None),
    }
}
