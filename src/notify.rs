use dashmap::DashMap;
use tokio::sync::broadcast;

use crate::model::BookingEvent;

const CHANNEL_CAPACITY: usize = 256;

/// Broadcast hub for booking events, one channel per hotel key.
///
/// Publishing is fire-and-forget: a send after a committed mutation never
/// fails the mutation, and nobody listening is a no-op.
pub struct EventHub {
    channels: DashMap<String, broadcast::Sender<BookingEvent>>,
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHub {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    /// Subscribe to events for a hotel. Creates the channel if needed.
    pub fn subscribe(&self, hotel_id: &str) -> broadcast::Receiver<BookingEvent> {
        let sender = self
            .channels
            .entry(hotel_id.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        sender.subscribe()
    }

    /// Publish an event to its hotel's channel. No-op if nobody is listening.
    pub fn publish(&self, event: &BookingEvent) {
        metrics::counter!(crate::observability::EVENTS_PUBLISHED_TOTAL).increment(1);
        if let Some(sender) = self.channels.get(event.hotel_id()) {
            let _ = sender.send(event.clone());
        }
    }

    /// Remove a hotel's channel.
    pub fn remove(&self, hotel_id: &str) {
        self.channels.remove(hotel_id);
    }
}
