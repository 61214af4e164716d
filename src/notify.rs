//! Stale-timeline notifications.
//!
//! After an acknowledged mutation the desk tells every registered listener
//! which staff/day timelines no longer match the store. Listeners decide
//! whether and when to rebuild.

use std::collections::BTreeSet;
use std::fmt;

use jiff::civil::Date;
use uuid::Uuid;

/// The timeline for one staff member on one day is out of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StaleTimeline {
    pub staff_id: Uuid,
    pub day: Date,
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn(&StaleTimeline)>;

/// Callback registry for stale-timeline notices.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("subscribed", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

impl Listeners {
    pub fn subscribe(&mut self, callback: impl Fn(&StaleTimeline) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Drops a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    /// Delivers each distinct notice once to every listener, in
    /// subscription order. Notices arrive sorted by staff then day.
    pub fn notify(&self, notices: impl IntoIterator<Item = StaleTimeline>) {
        let notices: BTreeSet<StaleTimeline> = notices.into_iter().collect();
        for notice in &notices {
            tracing::debug!(staff = %notice.staff_id, day = %notice.day, "timeline stale");
            for (_, callback) in &self.callbacks {
                callback(notice);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use jiff::civil::date;

    fn notice(staff: u128, day: i8) -> StaleTimeline {
        StaleTimeline {
            staff_id: Uuid::from_u128(staff),
            day: date(2026, 10, day),
        }
    }

    fn recorder(listeners: &mut Listeners) -> (SubscriptionId, Rc<RefCell<Vec<StaleTimeline>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = listeners.subscribe(move |n| sink.borrow_mut().push(*n));
        (id, seen)
    }

    #[test]
    fn duplicate_notices_are_delivered_once() {
        let mut listeners = Listeners::default();
        let (_, seen) = recorder(&mut listeners);

        listeners.notify([notice(1, 16), notice(1, 16), notice(1, 15)]);

        assert_eq!(*seen.borrow(), vec![notice(1, 15), notice(1, 16)]);
    }

    #[test]
    fn every_listener_hears_every_notice() {
        let mut listeners = Listeners::default();
        let (_, first) = recorder(&mut listeners);
        let (_, second) = recorder(&mut listeners);

        listeners.notify([notice(2, 16)]);

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn unsubscribed_listener_hears_nothing() {
        let mut listeners = Listeners::default();
        let (id, seen) = recorder(&mut listeners);

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.notify([notice(1, 16)]);

        assert!(seen.borrow().is_empty());
    }
}
