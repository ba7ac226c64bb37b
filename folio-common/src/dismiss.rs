//! Outside-click dismissal
//!
//! `DismissWatcher` owns the pointer-down subscription for one activation
//! window. The subscription type is whatever RAII guard the caller's event
//! source hands out; dropping it must unsubscribe.

use tracing::debug;

/// A region that pointer targets can land in
pub trait PointerRegion<T: ?Sized> {
    fn contains(&self, target: &T) -> bool;
}

/// Whether a pointer-down should dismiss.
///
/// A missing region or a target that is not a node counts as outside.
pub fn is_outside<T, R>(region: Option<&R>, target: Option<&T>) -> bool
where
    T: ?Sized,
    R: PointerRegion<T> + ?Sized,
{
    match (region, target) {
        (Some(region), Some(target)) => !region.contains(target),
        _ => true,
    }
}

/// Holds at most one pointer-down subscription, only while active
pub struct DismissWatcher<S> {
    subscription: Option<S>,
}

impl<S> Default for DismissWatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DismissWatcher<S> {
    pub fn new() -> Self {
        Self { subscription: None }
    }

    /// Acquire a subscription when becoming active, release it when not.
    ///
    /// `subscribe` is only called if no subscription is held, so repeated
    /// activation never stacks listeners.
    pub fn set_active(&mut self, active: bool, subscribe: impl FnOnce() -> Option<S>) {
        if !active {
            if self.subscription.take().is_some() {
                debug!("Released outside-dismiss subscription");
            }
            return;
        }

        if self.subscription.is_none() {
            self.subscription = subscribe();
            if self.subscription.is_some() {
                debug!("Acquired outside-dismiss subscription");
            }
        }
    }

    /// Release unconditionally (owner is going away).
    pub fn teardown(&mut self) {
        self.subscription = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Guard that tracks how many instances are alive
    struct Guard(Rc<Cell<u32>>);

    impl Guard {
        fn new(live: &Rc<Cell<u32>>) -> Self {
            live.set(live.get() + 1);
            Self(live.clone())
        }
    }

    impl Drop for Guard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    struct Region(&'static [&'static str]);

    impl PointerRegion<str> for Region {
        fn contains(&self, target: &str) -> bool {
            self.0.iter().any(|id| *id == target)
        }
    }

    #[test]
    fn test_is_outside() {
        let region = Region(&["toggle", "aside"]);
        assert!(!is_outside(Some(&region), Some("aside")));
        assert!(is_outside(Some(&region), Some("article")));
        assert!(is_outside(Some(&region), None::<&str>));
        assert!(is_outside(None::<&Region>, Some("aside")));
    }

    #[test]
    fn test_inactive_never_subscribes() {
        let live = Rc::new(Cell::new(0));
        let mut watcher = DismissWatcher::new();
        watcher.set_active(false, || Some(Guard::new(&live)));
        assert!(!watcher.is_subscribed());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_repeated_activation_keeps_one_subscription() {
        let live = Rc::new(Cell::new(0));
        let mut watcher = DismissWatcher::new();
        for _ in 0..3 {
            watcher.set_active(true, || Some(Guard::new(&live)));
            watcher.set_active(true, || Some(Guard::new(&live)));
            assert_eq!(live.get(), 1);
            watcher.set_active(false, || Some(Guard::new(&live)));
            assert_eq!(live.get(), 0);
        }
    }

    #[test]
    fn test_teardown_releases_subscription() {
        let live = Rc::new(Cell::new(0));
        let mut watcher = DismissWatcher::new();
        watcher.set_active(true, || Some(Guard::new(&live)));
        watcher.teardown();
        assert!(!watcher.is_subscribed());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_failed_subscribe_stays_unsubscribed() {
        let mut watcher: DismissWatcher<Guard> = DismissWatcher::new();
        watcher.set_active(true, || None);
        assert!(!watcher.is_subscribed());
    }
}
