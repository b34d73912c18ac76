use std::mem;

use log::{debug, trace};

use crate::{
    error::NotifyResult,
    observer_list::{Notify, ObserverAt, ObserverList, Slot, TryNotify},
};

/// Owns one observer per type of `L`, in declaration order, and forwards
/// events to all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Observable<L: ObserverList> {
    observers: L,
}

impl<L: ObserverList> Observable<L> {
    pub const LEN: usize = L::LEN;

    /// Adopts an already built list of observers, usually produced by
    /// [`make_observer_list!`](crate::make_observer_list). The list must match
    /// `L` exactly:
    ///
    /// ```compile_fail
    /// use observable::Observable;
    ///
    /// let subject: Observable<(u8, u8)> = Observable::new((1u8,));
    /// ```
    pub fn new(observers: L) -> Self {
        Observable { observers }
    }

    pub fn len(&self) -> usize {
        L::LEN
    }

    pub fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    /// ```compile_fail
    /// use observable::Observable;
    ///
    /// let subject = Observable::<(u8, u8)>::default();
    /// subject.get_observer::<2>();
    /// ```
    pub fn get_observer<const I: usize>(&self) -> &ObserverAt<L, I>
    where
        L: Slot<I>,
    {
        <L as Slot<I>>::slot(&self.observers)
    }

    pub fn get_observer_mut<const I: usize>(&mut self) -> &mut ObserverAt<L, I>
    where
        L: Slot<I>,
    {
        <L as Slot<I>>::slot_mut(&mut self.observers)
    }

    /// Replaces the observer in slot `I`, dropping the previous one. The new
    /// value must convert into the slot's type:
    ///
    /// ```compile_fail
    /// use observable::Observable;
    ///
    /// let mut subject = Observable::<(u8,)>::default();
    /// subject.set_observer::<0>("str");
    /// ```
    pub fn set_observer<const I: usize>(&mut self, observer: impl Into<ObserverAt<L, I>>)
    where
        L: Slot<I>,
    {
        *self.get_observer_mut::<I>() = observer.into();
    }

    pub fn replace_observer<const I: usize>(
        &mut self,
        observer: impl Into<ObserverAt<L, I>>,
    ) -> ObserverAt<L, I>
    where
        L: Slot<I>,
    {
        mem::replace(self.get_observer_mut::<I>(), observer.into())
    }

    pub fn notify<E: ?Sized>(&mut self, event: &E)
    where
        L: Notify<E>,
    {
        trace!("Notifying {} observers", L::LEN);
        self.observers.notify_all(event);
    }

    /// Forwards `event` to every observer, slot 0 first, until one fails.
    ///
    /// Observers before the failing slot keep their update; the ones after it
    /// are not called.
    pub fn try_notify<E: ?Sized>(&mut self, event: &E) -> NotifyResult
    where
        L: TryNotify<E>,
    {
        trace!("Notifying {} fallible observers", L::LEN);
        self.observers.try_notify_all(event).map_err(|error| {
            debug!("Notification aborted: {error}");
            error
        })
    }

    pub fn observers(&self) -> &L {
        &self.observers
    }

    pub fn observers_mut(&mut self) -> &mut L {
        &mut self.observers
    }

    pub fn into_observers(self) -> L {
        self.observers
    }

    pub fn take(&mut self) -> Self
    where
        L: Default,
    {
        mem::take(self)
    }
}

impl<L: ObserverList> From<L> for Observable<L> {
    fn from(observers: L) -> Self {
        Observable::new(observers)
    }
}
