use crate::{
    error::{NotifyError, NotifyResult},
    Observer, TryObserver,
};

/// Implemented for tuples of up to twelve observers.
pub trait ObserverList {
    const LEN: usize;
}

/// Positional access into an [`ObserverList`].
///
/// Only implemented for `I < LEN`, so an out-of-range index is a compile error.
pub trait Slot<const I: usize>: ObserverList {
    type Observer;

    fn slot(&self) -> &Self::Observer;
    fn slot_mut(&mut self) -> &mut Self::Observer;
}

pub type ObserverAt<L, const I: usize> = <L as Slot<I>>::Observer;

pub trait Notify<E: ?Sized>: ObserverList {
    fn notify_all(&mut self, event: &E);
}

pub trait TryNotify<E: ?Sized>: ObserverList {
    /// Stops at the first failure.
    fn try_notify_all(&mut self, event: &E) -> NotifyResult;
}

impl ObserverList for () {
    const LEN: usize = 0;
}

impl<Ev: ?Sized> Notify<Ev> for () {
    #[inline]
    fn notify_all(&mut self, _: &Ev) {}
}

impl<Ev: ?Sized> TryNotify<Ev> for () {
    #[inline]
    fn try_notify_all(&mut self, _: &Ev) -> NotifyResult {
        Ok(())
    }
}

macro_rules! slot {
    ([$($All:ident),+] $index:tt $O:ident) => {
        impl<$($All),+> Slot<$index> for ($($All,)+) {
            type Observer = $O;

            #[inline]
            fn slot(&self) -> &$O {
                &self.$index
            }

            #[inline]
            fn slot_mut(&mut self) -> &mut $O {
                &mut self.$index
            }
        }
    };
}

macro_rules! observer_list {
    ($len:literal, $all:tt, $($index:tt $O:ident),+) => {
        impl<$($O),+> ObserverList for ($($O,)+) {
            const LEN: usize = $len;
        }

        impl<Ev: ?Sized, $($O: Observer<Ev>),+> Notify<Ev> for ($($O,)+) {
            #[inline]
            fn notify_all(&mut self, event: &Ev) {
                $(self.$index.update(event);)+
            }
        }

        impl<Ev: ?Sized, $($O: TryObserver<Ev>),+> TryNotify<Ev> for ($($O,)+) {
            fn try_notify_all(&mut self, event: &Ev) -> NotifyResult {
                $(
                    self.$index
                        .try_update(event)
                        .map_err(|source| NotifyError::observer($index, source))?;
                )+
                Ok(())
            }
        }

        $(slot!($all $index $O);)+
    };
}

observer_list!(1, [O0], 0 O0);
observer_list!(2, [O0, O1], 0 O0, 1 O1);
observer_list!(3, [O0, O1, O2], 0 O0, 1 O1, 2 O2);
observer_list!(4, [O0, O1, O2, O3], 0 O0, 1 O1, 2 O2, 3 O3);
observer_list!(5, [O0, O1, O2, O3, O4], 0 O0, 1 O1, 2 O2, 3 O3, 4 O4);
observer_list!(
    6,
    [O0, O1, O2, O3, O4, O5],
    0 O0, 1 O1, 2 O2, 3 O3, 4 O4, 5 O5
);
observer_list!(
    7,
    [O0, O1, O2, O3, O4, O5, O6],
    0 O0, 1 O1, 2 O2, 3 O3, 4 O4, 5 O5, 6 O6
);
observer_list!(
    8,
    [O0, O1, O2, O3, O4, O5, O6, O7],
    0 O0, 1 O1, 2 O2, 3 O3, 4 O4, 5 O5, 6 O6, 7 O7
);
observer_list!(
    9,
    [O0, O1, O2, O3, O4, O5, O6, O7, O8],
    0 O0, 1 O1, 2 O2, 3 O3, 4 O4, 5 O5, 6 O6, 7 O7, 8 O8
);
observer_list!(
    10,
    [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9],
    0 O0, 1 O1, 2 O2, 3 O3, 4 O4, 5 O5, 6 O6, 7 O7, 8 O8, 9 O9
);
observer_list!(
    11,
    [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9, O10],
    0 O0, 1 O1, 2 O2, 3 O3, 4 O4, 5 O5, 6 O6, 7 O7, 8 O8, 9 O9, 10 O10
);
observer_list!(
    12,
    [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9, O10, O11],
    0 O0, 1 O1, 2 O2, 3 O3, 4 O4, 5 O5, 6 O6, 7 O7, 8 O8, 9 O9, 10 O10, 11 O11
);
