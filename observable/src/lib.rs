//! Statically typed observer broadcasting.
//!
//! An [`Observable`] owns one value of each type listed in a tuple, in
//! declaration order, and forwards events to all of them without boxing or
//! dynamic dispatch. Slots are addressed by a const index, so an invalid
//! index or a mismatched type is rejected by the compiler.
//!
//! ```
//! use observable::{make_observer_list, Observable, Observer};
//!
//! #[derive(Default)]
//! struct Counter(u32);
//!
//! impl<E: ?Sized> Observer<E> for Counter {
//!     fn update(&mut self, _: &E) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut subject = Observable::new(make_observer_list!(Counter(1), Counter(5)));
//! subject.notify(&());
//!
//! assert_eq!(2, subject.get_observer::<0>().0);
//! assert_eq!(6, subject.get_observer::<1>().0);
//! ```

mod error;
mod observable;
mod observer;
mod observer_list;

pub use error::{NotifyError, NotifyResult};
pub use observable::Observable;
pub use observer::{Observer, TryObserver};
pub use observer_list::{Notify, ObserverAt, ObserverList, Slot, TryNotify};

/// Packs observers into the ordered list adopted by [`Observable::new`].
///
/// Each slot's type is inferred from the matching argument.
#[macro_export]
macro_rules! make_observer_list {
    () => {
        ()
    };
    ($($observer:expr),+ $(,)?) => {
        ($($observer,)+)
    };
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use crate::{Observable, ObserverAt};

    #[test]
    fn test_make_observer_list_should_keep_argument_order() {
        // When
        let list = make_observer_list!(4u8, 'x', 6u8);

        // Then
        assert_eq!((4u8, 'x', 6u8), list);
        assert_eq!(TypeId::of::<char>(), TypeId::of::<ObserverAt<(u8, char, u8), 1>>());
    }

    #[test]
    fn test_make_observer_list_should_handle_edge_arities() {
        let empty: () = make_observer_list!();
        let single = make_observer_list!(String::from("only"),);

        assert_eq!(0, Observable::new(empty).len());
        assert_eq!(1, Observable::new(single).len());
    }
}
