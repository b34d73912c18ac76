use std::{cell::RefCell, env, error::Error, rc::Rc, sync::OnceLock};

use observable::{Observer, TryObserver};
use rand::{random, rngs::StdRng, SeedableRng};
use thiserror::Error;

pub const TEST_SEED_ENV: &str = "OBSERVABLE_TEST_SEED";

static SEED: OnceLock<u64> = OnceLock::new();

fn get_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = env::var(TEST_SEED_ENV)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {seed} for {TEST_SEED_ENV}");
        seed
    })
}

/// Rng seeded once per test binary, reproducible through `OBSERVABLE_TEST_SEED`.
pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(get_seed()))
}

/// Counter starting at 2 and growing by 3 on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub value: u32,
}

impl Bar {
    pub const STEP: u32 = 3;

    pub fn new(value: u32) -> Self {
        Bar { value }
    }
}

impl Default for Bar {
    fn default() -> Self {
        Bar { value: 2 }
    }
}

impl<E: ?Sized> Observer<E> for Bar {
    fn update(&mut self, _: &E) {
        self.value += Self::STEP;
    }
}

/// Counter starting at 1 and growing by 2 on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Foo {
    pub value: u32,
}

impl Foo {
    pub const STEP: u32 = 2;

    pub fn new(value: u32) -> Self {
        Foo { value }
    }
}

impl Default for Foo {
    fn default() -> Self {
        Foo { value: 1 }
    }
}

impl<E: ?Sized> Observer<E> for Foo {
    fn update(&mut self, _: &E) {
        self.value += Self::STEP;
    }
}

/// Shared record of which observer saw which event.
pub type Log = Rc<RefCell<Vec<(&'static str, String)>>>;

/// Appends its name and the event to a shared [`Log`].
#[derive(Debug, Clone, Default)]
pub struct Journal {
    pub name: &'static str,
    pub log: Log,
}

impl Journal {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Journal {
            name,
            log: log.clone(),
        }
    }
}

impl<E: ToString + ?Sized> Observer<E> for Journal {
    fn update(&mut self, event: &E) {
        self.log.borrow_mut().push((self.name, event.to_string()));
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Observer {0} rejected the event")]
pub struct Rejected(pub &'static str);

/// Records the event like a [`Journal`], then fails when `fail` is set.
#[derive(Debug, Clone, Default)]
pub struct Faulty {
    pub journal: Journal,
    pub fail: bool,
}

impl Faulty {
    pub fn new(journal: Journal, fail: bool) -> Self {
        Faulty { journal, fail }
    }
}

impl<E: ToString + ?Sized> TryObserver<E> for Faulty {
    type Error = Rejected;

    fn try_update(&mut self, event: &E) -> Result<(), Self::Error> {
        self.journal.update(event);
        if self.fail {
            Err(Rejected(self.journal.name))
        } else {
            Ok(())
        }
    }
}
