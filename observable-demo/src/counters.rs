use std::convert::Infallible;

use observable::TryObserver;
use serde::Deserialize;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Tick,
    Reset,
}

#[derive(Error, Debug, PartialEq)]
#[error("Counter {name} overflowed: {value} + {step}")]
pub struct CounterOverflow {
    pub name: &'static str,
    pub value: u32,
    pub step: u32,
}

/// Grows by `step` on every tick, goes back to its start value on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    name: &'static str,
    start: u32,
    step: u32,
    value: u32,
}

impl Counter {
    pub fn new(name: &'static str, start: u32, step: u32) -> Self {
        Counter {
            name,
            start,
            step,
            value: start,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl TryObserver<EventKind> for Counter {
    type Error = CounterOverflow;

    fn try_update(&mut self, event: &EventKind) -> Result<(), Self::Error> {
        self.value = match event {
            EventKind::Tick => self
                .value
                .checked_add(self.step)
                .ok_or(CounterOverflow {
                    name: self.name,
                    value: self.value,
                    step: self.step,
                })?,
            EventKind::Reset => self.start,
        };
        Ok(())
    }
}

/// Counts the events it has seen, per kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tally {
    pub ticks: u64,
    pub resets: u64,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.ticks + self.resets
    }
}

impl TryObserver<EventKind> for Tally {
    type Error = Infallible;

    fn try_update(&mut self, event: &EventKind) -> Result<(), Self::Error> {
        match event {
            EventKind::Tick => self.ticks += 1,
            EventKind::Reset => self.resets += 1,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use observable::TryObserver;

    use super::{Counter, CounterOverflow, EventKind, Tally};

    #[test]
    fn test_counter_should_step_and_reset() {
        // Given
        let mut counter = Counter::new("fast", 2, 3);

        // When
        counter.try_update(&EventKind::Tick).unwrap();
        counter.try_update(&EventKind::Tick).unwrap();

        // Then
        assert_eq!(8, counter.value());

        // When
        counter.try_update(&EventKind::Reset).unwrap();

        // Then
        assert_eq!(2, counter.value());
    }

    #[test]
    fn test_counter_should_report_overflow() {
        // Given
        let mut counter = Counter::new("full", u32::MAX - 1, 5);

        // When
        let result = counter.try_update(&EventKind::Tick);

        // Then
        assert_eq!(
            Err(CounterOverflow {
                name: "full",
                value: u32::MAX - 1,
                step: 5
            }),
            result
        );
        assert_eq!(u32::MAX - 1, counter.value(), "Should keep its value");
    }

    #[test]
    fn test_tally_should_count_per_kind() {
        let mut tally = Tally::default();

        tally.try_update(&EventKind::Tick).unwrap();
        tally.try_update(&EventKind::Reset).unwrap();
        tally.try_update(&EventKind::Tick).unwrap();

        assert_eq!(Tally { ticks: 2, resets: 1 }, tally);
        assert_eq!(3, tally.total());
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!("tick", EventKind::Tick.to_string());
        assert_eq!("reset", EventKind::Reset.to_string());
    }
}
