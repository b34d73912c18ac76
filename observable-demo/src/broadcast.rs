use log::{debug, info};
use observable::{make_observer_list, Observable};

use crate::{
    config::app::AppConfig,
    counters::{Counter, Tally},
    error::AppError,
};

pub type Counters = (Counter, Counter, Tally);

pub fn build(config: &AppConfig) -> Observable<Counters> {
    Observable::new(make_observer_list!(
        Counter::new("fast", config.fast_start, config.fast_step),
        Counter::new("slow", config.slow_start, config.slow_step),
        Tally::default(),
    ))
}

pub fn run(config: &AppConfig) -> Result<Observable<Counters>, AppError> {
    let mut subject = build(config);
    debug!(
        "Broadcasting {} {} events to {} observers",
        config.rounds,
        config.event,
        subject.len()
    );

    for round in 1..=config.rounds {
        subject.try_notify(&config.event)?;

        let (fast, slow, tally) = subject.observers();
        info!(
            "Round {round}: {}={} {}={} events={}",
            fast.name(),
            fast.value(),
            slow.name(),
            slow.value(),
            tally.total()
        );
    }
    Ok(subject)
}
