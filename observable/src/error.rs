use std::error::Error as StdError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Observer in slot {slot} failed to handle the event")]
    Observer {
        slot: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl NotifyError {
    pub fn observer<E>(slot: usize, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        NotifyError::Observer {
            slot,
            source: source.into(),
        }
    }

    /// Index of the slot whose observer failed.
    pub fn slot(&self) -> usize {
        match self {
            NotifyError::Observer { slot, .. } => *slot,
        }
    }
}

pub type NotifyResult = Result<(), NotifyError>;

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::NotifyError;

    #[test]
    fn test_notify_error_keeps_slot_and_source() {
        // When
        let error = NotifyError::observer(2, "counter overflow");

        // Then
        assert_eq!(2, error.slot());
        assert_eq!(
            "Observer in slot 2 failed to handle the event",
            error.to_string()
        );
        assert_eq!(
            Some("counter overflow".to_string()),
            error.source().map(|source| source.to_string())
        );
    }
}
