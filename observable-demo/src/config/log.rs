use env_logger::{Builder, Env};
use log::SetLoggerError;

const DEFAULT_LOG_FILTER: &str = "info";

pub fn init() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).try_init()
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use crate::config::log::init;

    #[test]
    fn test_init() {
        let noop_logger = log::logger();

        let result = init();

        assert!(matches!(result, Ok(())), "First init should succeed");
        assert!(
            !ptr::eq(noop_logger, log::logger()),
            "Should initialize global logger"
        );
        assert!(
            matches!(init(), Err(_)),
            "Should refuse to replace the global logger"
        );
    }
}
