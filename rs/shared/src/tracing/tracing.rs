use std::sync::Once;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber};

use crate::env::get_optional_env_var;

use super::error::TracingSetupError;

static TRACING_INIT: Once = Once::new();

pub fn setup_tracing() -> Result<(), TracingSetupError> {
    let mut init_result: Result<(), TracingSetupError> = Ok(());

    // ensures that the subscriber is only initialized once for all threads
    TRACING_INIT.call_once(|| {
        let directives = match get_optional_env_var("RUST_LOG") {
            Ok(directives) => directives.unwrap_or_else(|| String::from("info")),
            Err(e) => {
                init_result = Err(e.into());
                return;
            }
        };
        let filter = EnvFilter::new(directives);

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_timer(UtcTime::rfc_3339())
            .with_ansi(false)
            .fmt_fields(fmt::format::DefaultFields::new())
            .event_format(
                fmt::format()
                    .compact()
                    .with_line_number(true)
                    .with_thread_ids(true),
            )
            .finish();

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            init_result = Err(e.into());
        }
    });
    init_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_tracing_twice_is_noop() -> Result<(), TracingSetupError> {
        setup_tracing()?;
        setup_tracing()?;
        tracing::info!("tracing initialized");
        Ok(())
    }
}
