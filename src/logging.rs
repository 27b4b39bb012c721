use std::io::{self, IsTerminal, Write};

use tracing::{error, Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{Error, Result};

/// Overrides the level filter, e.g. `MARKETQUANTIFY_LOG=trace`.
pub const LOG_ENV: &str = "MARKETQUANTIFY_LOG";

pub fn init(config: &Config) -> Result<()> {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = env_filter(config.verbose, directives.as_deref())?;
    let stderr_is_terminal = io::stderr().is_terminal();

    tracing::subscriber::set_global_default(subscriber(filter, io::stderr, stderr_is_terminal))?;
    Ok(())
}

pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Explicit directives win over the verbose flag and are parsed strictly.
pub fn env_filter(verbose: bool, directives: Option<&str>) -> Result<EnvFilter> {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => Ok(EnvFilter::try_new(directives)?),
        None => Ok(EnvFilter::new(default_directive(verbose))),
    }
}

pub fn subscriber<W>(filter: EnvFilter, writer: W, ansi: bool) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_ansi(ansi)
        .finish()
}

/// Reports an error that ends the process. The caller exits afterwards.
pub fn fatal(err: &Error) {
    fatal_to(err, io::stderr());
}

/// Logs `err` as an error event, or writes it to `fallback` when logging is
/// not set up or the active filter would drop the event.
pub fn fatal_to<W: Write>(err: &Error, mut fallback: W) {
    if !err.is_logging_setup() && tracing::enabled!(Level::ERROR) {
        error!("{err}");
    } else {
        let _ = writeln!(fallback, "Application error: {err}");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
