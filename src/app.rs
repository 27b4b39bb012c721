use std::convert::Infallible;

use tracing::{debug, info, info_span};

use crate::config::Config;

/// A unit of work owned by the entry point for the whole process lifetime.
///
/// `run` takes `self`, so an application can be run at most once.
pub trait Application: Sized {
    type Error: Into<Box<dyn std::error::Error + Send + Sync>>;

    fn new(config: Config) -> Self;

    fn run(self) -> Result<(), Self::Error>;
}

#[derive(Debug)]
pub struct App {
    config: Config,
}

impl Application for App {
    type Error = Infallible;

    fn new(config: Config) -> Self {
        Self { config }
    }

    fn run(self) -> Result<(), Self::Error> {
        let _span = info_span!("run").entered();
        debug!(verbose = self.config.verbose, "starting marketquantify");
        if self.config.verbose {
            debug!("verbose logging enabled");
        }
        info!("marketquantify finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{self, test_support::SharedBuf};

    #[test]
    fn run_reports_the_config_it_was_built_from() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let filter = logging::env_filter(true, None).unwrap();
        let subscriber = logging::subscriber(filter, move || writer.clone(), false);
        tracing::subscriber::with_default(subscriber, || {
            App::new(Config::new(true)).run().unwrap();
        });

        let out = buf.contents();
        assert!(out.contains("verbose=true"), "output: {out}");
        assert!(out.contains("verbose logging enabled"), "output: {out}");
    }

    #[test]
    fn default_app_runs_to_completion() {
        assert!(App::new(Config::default()).run().is_ok());
        assert!(App::new(Config::new(true)).run().is_ok());
    }
}
