pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

use std::env;
use std::ffi::OsString;
use std::process;

pub use app::{App, Application};
pub use config::Config;
pub use error::{Error, Result};

pub fn run() -> Result<()> {
    run_with::<App, _, _>(env::args_os())
}

/// Parses `args` (program name first), sets up logging and launches `A`.
pub fn run_with<A, I, T>(args: I) -> Result<()>
where
    A: Application,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let config = cli::parse_args(cli::clap_setup(), args);
    logging::init(&config)?;
    launch::<A>(config)
}

/// Reports a failed run and exits with status 1. Returns on success.
pub fn exit_on_failure(result: Result<()>) {
    if let Err(e) = result {
        logging::fatal(&e);
        process::exit(1);
    }
}

/// Builds one `A` from `config` and runs it once.
pub fn launch<A: Application>(config: Config) -> Result<()> {
    A::new(config).run().map_err(|e| Error::Run(e.into()))
}
