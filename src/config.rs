/// Options parsed from the command line. Built once, then moved into the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub verbose: bool,
}

impl Config {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}
