//! Command-line configuration.

use clap::Parser;

/// Plot address counters against instructions executed. Reads CSV with the
/// columns `executed,addr_mem,addr_any` from stdin.
///
/// Any single argument becomes the title, except `-h`/`--help` and
/// `-V`/`--version`, which clap handles itself.
#[derive(Parser, Debug)]
#[command(name = "addrplot", version, about)]
pub struct Cli {
    /// Chart title, used as given
    #[arg(allow_hyphen_values = true)]
    pub title: Option<String>,
}

/// Run options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Sets the chart title when present; untitled otherwise
    pub title: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config { title: self.title }
    }
}
