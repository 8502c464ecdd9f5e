use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use zz4l::writer::OutputFormat;

#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum,
)]
pub(crate) enum Format {
    #[default]
    Json,
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(about, author, version)]
pub(crate) struct Opt {
    /// Output file
    #[clap(long, short)]
    pub(crate) outfile: PathBuf,

    /// Analysis configuration file in YAML format
    ///
    /// Omitted settings fall back to the standard analysis.
    #[clap(long, short)]
    pub(crate) config: Option<PathBuf>,

    /// Format of the output file
    #[clap(long, value_enum, default_value = "json")]
    pub(crate) outformat: Format,

    /// Verbosity level
    #[clap(
        short,
        long,
        default_value = "Info",
        help = "Verbosity level.\nPossible values with increasing amount of output are\n'off', 'error', 'warn', 'info', 'debug', 'trace'."
    )]
    pub(crate) loglevel: String,

    /// Number of threads
    ///
    /// A value of 0 means use all available cores.
    #[clap(long, default_value = "0")]
    pub(crate) threads: usize,

    /// Input event files
    #[clap(name = "INFILES", required = true)]
    pub(crate) infiles: Vec<PathBuf>,
}
