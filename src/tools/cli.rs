use clap::Parser;
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter, path::Path};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the -v level (0-5) to a verbosity.
    pub fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Name of the file to read for input
    pub file: String,
    /// Explicit output file, otherwise derived from the input name
    pub out_file: Option<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Strip trailing whitespace from the text before compressing
    pub trim_trailing: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            file: String::new(),
            out_file: None,
            force_overwrite: false,
            trim_trailing: true,
            op_mode: Mode::Zip,
            output: Output::File,
            verbose: Verbosity::Info,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A Huffman coding text compressor",
    long_about = "
    Compresses a text file into a .bin container holding the Huffman code table and the
    encoded text, and turns such a container back into text.

    Without -z or -d, files ending in .bin are decompressed and anything else is compressed."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Perform compression on the input file
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Compress and decompress in memory and check the result, write nothing
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Write output to this file instead of the derived name
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Keep trailing whitespace instead of trimming it before compression
    #[clap(long = "keep-trailing")]
    keep_trailing: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Copy parsed command line arguments into our internal structure.
pub fn opts_from_args(args: Args) -> HuffOpts {
    let mut opts = HuffOpts::new();

    opts.op_mode = if args.decompress {
        Mode::Unzip
    } else if args.compress {
        Mode::Zip
    } else if args.test {
        Mode::Test
    } else if Path::new(&args.filename)
        .extension()
        .map_or(false, |ext| ext == "bin")
    {
        Mode::Unzip
    } else {
        Mode::Zip
    };
    opts.file = args.filename;
    opts.out_file = args.output;
    opts.force_overwrite = args.force;
    opts.trim_trailing = !args.keep_trailing;
    if args.stdout {
        opts.output = Output::Stdout
    };
    opts.verbose = Verbosity::from_level(args.v);
    opts
}

/// Parse the process arguments.
pub fn huffopts_init() -> HuffOpts {
    opts_from_args(Args::parse())
}

/// Set the log level from the options and report the settings. Call after the logger
/// is installed, since installing it resets the level.
pub fn report_opts(opts: &HuffOpts) {
    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file);
    match &opts.out_file {
        Some(s) => info!("Sending output to {}", s),
        None => info!("Sending output to {}", opts.output),
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if !opts.trim_trailing {
        info!("Keeping trailing whitespace")
    };
}

#[cfg(test)]
mod test {
    use super::{opts_from_args, Args, Mode, Output, Verbosity};
    use clap::Parser;
    use log::LevelFilter;

    fn parse(args: &[&str]) -> super::HuffOpts {
        opts_from_args(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn mode_from_extension_test() {
        assert_eq!(parse(&["huffzip", "notes.txt"]).op_mode, Mode::Zip);
        assert_eq!(parse(&["huffzip", "notes.bin"]).op_mode, Mode::Unzip);
        assert_eq!(parse(&["huffzip", "-z", "notes.bin"]).op_mode, Mode::Zip);
        assert_eq!(parse(&["huffzip", "-d", "notes"]).op_mode, Mode::Unzip);
        assert_eq!(parse(&["huffzip", "-t", "notes.txt"]).op_mode, Mode::Test);
    }

    #[test]
    fn flags_test() {
        let opts = parse(&["huffzip", "-fc", "--keep-trailing", "-v", "5", "notes.txt"]);
        assert!(opts.force_overwrite);
        assert_eq!(opts.output, Output::Stdout);
        assert!(!opts.trim_trailing);
        assert_eq!(opts.verbose, Verbosity::Trace);
        assert_eq!(opts.out_file, None);

        let opts = parse(&["huffzip", "-o", "out.bin", "notes.txt"]);
        assert_eq!(opts.out_file.as_deref(), Some("out.bin"));
        assert!(opts.trim_trailing);
        assert_eq!(opts.verbose, Verbosity::Info);
    }

    #[test]
    fn missing_file_test() {
        assert!(Args::try_parse_from(["huffzip"]).is_err());
    }

    #[test]
    fn level_filter_test() {
        assert_eq!(Verbosity::from_level(0).level_filter(), LevelFilter::Off);
        assert_eq!(Verbosity::from_level(2).level_filter(), LevelFilter::Warn);
        assert_eq!(Verbosity::from_level(9).level_filter(), LevelFilter::Trace);
    }
}
