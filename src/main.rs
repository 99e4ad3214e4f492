//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffzip::tools::{
    cli::{huffopts_init, report_opts, Mode, Output},
    files::{compress_file, decompress_file, test_file},
};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    let options = huffopts_init();

    // Keep log lines out of the data when the data itself goes to stdout.
    let terminal = match (options.output, &options.out_file) {
        (Output::Stdout, None) => TerminalMode::Stderr,
        _ => TerminalMode::Stdout,
    };
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        terminal,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }
    report_opts(&options);

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress_file(&options).map(|written| {
            if let Some(path) = written {
                info!("File compressed to: {}", path.display());
            }
        }),
        Mode::Unzip => decompress_file(&options).map(|written| {
            if let Some(path) = written {
                info!("File decompressed to: {}", path.display());
            }
        }),
        Mode::Test => test_file(&options),
    };

    match &result {
        Ok(()) => info!("Done."),
        Err(e) => error!("{}: {}", options.file, e),
    }
    result
}
