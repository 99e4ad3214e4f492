//! File handling for the command line tool. The codec only sees byte buffers; this is
//! where they are read from and written to disk.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{error, info, warn};

use super::cli::{HuffOpts, Output};
use crate::compression::{compress::compress, decompress::decompress};
use crate::error::HuffError;

/// notes.txt -> notes.bin
pub fn compressed_path(input: &Path) -> PathBuf {
    input.with_extension("bin")
}

/// notes.bin -> notes_decompressed.txt
pub fn decompressed_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_decompressed.txt", stem))
}

/// Drop trailing ASCII whitespace.
pub fn trim_trailing(text: &[u8]) -> &[u8] {
    let end = text
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &text[..end]
}

/// An explicit output file wins over -c.
fn to_stdout(opts: &HuffOpts) -> bool {
    opts.output == Output::Stdout && opts.out_file.is_none()
}

/// Write to stdout or to a file, refusing to clobber an existing file unless forced.
fn write_output(opts: &HuffOpts, path: &Path, data: &[u8]) -> io::Result<()> {
    if to_stdout(opts) {
        let mut stdout = io::stdout();
        stdout.write_all(data)?;
        return stdout.flush();
    }
    if path.exists() && !opts.force_overwrite {
        error!("{} already exists, use -f to overwrite it.", path.display());
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }
    fs::write(path, data)?;
    info!("Wrote {} bytes to {}.", data.len(), path.display());
    Ok(())
}

fn read_text(opts: &HuffOpts) -> io::Result<Vec<u8>> {
    let mut text = fs::read(&opts.file)?;
    if opts.trim_trailing {
        let len = trim_trailing(&text).len();
        text.truncate(len);
    }
    Ok(text)
}

/// Compress the input file defined in opts. Returns the path written, or None when the
/// file held nothing to compress or the output went to stdout.
pub fn compress_file(opts: &HuffOpts) -> io::Result<Option<PathBuf>> {
    let text = read_text(opts)?;
    let container = match compress(&text) {
        Err(HuffError::EmptyInput) => {
            warn!("Empty file, nothing to compress");
            return Ok(None);
        }
        other => other?,
    };
    let path = opts
        .out_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| compressed_path(Path::new(&opts.file)));
    write_output(opts, &path, &container)?;
    Ok((!to_stdout(opts)).then(|| path))
}

/// Decompress the input file defined in opts. Returns the path written, or None when the
/// output went to stdout.
pub fn decompress_file(opts: &HuffOpts) -> io::Result<Option<PathBuf>> {
    let container = fs::read(&opts.file)?;
    let text = decompress(&container)?;
    let path = opts
        .out_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| decompressed_path(Path::new(&opts.file)));
    write_output(opts, &path, &text)?;
    Ok((!to_stdout(opts)).then(|| path))
}

/// Compress and decompress the input file in memory and check that the text survives.
/// Writes nothing.
pub fn test_file(opts: &HuffOpts) -> io::Result<()> {
    let text = read_text(opts)?;
    let container = match compress(&text) {
        Err(HuffError::EmptyInput) => {
            warn!("Empty file, nothing to compress");
            return Ok(());
        }
        other => other?,
    };
    if decompress(&container)? != text {
        error!("{} did not survive a round trip.", opts.file);
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "round trip mismatch",
        ));
    }
    info!(
        "{}: ok, {} bytes would compress to {}.",
        opts.file,
        text.len(),
        container.len()
    );
    Ok(())
}
