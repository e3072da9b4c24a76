//! Plain-text trace files.
//!
//! Reads input traces line by line and writes raw line buckets back out,
//! one line per entry. Input bytes that are not UTF-8 are read lossily.

use super::prepare_path;
use crate::utils::error::{OutputError, TraceError};
use log::{debug, info};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Read every line of a trace file, without line terminators
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, TraceError> {
    let path = path.as_ref();

    debug!("Reading trace from: {}", path.display());

    let file = File::open(path).map_err(|source| TraceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    BufReader::new(file)
        .split(b'\n')
        .map(|line| {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(String::from_utf8_lossy(&line).into_owned())
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TraceError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Copy a trace file byte for byte
pub fn copy_trace(input: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    prepare_path(output_path)?;

    let bytes = fs::copy(input.as_ref(), output_path).map_err(OutputError::WriteFailed)?;

    info!("Trace copied to: {} ({} bytes)", output_path.display(), bytes);

    Ok(())
}

/// Write lines to `output_path`, each terminated by a newline
pub fn write_lines<S: AsRef<str>>(
    lines: &[S],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(OutputError::WriteFailed)?;
    }

    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Trace written to: {} ({} lines)", output_path.display(), lines.len());

    Ok(())
}

/// `input` with `suffix` appended to its file name, e.g. `boot.log_hwio`
pub fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = input.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
