pub mod atom;
pub mod chain;
pub mod hadron;
pub mod molecule;
pub mod table;

use crate::cli::OutputArgs;
use crate::error::{CliError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Reads one JSON document (a record or an array of records) from `path`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub(crate) fn write_json<T: Serialize>(value: &T, output: &OutputArgs) -> Result<()> {
    match &output.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            emit(&mut writer, value, output.compact)?;
            writer.flush()?;
            info!(path = %path.display(), "Wrote result.");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            emit(&mut handle, value, output.compact)?;
        }
    }
    Ok(())
}

fn emit<W: Write, T: Serialize>(writer: &mut W, value: &T, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
