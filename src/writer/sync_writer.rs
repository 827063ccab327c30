// src/writer/sync_writer.rs
use crate::dataset::Dataset;
use crate::error::Result;
use crate::options::CompileOptions;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Compile `dataset` and its chain and write the result to `path`.
///
/// Compilation happens before the file is created, so a dataset that
/// cannot be serialized leaves no partial file behind.
pub fn write_file(path: impl AsRef<Path>, dataset: &mut Dataset) -> Result<usize> {
    write_file_with(path, dataset, &CompileOptions::default())
}

pub fn write_file_with(
    path: impl AsRef<Path>,
    dataset: &mut Dataset,
    options: &CompileOptions,
) -> Result<usize> {
    let path = path.as_ref();
    let bytes = dataset.compile_with(options)?;

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    debug!(path = %path.display(), len = bytes.len(), datasets = dataset.chain_len(), "Wrote FCS file");
    Ok(bytes.len())
}
