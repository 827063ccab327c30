// src/writer/async_writer.rs
use crate::dataset::Dataset;
use crate::error::Result;
use crate::options::CompileOptions;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Async counterpart of [`write_file`](crate::writer::write_file)
pub async fn write_file_async(path: impl AsRef<Path>, dataset: &mut Dataset) -> Result<usize> {
    write_file_async_with(path, dataset, &CompileOptions::default()).await
}

pub async fn write_file_async_with(
    path: impl AsRef<Path>,
    dataset: &mut Dataset,
    options: &CompileOptions,
) -> Result<usize> {
    let path = path.as_ref();
    let bytes = dataset.compile_with(options)?;

    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(&bytes).await?;
    file.flush().await?;

    debug!(path = %path.display(), len = bytes.len(), "Wrote FCS file");
    Ok(bytes.len())
}
