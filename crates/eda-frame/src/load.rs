//! CSV loading

use crate::Result;
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Read a delimited file with a header row into a `DataFrame`
///
/// Column types are inferred from the leading rows. A missing or
/// malformed file is a fatal error for the caller; there is no
/// recovery path.
pub fn read_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        cols = df.width(),
        "loaded csv"
    );
    Ok(df)
}
