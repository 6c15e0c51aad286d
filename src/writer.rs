//! Rendering job records back to delimited text.

use csv::WriterBuilder;

use crate::error::Result;
use crate::record::JobRecord;

/// Render `jobs` as delimited text with `headers` as the first line.
///
/// Columns follow `headers`; a field missing from a record is written as an
/// empty cell. Cells containing the delimiter, a quote, or a line break are
/// quoted with embedded quotes doubled.
pub fn write_jobs<'a, I>(headers: &[String], jobs: I, delimiter: u8) -> Result<String>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for job in jobs {
        writer.write_record(headers.iter().map(|h| job.get(h).unwrap_or("")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    // Every cell came from a `String`, so the output is valid UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
