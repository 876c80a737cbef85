use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rand::Rng;

use crate::error::Error;
use crate::schema::{Row, HEADER};
use crate::zipcodes::build_zip_codes;

/// Default destination, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "ZipCodes.csv";

/// Writes the header followed by one generated row per zip code, in order.
/// Returns the number of data rows written.
///
/// # Examples
///
/// let mut buf = Vec::new();
/// let n = write_rows(&mut buf, &mut rng, &build_zip_codes())?;
///
pub fn write_rows<W, R>(writer: W, rng: &mut R, zip_codes: &[String]) -> Result<usize, Error>
    where W: Write, R: Rng
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(&HEADER)?;

    let mut count = 0;
    for zip_code in zip_codes.iter() {
        let row = Row::generate(rng, zip_code);
        debug!("{}", row);
        csv_writer.serialize(&row)?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Creates (or truncates) the file at `path` and writes the dataset to it.
pub fn write_file<P, R>(path: P, rng: &mut R, zip_codes: &[String]) -> Result<usize, Error>
    where P: AsRef<Path>, R: Rng
{
    let file = File::create(path.as_ref())?;
    write_rows(file, rng, zip_codes)
}

/// Generates the full zip code dataset at `path`.
pub fn generate_dataset<P, R>(path: P, rng: &mut R) -> Result<usize, Error>
    where P: AsRef<Path>, R: Rng
{
    let start_time = Instant::now();
    let zip_codes = build_zip_codes();
    info!("Writing {} zip codes to {:?}", zip_codes.len(), path.as_ref());

    let rows = write_file(path.as_ref(), rng, &zip_codes)?;

    info!("{} rows written, {:.3} s elapsed", rows, start_time.elapsed().as_secs_f64());
    Ok(rows)
}
