use pad::{Alignment, PadStr};

/// Number of zip codes in a generated dataset.
pub const MAX_ZIP_CODES: usize = 100;

/// A run of zip codes sharing a prefix, with the numeric suffix
/// zero-padded to `width` digits.
struct ZipRange {
    prefix: &'static str,
    width: usize,
    first: u32,
    last: u32
}

const RANGES: [ZipRange; 2] = [
    ZipRange { prefix: "90", width: 3, first: 1, last: 89 },
    ZipRange { prefix: "941", width: 2, first: 2, last: 12 }
];

fn format_zip(prefix: &str, suffix: u32, width: usize) -> String {
    let padded = suffix.to_string().pad(width, '0', Alignment::Right, false);
    format!("{}{}", prefix, padded)
}

/// Builds the ordered list of candidate zip codes, 90001 through 90089
/// followed by 94102 through 94112, capped at `MAX_ZIP_CODES`.
///
/// # Examples
///
/// let zips = build_zip_codes();
/// assert_eq!(zips[0], "90001");
///
pub fn build_zip_codes() -> Vec<String> {
    let mut zips: Vec<String> = RANGES
        .iter()
        .flat_map(|r| (r.first..=r.last).map(move |n| format_zip(r.prefix, n, r.width)))
        .collect();

    zips.truncate(MAX_ZIP_CODES);
    zips
}
