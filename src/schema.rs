use std::fmt;
use std::io::Read;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::generators::{generate_integer, generate_product};

pub const COMPANIES_MIN: u32 = 2;
pub const COMPANIES_MAX: u32 = 10;
pub const SALES_PER_COMPANY_MIN: u32 = 20_000;
pub const SALES_PER_COMPANY_MAX: u32 = 30_000;
pub const EMPLOYEES_PER_COMPANY_MIN: u32 = 8;
pub const EMPLOYEES_PER_COMPANY_MAX: u32 = 12;
pub const RMAT_MIN: u32 = 1;
pub const RMAT_MAX: u32 = 10;

/// Column names, in output order.
pub const HEADER: [&str; 5] = [
    "ZipCode",
    "Total number of companies",
    "Total sales",
    "Total employees",
    "RMAT Number"
];

/// Synthetic statistics for a single zip code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "ZipCode")]
    pub zip_code: String,
    #[serde(rename = "Total number of companies")]
    pub company_count: u32,
    #[serde(rename = "Total sales")]
    pub total_sales: u32,
    #[serde(rename = "Total employees")]
    pub total_employees: u32,
    #[serde(rename = "RMAT Number")]
    pub rmat_number: u32
}

impl Row {
    /// Draws a row for `zip_code`. Sales and employees are scaled by the
    /// company count; the RMAT number is drawn independently.
    pub fn generate<R: Rng>(rng: &mut R, zip_code: &str) -> Row {
        let company_count = generate_integer(rng, COMPANIES_MIN, COMPANIES_MAX);
        let total_sales = generate_product(
            rng, company_count, SALES_PER_COMPANY_MIN, SALES_PER_COMPANY_MAX);
        let total_employees = generate_product(
            rng, company_count, EMPLOYEES_PER_COMPANY_MIN, EMPLOYEES_PER_COMPANY_MAX);
        let rmat_number = generate_integer(rng, RMAT_MIN, RMAT_MAX);

        Row {
            zip_code: zip_code.to_string(),
            company_count: company_count,
            total_sales: total_sales,
            total_employees: total_employees,
            rmat_number: rmat_number
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{},{},{}",
               self.zip_code, self.company_count, self.total_sales,
               self.total_employees, self.rmat_number)
    }
}

/// Parses a dataset produced by `output::write_rows` back into rows.
/// The header row is matched by name.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>, Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize() {
        let row: Row = record?;
        rows.push(row);
    }
    Ok(rows)
}
