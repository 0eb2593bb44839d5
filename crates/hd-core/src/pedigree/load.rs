//! CSV pedigree loader.
//!
//! Expected columns (header required, any order, case-insensitive):
//! `name`, `mother`, `father`, `trait`. Blank parents are unknown. The
//! trait column holds `1` (present), `0` (absent) or blank (unknown).

use std::io::Read;
use std::path::Path;

use hd_common::{Error, PersonId, Result};
use tracing::debug;

use super::{Pedigree, PersonRecord, TraitEvidence};

/// Read a pedigree from a CSV file and validate it.
///
/// # Errors
/// Returns an error if the file cannot be read, a column is missing, a row
/// is malformed, or the resulting pedigree is structurally invalid.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Pedigree> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = read_csv(file)?;
    debug!(path = %path.display(), rows = records.len(), "pedigree CSV read");
    Pedigree::from_records(records)
}

/// Parse person records from CSV text without structural validation.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<PersonRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::Data(format!("CSV missing '{}' column", name)))
    };
    let name_col = column("name")?;
    let mother_col = column("mother")?;
    let father_col = column("father")?;
    let trait_col = column("trait")?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1.
        let line = row + 2;
        let field = |col: usize| record.get(col).unwrap_or("");

        let id = PersonId::parse(field(name_col))
            .ok_or_else(|| Error::Data(format!("line {}: empty name", line)))?;

        records.push(PersonRecord {
            id,
            mother: PersonId::parse(field(mother_col)),
            father: PersonId::parse(field(father_col)),
            evidence: parse_trait(field(trait_col))
                .map_err(|msg| Error::Data(format!("line {}: {}", line, msg)))?,
        });
    }

    Ok(records)
}

/// Parse the trait column.
fn parse_trait(raw: &str) -> std::result::Result<TraitEvidence, String> {
    match raw.trim() {
        "1" => Ok(TraitEvidence::Present),
        "0" => Ok(TraitEvidence::Absent),
        "" => Ok(TraitEvidence::Unknown),
        other => Err(format!("trait must be 0, 1 or blank, got '{}'", other)),
    }
}
