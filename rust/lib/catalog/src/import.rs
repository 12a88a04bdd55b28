//! Bulk import of delimited inventory exports.
//!
//! The export format is a `;`-separated file with a header row, usually
//! saved with a UTF-8 BOM. Columns are matched by header name:
//!
//! | header        | field              |
//! |---------------|--------------------|
//! | `ActivoFijo`  | `inventory_number` |
//! | `Equipo`      | `product_name`     |
//! | `NumeroSerie` | `serial_number`    |
//! | `Marca`       | `brand`            |
//! | `Modelo`      | `model`            |
//! | `TipoEquipo`  | `equipment_type`   |

use std::collections::HashSet;

use thiserror::Error;
use tracing::{info, warn};

use crate::api::CatalogApi;
use crate::error::ApiError;
use crate::model::{CreateOutcome, NewProduct};

pub const DEFAULT_DELIMITER: char = ';';

const COL_INVENTORY: &str = "ActivoFijo";
const COL_NAME: &str = "Equipo";
const COL_SERIAL: &str = "NumeroSerie";
const COL_BRAND: &str = "Marca";
const COL_MODEL: &str = "Modelo";
const COL_TYPE: &str = "TipoEquipo";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("input has no header row")]
    Empty,

    #[error("missing column {0:?}")]
    MissingColumn(&'static str),

    /// Existing keys could not be fetched before importing.
    #[error("catalog: {0}")]
    Catalog(#[from] ApiError),
}

/// One data row ready to submit. `line` is 1-based and counts the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub line: usize,
    pub product: NewProduct,
}

/// Parsed file: submittable rows and rows rejected while parsing.
#[derive(Debug, Default)]
pub struct ImportBatch {
    pub rows: Vec<ImportRow>,
    pub rejected: Vec<(usize, String)>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Keys that already existed, in the catalog or earlier in the file.
    pub skipped: Vec<String>,
    /// `(line, reason)` for rows that could not be imported.
    pub failed: Vec<(usize, String)>,
}

struct Columns {
    inventory: usize,
    name: usize,
    serial: Option<usize>,
    brand: Option<usize>,
    model: Option<usize>,
    equipment_type: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, ImportError> {
        let find = |name: &str| header.iter().position(|h| h == name);
        Ok(Self {
            inventory: find(COL_INVENTORY).ok_or(ImportError::MissingColumn(COL_INVENTORY))?,
            name: find(COL_NAME).ok_or(ImportError::MissingColumn(COL_NAME))?,
            serial: find(COL_SERIAL),
            brand: find(COL_BRAND),
            model: find(COL_MODEL),
            equipment_type: find(COL_TYPE),
        })
    }

    fn product(&self, fields: &[String]) -> NewProduct {
        let get = |idx: usize| fields.get(idx).cloned().unwrap_or_default();
        let opt = |idx: Option<usize>| idx.and_then(|i| fields.get(i)).cloned();
        NewProduct {
            inventory_number: get(self.inventory),
            product_name: get(self.name),
            serial_number: opt(self.serial),
            brand: opt(self.brand),
            model: opt(self.model),
            equipment_type: opt(self.equipment_type),
        }
        .normalized()
    }
}

/// Parse an export. Fails only when the header is unusable; bad data rows
/// land in [`ImportBatch::rejected`].
pub fn parse(text: &str, delimiter: char) -> Result<ImportBatch, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty());

    let (_, header) = lines.next().ok_or(ImportError::Empty)?;
    let columns = Columns::from_header(&split_record(header, delimiter))?;

    let mut batch = ImportBatch::default();
    for (line, raw) in lines {
        let product = columns.product(&split_record(raw, delimiter));
        match product.missing_required() {
            Some(field) => batch.rejected.push((line, format!("{} is empty", field))),
            None => batch.rows.push(ImportRow { line, product }),
        }
    }
    Ok(batch)
}

/// Split one record, honouring double-quoted fields (`""` escapes a quote).
fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            c if c == delimiter && !quoted => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            c => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

/// Submit every row of `batch`, one request at a time.
///
/// Keys already in the catalog are skipped without a request. A rejected
/// or failed create is recorded and the import moves on.
pub async fn run(api: &dyn CatalogApi, batch: ImportBatch) -> Result<ImportSummary, ImportError> {
    let mut seen: HashSet<String> = api
        .list_products()
        .await?
        .into_iter()
        .map(|p| p.inventory_number)
        .collect();

    let mut summary = ImportSummary {
        failed: batch.rejected,
        ..Default::default()
    };

    for row in batch.rows {
        let key = row.product.inventory_number.clone();
        if !seen.insert(key.clone()) {
            info!(line = row.line, inventory_number = %key, "skip existing");
            summary.skipped.push(key);
            continue;
        }
        match api.create_product(&row.product).await {
            Ok(CreateOutcome::Success { .. }) => summary.imported += 1,
            Ok(CreateOutcome::Failure { message }) => {
                warn!(line = row.line, %message, "import row rejected");
                summary.failed.push((row.line, message));
            }
            Err(e) => {
                warn!(line = row.line, error = %e, "import row failed");
                summary.failed.push((row.line, e.to_string()));
            }
        }
    }
    summary.failed.sort_by_key(|(line, _)| *line);
    Ok(summary)
}
