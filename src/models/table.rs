//! Column-oriented table: the unified season data before and after normalization.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;

/// Cell spellings read as missing in every column (empty cells included).
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#NA", "<NA>", "N/A", "NA", "NULL", "NaN", "-NaN", "-nan", "None", "n/a", "nan",
    "null",
];

/// Errors raised while building a table.
#[derive(Debug)]
pub enum TableError {
    /// The underlying reader failed (I/O or invalid UTF-8).
    Csv(csv::Error),
    /// The source has no header row.
    NoColumns,
    /// A data row has more fields than the header.
    TooManyFields { line: u64, expected: usize, found: usize },
    /// A column does not have one cell per row.
    LengthMismatch { column: String, expected: usize, found: usize },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Csv(e) => write!(f, "{}", e),
            TableError::NoColumns => write!(f, "No columns to parse from file"),
            TableError::TooManyFields { line, expected, found } => {
                write!(f, "Expected {} fields in line {}, saw {}", expected, line, found)
            }
            TableError::LengthMismatch { column, expected, found } => {
                write!(f, "Column {} has {} cells, expected {}", column, found, expected)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<csv::Error> for TableError {
    fn from(e: csv::Error) -> Self {
        TableError::Csv(e)
    }
}

/// One column of cells. `None` is a missing value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    Text(Vec<Option<String>>),
    Number(Vec<Option<f64>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(cells) => cells.len(),
            Column::Number(cells) => cells.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell `i` rendered as text (numbers use their shortest display form).
    pub fn text_at(&self, i: usize) -> Option<String> {
        match self {
            Column::Text(cells) => cells.get(i).cloned().flatten(),
            Column::Number(cells) => cells.get(i).copied().flatten().map(|v| v.to_string()),
        }
    }

    fn extend_missing(&mut self, n: usize) {
        match self {
            Column::Text(cells) => cells.extend(std::iter::repeat(None).take(n)),
            Column::Number(cells) => cells.extend(std::iter::repeat(None).take(n)),
        }
    }

    fn into_text(self) -> Vec<Option<String>> {
        match self {
            Column::Text(cells) => cells,
            Column::Number(cells) => cells.into_iter().map(|c| c.map(|v| v.to_string())).collect(),
        }
    }
}

/// Named columns of equal length, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a header row and text cells from comma-separated input.
    ///
    /// Rows shorter than the header are padded with missing cells; longer rows are an error.
    /// Duplicate header names get a `.1`, `.2`, ... suffix.
    pub fn from_csv<R: Read>(input: R) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        if headers.is_empty() || (headers.len() == 1 && headers[0].trim().is_empty()) {
            return Err(TableError::NoColumns);
        }
        let names = dedupe_names(headers.iter());
        let width = names.len();

        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
        for result in reader.records() {
            let record = result?;
            if record.len() > width {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(TableError::TooManyFields {
                    line,
                    expected: width,
                    found: record.len(),
                });
            }
            for (i, column) in cells.iter_mut().enumerate() {
                column.push(record.get(i).and_then(read_cell));
            }
        }

        let rows = cells.first().map(Vec::len).unwrap_or(0);
        Ok(Self {
            names,
            columns: cells.into_iter().map(Column::Text).collect(),
            rows,
        })
    }

    /// Stack tables vertically. Columns are the union of all names in first-seen order;
    /// rows from a table lacking a column get missing cells. A column stays numeric only
    /// when every table holding it has it numeric.
    pub fn concat(tables: Vec<Table>) -> Table {
        let mut order: Vec<String> = Vec::new();
        let mut all_numeric: HashMap<String, bool> = HashMap::new();
        for t in &tables {
            for (name, column) in t.names.iter().zip(&t.columns) {
                let numeric = matches!(column, Column::Number(_));
                match all_numeric.get_mut(name) {
                    Some(flag) => *flag &= numeric,
                    None => {
                        order.push(name.clone());
                        all_numeric.insert(name.clone(), numeric);
                    }
                }
            }
        }

        // Every table holding a numeric output column holds it numeric.
        let mut out: Vec<Column> = order
            .iter()
            .map(|name| {
                if all_numeric[name] {
                    Column::Number(Vec::new())
                } else {
                    Column::Text(Vec::new())
                }
            })
            .collect();
        let mut rows = 0;

        for t in tables {
            let Table { names, columns, rows: n } = t;
            let mut by_name: HashMap<String, Column> = names.into_iter().zip(columns).collect();
            for (name, target) in order.iter().zip(out.iter_mut()) {
                match (by_name.remove(name), target) {
                    (Some(Column::Number(src)), Column::Number(dst)) => dst.extend(src),
                    (Some(src), Column::Text(dst)) => dst.extend(src.into_text()),
                    (_, dst) => dst.extend_missing(n),
                }
            }
            rows += n;
        }

        Table {
            names: order,
            columns: out,
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        let idx = self.names.iter().position(|n| n == name)?;
        self.columns.get(idx)
    }

    /// Numeric cells of `name`, or `None` if absent or still text.
    pub fn number(&self, name: &str) -> Option<&[Option<f64>]> {
        match self.column(name)? {
            Column::Number(cells) => Some(cells),
            Column::Text(_) => None,
        }
    }

    /// Add a column, or replace the one with the same name in place.
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) -> Result<(), TableError> {
        let name = name.into();
        if !self.names.is_empty() && column.len() != self.rows {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.rows,
                found: column.len(),
            });
        }
        self.set_column(name, column);
        Ok(())
    }

    /// `push_column` for callers that built the column from this table's own rows.
    pub(crate) fn set_column(&mut self, name: String, column: Column) {
        if self.names.is_empty() {
            self.rows = column.len();
        }
        match self.names.iter().position(|n| *n == name) {
            Some(idx) => self.columns[idx] = column,
            None => {
                self.names.push(name);
                self.columns.push(column);
            }
        }
    }
}

fn read_cell(raw: &str) -> Option<String> {
    if NA_TOKENS.contains(&raw) || NA_TOKENS.contains(&raw.trim()) {
        None
    } else {
        Some(raw.to_string())
    }
}

fn dedupe_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();
    for h in headers {
        let count = seen.entry(h.to_string()).or_insert(0);
        if *count == 0 {
            names.push(h.to_string());
        } else {
            names.push(format!("{}.{}", h, count));
        }
        *count += 1;
    }
    names
}
