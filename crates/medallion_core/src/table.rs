use csv::ReaderBuilder;

/// An ordered set of rows sharing one header row, parsed from or serialized
/// to UTF-8 CSV text. Transforms never mutate a table in place; they build a
/// new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    Csv(String),
    MissingColumn(String),
}

impl TableError {
    pub fn message(&self) -> String {
        match self {
            Self::Csv(message) => format!("invalid csv input: {message}"),
            Self::MissingColumn(column) => format!("required column '{column}' is missing"),
        }
    }
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for TableError {}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Parses UTF-8 CSV text with a header row. Every data row must carry
    /// exactly one value per header; ragged rows are rejected by the reader.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, TableError> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);
        let headers = reader
            .headers()
            .map_err(|error| TableError::Csv(error.to_string()))?
            .iter()
            .map(String::from)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|error| TableError::Csv(error.to_string()))?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Serializes the header row followed by every data row. Writing string
    /// data into an in-memory buffer has no failure path worth surfacing.
    pub fn to_csv(&self) -> Vec<u8> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.headers)
            .expect("csv serialization to memory should not fail");
        for row in &self.rows {
            writer
                .write_record(row)
                .expect("csv serialization to memory should not fail");
        }
        writer
            .into_inner()
            .expect("csv writer flush to memory should not fail")
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Index of a named column, exact match.
    pub fn column(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }
}
