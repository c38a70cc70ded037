use crate::StatsError;

pub const DELIMITER: char = ',';

/// Rows of string cells, the first row being the header.
///
/// Rows are not required to have as many cells as the header, see [`Table::cell`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}
// Constructors
impl Table {
    pub fn read(path: impl AsRef<std::path::Path>) -> Result<Self, StatsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text);
        log::debug!(
            "Read {} data rows with {} columns from {}",
            table.row_count(),
            table.header.len(),
            path.display()
        );
        Ok(table)
    }
    pub fn parse(text: &str) -> Self {
        let mut lines = text
            .lines()
            .map(|line| line.trim_end())
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split(DELIMITER)
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>()
            });
        let header = lines.next().unwrap_or_default();
        Self {
            header,
            rows: lines.collect(),
        }
    }
}
// Getter
impl Table {
    pub fn header(&self) -> &[String] {
        &self.header
    }
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
    pub fn column_index(&self, name: &str) -> Result<usize, StatsError> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| StatsError::ColumnNotFound(name.to_string()))
    }
    pub fn cell(&self, row: usize, column: usize) -> Result<&str, StatsError> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|c| c.as_str())
            .ok_or(StatsError::MissingCell { row, column })
    }
}

#[cfg(test)]
pub(crate) fn write_temp_file(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "data_format_{}_{name}.txt",
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn parse_header_and_rows() {
    let table = Table::parse("name,id,score\na,10,5\nb,20,1\n");
    assert_eq!(table.header(), ["name", "id", "score"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[1], ["b", "20", "1"]);
}
#[test]
fn parse_trims_trailing_whitespace_only() {
    let table = Table::parse("name,id \r\n a,1\t\r\n");
    assert_eq!(table.header(), ["name", "id"]);
    assert_eq!(table.rows()[0], [" a", "1"]);
}
#[test]
fn parse_skips_blank_lines() {
    let table = Table::parse("x\n1\n\n2\n   \n");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(1, 0).unwrap(), "2");
}
#[test]
fn parse_has_no_quoting() {
    let table = Table::parse("name,id\n\"a,b\",1\n");
    assert_eq!(table.rows()[0], ["\"a", "b\"", "1"]);
}
#[test]
fn parse_empty_text() {
    let table = Table::parse("");
    assert!(table.header().is_empty());
    assert_eq!(table.row_count(), 0);
    assert!(matches!(
        table.column_index("x"),
        Err(StatsError::ColumnNotFound(name)) if name == "x"
    ));
}
#[test]
fn column_index_exact_match() {
    let table = Table::parse("Name,name,id\n");
    assert_eq!(table.column_index("name").unwrap(), 1);
    assert!(table.column_index("NAME").is_err());
    assert!(table.column_index("nam").is_err());
}
#[test]
fn cell_of_short_row() {
    let table = Table::parse("a,b,c\n1,2\n");
    assert_eq!(table.cell(0, 1).unwrap(), "2");
    assert!(matches!(
        table.cell(0, 2),
        Err(StatsError::MissingCell { row: 0, column: 2 })
    ));
}
#[test]
fn read_file() {
    let path = write_temp_file("read_file", "name,id,v\na,1,3\nb,2,4\nc,3,5\n");
    let table = Table::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.cell(2, 0).unwrap(), "c");
}
#[test]
fn read_missing_file() {
    let path = std::env::temp_dir().join("data_format_this_file_does_not_exist.txt");
    match Table::read(&path) {
        Err(StatsError::Io { path: p, source }) => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected an io error, got {other:?}"),
    }
}
