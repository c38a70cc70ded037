use crate::{FiniteF64, Identity, StatsError, Summary, Table};

pub const NAME_COLUMN: &str = "name";
pub const ID_COLUMN: &str = "id";

/// Statistics over one named column of a [`Table`].
///
/// Nothing is cached: every call re-resolves the column and re-parses its cells.
pub struct StatisticCalculator<'a> {
    table: &'a Table,
    column_name: String,
}
impl<'a> StatisticCalculator<'a> {
    pub fn new(table: &'a Table, column_name: impl Into<String>) -> Self {
        Self {
            table,
            column_name: column_name.into(),
        }
    }
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn resolve_column(&self) -> Result<usize, StatsError> {
        self.table.column_index(&self.column_name).map_err(|e| {
            log::warn!("Column '{}' not found", self.column_name);
            e
        })
    }

    pub fn numeric_values(&self) -> Result<Vec<f64>, StatsError> {
        let column = self.resolve_column()?;
        (0..self.table.row_count())
            .map(|row| {
                let value = self.table.cell(row, column)?;
                let trimmed = value.trim();
                let f = trimmed.parse::<f64>().map_err(|source| StatsError::Parse {
                    row,
                    column: self.column_name.clone(),
                    value: value.to_string(),
                    source,
                })?;
                FiniteF64::new_checked(f)
                    .map(|f| f.inner())
                    .ok_or_else(|| StatsError::NonFinite {
                        row,
                        column: self.column_name.clone(),
                        value: value.to_string(),
                    })
            })
            .collect()
    }

    /// Values which are known to be non-empty.
    fn non_empty_values(&self) -> Result<Vec<f64>, StatsError> {
        let values = self.numeric_values()?;
        if values.is_empty() {
            Err(StatsError::EmptyColumn(self.column_name.clone()))
        } else {
            Ok(values)
        }
    }

    pub fn mean(&self) -> Result<f64, StatsError> {
        self.non_empty_values().map(|values| mean_of(&values))
    }

    /// Population variance, i.e. the squared deviations are divided by `N`.
    pub fn variance(&self) -> Result<f64, StatsError> {
        let values = self.non_empty_values()?;
        let mean = mean_of(&values);
        let squared_diff: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
        Ok(squared_diff / values.len() as f64)
    }

    pub fn standard_deviation(&self) -> Result<f64, StatsError> {
        self.variance().map(f64::sqrt)
    }

    /// The value occurring strictly more often than every other value.
    ///
    /// `None` if several values share the highest count, or if all values occur
    /// equally often (this includes a column with a single distinct value).
    pub fn mode(&self) -> Result<Option<f64>, StatsError> {
        let values = self.numeric_values()?;
        let mut counts = std::collections::BTreeMap::<FiniteF64, usize>::new();
        for f in values {
            *counts.entry(FiniteF64::new(f)).or_default() += 1;
        }
        let Some(&highest) = counts.values().max() else {
            return Ok(None);
        };
        let lowest = counts.values().min().copied().unwrap_or(highest);
        let mut leaders = counts.iter().filter(|&(_, &count)| count == highest);
        match (leaders.next(), leaders.next()) {
            (Some((value, _)), None) if lowest < highest => Ok(Some(value.inner())),
            _ => Ok(None),
        }
    }

    /// Data row indices of the minimum and the maximum, first occurrence wins.
    pub fn min_max_indices(&self) -> Result<(usize, usize), StatsError> {
        let values = self.non_empty_values()?;
        let mut min = 0;
        let mut max = 0;
        for (index, &f) in values.iter().enumerate().skip(1) {
            if f < values[min] {
                min = index;
            }
            if f > values[max] {
                max = index;
            }
        }
        Ok((min, max))
    }

    pub fn min_max_identity(&self) -> Result<(Identity, Identity), StatsError> {
        let (min, max) = self.min_max_indices()?;
        let name = self.table.column_index(NAME_COLUMN)?;
        let id = self.table.column_index(ID_COLUMN)?;
        let identity = |row: usize| -> Result<Identity, StatsError> {
            Ok(Identity {
                name: self.table.cell(row, name)?.to_string(),
                id: self.table.cell(row, id)?.to_string(),
            })
        };
        Ok((identity(min)?, identity(max)?))
    }

    pub fn summary(&self) -> Result<Summary, StatsError> {
        let (min, max) = self.min_max_identity()?;
        let summary = Summary {
            column: self.column_name.clone(),
            row_count: self.table.row_count(),
            mean: self.mean()?,
            variance: self.variance()?,
            standard_deviation: self.standard_deviation()?,
            mode: self.mode()?,
            min,
            max,
        };
        log::info!(
            "Calculated statistics for '{}': {:?}",
            summary.column,
            [
                Some(summary.mean),
                Some(summary.variance),
                Some(summary.standard_deviation),
                summary.mode
            ]
        );
        Ok(summary)
    }
}

fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
fn single_column(values: &[&str]) -> Table {
    let mut text = "x\n".to_string();
    for v in values {
        text.push_str(v);
        text.push('\n');
    }
    Table::parse(&text)
}

#[test]
fn statistics_of_one_to_five() {
    let table = single_column(&["1", "2", "3", "4", "5"]);
    let calc = StatisticCalculator::new(&table, "x");
    assert_eq!(calc.mean().unwrap(), 3.);
    assert_eq!(calc.variance().unwrap(), 2.);
    assert!((calc.standard_deviation().unwrap() - 1.4142).abs() < 1e-4);
    assert_eq!(calc.mode().unwrap(), None);
}
#[test]
fn agrees_with_statrs() {
    use statrs::statistics::Statistics;
    let values = ["0.5", "-3.25", "12", "7.125", "7.125", "1e2", " 4 "];
    let table = single_column(&values);
    let calc = StatisticCalculator::new(&table, "x");
    let expected: Vec<f64> = values.iter().map(|v| v.trim().parse().unwrap()).collect();
    assert_eq!(calc.numeric_values().unwrap(), expected);
    assert!((calc.mean().unwrap() - expected.iter().mean()).abs() < 1e-12);
    assert!((calc.variance().unwrap() - expected.iter().population_variance()).abs() < 1e-9);
    assert!(
        (calc.standard_deviation().unwrap() - expected.iter().population_std_dev()).abs() < 1e-9
    );
}
#[test]
fn mode_unique() {
    let table = single_column(&["2", "2", "3", "4"]);
    assert_eq!(StatisticCalculator::new(&table, "x").mode().unwrap(), Some(2.));
}
#[test]
fn mode_compares_numerically() {
    let table = single_column(&["2.0", "3", "2", "-0", "0"]);
    assert_eq!(StatisticCalculator::new(&table, "x").mode().unwrap(), None);
    let table = single_column(&["2.0", "3", "2"]);
    assert_eq!(StatisticCalculator::new(&table, "x").mode().unwrap(), Some(2.));
}
#[test]
fn mode_tie_is_none() {
    let table = single_column(&["2", "2", "3", "3", "4"]);
    assert_eq!(StatisticCalculator::new(&table, "x").mode().unwrap(), None);
}
#[test]
fn mode_uniform_and_single_is_none() {
    let table = single_column(&["7", "7", "7"]);
    assert_eq!(StatisticCalculator::new(&table, "x").mode().unwrap(), None);
    let table = single_column(&["7"]);
    assert_eq!(StatisticCalculator::new(&table, "x").mode().unwrap(), None);
}
#[test]
fn missing_column() {
    let table = Table::parse("name,id,y\na,1,2\n");
    let calc = StatisticCalculator::new(&table, "x");
    assert!(matches!(calc.resolve_column(), Err(StatsError::ColumnNotFound(c)) if c == "x"));
    assert!(matches!(calc.numeric_values(), Err(StatsError::ColumnNotFound(_))));
    assert!(matches!(calc.mean(), Err(StatsError::ColumnNotFound(_))));
    assert!(matches!(calc.variance(), Err(StatsError::ColumnNotFound(_))));
    assert!(matches!(calc.mode(), Err(StatsError::ColumnNotFound(_))));
}
#[test]
fn header_only() {
    let table = Table::parse("name,id,x\n");
    let calc = StatisticCalculator::new(&table, "x");
    assert!(calc.numeric_values().unwrap().is_empty());
    assert!(matches!(calc.mean(), Err(StatsError::EmptyColumn(c)) if c == "x"));
    assert!(matches!(calc.variance(), Err(StatsError::EmptyColumn(_))));
    assert!(matches!(calc.min_max_indices(), Err(StatsError::EmptyColumn(_))));
    assert_eq!(calc.mode().unwrap(), None);
}
#[test]
fn non_numeric_cell() {
    let table = single_column(&["1", "two", "3"]);
    match StatisticCalculator::new(&table, "x").numeric_values() {
        Err(StatsError::Parse { row, column, value, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "x");
            assert_eq!(value, "two");
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}
#[test]
fn non_finite_cell() {
    let table = single_column(&["1", "NaN"]);
    assert!(matches!(
        StatisticCalculator::new(&table, "x").mean(),
        Err(StatsError::NonFinite { row: 1, .. })
    ));
    let table = single_column(&["inf"]);
    assert!(matches!(
        StatisticCalculator::new(&table, "x").mean(),
        Err(StatsError::NonFinite { row: 0, .. })
    ));
}
#[test]
fn short_row() {
    let table = Table::parse("name,id,x\na,1,3\nb,2\n");
    assert!(matches!(
        StatisticCalculator::new(&table, "x").numeric_values(),
        Err(StatsError::MissingCell { row: 1, column: 2 })
    ));
}
#[test]
fn min_max() {
    let table = Table::parse("name,id,x\na,10,5\nb,20,1\nc,30,9\nd,40,3\n");
    let calc = StatisticCalculator::new(&table, "x");
    assert_eq!(calc.min_max_indices().unwrap(), (1, 2));
    let (min, max) = calc.min_max_identity().unwrap();
    assert_eq!(
        min,
        Identity {
            name: "b".into(),
            id: "20".into()
        }
    );
    assert_eq!(
        max,
        Identity {
            name: "c".into(),
            id: "30".into()
        }
    );
}
#[test]
fn min_max_first_occurrence() {
    let table = single_column(&["4", "1", "9", "1", "9"]);
    let calc = StatisticCalculator::new(&table, "x");
    assert_eq!(calc.min_max_indices().unwrap(), (1, 2));
}
#[test]
fn min_max_identity_needs_name_and_id() {
    let table = Table::parse("name,x\na,1\n");
    let calc = StatisticCalculator::new(&table, "x");
    assert_eq!(calc.min_max_indices().unwrap(), (0, 0));
    assert!(matches!(
        calc.min_max_identity(),
        Err(StatsError::ColumnNotFound(c)) if c == ID_COLUMN
    ));
}
#[test]
fn identity_columns_as_statistics_column() {
    let table = Table::parse("name,id\na,3\nb,1\n");
    let calc = StatisticCalculator::new(&table, "id");
    let (min, max) = calc.min_max_identity().unwrap();
    assert_eq!((min.name.as_str(), min.id.as_str()), ("b", "1"));
    assert_eq!((max.name.as_str(), max.id.as_str()), ("a", "3"));
}
#[test]
fn idempotent() {
    let table = single_column(&["0.1", "0.2", "0.2", "0.7"]);
    let calc = StatisticCalculator::new(&table, "x");
    assert_eq!(calc.mean().unwrap(), calc.mean().unwrap());
    assert_eq!(calc.variance().unwrap(), calc.variance().unwrap());
    assert_eq!(calc.mode().unwrap(), calc.mode().unwrap());
    assert_eq!(calc.mode().unwrap(), Some(0.2));
}
#[test]
fn read_then_extract_keeps_row_order() {
    let path = crate::table::write_temp_file(
        "read_then_extract",
        "name,id,x\na,1,3.5\nb,2,-1\nc,3,8\nd,4,0\n",
    );
    let table = Table::read(&path);
    std::fs::remove_file(&path).unwrap();
    let table = table.unwrap();
    let values = StatisticCalculator::new(&table, "x")
        .numeric_values()
        .unwrap();
    assert_eq!(values.len(), table.row_count());
    assert_eq!(values, vec![3.5, -1., 8., 0.]);
}
#[test]
fn summary_collects_everything() {
    let table = Table::parse("name,id,x\na,10,5\nb,20,1\nc,30,9\nd,40,3\ne,50,3\n");
    let summary = StatisticCalculator::new(&table, "x").summary().unwrap();
    assert_eq!(summary.column, "x");
    assert_eq!(summary.row_count, 5);
    assert_eq!(summary.mean, 4.2);
    assert!((summary.variance - 7.36).abs() < 1e-12);
    assert!((summary.standard_deviation - 7.36f64.sqrt()).abs() < 1e-12);
    assert_eq!(summary.mode, Some(3.));
    assert_eq!(summary.min.name, "b");
    assert_eq!(summary.max.id, "30");
}
