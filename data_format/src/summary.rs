/// The (name, id) pair of a data row.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Identity {
    pub name: String,
    pub id: String,
}

/// Everything computed for one column, ready to be shown.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Summary {
    pub column: String,
    pub row_count: usize,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub mode: Option<f64>,
    pub min: Identity,
    pub max: Identity,
}
impl Summary {
    pub fn lines(&self) -> Vec<String> {
        let Self {
            column: _,
            row_count: _,
            mean,
            variance,
            standard_deviation,
            mode,
            min,
            max,
        } = self;
        let mode = mode
            .map(|m| format!("{m:?}"))
            .unwrap_or_else(|| "None".to_string());
        vec![
            format!("Mean: {mean:?}"),
            format!("Variance: {variance:?}"),
            format!("Standard Deviation: {standard_deviation:?}"),
            format!("Mode: {mode}"),
            format!("Min: {} (ID: {})", min.name, min.id),
            format!("Max: {} (ID: {})", max.name, max.id),
        ]
    }
}
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

#[test]
fn text_block() {
    let table = crate::Table::parse("name,id,x\na,10,1\nb,20,2\nc,30,3\nd,40,4\ne,50,5\n");
    let summary = crate::StatisticCalculator::new(&table, "x")
        .summary()
        .unwrap();
    assert_eq!(
        summary.to_string(),
        "Mean: 3.0\n\
         Variance: 2.0\n\
         Standard Deviation: 1.4142135623730951\n\
         Mode: None\n\
         Min: a (ID: 10)\n\
         Max: e (ID: 50)"
    );
}
#[test]
fn text_block_with_mode() {
    let summary = Summary {
        column: "x".into(),
        row_count: 4,
        mean: 2.75,
        variance: 0.6875,
        standard_deviation: 0.6875f64.sqrt(),
        mode: Some(2.),
        min: Identity {
            name: "first".into(),
            id: "1".into(),
        },
        max: Identity {
            name: "last".into(),
            id: "4".into(),
        },
    };
    let lines = summary.lines();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[3], "Mode: 2.0");
    assert_eq!(lines[5], "Max: last (ID: 4)");
}
