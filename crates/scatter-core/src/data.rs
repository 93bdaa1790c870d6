// File: crates/scatter-core/src/data.rs
// Summary: Record/Dataset model and strict CSV loading (state, abbr, smokes, age).

use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ChartError, Result};

/// Numeric attribute of a [`Record`] that can be bound to an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Smokes,
    Age,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Smokes, Field::Age];

    /// Column name in the input file.
    pub const fn column(self) -> &'static str {
        match self {
            Field::Smokes => "smokes",
            Field::Age => "age",
        }
    }

    /// Axis title.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Smokes => "Smokes (%)",
            Field::Age => "Age (Median)",
        }
    }

    /// Short label used in tooltip lines.
    pub const fn tooltip_label(self) -> &'static str {
        match self {
            Field::Smokes => "Smokes",
            Field::Age => "Age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Field {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.column().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChartError::UnknownField(s.to_string()))
    }
}

/// One observed state.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    pub smokes: f64,
    pub age: f64,
}

impl Record {
    pub fn new(state: impl Into<String>, abbr: impl Into<String>, smokes: f64, age: f64) -> Self {
        Self { state: state.into(), abbr: abbr.into(), smokes, age }
    }

    #[inline]
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Smokes => self.smokes,
            Field::Age => self.age,
        }
    }
}

/// Non-empty, validated collection of records.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

const COL_STATE: &str = "state";
const COL_ABBR: &str = "abbr";

impl Dataset {
    /// Wrap already-built records, enforcing the same invariants as the CSV loader.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        for (i, r) in records.iter().enumerate() {
            for field in Field::ALL {
                let v = r.value(field);
                if let Some(reason) = check_value(v) {
                    return Err(ChartError::InvalidRecord {
                        line: i as u64 + 1,
                        state: r.state.clone(),
                        field,
                        value: v.to_string(),
                        reason,
                    });
                }
            }
        }
        Ok(Self { records })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let ds = Self::from_reader(file)?;
        debug!(path = %path.display(), records = ds.len(), "loaded dataset");
        Ok(ds)
    }

    /// Parse CSV with a header row. Extra columns are ignored; required ones are
    /// matched case-insensitively. Short rows report their missing cells as empty values.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        let idx = |name: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(ChartError::MissingColumn(name))
        };
        let i_state = idx(COL_STATE)?;
        let i_abbr = idx(COL_ABBR)?;
        let i_smokes = idx(Field::Smokes.column())?;
        let i_age = idx(Field::Age.column())?;

        let mut records = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            let cell = |i: usize| rec.get(i).unwrap_or("");
            let state = cell(i_state).to_string();
            let smokes = parse_value(line, &state, Field::Smokes, cell(i_smokes))?;
            let age = parse_value(line, &state, Field::Age, cell(i_age))?;
            records.push(Record { abbr: cell(i_abbr).to_string(), state, smokes, age });
        }
        Self::new(records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// `(min, max)` of `field` over all records.
    pub fn extent(&self, field: Field) -> (f64, f64) {
        self.records.iter().map(|r| r.value(field)).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), v| (lo.min(v), hi.max(v)),
        )
    }
}

fn check_value(v: f64) -> Option<&'static str> {
    if !v.is_finite() {
        Some("not a finite number")
    } else if v < 0.0 {
        Some("negative value")
    } else {
        None
    }
}

fn parse_value(line: u64, state: &str, field: Field, raw: &str) -> Result<f64> {
    let invalid = |reason| ChartError::InvalidRecord {
        line,
        state: state.to_string(),
        field,
        value: raw.to_string(),
        reason,
    };
    if raw.is_empty() {
        return Err(invalid("empty value"));
    }
    let v = raw.parse::<f64>().map_err(|_| invalid("not a number"))?;
    match check_value(v) {
        Some(reason) => Err(invalid(reason)),
        None => Ok(v),
    }
}
