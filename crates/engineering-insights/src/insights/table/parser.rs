use super::normalizer::{normalize_header, present_value};
use super::{ReviewRecord, TableError};
use crate::insights::ColumnMapping;
use csv::StringRecord;
use std::io::Read;

pub(crate) fn parse_records<R: Read>(
    reader: R,
    columns: &ColumnMapping,
) -> Result<Vec<ReviewRecord>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let index = ColumnIndex::resolve(&headers, columns)?;
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        records.push(index.read(&row)?);
    }

    Ok(records)
}

#[derive(Debug)]
struct ColumnIndex {
    level: usize,
    track: usize,
    category: usize,
    score: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &ColumnMapping) -> Result<Self, TableError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |name: &str| {
            normalized
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| TableError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            level: find(columns.level.as_str())?,
            track: find(columns.track.as_str())?,
            category: find(columns.category.as_str())?,
            score: find(columns.score.as_str())?,
        })
    }

    fn read(&self, row: &StringRecord) -> Result<ReviewRecord, TableError> {
        let cell = |idx: usize| row.get(idx).unwrap_or_default();

        Ok(ReviewRecord {
            level: cell(self.level).to_string(),
            track: cell(self.track).to_string(),
            category: present_value(cell(self.category)).map(str::to_string),
            score: parse_score(cell(self.score), row)?,
        })
    }
}

fn parse_score(value: &str, row: &StringRecord) -> Result<Option<f64>, TableError> {
    let Some(value) = present_value(value) else {
        return Ok(None);
    };

    match value.parse::<f64>() {
        Ok(score) if score.is_nan() => Ok(None),
        Ok(score) => Ok(Some(score)),
        Err(_) => Err(TableError::InvalidScore {
            line: row.position().map(|pos| pos.line()).unwrap_or_default(),
            value: value.to_string(),
        }),
    }
}
