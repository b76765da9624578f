//! Fetch the sheet rows and fold them into a [`Dataset`].
//!
//! Rows arrive as JSON objects keyed by column label. Columns are read by
//! position (`date`, `distance`, `goal`), so object key order has to survive
//! decoding; serde_json's `preserve_order` feature keeps it.

use crate::errors::{PipelineError, ProcessingError};
use crate::models::{Dataset, Entry};
use reqwest::Client;
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

const DATE_COLUMN: usize = 0;
const DISTANCE_COLUMN: usize = 1;
// Only the first row carries the goal.
const GOAL_COLUMN: usize = 2;

pub type Row = Map<String, Value>;

pub async fn fetch_dataset(client: &Client, url: &str) -> Result<Dataset, PipelineError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PipelineError::Fetch(status));
    }

    let body = response.bytes().await?;
    debug!("received {} bytes from source", body.len());
    Ok(parse_payload(&body)?)
}

pub fn parse_payload(body: &[u8]) -> Result<Dataset, ProcessingError> {
    let rows: Vec<Row> =
        serde_json::from_slice(body).map_err(|err| ProcessingError::Decode(err.to_string()))?;
    parse_rows(&rows)
}

pub fn parse_rows(rows: &[Row]) -> Result<Dataset, ProcessingError> {
    let first = rows.first().ok_or(ProcessingError::EmptyPayload)?;
    let goal = numeric_cell(first, 0, GOAL_COLUMN)?;

    let entries = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            Ok(Entry {
                date: cell_text(row, index, DATE_COLUMN)?.into_owned(),
                distance: numeric_cell(row, index, DISTANCE_COLUMN)?,
            })
        })
        .collect::<Result<Vec<_>, ProcessingError>>()?;

    Dataset::new(goal, entries)
}

/// Parse the leading number of `text`, ignoring whatever trails it.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Returns `None` when no digit leads the text.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}

fn cell_text(row: &Row, row_index: usize, column: usize) -> Result<Cow<'_, str>, ProcessingError> {
    match row.values().nth(column) {
        Some(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
        Some(Value::Number(number)) => Ok(Cow::Owned(number.to_string())),
        _ => Err(ProcessingError::MissingColumn {
            row: row_index,
            column,
        }),
    }
}

fn numeric_cell(row: &Row, row_index: usize, column: usize) -> Result<f64, ProcessingError> {
    let text = cell_text(row, row_index, column)?;
    parse_number(&text).ok_or_else(|| ProcessingError::NotNumeric {
        row: row_index,
        column,
        value: text.into_owned(),
    })
}
