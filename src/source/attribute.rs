//! dBASE attribute values to JSON scalars.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde_json::{Number, Value};
use shapefile::dbase::FieldValue;

/// Largest integer an f64 holds exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

const DESCRIPTOR_LEN: usize = 32;
const HEADER_TERMINATOR: u8 = 0x0D;

/// Convert one cell. `decimals` is the column's declared decimal count.
pub(crate) fn to_json(value: &FieldValue, decimals: u8) -> Value {
    match value {
        FieldValue::Character(Some(s)) | FieldValue::Memo(s) => text(s),
        FieldValue::Character(None) => Value::Null,
        FieldValue::Numeric(n) => n.map(|n| scaled(n, decimals)).unwrap_or(Value::Null),
        // f32 -> f64 widening adds noise digits; go through the shortest f32 rendering
        FieldValue::Float(f) => f
            .and_then(|f| f.to_string().parse::<f64>().ok())
            .map(|f| scaled(f, decimals))
            .unwrap_or(Value::Null),
        FieldValue::Integer(i) => Value::from(*i),
        FieldValue::Double(d) | FieldValue::Currency(d) => number(*d),
        FieldValue::Logical(b) => b.map(Value::Bool).unwrap_or(Value::Null),
        FieldValue::Date(Some(d)) => Value::String(format!(
            "{:04}-{:02}-{:02}",
            d.year(),
            d.month(),
            d.day()
        )),
        FieldValue::Date(None) => Value::Null,
        FieldValue::DateTime(dt) => {
            let (date, time) = (dt.date(), dt.time());
            Value::String(format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                date.year(),
                date.month(),
                date.day(),
                time.hours(),
                time.minutes(),
                time.seconds()
            ))
        }
    }
}

/// Declared decimal counts by column name, from the `.dbf` field descriptors.
///
/// The table reader keeps these private, so they are read from the header
/// directly: a 32-byte table header, then one 32-byte descriptor per column
/// (name in bytes 0..11, decimal count at byte 17) up to a `0x0D` terminator.
pub(crate) fn decimal_places(dbf: &Path) -> io::Result<HashMap<String, u8>> {
    let mut source = BufReader::new(File::open(dbf)?);
    let mut descriptor = [0u8; DESCRIPTOR_LEN];
    source.read_exact(&mut descriptor)?;
    let header_len = u16::from_le_bytes([descriptor[8], descriptor[9]]) as usize;

    let mut places = HashMap::new();
    let mut offset = DESCRIPTOR_LEN;
    while offset + DESCRIPTOR_LEN <= header_len {
        source.read_exact(&mut descriptor[..1])?;
        if descriptor[0] == HEADER_TERMINATOR {
            break;
        }
        source.read_exact(&mut descriptor[1..])?;

        let name_end = descriptor[..11].iter().position(|&b| b == 0).unwrap_or(11);
        let name = String::from_utf8_lossy(&descriptor[..name_end])
            .trim()
            .to_string();
        places.insert(name, descriptor[17]);
        offset += DESCRIPTOR_LEN;
    }

    Ok(places)
}

fn text(s: &str) -> Value {
    let trimmed = s.trim_end_matches([' ', '\0']);
    if trimmed.is_empty() {
        Value::Null
    } else {
        Value::String(trimmed.to_string())
    }
}

/// Columns without decimals read as integers; others keep their fraction, so
/// `7.00` in a two-decimal column stays `7.0`.
fn scaled(n: f64, decimals: u8) -> Value {
    if decimals == 0 {
        number(n)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Whole values become JSON integers so `521.0` reads as `521`.
fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
