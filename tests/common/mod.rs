//! Shapefile fixtures written into temporary base directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use boundary_map::BoundaryLevel;
use shapefile::dbase::{Date, FieldName, FieldValue, Record, TableWriterBuilder};
use shapefile::{Point, Polygon, PolygonRing, Writer};
use tempfile::TempDir;

/// One fixture row: unit square at `origin` plus character attributes
pub struct Row<'a> {
    pub origin: (f64, f64),
    pub attrs: &'a [(&'a str, &'a str)],
}

/// Clockwise closed unit square with its lower-left corner at `origin`
pub fn square(origin: (f64, f64)) -> Polygon {
    let (x, y) = origin;
    Polygon::new(PolygonRing::Outer(vec![
        Point::new(x, y),
        Point::new(x, y + 1.0),
        Point::new(x + 1.0, y + 1.0),
        Point::new(x + 1.0, y),
        Point::new(x, y),
    ]))
}

/// Write a polygon shapefile with character columns `fields`.
pub fn write_shapefile(path: &Path, fields: &[&str], rows: &[Row]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let mut table = TableWriterBuilder::new();
    for field in fields {
        table = table.add_character_field(FieldName::try_from(*field).unwrap(), 50);
    }

    let mut writer = Writer::from_path(path, table).unwrap();
    for row in rows {
        let mut record = Record::default();
        for field in fields {
            let value = row
                .attrs
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, v)| v.to_string());
            record.insert(field.to_string(), FieldValue::Character(value));
        }
        writer
            .write_shape_and_record(&square(row.origin), &record)
            .unwrap();
    }
}

pub fn level_path(base: &Path, level: BoundaryLevel) -> PathBuf {
    boundary_map::source::resolve_path(base, level)
}

pub fn write_states(base: &Path) {
    write_shapefile(
        &level_path(base, BoundaryLevel::State),
        &["ST_NM", "ST_CODE"],
        &[
            Row {
                origin: (74.0, 30.0),
                attrs: &[("ST_NM", "Punjab"), ("ST_CODE", "03")],
            },
            Row {
                origin: (73.0, 18.0),
                attrs: &[("ST_NM", "Maharashtra"), ("ST_CODE", "27")],
            },
            Row {
                origin: (77.0, 28.0),
                attrs: &[("ST_NM", "Delhi")],
            },
        ],
    );
}

pub fn write_districts(base: &Path) {
    write_shapefile(
        &level_path(base, BoundaryLevel::District),
        &["DISTRICT", "ST_NM"],
        &[
            Row {
                origin: (74.0, 31.0),
                attrs: &[("DISTRICT", "Amritsar"), ("ST_NM", "Punjab")],
            },
            Row {
                origin: (73.0, 18.0),
                attrs: &[("DISTRICT", "Pune"), ("ST_NM", "Maharashtra")],
            },
            Row {
                origin: (75.0, 30.0),
                attrs: &[("DISTRICT", "Ludhiana"), ("ST_NM", "PUNJAB")],
            },
        ],
    );
}

pub fn write_sub_districts(base: &Path) {
    write_shapefile(
        &level_path(base, BoundaryLevel::SubDistrict),
        &["sdtname", "dtname", "stname"],
        &[
            Row {
                origin: (73.0, 18.0),
                attrs: &[
                    ("sdtname", "Haveli"),
                    ("dtname", "Pune"),
                    ("stname", "Maharashtra"),
                ],
            },
            Row {
                origin: (73.5, 19.5),
                attrs: &[
                    ("sdtname", "Nashik"),
                    ("dtname", "Nashik"),
                    ("stname", "Maharashtra"),
                ],
            },
            Row {
                origin: (72.0, 18.0),
                attrs: &[
                    ("sdtname", "Mulshi"),
                    ("dtname", "PUNE"),
                    ("stname", "Maharashtra"),
                ],
            },
            Row {
                origin: (80.0, 20.0),
                attrs: &[("sdtname", "Unassigned")],
            },
        ],
    );
}

/// Typed point fixture: `NAME` text, `POP` N(10,0), `AREA` N(12,2),
/// `SURVEYED` date, `COASTAL` logical
pub struct Site {
    pub at: (f64, f64),
    pub name: &'static str,
    pub population: Option<f64>,
    pub area: Option<f64>,
    pub surveyed: Date,
    pub coastal: Option<bool>,
}

pub fn sites() -> Vec<Site> {
    vec![
        Site {
            at: (73.85, 18.52),
            name: "Pune",
            population: Some(3_124_458.0),
            area: Some(15_642.0),
            surveyed: Date::new(31, 1, 2024),
            coastal: Some(false),
        },
        Site {
            at: (72.88, 19.07),
            name: "Mumbai",
            population: Some(12_442_373.0),
            area: Some(603.4),
            surveyed: Date::new(1, 12, 2023),
            coastal: Some(true),
        },
        Site {
            at: (77.21, 28.61),
            name: "Unsurveyed",
            population: None,
            area: None,
            surveyed: Date::new(15, 8, 2022),
            coastal: None,
        },
    ]
}

/// Write a point shapefile with the typed `Site` columns.
pub fn write_points(path: &Path, sites: &[Site]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let table = TableWriterBuilder::new()
        .add_character_field(FieldName::try_from("NAME").unwrap(), 50)
        .add_numeric_field(FieldName::try_from("POP").unwrap(), 10, 0)
        .add_numeric_field(FieldName::try_from("AREA").unwrap(), 12, 2)
        .add_date_field(FieldName::try_from("SURVEYED").unwrap())
        .add_logical_field(FieldName::try_from("COASTAL").unwrap());

    let mut writer = Writer::from_path(path, table).unwrap();
    for site in sites {
        let mut record = Record::default();
        record.insert(
            "NAME".to_string(),
            FieldValue::Character(Some(site.name.to_string())),
        );
        record.insert("POP".to_string(), FieldValue::Numeric(site.population));
        record.insert("AREA".to_string(), FieldValue::Numeric(site.area));
        record.insert("SURVEYED".to_string(), FieldValue::Date(Some(site.surveyed)));
        record.insert("COASTAL".to_string(), FieldValue::Logical(site.coastal));

        let (x, y) = site.at;
        writer
            .write_shape_and_record(&Point::new(x, y), &record)
            .unwrap();
    }
}

/// Turn record `index` of a point shapefile into a null shape.
///
/// Point records are fixed size (8-byte header, 20-byte content) after the
/// 100-byte file header; the `.shx` offsets stay valid.
pub fn null_shape_at(path: &Path, index: usize) {
    let mut bytes = fs::read(path).unwrap();
    let shape_type = 100 + index * 28 + 8;
    bytes[shape_type..shape_type + 4].copy_from_slice(&0i32.to_le_bytes());
    fs::write(path, bytes).unwrap();
}

/// Replace the `.dbf` of `path` with one holding only the first `keep` sites.
pub fn truncate_table(path: &Path, keep: usize) {
    let scratch = tempfile::tempdir().unwrap();
    let short = scratch.path().join("short.shp");
    write_points(&short, &sites()[..keep]);
    fs::copy(short.with_extension("dbf"), path.with_extension("dbf")).unwrap();
}

/// Base directory with all three levels populated
pub fn full_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_states(dir.path());
    write_districts(dir.path());
    write_sub_districts(dir.path());
    dir
}
