//! Columnar Decoder Tests
//!
//! Tests for the columnar batch layout: header checks, schema rules,
//! padding, null bitmaps and fixed/variable-size columns.

use bytes::{Bytes, BytesMut};
use graphwire::columnar::{
    decode_table, decode_table_into, ColumnValues, Table, TableWriter, ValueType, COLUMNAR_MAGIC,
};
use graphwire::cursor::{LittleEndianCursor, LittleEndianWriter, Reusable};
use graphwire::GraphWireError;

fn int32_batch() -> Bytes {
    TableWriter::new(3)
        .column("x", ColumnValues::Int32(vec![Some(1), None, Some(3)]))
        .finish()
        .unwrap()
}

/// Copy `bytes`, overwriting `patch.len()` bytes at `offset`
fn patched(bytes: &Bytes, offset: usize, patch: &[u8]) -> Bytes {
    let mut raw = BytesMut::from(bytes.as_ref());
    raw[offset..offset + patch.len()].copy_from_slice(patch);
    raw.freeze()
}

// =============================================================================
// Header
// =============================================================================

#[test]
fn test_decode_int32_with_null() {
    let table = decode_table(int32_batch(), true).unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.field_count(), 1);

    let column = table.column_by_name("x").unwrap();
    assert_eq!(column.value_type(), ValueType::Int32);
    assert!(!column.is_null(0));
    assert!(column.is_null(1));
    assert!(!column.is_null(2));
    assert_eq!(column.get_int32(0), 1);
    assert_eq!(column.get_int32(2), 3);
    assert_eq!(column.null_bitmap().null_count(), 1);
}

#[test]
fn test_bad_magic() {
    let bytes = patched(&int32_batch(), 0, &1234u16.to_le_bytes());
    let err = decode_table(bytes, false).unwrap_err();
    assert!(matches!(err, GraphWireError::UnknownProtocol(1234)));
}

#[test]
fn test_unsupported_version() {
    let bytes = patched(&int32_batch(), 2, &2u16.to_le_bytes());
    let err = decode_table(bytes, false).unwrap_err();
    assert!(matches!(err, GraphWireError::UnknownColumnarVersion(2)));
}

#[test]
fn test_negative_row_count() {
    let bytes = patched(&int32_batch(), 4, &(-1i32).to_le_bytes());
    let err = decode_table(bytes, false).unwrap_err();
    assert!(matches!(err, GraphWireError::InvalidRowCount(-1)));
}

#[test]
fn test_zero_rows_stops_after_header() {
    let mut w = LittleEndianWriter::new();
    w.write_u16(COLUMNAR_MAGIC);
    w.write_u16(1);
    w.write_i32(0);
    // Anything after a zero row count is never looked at.
    w.write_raw(&[0xff; 5]);

    let table = decode_table(w.into_bytes(), false).unwrap();
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.field_count(), 0);
    assert!(table.is_empty());
}

#[test]
fn test_non_positive_field_count() {
    let bytes = patched(&int32_batch(), 8, &0i32.to_le_bytes());
    let err = decode_table(bytes, false).unwrap_err();
    assert!(matches!(err, GraphWireError::InvalidFieldLength(0)));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_duplicate_field_names() {
    let bytes = TableWriter::new(1)
        .column("x", ColumnValues::Int32(vec![Some(1)]))
        .column("x", ColumnValues::Int64(vec![Some(2)]))
        .finish()
        .unwrap();
    let err = decode_table(bytes, false).unwrap_err();
    assert!(matches!(err, GraphWireError::FieldConflict(name) if name == "x"));
}

#[test]
fn test_unknown_column_type() {
    // Type tag of the first field sits right after the field count.
    let bytes = patched(&int32_batch(), 12, &9i32.to_le_bytes());
    let err = decode_table(bytes, false).unwrap_err();
    assert!(matches!(err, GraphWireError::UnknownColumnType(9)));
}

#[test]
fn test_field_metadata_rejected() {
    // header 8 + field count 4 + type 4 + name (4 + 1) = 21
    let bytes = patched(&int32_batch(), 21, &4i32.to_le_bytes());
    let err = decode_table(bytes, false).unwrap_err();
    assert!(matches!(err, GraphWireError::UnsupportedMetadata(4)));
}

#[test]
fn test_schema_metadata_rejected() {
    let bytes = patched(&int32_batch(), 25, &8i32.to_le_bytes());
    let err = decode_table(bytes, false).unwrap_err();
    assert!(matches!(err, GraphWireError::UnsupportedMetadata(8)));
}

#[test]
fn test_wide_schema_spills() {
    let mut writer = TableWriter::new(2);
    for i in 0..20 {
        writer = writer.column(format!("f{:02}", i), ColumnValues::Int64(vec![Some(i), None]));
    }
    let table = decode_table(writer.finish().unwrap(), true).unwrap();

    assert_eq!(table.field_count(), 20);
    assert!(table.schema().spilled());
    let last = table.column_by_name("f19").unwrap();
    assert_eq!(last.get_int64(0), 19);
    assert!(last.is_null(1));
}

// =============================================================================
// Columns
// =============================================================================

#[test]
fn test_all_fixed_size_types() {
    let bytes = TableWriter::new(2)
        .column("b", ColumnValues::Bool(vec![Some(true), Some(false)]))
        .column("i", ColumnValues::Int32(vec![Some(-7), Some(i32::MAX)]))
        .column("l", ColumnValues::Int64(vec![Some(i64::MIN), Some(0)]))
        .column("f", ColumnValues::Float(vec![Some(1.5), None]))
        .column("d", ColumnValues::Double(vec![None, Some(-0.25)]))
        .finish()
        .unwrap();
    let table = decode_table(bytes, false).unwrap();

    let b = table.column_by_name("b").unwrap();
    assert!(b.get_bool(0));
    assert!(!b.get_bool(1));

    let i = table.column_by_name("i").unwrap();
    assert_eq!(i.get_int32(0), -7);
    assert_eq!(i.get_int32(1), i32::MAX);

    let l = table.column_by_name("l").unwrap();
    assert_eq!(l.get_int64(0), i64::MIN);

    let f = table.column_by_name("f").unwrap();
    assert_eq!(f.get_float32(0), 1.5);
    assert!(f.is_null(1));

    let d = table.column_by_name("d").unwrap();
    assert!(d.is_null(0));
    assert_eq!(d.get_float64(1), -0.25);
}

#[test]
fn test_string_column() {
    let bytes = TableWriter::new(4)
        .column(
            "name",
            ColumnValues::String(vec![
                Some("alice".into()),
                None,
                Some(String::new()),
                Some("bob".into()),
            ]),
        )
        .finish()
        .unwrap();
    let table = decode_table(bytes, true).unwrap();

    let names = table.column(0).unwrap();
    assert_eq!(names.value_type(), ValueType::String);
    assert_eq!(names.get_str(0).unwrap(), "alice");
    assert!(names.is_null(1));
    assert_eq!(names.get_str(1).unwrap(), "");
    assert!(!names.is_null(2));
    assert_eq!(names.get_str(2).unwrap(), "");
    assert_eq!(names.get_str(3).unwrap(), "bob");
}

#[test]
fn test_nine_rows_bitmap() {
    let values: Vec<Option<i32>> = (0..9).map(|i| if i % 4 == 0 { None } else { Some(i) }).collect();
    let bytes = TableWriter::new(9)
        .column("v", ColumnValues::Int32(values))
        .finish()
        .unwrap();
    let table = decode_table(bytes, false).unwrap();
    let v = table.column(0).unwrap();

    for row in 0..9 {
        assert_eq!(v.is_null(row), row % 4 == 0, "row {}", row);
    }
    assert_eq!(v.get_int32(7), 7);
    assert!(v.is_null(9));
}

#[test]
fn test_truncated_column_data() {
    let bytes = int32_batch();
    let short = bytes.slice(..bytes.len() - 8);
    let err = decode_table(short, false).unwrap_err();
    assert!(matches!(err, GraphWireError::TruncatedInput { .. }));
}

#[test]
fn test_copy_and_nocopy_agree() {
    let bytes = TableWriter::new(2)
        .column("s", ColumnValues::String(vec![Some("héllo".into()), Some("wörld".into())]))
        .finish()
        .unwrap();
    let shared = decode_table(bytes.clone(), true).unwrap();
    let copied = decode_table(bytes, false).unwrap();

    for row in 0..2 {
        assert_eq!(
            shared.column(0).unwrap().get_str(row).unwrap(),
            copied.column(0).unwrap().get_str(row).unwrap()
        );
    }
}

// =============================================================================
// Reuse
// =============================================================================

#[test]
fn test_table_reset_between_decodes() {
    let mut table = Table::new();

    let mut cursor = LittleEndianCursor::new(int32_batch(), true);
    decode_table_into(&mut cursor, &mut table).unwrap();
    assert_eq!(table.field_count(), 1);

    table.reset();
    assert_eq!(table.field_count(), 0);
    assert_eq!(table.row_count(), 0);

    let other = TableWriter::new(1)
        .column("x", ColumnValues::Bool(vec![Some(true)]))
        .finish()
        .unwrap();
    let mut cursor = LittleEndianCursor::new(other, true);
    decode_table_into(&mut cursor, &mut table).unwrap();
    assert_eq!(table.column_by_name("x").unwrap().value_type(), ValueType::Bool);
}
