//! Grid assembly from line records.

use hocr_grid_core::export::{CsvOptions, csv_string};
use hocr_grid_core::table::{
    BBox, GridParams, LineRecord, assemble, assign_columns, assign_rows, build_grid,
};

fn line(text: &str, x0: i32, y0: i32, x1: i32, y1: i32) -> LineRecord {
    LineRecord::new(text, BBox::new(x0, y0, x1, y1))
}

/// Four lines with y centers 10, 15, 50, 55 and left edges 0, 25, 60, 60.
fn scenario_lines() -> Vec<LineRecord> {
    vec![
        line("Invoice", 0, 5, 80, 15),
        line("no.", 25, 10, 60, 20),
        line("Total", 60, 45, 120, 55),
        line("due", 60, 50, 100, 60),
    ]
}

fn plain_csv() -> CsvOptions {
    CsvOptions {
        header: true,
        bom: false,
    }
}

#[test]
fn test_two_by_two_grid() {
    let records = scenario_lines();
    let rows = assign_rows(&records, 10.0);
    let columns = assign_columns(&records, 30.0);
    assert_eq!(rows.ids(), &[0, 0, 1, 1]);
    assert_eq!(columns.ids(), &[0, 0, 1, 1]);

    let grid = assemble(&records, &rows, &columns);
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(grid.cell(0, 0), "Invoice no.");
    assert_eq!(grid.cell(1, 1), "Total due");
    assert_eq!(grid.cell(0, 1), "");
    assert_eq!(grid.cell(1, 0), "");
}

#[test]
fn test_two_by_two_csv() {
    let grid = build_grid(&scenario_lines(), &GridParams::default()).unwrap();
    let csv = csv_string(&grid, &plain_csv()).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r"
    0,1
    Invoice no.,
    ,Total due
    ");
}

#[test]
fn test_input_order_does_not_matter() {
    let records = scenario_lines();
    let mut reversed = records.clone();
    reversed.reverse();

    let params = GridParams::default();
    assert_eq!(build_grid(&records, &params), build_grid(&reversed, &params));
}

#[test]
fn test_every_record_lands_in_a_cell() {
    let records = vec![
        line("Item", 10, 10, 60, 30),
        line("Price", 300, 12, 380, 30),
        line("Apples", 12, 60, 90, 80),
        line("1.20", 305, 61, 350, 79),
        line("Pears", 8, 110, 80, 130),
        line("(organic)", 8, 118, 120, 128),
        line("2.10", 302, 112, 350, 128),
    ];
    let grid = build_grid(&records, &GridParams::default()).unwrap();

    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(grid.cell(2, 0), "Pears (organic)");

    let words_in_grid: usize = grid
        .rows()
        .flatten()
        .map(|cell| cell.split(' ').filter(|w| !w.is_empty()).count())
        .sum();
    assert_eq!(words_in_grid, records.len());
}

#[test]
fn test_grid_is_rectangular() {
    let records = vec![
        line("a", 0, 0, 10, 10),
        line("b", 100, 100, 110, 110),
        line("c", 200, 200, 210, 210),
    ];
    let grid = build_grid(&records, &GridParams::default()).unwrap();
    assert_eq!(grid.row_ids(), &[0, 1, 2]);
    assert_eq!(grid.column_ids(), &[0, 1, 2]);
    for row in grid.rows() {
        assert_eq!(row.len(), 3);
    }
    let blanks = grid.rows().flatten().filter(|c| c.is_empty()).count();
    assert_eq!(blanks, 6);
}

#[test]
fn test_tight_tolerances_split_everything() {
    let records = scenario_lines();
    let grid = build_grid(&records, &GridParams::new(0.0, 0.0).unwrap()).unwrap();
    assert_eq!(grid.row_count(), 4);
    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.cell(2, 2), "Total");
    assert_eq!(grid.cell(3, 2), "due");
}

#[test]
fn test_unicode_text_survives() {
    let records = vec![
        line("Año", 0, 0, 40, 10),
        line("Größe", 100, 0, 160, 10),
        line("日本語", 0, 40, 60, 50),
    ];
    let grid = build_grid(&records, &GridParams::default()).unwrap();
    let csv = csv_string(&grid, &plain_csv()).unwrap();
    assert_eq!(csv, "0,1\nAño,Größe\n日本語,\n");
}
