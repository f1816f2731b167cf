// ===== drillforge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use drillforge::exercise::ScoreResult;
use drillforge::items::ExerciseSpec;
use drillforge::router::ExerciseKind;
use strum::IntoEnumIterator;

pub fn print_audit_report(rows: &[(usize, ExerciseKind, usize, Result<(), String>)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Kind").add_attribute(Attribute::Bold),
        Cell::new("Items").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
    ]);

    for (index, kind, items, status) in rows {
        let status_cell = match status {
            Ok(()) => Cell::new("OK").fg(Color::Green),
            Err(msg) => Cell::new(msg).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(index).set_alignment(CellAlignment::Right),
            Cell::new(kind),
            Cell::new(items).set_alignment(CellAlignment::Right),
            status_cell,
        ]);
    }
    println!("{}", table);
}

pub fn print_kind_summary(specs: &[ExerciseSpec]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Kind").add_attribute(Attribute::Bold),
        Cell::new("Exercises").add_attribute(Attribute::Bold),
        Cell::new("Items").add_attribute(Attribute::Bold),
    ]);

    for kind in ExerciseKind::iter() {
        let matching: Vec<_> = specs.iter().filter(|s| s.kind() == kind).collect();
        let items: usize = matching.iter().map(|s| s.item_count()).sum();
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(matching.len()).set_alignment(CellAlignment::Right),
            Cell::new(items).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_score(kind: ExerciseKind, score: ScoreResult) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Exercise").add_attribute(Attribute::Bold),
        Cell::new("Correct").add_attribute(Attribute::Bold),
        Cell::new("Total").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(kind),
        Cell::new(score.correct)
            .set_alignment(CellAlignment::Right)
            .fg(Color::Cyan),
        Cell::new(score.total).set_alignment(CellAlignment::Right),
    ]);
    println!("{}", table);
}
