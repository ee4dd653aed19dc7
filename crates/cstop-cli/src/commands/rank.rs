use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use cstop_odds::{RankedCombo, RollSpace, rank_triples};

const BAR_WIDTH: usize = 30;

pub fn run(top: usize, output: Option<&Path>) -> Result<(), String> {
    let space = RollSpace::default();
    let ranked = rank_triples(&space);
    let shown = top.clamp(1, ranked.len());

    println!(
        "  {} of {} column choices",
        format!("Top {shown}").bold(),
        ranked.len()
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Columns", "Probability", ""]);

    for (i, combo) in ranked.iter().take(shown).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(combo.label()),
            Cell::new(format!("{:.6}", combo.probability)).set_alignment(CellAlignment::Right),
            Cell::new(bar(combo.probability)),
        ]);
    }
    println!("{table}");

    if let Some(path) = output {
        std::fs::write(path, ranking_csv(&ranked))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!();
        println!("  Full ranking written to {}", path.display());
    }

    Ok(())
}

/// A proportional bar for quick visual comparison in the terminal.
fn bar(probability: f64) -> String {
    let filled = (probability * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

/// The complete ranking as CSV, one row per combo, best first.
fn ranking_csv(ranked: &[RankedCombo]) -> String {
    let mut out = String::from("x,y,z,probability\n");
    for combo in ranked {
        let [x, y, z] = combo.totals;
        out.push_str(&format!("{x},{y},{z},{:.6}\n", combo.probability));
    }
    out
}
