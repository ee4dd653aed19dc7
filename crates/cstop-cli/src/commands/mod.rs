pub mod eval;
pub mod export;
pub mod rank;
pub mod slices;
pub mod table;

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use cstop_odds::{RollSpace, SumDistribution};

/// Build the per-total probability table shared by `table` and `eval`.
fn distribution_table(space: &RollSpace) -> Table {
    let dist = SumDistribution::compute(space);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Total", "Probability"]);

    for (total, probability) in dist.iter() {
        table.add_row(vec![
            Cell::new(total).set_alignment(CellAlignment::Right),
            Cell::new(format!("{probability:.6}")).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
