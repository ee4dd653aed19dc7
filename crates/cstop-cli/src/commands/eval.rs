use colored::Colorize;
use cstop_odds::{RollSpace, TargetSet};

pub fn run(totals: &[u32], no_table: bool) -> Result<(), String> {
    let space = RollSpace::default();

    if !no_table {
        println!("{}", super::distribution_table(&space));
        println!();
    }

    let targets: TargetSet = totals.iter().copied().collect();
    let probability = targets.hit_probability(&space);

    let formatted: Vec<String> = totals.iter().map(ToString::to_string).collect();
    println!(
        "  Probability of seeing any of ({}) in one roll: {}",
        formatted.join(", "),
        format!("{probability:.6}").bold()
    );

    Ok(())
}
