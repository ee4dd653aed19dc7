use colored::Colorize;
use cstop_odds::RollSpace;

pub fn run() -> Result<(), String> {
    let space = RollSpace::default();

    println!(
        "  {} {}",
        "Two-die totals for".bold(),
        space.to_string().bold()
    );
    println!("{}", super::distribution_table(&space));
    println!();
    println!("  {} equally likely rolls", space.outcome_count());

    Ok(())
}
