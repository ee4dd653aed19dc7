use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use cstop_odds::{RollSpace, rank_triples};

pub fn run(output_dir: &Path, quiet: bool) -> Result<(), String> {
    let space = RollSpace::default();

    // One scoring pass; every slice reads from this map.
    let combos: BTreeMap<[u32; 3], f64> = rank_triples(&space)
        .into_iter()
        .map(|c| (c.totals, c.probability))
        .collect();

    let lo = combos.values().fold(f64::INFINITY, |a, &b| a.min(b));
    let hi = combos.values().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    let table_dir = output_dir.join("tables");
    std::fs::create_dir_all(&table_dir)
        .map_err(|e| format!("cannot create {}: {e}", table_dir.display()))?;

    let max = space.max_total();
    for x in 2..=(max - 2) {
        let path = table_dir.join(format!("slice_{x:02}.csv"));
        std::fs::write(&path, slice_csv(x, max, &combos))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;

        if !quiet {
            render_heatmap(x, max, &combos, lo, hi);
        }
    }

    let all_path = table_dir.join("all_combinations.csv");
    std::fs::write(&all_path, full_csv(&combos))
        .map_err(|e| format!("cannot write to {}: {e}", all_path.display()))?;

    println!();
    println!("  Tables written to {}", table_dir.display());

    Ok(())
}

/// CSV rows for every combination whose lowest column is `x`.
fn slice_csv(x: u32, max: u32, combos: &BTreeMap<[u32; 3], f64>) -> String {
    let mut out = String::from("x,y,z,probability\n");
    for y in (x + 1)..max {
        for z in (y + 1)..=max {
            if let Some(p) = combos.get(&[x, y, z]) {
                out.push_str(&format!("{x},{y},{z},{p:.6}\n"));
            }
        }
    }
    out
}

/// CSV rows for all combinations, ordered by triple.
fn full_csv(combos: &BTreeMap<[u32; 3], f64>) -> String {
    let mut out = String::from("x,y,z,probability\n");
    for (&[x, y, z], p) in combos {
        out.push_str(&format!("{x},{y},{z},{p:.6}\n"));
    }
    out
}

/// Render one slice as a colored grid: rows are the middle column, columns
/// the highest, cells shaded from coldest to hottest probability.
fn render_heatmap(x: u32, max: u32, combos: &BTreeMap<[u32; 3], f64>, lo: f64, hi: f64) {
    println!();
    println!("  {} {}", "Lowest column".bold(), x.to_string().bold());

    print!("  y\\z ");
    for z in (x + 2)..=max {
        print!("{z:>7}");
    }
    println!();

    for y in (x + 1)..max {
        print!("  {y:>3} ");
        for z in (x + 2)..=max {
            if let Some(&p) = combos.get(&[x, y, z]) {
                let (r, g, b) = shade(p, lo, hi);
                print!("{}", format!("{p:>7.3}").on_truecolor(r, g, b).white());
            } else {
                print!("       ");
            }
        }
        println!();
    }
}

/// Linear blend from deep blue (coldest) to brick red (hottest).
fn shade(p: f64, lo: f64, hi: f64) -> (u8, u8, u8) {
    let t = if hi > lo { (p - lo) / (hi - lo) } else { 0.5 };
    let blend = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    (blend(33.0, 178.0), blend(102.0, 24.0), blend(172.0, 43.0))
}
