use std::path::Path;

use cstop_odds::{RollSpace, SumDistribution};

pub fn run(format: &str, output: Option<&Path>) -> Result<(), String> {
    let space = RollSpace::default();
    let dist = SumDistribution::compute(&space);

    let content = match format {
        "json" => export_json(&space, &dist)?,
        "csv" => export_csv(&dist),
        "markdown" | "md" => export_markdown(&dist),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, csv, markdown"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(space: &RollSpace, dist: &SumDistribution) -> Result<String, String> {
    let totals: Vec<_> = dist
        .iter()
        .map(|(total, probability)| {
            serde_json::json!({
                "total": total,
                "hits": dist.hit_count(total),
                "probability": probability,
            })
        })
        .collect();

    let export = serde_json::json!({
        "dice": space.dice(),
        "sides": space.sides(),
        "outcomes": space.outcome_count(),
        "totals": totals,
    });

    serde_json::to_string_pretty(&export).map_err(|e| format!("JSON serialization error: {e}"))
}

fn export_csv(dist: &SumDistribution) -> String {
    let mut out = String::from("total,hits,probability\n");
    for (total, probability) in dist.iter() {
        out.push_str(&format!(
            "{total},{},{probability:.6}\n",
            dist.hit_count(total)
        ));
    }
    out
}

fn export_markdown(dist: &SumDistribution) -> String {
    let mut out = String::from("| Total | Probability |\n| ---: | ---: |\n");
    for (total, probability) in dist.iter() {
        out.push_str(&format!("| {total} | {probability:.6} |\n"));
    }
    out
}
