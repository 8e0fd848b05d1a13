use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::Value;
use tb_core::{Generator, PoolDef, RandomSource};

pub fn run(
    path: &Path,
    count: usize,
    seed: Option<u64>,
    no_fallback: bool,
    stats: bool,
) -> Result<(), String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let mut def: PoolDef<Value> =
        serde_json::from_str(&text).map_err(|e| format!("invalid pool file: {e}"))?;
    if no_fallback {
        def.always_ensure_selection = false;
    }

    let (rng, seed) = super::rng(seed);
    let mut generator = def.into_generator(rng).map_err(|e| e.to_string())?;
    let mut drawn = vec![0usize; generator.len()];

    println!(
        "  {} {} {}",
        "Drawing".bold(),
        path.display(),
        format!("({count} draws, seed={seed})").dimmed()
    );

    for _ in 0..count {
        let index = generator
            .draw_index()
            .map_err(|e| format!("round {}: {e}", generator.round() + 1))?;
        drawn[index] += 1;
        println!(
            "  {:>4}  {}",
            generator.round(),
            label(generator.options()[index].payload())
        );
    }

    if stats {
        println!();
        print_stats(&generator, &drawn);
    }

    Ok(())
}

/// Strings print bare; anything else prints as compact JSON.
fn label(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn print_stats<R: RandomSource>(generator: &Generator<Value, R>, drawn: &[usize]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Payload", "Weight", "Current", "Drawn", "Bump"]);

    for (index, option) in generator.options().iter().enumerate() {
        let bump = option
            .bump()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "—".to_string());
        table.add_row(vec![
            index.to_string(),
            label(option.payload()),
            option.configured_weight().to_string(),
            option.current_weight().to_string(),
            drawn[index].to_string(),
            bump,
        ]);
    }

    println!("{table}");
}
