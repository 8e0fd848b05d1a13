use colored::Colorize;
use tb_core::DiceSet;

pub fn run(dice: &[String], times: u32, seed: Option<u64>) -> Result<(), String> {
    let mut set = DiceSet::parse(&dice.join(" + ")).map_err(|e| e.to_string())?;
    let (mut rng, seed) = super::rng(seed);

    println!(
        "  {} {} {}",
        "Rolling".bold(),
        set,
        format!("(seed={seed})").dimmed()
    );

    for _ in 0..times {
        let total = set.roll(&mut rng);
        let values: Vec<String> = set
            .results()
            .iter()
            .flatten()
            .map(|v| v.to_string())
            .collect();
        println!("  [{}] = {total}", values.join(", "));
    }

    Ok(())
}
