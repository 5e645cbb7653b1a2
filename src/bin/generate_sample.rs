use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde_json::{Map, Value, json};

/// Translation estimate after `step` refinement iterations: a spiral that
/// settles onto `target` as the step grows.
fn translation_at(step: usize, target: [f64; 3], rng: &mut StdRng) -> Result<[f64; 3]> {
    let t = step as f64;
    let decay = (-t / 40.0).exp();
    let angle = t * 0.35;
    let radius = 25.0 * decay;
    let noise = Normal::new(0.0, 0.2 * decay + 0.01)?;
    Ok([
        target[0] + radius * angle.cos() + noise.sample(rng),
        target[1] + radius * angle.sin() + noise.sample(rng),
        target[2] + 12.0 * decay + noise.sample(rng),
    ])
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("TranslationFromIconIterativeThreshold.json"));

    let mut rng = StdRng::seed_from_u64(42);
    let target = [-860.461, 10.754, 77.236];
    let steps = 200;

    let mut records = Map::new();
    for step in 0..steps {
        let [x, y, z] = translation_at(step, target, &mut rng)?;
        // Every tenth record carries the residual as a fourth value.
        let data = if step % 10 == 0 {
            json!([x, y, z, rng.random::<f64>()])
        } else {
            json!([x, y, z])
        };
        records.insert(step.to_string(), json!({ "data": data }));
    }

    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Value::Object(records))
        .context("writing sample records")?;
    writer.flush().context("flushing sample records")?;

    println!("Wrote {steps} records to {}", output_path.display());
    Ok(())
}
