//! Batch runner: read provider feeds, normalize them, write parsed output.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use listing_normalizer::{NormalizerConfig, Result, adapter_from_name};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = NormalizerConfig::default();
    fs::create_dir_all(&config.output_dir)?;

    let feeds = [("immowelt", "immowelt.json"), ("immoscout24", "immoscout.json")];

    for (source, input) in feeds {
        let input_path = Path::new(input);
        if !input_path.exists() {
            warn!("{source}: input not found: {}", input_path.display());
            continue;
        }
        // One bad feed must not stop the others
        if let Err(e) = run_feed(source, input_path, &config) {
            warn!("{source}: run failed: {e}");
        }
    }

    Ok(())
}

/// Normalize one provider feed and write the parsed collection
fn run_feed(source: &str, input: &Path, config: &NormalizerConfig) -> Result<()> {
    let start = Instant::now();

    let adapter = adapter_from_name(source)?;
    let payload: serde_json::Value = serde_json::from_str(&fs::read_to_string(input)?)?;
    let collection = if config.parallel {
        adapter.adapt_parallel(&payload)?
    } else {
        adapter.adapt(&payload)?
    };

    let stem = input
        .file_stem()
        .map_or_else(|| source.to_string(), |s| s.to_string_lossy().into_owned());
    let out_path = config.output_dir.join(format!("{stem}_parsed.json"));
    let json = if config.pretty_output {
        serde_json::to_string_pretty(&collection)?
    } else {
        serde_json::to_string(&collection)?
    };
    fs::write(&out_path, json)?;

    info!(
        "{source}: wrote {} listings to {} in {:?}",
        collection.len(),
        out_path.display(),
        start.elapsed()
    );
    Ok(())
}
