//! symbology - classify a sample and print its style as JSON
//!
//! This is the main entry point for the symbology command-line tool.

use anyhow::Context;
use std::time::Instant;
use tracing::{error, info};

use symbology::{
    classify, classify_band, classify_categorized, init_tracing, load_sample,
    log_classification_stats, log_operation_end, log_operation_start, Config, FieldRef,
};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, sample_path) = Config::load().context("Failed to load configuration")?;

    init_tracing(&config.log_level);
    info!("Starting symbology v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let sample = load_sample(&sample_path)
        .with_context(|| format!("Failed to load sample {}", sample_path.display()))?;

    let start = Instant::now();
    let source = sample_path.display().to_string();
    log_operation_start("classify", Some(source.as_str()));

    let options = config.classify_options();
    let result = if config.classification.categorized {
        classify_categorized(&sample, &options)
    } else if matches!(options.input, FieldRef::Band(_)) {
        classify_band(&sample, &options)
    } else {
        classify(&sample, &options)
    };
    log_operation_end("classify", start, result.is_ok());

    let classification = result.context("Classification failed")?;
    log_classification_stats(
        config.classification.method,
        sample.len(),
        config.classification.classes,
        &classification.breaks,
    );

    let json = serde_json::to_string_pretty(&classification)?;
    println!("{}", json);

    Ok(())
}
