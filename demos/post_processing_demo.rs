use anyhow::{anyhow, Context};
use post_production::backends::memory::{MemoryAssetStore, MemoryHost};
use post_production::config::load_config;
use post_production::observability::init_tracing;
use post_production::PostProcessingPlugin;

/// Runs one simulated build through the plugin configured by a YAML file.
///
/// Usage: cargo run --example post_processing_demo [config.yaml]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/configs/banner.yaml".to_string());

    let config = load_config(&config_path)
        .with_context(|| format!("loading {}", config_path))?;
    init_tracing(&config.log_level).map_err(|e| anyhow!(e))?;

    let plugin = PostProcessingPlugin::from_config(&config);
    let mut host = MemoryHost::new();
    plugin.apply(&mut host);

    let mut store = MemoryAssetStore::new();
    store.add_group("main", [("main.js", "var a=1;"), ("main.css", "body{}")]);
    store.add_group("vendor", [("vendor.js", "console.log('vendor');")]);

    for outcome in host.build(&mut store).await {
        let report = outcome?;
        println!("Processed {} of {} file(s)", report.files_processed, report.files_seen);
    }

    let mut paths = vec!["main.js", "main.js.orig", "main.css", "vendor.js", "vendor.js.orig"];
    paths.retain(|path| store.get(path).is_some());
    for path in paths {
        println!("{:>16}: {}", path, store.source(path).unwrap_or_default());
    }

    Ok(())
}
