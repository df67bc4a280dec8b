mod app_state;
mod cli;

use std::path::Path;
use std::process::ExitCode;

use techsphere_catalog::Category;
use techsphere_config::TechsphereConfig;
use techsphere_layout::ViewMode;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use app_state::{AssetPaths, SceneState};

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter;
    // failures are reported once logging is up.
    let config_result = techsphere_config::load_config(args.config.as_deref().map(Path::new));
    let config_level = config_result
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config_level.directive());
    let directive: Result<Directive, _> = log_directive
        .parse()
        .or_else(|_| config_level.directive().parse());
    let filter = match directive {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Techsphere v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = config_result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TechsphereConfig::default()
    });
    tracing::debug!("Effective config: {}", techsphere_config::config_to_json(&config));

    let view_mode = args.view.parse::<ViewMode>().unwrap_or_else(|e| {
        tracing::warn!("{e}, falling back to sphere view");
        ViewMode::Sphere
    });
    let category = match args.category.as_deref().map(str::parse::<Category>) {
        None => None,
        Some(Ok(category)) => Some(category),
        Some(Err(e)) => {
            tracing::warn!("{e}, showing all categories");
            None
        }
    };

    // Load assets
    let paths = AssetPaths::from_config(&config)
        .with_overrides(args.catalog.as_deref(), args.atlas.as_deref());
    let mut scene = match SceneState::load(config, &paths) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!("Failed to load assets: {e}");
            return ExitCode::FAILURE;
        }
    };

    scene.set_view_mode(view_mode);
    scene.set_filter(category);
    tracing::info!(
        "{} of {} technologies visible ({view_mode}, radius {:.3})",
        scene.assignment().visible_count(),
        scene.catalog().len(),
        scene.target_radius()
    );

    let visuals = scene.visuals();
    let output = if args.pretty {
        serde_json::to_string_pretty(&visuals)
    } else {
        serde_json::to_string(&visuals)
    };
    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to serialize tile visuals: {e}");
            ExitCode::FAILURE
        }
    }
}
