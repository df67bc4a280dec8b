use clap::Parser;

/// Techsphere: lays out a technology catalog as tiles on a sphere or a flat
/// wall and prints the per-tile frames as JSON.
#[derive(Parser, Debug)]
#[command(name = "techsphere", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. `techsphere=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Show only one category (web, java/jvm, languages, quality, devops, tools).
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// Arrangement: sphere or flat.
    #[arg(long, default_value = "sphere")]
    pub view: String,

    /// Catalog JSON path override.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Atlas mapping JSON path override.
    #[arg(long)]
    pub atlas: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
