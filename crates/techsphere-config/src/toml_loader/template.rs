//! Default TOML config template with inline documentation comments.

use crate::schema::{CONFIG_SCHEMA_VERSION, DEFAULT_BACKGROUND_COLOR};

/// Header line carrying the schema version the template was written for.
const VERSION_PREFIX: &str = "# Schema version ";

/// The default config file content. Every value is commented out so the
/// serde defaults stay authoritative.
pub(crate) fn default_config_toml() -> String {
    format!(
        r##"# Techsphere Configuration
{VERSION_PREFIX}{CONFIG_SCHEMA_VERSION}
# Only override what you want to change -- missing fields use defaults.

[tile]
# size = 0.4                       # (0, 10]
# depth = 0.04                     # 0-1
# default_background_color = "{DEFAULT_BACKGROUND_COLOR}"

[sphere]
# min_tile_separation = 0.3        # 0-10
# base_radius = 0.3                # (0, 100], <= max_radius
# max_radius = 3.0                 # (0, 100]
# pole_exclusion_top = 0.3         # 0-0.95
# pole_exclusion_bottom = 0.3      # 0-0.95
# oversample_factor = 1.5          # 1-10

[flat_view]
# wall_spacing = 0.5               # (0, 10]
# wall_z = 0.0                     # -100-100
# aspect_bias = 1.5                # 0.1-10

[assets]
# catalog = "data/techstack.json"
# atlas_mapping = "data/techstack-atlas-mapping.json"
# atlas_image = "public/techstack-atlas.webp"

[logging]
# level = "info"                   # debug, info, warn, error
"##
    )
}

/// Schema version stamped in a config file's header, if any.
pub(crate) fn stamped_schema_version(content: &str) -> Option<u32> {
    content
        .lines()
        .take_while(|line| line.starts_with('#'))
        .find_map(|line| line.strip_prefix(VERSION_PREFIX))
        .and_then(|version| version.trim().parse().ok())
}
