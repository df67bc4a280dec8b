use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use techsphere_common::Color;

/// Closed set of categories a technology can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "java/jvm")]
    JavaJvm,
    #[serde(rename = "languages")]
    Languages,
    #[serde(rename = "quality")]
    Quality,
    #[serde(rename = "devops")]
    DevOps,
    #[serde(rename = "tools")]
    Tools,
}

impl Category {
    /// Every category in filter-bar order.
    pub const ALL: [Category; 6] = [
        Category::Web,
        Category::JavaJvm,
        Category::Languages,
        Category::Quality,
        Category::DevOps,
        Category::Tools,
    ];

    /// Catalog key, e.g. `"java/jvm"`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::JavaJvm => "java/jvm",
            Category::Languages => "languages",
            Category::Quality => "quality",
            Category::DevOps => "devops",
            Category::Tools => "tools",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::JavaJvm => "Java/JVM",
            Category::Languages => "Languages",
            Category::Quality => "Quality",
            Category::DevOps => "DevOps",
            Category::Tools => "Tools",
        }
    }

    /// Accent color of the category's filter button.
    pub fn accent_color(self) -> Color {
        match self {
            Category::Web => Color::from_rgb(0x61, 0xda, 0xfb),
            Category::JavaJvm => Color::from_rgb(0x00, 0x73, 0x96),
            Category::Languages => Color::from_rgb(0xf7, 0xdf, 0x1e),
            Category::Quality => Color::from_rgb(0x4c, 0xaf, 0x50),
            Category::DevOps => Color::from_rgb(0xff, 0x98, 0x00),
            Category::Tools => Color::from_rgb(0x9c, 0x27, 0xb0),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}
