//! Application -> subdirectory mapping.
//!
//! Each application (simulator product) owns an ordered list of content
//! subdirectories below the version root. Subdirectories are written with
//! either `/` or `\`; the walker splits on both.

use serde::{Deserialize, Serialize};

const IMEX_SUBDIRS: &[&str] = &[
    "IMEX/Content/IMEX/Fluid Model",
    "IMEX/Content/IMEX/Initial Conditions",
    "IMEX/Content/IMEX/IO Control",
    "IMEX/Content/IMEX/Numerical Methods",
    "IMEX/Content/IMEX/Other Reservoir Properties",
    "IMEX/Content/IMEX/Recurrent Data",
    "IMEX/Content/IMEX/Reservoir Description",
    "IMEX/Content/IMEX/Rock Fluid Properties",
    "IMEX/Content/IMEX/Tracer Data",
    "IMEX/Content/COMMON/Geomechanics",
    "IMEX/Content/COMMON/Keyword System",
    "IMEX/Content/COMMON/Numerical Methods",
    "IMEX/Content/COMMON/Recurrent Data",
    "IMEX/Content/COMMON/Reservoir Description",
];

const GEM_SUBDIRS: &[&str] = &[
    "GEM/Content/GEM/Fluid Model",
    "GEM/Content/GEM/Initial Conditions",
    "GEM/Content/GEM/IO Control",
    "GEM/Content/GEM/Numerical Methods",
    "GEM/Content/GEM/Other Reservoir Properties",
    "GEM/Content/GEM/Recurrent Data",
    "GEM/Content/GEM/Reservoir Description",
    "GEM/Content/GEM/Rock Fluid Properties",
    "GEM/Content/GEM/Tracer Data",
    "GEM/Content/COMMON/Geomechanics",
    "GEM/Content/COMMON/Keyword System",
    "GEM/Content/COMMON/Numerical Methods",
    "GEM/Content/COMMON/Recurrent Data",
    "GEM/Content/COMMON/Reservoir Description",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApplicationConfig {
    /// Output bucket name, e.g. `IMEX`.
    pub name: String,

    /// Content directories relative to the version root.
    #[serde(default)]
    pub subdirs: Vec<String>,
}

impl ApplicationConfig {
    #[must_use]
    pub fn new(name: &str, subdirs: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            subdirs: subdirs.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

pub(crate) fn default_applications() -> Vec<ApplicationConfig> {
    vec![
        ApplicationConfig::new("IMEX", IMEX_SUBDIRS),
        ApplicationConfig::new("GEM", GEM_SUBDIRS),
    ]
}
