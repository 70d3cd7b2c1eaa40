//! Module for shared constants used across the codebase

/// Markers and limits of the label template language
pub mod render {
    /// Introduces a two-character directive (e.g. `\D0`, `\f`)
    pub const ESCAPE_MARKER: char = '\\';
    /// Introduces a variable reference (e.g. `$g`)
    pub const SUBSTITUTION_MARKER: char = '$';
    /// Maximum number of characters a rendered label can hold
    pub const MAX_OUTPUT: usize = 500;
    /// Label used by the primary-with-label variable
    pub const PRIMARY_LABEL: &str = "GPU";
    /// Label used by the secondary-with-label variable
    pub const SECONDARY_LABEL: &str = "VRAM";
}

pub mod template {
    /// Template used when none is configured
    pub const DEFAULT_TEMPLATE: &str = "\\D2$V\\D0\\t\\f$G";

    /// Ready-made templates offered for selection
    pub const DEFAULT_PRESETS: [&str; 5] = [
        "\\d0\\f$g%\\d1\\f$v%",
        "\\D0\\f\\ag\\.$g%\\D1\\f\\av\\.$v%",
        "\\D0\\f$G\\D1\\f$V",
        "\\D0\\fGPU $g%\\D1\\fVRAM $v%",
        "\\ww\\D0\\f$g\\D1\\f$v",
    ];
}

pub mod config {
    /// Name of the configuration file inside the config directory
    pub const DEFAULT_CONF_FILE: &str = "gpulabel.toml";
    /// Name of the application folder inside the platform config directory
    pub const APP_DIR: &str = "gpulabel";
    /// Overrides the configuration directory
    pub const CONFIG_DIR_ENV: &str = "GPULABEL_CONFIG_DIR";
    /// Enables debug output when set to "true" or "1"
    pub const DEBUG_ENV: &str = "GPULABEL_DEBUG";
}
