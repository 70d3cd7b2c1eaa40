//! `gpulabel` renders the text label drawn on top of a GPU utilization chart.
//!
//! A label template mixes plain text, escape codes interpreted later by the chart
//! renderer (colors, fonts, widths) and variables holding the current GPU and VRAM
//! usage. The entry point is `renderer::render`; `monitor::LabelMonitor` keeps a
//! replaceable template and an enable flag for hosts running an update loop.
//!
//! "Hello world" example:
//! ```
//! use gpulabel::prelude::*;
//!
//! let metrics = MetricsSnapshot::from_usage(42, 2 * 1024, 8 * 1024);
//! let label = render(Some("\\D0\\f$G\\D1\\f$V"), &metrics);
//! assert_eq!(label, "\\D0\\fGPU 42%\\D1\\fVRAM 25%");
//! ```

pub mod codes;
pub mod config;
pub mod constants;
pub mod error;
pub mod log;
pub mod metrics;
pub mod monitor;
pub mod renderer;
pub mod transforms;

/// The gpulabel prelude
///
/// This module re-exports the most commonly used items from gpulabel.
/// You can use it with `use gpulabel::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::error::Result;
    pub use crate::metrics::MetricsSnapshot;
    pub use crate::monitor::LabelMonitor;
    pub use crate::renderer::TemplateRenderer;

    // Re-export commonly used constants
    pub use crate::constants::render::MAX_OUTPUT;

    // Re-export commonly used functions
    pub use crate::renderer::render;
}
