//! Thin wrappers around the external Chart.js library.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering is delegated entirely to the page-level Chart.js bundle. When
//! that global is missing every chart mount is skipped with a log line;
//! nothing in this module is ever fatal to the page.

pub mod render;
pub mod spec;

pub use render::{ChartCanvas, charting_available, mount_inline_charts};
pub use spec::{ChartDataset, ChartKind, ChartSpec};
