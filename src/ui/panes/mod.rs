pub mod measure_pane;

pub use measure_pane::MeasurePanePlugin;
