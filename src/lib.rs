#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod curve;
pub mod layout;
pub mod model;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ChartConfig, Config, RenderConfig, load_config};
pub use curve::{Phase, map_to_canvas, sample_curve};
pub use layout::{Corner, Orientation, Placement, Point, TextBlock, layout_labels};
pub use model::{Marker, parse_markers};
pub use render::render_svg;
pub use theme::Theme;
