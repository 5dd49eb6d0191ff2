pub mod contents_json;
pub mod gradient;
pub mod icon_set;
pub mod layer;
pub mod render;
pub mod shapes;

pub use icon_set::{generate_icon_set, GenerateOptions, IconSpec, DEFAULT_OUTPUT_DIR, ICON_SET};
pub use render::render_icon;
