pub mod batch;
pub mod error;
pub mod recolor;
pub mod settings;

pub use batch::{run_batch, BatchReport, FileOutcome, FileReport};
pub use error::{RecolorError, Result};
pub use recolor::{is_near_black, load_image, recolor, recolor_pixels, save_image};
pub use settings::{format_hex_color, parse_hex_color, BatchSettings, RecolorSettings};
