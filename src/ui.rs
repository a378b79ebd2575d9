//! Output for lst.
//!
//! - [render]: layout dispatch and name printing with colors and indicators.
//! - [columns]: the width-balanced grid.
//! - [long]: the long listing and its format templates.
//! - [icons]: Nerd Font icons.

pub mod columns;
pub mod icons;
pub mod long;
pub mod render;

pub use columns::ColumnLayout;
pub use long::{LongColumn, parse_long_format};
pub use render::{Layout, RenderOptions, print_entries};
