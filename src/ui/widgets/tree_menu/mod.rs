//! Tree Menu Widget
//!
//! Interactive section / test case tree for the `browse` command.
//!
//! - `menu` - cursor, flattened rows and action handling
//! - `render` - string rendering of rows, bars and the detail pane
//! - `input` - key mapping and the raw-mode terminal loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
