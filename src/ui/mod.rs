pub mod context;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod widgets;
