mod cli;
mod tui;

pub(crate) use cli::{as_cli, INFO_FLAGS};
pub(crate) use tui::as_tui;
