use testrun::config::Config;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &Config) -> Self {
        Self::from_caps(json, verbose, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        config: &Config,
        mut caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.ui.unicode.unwrap_or(caps.supports_unicode);
        caps.supports_unicode = unicode;
        caps.supports_color = caps.supports_color && !json;

        Self {
            json,
            verbose,
            caps,
            unicode,
        }
    }

    /// Interactive UI needs a terminal on stdout and no JSON mode
    pub fn can_interact(&self) -> bool {
        self.caps.is_tty && !self.json
    }
}
