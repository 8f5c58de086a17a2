//! Scripted sessions and carousel construction from CLI sources.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use reel_core::{CarouselConfig, CarouselController, Roster, TeamMember};
use reel_runtime::InputMacro;

use crate::error::Result;

/// Where the roster and config come from.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Roster file (`.toml` or `.json`). Defaults to the built-in roster.
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Carousel config file (`.toml` or `.json`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial viewport width in logical pixels.
    #[arg(long, default_value_t = 1280)]
    pub width: u32,
}

impl Default for SourceArgs {
    fn default() -> Self {
        Self {
            roster: None,
            config: None,
            width: 1280,
        }
    }
}

impl SourceArgs {
    pub fn load_roster(&self) -> Result<Roster> {
        let Some(path) = &self.roster else {
            return Ok(Roster::builtin());
        };
        let roster = if is_json(path) {
            Roster::from_json_file(path)?
        } else {
            Roster::from_toml_file(path)?
        };
        tracing::info!(path = %path.display(), members = roster.len(), "loaded roster");
        Ok(roster)
    }

    pub fn load_config(&self) -> Result<CarouselConfig> {
        let Some(path) = &self.config else {
            return Ok(CarouselConfig::default());
        };
        let config = if is_json(path) {
            CarouselConfig::from_json_file(path)?
        } else {
            CarouselConfig::from_toml_file(path)?
        };
        tracing::info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Build a mounted controller sized for `width`.
    pub fn build(&self) -> Result<CarouselController<TeamMember>> {
        let roster = self.load_roster()?;
        let config = self.load_config()?;
        Ok(CarouselController::new(roster.into_members(), config)?.with_viewport_width(self.width))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// A visit to the team page: arrows, a rejected double click, an indicator
/// jump, hovering through a tick, a swipe, a resize to phone width, and a
/// final idle period long enough for one auto-advance.
#[must_use]
pub fn walkthrough() -> InputMacro {
    use reel_core::CarouselEvent::*;

    let ms = Duration::from_millis;
    InputMacro::new("team_page_walkthrough")
        .then(ms(1000), Next)
        .then(ms(200), Next)
        .then(ms(600), GoTo(3))
        .then(ms(1400), PointerEnter)
        .then(ms(4000), PointerLeave)
        .then(ms(1000), TouchStart { x: 240.0 })
        .then(ms(40), TouchMove { x: 200.0 })
        .then(ms(40), TouchMove { x: 170.0 })
        .then(ms(60), TouchEnd)
        .then(ms(500), Resize { width: 375 })
        .then(ms(700), Previous)
        .idle(ms(3000))
}
