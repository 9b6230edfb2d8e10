//! Effect selection by name.
//!
//! The render loop only depends on the [`Effect`] contract; which
//! implementation backs a run is decided here from validated configuration.

use tui_anim_types::{Cell, LifeRules, Palette};

use crate::effect::Effect;
use crate::fill::FillEffect;
use crate::life::LifeEffect;
use crate::rain::RainEffect;
use crate::ticker::TickerEffect;

/// Names accepted by [`create`].
pub const EFFECT_NAMES: &[&str] = &["life", "fill", "rain", "ticker"];

/// Everything an effect constructor may need, validated before the loop
/// starts.
#[derive(Debug, Clone)]
pub struct EffectConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
    pub rules: LifeRules,
    pub palette: Palette,
    pub fill_glyph: char,
    pub message: String,
    pub wind: i32,
}

impl EffectConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            seed: 1,
            rules: LifeRules::default(),
            palette: Palette::greyscale(),
            fill_glyph: '#',
            message: String::from("tui-anim"),
            wind: 0,
        }
    }
}

/// Construct the named effect, or None for an unknown name.
pub fn create(name: &str, cfg: &EffectConfig) -> Option<Box<dyn Effect>> {
    match name {
        "life" => Some(Box::new(LifeEffect::new(
            cfg.width,
            cfg.height,
            cfg.rules,
            cfg.palette.clone(),
            cfg.seed,
        ))),
        "fill" => Some(Box::new(FillEffect::new(
            cfg.width,
            cfg.height,
            Cell::from_char(cfg.fill_glyph),
        ))),
        "rain" => Some(Box::new(RainEffect::new(
            cfg.width,
            cfg.height,
            cfg.wind,
            cfg.seed,
        ))),
        "ticker" => {
            let message = cfg.message.clone();
            Some(Box::new(TickerEffect::new(cfg.width, cfg.height, move || {
                message
            })))
        }
        _ => None,
    }
}
