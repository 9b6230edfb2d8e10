//! Effect implementations and the state-machine contract they share
//!
//! Every effect owns one grid and mutates it in place once per frame; the
//! render loop never reaches into an effect beyond [`Effect::render_frame`]
//! and a read of the finished buffer.
//!
//! # Module Structure
//!
//! - [`effect`]: the `Effect` trait (frame 0 initializes, later frames update)
//! - [`life`]: Game of Life with per-cell decay stages and configurable rules
//! - [`fill`]: constant glyph fill, settles after the first frame
//! - [`rain`]: falling drops with bounded per-column landing stacks
//! - [`ticker`]: marquee text fed by a cancellable background task
//! - [`background`]: worker-thread helper polled non-blockingly by effects
//! - [`registry`]: name-to-constructor selection for the binary

pub mod background;
pub mod effect;
pub mod fill;
pub mod life;
pub mod rain;
pub mod registry;
pub mod ticker;

pub use background::BackgroundTask;
pub use effect::Effect;
pub use fill::FillEffect;
pub use life::LifeEffect;
pub use rain::RainEffect;
pub use registry::{create, EffectConfig, EFFECT_NAMES};
pub use ticker::TickerEffect;
