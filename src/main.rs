//! Terminal animation runner (default binary).
//!
//! Glue around the core: parses and validates configuration, sizes the
//! effect from the terminal, and drives the render loop with guaranteed
//! terminal restore on every exit path.

use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use log::info;

use tui_anim::effects::{self, EffectConfig, EFFECT_NAMES};
use tui_anim::render::{NoOverlay, OutputSink, OverlaySource, RenderConfig, Runner, StaticOverlay};
use tui_anim::term::CrosstermSink;
use tui_anim::types::{Palette, RuleRange, Transparency, DEFAULT_FRAME_DELAY_MS};

#[derive(Debug)]
struct CliConfig {
    effect: String,
    frames: Option<u64>,
    delay_ms: u64,
    seed: u32,
    survive: Option<RuleRange>,
    birth: Option<RuleRange>,
    palette: Option<Palette>,
    fill_glyph: char,
    message: String,
    wind: i32,
    overlay_lines: Vec<String>,
    transparency: Transparency,
    banner: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            effect: String::from("life"),
            frames: None,
            delay_ms: DEFAULT_FRAME_DELAY_MS,
            seed: 1,
            survive: None,
            birth: None,
            palette: None,
            fill_glyph: '#',
            message: String::from("tui-anim"),
            wind: 0,
            overlay_lines: Vec::new(),
            transparency: Transparency::Smart,
            banner: None,
        }
    }
}

fn usage() -> String {
    format!(
        "usage: tui-anim [options]\n\
         \n\
         options:\n\
         \x20 --effect NAME       one of {} (default life)\n\
         \x20 --frames N          stop after N frames (default: run until q/Esc)\n\
         \x20 --delay-ms N        inter-frame delay (default {DEFAULT_FRAME_DELAY_MS})\n\
         \x20 --seed N            RNG seed (default 1)\n\
         \x20 --survive LOW,HIGH  life survive range (default 2,3)\n\
         \x20 --birth LOW,HIGH    life birth range (default 3,3)\n\
         \x20 --palette RAMP      dead-to-alive character ramp\n\
         \x20 --fill CH           glyph for the fill effect (default #)\n\
         \x20 --message TEXT      text for the ticker effect\n\
         \x20 --wind N            horizontal drift for the rain effect\n\
         \x20 --overlay LINE      overlay art line, repeatable\n\
         \x20 --transparency MODE opaque | naive | smart (default smart)\n\
         \x20 --banner TEXT       exit banner override",
        EFFECT_NAMES.join(", ")
    )
}

fn arg_value<'a>(args: &'a [String], i: &mut usize, name: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow!("{name} needs a value"))
}

/// Parse and validate everything before the loop starts; malformed values
/// are rejected here, never mid-run.
fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut cfg = CliConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--effect" => cfg.effect = arg_value(args, &mut i, "--effect")?.to_string(),
            "--frames" => cfg.frames = Some(arg_value(args, &mut i, "--frames")?.parse()?),
            "--delay-ms" => cfg.delay_ms = arg_value(args, &mut i, "--delay-ms")?.parse()?,
            "--seed" => cfg.seed = arg_value(args, &mut i, "--seed")?.parse()?,
            "--survive" => {
                let raw = arg_value(args, &mut i, "--survive")?;
                cfg.survive = Some(
                    RuleRange::parse(raw)
                        .ok_or_else(|| anyhow!("bad --survive range {raw:?} (want LOW,HIGH)"))?,
                );
            }
            "--birth" => {
                let raw = arg_value(args, &mut i, "--birth")?;
                cfg.birth = Some(
                    RuleRange::parse(raw)
                        .ok_or_else(|| anyhow!("bad --birth range {raw:?} (want LOW,HIGH)"))?,
                );
            }
            "--palette" => {
                let raw = arg_value(args, &mut i, "--palette")?;
                cfg.palette = Some(
                    Palette::new(raw)
                        .ok_or_else(|| anyhow!("palette needs between 2 and 256 stages"))?,
                );
            }
            "--fill" => {
                let raw = arg_value(args, &mut i, "--fill")?;
                cfg.fill_glyph = raw
                    .chars()
                    .next()
                    .ok_or_else(|| anyhow!("--fill needs a character"))?;
            }
            "--message" => cfg.message = arg_value(args, &mut i, "--message")?.to_string(),
            "--wind" => cfg.wind = arg_value(args, &mut i, "--wind")?.parse()?,
            "--overlay" => {
                let line = arg_value(args, &mut i, "--overlay")?.to_string();
                cfg.overlay_lines.push(line);
            }
            "--transparency" => {
                let raw = arg_value(args, &mut i, "--transparency")?;
                cfg.transparency = Transparency::from_str(raw)
                    .ok_or_else(|| anyhow!("unknown transparency mode {raw:?}"))?;
            }
            "--banner" => cfg.banner = Some(arg_value(args, &mut i, "--banner")?.to_string()),
            "--help" | "-h" => bail!("{}", usage()),
            other => bail!("unknown option {other:?}\n\n{}", usage()),
        }
        i += 1;
    }
    if !EFFECT_NAMES.contains(&cfg.effect.as_str()) {
        bail!(
            "unknown effect {:?}, expected one of {}",
            cfg.effect,
            EFFECT_NAMES.join(", ")
        );
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let mut sink = CrosstermSink::new()?;
    let interrupt = sink.interrupt_flag();
    let (width, height) = sink.report_size();
    info!("terminal size {width}x{height}, effect {:?}", cli.effect);

    let mut effect_cfg = EffectConfig::new(width, height);
    effect_cfg.seed = cli.seed;
    effect_cfg.fill_glyph = cli.fill_glyph;
    effect_cfg.message = cli.message.clone();
    effect_cfg.wind = cli.wind;
    if let Some(survive) = cli.survive {
        effect_cfg.rules.survive = survive;
    }
    if let Some(birth) = cli.birth {
        effect_cfg.rules.birth = birth;
    }
    if let Some(palette) = cli.palette.clone() {
        effect_cfg.palette = palette;
    }

    let effect = effects::create(&cli.effect, &effect_cfg)
        .ok_or_else(|| anyhow!("no constructor for effect {:?}", cli.effect))?;

    let overlay: Box<dyn OverlaySource> = if cli.overlay_lines.is_empty() {
        Box::new(NoOverlay)
    } else {
        Box::new(StaticOverlay::new(
            cli.overlay_lines.clone(),
            cli.transparency,
        ))
    };

    let render_cfg = RenderConfig {
        frames: cli.frames,
        frame_delay: Duration::from_millis(cli.delay_ms),
        banner: cli.banner.clone(),
    };

    sink.enter()?;
    let mut runner = Runner::new(effect, overlay, sink, render_cfg)?.with_interrupt(interrupt);

    let result = runner.run();

    // Always try to restore terminal state.
    let _ = runner.sink.exit();
    result.map(|_| ())
}
