//! Auto-sizing text field demo
//!
//! Types a string into an auto-sizing field one character at a time, then resizes
//! the field, logging the font size chosen at every step.
//!
//! Usage: `autofit [TEXT] [WIDTH] [HEIGHT]`

use autofit_core::{AutoFitField, BoundsMeasurer, Spacing};
use autofit_text::Engine;

const DEFAULT_TEXT: &str = "Hello, autofit!";
const DEFAULT_WIDTH: f32 = 320.0;
const DEFAULT_HEIGHT: f32 = 64.0;
const DECLARED_TEXT_SIZE: u32 = 48;
const HINT: &str = "Type something";

struct Args {
    text: String,
    width: f32,
    height: f32,
}

fn parse_dimension(value: Option<String>, name: &str, default: f32) -> Result<f32, String> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<f32>()
            .map_err(|err| format!("invalid {name} '{raw}': {err}")),
    }
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| DEFAULT_TEXT.to_string());
    let width = parse_dimension(args.next(), "width", DEFAULT_WIDTH)?;
    let height = parse_dimension(args.next(), "height", DEFAULT_HEIGHT)?;
    Ok(Args {
        text,
        width,
        height,
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            log::error!("{err}");
            log::error!("usage: autofit [TEXT] [WIDTH] [HEIGHT]");
            std::process::exit(2);
        }
    };

    let engine = Engine::new_default();
    let default_typeface = engine.is_default_typeface();
    let mut measurer = BoundsMeasurer::new(engine);

    let mut field = AutoFitField::new(DECLARED_TEXT_SIZE)
        .with_hint(HINT)
        .with_padding(Spacing::symmetric(8.0, 4.0));
    field.set_typeface_default(default_typeface);

    field.on_size_changed(args.width, args.height, &mut measurer);
    log::info!(
        "✓ Field {}x{}, hint '{}' -> size {}",
        args.width,
        args.height,
        HINT,
        field.text_size()
    );

    let mut typed = String::new();
    for ch in args.text.chars() {
        typed.push(ch);
        field.set_text(typed.as_str(), &mut measurer);
        log::info!("  '{}' -> size {}", typed, field.text_size());
    }

    let stats = field.search().stats();
    log::info!(
        "✓ Typing: {} searches, {} cache hits, {} measurements",
        stats.misses,
        stats.hits,
        stats.measurements
    );

    let (width, height) = (args.width * 0.5, args.height);
    field.on_size_changed(width, height, &mut measurer);
    log::info!(
        "✓ Resized to {}x{} -> size {}",
        width,
        height,
        field.text_size()
    );
}
