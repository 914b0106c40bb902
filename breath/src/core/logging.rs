use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;
use termcolor::{Color, ColorSpec, WriteColor};

pub use log::{debug, error, info, trace, warn};

pub const DEFAULT_FILTER: &str = "breath=info,breath_lab=info";

/// Installs the colored stdout logger. `RUST_LOG` overrides
/// [`DEFAULT_FILTER`]. Safe to call more than once.
pub fn init_logger() {
    let mut builder =
        Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.filter_module("naga", LevelFilter::Warn);
    builder.filter_module("wgpu", LevelFilter::Warn);
    builder.filter_module("wgpu_core", LevelFilter::Warn);

    builder.format(|_buf, record| {
        let writer =
            termcolor::BufferWriter::stdout(termcolor::ColorChoice::Auto);
        let mut buffer = writer.buffer();
        let mut spec = ColorSpec::new();

        spec.set_fg(Some(level_color(record.level())));

        buffer.set_color(&spec)?;
        let module_path = record.module_path().unwrap_or("<unknown>");
        write!(buffer, "[{:<5}][{}]", record.level(), short_path(module_path))?;
        buffer.reset()?;
        writeln!(buffer, " {}", record.args())?;
        writer.print(&buffer)?;
        Ok(())
    });

    let _ = builder.try_init();
}

/// `breath::render::trail` -> `render::trail`; other crates stay whole
fn short_path(module_path: &str) -> &str {
    module_path
        .strip_prefix("breath::")
        .unwrap_or(module_path)
}

fn level_color(level: log::Level) -> Color {
    match level {
        log::Level::Trace => Color::Cyan,
        log::Level::Debug => Color::Blue,
        log::Level::Info => Color::Green,
        log::Level::Warn => Color::Yellow,
        log::Level::Error => Color::Red,
    }
}
