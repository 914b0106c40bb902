use clap::Parser;
use std::path::PathBuf;
use std::process;

use breath::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "breath-lab", version)]
#[command(about = "Guided breathing patterns with animated visuals")]
struct Args {
    /// Pattern to open directly, e.g. `box` (see --list)
    pattern: Option<String>,

    /// Settings file (defaults to <config dir>/BreathLab/settings.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<f32>,

    /// Start in fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Print the available patterns and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    /// Flags win over values read from the settings file
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(pattern) = &self.pattern {
            settings.pattern = Some(pattern.clone());
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(fps) = self.fps {
            settings.fps = fps;
        }
        settings.fullscreen |= self.fullscreen;
        settings.validated()
    }
}

fn print_catalog() {
    for pattern in patterns() {
        println!(
            "{:<14}{:<18}{:<10}{}",
            pattern.id,
            pattern.name,
            pattern.visual.as_str(),
            pattern.timing.summary()
        );
    }
}

fn main() {
    let args = Args::parse();

    if args.list {
        print_catalog();
        return;
    }

    init_logger();

    let settings = Settings::load(args.config.as_deref())
        .map(|settings| args.apply(settings))
        .unwrap_or_else(|err| {
            eprintln!("breath-lab: unable to load settings: {}", err);
            process::exit(1);
        });

    if let Some(id) = &settings.pattern {
        if find_pattern(id).is_none() {
            warn!(
                "No pattern named `{}`; starting on the dashboard. Available: {}",
                id,
                breath::catalog::pattern_ids().join(", ")
            );
        }
    }

    breath::run(settings);
}
