use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::Parser;

use engine::prelude::*;
use ui::prelude::*;

mod run;
use run::{Script, Session};

pub const GAME_NAME: &str = "lofi";

#[derive(Parser, Debug)]
#[command(version, about = "First-person grid dungeon crawler view")]
struct Args {
    #[arg(
        long,
        default_value = "resources",
        help = "Root directory of the game art"
    )]
    assets: PathBuf,

    #[arg(
        long,
        default_value = "",
        help = "Key script, eg. \"w:10 d w:20\", `key:N` holds a key for N \
                ticks, `-:N` waits"
    )]
    keys: Script,

    #[arg(
        long,
        default_value = "screen.png",
        help = "Where to save the final screen"
    )]
    out: PathBuf,

    #[arg(long, help = "Save every redrawn frame in this directory")]
    frames_dir: Option<PathBuf>,

    #[arg(long, default_value_t = Layout::Corridors, help = "Map layout")]
    layout: Layout,

    #[arg(long, help = "Disable sideways steps")]
    no_strafe: bool,

    #[arg(long, default_value_t = 0, help = "Pause between ticks")]
    frame_delay_ms: u64,

    #[arg(long, help = "Append log output to a file instead of stderr")]
    log_file: Option<PathBuf>,
}

fn init_logger(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    );

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {path:?}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_file.as_deref())?;
    log::info!("{GAME_NAME} starting, assets at {:?}", args.assets);

    let art = ArtCatalog::load(&args.assets);
    let overlays = Overlays::load(args.assets.join("overlays"))?;

    if let Some(dir) = &args.frames_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {dir:?}"))?;
    }

    let mut session = Session::new(
        GameConfig {
            layout: args.layout,
            strafing: !args.no_strafe,
        },
        Screen::new(art, overlays),
    );

    session.run(
        &args.keys,
        args.frames_dir.as_deref(),
        Duration::from_millis(args.frame_delay_ms),
    )?;
    log::info!(
        "session over, player at {}: {}",
        session.game().player(),
        session.hud().message()
    );

    session
        .screen()
        .buffer()
        .save_png(&args.out)
        .with_context(|| format!("failed to save screen to {:?}", args.out))?;
    log::info!("saved {:?}", args.out);

    Ok(())
}
