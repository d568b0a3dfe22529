use anyhow::Context;
use clap::Parser;

mod app;
mod args;
mod clock;
mod gfx;
mod input;
mod mesh;
mod renderer;

use app::App;
use args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = <Args as Parser>::parse();

    let config = args.load_config().context("failed to load config")?;
    log::info!(
        "court {}x{}, win score {}",
        config.court_width,
        config.court_height,
        config.win_score
    );

    let app = App::new(config).context("failed to start the game window")?;

    app.run()
}
