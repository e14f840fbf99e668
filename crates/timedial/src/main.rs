use clap::Parser;
use relm4::prelude::*;
use timedial::config;
use timedial::gui::app::{AppInit, AppModel};
use timedial::picker::PickerMode;
use timedial::sys::runtime;

#[derive(Parser, Debug)]
#[command(name = "timedial", version, about, long_about = None)]
struct Cli {
    /// Value reported by the dial: minute, hour12 or hour24 (overrides the config file)
    #[arg(short, long)]
    mode: Option<PickerMode>,

    /// Write the default config file if missing, print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.timedial.TimeDial").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        mode_override: cli.mode,
        events: rx,
    });
    Ok(())
}
