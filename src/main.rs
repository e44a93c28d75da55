use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tile_gallery::app::{self, ProfileActions};
use tile_gallery::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Animated 3D tile gallery for profile records", long_about = None)]
struct Args {
    /// TOML config file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file with record rows
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON file backing the local profile store
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Seed for scatter positions and transition durations
    #[arg(long)]
    seed: Option<u64>,

    /// Layouts to visit, in order (table, sphere, helix, grid)
    #[arg(long, value_delimiter = ',')]
    tour: Option<Vec<String>>,

    /// Pace frames to wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Identity provider credential (JWT) to sign in with
    #[arg(long)]
    sign_in: Option<String>,

    /// Forget the stored profile
    #[arg(long)]
    sign_out: bool,

    /// Store a preferred locale for the profile
    #[arg(long)]
    locale: Option<String>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(data) = args.data {
        config.data_path = data;
    }
    if let Some(profile) = args.profile {
        config.profile_path = profile;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(tour) = args.tour {
        config.tour.layouts = tour;
    }
    config.tour.realtime |= args.realtime;

    let actions = ProfileActions {
        sign_in: args.sign_in,
        sign_out: args.sign_out,
        locale: args.locale,
    };

    app::run(&config, &actions)?;

    Ok(())
}
