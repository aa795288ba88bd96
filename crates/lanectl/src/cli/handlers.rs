//! CLI command handlers that bridge between `clap` and the lane engine

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::ArgMatches;
use lane_core::{
    config::{self, Config},
    CraneRole, CreateLanesRequest, LaneEngine, MoveCraneRequest,
};
use tracing_subscriber::EnvFilter;

use crate::{
    commands::{self, OutputFormat},
    database::LaneDb,
};

/// Load the effective config: files and env from `lane_core::config`, then CLI flags.
pub fn load_config(matches: &ArgMatches) -> Result<Config> {
    let explicit = matches.get_one::<PathBuf>("config");
    let config = config::load_config(explicit.map(PathBuf::as_path))?;

    Ok(match matches.get_one::<PathBuf>("db") {
        Some(path) => Config {
            database_path: path.clone(),
            ..config
        },
        None => config,
    })
}

/// Install the stderr tracing subscriber. `RUST_LOG` wins over the config level.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,lane_core={0},lanectl={0}", config.log_level)));

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the parsed command line
pub async fn dispatch(matches: &ArgMatches, config: &Config) -> Result<()> {
    let format = OutputFormat::from_json_flag(matches.get_flag("json"));
    let mut out = std::io::stdout();

    if let Some(("config", _)) = matches.subcommand() {
        return commands::config::run(config, format, &mut out);
    }

    let db = LaneDb::open(&config.database_path)
        .await
        .with_context(|| format!("opening {}", config.database_path.display()))?;
    let engine = LaneEngine::new(Arc::new(db.clone()))
        .with_max_lanes_per_request(config.max_lanes_per_request);

    let result = match matches.subcommand() {
        Some(("create", sub)) => {
            let request = CreateLanesRequest {
                lanes: sub.get_one::<i64>("count").copied(),
                positions: sub.get_one::<i64>("length").copied(),
            };
            commands::create::run(&engine, &request, format, &mut out).await
        }
        Some(("list", _)) => commands::list::run(&engine, format, &mut out).await,
        Some(("show", sub)) => {
            let lane_id = sub.get_one::<String>("lane_id").cloned().unwrap_or_default();
            commands::list::show(&engine, &lane_id, format, &mut out).await
        }
        Some(("move", sub)) => {
            let request = MoveCraneRequest {
                lane_id: sub.get_one::<String>("lane_id").cloned(),
                lane_order: sub.get_one::<CraneRole>("crane").copied(),
                desired_position: sub.get_one::<i64>("to").copied(),
            };
            commands::move_crane::run(&engine, &request, format, &mut out).await
        }
        _ => Err(anyhow::anyhow!(
            "Unknown command. Run 'lanectl --help' for usage."
        )),
    };

    db.close().await;
    result
}
