//! lanectl CLI
//!
//! Binary name: `lanectl`

use std::process;

use lanectl::cli::{build_cli, handlers};

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let result = match handlers::load_config(&matches) {
        Ok(config) => {
            handlers::init_tracing(&config);
            handlers::dispatch(&matches, &config).await
        }
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        let code = err
            .downcast_ref::<lane_core::Error>()
            .map_or(1, lane_core::Error::exit_code);

        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {err:#}");
        }
        #[allow(clippy::exit)]
        process::exit(code);
    }
}
