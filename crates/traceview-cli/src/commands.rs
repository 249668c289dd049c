use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            file,
            metrics,
            truncate,
            page,
            region,
            output,
        } => handlers::render::handle(handlers::render::RenderRequest {
            file,
            metrics: metrics || config.render.metrics,
            truncate: truncate.or(config.render.truncate),
            page: page || config.render.page,
            region: region
                .or(config.render.region)
                .unwrap_or_else(|| "trace-container".to_string()),
            output,
        }),
        Commands::Stats { file } => handlers::stats::handle(&file),
        Commands::Sample { steps, output } => handlers::sample::handle(steps, output.as_deref()),
    }
}
