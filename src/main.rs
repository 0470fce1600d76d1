use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use postboard::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use postboard::cli::{Cli, Commands};
use postboard::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => handle_init(cli.database.clone()),
        Commands::Schema => handle_schema(),
        Commands::Serve { host, port } => {
            let (ctx, _log_guard) = setup(&cli)?;
            handle_serve(ctx, host.clone(), *port)
        }
        Commands::Query { query, variables } => {
            let (ctx, _log_guard) = setup(&cli)?;
            handle_query(ctx, query.clone(), variables.clone())
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let (ctx, _log_guard) = setup(&cli)?;
            handle_mutate(ctx, mutation.clone(), variables.clone())
        }
    }
}

fn setup(cli: &Cli) -> Result<(CommandContext, Option<WorkerGuard>)> {
    let ctx = CommandContext::load(cli)?;
    let guard = logging::init(ctx.config.logging.verbose, ctx.log_file());
    Ok((ctx, guard))
}
