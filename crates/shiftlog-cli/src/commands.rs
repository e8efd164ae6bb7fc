use anyhow::{Context, Result};

use shiftlog_runtime::{resolve_workspace_path, Config, Session};
use shiftlog_types::RecordFilter;

use crate::args::{Cli, Commands, RecordCommand};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        handlers::guidance::handle();
        return Ok(());
    };

    let mut session = Session::open(&data_dir)
        .with_context(|| format!("Failed to open record store in {}", data_dir.display()))?;

    match command {
        Commands::Add {
            employee,
            product,
            start,
            end,
        } => handlers::add::handle(&mut session, &employee, &product, &start, &end),

        Commands::Record { command } => match command {
            RecordCommand::List { employee, product } => {
                let filter = RecordFilter::from_args(employee.as_deref(), product.as_deref());
                handlers::list::handle(&session, &filter, cli.format)
            }
            RecordCommand::Export {
                output,
                employee,
                product,
            } => {
                let filter = RecordFilter::from_args(employee.as_deref(), product.as_deref());
                handlers::export::handle(&session, &filter, &output)
            }
        },

        Commands::Stats {
            employee,
            product,
            chart,
        } => {
            let config = Config::load_from(&data_dir.join("config.toml"))?;
            let filter = RecordFilter::from_args(employee.as_deref(), product.as_deref());
            handlers::stats::handle(&session, &filter, cli.format, chart, &config)
        }

        Commands::Employees => handlers::values::handle(session.employees(), "employees"),
        Commands::Products => handlers::values::handle(session.products(), "products"),
    }
}
