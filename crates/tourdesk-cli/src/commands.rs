use super::args::{Cli, Commands, TourCommand};
use super::handlers;
use anyhow::Result;
use owo_colors::OwoColorize;
use tourdesk_runtime::{AgencyBackend, Config};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Stderr logging would tear up the alternate screen, so the dashboard
    // runs without the subscriber.
    if !matches!(cli.command, Some(Commands::Dashboard)) {
        tourdesk_runtime::logging::init();
    }

    let backend = AgencyBackend::seeded(config.simulated_latency());

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Tour { command } => match command {
            TourCommand::List {
                search,
                tour_type,
                sort,
                limit,
            } => handlers::list::handle(
                &backend,
                &config,
                search.as_deref(),
                tour_type.as_deref(),
                sort,
                limit,
                cli.format,
            ),
            TourCommand::Show { id } => handlers::show::handle(&backend, &config, id, cli.format),
            TourCommand::Add {
                name,
                country,
                city,
                hotel,
                tour_type,
                duration,
                price,
                max_tourists,
                start_date,
                end_date,
                description,
            } => handlers::mutate::handle_add(
                &backend,
                &config,
                handlers::mutate::DraftFlags {
                    name,
                    country,
                    city,
                    hotel,
                    tour_type,
                    duration,
                    price,
                    max_tourists,
                    start_date,
                    end_date,
                    description,
                },
                cli.format,
            ),
            TourCommand::Update {
                id,
                name,
                country,
                city,
                hotel,
                tour_type,
                duration,
                price,
                max_tourists,
                start_date,
                end_date,
                description,
            } => handlers::mutate::handle_update(
                &backend,
                &config,
                id,
                handlers::mutate::DraftFlags {
                    name,
                    country,
                    city,
                    hotel,
                    tour_type,
                    duration,
                    price,
                    max_tourists,
                    start_date,
                    end_date,
                    description,
                },
                cli.format,
            ),
            TourCommand::Delete { id, yes } => {
                handlers::mutate::handle_delete(&backend, id, yes)
            }
        },

        Commands::Stats => handlers::stats::handle(&backend, &config, cli.format),

        Commands::Export { format, output } => {
            handlers::export::handle(&backend, format, output.as_deref())
        }

        Commands::Report => handlers::report::handle(&backend, &config),

        Commands::Dashboard => handlers::dashboard::handle(backend, &config),
    }
}

fn show_guidance() {
    println!("{}", "tourdesk - travel agency admin".bold());
    println!();
    println!("Common commands:");
    println!("  {}   live dashboard with stats and tour cards", "tourdesk dashboard".cyan());
    println!("  {}   list tours (search/filter/sort)", "tourdesk tour list".cyan());
    println!("  {}        aggregate statistics", "tourdesk stats".cyan());
    println!("  {}       CSV/JSON export of the tour list", "tourdesk export".cyan());
    println!();
    println!("Run {} for the full command tree.", "tourdesk --help".cyan());
}
