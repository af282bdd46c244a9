use clap::Parser;
use daybook::application::{
    init::init, search_entries, summarize, AuthService, ConfigService, EntryService,
    Granularity,
};
use daybook::cli::{format_entry, format_entry_list, format_page, format_summary, Cli, Commands};
use daybook::domain::Session;
use daybook::error::{DaybookError, Result};
use daybook::infrastructure::{Config, SqliteStore, Workspace};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "daybook=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DAYBOOK_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Open the discovered workspace and its store
fn open() -> Result<(Config, SqliteStore)> {
    let workspace = Workspace::discover()?;
    let config = workspace.load_config()?;
    let store = workspace.open_store(&config)?;
    Ok((config, store))
}

fn require_password(password: Option<&str>) -> Result<&str> {
    password.ok_or_else(|| {
        DaybookError::InvalidInput("Missing --password (or DAYBOOK_PASSWORD)".to_string())
    })
}

/// Authenticate the CLI credentials into a fresh session
fn login(
    store: &SqliteStore,
    config: &Config,
    user: Option<&str>,
    password: Option<&str>,
) -> Result<Session> {
    let user = user.ok_or_else(|| {
        DaybookError::InvalidInput("Missing --user (or DAYBOOK_USER)".to_string())
    })?;
    AuthService::new(store).login(user, require_password(password)?, config.page_size)
}

fn run(cli: Cli) -> Result<()> {
    let user = cli.user.as_deref();
    let password = cli.password.as_deref();

    match cli.command {
        Commands::Init { path, page_size } => {
            init(&path, page_size)?;
            println!("Initialized daybook journal at {}", path.display());
            Ok(())
        }
        Commands::Register { username, confirm } => {
            let (_, store) = open()?;
            let user =
                AuthService::new(&store).register(&username, require_password(password)?, &confirm)?;
            println!("Registered {}", user.username);
            Ok(())
        }
        Commands::Add { text, attach } => {
            let (config, store) = open()?;
            let session = login(&store, &config, user, password)?;
            let entry = EntryService::new(&store).create(&session, &text, attach.as_deref())?;
            println!("{}", entry.id);
            Ok(())
        }
        Commands::List { page } => {
            let (config, store) = open()?;
            let mut session = login(&store, &config, user, password)?;
            let page = EntryService::new(&store).seek_page(&mut session, page.saturating_sub(1))?;
            println!("{}", format_page(&page));
            Ok(())
        }
        Commands::Edit { id, text } => {
            let (config, store) = open()?;
            let session = login(&store, &config, user, password)?;
            let entry = EntryService::new(&store).update(&session, id, &text)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::Delete { id } => {
            let (config, store) = open()?;
            let mut session = login(&store, &config, user, password)?;
            EntryService::new(&store).delete(&mut session, id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
        Commands::Search { start, end } => {
            let (config, store) = open()?;
            let session = login(&store, &config, user, password)?;
            let entries = search_entries(&store, &session, &start, &end)?;
            if !entries.is_empty() {
                println!("Found {} entries:", entries.len());
            }
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Commands::Count => {
            let (config, store) = open()?;
            let session = login(&store, &config, user, password)?;
            println!("{}", EntryService::new(&store).count(&session)?);
            Ok(())
        }
        Commands::Stats { by } => {
            let granularity = Granularity::from_str(&by).map_err(DaybookError::InvalidInput)?;
            let (config, store) = open()?;
            let session = login(&store, &config, user, password)?;
            let summary = summarize(&store, &session, granularity)?;
            println!("{}", format_summary(&summary).trim_end());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("page_size = {}", config.page_size);
                println!("database = {}", config.database);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: daybook config [--list | <key> [<value>]]");
                println!("Valid keys: page_size, database, created");
                Ok(())
            }
        }
    }
}
