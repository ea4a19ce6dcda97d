//! loadboard: terminal front end for loadboard-core
//!
//! Every subcommand drives the same event controller the browser bindings
//! use, so the terminal sees exactly what a page would render.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset statistics
//!   $ loadboard stats
//!
//! - Search listings, lightest first, second page
//!   $ loadboard search lah --sort weight-asc --page 2
//!
//! - Autocomplete a city
//!   $ loadboard suggest kar
//!
//! - Book a load (asks for confirmation unless `--yes`)
//!   $ loadboard book 3
//!
//! - Validate the auth forms
//!   $ loadboard login --email ali@cargo.pk --password secret1
//!   $ loadboard signup --email ali@cargo.pk --phone 03001234567 --password secret1 --role driver
//!
//! Data source
//! -----------
//!
//! Without `--input` the fixture embedded in `loadboard-core` is used.
//! `--delay-ms` reproduces the page's loading phase before results appear.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use loadboard_core::collab::{ConfirmPrompt, Decision, Navigator, Notifier, Severity};
use loadboard_core::forms::{FieldErrors, LoginForm, SignupForm};
use loadboard_core::routes::Route;
use loadboard_core::{Catalog, Controller, Event, ListingId, SearchConfig, SearchSession};
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Toasts go to the terminal; errors on stderr.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => println!("✔ {message}"),
            Severity::Error => eprintln!("✘ {message}"),
        }
    }
}

struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&mut self, route: Route) {
        println!("→ {route}");
    }
}

/// Reads y/N from stdin unless `--yes` was given.
struct TerminalPrompt {
    assume_yes: bool,
}

impl ConfirmPrompt for TerminalPrompt {
    fn ask(&mut self, title: &str, message: &str) -> Decision {
        if self.assume_yes {
            return Decision::Confirm;
        }
        println!("{title}");
        print!("{message} [y/N] ");
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return Decision::Cancel;
        }
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Decision::Confirm,
            _ => Decision::Cancel,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(input: Option<&str>) -> anyhow::Result<Arc<Catalog>> {
    let catalog = match input {
        Some(path) => Arc::new(
            Catalog::load_from_path(path)
                .with_context(|| format!("failed to load listings from {path}"))?,
        ),
        None => Catalog::load_default()?,
    };
    debug!(listings = catalog.len(), source = input.unwrap_or("embedded"), "catalog ready");
    Ok(catalog)
}

/// Build a controller and wait out the loading phase.
fn ready_controller(
    catalog: Arc<Catalog>,
    delay: Duration,
    prompt: TerminalPrompt,
) -> Controller<ConsoleNotifier, TerminalPrompt> {
    let config = SearchConfig::default().with_loading_delay(delay);
    let session = SearchSession::new(catalog, config);
    let mut controller = Controller::new(session, ConsoleNotifier, prompt, Instant::now());

    if controller.session().is_loading() {
        eprintln!("Loading loads...");
        while !controller.poll_timers(Instant::now()) {
            std::thread::sleep(Duration::from_millis(10));
        }
        controller.run_pending();
    }
    controller
}

fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        eprintln!("  {field}: {message}");
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let delay = Duration::from_millis(args.delay_ms);
    let input = args.input.as_deref();

    match args.command {
        Commands::Stats => {
            let catalog = load_catalog(input)?;
            let stats = catalog.stats();
            println!("Listing statistics:");
            println!("  Listings: {}", stats.listings);
            println!("  Cities: {}", stats.cities);
            println!("  Cargo types: {}", stats.cargo_types);
            println!("  Unparsed weights: {}", stats.unparsed_weights);
            println!("  Unparsed dates: {}", stats.unparsed_dates);
        }

        Commands::Search { query, sort, page } => {
            let prompt = TerminalPrompt { assume_yes: false };
            let mut controller = ready_controller(load_catalog(input)?, delay, prompt);
            controller.dispatch(Event::QueryChanged(query.unwrap_or_default()));
            controller.dispatch(Event::SortChanged(sort));
            controller.dispatch(Event::PageSelected(page));
            controller.run_pending();

            let view = controller.session().view();
            if view.no_results {
                println!("No loads found matching: {}", view.query);
                return Ok(());
            }
            for card in &view.listings {
                println!(
                    "#{:<4} {} ➜ {} | {} | {} | Pickup: {} [{}]",
                    card.id,
                    card.origin,
                    card.destination,
                    card.cargo_type,
                    card.weight,
                    card.pickup,
                    card.button_label
                );
            }
            println!(
                "Page {} of {} ({} matches, sorted by {})",
                view.current_page,
                view.total_pages,
                view.total_matches,
                view.sort.label()
            );
        }

        Commands::Suggest { query } => {
            let prompt = TerminalPrompt { assume_yes: false };
            let mut controller = ready_controller(load_catalog(input)?, delay, prompt);
            controller.handle(Event::QueryChanged(query.clone()));

            let suggestions = controller.session().suggestions();
            if suggestions.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for city in suggestions {
                    println!("{city}");
                }
            }
        }

        Commands::Book { id, yes } => {
            let catalog = load_catalog(input)?;
            let id = ListingId::new(id);
            let Some(listing) = catalog.get(&id) else {
                bail!("no load with id {id}");
            };
            let route = format!("{} ➜ {}", listing.origin(), listing.destination());

            let prompt = TerminalPrompt { assume_yes: yes };
            let mut controller = ready_controller(catalog.clone(), delay, prompt);
            controller.handle(Event::BookRequested(id.clone()));

            let state = controller.session().booking_state(&id);
            if state.can_book() {
                println!("Booking of {route} cancelled.");
            }
        }

        Commands::Login { email, password } => {
            let mut form = LoginForm::new(email, password);
            if let Err(errors) = form.submit(&mut ConsoleNotifier, &mut ConsoleNavigator) {
                print_field_errors(&errors);
                bail!("login form has {} invalid field(s)", errors.len());
            }
        }

        Commands::Signup {
            email,
            phone,
            password,
            role,
        } => {
            let mut form = SignupForm::new(email, &phone, password, role);
            if let Err(errors) = form.submit(&mut ConsoleNotifier, &mut ConsoleNavigator) {
                print_field_errors(&errors);
                bail!("signup form has {} invalid field(s)", errors.len());
            }
            println!("Registered as {:?}", form.role);
        }
    }

    Ok(())
}
