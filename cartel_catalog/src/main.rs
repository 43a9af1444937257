use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cartel_catalog::api::{
    BookSearch, GameCategory, GameSearch, ItemSearch, LoanDirection, LoanSearch, Pagination,
    PersonSearch, SuggestionDraft, SuggestionType,
};
use cartel_catalog::app_config::ClientConfig;
use cartel_catalog::format::{
    format_author, format_categories, format_creator, format_game_publisher, format_genre,
    format_item_details, format_player_count, format_playtime, format_publisher,
    is_book_available, is_game_available, is_item_available,
};

#[derive(Parser)]
#[command(name = "cartel_catalog", version, about = "Browse and manage the Cartel catalog")]
struct Cli {
    /// Configuration file used instead of cartel.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Checks the admin password and prints the issued token
    Login { password: String },
    Books {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    Games {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<GameCategory>,
        /// Games playable with at least this many players
        #[arg(long)]
        players: Option<u32>,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    Items {
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Copies of one item
    Copies { item: String },
    Loans {
        /// `to` for loans to the Cartel, `by` for loans by the Cartel
        direction: LoanDirection,
        #[arg(long)]
        item: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Persons {
        #[arg(long)]
        name: Option<String>,
    },
    Factures {
        /// Only factures containing a matching item
        #[arg(long)]
        item: Option<String>,
    },
    Suggestions,
    /// Suggests a new item for the catalog
    Suggest {
        name: String,
        #[arg(long, default_value = "AUTRE")]
        kind: SuggestionType,
        #[arg(long)]
        description: Option<String>,
    },
}

fn init_telemetry() -> anyhow::Result<()> {
    use opentelemetry::global;
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use opentelemetry_sdk::runtime::TokioCurrentThread;
    use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::{EnvFilter, Registry};

    // Spans of the outgoing requests go to the Jaeger agent, so CLI calls show up next to the backend traces
    let app_name = "cartel_catalog";

    global::set_text_map_propagator(TraceContextPropagator::new());
    #[allow(deprecated)]
    let tracer = opentelemetry_jaeger::new_agent_pipeline()
        .with_service_name(app_name)
        .install_batch(TokioCurrentThread)
        .context("Failed to install OpenTelemetry tracer")?;

    // Tunable via `RUST_LOG` env variable
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info"));
    let telemetry = tracing_opentelemetry::layer().with_tracer(tracer);
    // Logs go to stderr, stdout is kept for the listed records
    let formatting_layer = BunyanFormattingLayer::new(app_name.into(), std::io::stderr);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(telemetry)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install `tracing` subscriber")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "disponible"
    } else {
        "indisponible"
    }
}

async fn run(config: &ClientConfig, command: Command) -> anyhow::Result<()> {
    let client = match &command {
        Command::Login { .. } => config.build_client()?,
        _ => config.connect().await?,
    };

    match command {
        Command::Login { password } => {
            client.auth().login(&password).await?;
            if let Some(token) = client.session().token() {
                println!("{token}");
            }
        }
        Command::Books { title, author } => {
            let search = BookSearch {
                title,
                author,
                category: None,
            };
            for book in client.books().search(&search).await? {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    book.isbn,
                    book.title,
                    format_author(&book),
                    format_publisher(&book),
                    format_genre(&book),
                    yes_no(is_book_available(&book))
                );
            }
        }
        Command::Games {
            title,
            category,
            players,
            page,
            size,
        } => {
            let search = GameSearch {
                pagination: Pagination::page(page, size),
                title_game: title,
                min_players: players,
                category,
                ..GameSearch::default()
            };
            for game in client.games().list(&search).await? {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    game.barcode,
                    game.name,
                    format_creator(&game),
                    format_game_publisher(&game),
                    format_categories(&game),
                    format_player_count(&game),
                    format_playtime(&game),
                    yes_no(is_game_available(&game))
                );
            }
        }
        Command::Items { name, page, size } => {
            let search = ItemSearch {
                name,
                pagination: Pagination::page(page, size),
            };
            let items = client.items().search(&search).await?;
            for item in &items.content {
                let details = format_item_details(item);
                println!(
                    "{}\t{}\t{}\t{}",
                    details.id,
                    details.name,
                    details.description,
                    yes_no(is_item_available(item))
                );
            }
            println!("page {}/{}", items.number + 1, items.total_pages.max(1));
        }
        Command::Copies { item } => {
            for copy in client.items().copies(&item).await? {
                println!(
                    "{}\t{}\t{}",
                    copy.id,
                    copy.parent_barcode().unwrap_or(item.as_str()),
                    if copy.borrowable { "empruntable" } else { "non empruntable" }
                );
            }
        }
        Command::Loans {
            direction,
            item,
            active,
        } => {
            let search = LoanSearch {
                item_name: item,
                active,
                ..LoanSearch::default()
            };
            for loan in client.loans().list(direction, &search).await? {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    loan.id,
                    loan.item_copy_id.map(|id| id.to_string()).unwrap_or_default(),
                    loan.item_name.as_deref().unwrap_or_default(),
                    loan.person_name.as_deref().unwrap_or_default(),
                    if loan.is_completed() { "terminé" } else { "en cours" }
                );
            }
        }
        Command::Persons { name } => {
            let search = PersonSearch {
                fullname: name,
                ..PersonSearch::default()
            };
            for person in client.persons().search(&search).await?.content {
                println!(
                    "{}\t{} {}\t{}",
                    person.id,
                    person.firstname.unwrap_or_default(),
                    person.surname.unwrap_or_default(),
                    person.contact.unwrap_or_default()
                );
            }
        }
        Command::Factures { item } => {
            let factures = match item {
                Some(query) => client.factures().search_by_item(&query).await?,
                None => client.factures().list().await?,
            };
            for facture in factures {
                println!(
                    "{}\t{}\t{} exemplaire(s)",
                    facture.id,
                    facture.filename.unwrap_or_default(),
                    facture.items.len()
                );
            }
        }
        Command::Suggestions => {
            for suggestion in client.suggestions().list().await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    suggestion.id,
                    suggestion.kind,
                    suggestion.name,
                    suggestion.description.unwrap_or_default()
                );
            }
        }
        Command::Suggest {
            name,
            kind,
            description,
        } => {
            let suggestion = client
                .suggestions()
                .create(&SuggestionDraft {
                    name,
                    kind,
                    description,
                })
                .await?;
            println!("{}", suggestion.id);
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry()?;

    let config = ClientConfig::load(cli.config.as_deref())?;
    tracing::debug!("Loaded {:?}", config);

    let result = run(&config, cli.command).await;

    opentelemetry::global::shutdown_tracer_provider();
    result
}
