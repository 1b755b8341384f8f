use clap::Parser;
use graphlite::session::Session;
use graphlite::shell::{self, EditorSource, ReaderSource, INTERRUPT_HINT};
use graphlite::{GraphRepository, GraphService};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::thread;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// A lightweight, in-process graph store
#[derive(Parser, Debug)]
#[command(name = "graphlite")]
#[command(about = "A lightweight named-graph store with an interactive shell", long_about = None)]
struct Args {
    /// Path to the JSON file holding every graph
    #[arg(short, long, env = "SAVE_FILE_PATH", default_value = "graphs.json")]
    store: PathBuf,

    /// Start empty instead of loading the store file
    #[arg(long)]
    no_load: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting GraphLite v{}", env!("CARGO_PKG_VERSION"));
    info!("Store file: {:?}", args.store);

    let repository = if args.no_load {
        GraphRepository::new(&args.store)
    } else {
        GraphRepository::open(&args.store)
    };
    info!("{} graph(s) loaded", repository.len());

    let mut session = Session::new(GraphService::new(repository));
    watch_interrupts()?;

    let mut stdout = io::stdout();
    let outcome = match editor() {
        Some(mut editor) => shell::run(&mut session, &mut editor, &mut stdout),
        None => shell::run(&mut session, &mut ReaderSource::new(io::stdin().lock()), &mut stdout),
    };
    if let Err(e) = &outcome {
        error!("Input loop stopped: {}", e);
    }

    let saved = shell::shutdown(session, &mut stdout);
    outcome?;
    saved?;
    Ok(())
}

/// Line editor for an interactive terminal. Piped input is read plainly.
fn editor() -> Option<EditorSource> {
    if !io::stdin().is_terminal() {
        return None;
    }
    match EditorSource::new() {
        Ok(editor) => Some(editor),
        Err(e) => {
            error!("Failed to initialize line editor: {}", e);
            None
        }
    }
}

/// Keep SIGINT from killing the process while a command runs or piped input
/// is read. At a terminal prompt the editor reports Ctrl-C itself.
fn watch_interrupts() -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    thread::Builder::new()
        .name("interrupts".to_string())
        .spawn(move || {
            runtime.block_on(async {
                while tokio::signal::ctrl_c().await.is_ok() {
                    info!("Interrupt received");
                    println!();
                    println!("{INTERRUPT_HINT}");
                }
            })
        })?;
    Ok(())
}
