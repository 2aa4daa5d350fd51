use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::KeyEventKind;

use tasktop::app::App;
use tasktop::config::{self, GeneralConfig, load_config, load_config_from_path};
use tasktop::event::{Event, EventHandler};
use tasktop::export::export_processes;
use tasktop::system::collector::{Collector, MetricsProvider};
use tasktop::system::process::{SortColumn, sort_records};
use tasktop::ui;

#[derive(Parser)]
#[command(
    name = "tasktop",
    about = "Terminal task manager with rolling CPU/RAM/GPU charts"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Number of samples kept for the history charts
    #[arg(long)]
    history_length: Option<usize>,

    /// Write the process table to this CSV file and exit without starting the UI.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Append logs to this file (the UI owns the terminal, so nothing is logged otherwise).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    init_logging(&config.general)?;

    if let Some(path) = &cli.export {
        return run_export(&config.general, path);
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms.max(100));
    tracing::info!(
        refresh_ms = tick_rate.as_millis() as u64,
        history = config.general.history_length,
        "starting"
    );
    let mut app = App::new(config);
    let mut events = EventHandler::new(tick_rate);

    terminal.draw(|frame| ui::draw(frame, &mut app))?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        let should_draw = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = app.map_key(key);
                app.dispatch(action);
                true
            }
            Event::Key(_) => false,
            Event::Tick => {
                app.refresh_data();
                true
            }
            Event::Resize => true,
        };
        if should_draw {
            terminal.draw(|frame| ui::draw(frame, &mut app))?;
        }
    }

    tracing::info!("exiting");
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(length) = cli.history_length {
        config.general.history_length = length;
    }
    if let Some(ref path) = cli.log_file {
        config.general.log_file = Some(path.clone());
    }

    config
}

fn init_logging(general: &GeneralConfig) -> Result<()> {
    let Some(path) = &general.log_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(path)?;
    let level = general
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(Mutex::new(file));
    let installed = if general.log_format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}

fn run_export(general: &GeneralConfig, path: &Path) -> Result<()> {
    let mut collector = Collector::new();
    let mut records = collector.list_processes();
    let column = SortColumn::from_label(&general.default_sort).unwrap_or_default();
    sort_records(&mut records, column, general.sort_descending);

    export_processes(&records, path)?;
    println!("Exported {} processes to {}", records.len(), path.display());
    Ok(())
}
