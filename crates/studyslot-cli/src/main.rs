use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyslot", version, about = "Studyslot CLI: fit study sessions around your classes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with a student id to use that student's class timetable
    Login {
        /// Student id (e.g. 16725193)
        id: String,
    },
    /// Forget the logged-in student
    Logout,
    /// Pending task queue
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Generate and manage the committed schedule
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Export the committed schedule
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
    /// Class timetables
    Roster {
        #[command(subcommand)]
        action: commands::roster::RosterAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STUDYSLOT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Login { id } => commands::session::login(&id),
        Commands::Logout => commands::session::logout(),
        Commands::Task { action } => commands::task::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Export { action } => commands::export::run(action),
        Commands::Roster { action } => commands::roster::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
