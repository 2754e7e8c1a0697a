mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::EXIT_FAILURE;
use nupak_core::{DEFAULT_BRANCH, DEFAULT_DOTNET};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "nupak",
    version,
    about = "Generate flatpak-builder NuGet source manifests for offline .NET builds"
)]
struct Cli {
    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that the SDK and dotnet extension images are installed.
    Check {
        /// .NET SDK major version to check for.
        #[arg(long, default_value_t = DEFAULT_DOTNET)]
        dotnet: u32,
        /// Freedesktop runtime branch.
        #[arg(long, default_value = DEFAULT_BRANCH)]
        branch: String,
        /// Scope flatpak to the per-user installation.
        #[arg(short, long, default_value_t = false)]
        user: bool,
    },
    /// Generate the NuGet sources manifest for a project.
    Generate {
        /// CSPROJ file to generate sources for.
        input: PathBuf,
        /// .NET SDK major version to restore with.
        #[arg(long, default_value_t = DEFAULT_DOTNET)]
        dotnet: u32,
        /// Freedesktop runtime branch.
        #[arg(long, default_value = DEFAULT_BRANCH)]
        branch: String,
        /// Output file name.
        #[arg(short, long)]
        output: Option<String>,
        /// Destination directory where flatpak will save sources to.
        #[arg(short, long, default_value = nupak_schema::DEFAULT_DEST)]
        dest_dir: String,
        /// Add the runtime packages required to build self-contained apps.
        #[arg(long, default_value_t = false)]
        self_contained: bool,
        /// Scope flatpak to the per-user installation.
        #[arg(short, long, default_value_t = false)]
        user: bool,
        /// Directory to restore packages under (removed afterwards).
        #[arg(short, long)]
        temp_dir: Option<String>,
        /// Additional packages, resolved at their latest versions.
        #[arg(short = 'a', long, num_args = 1..)]
        add_packages: Vec<String>,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("NUPAK_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    if !nupak_runtime::host_supported() {
        eprintln!("error: flatpak packaging is only supported on Linux hosts");
        return ExitCode::from(EXIT_FAILURE);
    }

    let needs_flatpak = matches!(cli.command, Commands::Generate { .. });
    if needs_flatpak && std::env::var("NUPAK_SKIP_PREREQS").as_deref() != Ok("1") {
        let missing = nupak_runtime::check_prereqs(&nupak_runtime::HostRunner::new());
        if !missing.is_empty() {
            eprintln!("error: {}", nupak_runtime::format_missing(&missing));
            return ExitCode::from(EXIT_FAILURE);
        }
    }

    let result = match cli.command {
        Commands::Check {
            dotnet,
            branch,
            user,
        } => commands::check::run(dotnet, &branch, user),
        Commands::Generate {
            input,
            dotnet,
            branch,
            output,
            dest_dir,
            self_contained,
            user,
            temp_dir,
            add_packages,
        } => commands::generate::run(commands::generate::GenerateArgs {
            input,
            dotnet,
            branch,
            output,
            dest_dir,
            self_contained,
            user,
            temp_dir,
            add_packages,
        }),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
