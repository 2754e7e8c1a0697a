use super::{expand_tilde, EXIT_FAILURE, EXIT_SUCCESS, EXIT_VALIDATION_ERROR};
use nupak_core::{generate_sources, validate_target, GenerateRequest};
use nupak_remote::RegistryClient;
use nupak_runtime::HostRunner;
use nupak_schema::write_sources_file;
use std::path::PathBuf;

pub struct GenerateArgs {
    pub input: PathBuf,
    pub dotnet: u32,
    pub branch: String,
    pub output: Option<String>,
    pub dest_dir: String,
    pub self_contained: bool,
    pub user: bool,
    pub temp_dir: Option<String>,
    pub add_packages: Vec<String>,
}

pub fn run(args: GenerateArgs) -> Result<u8, String> {
    if let Err(e) = validate_target(args.dotnet, &args.branch) {
        eprintln!("[Error] {e}");
        return Ok(EXIT_VALIDATION_ERROR);
    }

    let scratch_parent = match args.temp_dir.as_deref() {
        Some(dir) => expand_tilde(dir),
        None => std::env::current_dir().map_err(|e| format!("cannot resolve working directory: {e}"))?,
    };

    let request = GenerateRequest {
        project: expand_tilde(&args.input.to_string_lossy()),
        dotnet_major: args.dotnet,
        branch: args.branch,
        scratch_parent,
        self_contained: args.self_contained,
        user_mode: args.user,
        extra_packages: args.add_packages,
        dest_dir: args.dest_dir,
        output: args.output,
    };

    let runner = HostRunner::new();
    let client = RegistryClient::new();
    let entries = match generate_sources(&runner, &client, &request) {
        Ok(entries) => entries,
        Err(err) => {
            // The pipeline already printed its status line at the failure site
            tracing::debug!("generate failed: {err}");
            return Ok(EXIT_FAILURE);
        }
    };

    let written =
        write_sources_file(&entries, request.output.as_deref()).map_err(|e| e.to_string())?;
    println!("[Info] Sources file written to {}", written.display());
    Ok(EXIT_SUCCESS)
}
