use super::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_VALIDATION_ERROR};
use nupak_core::validate_target;
use nupak_runtime::{check_runtime, HostRunner, RuntimeRef};

/// Report whether the SDK and dotnet extension images for the target are
/// installed. One found/missing line is printed per image; a missing
/// image makes the exit code 1 so scripts can gate on it.
pub fn run(dotnet: u32, branch: &str, user: bool) -> Result<u8, String> {
    if let Err(e) = validate_target(dotnet, branch) {
        eprintln!("[Error] {e}");
        return Ok(EXIT_VALIDATION_ERROR);
    }

    let runner = HostRunner::new();
    let sdk = check_runtime(&runner, &RuntimeRef::sdk(branch), user);
    let extension = check_runtime(&runner, &RuntimeRef::dotnet_extension(dotnet, branch), user);

    Ok(if sdk && extension {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}
