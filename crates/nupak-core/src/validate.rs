use std::ops::RangeInclusive;
use thiserror::Error;

/// .NET SDK major versions with a published freedesktop extension.
pub const SUPPORTED_DOTNET: RangeInclusive<u32> = 8..=10;

/// Latest supported SDK major version, used when none is given.
pub const DEFAULT_DOTNET: u32 = 10;

/// Latest freedesktop runtime branch, used when none is given.
pub const DEFAULT_BRANCH: &str = "25.08";

/// Known freedesktop branches with the lowest SDK major each ships an
/// extension for. dotnet8 was never published for 25.08.
const BRANCH_TABLE: [(&str, u32); 2] = [("24.08", 8), ("25.08", 9)];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("unsupported dotnet version {0}, expected {min}-{max}", min = SUPPORTED_DOTNET.start(), max = SUPPORTED_DOTNET.end())]
    UnsupportedDotnet(u32),
    #[error("unknown freedesktop branch '{0}'")]
    UnknownBranch(String),
    #[error("dotnet {dotnet} is not available on branch {branch}")]
    Incompatible { dotnet: u32, branch: String },
}

/// Check a (dotnet major, branch) pair against the support table.
pub fn validate_target(dotnet_major: u32, branch: &str) -> Result<(), ValidateError> {
    if !SUPPORTED_DOTNET.contains(&dotnet_major) {
        return Err(ValidateError::UnsupportedDotnet(dotnet_major));
    }
    let min_dotnet = BRANCH_TABLE
        .iter()
        .find(|(b, _)| *b == branch)
        .map(|(_, min)| *min)
        .ok_or_else(|| ValidateError::UnknownBranch(branch.to_owned()))?;
    if dotnet_major < min_dotnet {
        return Err(ValidateError::Incompatible {
            dotnet: dotnet_major,
            branch: branch.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_version_works_on_24_08() {
        for dotnet in SUPPORTED_DOTNET {
            assert_eq!(validate_target(dotnet, "24.08"), Ok(()));
        }
    }

    #[test]
    fn dotnet_8_rejected_on_25_08() {
        assert_eq!(
            validate_target(8, "25.08"),
            Err(ValidateError::Incompatible {
                dotnet: 8,
                branch: "25.08".to_owned()
            })
        );
    }

    #[test]
    fn dotnet_9_and_10_accepted_on_25_08() {
        assert_eq!(validate_target(9, "25.08"), Ok(()));
        assert_eq!(validate_target(10, "25.08"), Ok(()));
    }

    #[test]
    fn out_of_range_versions_rejected() {
        assert_eq!(
            validate_target(7, "24.08"),
            Err(ValidateError::UnsupportedDotnet(7))
        );
        assert_eq!(
            validate_target(11, "24.08"),
            Err(ValidateError::UnsupportedDotnet(11))
        );
    }

    #[test]
    fn unknown_branch_rejected() {
        assert_eq!(
            validate_target(9, "23.08"),
            Err(ValidateError::UnknownBranch("23.08".to_owned()))
        );
    }

    #[test]
    fn defaults_are_a_valid_pair() {
        assert_eq!(validate_target(DEFAULT_DOTNET, DEFAULT_BRANCH), Ok(()));
    }
}
