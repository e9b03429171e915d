use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failed read of host, user or file state.
///
/// The display text is what ends up in the response body, so every variant
/// reads as a complete sentence fragment naming what could not be read.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("unable to get hostname: {0}")]
    Hostname(#[source] nix::Error),

    #[error("unable to get user: {0}")]
    User(#[source] nix::Error),

    #[error("unable to get user: {0}")]
    UserLookupTask(#[source] tokio::task::JoinError),

    #[error("unable to get user: unknown userid {0}")]
    UnknownUser(u32),

    #[error("unable to open {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
