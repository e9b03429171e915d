//! Readers for the host, user and file facts the server reports.
//!
//! Nothing here is cached: every call goes back to the OS so that a
//! response always reflects the state at request time.

use std::path::Path;
use nix::unistd::{self, User};
use crate::error::ProbeError;
use crate::models::UserIdentity;

pub fn hostname() -> Result<String, ProbeError> {

    let name = unistd::gethostname().map_err(ProbeError::Hostname)?;
    Ok(name.to_string_lossy().into_owned())

}

/// Looks up the passwd entry for the real uid of this process.
///
/// A uid with no passwd entry (common when a container runs as an arbitrary
/// numeric user) is reported as [`ProbeError::UnknownUser`].
pub async fn current_user() -> Result<UserIdentity, ProbeError> {

    // getpwuid_r may go through NSS (sssd, LDAP) and block
    tokio::task::spawn_blocking(lookup_current_user)
        .await
        .map_err(ProbeError::UserLookupTask)?

}

fn lookup_current_user() -> Result<UserIdentity, ProbeError> {

    let uid = unistd::getuid();

    let user = User::from_uid(uid)
        .map_err(ProbeError::User)?
        .ok_or(ProbeError::UnknownUser(uid.as_raw()))?;

    Ok(user.into())

}

pub async fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, ProbeError> {

    let path = path.as_ref();

    tokio::fs::read(path)
        .await
        .map_err(|source| ProbeError::File {
            path: path.to_path_buf(),
            source
        })

}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::ErrorKind;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {

        std::env::temp_dir().join(format!("container_probe_{}_{}", std::process::id(), name))

    }

    #[test]
    fn test_hostname_matches_kernel() {

        let host = hostname().expect("hostname lookup failed");
        assert!(!host.is_empty());

        // the kernel exposes the same value under /proc on linux
        if let Ok(kernel) = std::fs::read_to_string("/proc/sys/kernel/hostname") {
            assert_eq!(host, kernel.trim_end());
        }

    }

    #[tokio::test]
    async fn test_current_user_is_this_process() {

        match current_user().await {
            Ok(user) => {
                assert_eq!(user.uid, unistd::getuid().as_raw());
                assert!(!user.name.is_empty());
            }
            // no passwd entry for the test runner's uid
            Err(ProbeError::UnknownUser(uid)) => assert_eq!(uid, unistd::getuid().as_raw()),
            Err(e) => panic!("unexpected lookup failure: {e}")
        }

    }

    #[tokio::test]
    async fn test_read_file_returns_raw_bytes() {

        let path = scratch_path("raw");
        let content = b"line one\n\xffnot utf8";
        std::fs::write(&path, content).unwrap();

        let read = read_file(&path).await.expect("read failed");
        assert_eq!(read, content);

        std::fs::remove_file(&path).unwrap();

    }

    #[tokio::test]
    async fn test_read_file_missing() {

        let path = scratch_path("missing");

        match read_file(&path).await {
            Err(ProbeError::File { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected a file error, got {other:?}")
        }

    }

    #[tokio::test]
    async fn test_read_file_permission_denied() {

        // root reads through any mode bits
        if unistd::geteuid().is_root() {
            return;
        }

        let path = scratch_path("locked");
        std::fs::write(&path, "secret").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        let result = read_file(&path).await;
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(ProbeError::File { source, .. }) => {
                assert_eq!(source.kind(), ErrorKind::PermissionDenied);
            }
            other => panic!("expected permission denied, got {other:?}")
        }

    }

    #[tokio::test]
    async fn test_read_file_is_not_cached() {

        let path = scratch_path("fresh");

        std::fs::write(&path, "first").unwrap();
        assert_eq!(read_file(&path).await.unwrap(), b"first");

        std::fs::write(&path, "second").unwrap();
        assert_eq!(read_file(&path).await.unwrap(), b"second");

        std::fs::remove_file(&path).unwrap();

    }

}
