use super::*;

pub(super) fn with_client<F>(profile: &ProfileStore, f: F) -> Result<()>
where
    F: FnOnce(&RemoteClient) -> Result<()>,
{
    let client = connect(profile)?;
    f(&client)
}

/// Like [`with_client`] for calls that act as the signed-in user.
pub(super) fn with_session<F>(profile: &ProfileStore, f: F) -> Result<()>
where
    F: FnOnce(&RemoteClient) -> Result<()>,
{
    let client = connect_authenticated(profile)?;
    f(&client)
}
