use empedia::session::{Role, Session, SessionUser};

use super::*;

pub(super) fn handle_config_command(profile: &ProfileStore, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let (cfg, _) = profile.effective()?;
            if json {
                print_json(&cfg, "config")?;
            } else {
                println!("profile: {}", profile.root().display());
                println!("url: {}", cfg.base_url);
                println!("media: {}", cfg.media_base_url);
                println!("timeout: {}s", cfg.timeout_secs);
                println!("arrays: {}", cfg.array_encoding.as_str());
            }
        }
        ConfigCommands::Set {
            url,
            media_url,
            timeout_secs,
            array_encoding,
        } => {
            let mut cfg = profile.read_config()?;
            if let Some(url) = url {
                if media_url.is_none() {
                    cfg.media_base_url = url.clone();
                }
                cfg.base_url = url;
            }
            if let Some(media) = media_url {
                cfg.media_base_url = media;
            }
            if let Some(secs) = timeout_secs {
                cfg.timeout_secs = secs;
            }
            if let Some(arrays) = array_encoding {
                cfg.array_encoding = arrays;
            }
            profile.write_config(&cfg)?;
            println!("Config updated");
        }
    }
    Ok(())
}

pub(super) fn handle_login_command(
    profile: &ProfileStore,
    token: String,
    user_id: Option<String>,
    name: Option<String>,
    role: Role,
) -> Result<()> {
    let mut session = Session::with_token(token);
    session.user = user_id.map(|id| SessionUser {
        id,
        full_name: name.unwrap_or_default(),
        role,
    });
    profile.write_session(&session)?;
    println!("Logged in");
    Ok(())
}

pub(super) fn handle_logout_command(profile: &ProfileStore) -> Result<()> {
    profile.clear_session()?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(profile: &ProfileStore, json: bool) -> Result<()> {
    let (_, session) = profile.effective()?;
    if json {
        let user = session.user.as_ref();
        print_json(
            &serde_json::json!({
                "logged_in": session.token().is_some(),
                "user_id": user.map(|u| u.id.as_str()),
                "full_name": user.map(|u| u.full_name.as_str()),
                "role": session.role().as_str(),
            }),
            "whoami",
        )?;
        return Ok(());
    }
    if session.token().is_none() {
        println!("Not logged in");
        return Ok(());
    }
    match &session.user {
        Some(user) => {
            println!("user: {} ({})", user.full_name, user.id);
            println!("role: {}", user.role);
        }
        None => println!("token only (no user details stored)"),
    }
    Ok(())
}
