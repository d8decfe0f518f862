use super::*;
use crate::session::{Role, SessionUser};

#[test]
fn missing_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::at(dir.path().join("profile"));

    let cfg = store.read_config().unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.timeout_secs, 30);
    assert_eq!(cfg.array_encoding, ArrayEncoding::Repeated);
    assert_eq!(store.read_session().unwrap(), Session::anonymous());
}

#[test]
fn config_and_session_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::at(dir.path().join("nested").join("profile"));

    let mut cfg = ClientConfig::for_url("http://127.0.0.1:4000");
    cfg.array_encoding = ArrayEncoding::Json;
    store.write_config(&cfg).unwrap();
    assert_eq!(store.read_config().unwrap(), cfg);

    let session = Session {
        token: Some("t0k".to_string()),
        user: Some(SessionUser {
            id: "u1".to_string(),
            full_name: "Ravi".to_string(),
            role: Role::Recruiter,
        }),
    };
    store.write_session(&session).unwrap();
    assert_eq!(store.read_session().unwrap(), session);

    let leftovers: Vec<_> = std::fs::read_dir(store.root())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);

    store.clear_session().unwrap();
    assert_eq!(store.read_session().unwrap(), Session::anonymous());
    store.clear_session().unwrap();
}

#[test]
fn older_configs_get_default_timeout_and_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::at(dir.path());
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"version":1,"base_url":"http://a","media_base_url":"http://m"}"#,
    )
    .unwrap();

    let cfg = store.read_config().unwrap();
    assert_eq!(cfg.base_url, "http://a");
    assert_eq!(cfg.media_base_url, "http://m");
    assert_eq!(cfg.timeout_secs, 30);
    assert_eq!(cfg.array_encoding, ArrayEncoding::Repeated);
}

#[test]
fn unknown_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::at(dir.path());
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"version":7,"base_url":"http://a","media_base_url":"http://a"}"#,
    )
    .unwrap();

    let err = store.read_config().unwrap_err();
    assert!(err.to_string().contains("unsupported profile config version 7"));
}

#[test]
fn for_url_points_media_at_the_api() {
    let cfg = ClientConfig::for_url("http://localhost:5000/");
    assert_eq!(cfg.base_url, cfg.media_base_url);
    assert_eq!(cfg.version, 1);
}

#[test]
fn session_role_defaults_to_applicant() {
    assert_eq!(Session::anonymous().role(), Role::Applicant);
    assert_eq!(Session::with_token("").token(), None);
    assert_eq!("company".parse::<Role>().unwrap(), Role::Recruiter);
    assert!(Role::Admin.can_manage());
    assert!(!Role::Applicant.can_manage());
}
