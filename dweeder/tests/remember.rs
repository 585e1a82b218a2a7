use dweeder::User;
use pretty_assertions::assert_eq;

mod common;
use common::{create_user, digester, reject_user_updates, setup_db};

#[test_log::test]
fn remember_issues_verifiable_token() {
    let conn = setup_db();
    let mut user = create_user(&conn, "remembered");
    assert!(!user.is_remembered());

    let token = user.remember(&conn, &digester()).unwrap();
    assert_eq!(token.len(), 22);
    assert!(user.is_remembered());
    assert!(user.verify_remember_token(&token));
    assert!(!user.verify_remember_token(&format!("{token}x")));
    assert!(!user.verify_remember_token(""));

    let loaded = User::find(&conn, user.id.unwrap()).unwrap();
    assert!(loaded.verify_remember_token(&token));
}

#[test_log::test]
fn new_token_replaces_old() {
    let conn = setup_db();
    let mut user = create_user(&conn, "twice");
    let first = user.remember(&conn, &digester()).unwrap();
    let second = user.remember(&conn, &digester()).unwrap();
    assert_ne!(first, second);
    assert!(!user.verify_remember_token(&first));
    assert!(user.verify_remember_token(&second));
}

#[test_log::test]
fn forget_clears_token() {
    let conn = setup_db();
    let mut user = create_user(&conn, "forgotten");
    let token = user.remember(&conn, &digester()).unwrap();
    user.forget(&conn).unwrap();
    assert!(!user.verify_remember_token(&token));

    let loaded = User::find(&conn, user.id.unwrap()).unwrap();
    assert_eq!(loaded.remember_digest, None);
    assert!(!loaded.verify_remember_token(&token));
}

#[test_log::test]
fn user_without_digest_never_matches() {
    let conn = setup_db();
    let user = create_user(&conn, "fresh");
    assert!(!user.verify_remember_token(""));
    assert!(!user.verify_remember_token("anything"));
}

#[test_log::test]
fn failed_save_keeps_previous_token_state() {
    let conn = setup_db();
    let mut user = create_user(&conn, "stuck");
    let token = user.remember(&conn, &digester()).unwrap();
    let stored = user.remember_digest.clone();
    reject_user_updates(&conn);

    assert!(user.remember(&conn, &digester()).is_err());
    assert_eq!(user.remember_digest, stored);

    assert!(user.forget(&conn).is_err());
    assert!(user.is_remembered());
    assert!(user.verify_remember_token(&token));

    let loaded = User::find(&conn, user.id.unwrap()).unwrap();
    assert_eq!(loaded.remember_digest, stored);
}
