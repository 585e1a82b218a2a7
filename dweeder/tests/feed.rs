use butane::prelude::*;
use dweeder::validation::DWEED_MAX_CHARS;
use dweeder::{Dweed, Error, User};
use pretty_assertions::assert_eq;

mod common;
use common::{create_user, setup_db};

fn bodies(dweeds: Vec<Dweed>) -> Vec<String> {
    dweeds.into_iter().map(|d| d.body).collect()
}

#[test_log::test]
fn post_saves_dweed() {
    let conn = setup_db();
    let user = create_user(&conn, "poster");
    let dweed = user.post(&conn, "Lorem ipsum").unwrap();
    assert!(dweed.id.is_some());
    assert_eq!(bodies(user.dweeds(&conn).unwrap()), vec!["Lorem ipsum"]);
}

#[test_log::test]
fn invalid_dweed_is_rejected() {
    let conn = setup_db();
    let user = create_user(&conn, "poster");
    let err = user.post(&conn, "   ").unwrap_err();
    assert!(err.validation().unwrap().has("body"));
    let err = user.post(&conn, &"a".repeat(DWEED_MAX_CHARS + 1)).unwrap_err();
    assert!(err.validation().unwrap().has("body"));
    user.post(&conn, &"a".repeat(DWEED_MAX_CHARS)).unwrap();
    assert_eq!(Dweed::query().load(&conn).unwrap().len(), 1);

    assert!(matches!(
        User::default().post(&conn, "orphan"),
        Err(Error::NotSaved)
    ));
}

#[test_log::test]
fn feed_has_own_and_followed_dweeds_only() {
    let conn = setup_db();
    let michael = create_user(&conn, "michael");
    let archer = create_user(&conn, "archer");
    let lana = create_user(&conn, "lana");

    michael.follow(&conn, &lana).unwrap();
    for i in 0..3 {
        michael.post(&conn, &format!("michael {i}")).unwrap();
        archer.post(&conn, &format!("archer {i}")).unwrap();
        lana.post(&conn, &format!("lana {i}")).unwrap();
    }

    let feed = bodies(michael.feed(&conn).unwrap());
    assert_eq!(feed.len(), 6);
    for body in &feed {
        assert!(
            body.starts_with("michael") || body.starts_with("lana"),
            "unexpected {body} in feed"
        );
    }

    // Nobody follows archer and archer follows nobody.
    assert_eq!(
        bodies(archer.feed(&conn).unwrap()),
        vec!["archer 2", "archer 1", "archer 0"]
    );
}

#[test_log::test]
fn feed_is_newest_first() {
    let conn = setup_db();
    let reader = create_user(&conn, "reader");
    let writer = create_user(&conn, "writer");
    reader.follow(&conn, &writer).unwrap();

    reader.post(&conn, "first").unwrap();
    writer.post(&conn, "second").unwrap();
    reader.post(&conn, "third").unwrap();
    writer.post(&conn, "fourth").unwrap();

    assert_eq!(
        bodies(reader.feed(&conn).unwrap()),
        vec!["fourth", "third", "second", "first"]
    );
}

#[test_log::test]
fn unfollowed_dweeds_leave_the_feed() {
    let conn = setup_db();
    let reader = create_user(&conn, "reader");
    let writer = create_user(&conn, "writer");
    reader.follow(&conn, &writer).unwrap();
    writer.post(&conn, "hello").unwrap();
    assert_eq!(reader.feed(&conn).unwrap().len(), 1);

    reader.unfollow(&conn, &writer).unwrap();
    assert!(reader.feed(&conn).unwrap().is_empty());
}

#[test_log::test]
fn feed_pages() {
    let conn = setup_db();
    let user = create_user(&conn, "pager");
    for i in 0..5 {
        user.post(&conn, &format!("dweed {i}")).unwrap();
    }

    assert_eq!(
        bodies(user.feed_page(&conn, 1, 2).unwrap()),
        vec!["dweed 4", "dweed 3"]
    );
    assert_eq!(
        bodies(user.feed_page(&conn, 3, 2).unwrap()),
        vec!["dweed 0"]
    );
    assert!(user.feed_page(&conn, 4, 2).unwrap().is_empty());
    // Page 0 is treated as the first page.
    assert_eq!(
        bodies(user.feed_page(&conn, 0, 2).unwrap()),
        bodies(user.feed_page(&conn, 1, 2).unwrap())
    );
}
