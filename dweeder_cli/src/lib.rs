//! Command implementations for the `dweeder` binary.
//!
//! Every command reads the configuration written by [`init`] from
//! `.dweeder/` in the current directory.
use std::path::{Path, PathBuf};

use butane::db::{self, Connection};
use butane::prelude::*;
use dweeder::{schema, Config, Digester, Password, Profile, User};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub fn init(backend: &str, connstr: &str, minimum_hash_cost: bool) -> Result<()> {
    if db::get_backend(backend).is_none() {
        anyhow::bail!("Unknown backend {backend}");
    };

    let spec = db::ConnectionSpec::new(backend, connstr);
    db::connect(&spec)?; // ensure we can
    let mut config = Config::new(spec);
    if minimum_hash_cost {
        config.hashing = Digester::minimum();
    }
    std::fs::create_dir_all(base_dir()?)?;
    config.save(base_dir()?)?;
    println!("Initialized {}", base_dir()?.display());
    Ok(())
}

pub fn migrate() -> Result<()> {
    let (_, mut conn) = open()?;
    let applied = schema::migrate(&mut conn)?;
    if applied == 0 {
        println!("Schema is up to date");
    } else {
        println!("Applied {applied} migrations");
    }
    Ok(())
}

pub fn signup(name: &str, email: &str, handle: &str, password: &str) -> Result<()> {
    let (config, conn) = open()?;
    let user = User::register(
        &conn,
        &config.digester()?,
        &Profile::new(name, email, handle),
        &Password::new(password, password),
    )?;
    println!("Registered @{} ({})", user.handle, user.id);
    Ok(())
}

pub fn login(email: &str, password: &str, remember: bool) -> Result<()> {
    let (config, conn) = open()?;
    let mut user = match User::find_by_email(&conn, email)? {
        Some(user) if user.authenticate(password) => user,
        _ => anyhow::bail!("Invalid email/password combination"),
    };
    println!("Logged in as @{}", user.handle);
    if remember {
        let token = user.remember(&conn, &config.digester()?)?;
        println!("{token}");
    }
    Ok(())
}

pub fn check_token(handle: &str, token: &str) -> Result<()> {
    let (_, conn) = open()?;
    let user = find_user(&conn, handle)?;
    if !user.verify_remember_token(token) {
        anyhow::bail!("Token is not valid for @{}", user.handle);
    }
    println!("Token is valid for @{}", user.handle);
    Ok(())
}

pub fn logout(handle: &str) -> Result<()> {
    let (_, conn) = open()?;
    let mut user = find_user(&conn, handle)?;
    user.forget(&conn)?;
    println!("Logged out @{}", user.handle);
    Ok(())
}

pub fn follow(handle: &str, target: &str) -> Result<()> {
    let (_, conn) = open()?;
    let user = find_user(&conn, handle)?;
    let target = find_user(&conn, target)?;
    user.follow(&conn, &target)?;
    println!("@{} follows @{}", user.handle, target.handle);
    Ok(())
}

pub fn unfollow(handle: &str, target: &str) -> Result<()> {
    let (_, conn) = open()?;
    let user = find_user(&conn, handle)?;
    let target = find_user(&conn, target)?;
    user.unfollow(&conn, &target)?;
    println!("@{} no longer follows @{}", user.handle, target.handle);
    Ok(())
}

pub fn post(handle: &str, body: &str) -> Result<()> {
    let (_, conn) = open()?;
    let user = find_user(&conn, handle)?;
    let dweed = user.post(&conn, body)?;
    println!("Posted dweed {}", dweed.id);
    Ok(())
}

pub fn feed(handle: &str, page: u32, per_page: u32) -> Result<()> {
    let (_, conn) = open()?;
    let user = find_user(&conn, handle)?;
    for dweed in user.feed_page(&conn, page, per_page)? {
        let author = dweed.author.load(&conn)?;
        println!(
            "{} @{}: {}",
            dweed.created_at.format("%Y-%m-%d %H:%M"),
            author.handle,
            dweed.body
        );
    }
    Ok(())
}

pub fn following(handle: &str) -> Result<()> {
    let (_, conn) = open()?;
    let user = find_user(&conn, handle)?;
    list_users(user.following(&conn)?);
    Ok(())
}

pub fn followers(handle: &str) -> Result<()> {
    let (_, conn) = open()?;
    let user = find_user(&conn, handle)?;
    list_users(user.followers(&conn)?);
    Ok(())
}

pub fn delete(handle: &str) -> Result<()> {
    let (_, mut conn) = open()?;
    let user = find_user(&conn, handle)?;
    let handle = user.handle.clone();
    user.destroy(&mut conn)?;
    println!("Deleted @{handle}");
    Ok(())
}

fn list_users(users: Vec<User>) {
    for user in users {
        println!("@{} {}", user.handle, user.name);
    }
}

fn find_user(conn: &Connection, handle: &str) -> Result<User> {
    let handle = handle.trim_start_matches('@');
    User::find_by_handle(conn, handle)?.ok_or_else(|| anyhow::anyhow!("No user @{handle}"))
}

fn open() -> Result<(Config, Connection)> {
    let config = load_config()?;
    let conn = config.connect()?;
    Ok((config, conn))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&base_dir()?)
}

fn load_config_from(dir: &Path) -> Result<Config> {
    match Config::load(dir) {
        Ok(config) => Ok(config),
        Err(dweeder::Error::IO(_)) => {
            anyhow::bail!("No dweeder configuration found. Did you run dweeder init?")
        }
        Err(e) => Err(e.into()),
    }
}

pub fn base_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|d| d.join(".dweeder"))
        .map_err(|e| e.into())
}

pub fn handle_error(r: Result<()>) {
    if let Err(e) = r {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No dweeder configuration found. Did you run dweeder init?"
        );
    }

    #[test]
    fn saved_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(db::ConnectionSpec::new("sqlite", "db.sqlite"));
        config.save(dir.path()).unwrap();
        assert_eq!(load_config_from(dir.path()).unwrap(), config);
    }
}
