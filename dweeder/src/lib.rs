//! Accounts, follow graph and news feed for the dweeder microblog.
//!
//! Everything is persisted through [butane]. A typical flow:
//!
//! ```no_run
//! use dweeder::{schema, Config, Password, Profile, User};
//!
//! # fn main() -> dweeder::Result<()> {
//! let config = Config::load(".dweeder")?;
//! let mut conn = config.connect()?;
//! schema::migrate(&mut conn)?;
//! let digester = config.digester()?;
//!
//! let alice = User::register(
//!     &conn,
//!     &digester,
//!     &Profile::new("Alice", "alice@example.com", "alice"),
//!     &Password::new("sekrit!", "sekrit!"),
//! )?;
//! alice.post(&conn, "hello")?;
//! for dweed in alice.feed(&conn)? {
//!     println!("{}", dweed.body);
//! }
//! # Ok(())
//! # }
//! ```

pub mod butane_migrations;
pub mod config;
pub mod digest;
mod error;
pub mod feed;
pub mod graph;
pub mod models;
pub mod schema;
pub mod session;
pub mod token;
pub mod user;
pub mod validation;

pub use config::Config;
pub use digest::Digester;
pub use error::{Error, Result};
pub use models::{Dweed, Relationship, User};
pub use session::{RememberCookie, Session};
pub use validation::{Password, Profile, ValidationErrors};
