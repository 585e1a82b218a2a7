use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use dweeder_cli::{
    check_token, delete, feed, follow, followers, following, handle_error, init, login, logout,
    migrate, post, signup, unfollow,
};

#[derive(Parser)]
#[command(
    name = "dweeder",
    version,
    about = "Manage dweeder accounts, follows and dweeds"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the database configuration to .dweeder/ and check that it connects.
    Init {
        /// Database backend to use. 'sqlite' or 'pg'.
        backend: String,
        /// Database connection string. Format depends on backend.
        connection: String,
        /// Hash passwords and remember tokens as cheaply as possible.
        /// Only suitable for testing.
        #[arg(long)]
        minimum_hash_cost: bool,
    },
    /// Create the tables if they do not exist yet.
    Migrate,
    /// Register a new user.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        handle: String,
        #[arg(long)]
        password: String,
    },
    /// Check a user's password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Issue a remember token and print it.
        #[arg(long)]
        remember: bool,
    },
    /// Check a remember token.
    CheckToken { handle: String, token: String },
    /// Invalidate a user's remember token.
    Logout { handle: String },
    /// Follow another user.
    Follow { handle: String, target: String },
    /// Stop following another user.
    Unfollow { handle: String, target: String },
    /// Publish a dweed.
    Post { handle: String, body: String },
    /// Show a user's feed, newest first.
    Feed {
        handle: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 30)]
        per_page: u32,
    },
    /// List the users a user follows.
    Following { handle: String },
    /// List a user's followers.
    Followers { handle: String },
    /// Delete a user with all their dweeds and relationships.
    Delete { handle: String },
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match &cli.command {
        Commands::Init {
            backend,
            connection,
            minimum_hash_cost,
        } => handle_error(init(backend, connection, *minimum_hash_cost)),
        Commands::Migrate => handle_error(migrate()),
        Commands::Signup {
            name,
            email,
            handle,
            password,
        } => handle_error(signup(name, email, handle, password)),
        Commands::Login {
            email,
            password,
            remember,
        } => handle_error(login(email, password, *remember)),
        Commands::CheckToken { handle, token } => handle_error(check_token(handle, token)),
        Commands::Logout { handle } => handle_error(logout(handle)),
        Commands::Follow { handle, target } => handle_error(follow(handle, target)),
        Commands::Unfollow { handle, target } => handle_error(unfollow(handle, target)),
        Commands::Post { handle, body } => handle_error(post(handle, body)),
        Commands::Feed {
            handle,
            page,
            per_page,
        } => handle_error(feed(handle, *page, *per_page)),
        Commands::Following { handle } => handle_error(following(handle)),
        Commands::Followers { handle } => handle_error(followers(handle)),
        Commands::Delete { handle } => handle_error(delete(handle)),
    }
}
