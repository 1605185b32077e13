use std::fs::OpenOptions;
use std::io::IsTerminal;

use anyhow::Result;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Password};
use log::LevelFilter;
use wags_term::application::console::ConsoleRenderer;
use wags_term::domain::models::SystemClock;
use wags_term::{
    start_loop, ApiClient, Config, ConfigKey, FileCredentialStore, SessionState, ViewController,
    ViewControllerProps,
};

#[derive(Parser, Debug)]
#[clap(name = "wags", author, version = "0.1.0", about = "Terminal console for the WAGS message queue")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(
        id = "server-url",
        long = "server-url",
        env = "WAGS_SERVER_URL",
        global = true,
        help = "Base URL of the WAGS server. [default: http://localhost:8080]"
    )]
    server_url: Option<String>,

    #[clap(
        id = "config-file",
        long = "config-file",
        env = "WAGS_CONFIG_FILE",
        global = true,
        help = "Path to the config file."
    )]
    config_file: Option<String>,

    #[clap(
        id = "credentials-file",
        long = "credentials-file",
        env = "WAGS_CREDENTIALS_FILE",
        global = true,
        help = "Where the login credential is cached."
    )]
    credentials_file: Option<String>,

    #[clap(long, short, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Start the interactive console (default command)
    Console,
    /// Log in and cache the credential without starting the console
    Login {
        #[clap(long, short, help = "Username to log in with, prompted for when missing")]
        username: Option<String>,
    },
    /// Forget the cached credential
    Logout,
    /// Print the default config.toml
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Cli::command();
    let matches = cmd.clone().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    let command = cli.command.clone().unwrap_or(Commands::Console);

    // The console owns the terminal, so its logs go to a file.
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    match command {
        Commands::Console => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open("wags.log")?;

            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        _ => {
            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .init();
        }
    }

    Config::load(arg_matches(&matches)).await?;

    match command {
        Commands::Console => run_console().await,
        Commands::Login { username } => run_login(username).await,
        Commands::Logout => run_logout(),
        Commands::Config => {
            println!("{}", Config::serialize_default(cmd));
            Ok(())
        }
    }
}

fn arg_matches(matches: &ArgMatches) -> Vec<&ArgMatches> {
    let mut res = vec![matches];
    if let Some((_, sub_matches)) = matches.subcommand() {
        res.push(sub_matches);
    }

    return res;
}

fn credential_store() -> FileCredentialStore {
    FileCredentialStore::new(Config::get(ConfigKey::CredentialsFile))
}

async fn run_console() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let server_url = Config::get(ConfigKey::ServerURL);
    log::info!("starting console against {server_url}");

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let mut controller = ViewController::new(ViewControllerProps {
        api_client: ApiClient::new(&server_url),
        credential_store: Box::new(credential_store()),
        renderer: Box::new(ConsoleRenderer::new(stdout, color)),
        clock: Box::new(SystemClock),
    });

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    start_loop(&mut controller, input).await?;
    println!();

    Ok(())
}

async fn run_login(username: Option<String>) -> Result<()> {
    let theme = ColorfulTheme::default();
    let username = match username {
        Some(username) => username,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };
    let key = Password::with_theme(&theme)
        .with_prompt("API key")
        .interact()?;

    let api = ApiClient::new(&Config::get(ConfigKey::ServerURL));
    let credential = api.login(&username, &key).await?;

    let store = credential_store();
    let path = store.path().display().to_string();
    let mut session = SessionState::new(Box::new(store));
    session.begin_session(credential);

    println!("Logged in as {username}. Credential cached in {path}");
    Ok(())
}

fn run_logout() -> Result<()> {
    let mut session = SessionState::new(Box::new(credential_store()));
    let was_authenticated = session.restore();
    session.end_session();

    if was_authenticated {
        println!("Logged out.");
    } else {
        println!("No cached credential.");
    }

    Ok(())
}
