use anyhow::{Context, Result};
use log::debug;
use origin_token_store::LruTokenStore;
use origin_token_store_cli::config;
use origin_token_store_cli::script::{execute, parse};
use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "origin-token-store-cli",
    about = "Replay a script of operations against an origin token store"
)]
struct Opt {
    /// switch on verbosity
    #[structopt(short)]
    verbose: bool,
    /// Read store settings from <config> (created with defaults if missing)
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
    /// How many origins the store remembers
    #[structopt(short = "m", long = "max-origins")]
    max_origins: Option<usize>,
    /// How many tokens are kept per origin
    #[structopt(short = "n", long = "tokens-per-origin")]
    tokens_per_origin: Option<usize>,
    /// Read the script from <file> instead of stdin
    #[structopt(short = "i", long = "input", name = "file", parse(from_os_str))]
    input_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    let default_filter = if opt.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let conf = config::resolve(
        opt.config.as_deref(),
        opt.max_origins,
        opt.tokens_per_origin,
    )?;
    let store = LruTokenStore::from_config(&conf)?;

    let mut script = String::new();
    match opt.input_file {
        Some(ref path) if path != &PathBuf::from("-") => {
            File::open(path)
                .with_context(|| format!("trying to read file {:?}", path))?
                .read_to_string(&mut script)?;
        }
        _ => {
            io::stdin()
                .read_to_string(&mut script)
                .with_context(|| "Couldn't read from STDIN")?;
        }
    }

    let commands = parse(&script)?;
    debug!("replaying {} commands", commands.len());

    for command in commands.iter() {
        println!("{}", execute(&store, command));
    }

    Ok(())
}
