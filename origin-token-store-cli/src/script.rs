use origin_token_store::{ClientToken, LruTokenStore};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command \"{command}\"")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: missing {what}")]
    MissingArgument { line: usize, what: &'static str },
    #[error("line {line}: unexpected argument \"{arg}\"")]
    UnexpectedArgument { line: usize, arg: String },
    #[error("line {line}: invalid base64 token \"{token}\"")]
    InvalidToken { line: usize, token: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { origin: String, token: ClientToken },
    Pop { origin: String },
    Take { origin: String },
    Used { origin: String },
    Get { origin: String },
    Size { origin: String },
    Count { origin: String },
    Describe,
}

/// Parse a whole script, one command per line.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// ```
/// # use origin_token_store_cli::script::{parse, Command};
/// let commands = parse("# warm up\npop example.com\n")?;
///
/// assert_eq!(
///     vec![Command::Pop { origin: "example.com".into() }],
///     commands
/// );
/// # Ok::<(), origin_token_store_cli::script::ScriptError>(())
/// ```
pub fn parse(script: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();

    for (idx, raw) in script.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut words = text.split_whitespace();
        // text is not empty, there is at least one word
        let name = words.next().unwrap_or_default();

        let command = match name {
            "describe" => Command::Describe,
            "put" => {
                let origin = next_word(&mut words, line, "origin")?;
                let encoded = next_word(&mut words, line, "token")?;
                let token = base64::decode(&encoded).map_err(|_| ScriptError::InvalidToken {
                    line,
                    token: encoded.clone(),
                })?;
                Command::Put {
                    origin,
                    token: ClientToken::from(token),
                }
            }
            "pop" => Command::Pop {
                origin: next_word(&mut words, line, "origin")?,
            },
            "take" => Command::Take {
                origin: next_word(&mut words, line, "origin")?,
            },
            "used" => Command::Used {
                origin: next_word(&mut words, line, "origin")?,
            },
            "get" => Command::Get {
                origin: next_word(&mut words, line, "origin")?,
            },
            "size" => Command::Size {
                origin: next_word(&mut words, line, "origin")?,
            },
            "count" => Command::Count {
                origin: next_word(&mut words, line, "origin")?,
            },
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: name.to_owned(),
                })
            }
        };

        if let Some(arg) = words.next() {
            return Err(ScriptError::UnexpectedArgument {
                line,
                arg: arg.to_owned(),
            });
        }

        commands.push(command);
    }

    Ok(commands)
}

fn next_word<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    line: usize,
    what: &'static str,
) -> Result<String, ScriptError> {
    words
        .next()
        .map(str::to_owned)
        .ok_or(ScriptError::MissingArgument { line, what })
}

/// Run a single command, returning what should be printed for it.
pub fn execute(store: &LruTokenStore, command: &Command) -> String {
    match command {
        Command::Put { origin, token } => {
            store.put(origin, token.clone());
            String::from("ok")
        }
        Command::Pop { origin } => render_token(store.pop(origin)),
        Command::Take { origin } => render_token(store.take(origin)),
        Command::Used { origin } => store.has_been_used(origin).to_string(),
        Command::Get { origin } => store.get_token(origin),
        Command::Size { origin } => store.size(origin).to_string(),
        Command::Count { origin } => store.count(origin).to_string(),
        Command::Describe => store.describe().trim_end_matches('\n').to_owned(),
    }
}

fn render_token(token: Option<ClientToken>) -> String {
    token
        .map(|t| t.to_base64())
        .unwrap_or_else(|| String::from("<none>"))
}
