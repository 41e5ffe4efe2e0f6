use origin_token_store::StoreConfig;
use std::path::Path;

/// Build the store configuration for a run.
///
/// Values read from `config_path` (created with defaults when missing) are
/// overridden by the ones given on the command line.
pub fn resolve(
    config_path: Option<&Path>,
    max_origins: Option<usize>,
    tokens_per_origin: Option<usize>,
) -> Result<StoreConfig, confy::ConfyError> {
    let mut conf: StoreConfig = match config_path {
        Some(path) => confy::load_path(path)?,
        None => StoreConfig::default(),
    };

    if let Some(x) = max_origins {
        conf.max_origins = x;
    }
    if let Some(x) = tokens_per_origin {
        conf.tokens_per_origin = x;
    }

    Ok(conf)
}
