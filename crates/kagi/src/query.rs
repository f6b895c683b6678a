//! Query acquisition from arguments or piped stdin

use std::io::{self, Read};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("no query provided\nUsage: kagi [flags] <query...>")]
    Missing,

    #[error("failed to read from stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Build the query from positional words, or from stdin when it is piped.
///
/// Stdin is only read when no usable arguments were given and it is not an
/// interactive terminal.
pub fn resolve_query<R: Read>(
    args: &[String],
    mut stdin: R,
    stdin_is_terminal: bool,
) -> Result<String, QueryError> {
    let joined = args.join(" ");
    let query = joined.trim();
    if !query.is_empty() {
        return Ok(query.to_string());
    }

    if !stdin_is_terminal {
        let mut input = String::new();
        stdin.read_to_string(&mut input)?;
        let query = input.trim();
        if !query.is_empty() {
            return Ok(query.to_string());
        }
    }

    Err(QueryError::Missing)
}
