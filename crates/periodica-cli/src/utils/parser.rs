use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid atom argument '{0}'. Expected 'FILE:COUNT' (e.g., 'oxygen.json:1').")]
    InvalidAtomFormat(String),

    #[error("Invalid element argument '{0}'. Expected 'Z:COUNT' (e.g., '8:1').")]
    InvalidElementFormat(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidSetFormat(String),

    #[error("Component '{component}' cannot be empty in '{argument}'.")]
    EmptyComponent {
        component: &'static str,
        argument: String,
    },
}

/// An element record file paired with how many of it the molecule contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomCount {
    pub path: PathBuf,
    pub count: u32,
}

/// Splits on the last `:` so paths containing colons still work.
pub fn parse_atom_count(argument: &str) -> Result<AtomCount, ParseError> {
    let (path, count) = argument
        .rsplit_once(':')
        .ok_or_else(|| ParseError::InvalidAtomFormat(argument.to_string()))?;
    if path.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "file",
            argument: argument.to_string(),
        });
    }
    let count = count
        .parse()
        .map_err(|_| ParseError::InvalidAtomFormat(argument.to_string()))?;
    Ok(AtomCount {
        path: PathBuf::from(path),
        count,
    })
}

/// `Z:COUNT`, as used by the chain command.
pub fn parse_element_count(argument: &str) -> Result<(u32, u32), ParseError> {
    let invalid = || ParseError::InvalidElementFormat(argument.to_string());
    let (z, count) = argument.split_once(':').ok_or_else(invalid)?;
    let z = z.trim().parse().map_err(|_| invalid())?;
    let count = count.trim().parse().map_err(|_| invalid())?;
    Ok((z, count))
}

pub fn parse_key_value(argument: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = argument
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidSetFormat(argument.to_string()))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            argument: argument.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            argument: argument.to_string(),
        });
    }
    Ok((key, value))
}
