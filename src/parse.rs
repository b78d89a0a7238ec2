//! Command-line filter tokenization.

use crate::error::{Error, Result};
use crate::filters::FilterToken;

/// Split a command tail into filter tokens.
///
/// An argument opening with `-` followed by an alphabetic character starts
/// a new token; every other argument, negative numbers included, attaches
/// to the open token as a parameter. Names and arities are not checked
/// here; the factory owns that.
pub fn parse_filter_args(args: &[String]) -> Result<Vec<FilterToken>> {
    let mut tokens: Vec<FilterToken> = Vec::new();
    for arg in args {
        if is_flag(arg) {
            tokens.push(FilterToken {
                name: arg.clone(),
                params: Vec::new(),
            });
        } else if let Some(token) = tokens.last_mut() {
            token.params.push(arg.clone());
        } else {
            return Err(Error::DanglingParameter { value: arg.clone() });
        }
    }
    Ok(tokens)
}

fn is_flag(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}
