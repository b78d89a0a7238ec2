//! Token-to-filter construction.

use super::Filter;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::str::FromStr;

/// One parsed command unit: a flag name plus its trailing parameters.
///
/// Deserializable so batch configs can embed token lists directly.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FilterToken {
    /// Flag as written, e.g. `-blur`.
    pub name: String,
    /// Raw parameter strings following the flag.
    #[serde(default)]
    pub params: Vec<String>,
}

/// Build a configured [`Filter`] from a parsed token.
///
/// This is the single validation gate: unknown names, wrong parameter
/// counts and out-of-domain numbers all fail here, and every filter it
/// returns applies cleanly to any valid image.
pub fn create_filter(token: &FilterToken) -> Result<Filter> {
    match token.name.as_str() {
        "-neg" => {
            expect_params(token, 0)?;
            Ok(Filter::Negative)
        }
        "-gs" => {
            expect_params(token, 0)?;
            Ok(Filter::Grayscale)
        }
        "-sharp" => {
            expect_params(token, 0)?;
            Ok(Filter::Sharpen)
        }
        "-edge" => {
            expect_params(token, 1)?;
            let threshold = parse_param(token, 0, "a number")?;
            Ok(Filter::EdgeDetection { threshold })
        }
        "-blur" => {
            expect_params(token, 1)?;
            let sigma: f64 = parse_param(token, 0, "a number greater than zero")?;
            if !(sigma.is_finite() && sigma > 0.0) {
                return Err(invalid_param(token, 0, "a number greater than zero"));
            }
            Ok(Filter::GaussianBlur { sigma })
        }
        "-crop" => {
            expect_params(token, 2)?;
            let width = parse_positive(token, 0)?;
            let height = parse_positive(token, 1)?;
            Ok(Filter::Crop { width, height })
        }
        _ => Err(Error::UnknownFilter {
            name: token.name.clone(),
        }),
    }
}

fn expect_params(token: &FilterToken, expected: usize) -> Result<()> {
    if token.params.len() != expected {
        return Err(Error::ParameterCount {
            name: token.name.clone(),
            expected,
            found: token.params.len(),
        });
    }
    Ok(())
}

fn parse_param<T: FromStr>(token: &FilterToken, index: usize, expected: &'static str) -> Result<T> {
    token.params[index]
        .parse()
        .map_err(|_| invalid_param(token, index, expected))
}

fn parse_positive(token: &FilterToken, index: usize) -> Result<usize> {
    let value: usize = parse_param(token, index, "a positive integer")?;
    if value == 0 {
        return Err(invalid_param(token, index, "a positive integer"));
    }
    Ok(value)
}

fn invalid_param(token: &FilterToken, index: usize, expected: &'static str) -> Error {
    Error::InvalidParameter {
        name: token.name.clone(),
        value: token.params[index].clone(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(name: &str, params: &[&str]) -> FilterToken {
        FilterToken {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn builds_every_supported_filter() {
        assert_eq!(
            create_filter(&token("-neg", &[])).unwrap(),
            Filter::Negative
        );
        assert_eq!(
            create_filter(&token("-gs", &[])).unwrap(),
            Filter::Grayscale
        );
        assert_eq!(
            create_filter(&token("-sharp", &[])).unwrap(),
            Filter::Sharpen
        );
        assert_eq!(
            create_filter(&token("-edge", &["0.25"])).unwrap(),
            Filter::EdgeDetection { threshold: 0.25 }
        );
        assert_eq!(
            create_filter(&token("-blur", &["1.5"])).unwrap(),
            Filter::GaussianBlur { sigma: 1.5 }
        );
        assert_eq!(
            create_filter(&token("-crop", &["800", "600"])).unwrap(),
            Filter::Crop {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            create_filter(&token("-emboss", &[])),
            Err(Error::UnknownFilter { .. })
        ));
    }

    #[test]
    fn arity_mismatches_are_rejected() {
        assert!(matches!(
            create_filter(&token("-sharp", &["3"])),
            Err(Error::ParameterCount {
                expected: 0,
                found: 1,
                ..
            })
        ));
        assert!(matches!(
            create_filter(&token("-crop", &["800"])),
            Err(Error::ParameterCount {
                expected: 2,
                found: 1,
                ..
            })
        ));
        assert!(matches!(
            create_filter(&token("-edge", &[])),
            Err(Error::ParameterCount {
                expected: 1,
                found: 0,
                ..
            })
        ));
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        assert!(matches!(
            create_filter(&token("-edge", &["soft"])),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            create_filter(&token("-crop", &["3.5", "4"])),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn blur_sigma_must_be_positive_and_finite() {
        for bad in ["0", "-1.5", "NaN", "inf"] {
            assert!(
                matches!(
                    create_filter(&token("-blur", &[bad])),
                    Err(Error::InvalidParameter { .. })
                ),
                "sigma {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn crop_rejects_zero_dimensions() {
        assert!(matches!(
            create_filter(&token("-crop", &["0", "10"])),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn edge_threshold_may_leave_the_unit_interval() {
        assert_eq!(
            create_filter(&token("-edge", &["1.75"])).unwrap(),
            Filter::EdgeDetection { threshold: 1.75 }
        );
        assert_eq!(
            create_filter(&token("-edge", &["-0.5"])).unwrap(),
            Filter::EdgeDetection { threshold: -0.5 }
        );
    }
}
