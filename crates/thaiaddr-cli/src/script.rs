//! Replay scripts: one adapter input per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! zip 105          postal field now reads "105"
//! pick 10500       chose a suggestion
//! province 10      user picked a province
//! district - auto  cleared by the widget itself, not the user
//! locale en
//! line houseNo 99/1
//! reset
//! show
//! ```

use anyhow::{anyhow, bail, Context};
use thaiaddr_core::prelude::*;

/// A parsed script line: an engine input, or a request to print the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Input(EngineInput),
    Show,
}

/// Parses one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Step>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let input = match verb {
        // An empty zip argument is legal: it clears the field.
        "zip" => EngineInput::EditPostalText {
            text: rest.to_owned(),
        },
        "pick" => EngineInput::ChooseSuggestion {
            postal_code: required(verb, rest)?.to_owned(),
        },
        "province" => parse_select(Level::Province, rest)?,
        "district" => parse_select(Level::District, rest)?,
        "subdistrict" => parse_select(Level::Subdistrict, rest)?,
        "locale" => EngineInput::SetLocale {
            locale: required(verb, rest)?.parse().map_err(|e: String| anyhow!(e))?,
        },
        "line" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            EngineInput::SetAddressLine {
                field: required(verb, field)?.parse().map_err(|e: String| anyhow!(e))?,
                value: value.trim().to_owned(),
            }
        }
        "reset" => EngineInput::Reset,
        "show" => return Ok(Some(Step::Show)),
        other => bail!("unknown command: {other}"),
    };
    Ok(Some(Step::Input(input)))
}

fn required<'a>(verb: &str, arg: &'a str) -> anyhow::Result<&'a str> {
    if arg.is_empty() {
        bail!("`{verb}` needs an argument");
    }
    Ok(arg)
}

fn parse_select(level: Level, rest: &str) -> anyhow::Result<EngineInput> {
    let mut parts = rest.split_whitespace();
    let code = match parts.next() {
        None => bail!("`{level}` needs a code or `-`"),
        Some("-") => None,
        Some(code) => Some(
            code.parse::<AreaCode>()
                .with_context(|| format!("bad {level} code: {code}"))?,
        ),
    };
    let user_initiated = match parts.next() {
        None => true,
        Some("auto") => false,
        Some(other) => bail!("unexpected `{other}` after {level} code"),
    };
    Ok(EngineInput::Select {
        level,
        code,
        user_initiated,
    })
}
