//! Positional-argument resolution for plain and color mode.
//!
//! Color mode takes one to three positional arguments whose meaning
//! depends on arity: `TEXT`, `TEXT BANNER` (when the last argument names
//! a known banner), `SUBSTRING TEXT`, or `SUBSTRING TEXT BANNER`. Plain
//! mode takes `TEXT [BANNER]`. Resolution only disambiguates; banner
//! names are validated later so error ordering matches the mode pipeline.

use bannerize::BannerStyle;

use crate::cli::CliError;

const USAGE: &str = "Usage: bannerize [OPTION] [STRING]\n\n\
                     EX: bannerize --color=<color> <substring to be colored> \"something\"";

/// A fully disambiguated invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct Request {
    /// Substring to colorize; empty means the whole text.
    pub substring: String,
    /// Text to render, with `\n` escapes already interpreted.
    pub text: String,
    /// Banner name as given (or the default), not yet validated.
    pub banner: String,
}

pub fn resolve_plain(positional: &[String]) -> Result<Request, CliError> {
    let (text, banner) = match positional {
        [text] => (text, BannerStyle::default().name().to_string()),
        [text, banner] => (text, banner.clone()),
        _ => return Err(usage_error()),
    };
    Ok(Request {
        substring: String::new(),
        text: unescape(text),
        banner,
    })
}

pub fn resolve_color(positional: &[String]) -> Result<Request, CliError> {
    let default = BannerStyle::default().name().to_string();
    let (substring, text, banner) = match positional {
        [text] => (String::new(), text, default),
        [text, banner] if BannerStyle::from_name(banner).is_some() => {
            (String::new(), text, banner.clone())
        }
        [substring, text] => (substring.clone(), text, default),
        [substring, text, banner] => (substring.clone(), text, banner.clone()),
        _ => return Err(usage_error()),
    };
    Ok(Request {
        substring,
        text: unescape(text),
        banner,
    })
}

fn usage_error() -> CliError {
    CliError::Usage(USAGE.to_string())
}

/// Interpret literal `\n` sequences in argv text as real line breaks.
fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}
