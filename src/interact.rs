use crate::errors::Result;
use std::io::{BufRead, Write};

/// Asks the user a yes/no question
pub trait Prompt {
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Opens a URL in the user's browser
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        confirm_from(std::io::stdin().lock(), question)
    }
}

/// Ask `question` on stdout and read the answer from `reader`
///
/// End of input counts as no
pub fn confirm_from<B: BufRead>(mut reader: B, question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    if reader.read_line(&mut answer)? == 0 {
        log::debug!("input closed before an answer, treating as no");
        return Ok(false);
    }

    Ok(is_affirmative(&answer))
}

pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        log::debug!("Opening {}", url);
        open::that_detached(url)?;
        Ok(())
    }
}

/// Only `y`, in any case and surrounded by any whitespace, means yes
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
