// Prompt - how handlers ask the user for follow-up input

use std::collections::VecDeque;
use std::io;

/// Secondary input surface for a single turn.
///
/// `confirm` is the gate in front of any outbound request a handler makes.
pub trait Prompt: Send {
    /// Show an informational line
    fn say(&mut self, text: &str);

    /// Ask for free text
    fn ask(&mut self, label: &str) -> io::Result<String>;

    /// Pick one of `options`, returning the chosen option
    fn select(&mut self, label: &str, options: &[&str]) -> io::Result<String>;

    /// Ask whether to go ahead with `action`
    fn confirm(&mut self, action: &str) -> io::Result<bool>;
}

/// Prompt that replays canned answers, for tests and non-interactive use
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    /// Everything passed to `say`, in order
    pub said: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            said: Vec::new(),
        }
    }

    fn next(&mut self, label: &str) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, format!("no answer for '{}'", label))
        })
    }
}

impl Prompt for ScriptedPrompt {
    fn say(&mut self, text: &str) {
        self.said.push(text.to_string());
    }

    fn ask(&mut self, label: &str) -> io::Result<String> {
        self.next(label)
    }

    fn select(&mut self, label: &str, options: &[&str]) -> io::Result<String> {
        let answer = self.next(label)?;
        if options.contains(&answer.as_str()) {
            Ok(answer)
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not one of {:?}", answer, options),
            ))
        }
    }

    fn confirm(&mut self, action: &str) -> io::Result<bool> {
        let answer = self.next(action)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let mut prompt = ScriptedPrompt::new(["Chennai", "Japan", "yes", "no"]);
        assert_eq!(prompt.ask("from").unwrap(), "Chennai");
        assert_eq!(prompt.select("country", &["India", "Japan"]).unwrap(), "Japan");
        assert!(prompt.confirm("go").unwrap());
        assert!(!prompt.confirm("go").unwrap());
        assert!(prompt.ask("more").is_err());
    }

    #[test]
    fn test_select_rejects_unknown_option() {
        let mut prompt = ScriptedPrompt::new(["Peru"]);
        assert!(prompt.select("country", &["India"]).is_err());
    }
}
