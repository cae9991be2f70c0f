use std::io::{BufRead, Write};

use crate::error::Result;

use super::Console;

/// Reports whether an input token parses as an integer.
pub fn is_int(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Asks the user to pick one of `options` by its printed number.
    ///
    /// Options are listed with zero-based indexes. A non-integer response
    /// or an out-of-range index re-prints the menu; an in-range index is
    /// echoed back for confirmation, and declining restarts the menu from
    /// the top. Returns the confirmed `(index, label)` pair and nothing
    /// else: the index is always within `options`.
    pub fn select<S: AsRef<str>>(
        &mut self,
        question: &str,
        options: &[S],
    ) -> Result<(usize, String)> {
        loop {
            self.line(question)?;
            for (i, option) in options.iter().enumerate() {
                self.line(&format!("\t{i}) {}", option.as_ref()))?;
            }
            let response = self.prompt_line("")?;
            if !is_int(&response) {
                self.line("\nPlease input an integer.\n")?;
                continue;
            }
            // Negative numbers pass the integer check but can never index.
            let index = match response.parse::<usize>() {
                Ok(index) if index < options.len() => index,
                _ => {
                    self.line("\nThat is not a valid response, please try again.\n")?;
                    continue;
                }
            };
            let label = options[index].as_ref().to_string();
            if self.confirm(&format!("You selected '{label}', is that correct?"))? {
                return Ok((index, label));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    const OPTIONS: &[&str] = &["breakfast", "lunch", "dinner"];

    #[test]
    fn is_int_recognizes_integer_tokens() {
        assert!(is_int("42"));
        assert!(is_int("-3"));
        assert!(!is_int("4.2"));
        assert!(!is_int("abc"));
        assert!(!is_int(""));
    }

    #[test]
    fn returns_confirmed_selection() {
        let mut console = scripted("1\ny\n");
        let (index, label) = console.select("Pick a meal", OPTIONS).unwrap();
        assert_eq!((index, label.as_str()), (1, "lunch"));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Pick a meal"));
        assert!(output.contains("\t0) breakfast"));
        assert!(output.contains("\t2) dinner"));
        assert!(output.contains("You selected 'lunch', is that correct? [y/n] "));
    }

    #[test]
    fn retries_on_non_integer_input() {
        let mut console = scripted("soup\n2\ny\n");
        let (index, _) = console.select("Pick a meal", OPTIONS).unwrap();
        assert_eq!(index, 2);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Please input an integer."));
    }

    #[test]
    fn retries_on_out_of_range_index() {
        let mut console = scripted("3\n-1\n0\ny\n");
        let (index, label) = console.select("Pick a meal", OPTIONS).unwrap();
        assert_eq!((index, label.as_str()), (0, "breakfast"));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(
            output.matches("That is not a valid response, please try again.").count(),
            2
        );
    }

    #[test]
    fn declined_confirmation_restarts_the_menu() {
        let mut console = scripted("0\nn\n1\ny\n");
        let (index, label) = console.select("Pick a meal", OPTIONS).unwrap();
        assert_eq!((index, label.as_str()), (1, "lunch"));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Pick a meal").count(), 2);
    }
}
