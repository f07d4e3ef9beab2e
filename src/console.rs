//! Plain-text console front end.

use std::io::{BufRead, Stdin, Stdout, Write};
use strictly_mastermind::{GameResult, GameStartParams, MastermindUi, UiError};
use tracing::{debug, instrument};

/// Line-oriented console UI over any reader/writer pair.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    params: GameStartParams,
}

impl ConsoleUi<std::io::StdinLock<'static>, Stdout> {
    /// Creates a console UI on the process's stdin and stdout.
    pub fn stdio(params: GameStartParams) -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout(), params)
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    /// Creates a console UI that starts every round with `params`.
    pub fn new(input: R, output: W, params: GameStartParams) -> Self {
        Self {
            input,
            output,
            params,
        }
    }

    /// Consumes the UI and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, UiError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Parses whitespace-separated integers, stopping at the first token that is not one.
pub fn parse_code(line: &str) -> Vec<u32> {
    line.split_whitespace()
        .map_while(|token| token.parse().ok())
        .collect()
}

impl<R: BufRead, W: Write> MastermindUi<u32> for ConsoleUi<R, W> {
    fn show_board(&mut self) -> Result<(), UiError> {
        Ok(())
    }

    fn show_tries_left(&mut self, count: usize) -> Result<(), UiError> {
        writeln!(self.output, "Tries left: {}", count)?;
        Ok(())
    }

    fn show_game_result(&mut self, result: GameResult) -> Result<(), UiError> {
        writeln!(self.output, "{}", result)?;
        Ok(())
    }

    fn show_winning_message(&mut self) -> Result<(), UiError> {
        writeln!(self.output, "YOU WIN!")?;
        Ok(())
    }

    fn show_lost_message(&mut self) -> Result<(), UiError> {
        writeln!(self.output, "GAME LOST!")?;
        Ok(())
    }

    fn get_start_params(&mut self) -> Result<GameStartParams, UiError> {
        Ok(self.params)
    }

    #[instrument(skip(self))]
    fn ask_for_solution(&mut self) -> Result<Vec<u32>, UiError> {
        writeln!(self.output, "Please enter your solution below")?;
        self.output.flush()?;

        let line = self
            .read_line()?
            .ok_or_else(|| UiError::new("Input closed while waiting for a guess"))?;
        let code = parse_code(&line);
        debug!(len = code.len(), "Guess read");
        Ok(code)
    }

    #[instrument(skip(self))]
    fn ask_play_again(&mut self) -> Result<bool, UiError> {
        loop {
            write!(self.output, "Play again? (y/n): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => {
                    debug!(answer = other, "Unrecognized answer");
                    writeln!(
                        self.output,
                        "Please enter 'y' or 'yes' if you want play again or 'n' or 'no' if you don't."
                    )?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ui(input: &str) -> ConsoleUi<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleUi::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            GameStartParams::new(5, 8),
        )
    }

    fn output(ui: ConsoleUi<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(ui.into_output()).unwrap()
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("1 2 3 4 5\n"), vec![1, 2, 3, 4, 5]);
        assert_eq!(parse_code("  7\t8  "), vec![7, 8]);
        assert_eq!(parse_code("1 2 x 4"), vec![1, 2]);
        assert!(parse_code("").is_empty());
    }

    #[test]
    fn test_ask_for_solution() {
        let mut ui = ui("1 3 4 6 5\n");
        assert_eq!(ui.ask_for_solution().unwrap(), vec![1, 3, 4, 6, 5]);
        assert_eq!(output(ui), "Please enter your solution below\n");
    }

    #[test]
    fn test_ask_for_solution_on_closed_input() {
        let mut ui = ui("");
        assert!(ui.ask_for_solution().is_err());
    }

    #[test]
    fn test_play_again_answers() {
        assert!(ui("y\n").ask_play_again().unwrap());
        assert!(ui("YES\n").ask_play_again().unwrap());
        assert!(!ui("n\n").ask_play_again().unwrap());
        assert!(!ui("No\n").ask_play_again().unwrap());
        assert!(!ui("").ask_play_again().unwrap());
    }

    #[test]
    fn test_play_again_reprompts() {
        let mut ui = ui("maybe\ny\n");
        assert!(ui.ask_play_again().unwrap());
        let text = output(ui);
        assert_eq!(text.matches("Play again? (y/n): ").count(), 2);
        assert!(text.contains("Please enter 'y' or 'yes'"));
    }

    #[test]
    fn test_messages() {
        let mut ui = ui("");
        ui.show_board().unwrap();
        ui.show_tries_left(3).unwrap();
        ui.show_game_result(GameResult::new(false, 2, 1)).unwrap();
        ui.show_lost_message().unwrap();
        ui.show_winning_message().unwrap();
        assert_eq!(
            output(ui),
            "Tries left: 3\nCORRECT: 2 COLOR: 1\nGAME LOST!\nYOU WIN!\n"
        );
    }

    #[test]
    fn test_start_params_are_configured_values() {
        let mut ui = ui("");
        assert_eq!(ui.get_start_params().unwrap(), GameStartParams::new(5, 8));
    }
}
