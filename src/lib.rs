//! Strictly Mastermind console front end.
//!
//! Wires the [`strictly_mastermind`] engine to a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML game settings with command-line overrides
//! - **Console**: line-oriented [`MastermindUi`](strictly_mastermind::MastermindUi) adapter
//! - **Score**: one-off comparison of a guess against a known solution
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_mastermind::MastermindGame;
//! use strictly_mastermind_cli::{ConsoleUi, MastermindConfig};
//!
//! let config = MastermindConfig::default();
//! let input = Cursor::new(b"1 2 3 4 5\nn\n".to_vec());
//! let mut ui = ConsoleUi::new(input, Vec::new(), config.start_params());
//!
//! let mut game: MastermindGame<'_, u32, _> =
//!     MastermindGame::new(&mut ui, |_size: usize| vec![1, 2, 3, 4, 5]);
//! game.run()?;
//!
//! let output = String::from_utf8(ui.into_output())?;
//! assert!(output.contains("YOU WIN!"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod score;

pub use config::{ConfigError, MastermindConfig};
pub use console::{ConsoleUi, parse_code};
pub use score::score_codes;
