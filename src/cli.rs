pub mod command;
pub mod run;

pub use run::{run_app, run_menu};

use crate::errors::AppError;
use std::io::{BufRead, Write};

/// Line-oriented prompt/response channel for the menu.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    // OUTPUT FUNCTIONS
    pub fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.get_input()
    }

    pub fn show_menu(&mut self) -> Result<Option<String>, AppError> {
        self.say("\nPhone Book Menu")?;
        self.say("1 - Add contact")?;
        self.say("2 - Remove contact")?;
        self.say("3 - Search contact")?;
        self.say("4 - View all contacts")?;
        self.say("5 - Save contacts")?;
        self.say("6 - Load contacts")?;
        self.say("0 - Exit")?;
        self.prompt("Select option: ")
    }

    // INPUT FUNCTIONS
    /// Next line with its trailing `\n` removed, or `None` once input is
    /// exhausted. Other whitespace is part of the value.
    pub fn get_input(&mut self) -> Result<Option<String>, AppError> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        if input.ends_with('\n') {
            input.pop();
        }
        Ok(Some(input))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` directives are honoured on
/// top of the level picked by `verbosity`.
pub fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
