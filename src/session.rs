use std::io::{BufRead, Write};

use crate::config::GameConfig;
use crate::error::{GuessError, ERROR_CODE_HEADER};
use crate::header::HeaderSource;
use crate::input::Tokens;
use crate::messages;
use crate::round::Round;
use crate::signal::UserSignal;

enum Gate {
    Ready,
    Exit,
}

/// Runs rounds back to back until the player types `e`.
pub struct Session<R, W>
where
    R: BufRead,
    W: Write,
{
    config: GameConfig,
    header: HeaderSource,
    input: Tokens<R>,
    out: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(config: GameConfig, header: HeaderSource, input: R, out: W) -> Self {
        Self {
            config,
            header,
            input: Tokens::new(input),
            out,
        }
    }

    /// A missing header is fatal: the diagnostic is written to the output and
    /// the error is handed back so the caller can end the process.
    pub fn run(&mut self) -> Result<(), GuessError> {
        let header = match self.header.load() {
            Ok(text) => text,
            Err(err) => {
                log::error!("{}", err);
                let code = err.code().unwrap_or(ERROR_CODE_HEADER);
                writeln!(self.out, "{}", messages::unexpected_error(code))?;
                self.out.flush()?;
                return Err(err);
            }
        };
        writeln!(self.out, "{}", header)?;

        loop {
            self.print_instructions()?;
            match self.wait_for_start()? {
                Gate::Exit => break,
                Gate::Ready => {
                    writeln!(self.out, "{}", messages::BEGIN)?;
                    let outcome = Round::new(&self.config).play(&mut self.input, &mut self.out)?;
                    if outcome.ends_session() {
                        break;
                    }
                }
            }
        }

        writeln!(self.out, "{}", messages::GOODBYE)?;
        self.out.flush()?;
        log::info!("session over");
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn print_instructions(&mut self) -> Result<(), GuessError> {
        writeln!(self.out, "{}", messages::instructions_line_1(self.config.max()))?;
        writeln!(self.out, "{}", messages::INSTRUCTIONS_LINE_2)?;
        writeln!(self.out, "{}", messages::INSTRUCTIONS_LINE_3)?;
        self.out.flush()?;
        Ok(())
    }

    fn wait_for_start(&mut self) -> Result<Gate, GuessError> {
        loop {
            match self.input.next_signal()? {
                UserSignal::Ready => return Ok(Gate::Ready),
                UserSignal::Exit => return Ok(Gate::Exit),
                other => {
                    log::debug!("rejected {:?} at the ready prompt", other);
                    writeln!(self.out, "{}", messages::VALIDATION_READY)?;
                    self.out.flush()?;
                }
            }
        }
    }
}
