use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::signal::UserSignal;

/*
    hands out whitespace separated tokens one at a time,
    reading another line only once the current one is used up
 */
pub struct Tokens<R>
where
    R: BufRead,
{
    reader: R,
    pending: VecDeque<String>,
}

impl<R> Tokens<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }

    /// Closed input reads as `Exit`, so a session always winds down cleanly.
    pub fn next_signal(&mut self) -> io::Result<UserSignal> {
        match self.next_token()? {
            Some(token) => Ok(UserSignal::from(token.as_str())),
            None => {
                log::debug!("input closed, treating as exit");
                Ok(UserSignal::Exit)
            }
        }
    }
}
