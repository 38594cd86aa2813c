use std::io::{BufRead, Write};

use crate::config::GameConfig;
use crate::error::GuessError;
use crate::input::Tokens;
use crate::messages;
use crate::signal::UserSignal;

const STEP: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won(i64),
    Aborted,
}

impl RoundOutcome {
    pub fn ends_session(&self) -> bool {
        matches!(self, RoundOutcome::Aborted)
    }
}

/// What a single answer did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Narrowed,
    Rejected,
    Finished(RoundOutcome),
}

/// Binary search over the number the player has in mind.
///
/// Bounds are `i64` so `low + high` cannot overflow for any supported
/// [`GameConfig`]. Nothing forces `low <= high`; the midpoint is taken as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    low: i64,
    high: i64,
}

impl Round {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            low: 0,
            high: config.ceiling(),
        }
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.low, self.high)
    }

    /// Midpoint, truncated toward zero.
    pub fn guess(&self) -> i64 {
        (self.high + self.low) / 2
    }

    pub fn respond(&mut self, signal: UserSignal) -> Response {
        let guess = self.guess();
        match signal {
            UserSignal::Higher => {
                self.low = guess - STEP;
                log::debug!("higher than {guess}, bounds now {}..{}", self.low, self.high);
                Response::Narrowed
            }
            UserSignal::Lower => {
                self.high = guess + STEP;
                log::debug!("lower than {guess}, bounds now {}..{}", self.low, self.high);
                Response::Narrowed
            }
            UserSignal::Yes => Response::Finished(RoundOutcome::Won(guess)),
            UserSignal::Exit => Response::Finished(RoundOutcome::Aborted),
            UserSignal::Ready | UserSignal::Invalid => Response::Rejected,
        }
    }

    /// Keeps asking until the player confirms a guess or quits.
    pub fn play<R, W>(
        &mut self,
        input: &mut Tokens<R>,
        out: &mut W,
    ) -> Result<RoundOutcome, GuessError>
    where
        R: BufRead,
        W: Write,
    {
        log::info!("round started with bounds {}..{}", self.low, self.high);
        loop {
            writeln!(out, "{}", messages::guess(self.guess()))?;
            writeln!(out, "{}", messages::INSTRUCTIONS_INPUT)?;
            out.flush()?;
            let signal = input.next_signal()?;
            match self.respond(signal) {
                Response::Narrowed => {}
                Response::Rejected => {
                    log::debug!("rejected {:?} mid-round", signal);
                    writeln!(out, "{}", messages::VALIDATION_INVALID_INPUT)?;
                }
                Response::Finished(outcome) => {
                    match outcome {
                        RoundOutcome::Won(n) => {
                            writeln!(out, "{}", messages::guessed_correctly(n))?;
                            writeln!(out, "{}", messages::LINE_SEPARATOR)?;
                        }
                        RoundOutcome::Aborted => {
                            writeln!(out, "{}", messages::COME_BACK_SOON)?;
                        }
                    }
                    log::info!("round finished: {:?}", outcome);
                    return Ok(outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(max: u32, script: &str) -> (RoundOutcome, String) {
        let config = GameConfig::new(max).unwrap();
        let mut input = Tokens::new(Cursor::new(script.to_string()));
        let mut out = Vec::new();
        let outcome = Round::new(&config).play(&mut input, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    // answers the way a truthful player thinking of `hidden` would
    fn solve(config: &GameConfig, hidden: i64) -> Option<i64> {
        let mut round = Round::new(config);
        for _ in 0..64 {
            let guess = round.guess();
            let signal = if guess == hidden {
                UserSignal::Yes
            } else if guess < hidden {
                UserSignal::Higher
            } else {
                UserSignal::Lower
            };
            if let Response::Finished(RoundOutcome::Won(n)) = round.respond(signal) {
                return Some(n);
            }
        }
        None
    }

    #[test]
    fn first_guess_uses_padded_ceiling() {
        let config = GameConfig::new(1).unwrap();
        let round = Round::new(&config);
        assert_eq!(round.bounds(), (0, 3));
        assert_eq!(round.guess(), 1);
        assert_eq!(Round::new(&GameConfig::default()).guess(), 501);
    }

    #[test]
    fn narrowing_moves_one_past_the_guess() {
        let mut round = Round::new(&GameConfig::default());
        assert_eq!(round.respond(UserSignal::Higher), Response::Narrowed);
        assert_eq!(round.bounds(), (500, 1002));
        assert_eq!(round.respond(UserSignal::Lower), Response::Narrowed);
        assert_eq!(round.bounds(), (500, 752));
    }

    #[test]
    fn invalid_answers_leave_bounds_alone() {
        let mut round = Round::new(&GameConfig::default());
        round.respond(UserSignal::Lower);
        let before = round.clone();
        for signal in [UserSignal::Invalid, UserSignal::Ready, UserSignal::Invalid] {
            assert_eq!(round.respond(signal), Response::Rejected);
        }
        assert_eq!(round, before);
    }

    #[test]
    fn truthful_player_is_always_found() {
        for max in [1, 2, 3, 10, 1000] {
            let config = GameConfig::new(max).unwrap();
            for hidden in 1..=i64::from(max) {
                assert_eq!(solve(&config, hidden), Some(hidden), "max {max}");
            }
        }
    }

    #[test]
    fn finds_numbers_near_the_integer_ceiling() {
        let config = GameConfig::new(GameConfig::MAX_SUPPORTED).unwrap();
        for hidden in [1, 2, 1_000_000, i64::from(GameConfig::MAX_SUPPORTED)] {
            assert_eq!(solve(&config, hidden), Some(hidden));
        }
    }

    #[test]
    fn scripted_wins() {
        let (outcome, out) = play(1000, "l l l l l l l l l l y");
        assert_eq!(outcome, RoundOutcome::Won(1));
        assert!(out.contains(&messages::guessed_correctly(1)));
        assert!(out.contains(messages::LINE_SEPARATOR));

        let (outcome, _) = play(1000, "h h h h h h h h h y");
        assert_eq!(outcome, RoundOutcome::Won(1000));

        let (outcome, _) = play(1000, "l l h h h l h h l y");
        assert_eq!(outcome, RoundOutcome::Won(232));
    }

    #[test]
    fn repeated_invalid_input_repeats_the_same_guess() {
        let (outcome, out) = play(1000, "x x x y");
        assert_eq!(outcome, RoundOutcome::Won(501));
        assert_eq!(out.matches(messages::VALIDATION_INVALID_INPUT).count(), 3);
        assert_eq!(out.matches(&messages::guess(501)).count(), 4);
    }

    #[test]
    fn exit_aborts_the_session() {
        let (outcome, out) = play(1000, "h e y");
        assert_eq!(outcome, RoundOutcome::Aborted);
        assert!(outcome.ends_session());
        assert!(out.contains(messages::COME_BACK_SOON));
        assert!(!out.contains("Awesome!"));
    }

    #[test]
    fn closed_input_aborts() {
        let (outcome, out) = play(1000, "l");
        assert_eq!(outcome, RoundOutcome::Aborted);
        assert!(out.contains(messages::COME_BACK_SOON));
    }
}
