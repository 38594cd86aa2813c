/// A single token typed by the player, interpreted case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSignal {
    Higher,
    Lower,
    Yes,
    Exit,
    Ready,
    Invalid,
}

impl From<&str> for UserSignal {
    fn from(token: &str) -> Self {
        match token {
            "h" => UserSignal::Higher,
            "l" => UserSignal::Lower,
            "y" => UserSignal::Yes,
            "e" => UserSignal::Exit,
            "ready" => UserSignal::Ready,
            _ => UserSignal::Invalid,
        }
    }
}
