//! Everything the game prints to the player.

pub const GOODBYE: &str = "program ending. goodbye...";
pub const BEGIN: &str = "Ok, let's begin! ";
pub const COME_BACK_SOON: &str = "Ok, game stopping. Come back to play soon!";
pub const INSTRUCTIONS_LINE_2: &str = "I (the computer) will try to guess it. \n";
pub const INSTRUCTIONS_LINE_3: &str = "Type 'ready' to begin or 'e' to exit :";
pub const VALIDATION_READY: &str =
    "Please enter valid input, enter 'ready' to begin or 'e' to exit.";
pub const VALIDATION_INVALID_INPUT: &str = "Please enter valid input, only characters h, l, y, or e. \
     (h='higher', l='lower', y='yes', e='exit' ) are allowed.";
pub const LINE_SEPARATOR: &str =
    "--------------------------------------------------------------------------------";
pub const INSTRUCTIONS_INPUT: &str =
    "Please respond with h, l, y, or e. (h='higher', l='lower', y='yes', e='exit' ) :";

pub fn guess(n: i64) -> String {
    format!("Is the number {n} ? ")
}

pub fn instructions_line_1(max: u32) -> String {
    format!("INSTRUCTIONS: Choose a number in your mind from 1 to {max} and write it down.")
}

pub fn guessed_correctly(n: i64) -> String {
    format!("Awesome! I guessed correctly. I had a good feeling about the number {n} :) \n")
}

pub fn unexpected_error(code: u32) -> String {
    format!(
        "An error has occurred. Please contact 1-800-111-1111. \
         Provide the customer service representative with the following diagnoses code: {code}"
    )
}
