/// Whether the answer to "play again?" is a yes. Only `yes` and `y` count, in any case.
pub fn wants_replay(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "yes" || answer == "y"
}
