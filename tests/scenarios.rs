use adversarial_hangman::core::RevealedPattern;
use adversarial_hangman::engine::resolve_guess;
use adversarial_hangman::game::{
    GameConfig, GameSession, GameState, GuessError, GuessOutcome, Hangman, NewGameError,
};

fn hangman() -> Hangman {
    Hangman::init(&["last", "fast", "bets", "code"], GameConfig::default())
}

fn guess(game: &mut GameSession, letter: char, outcome: GuessOutcome, remaining: i32) {
    assert_eq!(game.submit_guess(letter), Ok(outcome), "guess '{letter}'");
    assert_eq!(game.remaining_retries(), remaining, "after '{letter}'");
}

#[test]
fn test_missed_letter_keeps_largest_family() {
    let hangman = hangman();
    let mut game = hangman.new_game(4, 5).unwrap();

    guess(&mut game, 'a', GuessOutcome::Missed, 4);
    assert_eq!(game.pattern().to_string(), "____");
    assert_eq!(game.candidates(), ["bets", "code"]);
    assert_eq!(game.state(), GameState::Running);
}

#[test]
fn test_winning_trace() {
    let hangman = hangman();
    let mut game = hangman.new_game(4, 2).unwrap();

    guess(&mut game, 'a', GuessOutcome::Missed, 1);
    guess(&mut game, 'b', GuessOutcome::Missed, 0);
    guess(&mut game, 'c', GuessOutcome::Revealed, 0);
    assert_eq!(game.pattern().to_string(), "c___");
    guess(&mut game, 'o', GuessOutcome::Revealed, 0);
    guess(&mut game, 'd', GuessOutcome::Revealed, 0);
    assert_eq!(game.state(), GameState::Running);
    guess(&mut game, 'e', GuessOutcome::Revealed, 0);

    assert_eq!(game.pattern().to_string(), "code");
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.used_letters(), ['a', 'b', 'c', 'o', 'd', 'e']);
}

#[test]
fn test_losing_trace() {
    let hangman = hangman();
    let mut game = hangman.new_game(4, 3).unwrap();

    guess(&mut game, 'i', GuessOutcome::Missed, 2);
    guess(&mut game, 'a', GuessOutcome::Missed, 1);
    guess(&mut game, 'e', GuessOutcome::Revealed, 1);
    assert_eq!(game.candidates(), ["code"]);
    assert_eq!(game.pattern().to_string(), "___e");
    guess(&mut game, 'u', GuessOutcome::Missed, 0);
    assert_eq!(game.state(), GameState::Running);
    guess(&mut game, 't', GuessOutcome::Missed, -1);

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(
        game.submit_guess('c'),
        Err(GuessError::InvalidState(GameState::Lost))
    );
}

#[test]
fn test_duplicate_guess_leaves_session_untouched() {
    let hangman = hangman();
    let mut game = hangman.new_game(4, 5).unwrap();
    guess(&mut game, 'a', GuessOutcome::Missed, 4);

    let before = game.clone();
    assert_eq!(game.submit_guess('a'), Err(GuessError::DuplicateInput('a')));
    assert_eq!(game.remaining_retries(), before.remaining_retries());
    assert_eq!(game.used_letters(), before.used_letters());
    assert_eq!(game.candidates(), before.candidates());
}

#[test]
fn test_invalid_construction() {
    let hangman = hangman();

    assert_eq!(
        hangman.new_game(7, 3).unwrap_err(),
        NewGameError::InvalidLength(7)
    );
    assert!(matches!(
        hangman.new_game(4, -1),
        Err(NewGameError::InvalidRetries { requested: -1, .. })
    ));
    assert!(matches!(
        hangman.new_game(4, 11),
        Err(NewGameError::InvalidRetries { requested: 11, max: 10 })
    ));
    assert!(hangman.new_game(4, 10).is_ok());
}

#[test]
fn test_resolution_is_deterministic() {
    let words = ["last", "fast", "bets", "code", "cost", "lobe"];
    let start = RevealedPattern::unknown(4);

    let first = resolve_guess(&words, &start, 'e');
    for _ in 0..10 {
        let again = resolve_guess(&words, &start, 'e');
        assert_eq!(again.candidates, first.candidates);
        assert_eq!(again.pattern, first.pattern);
    }
}

#[test]
fn test_survivors_reproduce_pattern() {
    let words = ["last", "fast", "bets", "code", "cost", "lobe", "tote", "sets"];
    let start = RevealedPattern::unknown(4);

    for letter in 'a'..='z' {
        let resolution = resolve_guess(&words, &start, letter);
        assert!(resolution.candidates.len() <= words.len());
        for word in &resolution.candidates {
            assert_eq!(start.reveal(word, letter), resolution.pattern, "{word} / {letter}");
        }
    }
}
