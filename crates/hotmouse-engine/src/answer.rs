use config::Action;

/// Ease number to submit for a rating action, given how many answer buttons
/// the current card offers. `None` when the rating does not exist for that
/// button layout (e.g. "hard" with only three buttons) or `action` is not a
/// rating.
pub fn ease_for(action: Action, button_count: u8) -> Option<u8> {
    match (action, button_count) {
        (Action::Again, _) => Some(1),
        (Action::Hard, 4) => Some(2),
        (Action::Good, 2 | 3) => Some(2),
        (Action::Good, 4) => Some(3),
        (Action::Easy, 3) => Some(3),
        (Action::Easy, 4) => Some(4),
        _ => None,
    }
}
