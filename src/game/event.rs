use super::food::FoodKind;

/// Notification produced by the engine during a tick.
///
/// `update()` returns the events of that tick in emission order; the driver
/// drains the list and reacts (redraw, persist the high score, play
/// effects). There is no callback dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score changed; payload is the new score.
    ScoreUpdated(u32),
    /// Level changed; payload is the new level.
    LevelUpdated(u32),
    /// A food item was consumed.
    FoodEaten(FoodKind),
    /// Tick rate changed: +1 boost started, -1 slowdown started, 0 both
    /// effects expired. The driver re-polls `effective_speed()` on this.
    SpeedChanged(i8),
    /// The game reached its terminal state.
    GameOver,
    /// The session high score was matched or beaten; payload is the best.
    HighScoreUpdated(u32),
}
