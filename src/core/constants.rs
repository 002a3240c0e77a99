// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 10;
pub const TICKS_PER_SECOND: u64 = 1000 / TICK_INTERVAL_MS;

// Logical playfield (the simulation runs in these units, the renderer scales)
pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 800.0;
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 600.0;

// Bird spawn point; x never changes during a run
pub const BIRD_START_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = 300.0;

// Storage
pub const APP_NAME: &str = "flappy";
pub const HIGH_SCORE_FILE: &str = "high_score.json";
pub const LOG_FILE: &str = "flappy.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rate_is_about_100hz() {
        assert_eq!(TICKS_PER_SECOND, 100);
    }

    #[test]
    fn test_bird_starts_inside_playfield() {
        assert!(BIRD_START_X > 0.0 && BIRD_START_X < DEFAULT_PLAYFIELD_WIDTH);
        assert!(BIRD_START_Y > 0.0 && BIRD_START_Y < DEFAULT_PLAYFIELD_HEIGHT);
    }
}
