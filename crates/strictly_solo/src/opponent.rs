//! Computer opponent with simulated thinking time.

use crate::config::SoloConfig;
use anyhow::{Context, Result};
use rand::Rng;
use std::time::Duration;
use strictly_minimax::{Board, Mark, Position, best_move};
use tracing::{debug, instrument};

/// Random pause before the computer reveals its move.
///
/// Purely cosmetic: the chosen move is the same whatever the wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    min: Duration,
    max: Duration,
}

impl ThinkingDelay {
    /// Delay drawn uniformly from `min..=max`. Arguments are swapped if
    /// given in the wrong order.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// No pause at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Delay configured in `config`.
    pub fn from_config(config: &SoloConfig) -> Self {
        Self::new(
            Duration::from_millis(*config.thinking_delay_min_ms()),
            Duration::from_millis(*config.thinking_delay_max_ms()),
        )
    }

    /// Draws one pause length.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

/// Plays the computer's side using the minimax engine.
#[derive(Debug, Clone, Copy)]
pub struct ComputerOpponent {
    mark: Mark,
    delay: ThinkingDelay,
}

impl ComputerOpponent {
    /// Creates an opponent placing `mark`.
    pub fn new(mark: Mark, delay: ThinkingDelay) -> Self {
        Self { mark, delay }
    }

    /// Opponent configured from `config`.
    pub fn from_config(config: &SoloConfig) -> Self {
        Self::new(config.computer_mark(), ThinkingDelay::from_config(config))
    }

    /// Waits the thinking delay, then searches off the async executor.
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    pub async fn choose(&self, board: Board) -> Result<Position> {
        let pause = self.delay.sample();
        debug!(?pause, "Computer thinking");
        tokio::time::sleep(pause).await;

        let mark = self.mark;
        let position = tokio::task::spawn_blocking(move || best_move(&board, mark))
            .await
            .context("Search task panicked")??;

        debug!(position = position.to_index(), "Computer chose position");
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_sample_in_range() {
        let delay = ThinkingDelay::new(Duration::from_millis(10), Duration::from_millis(20));
        for _ in 0..50 {
            let d = delay.sample();
            assert!(d >= Duration::from_millis(10) && d <= Duration::from_millis(20));
        }
    }

    #[test]
    fn test_delay_swaps_inverted_bounds() {
        let delay = ThinkingDelay::new(Duration::from_millis(9), Duration::from_millis(3));
        for _ in 0..20 {
            let d = delay.sample();
            assert!(d >= Duration::from_millis(3) && d <= Duration::from_millis(9));
        }
    }

    #[tokio::test]
    async fn test_choose_blocks_line() {
        let opponent = ComputerOpponent::new(Mark::O, ThinkingDelay::none());
        let board: Board = "XX. .O. ...".parse().unwrap();
        assert_eq!(opponent.choose(board).await.unwrap(), Position::TopRight);
    }

    #[tokio::test]
    async fn test_choose_fails_on_finished_board() {
        let opponent = ComputerOpponent::new(Mark::O, ThinkingDelay::none());
        let board: Board = "XXX OO. ...".parse().unwrap();
        let err = opponent.choose(board).await.unwrap_err();
        assert!(err.to_string().contains("No legal move"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_choose_waits_for_delay() {
        let delay = Duration::from_millis(1500);
        let opponent = ComputerOpponent::new(Mark::O, ThinkingDelay::new(delay, delay));
        let start = tokio::time::Instant::now();
        let board: Board = "XX. .O. ...".parse().unwrap();
        opponent.choose(board).await.unwrap();
        assert!(start.elapsed() >= delay);
    }

    #[tokio::test(start_paused = true)]
    async fn test_day_long_pause_logged() {
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_test_writer()
                .finish(),
        );
        let day = Duration::from_secs(24 * 60 * 60);
        let opponent = ComputerOpponent::new(Mark::O, ThinkingDelay::new(day, day));
        let start = tokio::time::Instant::now();
        let board: Board = "XX. .O. ...".parse().unwrap();
        assert_eq!(opponent.choose(board).await.unwrap(), Position::TopRight);
        assert!(start.elapsed() >= day);
    }
}
