//! Command-line surface: maze dimensions, item count, optional seed.

use clap::Parser;
use labyrinth_core::SessionConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "labyrinth", about = "A maze crawl against a roaming minotaur", version)]
pub struct Args {
    /// Width of the maze (must be > 15)
    pub width: usize,
    /// Height of the maze (must be > 15)
    pub height: usize,
    /// Number of relics to hide in the maze (must be > 3)
    pub items: usize,
    /// Fixed seed for a reproducible maze; drawn fresh when absent
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Check the ranges clap cannot express and hand back a config the
    /// generator accepts as-is.
    pub fn into_config(self) -> Result<SessionConfig, String> {
        if self.width <= 15 {
            return Err(format!("width must be greater than 15 (provided: {})", self.width));
        }
        if self.height <= 15 {
            return Err(format!("height must be greater than 15 (provided: {})", self.height));
        }
        if self.items <= 3 {
            return Err(format!(
                "number of items must be greater than 3 (provided: {})",
                self.items
            ));
        }
        if self.items > self.width * self.height / 3 {
            return Err(format!(
                "too many items for a {}x{} maze (at most {} fit)",
                self.width,
                self.height,
                self.width * self.height / 3
            ));
        }
        Ok(SessionConfig { width: self.width, height: self.height, item_count: self.items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(width: usize, height: usize, items: usize) -> Args {
        Args { width, height, items, seed: None }
    }

    #[test]
    fn accepts_the_manual_example() {
        let config = args(25, 20, 5).into_config().expect("25x20 with 5 items is valid");
        assert_eq!(config, SessionConfig { width: 25, height: 20, item_count: 5 });
    }

    #[test]
    fn rejects_width_at_or_below_fifteen() {
        let err = args(15, 20, 5).into_config().expect_err("width 15 is too small");
        assert!(err.contains("width"), "{err}");
        assert!(args(16, 20, 5).into_config().is_ok());
    }

    #[test]
    fn rejects_height_at_or_below_fifteen() {
        let err = args(25, 15, 5).into_config().expect_err("height 15 is too small");
        assert!(err.contains("height"), "{err}");
    }

    #[test]
    fn rejects_item_counts_at_or_below_three() {
        let err = args(25, 20, 3).into_config().expect_err("3 items are too few");
        assert!(err.contains("items"), "{err}");
        assert!(args(25, 20, 4).into_config().is_ok());
    }

    #[test]
    fn rejects_item_counts_above_a_third_of_the_area() {
        // 16x16 has 256 cells, so 85 items fit and 86 do not.
        assert!(args(16, 16, 85).into_config().is_ok());
        let err = args(16, 16, 86).into_config().expect_err("86 items exceed the cap");
        assert!(err.contains("too many"), "{err}");
    }

    #[test]
    fn parses_positional_arguments_and_seed_flag() {
        let parsed = Args::try_parse_from(["labyrinth", "25", "20", "5", "--seed", "42"])
            .expect("well-formed invocation parses");
        assert_eq!(parsed.width, 25);
        assert_eq!(parsed.height, 20);
        assert_eq!(parsed.items, 5);
        assert_eq!(parsed.seed, Some(42));
    }

    #[test]
    fn missing_positional_arguments_fail_to_parse() {
        assert!(Args::try_parse_from(["labyrinth", "25", "20"]).is_err());
    }
}
