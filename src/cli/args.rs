use clap::Parser;

use crate::models::difficulty::Difficulty;

/// Sail a 20x20 ocean to the treasure while pirates and sea monsters hunt you.
#[derive(Debug, Parser)]
#[command(name = "columbus", version)]
pub struct Args {
    /// Seed for the random number generator (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// EASY, MEDIUM, HARD or SURVIVAL; anything else plays EASY
    #[arg(short, long, default_value = "EASY")]
    pub difficulty: String,

    /// Print a JSON snapshot after each move instead of the chart
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_keyword(&self.difficulty)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_easy_without_seed() {
        let args = Args::try_parse_from(["columbus"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.difficulty(), Difficulty::Easy);
        assert!(!args.json);
    }

    #[test]
    fn reads_all_flags() {
        let args =
            Args::try_parse_from(["columbus", "--seed", "42", "-d", "survival", "--json"]).unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.difficulty(), Difficulty::Survival);
        assert!(args.json);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["columbus", "--seed", "abc"]).is_err());
    }
}
