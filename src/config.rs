use crate::error::{Error, Result};
use crate::grid::cell_count;

/// Parameters for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub nmines: usize,
    /// Seed for mine placement and random moves. None means pick one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { height: 8, width: 8, nmines: 8, seed: None }
    }
}

impl GameConfig {
    ///
    /// Parses positional arguments: height width mines seed. Any of them can be left off from the
    /// end, in which case the default is used.
    ///
    pub fn from_args<I, S>(args: I) -> Result<GameConfig>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();
        for (idx, arg) in args.into_iter().enumerate() {
            let arg = arg.as_ref();
            match idx {
                0 => config.height = parse_arg("height", arg)?,
                1 => config.width = parse_arg("width", arg)?,
                2 => config.nmines = parse_arg("mines", arg)?,
                3 => config.seed = Some(parse_arg("seed", arg)?),
                _ => {
                    return Err(Error::InvalidArgument { name: "arguments", value: arg.to_string() })
                }
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(Error::EmptyGrid);
        }
        let ncells = cell_count(self.height, self.width)?;
        if self.nmines > ncells {
            return Err(Error::TooManyMines { nmines: self.nmines, ncells });
        }
        Ok(())
    }
}

fn parse_arg<T: std::str::FromStr>(name: &'static str, arg: &str) -> Result<T> {
    arg.trim()
        .parse::<T>()
        .map_err(|_| Error::InvalidArgument { name, value: arg.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let no_args: Vec<String> = vec![];
        assert_eq!(GameConfig::default(), GameConfig::from_args(no_args).unwrap());
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(
            GameConfig { height: 16, width: 30, nmines: 99, seed: Some(7) },
            GameConfig::from_args(["16", "30", "99", "7"]).unwrap()
        );
    }

    #[test]
    fn test_parse_partial() {
        assert_eq!(
            GameConfig { height: 5, width: 6, nmines: 8, seed: None },
            GameConfig::from_args(["5", "6"]).unwrap()
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(Error::InvalidArgument { name: "width", value: "wide".to_string() }),
            GameConfig::from_args(["5", "wide"])
        );
        assert_eq!(
            Err(Error::TooManyMines { nmines: 10, ncells: 9 }),
            GameConfig::from_args(["3", "3", "10"])
        );
        assert_eq!(Err(Error::EmptyGrid), GameConfig::from_args(["0", "3", "0"]));
        assert!(GameConfig::from_args(["3", "3", "1", "1", "extra"]).is_err());
        let huge = usize::MAX.to_string();
        assert_eq!(
            Err(Error::GridTooLarge { height: usize::MAX, width: 2 }),
            GameConfig::from_args([huge.as_str(), "2", "0"])
        );
    }
}
