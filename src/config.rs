use crate::{FieldError, DEFAULT_WALL_PROBABILITY, MAX_DIMENSION};

/// Parameters for generating a random [Field](crate::Field). Unlike the direct constructors,
/// which treat bad arguments as programming errors, a config is validated and rejected with
/// a [FieldError], so it can carry values typed in by a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    /// Percentage of cells that become walls.
    pub wall_probability: u8,
    /// Seed of the obstacle generator; drawn from the clock if absent.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> FieldConfig {
        FieldConfig {
            width: 15,
            height: 15,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn new(width: usize, height: usize) -> FieldConfig {
        FieldConfig::default().with_size(width, height)
    }

    pub fn with_size(mut self, width: usize, height: usize) -> FieldConfig {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_wall_probability(mut self, wall_probability: u8) -> FieldConfig {
        self.wall_probability = wall_probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> FieldConfig {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::EmptyDimension {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_DIMENSION {
                return Err(FieldError::DimensionTooLarge {
                    name,
                    value,
                    max: MAX_DIMENSION,
                });
            }
        }
        if self.wall_probability > 100 {
            return Err(FieldError::WallProbabilityOutOfRange(self.wall_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = FieldConfig::default();
        assert_eq!((config.width, config.height), (15, 15));
        assert_eq!(config.wall_probability, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            FieldConfig::new(0, 3).validate(),
            Err(FieldError::EmptyDimension {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            FieldConfig::new(3, 1001).validate(),
            Err(FieldError::DimensionTooLarge {
                name: "height",
                value: 1001,
                max: 1000
            })
        );
        assert_eq!(
            FieldConfig::new(3, 3).with_wall_probability(101).validate(),
            Err(FieldError::WallProbabilityOutOfRange(101))
        );
        assert!(FieldConfig::new(1000, 1)
            .with_wall_probability(100)
            .validate()
            .is_ok());
    }
}
