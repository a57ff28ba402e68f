use super::types::GridSize;

pub const DEFAULT_INITIAL_LENGTH: usize = 3;
pub const DEFAULT_GRACE_PERIOD_TICKS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    pub width: usize,
    pub height: usize,
    pub initial_length: usize,
    pub grace_period_ticks: u64,
    pub rng_seed: Option<u64>,
}

impl EngineSettings {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Grid dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.initial_length == 0 {
            return Err("Initial snake length must be at least 1".to_string());
        }
        // The starting body is laid out along one row.
        if self.initial_length > self.width {
            return Err("Initial snake length must not exceed the grid width".to_string());
        }
        if self.initial_length >= self.width * self.height {
            return Err("Grid must leave at least one free cell for food".to_string());
        }
        if self.grace_period_ticks == 0 {
            return Err("Grace period must be at least 1 tick".to_string());
        }
        Ok(())
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            initial_length: DEFAULT_INITIAL_LENGTH,
            grace_period_ticks: DEFAULT_GRACE_PERIOD_TICKS,
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        assert!(EngineSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(EngineSettings::new(0, 20).validate().is_err());
        assert!(EngineSettings::new(20, 0).validate().is_err());
    }

    #[test]
    fn test_snake_must_fit_grid() {
        let settings = EngineSettings {
            width: 2,
            initial_length: 3,
            ..EngineSettings::default()
        };
        assert!(settings.validate().is_err());

        let full_row = EngineSettings {
            width: 5,
            height: 1,
            initial_length: 5,
            ..EngineSettings::default()
        };
        assert!(full_row.validate().is_err());
    }

    #[test]
    fn test_zero_grace_period_rejected() {
        let settings = EngineSettings {
            grace_period_ticks: 0,
            ..EngineSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
