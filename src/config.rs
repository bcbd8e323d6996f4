#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidSpread,
    NegativeRadius,
    RadiusTooLarge,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidSpread => {
                write!(f, "sigma must be a finite, normal value greater than 0")
            }
            ConfigError::NegativeRadius => write!(f, "radius must not be negative"),
            ConfigError::RadiusTooLarge => {
                write!(f, "radius must be <= {}", Config::MAX_RADIUS)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Smoothing parameters, fixed for the lifetime of a filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Half-width of the neighbourhood, in samples on each side of the center
    pub radius: usize,

    /// Spread of the kernel falloff
    pub sigma: f32,
}

impl Config {
    /// Largest supported radius. The weight table holds 2 * MAX_RADIUS + 1 taps.
    pub const MAX_RADIUS: usize = 32;

    pub const DEFAULT_RADIUS: usize = 5;
    pub const DEFAULT_SIGMA: f32 = 0.01;

    pub const fn new(radius: usize, sigma: f32) -> Self {
        Self { radius, sigma }
    }

    /// Build a config from raw parameter values, as handed out by a parameter
    /// server that only knows signed integers.
    pub fn from_params(radius: i64, sigma: f32) -> Result<Self, ConfigError> {
        if radius < 0 {
            return Err(ConfigError::NegativeRadius);
        }
        let radius = usize::try_from(radius).map_err(|_| ConfigError::RadiusTooLarge)?;
        let config = Self { radius, sigma };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Rejects 0, negatives and NaN. Subnormals would overflow 1 / (sigma * sqrt(2pi)).
        if !self.sigma.is_normal() || self.sigma < 0.0 {
            return Err(ConfigError::InvalidSpread);
        }

        if self.radius > Self::MAX_RADIUS {
            return Err(ConfigError::RadiusTooLarge);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS, Self::DEFAULT_SIGMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_sigma() {
        assert_eq!(Config::new(3, 0.0).validate(), Err(ConfigError::InvalidSpread));
        assert_eq!(Config::new(3, -0.0).validate(), Err(ConfigError::InvalidSpread));
        assert_eq!(Config::new(3, -1.5).validate(), Err(ConfigError::InvalidSpread));
    }

    #[test]
    fn rejects_non_finite_sigma() {
        assert_eq!(Config::new(3, f32::NAN).validate(), Err(ConfigError::InvalidSpread));
        assert_eq!(Config::new(3, f32::INFINITY).validate(), Err(ConfigError::InvalidSpread));
        assert_eq!(
            Config::new(3, f32::MIN_POSITIVE / 2.0).validate(),
            Err(ConfigError::InvalidSpread)
        );
    }

    #[test]
    fn radius_bounds() {
        assert_eq!(Config::new(0, 1.0).validate(), Ok(()));
        assert_eq!(Config::new(Config::MAX_RADIUS, 1.0).validate(), Ok(()));
        assert_eq!(
            Config::new(Config::MAX_RADIUS + 1, 1.0).validate(),
            Err(ConfigError::RadiusTooLarge)
        );
    }

    #[test]
    fn from_params_rejects_negative_radius() {
        assert_eq!(Config::from_params(-1, 1.0), Err(ConfigError::NegativeRadius));
        assert_eq!(Config::from_params(4, 2.0), Ok(Config::new(4, 2.0)));
    }
}
