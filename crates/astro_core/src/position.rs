//! Ecliptic position value type.

/// Ecliptic position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Longitude, degrees in [0, 360).
    pub longitude: f64,
    /// Latitude, degrees in [-90, 90].
    pub latitude: f64,
    /// Distance, AU.
    pub distance: f64,
    /// Degrees per day.
    pub speed_longitude: f64,
    /// Degrees per day.
    pub speed_latitude: f64,
    /// AU per day.
    pub speed_distance: f64,
}

impl Position {
    /// Apparent backward motion along the ecliptic.
    pub fn is_retrograde(&self) -> bool {
        self.speed_longitude < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_speed(speed_longitude: f64) -> Position {
        Position {
            longitude: 10.0,
            latitude: 0.0,
            distance: 1.0,
            speed_longitude,
            speed_latitude: 0.0,
            speed_distance: 0.0,
        }
    }

    #[test]
    fn retrograde_is_sign_of_speed() {
        assert!(with_speed(-0.01).is_retrograde());
        assert!(!with_speed(0.01).is_retrograde());
        assert!(!with_speed(0.0).is_retrograde());
    }
}
