//! House placement of ecliptic longitudes.

use crate::zodiac::Sign;

/// Where a body falls in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// House number, 1 to 12.
    pub house: u8,
    pub sign: Sign,
}

/// House (1 to 12) containing `longitude` for the given cusps.
///
/// A house runs from its cusp (inclusive) to the next one; the house
/// spanning 0° Aries wraps. With out-of-order cusps, as can happen at
/// polar latitudes, the house of the nearest preceding cusp is used.
pub fn house_of(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let p = longitude.rem_euclid(360.0);
    for i in 0..12 {
        let start = cusps[i];
        let next = cusps[(i + 1) % 12];
        let inside = if next >= start {
            p >= start && p < next
        } else {
            p >= start || p < next
        };
        if inside {
            return (i + 1) as u8;
        }
    }
    let nearest = (0..12)
        .min_by(|&a, &b| {
            let da = (p - cusps[a]).rem_euclid(360.0);
            let db = (p - cusps[b]).rem_euclid(360.0);
            da.total_cmp(&db)
        })
        .unwrap_or(0);
    (nearest + 1) as u8
}

/// House and sign of a longitude.
pub fn place(longitude: f64, cusps: &[f64; 12]) -> Placement {
    Placement {
        house: house_of(longitude, cusps),
        sign: Sign::from_longitude(longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_from(start: f64) -> [f64; 12] {
        std::array::from_fn(|i| (start + 30.0 * i as f64).rem_euclid(360.0))
    }

    #[test]
    fn simple_houses() {
        let cusps = equal_from(0.0);
        assert_eq!(house_of(15.0, &cusps), 1);
        assert_eq!(house_of(45.0, &cusps), 2);
        assert_eq!(house_of(359.0, &cusps), 12);
    }

    #[test]
    fn cusp_itself_belongs_to_its_house() {
        let cusps = equal_from(10.0);
        for (i, c) in cusps.iter().enumerate() {
            assert_eq!(house_of(*c, &cusps), (i + 1) as u8);
        }
    }

    #[test]
    fn house_spanning_aries_point() {
        let cusps = equal_from(350.0);
        assert_eq!(house_of(355.0, &cusps), 1);
        assert_eq!(house_of(5.0, &cusps), 1);
        assert_eq!(house_of(19.99, &cusps), 1);
        assert_eq!(house_of(20.0, &cusps), 2);
        assert_eq!(house_of(349.0, &cusps), 12);
    }

    #[test]
    fn unequal_cusps() {
        let cusps = [
            51.6278, 77.1597, 94.8489, 112.0884, 133.7115, 169.302, 231.6278, 257.1597, 274.8489,
            292.0884, 313.7115, 349.302,
        ];
        assert_eq!(house_of(280.37, &cusps), 9);
        assert_eq!(house_of(10.0, &cusps), 12);
        assert_eq!(house_of(60.0, &cusps), 1);
    }

    #[test]
    fn degenerate_cusps_fall_back_to_nearest() {
        let cusps = [100.0; 12];
        assert!((1..=12).contains(&house_of(50.0, &cusps)));
        let placement = place(45.0, &equal_from(0.0));
        assert_eq!(placement, Placement { house: 2, sign: Sign::Taurus });
    }
}
