//! Zodiac signs, their elements and modalities, and per-chart counts.

use astro_frames::sign_dms;

/// The 12 tropical (or sidereal) signs from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Sign {
    /// Sign containing an ecliptic longitude in degrees.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let index = (longitude_deg.rem_euclid(360.0) / 30.0).floor() as usize;
        ALL_SIGNS[index.min(11)]
    }

    /// 0-based index (Aries = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Three-letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        &self.name()[..3]
    }

    /// Fire, earth, air, water in turn from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Cardinal, fixed, mutable in turn from Aries.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Fire and air signs are masculine.
    pub const fn is_masculine(self) -> bool {
        self.index() % 2 == 0
    }
}

/// Longitude as `DD°MM'SS" Sgn`, rounded to the arc-second.
pub fn format_longitude(longitude_deg: f64) -> String {
    let (sign, d, m, s) = sign_dms(longitude_deg);
    format!("{d:2}°{m:02}'{s:02}\" {}", ALL_SIGNS[sign as usize].abbrev())
}

/// Element, modality and polarity tallies over a set of longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignCounts {
    pub fire: u8,
    pub earth: u8,
    pub air: u8,
    pub water: u8,
    pub cardinal: u8,
    pub fixed: u8,
    pub mutable: u8,
    pub masculine: u8,
    pub feminine: u8,
}

impl SignCounts {
    pub fn add(&mut self, sign: Sign) {
        match sign.element() {
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Air => self.air += 1,
            Element::Water => self.water += 1,
        }
        match sign.modality() {
            Modality::Cardinal => self.cardinal += 1,
            Modality::Fixed => self.fixed += 1,
            Modality::Mutable => self.mutable += 1,
        }
        if sign.is_masculine() {
            self.masculine += 1;
        } else {
            self.feminine += 1;
        }
    }

    pub fn total(&self) -> u8 {
        self.masculine + self.feminine
    }
}

impl FromIterator<Sign> for SignCounts {
    fn from_iter<I: IntoIterator<Item = Sign>>(iter: I) -> Self {
        let mut counts = Self::default();
        for sign in iter {
            counts.add(sign);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(359.9999), Sign::Pisces);
        assert_eq!(Sign::from_longitude(-0.5), Sign::Pisces);
        assert_eq!(Sign::from_longitude(280.37), Sign::Capricorn);
    }

    #[test]
    fn qualities_follow_the_traditional_cycle() {
        assert_eq!(Sign::Leo.element(), Element::Fire);
        assert_eq!(Sign::Virgo.element(), Element::Earth);
        assert_eq!(Sign::Aquarius.element(), Element::Air);
        assert_eq!(Sign::Scorpio.element(), Element::Water);
        assert_eq!(Sign::Capricorn.modality(), Modality::Cardinal);
        assert_eq!(Sign::Scorpio.modality(), Modality::Fixed);
        assert_eq!(Sign::Pisces.modality(), Modality::Mutable);
        assert!(Sign::Libra.is_masculine());
        assert!(!Sign::Cancer.is_masculine());
    }

    #[test]
    fn counts_add_up() {
        let counts: SignCounts = ALL_SIGNS.into_iter().collect();
        assert_eq!(counts.total(), 12);
        assert_eq!((counts.fire, counts.earth, counts.air, counts.water), (3, 3, 3, 3));
        assert_eq!((counts.cardinal, counts.fixed, counts.mutable), (4, 4, 4));
        assert_eq!((counts.masculine, counts.feminine), (6, 6));
    }

    #[test]
    fn formatting() {
        assert_eq!(format_longitude(280.5), "10°30'00\" Cap");
        assert_eq!(format_longitude(29.999_999_9), " 0°00'00\" Tau");
    }
}
