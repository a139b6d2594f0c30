//! Surface air film resistances.

use ev_core::units::RValue;
use serde::{Deserialize, Serialize};

/// Still-air film on a vertical surface.
pub const AIR_FILM_VERTICAL: RValue = 0.68;
/// Exterior film at 15 mph wind.
pub const AIR_FILM_OUTSIDE: RValue = 0.17;
/// Horizontal surface, heat flow upward.
pub const AIR_FILM_FLAT_ENHANCED: RValue = 0.61;
/// Horizontal surface, heat flow downward.
pub const AIR_FILM_FLAT_REDUCED: RValue = 0.92;
/// Floors see both directions over a year.
pub const AIR_FILM_FLOOR_AVERAGE: RValue = 0.5 * (AIR_FILM_FLAT_ENHANCED + AIR_FILM_FLAT_REDUCED);

/// What the outer face of a surface sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Exposure {
    /// Ambient air.
    #[default]
    Outside,
    /// Another building space (attic, garage, crawlspace, neighbor unit).
    Interior,
    /// Soil contact; no exterior film.
    Ground,
}

/// Surface geometry relevant to film selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilmOrientation {
    Vertical,
    /// Pitch as rise over 12 in of run.
    Roof { pitch: f64 },
    Floor,
}

/// Interior-side film for the given orientation.
///
/// Roof films are interpolated linearly in tilt angle between the flat
/// (heat flow up) and vertical values.
pub fn inside_film(orientation: FilmOrientation) -> RValue {
    match orientation {
        FilmOrientation::Vertical => AIR_FILM_VERTICAL,
        FilmOrientation::Floor => AIR_FILM_FLOOR_AVERAGE,
        FilmOrientation::Roof { pitch } => {
            let tilt_deg = (pitch.max(0.0) / 12.0).atan().to_degrees();
            AIR_FILM_FLAT_ENHANCED
                + (AIR_FILM_VERTICAL - AIR_FILM_FLAT_ENHANCED) * (tilt_deg / 90.0)
        }
    }
}

/// Sum of interior and exterior film resistances.
pub fn film_r(orientation: FilmOrientation, exposure: Exposure) -> RValue {
    let inside = inside_film(orientation);
    let outside = match exposure {
        Exposure::Outside => AIR_FILM_OUTSIDE,
        Exposure::Interior => inside,
        Exposure::Ground => 0.0,
    };
    inside + outside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exterior_wall_films() {
        let r = film_r(FilmOrientation::Vertical, Exposure::Outside);
        assert!((r - 0.85).abs() < 1e-12);
    }

    #[test]
    fn ground_contact_has_inside_film_only() {
        let r = film_r(FilmOrientation::Vertical, Exposure::Ground);
        assert!((r - AIR_FILM_VERTICAL).abs() < 1e-12);
    }

    #[test]
    fn interior_adjacent_doubles_inside_film() {
        let r = film_r(FilmOrientation::Floor, Exposure::Interior);
        assert!((r - 2.0 * AIR_FILM_FLOOR_AVERAGE).abs() < 1e-12);
    }

    #[test]
    fn roof_film_between_flat_and_vertical() {
        let flat = inside_film(FilmOrientation::Roof { pitch: 0.0 });
        let steep = inside_film(FilmOrientation::Roof { pitch: 12.0 });
        assert!((flat - AIR_FILM_FLAT_ENHANCED).abs() < 1e-12);
        assert!(steep > flat && steep < AIR_FILM_VERTICAL);
        // 45 degrees sits halfway
        assert!((steep - 0.5 * (AIR_FILM_FLAT_ENHANCED + AIR_FILM_VERTICAL)).abs() < 1e-9);
    }
}
