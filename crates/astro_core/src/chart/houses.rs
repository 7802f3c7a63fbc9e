//! Whole-sign house placement.

use crate::zodiac::{degree_in_sign, sign_index};

/// House 1..=12 for a body at `longitude` given the Ascendant longitude.
///
/// The Ascendant's sign is house 1 and each following sign one house more.
/// A body in the Ascendant's sign but at a lower degree than the Ascendant
/// has not risen yet and is placed in house 12.
pub fn whole_sign_house(longitude: f64, ascendant: f64) -> u8 {
    let sign = sign_index(longitude);
    let ascendant_sign = sign_index(ascendant);

    if sign == ascendant_sign && degree_in_sign(longitude) < degree_in_sign(ascendant) {
        return 12;
    }

    ((sign + 12 - ascendant_sign) % 12 + 1) as u8
}
