//! Integer trigonometry
//!
//! Sine lookup over whole degrees from a quarter-wave table, so that no
//! floating point is needed anywhere in the sampler. Values are in
//! `TRIGO_SHIFT` fixed point: [`TRIGO_SIN_MAX`] represents exactly 1.0.

/// Fractional bits of the table values
pub const TRIGO_SHIFT: u32 = 15;

/// Table value of sin(90°)
pub const TRIGO_SIN_MAX: i32 = 1 << TRIGO_SHIFT;

/// `round(sin(d) * 2^15)` for `d` in `0..=90` degrees
const SIN_TABLE: [i32; 91] = [
    0, 572, 1144, 1715, 2286, 2856, 3425, 3993, 4560, 5126, //
    5690, 6252, 6813, 7371, 7927, 8481, 9032, 9580, 10126, 10668, //
    11207, 11743, 12275, 12803, 13328, 13848, 14365, 14876, 15384, 15886, //
    16384, 16877, 17364, 17847, 18324, 18795, 19261, 19720, 20174, 20622, //
    21063, 21498, 21926, 22348, 22763, 23170, 23571, 23965, 24351, 24730, //
    25102, 25466, 25822, 26170, 26510, 26842, 27166, 27482, 27789, 28088, //
    28378, 28660, 28932, 29197, 29452, 29698, 29935, 30163, 30382, 30592, //
    30792, 30983, 31164, 31336, 31499, 31651, 31795, 31928, 32052, 32166, //
    32270, 32365, 32449, 32524, 32588, 32643, 32688, 32723, 32748, 32763, //
    32768,
];

/// Sine of an angle in whole degrees
///
/// Any angle is accepted; it is reduced into `[0, 360)` first.
///
/// # Returns
///
/// `sin(angle) * 2^TRIGO_SHIFT`, in `-TRIGO_SIN_MAX..=TRIGO_SIN_MAX`
pub fn trigo_sin(angle: i32) -> i32 {
    let angle = angle.rem_euclid(360);
    match angle {
        0..90 => SIN_TABLE[angle as usize],
        90..180 => SIN_TABLE[(180 - angle) as usize],
        180..270 => -SIN_TABLE[(angle - 180) as usize],
        _ => -SIN_TABLE[(360 - angle) as usize],
    }
}

/// Cosine of an angle in whole degrees, same scale as [`trigo_sin`]
pub fn trigo_cos(angle: i32) -> i32 {
    trigo_sin(angle.rem_euclid(360) + 90)
}

/// Linear blend of two adjacent table values
///
/// `rem` tenths of the way from `v1` toward `v2`. `rem` is normally in
/// `0..10`; a negative `rem` (from a negative angle) extrapolates.
#[inline]
pub fn interpolate_tenths(v1: i32, v2: i32, rem: i32) -> i32 {
    (v1 * (10 - rem) + v2 * rem) / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sin_cardinal_angles() {
        assert_eq!(trigo_sin(0), 0);
        assert_eq!(trigo_sin(90), TRIGO_SIN_MAX);
        assert_eq!(trigo_sin(180), 0);
        assert_eq!(trigo_sin(270), -TRIGO_SIN_MAX);
        assert_eq!(trigo_sin(360), 0);
    }

    #[test]
    fn test_sin_symmetry() {
        for d in 0..=90 {
            assert_eq!(trigo_sin(180 - d), trigo_sin(d), "d = {d}");
            assert_eq!(trigo_sin(-d), -trigo_sin(d), "d = {d}");
            assert_eq!(trigo_sin(d + 360), trigo_sin(d), "d = {d}");
        }
    }

    #[test]
    fn test_sin_known_values() {
        assert_eq!(trigo_sin(30), 16384);
        assert_eq!(trigo_sin(150), 16384);
        assert_eq!(trigo_sin(-30), -16384);
        assert_eq!(trigo_sin(210), -16384);
        assert_eq!(trigo_sin(45), 23170);
    }

    #[test]
    fn test_sin_large_and_negative_angles() {
        assert_eq!(trigo_sin(-720 + 30), 16384);
        assert_eq!(trigo_sin(3600 + 90), TRIGO_SIN_MAX);
        assert_eq!(trigo_sin(i32::MIN), trigo_sin(i32::MIN.rem_euclid(360)));
    }

    #[test]
    fn test_table_is_monotonic() {
        for pair in SIN_TABLE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_cos() {
        assert_eq!(trigo_cos(0), TRIGO_SIN_MAX);
        assert_eq!(trigo_cos(90), 0);
        assert_eq!(trigo_cos(60), 16384);
        assert_eq!(trigo_cos(-60), 16384);
        assert_eq!(trigo_cos(180), -TRIGO_SIN_MAX);
    }

    #[test]
    fn test_interpolate_tenths() {
        assert_eq!(interpolate_tenths(100, 200, 0), 100);
        assert_eq!(interpolate_tenths(100, 200, 5), 150);
        assert_eq!(interpolate_tenths(100, 200, 10), 200);
        assert_eq!(interpolate_tenths(100, 200, -5), 50);
    }
}
