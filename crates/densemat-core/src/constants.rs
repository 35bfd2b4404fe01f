//! Read-only mathematical and physical constants (SI units)

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;
pub const SQRT2: f64 = std::f64::consts::SQRT_2;
pub const LN2: f64 = std::f64::consts::LN_2;
pub const LN10: f64 = std::f64::consts::LN_10;

/// Machine epsilon for `f64`
pub const EPS: f64 = f64::EPSILON;

/// Golden ratio (1 + √5) / 2
pub const GRATIO: f64 = 1.618_033_988_749_895;

/// Euler–Mascheroni constant
pub const EULER: f64 = 0.577_215_664_901_532_9;

// Physical constants, CODATA 2018

/// Speed of light in vacuum, m/s
pub const LIGHT: f64 = 299_792_458.0;
/// Planck constant, J·s
pub const H_PLANCK: f64 = 6.626_070_15e-34;
/// Boltzmann constant, J/K
pub const K_BOLTZMANN: f64 = 1.380_649e-23;
/// Avogadro constant, 1/mol
pub const N_A: f64 = 6.022_140_76e23;
/// Elementary charge, C
pub const EC: f64 = 1.602_176_634e-19;
/// Newtonian constant of gravitation, m³/(kg·s²)
pub const G_GRAV: f64 = 6.674_30e-11;
/// Electron mass, kg
pub const M_E: f64 = 9.109_383_701_5e-31;
/// Proton mass, kg
pub const M_P: f64 = 1.672_621_923_69e-27;
/// Molar gas constant, J/(mol·K)
pub const R_GAS: f64 = 8.314_462_618;
/// Vacuum electric permittivity, F/m
pub const EPSILON_0: f64 = 8.854_187_812_8e-12;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_relations() {
        assert_relative_eq!(GRATIO * GRATIO, GRATIO + 1.0, epsilon = 1e-12);
        assert_relative_eq!(R_GAS, N_A * K_BOLTZMANN, max_relative = 1e-9);
        assert_relative_eq!(SQRT2 * SQRT2, 2.0, epsilon = 1e-12);
        assert!(EPS > 0.0 && 1.0 + EPS > 1.0);
    }
}
