//! Physical constants and energy unit conversions.
//!
//! SI values are the exact CODATA 2018 definitions.

pub const AVOGADRO: f64 = 6.022_140_76e23; // mol⁻¹
pub const BOLTZMANN: f64 = 1.380_649e-23; // J/K
pub const ELECTRON_VOLT: f64 = 1.602_176_634e-19; // J

/// Volume of one SPC/E water molecule in nm³.
pub const V_SPCE: f64 = 0.0304;

/// Reference temperature for [`KBT_TO_KJMOL`], in K.
pub const ROOM_TEMPERATURE: f64 = 300.0;

// Energy of one particle, in J, that corresponds to 1 kJ/mol.
const KJMOL_PER_PARTICLE: f64 = 1e3 / AVOGADRO;

pub const EV_TO_KJMOL: f64 = ELECTRON_VOLT / KJMOL_PER_PARTICLE;
pub const KBT_TO_KJMOL: f64 = thermal_energy_kjmol(ROOM_TEMPERATURE);

pub const KJMOL_TO_EV: f64 = 1.0 / EV_TO_KJMOL;
pub const KJMOL_TO_KBT: f64 = 1.0 / KBT_TO_KJMOL;

/// Thermal energy `k_B T` in kJ/mol at `temperature` (K).
pub const fn thermal_energy_kjmol(temperature: f64) -> f64 {
    temperature * BOLTZMANN / KJMOL_PER_PARTICLE
}
