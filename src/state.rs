//! Thermostat state: setpoint, room temperature, and HVAC demand selection.
//!
//! The demand decision is the heart of the panel: the gap between setpoint
//! and room temperature is compared against a small tolerance band so the
//! status icon (and the simulated heater/cooler) does not flap around the
//! setpoint.
//!
//! # Tolerance Band
//!
//! A gap of more than `DEMAND_BAND` degrees above the room temperature calls
//! for heating; more than `DEMAND_BAND` below calls for cooling; anything
//! inside the band counts as satisfied. The comparisons are strict, so a gap
//! of exactly ±0.25 is still satisfied.
//!
//! # Demo Simulation
//!
//! In simulator mode there is no real room, so [`Thermostat::step`] fakes
//! one: heating and cooling pull the room temperature toward the setpoint at
//! fixed per-frame rates, and while satisfied the room slowly leaks toward a
//! fixed ambient temperature - which eventually re-triggers a demand and
//! keeps the panel visibly alive.

// =============================================================================
// Demand Configuration
// =============================================================================

/// Half-width of the satisfied band around the setpoint, in degrees.
pub const DEMAND_BAND: f32 = 0.25;

/// Lowest selectable setpoint in degrees Celsius.
pub const SETPOINT_MIN: f32 = 5.0;

/// Highest selectable setpoint in degrees Celsius.
pub const SETPOINT_MAX: f32 = 35.0;

/// Setpoint change per button press, in degrees.
pub const SETPOINT_STEP: f32 = 0.5;

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Room temperature gained per frame while heating (~1 degree/second at 50 FPS).
const HEAT_RATE: f32 = 0.02;

/// Room temperature lost per frame while cooling.
const COOL_RATE: f32 = 0.03;

/// Fraction of the gap to ambient closed per frame while satisfied.
const LEAK_FACTOR: f32 = 0.0005;

/// Temperature the room drifts toward when no demand is active.
const AMBIENT_TEMP: f32 = 18.0;

// =============================================================================
// HVAC Demand
// =============================================================================

/// What the thermostat is asking of the HVAC system.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HvacDemand {
    /// Room is more than the band below the setpoint.
    Heating,
    /// Room is more than the band above the setpoint.
    Cooling,
    /// Room is inside the tolerance band.
    Satisfied,
}

impl HvacDemand {
    /// Select the demand for a setpoint/room pair.
    ///
    /// Total over all real inputs: exactly one variant for every pair.
    /// Strict comparisons keep gaps of exactly ±`DEMAND_BAND` satisfied.
    pub fn for_gap(setpoint: f32, room: f32) -> Self {
        let diff = setpoint - room;
        if diff > DEMAND_BAND {
            Self::Heating
        } else if diff < -DEMAND_BAND {
            Self::Cooling
        } else {
            Self::Satisfied
        }
    }
}

// =============================================================================
// Thermostat State
// =============================================================================

/// Setpoint and (simulated) room temperature.
///
/// Create one instance and call `step()` each frame.
pub struct Thermostat {
    /// Desired temperature, moved in `SETPOINT_STEP` increments by the buttons.
    setpoint: f32,

    /// Current room temperature, driven by the demo simulation.
    room: f32,
}

impl Thermostat {
    /// Start at a 21.0 degree setpoint with the room at ambient.
    pub fn new() -> Self {
        Self {
            setpoint: 21.0,
            room: AMBIENT_TEMP,
        }
    }

    /// Desired temperature in degrees Celsius.
    pub fn setpoint(&self) -> f32 {
        self.setpoint
    }

    /// Current room temperature in degrees Celsius.
    pub fn room(&self) -> f32 {
        self.room
    }

    /// Current HVAC demand for this setpoint/room pair.
    pub fn demand(&self) -> HvacDemand {
        HvacDemand::for_gap(self.setpoint, self.room)
    }

    /// Raise the setpoint one step, clamped to `SETPOINT_MAX`.
    pub fn raise_setpoint(&mut self) {
        self.setpoint = (self.setpoint + SETPOINT_STEP).min(SETPOINT_MAX);
    }

    /// Lower the setpoint one step, clamped to `SETPOINT_MIN`.
    pub fn lower_setpoint(&mut self) {
        self.setpoint = (self.setpoint - SETPOINT_STEP).max(SETPOINT_MIN);
    }

    /// Advance the demo simulation by one frame.
    ///
    /// Heating/cooling move the room toward the setpoint; a satisfied room
    /// leaks toward `AMBIENT_TEMP`.
    pub fn step(&mut self) {
        match self.demand() {
            HvacDemand::Heating => self.room += HEAT_RATE,
            HvacDemand::Cooling => self.room -= COOL_RATE,
            HvacDemand::Satisfied => self.room += (AMBIENT_TEMP - self.room) * LEAK_FACTOR,
        }
    }
}

impl Default for Thermostat {
    fn default() -> Self {
        Self::new()
    }
}
