// On/off control with a deadband
// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::float::FloatCore;

use crate::relay::SwitchState;

/// Which way the actuator moves the process value when it is ON.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SwitchAction {
    /// ON raises the process value, e.g. a heater. Switches ON below the band.
    #[default]
    Heating,
    /// ON lowers the process value, e.g. a compressor. Switches ON above the band.
    Cooling,
}

/// Thermostat-style on/off decision with heater convention. See [`hysteresis_switch_with`].
pub fn hysteresis_switch<F: FloatCore>(
    pv: F,
    setpoint: F,
    deadband: F,
    previous: SwitchState,
) -> SwitchState {
    hysteresis_switch_with(SwitchAction::Heating, pv, setpoint, deadband, previous)
}

/// Decides the next actuator state from the process value and the previous state.
///
/// The band spans `deadband / 2` on either side of `setpoint`; inside it, the previous state is
/// kept, which prevents chatter around the setpoint. For a heater, an ON actuator turns OFF once
/// `pv >= setpoint + deadband / 2` and an OFF one turns ON once `pv <= setpoint - deadband / 2`.
/// Cooling mirrors this. A negative deadband counts as zero, which degenerates into a plain
/// threshold with no chatter protection.
///
/// # Arguments
/// - `action`: Whether ON heats or cools.
/// - `pv`: The process value.
/// - `setpoint`: The center of the band.
/// - `deadband`: The full width of the band.
/// - `previous`: The state returned by the previous call.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn hysteresis_switch_with<F: FloatCore>(
    action: SwitchAction,
    pv: F,
    setpoint: F,
    deadband: F,
    previous: SwitchState,
) -> SwitchState {
    let half_band = if deadband > F::zero() {
        deadband / (F::one() + F::one())
    } else {
        F::zero()
    };
    let upper = setpoint + half_band;
    let lower = setpoint - half_band;

    // Turning OFF is tested as "reached the far edge" rather than "still inside", so a NaN
    // process value keeps the previous state
    match (action, previous) {
        (SwitchAction::Heating, SwitchState::On) => SwitchState::from(!(pv >= upper)),
        (SwitchAction::Heating, SwitchState::Off) => SwitchState::from(pv <= lower),
        (SwitchAction::Cooling, SwitchState::On) => SwitchState::from(!(pv <= lower)),
        (SwitchAction::Cooling, SwitchState::Off) => SwitchState::from(pv >= upper),
    }
}
