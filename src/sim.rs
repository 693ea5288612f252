// Plant models for closed-loop tests and demos
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

use nalgebra as na;

/// Advances `x' = f(x)` by one step of `dt` with the classic fourth-order Runge-Kutta method.
pub fn rk4_step<F>(f: F, x: na::Vector2<f64>, dt: f64) -> na::Vector2<f64>
where
    F: Fn(na::Vector2<f64>) -> na::Vector2<f64>,
{
    let k1 = f(x);
    let k2 = f(x + k1 * (0.5 * dt));
    let k3 = f(x + k2 * (0.5 * dt));
    let k4 = f(x + k3 * dt);
    x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}

/// A heating element inside a chamber that leaks heat to ambient, e.g. a small oven.
///
/// The state is `[element temperature, chamber temperature]` in °C and the input is the fraction
/// of full heater power, in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct ThermalPlant {
    /// Heater power at full drive, W
    pub heater_power: f64,
    /// Heat capacity of the element, J/K
    pub element_capacity: f64,
    /// Heat capacity of the chamber, J/K
    pub chamber_capacity: f64,
    /// Conductance from element to chamber, W/K
    pub element_conductance: f64,
    /// Conductance from chamber to ambient, W/K
    pub loss_conductance: f64,
    /// Ambient temperature, °C
    pub ambient: f64,
}

impl Default for ThermalPlant {
    fn default() -> Self {
        Self {
            heater_power: 30.0,
            element_capacity: 0.5,
            chamber_capacity: 5.0,
            element_conductance: 0.5,
            loss_conductance: 0.1,
            ambient: 25.0,
        }
    }
}

impl ThermalPlant {
    /// Implements the two-node heat balance
    /// ┌     ┐   ┌                        ┐┌    ┐   ┌        ┐
    /// │ Tₑ' │ = │ -gₑ/Cₑ   gₑ/Cₑ         ││ Tₑ │ + │ P/Cₑ u │
    /// │ T꜀' │   │  gₑ/C꜀  -(gₑ+gₗ)/C꜀     ││ T꜀ │   │ gₗTₐ/C꜀ │
    /// └     ┘   └                        ┘└    ┘   └        ┘
    /// The input is clamped into [0, 1].
    pub fn f(&self, x: na::Vector2<f64>, u: f64) -> na::Vector2<f64> {
        let u = u.clamp(0.0, 1.0);
        let ge = self.element_conductance;
        let gl = self.loss_conductance;
        let ce = self.element_capacity;
        let cc = self.chamber_capacity;

        let mat_a = na::Matrix2::new(-ge / ce, ge / ce, ge / cc, -(ge + gl) / cc);
        let forcing = na::Vector2::new(self.heater_power / ce * u, gl * self.ambient / cc);

        mat_a * x + forcing
    }

    /// The measured output is the chamber temperature.
    pub fn h(&self, x: na::Vector2<f64>) -> f64 {
        x[1]
    }

    /// Both nodes at ambient temperature.
    pub fn ambient_state(&self) -> na::Vector2<f64> {
        na::Vector2::new(self.ambient, self.ambient)
    }

    /// Chamber temperature reached at steady state under a constant input `u`.
    pub fn steady_state_temperature(&self, u: f64) -> f64 {
        self.ambient + self.heater_power * u.clamp(0.0, 1.0) / self.loss_conductance
    }
}
