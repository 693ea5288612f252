//! Closed-loop oven control: a PID drives a heater relay through time-proportioning, with a
//! manual override in the middle of the run.
//! This example requires the `--features simulation` flag to be enabled.
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

use bumpless_pid::pid::{ControlMode, PidConfigBuilder, PidController};
use bumpless_pid::relay::{duty_fraction, DutyCycleDriver};
use bumpless_pid::sim::{rk4_step, ThermalPlant};

const FIXED_STEP_SIZE_S: f64 = 0.1;
const WINDOW_S: f64 = 2.0;

fn main() {
    let config = PidConfigBuilder::default()
        .kp(0.02)
        .ki(0.0005)
        .sample_time(FIXED_STEP_SIZE_S)
        .output_limits(0.0, 1.0)
        .build()
        .expect("Invalid PID config");
    let mut pid = PidController::new_uninit(config);
    let mut relay = DutyCycleDriver::new(WINDOW_S);

    let plant = ThermalPlant::default();
    let mut state = plant.ambient_state();

    println!("{:>8} {:>9} {:>9} {:>7} {:>6}", "time_s", "setpoint", "temp_c", "output", "mode");
    for i in 0..12_000usize {
        let time = i as f64 * FIXED_STEP_SIZE_S;
        // Setpoint steps up after 10 minutes
        let setpoint = if time < 600.0 { 100.0 } else { 150.0 };
        let temperature = plant.h(state);

        // The operator holds the heater at 40% between 300s and 400s
        if i == 3_000 {
            pid.set_mode(ControlMode::Manual, pid.output(), temperature, setpoint);
            pid.set_manual_output(0.4);
        } else if i == 4_000 {
            pid.set_mode(ControlMode::Auto, pid.output(), temperature, setpoint);
        }

        let output = pid.update(setpoint, temperature);
        let command = relay.update(duty_fraction(output, 0.0, 1.0), FIXED_STEP_SIZE_S);
        let u = if command.is_on() { 1.0 } else { 0.0 };
        state = rk4_step(|x| plant.f(x, u), state, FIXED_STEP_SIZE_S);

        if i % 100 == 0 {
            println!(
                "{:>8.1} {:>9.1} {:>9.2} {:>7.3} {:>6?}",
                time,
                setpoint,
                temperature,
                output,
                pid.mode()
            );
        }
    }
}
