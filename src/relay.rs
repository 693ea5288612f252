// Time-proportioning (software PWM) drive for on/off actuators
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

use crate::pid::{as_f64, cast};
use crate::time::Timestamp;

/// Shortest window the duty-cycle driver accepts, in seconds.
const MIN_WINDOW: f64 = 0.01;

/// Command for a binary actuator such as a relay, SSR or heater contactor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwitchState {
    /// Actuator de-energized
    #[default]
    Off,
    /// Actuator energized
    On,
}

impl SwitchState {
    /// Returns true for [`SwitchState::On`].
    pub fn is_on(self) -> bool {
        self == SwitchState::On
    }
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on {
            SwitchState::On
        } else {
            SwitchState::Off
        }
    }
}

impl From<SwitchState> for bool {
    fn from(state: SwitchState) -> Self {
        state.is_on()
    }
}

fn clamp_unit<F: FloatCore>(value: F) -> F {
    if value > F::one() {
        F::one()
    } else if value < F::zero() {
        F::zero()
    } else {
        value
    }
}

/// Maps a controller output in `[output_min, output_max]` linearly onto a duty fraction in
/// `[0, 1]`.
///
/// Degenerate or unbounded ranges, where no linear map exists, yield zero duty.
pub fn duty_fraction<F: FloatCore>(output: F, output_min: F, output_max: F) -> F {
    let span = output_max - output_min;
    if !(span.is_finite() && span > F::zero()) {
        return F::zero();
    }
    clamp_unit((output - output_min) / span)
}

/// Drives an on/off actuator so that its average ON time follows a duty fraction.
///
/// Time is divided into fixed windows; within each window the actuator is ON for the first
/// `duty * window` seconds. The position within the window wraps by subtracting one window, so
/// overshoot carries into the next window and the long-run average stays exact under irregular
/// tick intervals.
///
/// ```rust
/// use bumpless_pid::relay::{DutyCycleDriver, SwitchState};
///
/// let mut driver = DutyCycleDriver::new(2.0);
/// assert_eq!(driver.update(0.5, 0.5), SwitchState::On);
/// assert_eq!(driver.update(0.5, 0.5), SwitchState::Off);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DutyCycleDriver<F: FloatCore> {
    window: F,
    elapsed: F,
}

impl<F: FloatCore> DutyCycleDriver<F> {
    /// Creates a driver with a window of `window` seconds, floored at 10ms.
    pub fn new(window: F) -> Self {
        let min_window: F = cast(MIN_WINDOW);
        let window = if window > min_window {
            window
        } else {
            log::warn!(
                "duty-cycle window {}s raised to {}s",
                as_f64(window),
                MIN_WINDOW
            );
            min_window
        };
        Self {
            window,
            elapsed: F::zero(),
        }
    }

    /// Returns the window length in seconds.
    pub fn window(&self) -> F {
        self.window
    }

    /// Returns the time elapsed within the current window.
    pub fn elapsed_in_window(&self) -> F {
        self.elapsed
    }

    /// Restarts the current window.
    pub fn reset(&mut self) {
        self.elapsed = F::zero();
    }

    /// Advances by `dt` seconds and returns the actuator command.
    ///
    /// `duty` is clamped into [0, 1] and a negative `dt` counts as zero.
    pub fn update(&mut self, duty: F, dt: F) -> SwitchState {
        let duty = clamp_unit(duty);
        if dt > F::zero() {
            self.elapsed = self.elapsed + dt;
        }
        if self.elapsed >= self.window {
            self.elapsed = self.elapsed - self.window;
        }
        SwitchState::from(self.elapsed < duty * self.window)
    }
}

/// A [`DutyCycleDriver`] that measures the interval between calls from timestamps.
#[derive(Copy, Clone, Debug)]
pub struct ClockedDutyCycleDriver<I: Timestamp, F: FloatCore> {
    driver: DutyCycleDriver<F>,
    last_time: Option<I>,
}

impl<I: Timestamp, F: FloatCore> ClockedDutyCycleDriver<I, F> {
    /// Creates a driver with a window of `window` seconds. See [`DutyCycleDriver::new`].
    pub fn new(window: F) -> Self {
        Self {
            driver: DutyCycleDriver::new(window),
            last_time: None,
        }
    }

    /// Returns the underlying driver.
    pub fn driver(&self) -> &DutyCycleDriver<F> {
        &self.driver
    }

    /// Returns the timestamp of the last update, if any.
    pub fn last_time(&self) -> Option<I> {
        self.last_time
    }

    /// Advances to `now` and returns the actuator command. The first call starts the window
    /// without advancing it.
    pub fn update_at(&mut self, duty: F, now: I) -> SwitchState {
        let dt = match self.last_time {
            Some(last) => cast(now.seconds_since(last)),
            None => F::zero(),
        };
        self.last_time = Some(now);
        self.driver.update(duty, dt)
    }
}
