// Fixed-timestep PID controller with bumpless Manual/Auto transfer
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
use num_traits::NumCast;

/// Sample time substituted when a non-positive one is supplied.
const FALLBACK_SAMPLE_TIME: f64 = 0.001;

/// Default time constant of the derivative low-pass filter, in seconds.
const DEFAULT_FILTER_TC: f64 = 0.01;

/// Converts a literal into the controller's float type. Infallible for `f32` and `f64`.
pub(crate) fn cast<F: FloatCore>(value: f64) -> F {
    <F as NumCast>::from(value).unwrap_or_else(F::nan)
}

/// Lossy view of a float for log messages.
pub(crate) fn as_f64<F: FloatCore>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn clamp<F: FloatCore>(value: F, lower: F, upper: F) -> F {
    if value > upper {
        upper
    } else if value < lower {
        lower
    } else {
        value
    }
}

fn derivative_alpha<F: FloatCore>(sample_time: F, filter_tc: F) -> F {
    sample_time / (filter_tc + sample_time)
}

fn coerce_sample_time<F: FloatCore>(sample_time: F) -> F {
    if sample_time > F::zero() {
        sample_time
    } else {
        log::warn!(
            "non-positive sample time {}s coerced to {}s",
            as_f64(sample_time),
            FALLBACK_SAMPLE_TIME
        );
        cast(FALLBACK_SAMPLE_TIME)
    }
}

/// Tunings, limits and filter settings of a PID controller.
///
/// Every setter normalizes its input instead of rejecting it, so a configuration is always usable
/// by a real-time loop. Use [`PidConfigBuilder`] to have questionable values reported instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidConfig<F: FloatCore> {
    /// Proportional gain.
    kp: F,

    /// Integral gain, per second.
    ki: F,

    /// Derivative gain, in seconds.
    kd: F,

    /// Fixed interval between two calls to `compute`, in seconds. Always positive.
    sample_time: F,

    /// Fraction of the setpoint entering the proportional term, in [0, 1].
    setpoint_weight: F,

    /// Time constant of the low-pass filter on the derivative term, in seconds. Never negative.
    filter_tc: F,

    output_min: F,
    output_max: F,

    /// sample_time / (filter_tc + sample_time), kept in sync by the setters
    d_alpha: F,
}

impl<F: FloatCore> Default for PidConfig<F> {
    /// Unit proportional gain, no integral or derivative action, 10ms sample time and unbounded
    /// output.
    fn default() -> Self {
        let sample_time = cast(0.01);
        let filter_tc = cast(DEFAULT_FILTER_TC);
        PidConfig {
            kp: F::one(),
            ki: F::zero(),
            kd: F::zero(),
            sample_time,
            setpoint_weight: F::one(),
            filter_tc,
            output_min: F::neg_infinity(),
            output_max: F::infinity(),
            d_alpha: derivative_alpha(sample_time, filter_tc),
        }
    }
}

impl<F: FloatCore> PidConfig<F> {
    /// Creates a configuration from tunings and output limits.
    ///
    /// A non-positive `sample_time` is replaced by 1ms and reversed limits are swapped. The
    /// setpoint weight starts at 1 and the derivative filter time constant at 10ms.
    pub fn new(kp: F, ki: F, kd: F, sample_time: F, output_min: F, output_max: F) -> Self {
        let mut config = PidConfig {
            kp,
            ki,
            kd,
            ..Self::default()
        };
        config.set_sample_time(sample_time);
        config.set_output_limits(output_min, output_max);
        config
    }

    /// Returns the proportional gain.
    pub fn kp(&self) -> F {
        self.kp
    }

    /// Returns the integral gain, per second.
    pub fn ki(&self) -> F {
        self.ki
    }

    /// Returns the derivative gain, in seconds.
    pub fn kd(&self) -> F {
        self.kd
    }

    /// Convenience method that returns the proportional, integral, and derivative gains together as a tuple.
    pub fn gains(&self) -> (F, F, F) {
        (self.kp, self.ki, self.kd)
    }

    /// Returns the sample time in seconds.
    pub fn sample_time(&self) -> F {
        self.sample_time
    }

    /// Returns the setpoint weight (beta) of the proportional term.
    pub fn setpoint_weight(&self) -> F {
        self.setpoint_weight
    }

    /// Returns the time constant of the derivative low-pass filter.
    pub fn filter_tc(&self) -> F {
        self.filter_tc
    }

    /// Returns the smoothing coefficient of the derivative filter, `Ts / (tau + Ts)`.
    ///
    /// It lies in (0, 1]; a value of 1 means the derivative is not filtered at all.
    pub fn derivative_alpha(&self) -> F {
        self.d_alpha
    }

    /// Returns the minimum output limit.
    pub fn output_min(&self) -> F {
        self.output_min
    }

    /// Returns the maximum output limit.
    pub fn output_max(&self) -> F {
        self.output_max
    }

    /// Clamps `value` into `[output_min, output_max]`.
    pub fn clamp_output(&self, value: F) -> F {
        clamp(value, self.output_min, self.output_max)
    }

    /// Sets the proportional gain.
    pub fn set_kp(&mut self, kp: F) {
        self.kp = kp;
    }

    /// Sets the integral gain, per second.
    ///
    /// The integrator stores the accumulated term in output units, so changing this gain changes
    /// only the rate of future accumulation and never bumps the output.
    pub fn set_ki(&mut self, ki: F) {
        self.ki = ki;
    }

    /// Sets the derivative gain, in seconds.
    pub fn set_kd(&mut self, kd: F) {
        self.kd = kd;
    }

    /// Convenience method to set the proportional, integral, and derivative gains together
    pub fn set_gains(&mut self, kp: F, ki: F, kd: F) {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
    }

    /// Sets the sample time and refreshes the derivative filter coefficient.
    ///
    /// A non-positive sample time is replaced by 1ms.
    pub fn set_sample_time(&mut self, sample_time: F) {
        self.sample_time = coerce_sample_time(sample_time);
        self.d_alpha = derivative_alpha(self.sample_time, self.filter_tc);
    }

    /// Sets the setpoint weight, clamped into [0, 1]. NaN restores the default weight of 1.
    ///
    /// A weight below 1 softens the proportional kick on setpoint steps, while the integral term
    /// still acts on the full error.
    pub fn set_setpoint_weight(&mut self, setpoint_weight: F) {
        self.setpoint_weight = if setpoint_weight.is_nan() {
            F::one()
        } else {
            clamp(setpoint_weight, F::zero(), F::one())
        };
    }

    /// Sets the derivative filter time constant, floored at zero, and refreshes the filter
    /// coefficient. Zero (or NaN) disables filtering.
    pub fn set_filter_tc(&mut self, filter_tc: F) {
        self.filter_tc = if filter_tc >= F::zero() {
            filter_tc
        } else {
            F::zero()
        };
        self.d_alpha = derivative_alpha(self.sample_time, self.filter_tc);
    }

    /// Sets the setpoint weight and the derivative filter time constant together. Takes effect on
    /// the next update.
    pub fn set_advanced(&mut self, setpoint_weight: F, filter_tc: F) {
        self.set_setpoint_weight(setpoint_weight);
        self.set_filter_tc(filter_tc);
    }

    // Not public: changing limits must also reclamp the integrator held by a context, which the
    // controllers take care of.
    fn set_output_limits(&mut self, output_min: F, output_max: F) {
        if output_min > output_max {
            log::warn!(
                "reversed output limits [{}, {}] swapped",
                as_f64(output_min),
                as_f64(output_max)
            );
            self.output_min = output_max;
            self.output_max = output_min;
        } else {
            self.output_min = output_min;
            self.output_max = output_max;
        }
    }
}

/// Reasons [`PidConfigBuilder::build`] refuses a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum PidConfigError {
    /// The proportional gain is NaN or infinite.
    #[cfg_attr(feature = "std", error("proportional gain must be finite"))]
    InvalidProportionalGain,

    /// The integral gain is NaN or infinite.
    #[cfg_attr(feature = "std", error("integral gain must be finite"))]
    InvalidIntegralGain,

    /// The derivative gain is NaN or infinite.
    #[cfg_attr(feature = "std", error("derivative gain must be finite"))]
    InvalidDerivativeGain,

    /// The sample time is not a positive, finite number of seconds.
    #[cfg_attr(feature = "std", error("sample time must be positive and finite"))]
    InvalidSampleTime,

    /// The setpoint weight lies outside [0, 1].
    #[cfg_attr(feature = "std", error("setpoint weight must lie in [0, 1]"))]
    InvalidSetpointWeight,

    /// The derivative filter time constant is negative or not finite.
    #[cfg_attr(
        feature = "std",
        error("filter time constant must be non-negative and finite")
    )]
    InvalidFilterTimeConstant,

    /// A limit is NaN, or the minimum exceeds the maximum.
    #[cfg_attr(feature = "std", error("output limits must be ordered and not NaN"))]
    InvalidOutputLimits,
}

/// Builds a [`PidConfig`], rejecting values that [`PidConfig`]'s setters would otherwise silently
/// normalize.
///
/// ```rust
/// use bumpless_pid::pid::{PidConfigBuilder, PidConfigError};
///
/// let config = PidConfigBuilder::default()
///     .kp(2.0)
///     .ki(0.5)
///     .sample_time(0.1)
///     .output_limits(0.0, 100.0)
///     .build()
///     .expect("Invalid PID config");
/// assert_eq!(config.output_max(), 100.0);
///
/// let reversed = PidConfigBuilder::default().output_limits(1.0, -1.0).build();
/// assert_eq!(reversed.map(|_| ()), Err(PidConfigError::InvalidOutputLimits));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct PidConfigBuilder<F: FloatCore> {
    kp: F,
    ki: F,
    kd: F,
    sample_time: F,
    setpoint_weight: F,
    filter_tc: F,
    output_min: F,
    output_max: F,
}

impl<F: FloatCore> Default for PidConfigBuilder<F> {
    fn default() -> Self {
        let config = PidConfig::default();
        PidConfigBuilder {
            kp: config.kp,
            ki: config.ki,
            kd: config.kd,
            sample_time: config.sample_time,
            setpoint_weight: config.setpoint_weight,
            filter_tc: config.filter_tc,
            output_min: config.output_min,
            output_max: config.output_max,
        }
    }
}

impl<F: FloatCore> PidConfigBuilder<F> {
    /// Sets the proportional gain.
    pub fn kp(mut self, kp: F) -> Self {
        self.kp = kp;
        self
    }

    /// Sets the integral gain, per second.
    pub fn ki(mut self, ki: F) -> Self {
        self.ki = ki;
        self
    }

    /// Sets the derivative gain, in seconds.
    pub fn kd(mut self, kd: F) -> Self {
        self.kd = kd;
        self
    }

    /// Sets the sample time, in seconds.
    pub fn sample_time(mut self, sample_time: F) -> Self {
        self.sample_time = sample_time;
        self
    }

    /// Sets the setpoint weight of the proportional term.
    pub fn setpoint_weight(mut self, setpoint_weight: F) -> Self {
        self.setpoint_weight = setpoint_weight;
        self
    }

    /// Sets the derivative filter time constant, in seconds.
    pub fn filter_tc(mut self, filter_tc: F) -> Self {
        self.filter_tc = filter_tc;
        self
    }

    /// Sets the output limits. Infinite limits leave that side unbounded.
    pub fn output_limits(mut self, output_min: F, output_max: F) -> Self {
        self.output_min = output_min;
        self.output_max = output_max;
        self
    }

    /// Validates every field and assembles the configuration.
    pub fn build(self) -> Result<PidConfig<F>, PidConfigError> {
        if !self.kp.is_finite() {
            return Err(PidConfigError::InvalidProportionalGain);
        }
        if !self.ki.is_finite() {
            return Err(PidConfigError::InvalidIntegralGain);
        }
        if !self.kd.is_finite() {
            return Err(PidConfigError::InvalidDerivativeGain);
        }
        if !(self.sample_time.is_finite() && self.sample_time > F::zero()) {
            return Err(PidConfigError::InvalidSampleTime);
        }
        if !(self.setpoint_weight >= F::zero() && self.setpoint_weight <= F::one()) {
            return Err(PidConfigError::InvalidSetpointWeight);
        }
        if !(self.filter_tc.is_finite() && self.filter_tc >= F::zero()) {
            return Err(PidConfigError::InvalidFilterTimeConstant);
        }
        // NaN fails the comparison as well
        if !(self.output_min <= self.output_max) {
            return Err(PidConfigError::InvalidOutputLimits);
        }

        let mut config = PidConfig::new(
            self.kp,
            self.ki,
            self.kd,
            self.sample_time,
            self.output_min,
            self.output_max,
        );
        config.set_advanced(self.setpoint_weight, self.filter_tc);
        Ok(config)
    }
}

/// Whether the controller computes its output or passes through an operator-commanded one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    /// The output is held at the operator's manual output. The derivative filter keeps tracking
    /// the measurement so that switching back to `Auto` is bumpless.
    Manual,

    /// The output is computed by the PID law.
    #[default]
    Auto,
}

/// Running state of a PID controller: integrator, derivative filter, measurement history and mode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidContext<F: FloatCore> {
    /// Accumulated integral term, in output units
    integrator: F,

    /// Filtered derivative term; already includes the derivative gain and sign
    d_term: F,

    prev_measurement: F,
    last_output: F,
    manual_output: F,
    mode: ControlMode,

    /// Set until an update has seeded the measurement history
    first_update: bool,
}

impl<F: FloatCore> Default for PidContext<F> {
    fn default() -> Self {
        Self::new_uninit()
    }
}

impl<F: FloatCore> PidContext<F> {
    /// Creates a zeroed context in `Auto` mode. The first update seeds the measurement history.
    pub fn new_uninit() -> Self {
        Self {
            integrator: F::zero(),
            d_term: F::zero(),
            prev_measurement: F::zero(),
            last_output: F::zero(),
            manual_output: F::zero(),
            mode: ControlMode::Auto,
            first_update: true,
        }
    }

    /// Creates a context whose integrator holds `output`, as if [`PidContext::reset`] had just
    /// been called.
    ///
    /// This lets a controller take over a plant already in steady state: with zero error, the
    /// first output reproduces `output`.
    pub fn new(measurement: F, output: F) -> Self {
        let mut ctx = Self::new_uninit();
        ctx.reset(measurement, output);
        ctx
    }

    /// Hard reset: the integrator holds `output`, the derivative history is discarded.
    ///
    /// Use this after a setpoint discontinuity whose integral and derivative history should not
    /// fight the new operating point. The mode and manual output are kept.
    pub fn reset(&mut self, measurement: F, output: F) {
        log::debug!(
            "resetting PID state: measurement {}, output {}",
            as_f64(measurement),
            as_f64(output)
        );
        self.integrator = output;
        self.d_term = F::zero();
        self.prev_measurement = measurement;
        self.last_output = output;
        self.first_update = true;
    }

    /// Returns the accumulated integral term.
    pub fn integrator(&self) -> F {
        self.integrator
    }

    /// Returns the filtered derivative term, gain and sign included.
    pub fn derivative_term(&self) -> F {
        self.d_term
    }

    /// Returns the measurement seen by the last update or mode transfer.
    pub fn last_measurement(&self) -> F {
        self.prev_measurement
    }

    /// Returns the output of the last update.
    pub fn output(&self) -> F {
        self.last_output
    }

    /// Returns the output held while in `Manual` mode.
    pub fn manual_output(&self) -> F {
        self.manual_output
    }

    /// Sets the output held while in `Manual` mode. It is clamped into the output limits on the
    /// next update.
    pub fn set_manual_output(&mut self, manual_output: F) {
        self.manual_output = manual_output;
    }

    /// Returns the current mode.
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Returns true once an update or a transfer to `Auto` has seeded the measurement history.
    pub fn is_initialized(&self) -> bool {
        !self.first_update
    }

    /// Runs the derivative-on-measurement filter. Called every tick in both modes.
    fn track_derivative(&mut self, config: &PidConfig<F>, measurement: F) {
        if self.first_update {
            // No usable history yet: seed it so the first derivative is exactly zero
            self.d_term = F::zero();
            self.prev_measurement = measurement;
            self.first_update = false;
        }
        let raw = -config.kd * (measurement - self.prev_measurement) / config.sample_time;
        self.d_term = self.d_term + config.d_alpha * (raw - self.d_term);
        self.prev_measurement = measurement;
    }

    fn clamp_integrator(&mut self, config: &PidConfig<F>) {
        self.integrator = config.clamp_output(self.integrator);
    }
}

/// A functional implementation of the PID controller.
///
/// The controller owns only its configuration. The running state lives in a [`PidContext`] that
/// is passed into and returned from every operation, so `compute` is functionally pure.
#[derive(Copy, Clone, Debug)]
pub struct FuncPidController<F: FloatCore> {
    config: PidConfig<F>,
}

impl<F: FloatCore> FuncPidController<F> {
    /// Creates a controller with the given configuration.
    pub fn new(config: PidConfig<F>) -> Self {
        FuncPidController { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PidConfig<F> {
        &self.config
    }

    /// Returns the configuration for retuning between ticks. Output limits are changed through
    /// [`FuncPidController::set_output_limits`] instead, since they also constrain the context.
    pub fn config_mut(&mut self) -> &mut PidConfig<F> {
        &mut self.config
    }

    /// Changes the output limits, swapping them if reversed, and reclamps the integrator of `ctx`
    /// into the new range so the next output does not jump.
    pub fn set_output_limits(
        &mut self,
        mut ctx: PidContext<F>,
        output_min: F,
        output_max: F,
    ) -> PidContext<F> {
        self.config.set_output_limits(output_min, output_max);
        log::debug!(
            "output limits set to [{}, {}]",
            as_f64(self.config.output_min),
            as_f64(self.config.output_max)
        );
        ctx.clamp_integrator(&self.config);
        ctx
    }

    /// Switches between `Manual` and `Auto` without bumping the output.
    ///
    /// - `Auto` to `Manual`: the manual output freezes at `current_output`.
    /// - `Manual` to `Auto`: the integrator is back-solved so that `P + I + D` reproduces the
    ///   manual output, where `P` uses the current gains and `D` is the derivative term tracked
    ///   during `Manual` mode. The quality of the transfer therefore improves with the time spent
    ///   in `Manual` mode; right after construction `D` is still zero.
    /// - Same mode: nothing changes.
    ///
    /// # Arguments
    /// - `mode`: The mode to switch to.
    /// - `current_output`: The output currently applied to the plant.
    /// - `current_measurement`: The current process measurement.
    /// - `setpoint`: The setpoint the `Auto` mode will track.
    pub fn set_mode(
        &self,
        mut ctx: PidContext<F>,
        mode: ControlMode,
        current_output: F,
        current_measurement: F,
        setpoint: F,
    ) -> PidContext<F> {
        let config = &self.config;
        match (ctx.mode, mode) {
            (ControlMode::Auto, ControlMode::Manual) => {
                ctx.manual_output = current_output;
                log::debug!("auto -> manual, holding output {}", as_f64(current_output));
            }
            (ControlMode::Manual, ControlMode::Auto) => {
                let p = config.kp * (config.setpoint_weight * setpoint - current_measurement);
                ctx.integrator = config.clamp_output(ctx.manual_output - (p + ctx.d_term));
                ctx.prev_measurement = current_measurement;
                ctx.first_update = false;
                log::debug!(
                    "manual -> auto, integrator back-solved to {}",
                    as_f64(ctx.integrator)
                );
            }
            _ => {}
        }
        ctx.mode = mode;
        ctx
    }

    /// Computes one control step. Call once per sample time.
    ///
    /// In `Manual` mode the derivative filter keeps tracking the measurement and the clamped
    /// manual output is returned; the integrator is untouched. In `Auto` mode the output is
    ///
    /// `u = Kp (beta r - y) + I + D`, clamped into the output limits,
    ///
    /// where `D` is the filtered derivative of the measurement and `I` integrates `Ki Ts e` unless
    /// the output is already saturated in the direction the error pushes it.
    ///
    /// # Arguments
    /// - `ctx`: The running state.
    /// - `setpoint`: The reference `r`.
    /// - `measurement`: The process measurement `y`.
    ///
    /// # Returns
    /// The clamped output and the updated running state.
    pub fn compute(&self, mut ctx: PidContext<F>, setpoint: F, measurement: F) -> (F, PidContext<F>) {
        let config = &self.config;
        ctx.track_derivative(config, measurement);

        if ctx.mode == ControlMode::Manual {
            ctx.manual_output = config.clamp_output(ctx.manual_output);
            ctx.last_output = ctx.manual_output;
            return (ctx.manual_output, ctx);
        }

        let p = config.kp * (config.setpoint_weight * setpoint - measurement);
        let d = ctx.d_term;

        // Conditional integration: hold the integrator only if it would push an already
        // saturated output further into saturation
        let error = setpoint - measurement;
        let candidate = ctx.integrator + config.ki * config.sample_time * error;
        let tentative = p + candidate + d;
        let winding_up = (tentative > config.output_max && error > F::zero())
            || (tentative < config.output_min && error < F::zero());
        if !winding_up {
            ctx.integrator = candidate;
        }

        let output = config.clamp_output(p + ctx.integrator + d);
        ctx.last_output = output;
        (output, ctx)
    }
}

/// A stateful implementation of the PID controller.
///
/// The controller owns its [`PidContext`], which saves passing it around at the cost of making
/// `update` impure. One instance serves exactly one control loop; it is not internally
/// synchronized.
#[derive(Copy, Clone, Debug)]
pub struct PidController<F: FloatCore> {
    ctx: PidContext<F>,
    controller: FuncPidController<F>,
}

impl<F: FloatCore> PidController<F> {
    /// Creates a controller whose integrator already holds `output`, for taking over a plant
    /// sitting at `measurement`. See [`PidContext::new`].
    pub fn new(config: PidConfig<F>, measurement: F, output: F) -> Self {
        Self {
            ctx: PidContext::new(measurement, output),
            controller: FuncPidController::new(config),
        }
    }

    /// Creates a controller with zeroed state in `Auto` mode.
    pub fn new_uninit(config: PidConfig<F>) -> Self {
        Self {
            ctx: PidContext::new_uninit(),
            controller: FuncPidController::new(config),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PidConfig<F> {
        self.controller.config()
    }

    /// Returns the configuration for retuning between ticks.
    pub fn config_mut(&mut self) -> &mut PidConfig<F> {
        self.controller.config_mut()
    }

    /// Returns the running state.
    pub fn context(&self) -> &PidContext<F> {
        &self.ctx
    }

    /// Computes one control step. See [`FuncPidController::compute`].
    pub fn update(&mut self, setpoint: F, measurement: F) -> F {
        let (output, ctx) = self.controller.compute(self.ctx, setpoint, measurement);
        self.ctx = ctx;
        output
    }

    /// Sets the setpoint weight and derivative filter time constant. See
    /// [`PidConfig::set_advanced`].
    pub fn set_advanced(&mut self, setpoint_weight: F, filter_tc: F) {
        self.controller.config_mut().set_advanced(setpoint_weight, filter_tc);
    }

    /// Changes the output limits and reclamps the integrator. See
    /// [`FuncPidController::set_output_limits`].
    pub fn set_output_limits(&mut self, output_min: F, output_max: F) {
        self.ctx = self
            .controller
            .set_output_limits(self.ctx, output_min, output_max);
    }

    /// Switches mode without bumping the output. See [`FuncPidController::set_mode`].
    pub fn set_mode(
        &mut self,
        mode: ControlMode,
        current_output: F,
        current_measurement: F,
        setpoint: F,
    ) {
        self.ctx = self.controller.set_mode(
            self.ctx,
            mode,
            current_output,
            current_measurement,
            setpoint,
        );
    }

    /// Hard reset of the running state. See [`PidContext::reset`].
    pub fn reset(&mut self, measurement: F, output: F) {
        self.ctx.reset(measurement, output);
    }

    /// Sets the output held while in `Manual` mode.
    pub fn set_manual_output(&mut self, manual_output: F) {
        self.ctx.set_manual_output(manual_output);
    }

    /// Returns the output of the last update.
    pub fn output(&self) -> F {
        self.ctx.output()
    }

    /// Returns the accumulated integral term.
    pub fn integrator(&self) -> F {
        self.ctx.integrator()
    }

    /// Returns the filtered derivative term.
    pub fn derivative_term(&self) -> F {
        self.ctx.derivative_term()
    }

    /// Returns the output held while in `Manual` mode.
    pub fn manual_output(&self) -> F {
        self.ctx.manual_output()
    }

    /// Returns the current mode.
    pub fn mode(&self) -> ControlMode {
        self.ctx.mode()
    }

    /// Returns true once the measurement history has been seeded.
    pub fn is_initialized(&self) -> bool {
        self.ctx.is_initialized()
    }
}
