#![warn(missing_docs)]

//! # Bumpless PID Controller Library
//!
//! This library provides a fixed-timestep discrete PID controller for embedded closed-loop
//! actuation (temperature, motor speed, flow...), plus two helpers for driving on/off actuators.
//!
//! ## Features
//!
//! - A PID law tailored to process control:
//!   - Setpoint weighting on the proportional term to soften setpoint kicks.
//!   - Derivative on measurement, passed through a first-order low-pass filter.
//!   - Conditional anti-windup: integration stops only while it would drive a saturated output
//!     further into saturation, and resumes the moment the error reverses.
//!   - Manual/Auto modes with bumpless transfer in both directions.
//!
//! - No operation can fail: out-of-range settings are normalized instead of rejected, so a
//!   real-time loop never has to handle an error. An opt-in validating builder reports them
//!   instead.
//!
//! - Helpers for on/off actuators:
//!   - Time-proportioning (software PWM) to drive a relay from a continuous controller output.
//!   - A deadband hysteresis switch for plain thermostat-style control.
//!
//! The caller owns timing: every `update` is assumed to happen one sample time after the previous
//! one.
//!
//! ## Usage
//!
//! ### Stateful PID Controller
//!
//! ```rust
//! use bumpless_pid::pid::{ControlMode, PidConfig, PidController};
//!
//! // kp, ki, kd, sample time, output limits
//! let config = PidConfig::new(2.0, 0.5, 0.0, 1.0, 0.0, 100.0);
//! let mut pid = PidController::new_uninit(config);
//!
//! let output = pid.update(50.0, 0.0);
//! assert_eq!(output, 100.0);
//! // Saturated high with a positive error: the integrator did not wind up
//! assert_eq!(pid.integrator(), 0.0);
//!
//! // Take the wheel, then hand it back without a bump
//! pid.set_mode(ControlMode::Manual, output, 0.0, 50.0);
//! pid.set_manual_output(40.0);
//! assert_eq!(pid.update(50.0, 0.0), 40.0);
//! pid.set_mode(ControlMode::Auto, pid.output(), 0.0, 50.0);
//! ```
//!
//! ### Functional PID Controller
//!
//! The functional controller holds no running state; a `PidContext` is passed in and returned by
//! every call, which makes `compute` pure and easy to test.
//!
//! ```rust
//! use bumpless_pid::pid::{FuncPidController, PidConfigBuilder, PidContext};
//!
//! let config = PidConfigBuilder::default()
//!     .kp(1.0)
//!     .ki(0.2)
//!     .sample_time(0.1)
//!     .output_limits(-10.0, 10.0)
//!     .build()
//!     .expect("Invalid PID config");
//! let pid = FuncPidController::new(config);
//! let ctx = PidContext::new_uninit();
//!
//! let (output, ctx) = pid.compute(ctx, 2.0, 1.0);
//! assert_eq!(output, ctx.output());
//! ```
//!
//! ### Driving a relay
//!
//! ```rust
//! use bumpless_pid::hysteresis::hysteresis_switch;
//! use bumpless_pid::relay::{duty_fraction, DutyCycleDriver, SwitchState};
//!
//! let mut relay = DutyCycleDriver::new(2.0);
//! let duty = duty_fraction(25.0, 0.0, 100.0);
//! assert_eq!(relay.update(duty, 0.1), SwitchState::On);
//!
//! // Or skip the PID altogether
//! let heater = hysteresis_switch(18.0, 20.0, 1.0, SwitchState::Off);
//! assert_eq!(heater, SwitchState::On);
//! ```
#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// The PID controller, its configuration and running state.
pub mod pid;

/// Time-proportioning drive for on/off actuators.
pub mod relay;

/// Deadband on/off switching.
pub mod hysteresis;

/// Timestamps for helpers that measure their own tick interval.
pub mod time;

#[doc(hidden)]
#[cfg(feature = "simulation")]
pub mod sim;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
