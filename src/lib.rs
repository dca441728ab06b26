//! Linje (Line) library
//!
//! `linje` provides bounded line equations: a line is defined by two points,
//! evaluated at arbitrary input coordinates, and every result is clamped to
//! a configured output range. It covers the mathematical core of mapping one
//! scalar quantity onto another along a straight line, the way a sensor
//! reading is converted into an engineering value or a setpoint is scaled
//! for an actuator.
//!
//! # Core Concepts
//!
//! ## Line Equations
//!
//! A [`Line`] is built from two [`Point`]s. From them it derives the affine
//! form `y = slope * x + intercept`, guaranteed to pass through both points.
//! Construction never fails; the line can also be reconfigured in place any
//! number of times.
//!
//! ## Output Clamping
//!
//! Every evaluation result is clamped to the inclusive
//! `[min_output, max_output]` range supplied at configuration time. The
//! bounds are stored exactly as given.
//!
//! ## Vertical Lines
//!
//! When both defining points share (nearly) the same x-coordinate the slope
//! is undefined. Such a line is flagged vertical and evaluation returns the
//! line's constant x-coordinate (clamped) for every input.
//!
//! # Examples
//!
//! ## Mapping a Sensor Reading
//!
//! ```rust
//! use linje::{Line, Point};
//!
//! // Map a 4-20 mA current-loop reading to -40..85 degrees
//! let line = Line::from_points(Point::new(4.0, -40.0), Point::new(20.0, 85.0), -40.0, 85.0);
//!
//! assert_eq!(line.evaluate(12.0), 22.5);
//!
//! // Out-of-range readings saturate at the bounds
//! assert_eq!(line.evaluate(3.0), -40.0);
//! assert_eq!(line.evaluate(25.0), 85.0);
//! ```
//!
//! ## Reconfiguring in Place
//!
//! ```rust
//! use linje::{Line, Point};
//!
//! let mut line = Line::new();
//!
//! // An unconfigured line is inert and evaluates to 0
//! assert_eq!(line.evaluate(42.0), 0.0);
//!
//! line.configure(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 0.0, 10.0);
//! assert_eq!(line.evaluate(2.0), 2.0);
//! assert_eq!(line.evaluate(12.0), 10.0);
//! ```
//!
//! ## Vertical Lines
//!
//! ```rust
//! use linje::{Line, Point};
//!
//! let line = Line::from_points(Point::new(5.0, 1.0), Point::new(5.0, 9.0), 0.0, 100.0);
//!
//! assert!(line.is_vertical());
//! assert_eq!(line.evaluate(0.0), 5.0);
//! assert_eq!(line.evaluate(999.0), 5.0);
//! ```

pub mod line;

pub use line::{Line, Point};
pub use num_traits::Float;
