//! Interval equality modulo a sub-lattice.
//!
//! Attaching a modulus interval `m` to an interval declares all integer multiples of
//! `m` equivalent to the unison. Two intervals carrying the same modulus are equal iff
//! their difference lies on the line through the origin and `m` in the lattice.

use std::fmt;

use num_traits::Zero;
use serde_derive::{Deserialize, Serialize};

use crate::interval::{Coeff, Interval, IntervalErr};

/// An [Interval] together with a modulus.
///
/// There are no nested moduli: a [ModInterval] cannot be taken modulo a second
/// interval. What that should mean is unclear, so the type doesn't offer it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModInterval {
    interval: Interval,
    modulus: Interval,
}

impl Interval {
    /// Declare all integer multiples of `modulus` equivalent to the unison.
    pub fn modulo(self, modulus: Interval) -> ModInterval {
        ModInterval {
            interval: self,
            modulus,
        }
    }

    /// Octave equivalence: intervals an octave apart are identified, as in pitch-class
    /// arithmetic.
    pub fn mod_octave(self) -> ModInterval {
        self.modulo(Interval::OCTAVE)
    }

    /// Enharmonic equivalence in standard twelve-step tuning. The modulus is the
    /// [Pythagorean comma][Interval::PYTHAGOREAN_COMMA], so G# and Ab name the same
    /// pitch class.
    pub fn mod_enharmonic(self) -> ModInterval {
        self.mod_enharmonic_steps(12, 7)
    }

    /// Enharmonic equivalence in a tuning with `octave_steps` equal steps to the
    /// octave, `fifth_steps` of which approximate the fifth.
    pub fn mod_enharmonic_steps(self, octave_steps: Coeff, fifth_steps: Coeff) -> ModInterval {
        self.modulo(Interval::new(
            4 * octave_steps - 7 * fifth_steps,
            3 * octave_steps - 5 * fifth_steps,
        ))
    }

    /// Equivalence modulo one accidental: on a seven-note scale, B#, B, and Bb all
    /// collapse into one.
    pub fn mod_accidental(self) -> ModInterval {
        self.modulo(Interval::SHARP)
    }
}

impl ModInterval {
    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn modulus(&self) -> Interval {
        self.modulus
    }

    /// Modulus-aware equality. The two sides must carry the same modulus; comparing
    /// across moduli is undefined and an error.
    ///
    /// With the zero modulus the sub-lattice is just the origin, and equality
    /// degenerates to exact componentwise equality. Otherwise, the difference of the
    /// two intervals must be collinear with the modulus, which the cross product
    /// detects without any division.
    pub fn try_eq(&self, other: &ModInterval) -> Result<bool, IntervalErr> {
        if self.modulus != other.modulus {
            return Err(IntervalErr::ModulusMismatch(self.modulus, other.modulus));
        }
        let d = other.interval - self.interval;
        if self.modulus.is_zero() {
            return Ok(d.is_zero());
        }
        Ok(d.min2 * self.modulus.aug1 - d.aug1 * self.modulus.min2 == 0)
    }
}

impl fmt::Display for ModInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mod {}", self.interval, self.modulus)
    }
}
