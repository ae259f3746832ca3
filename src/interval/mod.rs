//! Everything that has to do with intervals on the diatonic/chromatic lattice.

use std::{error::Error, fmt, ops};

use num_integer::Integer;
use num_traits::Zero;
use serde_derive::{Deserialize, Serialize};

mod modular;
mod quality;

pub use modular::ModInterval;

/// The type of integer coordinates used in [Interval]s.
pub type Coeff = i64;

/// A (Western) musical interval, uniquely represented by the number of minor seconds
/// (e.g. B to C) and the number of augmented firsts (sharps, e.g. B to B#) it contains.
///
/// Intervals form a two-dimensional integer lattice: they compose by componentwise
/// addition, and they are closed under negation and integer scaling. Equality is exact
/// componentwise equality; for coarser notions of equality (octave equivalence,
/// enharmonic equivalence, ...) see [ModInterval].
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Interval {
    pub min2: Coeff,
    pub aug1: Coeff,
}

impl Interval {
    pub const fn new(min2: Coeff, aug1: Coeff) -> Interval {
        Interval { min2, aug1 }
    }

    /// The zero of the lattice, [nth][Interval::nth]`(1)`.
    pub const UNISON: Interval = Interval::new(0, 0);

    /// One augmented first, i.e. the interval from B to B#.
    pub const SHARP: Interval = Interval::new(0, 1);

    /// The perfect fifth, [nth][Interval::nth]`(5)`.
    pub const FIFTH: Interval = Interval::new(4, 3);

    /// The perfect octave, [nth][Interval::nth]`(8)`.
    pub const OCTAVE: Interval = Interval::new(7, 5);

    /// The small interval by which twelve fifths overshoot seven octaves.
    pub const PYTHAGOREAN_COMMA: Interval = Interval::new(-1, 1);

    /// The perfect or major `n`th interval.
    ///
    /// A run of seven scale degrees contains five whole and two half steps; the two
    /// floor divisions place the half steps after the third and the seventh degree.
    /// A negative `n` yields the inversion of `nth(-n)`. There is no zeroth degree.
    pub fn nth(n: Coeff) -> Result<Interval, IntervalErr> {
        if n == 0 {
            return Err(IntervalErr::ZerothDegree);
        }
        if n < 0 {
            return Ok(-Self::nth(-n)?);
        }
        let m = n - 1;
        Ok(Interval::new(
            m,
            m - (m + 4).div_floor(&7) - m.div_floor(&7),
        ))
    }

    /// The difference of the MIDI key numbers of the upper and lower note of the
    /// interval: every minor second and every augmented first spans one key.
    pub fn key_distance(&self) -> Coeff {
        self.min2 + self.aug1
    }

    /// The number of staff positions between the two notes of the interval.
    /// Accidentals don't move a note off its staff position, so only the minor
    /// seconds count.
    pub fn staff_distance(&self) -> Coeff {
        self.min2
    }
}

impl ops::Add for Interval {
    type Output = Self;

    fn add(self, x: Self) -> Self {
        Interval::new(self.min2 + x.min2, self.aug1 + x.aug1)
    }
}

impl ops::Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1
    }
}

impl ops::Sub for Interval {
    type Output = Self;

    fn sub(self, x: Self) -> Self {
        self + -x
    }
}

impl ops::Mul<Coeff> for Interval {
    type Output = Self;

    fn mul(self, k: Coeff) -> Self {
        Interval::new(k * self.min2, k * self.aug1)
    }
}

impl ops::Mul<Interval> for Coeff {
    type Output = Interval;

    fn mul(self, x: Interval) -> Interval {
        x * self
    }
}

impl Zero for Interval {
    fn zero() -> Self {
        Interval::UNISON
    }

    fn is_zero(&self) -> bool {
        *self == Interval::UNISON
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(min2 {}, aug1 {})", self.min2, self.aug1)
    }
}

#[derive(Debug)]
pub enum IntervalErr {
    /// `nth` was called with argument zero.
    ZerothDegree,
    /// A quality operation was called on an interval outside its range. Carries the
    /// name of the quality and the offending fifths-modulo-octave value.
    QualityOutOfRange(&'static str, Coeff),
    /// Two intervals with different moduli were compared.
    ModulusMismatch(Interval, Interval),
}

impl fmt::Display for IntervalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalErr::ZerothDegree => {
                write!(f, "there is no zeroth scale degree: `nth` expects a nonzero argument")
            }
            IntervalErr::QualityOutOfRange(quality, fifths) => write!(
                f,
                "the interval cannot be {}: it contains {} fifths modulo octaves",
                quality, fifths
            ),
            IntervalErr::ModulusMismatch(l, r) => write!(
                f,
                "comparing intervals with different moduli {} and {} is undefined",
                l, r
            ),
        }
    }
}

impl Error for IntervalErr {}
