//! Diatonic qualities: perfect, major, minor, augmented, and diminished intervals.
//!
//! Every quality check is decided by a single measure, the number of fifths an
//! interval contains modulo octaves. Perfect intervals sit within one fifth of the
//! unison on the circle of fifths, major and minor intervals within two to five, and
//! augmentation and diminution are defined out to five fifths on either side.

use crate::interval::{Coeff, Interval, IntervalErr};

impl Interval {
    /// The number of fifths in this interval, modulo octaves.
    ///
    /// Adding a fifth adds one, adding an octave adds nothing: the octave is seven
    /// sharps plus five minor seconds, so the coefficients (-5, 7) send it to zero.
    pub fn fifths_mod_octave(&self) -> Coeff {
        -5 * self.min2 + 7 * self.aug1
    }

    /// This interval itself, if it is perfect.
    pub fn perfect(self) -> Result<Interval, IntervalErr> {
        match self.fifths_mod_octave() {
            -1..=1 => Ok(self),
            f => Err(IntervalErr::QualityOutOfRange("perfect", f)),
        }
    }

    /// This interval itself, if it is major.
    pub fn major(self) -> Result<Interval, IntervalErr> {
        match self.fifths_mod_octave() {
            2..=5 => Ok(self),
            f => Err(IntervalErr::QualityOutOfRange("major", f)),
        }
    }

    /// The minor version of this interval, one sharp below the major one.
    pub fn minor(self) -> Result<Interval, IntervalErr> {
        match self.fifths_mod_octave() {
            2..=5 => Ok(self - Interval::SHARP),
            f => Err(IntervalErr::QualityOutOfRange("minor", f)),
        }
    }

    /// The `n`-fold augmented version of this interval.
    ///
    /// Augmentation starts from the upper of the plain variants (perfect or major), so
    /// intervals on the flat side of the circle of fifths pick up one extra sharp.
    pub fn augmented(self, n: Coeff) -> Result<Interval, IntervalErr> {
        match self.fifths_mod_octave() {
            f @ -5..=5 => {
                let carry = if f < -1 { 1 } else { 0 };
                Ok(self + Interval::SHARP * (n + carry))
            }
            f => Err(IntervalErr::QualityOutOfRange("augmented", f)),
        }
    }

    /// The `n`-fold diminished version of this interval, the mirror image of
    /// [augmented][Interval::augmented]: it starts from the lower of the plain
    /// variants, so intervals on the sharp side lose one extra sharp.
    pub fn diminished(self, n: Coeff) -> Result<Interval, IntervalErr> {
        match self.fifths_mod_octave() {
            f @ -5..=5 => {
                let carry = if f > 1 { 1 } else { 0 };
                Ok(self - Interval::SHARP * (n + carry))
            }
            f => Err(IntervalErr::QualityOutOfRange("diminished", f)),
        }
    }

    /// Turn "up a fifth" into "down a fifth".
    pub fn inverted(self) -> Interval {
        -self
    }

    /// Whether this interval points downwards.
    pub fn is_inverted(&self) -> bool {
        self.min2 < 0
    }
}

#[cfg(test)]
mod test {
    use crate::interval::Interval;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fifths_mod_octave() {
        assert_eq!(Interval::UNISON.fifths_mod_octave(), 0);
        assert_eq!(Interval::FIFTH.fifths_mod_octave(), 1);
        assert_eq!(Interval::OCTAVE.fifths_mod_octave(), 0);
        assert_eq!(Interval::SHARP.fifths_mod_octave(), 7);
    }

    #[test]
    fn test_perfect() {
        assert_eq!(Interval::nth(5).unwrap().perfect().unwrap(), Interval::FIFTH);
        assert!(Interval::nth(3).unwrap().perfect().is_err());
    }

    #[test]
    fn test_major() {
        let third = Interval::nth(3).unwrap();
        assert_eq!(third.major().unwrap(), third);
        assert!(Interval::nth(4).unwrap().major().is_err());
    }

    #[test]
    fn test_minor() {
        let third = Interval::nth(3).unwrap();
        assert_eq!(third.minor().unwrap() + third, Interval::FIFTH);
        assert!(Interval::nth(4).unwrap().minor().is_err());
    }

    #[test]
    fn test_invert() {
        for n in 2..16 {
            let nth = Interval::nth(n).unwrap();
            assert!(!nth.is_inverted(), "n={}", n);
            assert!(nth.inverted().is_inverted(), "n={}", n);
            assert!(!nth.inverted().inverted().is_inverted(), "n={}", n);
        }
        // downwards in pitch, but not in staff position
        assert!(!Interval::new(1, -1).is_inverted());
    }

    #[test]
    fn test_diminished() {
        let third = Interval::nth(3).unwrap();
        assert_eq!(third.diminished(1).unwrap(), Interval::new(2, 0));
        assert_eq!(third.diminished(1).unwrap().inverted(), Interval::new(-2, 0));
    }

    #[test]
    fn test_augmented() {
        let fourth = Interval::nth(4).unwrap();
        assert_eq!(fourth.augmented(2).unwrap(), Interval::new(3, 4));
        assert_eq!(
            fourth.augmented(2).unwrap(),
            Interval::nth(6).unwrap().augmented(1).unwrap()
                - Interval::nth(3).unwrap().minor().unwrap()
        );
    }

    #[test]
    fn test_diminished_augmented() {
        for n in [2, 3, 6, 7, 9] {
            let nth = Interval::nth(n).unwrap();
            let nth_inv = nth.inverted();
            assert_eq!(
                nth.inverted().augmented(1).unwrap(),
                nth.diminished(1).unwrap().inverted(),
                "n={}",
                n
            );
            assert_eq!(
                nth_inv.inverted().augmented(1).unwrap(),
                nth_inv.diminished(1).unwrap().inverted(),
                "n={}, inverted",
                n
            );
        }
    }

    #[test]
    fn test_augmented_diminished() {
        for n in [2, 3, 6, 7, 9] {
            let nth = Interval::nth(n).unwrap();
            let nth_inv = nth.inverted();
            assert_eq!(
                nth.inverted().diminished(1).unwrap(),
                nth.augmented(1).unwrap().inverted(),
                "n={}",
                n
            );
            assert_eq!(
                nth_inv.inverted().diminished(1).unwrap(),
                nth_inv.augmented(1).unwrap().inverted(),
                "n={}, inverted",
                n
            );
        }
    }
}
