//! Macaulay singularity functions
//!
//! Shear, moment and deflection along a beam are piecewise polynomials whose
//! pieces start at load and support positions. Sums of Macaulay terms
//! `c * <x - a>^n` represent them exactly: evaluation is a clamped power, and
//! integration raises the exponent termwise, so the double integration of the
//! moment curve for deflection stays closed-form.

use serde::{Deserialize, Serialize};

/// Which one-sided limit to take at a term's offset.
///
/// `<x - a>^0` steps from 0 to 1 at `x = a`; the left limit keeps the value
/// before the step so shear jumps at point loads can be reported on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A single Macaulay term `coeff * <x - offset>^power`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingularityTerm {
    pub coeff: f64,
    pub offset: f64,
    pub power: u32,
}

impl SingularityTerm {
    pub fn new(coeff: f64, offset: f64, power: u32) -> Self {
        Self {
            coeff,
            offset,
            power,
        }
    }

    /// Evaluate the term at `x`, taking the given one-sided limit at the offset
    pub fn value(&self, x: f64, side: Side) -> f64 {
        let t = x - self.offset;
        let active = match side {
            Side::Left => t > 0.0,
            Side::Right => t >= 0.0,
        };
        if !active {
            return 0.0;
        }
        match self.power {
            0 => self.coeff,
            p => self.coeff * t.powi(p as i32),
        }
    }

    /// Antiderivative: `c <x-a>^n` integrates to `c/(n+1) <x-a>^(n+1)`
    pub fn integral(&self) -> Self {
        Self {
            coeff: self.coeff / (self.power as f64 + 1.0),
            offset: self.offset,
            power: self.power + 1,
        }
    }
}

/// A sum of Macaulay terms: one piecewise-polynomial function over the beam
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingularitySeries {
    terms: Vec<SingularityTerm>,
}

impl SingularitySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term; zero coefficients are dropped
    pub fn push(&mut self, coeff: f64, offset: f64, power: u32) {
        if coeff != 0.0 {
            self.terms.push(SingularityTerm::new(coeff, offset, power));
        }
    }

    pub fn terms(&self) -> &[SingularityTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate the series at `x`, taking the given one-sided limit
    pub fn eval(&self, x: f64, side: Side) -> f64 {
        self.terms.iter().map(|t| t.value(x, side)).sum()
    }

    /// Termwise antiderivative with zero value at `x <= min(offsets)`
    pub fn integral(&self) -> Self {
        Self {
            terms: self.terms.iter().map(SingularityTerm::integral).collect(),
        }
    }

    /// Multiply every coefficient by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| SingularityTerm::new(t.coeff * factor, t.offset, t.power))
                .collect(),
        }
    }

    /// Append all terms of `other`
    pub fn extend(&mut self, other: &Self) {
        self.terms.extend_from_slice(&other.terms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn step_term_is_one_sided() {
        let step = SingularityTerm::new(5.0, 2.0, 0);
        assert_eq!(step.value(1.9, Side::Right), 0.0);
        assert_eq!(step.value(2.0, Side::Left), 0.0);
        assert_eq!(step.value(2.0, Side::Right), 5.0);
        assert_eq!(step.value(2.1, Side::Left), 5.0);
    }

    #[test]
    fn ramp_term_is_continuous_at_offset() {
        let ramp = SingularityTerm::new(3.0, 1.0, 1);
        assert_eq!(ramp.value(1.0, Side::Left), 0.0);
        assert_eq!(ramp.value(1.0, Side::Right), 0.0);
        assert_relative_eq!(ramp.value(3.0, Side::Right), 6.0);
    }

    #[test]
    fn integral_raises_power() {
        // <x-1>^0 integrates to <x-1>^1, then to <x-1>^2 / 2
        let step = SingularityTerm::new(4.0, 1.0, 0);
        let ramp = step.integral();
        assert_eq!(ramp.power, 1);
        assert_relative_eq!(ramp.value(3.0, Side::Right), 8.0);

        let quad = ramp.integral();
        assert_eq!(quad.power, 2);
        assert_relative_eq!(quad.coeff, 2.0);
        assert_relative_eq!(quad.value(3.0, Side::Right), 8.0);
    }

    #[test]
    fn series_sums_terms() {
        let mut s = SingularitySeries::new();
        s.push(2.0, 0.0, 0);
        s.push(-3.0, 1.0, 0);
        s.push(0.0, 5.0, 2); // dropped

        assert_eq!(s.terms().len(), 2);
        assert_relative_eq!(s.eval(0.5, Side::Right), 2.0);
        assert_relative_eq!(s.eval(2.0, Side::Right), -1.0);
    }

    #[test]
    fn terminated_ramp_pair_cancels() {
        // Uniform 2.0 over [1, 3] written as a start ramp and a canceling end
        // ramp: the sum must be constant slope inside and flat outside.
        let mut v = SingularitySeries::new();
        v.push(-2.0, 1.0, 1);
        v.push(2.0, 3.0, 1);

        assert_relative_eq!(v.eval(2.0, Side::Right), -2.0);
        assert_relative_eq!(v.eval(3.0, Side::Right), -4.0);
        assert_relative_eq!(v.eval(10.0, Side::Right), -4.0);
    }
}
