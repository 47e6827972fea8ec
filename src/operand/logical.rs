use super::Operand;

/// Elementwise boolean operators, available on every boolean operand.
///
/// ```
/// use matmax::container::BoolVector;
/// use matmax::operand::BoolOperand;
///
/// let a = BoolVector::from(vec![true, true, false, false]);
/// let b = BoolVector::from(vec![true, false, true, false]);
/// assert_eq!(a.xor(b.clone()).to_vec(), vec![false, true, true, false]);
/// assert_eq!(a.and_not(b).to_vec(), vec![false, true, false, false]);
/// ```
///
pub trait BoolOperand: Operand<Elem = bool> {
    fn negate(&self) -> Self {
        self.map(|x| !x)
    }

    fn or(&self, other: impl Into<Self::View>) -> Self {
        self.combine_with(other).using(|a, b| a || b)
    }

    fn and(&self, other: impl Into<Self::View>) -> Self {
        self.combine_with(other).using(|a, b| a && b)
    }

    fn xor(&self, other: impl Into<Self::View>) -> Self {
        self.combine_with(other).using(|a, b| a ^ b)
    }

    fn and_not(&self, other: impl Into<Self::View>) -> Self {
        self.combine_with(other).using(|a, b| a && !b)
    }
}

impl<O: Operand<Elem = bool>> BoolOperand for O {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexed::{View1, FALSE, TRUE};

    #[test]
    fn truth_tables() {
        let alternating = View1::new(|i| i % 2 == 0);
        assert!(alternating.or(FALSE.clone()).value(0));
        assert!(!alternating.and(TRUE.clone()).value(1));
        assert!(alternating.xor(TRUE.clone()).value(1));
        assert!(!alternating.and_not(TRUE.clone()).value(0));
        assert!(alternating.negate().value(3));
    }
}
