use super::{Matrix, Vector};
use crate::indexed::{Element, Index};

/// Borrowing iterator over a vector's values in index order.
pub struct Iter<'a, T: Element> {
    vector: &'a Vector<T>,
    next: Index,
}

impl<'a, T: Element> Iter<'a, T> {
    pub(super) fn new(vector: &'a Vector<T>) -> Self {
        Iter { vector, next: 0 }
    }
}

impl<'a, T: Element> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next >= self.vector.len() {
            return None;
        }
        let value = self.vector.value(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.vector.len() - self.next) as usize;
        (n, Some(n))
    }
}

impl<'a, T: Element> ExactSizeIterator for Iter<'a, T> {}

/// Owning iterator over a vector's values in index order.
pub struct IntoIter<T: Element> {
    vector: Vector<T>,
    next: Index,
}

impl<T: Element> IntoIter<T> {
    pub(super) fn new(vector: Vector<T>) -> Self {
        IntoIter { vector, next: 0 }
    }
}

impl<T: Element> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next >= self.vector.len() {
            return None;
        }
        let value = self.vector.value(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.vector.len() - self.next) as usize;
        (n, Some(n))
    }
}

impl<T: Element> ExactSizeIterator for IntoIter<T> {}

/// Iterator over a matrix's cells in row-major order.
pub struct Cells<'a, T: Element> {
    matrix: &'a Matrix<T>,
    row: Index,
    column: Index,
}

impl<'a, T: Element> Cells<'a, T> {
    pub(super) fn new(matrix: &'a Matrix<T>) -> Self {
        Cells {
            matrix,
            row: 0,
            column: 0,
        }
    }
}

impl<'a, T: Element> Iterator for Cells<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.matrix.columns() == 0 || self.row >= self.matrix.rows() {
            return None;
        }
        let value = self.matrix.value(self.row, self.column);
        self.column += 1;
        if self.column == self.matrix.columns() {
            self.column = 0;
            self.row += 1;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (rows, columns) = (self.matrix.rows() as usize, self.matrix.columns() as usize);
        let done = self.row as usize * columns + self.column as usize;
        let n = (rows * columns).saturating_sub(done);
        (n, Some(n))
    }
}
