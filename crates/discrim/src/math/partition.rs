use ndarray::{ArrayBase, ArrayView2, Axis, Data, Ix2};

use crate::error::{Result, SelectionError};

/// Instance counts of the two classes, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSizes {
    pub n1: usize,
    pub n2: usize,
}

impl ClassSizes {
    pub fn new(n1: usize, n2: usize) -> Self {
        ClassSizes { n1, n2 }
    }

    /// Build from a list of per-class counts. Only two-class problems are supported.
    pub fn from_slice(sizes: &[usize]) -> Result<Self> {
        match sizes {
            [n1, n2] => Ok(ClassSizes::new(*n1, *n2)),
            _ => Err(SelectionError::Arity { found: sizes.len() }),
        }
    }

    /// Derive the class sizes from a per-row label column.
    ///
    /// The labels must take exactly two distinct values and each value must
    /// occupy one contiguous run of rows, e.g. `[a, a, a, b, b]`.
    pub fn from_labels<T: PartialEq>(labels: &[T]) -> Result<Self> {
        let mut distinct: Vec<&T> = Vec::new();
        let mut runs: Vec<usize> = Vec::new();
        let mut prev: Option<&T> = None;

        for label in labels {
            if prev != Some(label) {
                if distinct.contains(&label) {
                    return Err(SelectionError::Shape(
                        "class labels are not contiguous; rows must be grouped by class".to_string(),
                    ));
                }
                distinct.push(label);
                runs.push(0);
            }
            if let Some(count) = runs.last_mut() {
                *count += 1;
            }
            prev = Some(label);
        }

        ClassSizes::from_slice(&runs)
    }

    pub fn total(&self) -> usize {
        self.n1 + self.n2
    }

    /// Same sizes with the classes swapped.
    pub fn swapped(&self) -> Self {
        ClassSizes::new(self.n2, self.n1)
    }

    fn check_rows(&self, nrows: usize) -> Result<()> {
        if self.total() != nrows {
            return Err(SelectionError::SizeMismatch {
                expected_rows: nrows,
                class_total: self.total(),
            });
        }
        Ok(())
    }
}

/// Split `matrix` into the row blocks of the two classes.
///
/// Rows `[0, n1)` form the first block and rows `[n1, n1 + n2)` the second.
/// The returned blocks are views into `matrix`.
pub fn split<'a, S>(
    matrix: &'a ArrayBase<S, Ix2>,
    class_sizes: &[usize],
) -> Result<(ArrayView2<'a, f64>, ArrayView2<'a, f64>)>
where
    S: Data<Elem = f64>,
{
    let sizes = ClassSizes::from_slice(class_sizes)?;
    split_classes(matrix, sizes)
}

/// Like [`split`], for an already validated [`ClassSizes`].
pub fn split_classes<'a, S>(
    matrix: &'a ArrayBase<S, Ix2>,
    sizes: ClassSizes,
) -> Result<(ArrayView2<'a, f64>, ArrayView2<'a, f64>)>
where
    S: Data<Elem = f64>,
{
    sizes.check_rows(matrix.nrows())?;
    Ok(matrix.view().split_at(Axis(0), sizes.n1))
}
