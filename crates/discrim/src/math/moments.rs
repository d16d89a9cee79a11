use ndarray::{Array1, ArrayBase, Axis, Data, Ix2};

use crate::error::{Result, SelectionError};

/// Per-column first and second moments of a row block.
#[derive(Debug, Clone, PartialEq)]
pub struct Moments {
    pub mean: Array1<f64>,
    /// Population standard deviation (normalised by N, not N - 1).
    pub std: Array1<f64>,
}

impl Moments {
    /// Population variance, `std^2`.
    pub fn variance(&self) -> Array1<f64> {
        self.std.mapv(|s| s * s)
    }
}

/// Compute the column-wise mean and population standard deviation of `block`.
///
/// # Errors
///
/// Returns [`SelectionError::Shape`] if the block has no rows.
///
/// # Examples
///
/// ```rust
/// use ndarray::array;
/// use discrim::math::moments;
///
/// let block = array![[4.0, 1.0], [6.0, 5.0]];
/// let m = moments(&block).unwrap();
/// assert_eq!(m.mean.to_vec(), vec![5.0, 3.0]);
/// assert_eq!(m.std.to_vec(), vec![1.0, 2.0]);
/// ```
pub fn moments<S>(block: &ArrayBase<S, Ix2>) -> Result<Moments>
where
    S: Data<Elem = f64>,
{
    if block.nrows() == 0 {
        return Err(SelectionError::Shape(format!(
            "cannot compute moments of a block with 0 rows and {} columns",
            block.ncols()
        )));
    }

    let mean = block
        .mean_axis(Axis(0))
        .ok_or_else(|| SelectionError::Shape("empty block".to_string()))?;
    let std = block.std_axis(Axis(0), 0.0);

    Ok(Moments { mean, std })
}
