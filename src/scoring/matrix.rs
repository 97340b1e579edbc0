//! Column access over expression matrix backends.
//!
//! The permutation driver only ever reads whole columns (genes × cells orientation), so the
//! matrix surface is reduced to a column-copy operation over a caller-provided buffer. Dense
//! `ndarray` matrices and column-major sparse matrices from nalgebra-sparse are supported;
//! further backends only need to implement [`ColumnSource`].

use nalgebra_sparse::CscMatrix;
use ndarray::Array2;
use single_utilities::traits::FloatOpsTS;

/// Read-only column access for a genes × cells expression matrix.
pub trait ColumnSource<T> {
    /// Number of gene rows.
    fn n_genes(&self) -> usize;

    /// Number of cell columns.
    fn n_cells(&self) -> usize;

    /// Copy the values of one cell's column into `out`, which must have length
    /// [`n_genes`](ColumnSource::n_genes).
    fn copy_column(&self, cell: usize, out: &mut [T]) -> anyhow::Result<()>;
}

impl<T> ColumnSource<T> for Array2<T>
where
    T: FloatOpsTS,
{
    fn n_genes(&self) -> usize {
        self.nrows()
    }

    fn n_cells(&self) -> usize {
        self.ncols()
    }

    fn copy_column(&self, cell: usize, out: &mut [T]) -> anyhow::Result<()> {
        if cell >= self.ncols() {
            return Err(anyhow::anyhow!(
                "Cell index {} is out of range for a matrix with {} cells",
                cell,
                self.ncols()
            ));
        }
        if out.len() != self.nrows() {
            return Err(anyhow::anyhow!(
                "Column buffer length {} does not match gene count {}",
                out.len(),
                self.nrows()
            ));
        }

        for (dst, &src) in out.iter_mut().zip(self.column(cell).iter()) {
            *dst = src;
        }
        Ok(())
    }
}

impl<T> ColumnSource<T> for CscMatrix<T>
where
    T: FloatOpsTS,
{
    fn n_genes(&self) -> usize {
        self.nrows()
    }

    fn n_cells(&self) -> usize {
        self.ncols()
    }

    fn copy_column(&self, cell: usize, out: &mut [T]) -> anyhow::Result<()> {
        if out.len() != self.nrows() {
            return Err(anyhow::anyhow!(
                "Column buffer length {} does not match gene count {}",
                out.len(),
                self.nrows()
            ));
        }

        let column = self.get_col(cell).ok_or_else(|| {
            anyhow::anyhow!(
                "Cell index {} is out of range for a matrix with {} cells",
                cell,
                self.ncols()
            )
        })?;

        // Zero-fill, then scatter the stored entries.
        out.fill(T::zero());
        for (&row, &value) in column.row_indices().iter().zip(column.values().iter()) {
            out[row] = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra_sparse::CooMatrix;
    use ndarray::array;

    #[test]
    fn test_dense_column_copy() {
        let matrix = array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
        let mut buffer = vec![0.0; 3];

        matrix.copy_column(1, &mut buffer).unwrap();
        assert_eq!(buffer, vec![4.0, 5.0, 6.0]);

        assert_eq!(ColumnSource::<f64>::n_genes(&matrix), 3);
        assert_eq!(ColumnSource::<f64>::n_cells(&matrix), 2);
    }

    #[test]
    fn test_sparse_column_copy_fills_zeros() {
        // 4 genes x 2 cells, column 0 holds entries at rows 1 and 3 only.
        let mut coo = CooMatrix::new(4, 2);
        coo.push(1, 0, 7.0);
        coo.push(3, 0, 2.0);
        coo.push(0, 1, 5.0);
        let matrix = CscMatrix::from(&coo);

        let mut buffer = vec![9.0; 4];
        matrix.copy_column(0, &mut buffer).unwrap();
        assert_eq!(buffer, vec![0.0, 7.0, 0.0, 2.0]);

        matrix.copy_column(1, &mut buffer).unwrap();
        assert_eq!(buffer, vec![5.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_dense_and_sparse_agree() {
        let dense = array![[0.0, 2.0, 0.0], [1.0, 0.0, 3.0]];

        let mut coo = CooMatrix::new(2, 3);
        coo.push(1, 0, 1.0);
        coo.push(0, 1, 2.0);
        coo.push(1, 2, 3.0);
        let sparse = CscMatrix::from(&coo);

        let mut from_dense = vec![0.0; 2];
        let mut from_sparse = vec![0.0; 2];
        for cell in 0..3 {
            dense.copy_column(cell, &mut from_dense).unwrap();
            sparse.copy_column(cell, &mut from_sparse).unwrap();
            assert_eq!(from_dense, from_sparse);
        }
    }

    #[test]
    fn test_out_of_range_and_bad_buffer() {
        let matrix = array![[1.0], [2.0]];
        let mut buffer = vec![0.0; 2];
        assert!(matrix.copy_column(1, &mut buffer).is_err());

        let mut short = vec![0.0; 1];
        assert!(matrix.copy_column(0, &mut short).is_err());
    }
}
