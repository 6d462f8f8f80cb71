//! Two-dimensional label matrices
//!
//! Segmentation outputs are grids of discrete class labels. This module holds
//! them in row-major order and provides nearest-neighbour resizing plus
//! conversion to and from greyscale label images.

use std::path::Path;
use image::{DynamicImage, GrayImage};
use log::{debug, info};

use crate::errors::{MapError, MapResult};

/// A rectangular, non-empty grid of labels
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMatrix<T> {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Values in row-major order
    data: Vec<T>,
}

impl<T: Copy> LabelMatrix<T> {
    /// Create a matrix from row-major data
    ///
    /// # Arguments
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    /// * `data` - Values, `rows * cols` of them
    ///
    /// # Returns
    /// The matrix, or `InvalidArgument` if the shape is empty or does not match the data
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> MapResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MapError::InvalidArgument(format!(
                "Label matrix must be non-empty, got {}x{}",
                rows, cols
            )));
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MapError::InvalidArgument(format!(
                "Data length {} does not match a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(LabelMatrix { rows, cols, data })
    }

    /// Create a matrix from nested rows, which must all have the same length
    pub fn from_rows(rows: Vec<Vec<T>>) -> MapResult<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        if let Some(bad) = rows.iter().position(|row| row.len() != cols) {
            return Err(MapError::InvalidArgument(format!(
                "Row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                cols
            )));
        }
        let data = rows.into_iter().flatten().collect();
        LabelMatrix::new(row_count, cols, data)
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the value at a row and column, or None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Iterate over the rows as slices
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.cols)
    }

    /// Row-major values
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy the matrix into nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(|row| row.to_vec()).collect()
    }
}

/// Resize a label matrix with nearest-neighbour sampling
///
/// Target cell (r, c) takes source cell
/// (floor(src_rows * r / rows), floor(src_cols * c / cols)). No interpolation
/// happens, so the output only contains labels present in the input.
///
/// # Arguments
/// * `matrix` - Source matrix
/// * `rows` - Target number of rows
/// * `cols` - Target number of columns
///
/// # Returns
/// A new matrix of shape (rows, cols), or `InvalidArgument` when either is zero
pub fn resize_nearest<T: Copy>(matrix: &LabelMatrix<T>, rows: usize, cols: usize) -> MapResult<LabelMatrix<T>> {
    if rows == 0 || cols == 0 {
        return Err(MapError::InvalidArgument(format!(
            "Resize target must be positive, got {}x{}",
            rows, cols
        )));
    }

    let (src_rows, src_cols) = matrix.shape();
    debug!("Resizing label matrix {}x{} -> {}x{}", src_rows, src_cols, rows, cols);

    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let src_r = src_rows * r / rows;
        for c in 0..cols {
            let src_c = src_cols * c / cols;
            data.push(matrix.data[src_r * src_cols + src_c]);
        }
    }

    LabelMatrix::new(rows, cols, data)
}

impl LabelMatrix<u8> {
    /// Create a label matrix from an image, converting to greyscale
    pub fn from_image(image: &DynamicImage) -> MapResult<Self> {
        let gray_image = image.to_luma8();
        let width = gray_image.width() as usize;
        let height = gray_image.height() as usize;
        LabelMatrix::new(height, width, gray_image.into_raw())
    }

    /// Convert to a greyscale image (one pixel per label)
    pub fn to_gray_image(&self) -> MapResult<GrayImage> {
        GrayImage::from_raw(self.cols as u32, self.rows as u32, self.data.clone())
            .ok_or_else(|| MapError::GenericError("Label matrix does not fit an image buffer".to_string()))
    }

    /// Read a grey-label image from disk
    pub fn read_png(path: &Path) -> MapResult<Self> {
        if !path.exists() {
            return Err(MapError::FileNotFound(path.to_path_buf()));
        }
        let image = image::open(path)?;
        info!("Loaded label image {} ({}x{})", path.display(), image.width(), image.height());
        LabelMatrix::from_image(&image)
    }

    /// Write the matrix as a grey-label PNG
    pub fn write_png(&self, path: &Path) -> MapResult<()> {
        let image = self.to_gray_image()?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        info!("Saved label image {} ({}x{})", path.display(), self.cols, self.rows);
        Ok(())
    }
}
