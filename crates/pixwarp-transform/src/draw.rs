//! Transformed drawing into caller-owned row buffers
//!
//! Three entry points share one row renderer:
//!
//! - [`draw_transformed`]: the whole destination area into row-major buffers
//! - [`draw_transformed_rows`]: one reused row buffer, handed to a callback
//!   after each row
//! - [`transform_row`]: a single row, for callers that split rows across
//!   threads or stripes
//!
//! Rows depend only on the [`TransformState`] and their own `y`, so any
//! subset of rows may be rendered in any order.
//!
//! # Example
//!
//! ```
//! use pixwarp_core::{Area, Color16, Rgb565A8, SourceImage};
//! use pixwarp_transform::{TransformConfig, Zoom, draw_transformed};
//!
//! let pixels = vec![0xFFu8; 8 * 8 * 3];
//! let src = SourceImage::<Rgb565A8>::packed(&pixels, 8, 8).unwrap();
//! let config = TransformConfig::new(src)
//!     .angle(300)
//!     .zoom(Zoom::new(384).unwrap())
//!     .antialias(true);
//!
//! let dest = Area::new(0, 0, 8, 8).unwrap();
//! let mut colors = vec![Color16::default(); dest.size()];
//! let mut alphas = vec![0u8; dest.size()];
//! draw_transformed(&dest, &config, &mut colors, &mut alphas).unwrap();
//! ```

use crate::mapper::RowStepper;
use crate::sampler::{sample_bilinear, sample_nearest};
use crate::state::{TransformConfig, TransformState};
use crate::{TransformError, TransformResult};
use log::debug;
use pixwarp_core::{Area, PixelFormat};

/// Reject areas the row stepper cannot divide by
fn check_area(dest: &Area) -> TransformResult<()> {
    if dest.is_empty() {
        return Err(TransformError::EmptyArea {
            width: dest.width(),
            height: dest.height(),
        });
    }
    Ok(())
}

fn check_len(required: usize, actual: usize) -> TransformResult<()> {
    if actual < required {
        return Err(TransformError::BufferTooSmall { required, actual });
    }
    Ok(())
}

/// Render row `y` of `dest` without validation
///
/// `cbuf` and `abuf` hold at least `dest.width()` entries.
fn render_row<F: PixelFormat>(
    config: &TransformConfig<'_, F>,
    state: &TransformState,
    dest: &Area,
    y: i32,
    cbuf: &mut [F::Color],
    abuf: &mut [u8],
) {
    let coords = RowStepper::new(state, dest.x1, dest.x2, y);
    if config.antialias {
        sample_bilinear(&config.src, coords, cbuf, abuf);
    } else {
        sample_nearest(&config.src, coords, cbuf, abuf);
    }
}

/// Draw `config.src` transformed into the whole destination area
///
/// # Arguments
///
/// * `dest` - Destination area, in the same coordinate space as the pivot
/// * `config` - Source image and transform
/// * `cbuf` - Output colors, row-major, at least `dest.size()` entries
/// * `abuf` - Output alphas, row-major, at least `dest.size()` entries
///
/// Pixels whose source coordinate falls outside the image get alpha 0; their
/// color entry is not written.
///
/// # Errors
///
/// - [`TransformError::EmptyArea`] if `dest` has no pixels
/// - [`TransformError::BufferTooSmall`] if either buffer is too short
pub fn draw_transformed<F: PixelFormat>(
    dest: &Area,
    config: &TransformConfig<'_, F>,
    cbuf: &mut [F::Color],
    abuf: &mut [u8],
) -> TransformResult<()> {
    check_area(dest)?;
    check_len(dest.size(), cbuf.len())?;
    check_len(dest.size(), abuf.len())?;

    let state = TransformState::new(config);
    debug!(
        "draw_transformed: dest={:?} src={}x{} path={:?} antialias={}",
        dest,
        config.src.width(),
        config.src.height(),
        state.path(),
        config.antialias
    );

    let w = dest.width() as usize;
    let rows = cbuf.chunks_exact_mut(w).zip(abuf.chunks_exact_mut(w));
    for (y, (crow, arow)) in dest.rows().zip(rows) {
        render_row(config, &state, dest, y, crow, arow);
    }
    Ok(())
}

/// Draw row by row through a single reused row buffer
///
/// After each row, top first, `on_row(y, colors, alphas)` receives the
/// first `dest.width()` entries of the row buffers. The next row overwrites
/// them, so the callback must consume the row before returning.
///
/// # Errors
///
/// - [`TransformError::EmptyArea`] if `dest` has no pixels
/// - [`TransformError::BufferTooSmall`] if a row buffer is shorter than
///   `dest.width()`
pub fn draw_transformed_rows<F, R>(
    dest: &Area,
    config: &TransformConfig<'_, F>,
    cbuf: &mut [F::Color],
    abuf: &mut [u8],
    mut on_row: R,
) -> TransformResult<()>
where
    F: PixelFormat,
    R: FnMut(i32, &[F::Color], &[u8]),
{
    check_area(dest)?;
    let w = dest.width() as usize;
    check_len(w, cbuf.len())?;
    check_len(w, abuf.len())?;

    let state = TransformState::new(config);
    debug!(
        "draw_transformed_rows: dest={:?} src={}x{} path={:?} antialias={}",
        dest,
        config.src.width(),
        config.src.height(),
        state.path(),
        config.antialias
    );

    let crow = &mut cbuf[..w];
    let arow = &mut abuf[..w];
    for y in dest.rows() {
        render_row(config, &state, dest, y, crow, arow);
        on_row(y, crow, arow);
    }
    Ok(())
}

/// Render a single destination row
///
/// `state` must come from `config` (see [`TransformState::new`]); building
/// it once and sharing it between rows avoids redoing the trig lookup.
///
/// # Arguments
///
/// * `y` - Absolute destination y, inside `dest.y1..dest.y2`
/// * `cbuf`, `abuf` - Row buffers of at least `dest.width()` entries
///
/// # Errors
///
/// - [`TransformError::EmptyArea`] if `dest` has no pixels
/// - [`TransformError::BufferTooSmall`] if a row buffer is too short
pub fn transform_row<F: PixelFormat>(
    config: &TransformConfig<'_, F>,
    state: &TransformState,
    dest: &Area,
    y: i32,
    cbuf: &mut [F::Color],
    abuf: &mut [u8],
) -> TransformResult<()> {
    check_area(dest)?;
    let w = dest.width() as usize;
    check_len(w, cbuf.len())?;
    check_len(w, abuf.len())?;

    render_row(config, state, dest, y, &mut cbuf[..w], &mut abuf[..w]);
    Ok(())
}
