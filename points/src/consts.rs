/// Size of one cell of the quantization grid (coordinates keep one decimal digit of precision)
pub const QUANTIZE_STEP: f64 = 0.1;

/// Number of quantization cells per unit of distance (always the reciprocal of `QUANTIZE_STEP`)
pub const QUANTIZE_CELLS_PER_UNIT: f64 = 10.0;

/// Length we consider a small distance (tests treat points closer together than this as the same point)
pub const SMALL_DISTANCE: f64 = 0.001;
