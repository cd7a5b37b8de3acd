//! Packed addressing for symmetric, zero-diagonal distance matrices.
//!
//! A matrix of `n` items has `n * (n - 1) / 2` distinct off-diagonal cells.
//! This crate maps coordinate pairs to offsets in a flat buffer of exactly that
//! length and back, under two conventions that must never be mixed on the same
//! matrix:
//!
//! | Convention | Offset of `(lo, hi)` | Depends on `n` |
//! |------------|----------------------|----------------|
//! | [`Origin`] | `hi·(hi−1)/2 + lo` | no |
//! | [`RowMajor`] | `n·lo − lo·(lo+1)/2 + hi − 1 − lo` | yes |
//!
//! # Quick start
//!
//! ```
//! use leafpack_index::{Origin, PackedLayout, PackedViewMut};
//!
//! let points = [0.0_f64, 2.0, 3.0, 7.0];
//! let layout = PackedLayout::<Origin>::new(points.len()).unwrap();
//! let mut buf = vec![0.0; layout.len()];
//!
//! let mut view = PackedViewMut::new(layout, &mut buf).unwrap();
//! view.fill_with(|i, j| (points[i] - points[j]).abs());
//! assert_eq!(view.get(3, 1).unwrap(), 5.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! PackedView / PackedViewMut   (view.rs)     buffer length check, get/set
//!   └─ PackedLayout<C>         (layout.rs)   coordinate/offset validation
//!        └─ Convention         (convention.rs)
//!             ├─ origin_*      (origin.rs)
//!             └─ row_major_*   (row_major.rs)
//!                  └─ triangular arithmetic (triangular.rs)
//! ```
//!
//! The raw functions never fail and never panic on overflow; they wrap, so
//! out-of-contract inputs yield meaningless offsets. The layout and views
//! reject such inputs with [`IndexError`].

pub mod convention;
pub mod error;
pub mod layout;
pub mod origin;
pub mod row_major;
pub mod triangular;
pub mod view;

pub use convention::{Convention, Origin, Pair, RowMajor};
pub use error::IndexError;
pub use layout::{PackedLayout, Pairs};
pub use origin::{origin_col, origin_offset, origin_row};
pub use row_major::{row_major_offset, row_major_pair};
pub use triangular::{packed_len, triangular, triangular_root};
pub use view::{PackedView, PackedViewMut};
