//! # gfxmath
//!
//! **gfxmath** - column-major 2d/3d vectors and matrices for graphics pipelines, written in pure Rust.
//!
//! # Model
//! Crate supplies 2-, 3- and 4-element vectors ([`Vec2`](vectors::Vec2), [`Vec3`](vectors::Vec3),
//! [`Vec4`](vectors::Vec4)) and 2x2, 3x3 and 4x4 matrices ([`Mat2`](matrices::Mat2),
//! [`Mat3`](matrices::Mat3), [`Mat4`](matrices::Mat4)) with every operation that is needed
//! to compose rotations, scalings and translations and to apply them to points.
//!
//! All scalars are `f64`. Matrices are multiplied with column vectors (`w = M * v`),
//! coordinate system is right-handed and [`fill_buffer`](matrices::Matrix::fill_buffer)
//! exports matrices in column-major order, which is what graphics APIs expect for uniforms.
//!
//! Most operations come in two flavours: one mutates the receiver and returns it
//! (so calls can be chained), the other one writes result into caller-supplied destination
//! (`*_into` functions) and returns that destination.
//!
//! # Euler angles
//! [`Mat3::set_rotation`](matrices::Mat3) and [`Mat4::set_rotation`](matrices::Mat4) compose
//! axis rotations in **YZX** order (`Ry * Rz * Rx`, so X rotation is applied first).
//! Every other order is available under explicit name (`set_rotation_xyz`, `set_rotation_zyx`, ...)
//! or through [`EulerOrder`](transforms::EulerOrder).
//!
//! # Degenerate input
//! Nothing in this crate returns errors or panics.
//! Normalizing zero vector leaves it unchanged, inverting matrix with zero determinant
//! leaves destination unchanged. Both cases are reported with `log::trace!`.
//!
//! # Prelude
//! Everything can be imported with `use gfxmath::prelude::*`.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate log;

extern crate serde;
extern crate serde_big_array;

// submodules
pub mod floats;
pub mod matrices;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
