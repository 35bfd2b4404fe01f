//! Random matrix generation and shuffling
//!
//! All functions hang off a [`RandomContext`] owned by the caller. Seeding
//! a context makes every draw from it reproducible.
//!
//! # Example
//!
//! ```rust
//! use densemat_core::DistrParam;
//! use densemat_random::RandomContext;
//!
//! let mut ctx = RandomContext::seeded(42);
//! let u = ctx.randu(3, 4);
//! assert!(u.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
//!
//! let dice = ctx.randi(2, 2, DistrParam::new(1.0, 6.0))?;
//! assert!(dice.as_slice().iter().all(|&x| (1.0..=6.0).contains(&x)));
//!
//! let rows = ctx.shuffle(&u);
//! assert_eq!(rows.shape(), (3, 4));
//! # Ok::<(), densemat_core::Error>(())
//! ```

pub mod context;
pub mod generate;
pub mod shuffle;

pub use context::RandomContext;
