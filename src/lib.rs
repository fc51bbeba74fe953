//! Neurite: the neural-circuit simulation and optimization engine behind a
//! connectome-learning application.
//!
//! The engine has three closed pieces (signal propagation, reference
//! validation, and evolutionary weight optimization) exposed to host layers
//! through the [`model`] facade. Hosts construct circuit snapshots, hand
//! them to the engine on demand, and chart or store what comes back; the
//! engine itself holds no session state.

pub mod model;
