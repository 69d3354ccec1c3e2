//! Template processing engine for textconvert
//!
//! This module contains the core template processing components:
//! - `operation`: Defines operations to be performed for each emitter
//! - `processor`: Renders an emitter's template and plans its operation

pub mod operation;
pub mod processor;
