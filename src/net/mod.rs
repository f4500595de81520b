//! Network layer: REST calls to the StackIt backend and the reduction
//! of their settled results into display messages.

pub mod api;
pub mod outcome;
