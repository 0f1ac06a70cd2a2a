//! Writer collaborator: consumes a derived slice plus its metadata. Out of
//! scope to implement (§1 Non-goals, §6) — the core only calls into this
//! trait.

use crate::error::CoreResult;
use crate::field::Field;

/// Provided by an external collaborator. The core produces a `Field` and
/// hands it off; serialisation format is the writer's concern.
pub trait Writer {
    fn write_slice(&self, variable: &str, field: &Field) -> CoreResult<()>;
}
