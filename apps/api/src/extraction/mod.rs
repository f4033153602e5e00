// Resume extraction pipeline: document text normalization, fixed-pattern
// contact fields, and the schema-constrained structured extraction call.
// The JD skill filter lives in `skills` — it consumes this module's output.

pub mod fields;
pub mod prompts;
pub mod structured;
pub mod text;
