/// The numeric value type.
///
/// Defines `Value`, the integer-or-real number every evaluation produces,
/// with its conversions and the tag queries operators rely on.
pub mod core;
