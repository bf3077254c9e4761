/*!

Types/type aliases that abstract over the implementing backing type.

Generator subscripts are nonnegative machine-sized integers, exponents are signed 64-bit integers. Neither is
arbitrary precision. If we later want a different backing type (a `u32` subscript to shrink syllables, say), only
these aliases change.

*/

/// The index `i` of a generator `x_i`.
pub type Subscript = usize;

/// The power a generator is raised to.
pub type Exponent = i64;
