//! B-spline families: approximating curves whose basis functions have
//! compact support over a knot vector. The uniform cubic variant hard-codes
//! its basis; the generic variant evaluates any degree by de Boor's
//! recursion.

pub(crate) mod generic;
pub(crate) mod uniform;
