#![allow(missing_docs)]

mod synchsafe;
mod tag;
pub(crate) mod util;
