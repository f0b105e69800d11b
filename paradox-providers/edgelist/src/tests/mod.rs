pub(crate) use super::{EdgeListError, EdgeListProvider};

mod parse;
mod support;
