mod common;
mod rank;
