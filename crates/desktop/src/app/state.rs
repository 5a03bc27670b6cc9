//! App state: background share runs and the mock account connection

pub(crate) mod account;
pub(crate) mod share;
