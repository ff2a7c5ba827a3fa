//! Request processing shared by controllers: requester identity and access guards.

pub mod auth;

#[cfg(test)]
mod test;
