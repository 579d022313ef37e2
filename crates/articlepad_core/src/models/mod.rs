//! Article data models shared by the client, GUI, and CLI.

/// Article records, drafts, updates, and history rows.
pub mod article;

#[cfg(test)]
mod tests;
