//! Typed endpoint methods, one module per resource family.

mod auth;
mod folders;
mod images;
mod posts;
mod publish;
mod users;
mod workspaces;
