use super::*;

mod publication;
mod seminar;
mod team;
