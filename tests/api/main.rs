mod assignments;
mod helpers;
mod members;
mod sessions;
