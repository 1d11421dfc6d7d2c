mod message;
mod project;
mod user;
