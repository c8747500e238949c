mod channel;
mod friendship;
mod message;
mod profile;
mod server;
