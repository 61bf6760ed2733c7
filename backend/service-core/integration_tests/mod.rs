mod error;
mod reqwest_transport;
