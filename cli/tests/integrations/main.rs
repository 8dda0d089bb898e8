mod interactive;
mod list;
mod run;
mod server;
