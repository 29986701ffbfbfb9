pub mod mod_server;
