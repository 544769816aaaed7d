pub mod logging_viewer_port;
