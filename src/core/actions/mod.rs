pub mod render_row;
