pub mod get_map;
