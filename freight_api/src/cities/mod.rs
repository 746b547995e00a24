pub mod get_cities;
