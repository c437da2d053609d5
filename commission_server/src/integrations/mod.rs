pub mod pushcut;
