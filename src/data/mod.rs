//! Reference feed ingestion module

pub mod csv;

pub use csv::{
    load_airline_names, load_coordinate_index, load_flight_legs, Coord, CoordIndex, FlightLeg,
};
