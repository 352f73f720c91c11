use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod composer;
mod config;
mod orbit_view;
use orbit_view::EarthOrbit;

orrery_web::export_scenario!(EarthOrbit, "earth-orbit");
