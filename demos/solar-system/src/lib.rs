use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod bodies;
pub mod builder;
pub mod game;
use game::SolarSystem;

orrery_web::export_app!(SolarSystem, "solar-system");
