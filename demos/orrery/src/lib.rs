use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod sim;
mod ui;

use sim::Orrery;

orrery_web::export_sim!(Orrery, "orrery");
