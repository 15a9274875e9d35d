//! Command-line front end for the life-plan simulator
//!
//! Loads a household scenario from YAML or JSON, runs the projection from
//! `lifeplan_core` and renders the months as a table or a serialized document.

pub mod logging;
pub mod report;
pub mod scenario;

pub use logging::init_logging;
pub use report::{OutputFormat, render};
pub use scenario::{ScenarioFormat, load_scenario, parse_scenario};
