mod events;
mod profile;
mod records;
mod results;

pub use events::{EventField, EventOccurrence, LifeEvent, LifeEventCategory};
pub use profile::{Profile, SimulationSettings};
pub use records::{Asset, Expense, IncomeStream, Mortgage, Rental};
pub use results::{SimulationResult, TimelineMonth, YearlySummary};
