pub mod builders;
pub mod category;
pub mod clock;
pub mod error;
pub mod estimate;
pub mod model;
pub mod notify;
pub mod pool;
pub mod runner;
pub mod scenario;
pub mod scheduler;
pub mod systems;
pub mod telemetry;
pub mod test_helpers;
