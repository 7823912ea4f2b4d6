use arcade_flyer::resources::{FlightConfig, FuelOutPolicy, SimulationConfig, TakeoffPolicy};

/// Flight config with the default tuning
pub fn create_test_flight_config() -> FlightConfig {
    FlightConfig::default()
}

/// Flight config whose tank never empties
pub fn create_unlimited_fuel_config() -> FlightConfig {
    FlightConfig {
        unlimited_fuel: true,
        ..Default::default()
    }
}

/// Flight config that resets instead of gliding when the tank runs dry
pub fn create_fuel_reset_config() -> FlightConfig {
    let mut config = FlightConfig::default();
    config.policy.fuel_out = FuelOutPolicy::Reset;
    config
}

/// Flight config that leaves the ground without pitch input
pub fn create_automatic_takeoff_config() -> FlightConfig {
    let mut config = FlightConfig::default();
    config.policy.takeoff = TakeoffPolicy::Automatic;
    config.takeoff_boost = 0.02;
    config
}

/// Full simulation config around a flight config
pub fn create_test_simulation_config(flight: FlightConfig) -> SimulationConfig {
    SimulationConfig {
        flight,
        ..Default::default()
    }
}
