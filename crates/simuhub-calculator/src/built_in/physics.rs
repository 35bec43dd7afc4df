//! Physics calculators

use crate::{ResultLine, SimulationDefinition, SimulationInputs, SimulationOutput};
use simuhub_types::InputField;
use std::f64::consts::PI;

/// Standard gravity in m/s²
const GRAVITY: f64 = 9.81;
/// Newtonian constant of gravitation in N·m²/kg²
const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

pub fn simulations() -> Vec<SimulationDefinition> {
    vec![
        SimulationDefinition::new(
            "projectile-motion",
            "Projectile Motion",
            "Simulate the motion of an object projected into the air with a given velocity and angle. Calculate the horizontal range of the projectile.",
            vec![
                InputField::number("initialVelocity", "Initial Velocity (m/s)", 10.0),
                InputField::number("angle", "Angle (°)", 45.0),
            ],
            projectile_motion,
        ),
        SimulationDefinition::new(
            "ohms-law",
            "Ohm's Law",
            "Simulate the relationship between voltage, current, and resistance in an electrical circuit. Calculate current or resistance given the voltage and resistance or current.",
            vec![
                InputField::number("voltage", "Voltage (V)", 10.0),
                InputField::number("resistance", "Resistance (Ω)", 5.0),
            ],
            ohms_law,
        ),
        SimulationDefinition::new(
            "kinetic-energy",
            "Kinetic Energy",
            "Calculate the kinetic energy of an object given its mass and velocity using the formula KE = 1/2 * m * v^2.",
            vec![
                InputField::number("mass", "Mass (kg)", 1.0),
                InputField::number("velocity", "Velocity (m/s)", 10.0),
            ],
            kinetic_energy,
        ),
        SimulationDefinition::new(
            "gravitational-force",
            "Gravitational Force",
            "Calculate the gravitational force between two objects based on their masses and the distance between them using Newton's law of gravitation.",
            vec![
                InputField::number("mass1", "Mass 1 (kg)", 5.0),
                InputField::number("mass2", "Mass 2 (kg)", 5.0),
                InputField::number("distance", "Distance (m)", 10.0),
            ],
            gravitational_force,
        ),
        SimulationDefinition::new(
            "newton-second-law",
            "Newton's Second Law",
            "Calculate the acceleration of an object given its mass and the applied force using the formula F = m * a.",
            vec![
                InputField::number("force", "Force (N)", 10.0),
                InputField::number("mass", "Mass (kg)", 2.0),
            ],
            newton_second_law,
        ),
    ]
}

fn projectile_motion(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let velocity = inputs.number("initialVelocity");
    let radians = inputs.number("angle") * PI / 180.0;
    let range = velocity.powi(2) * (2.0 * radians).sin() / GRAVITY;
    SimulationOutput::new(ResultLine::fixed("Range", range, 2, " m"))
}

fn ohms_law(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let current = inputs.number("voltage") / inputs.number("resistance");
    SimulationOutput::new(ResultLine::fixed("Current", current, 2, " A"))
}

fn kinetic_energy(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let energy = 0.5 * inputs.number("mass") * inputs.number("velocity").powi(2);
    SimulationOutput::new(ResultLine::fixed("Kinetic Energy", energy, 2, " J"))
}

fn gravitational_force(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let force = (GRAVITATIONAL_CONSTANT * inputs.number("mass1") * inputs.number("mass2"))
        / inputs.number("distance").powi(2);
    SimulationOutput::new(ResultLine::fixed("Gravitational Force", force, 2, " N"))
}

fn newton_second_law(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let acceleration = inputs.number("force") / inputs.number("mass");
    SimulationOutput::new(ResultLine::fixed("Acceleration", acceleration, 2, " m/s²"))
}
