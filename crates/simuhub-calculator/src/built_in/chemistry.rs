//! Chemistry calculators
//!
//! Moles and reaction rates are shown with three decimals, everything else
//! with two. The pH estimate is rounded to one decimal and shown as a plain
//! number.

use crate::output::round_half_up;
use crate::{ResultLine, SimulationDefinition, SimulationInputs, SimulationOutput};
use simuhub_types::InputField;

/// Gas constant in L·atm/(mol·K)
const GAS_CONSTANT: f64 = 0.0821;

pub fn simulations() -> Vec<SimulationDefinition> {
    vec![
        SimulationDefinition::new(
            "acid-base-reaction",
            "Acid-Base Reaction",
            "Calculate the resulting pH when acids and bases are mixed.",
            vec![
                InputField::number("acidConcentration", "Acid Concentration (M)", 0.1),
                InputField::number("baseConcentration", "Base Concentration (M)", 0.1),
            ],
            acid_base_reaction,
        ),
        SimulationDefinition::new(
            "ideal-gas-law",
            "Ideal Gas Law",
            "Find the number of gas moles using pressure, volume, and temperature.",
            vec![
                InputField::number("pressure", "Pressure (atm)", 1.0),
                InputField::number("volume", "Volume (L)", 22.4),
                InputField::number("temperature", "Temperature (K)", 273.0),
            ],
            ideal_gas_law,
        ),
        SimulationDefinition::new(
            "reaction-rate",
            "Reaction Rate",
            "Calculate the rate of a chemical reaction based on concentration change and time.",
            vec![
                InputField::number("changeInConcentration", "ΔConcentration (M)", 0.5),
                InputField::number("changeInTime", "ΔTime (s)", 10.0),
            ],
            reaction_rate,
        ),
        SimulationDefinition::new(
            "boiling-point-elevation",
            "Boiling Point Elevation",
            "Calculate the change in boiling point based on the solute concentration.",
            vec![
                InputField::number("molality", "Molality (mol/kg)", 1.0),
                InputField::number("kb", "Ebullioscopic Constant (°C·kg/mol)", 0.512),
            ],
            boiling_point_elevation,
        ),
        SimulationDefinition::new(
            "enthalpy-change",
            "Enthalpy Change",
            "Calculate the heat required to change the temperature of a substance.",
            vec![
                InputField::number("mass", "Mass (g)", 50.0),
                InputField::number("specificHeat", "Specific Heat (J/g°C)", 4.18),
                InputField::number("temperatureChange", "Temperature Change (°C)", 10.0),
            ],
            enthalpy_change,
        ),
        SimulationDefinition::new(
            "molarity-calculation",
            "Molarity Calculation",
            "Calculate the molarity of a solution based on solute and volume.",
            vec![
                InputField::number("molesOfSolute", "Moles of Solute (mol)", 1.0),
                InputField::number("volumeOfSolution", "Volume of Solution (L)", 1.0),
            ],
            molarity_calculation,
        ),
    ]
}

fn acid_base_reaction(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let difference = inputs.number("acidConcentration") - inputs.number("baseConcentration");
    let ph = round_half_up(difference * 10.0) / 10.0;
    SimulationOutput::new(ResultLine::plain("pH", ph, ""))
}

fn ideal_gas_law(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let moles = (inputs.number("pressure") * inputs.number("volume"))
        / (GAS_CONSTANT * inputs.number("temperature"));
    SimulationOutput::new(ResultLine::fixed("Moles of Gas", moles, 3, " mol"))
}

fn reaction_rate(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let rate = inputs.number("changeInConcentration") / inputs.number("changeInTime");
    SimulationOutput::new(ResultLine::fixed("Reaction Rate", rate, 3, " M/s"))
}

fn boiling_point_elevation(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let delta_tb = inputs.number("kb") * inputs.number("molality");
    let line = ResultLine::fixed("Boiling Point Elevation", delta_tb, 2, " °C");
    SimulationOutput::new(line)
}

fn enthalpy_change(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let q =
        inputs.number("mass") * inputs.number("specificHeat") * inputs.number("temperatureChange");
    SimulationOutput::new(ResultLine::fixed("Heat (q)", q, 2, " J"))
}

fn molarity_calculation(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let molarity = inputs.number("molesOfSolute") / inputs.number("volumeOfSolution");
    SimulationOutput::new(ResultLine::fixed("Molarity", molarity, 2, " M"))
}
