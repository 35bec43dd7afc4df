//! Personal finance calculators

use crate::{ResultLine, SimulationDefinition, SimulationInputs, SimulationOutput};
use simuhub_types::InputField;

pub fn simulations() -> Vec<SimulationDefinition> {
    vec![
        SimulationDefinition::new(
            "compound-interest",
            "Compound Interest",
            "Calculate the future value of an investment with compound interest over time. You can specify the principal amount, interest rate, and time period.",
            vec![
                InputField::number("principal", "Principal ($)", 1000.0),
                InputField::number("rate", "Interest Rate (%)", 5.0),
                InputField::number("time", "Time (years)", 5.0),
            ],
            compound_interest,
        ),
        SimulationDefinition::new(
            "simple-interest",
            "Simple Interest",
            "Calculate the simple interest on a loan or investment using the formula: Interest = Principal x Rate x Time.",
            vec![
                InputField::number("principal", "Principal ($)", 1000.0),
                InputField::number("rate", "Interest Rate (%)", 5.0),
                InputField::number("time", "Time (years)", 5.0),
            ],
            simple_interest,
        ),
        SimulationDefinition::new(
            "loan-payment",
            "Loan Payment",
            "Calculate the monthly payment for a loan using the loan amount, interest rate, and loan term.",
            vec![
                InputField::number("loanAmount", "Loan Amount ($)", 10000.0),
                InputField::number("interestRate", "Interest Rate (%)", 5.0),
                InputField::number("loanTerm", "Loan Term (years)", 5.0),
            ],
            loan_payment,
        ),
        SimulationDefinition::new(
            "roi-calculator",
            "Return on Investment (ROI)",
            "Calculate the ROI for an investment based on the initial investment, final value, and any additional costs.",
            vec![
                InputField::number("initialInvestment", "Initial Investment ($)", 1000.0),
                InputField::number("finalValue", "Final Value ($)", 1200.0),
                InputField::number("additionalCosts", "Additional Costs ($)", 0.0),
            ],
            roi_calculator,
        ),
        SimulationDefinition::new(
            "monthly-budget",
            "Monthly Budget",
            "Track your monthly income and expenses to calculate your savings potential.",
            vec![
                InputField::number("income", "Monthly Income ($)", 3000.0),
                InputField::number("expenses", "Monthly Expenses ($)", 1500.0),
            ],
            monthly_budget,
        ),
        SimulationDefinition::new(
            "savings-goal",
            "Savings Goal",
            "Calculate how much you need to save monthly to reach your savings goal in a given time frame.",
            vec![
                InputField::number("goalAmount", "Savings Goal ($)", 5000.0),
                InputField::number("timeFrame", "Time Frame (months)", 12.0),
            ],
            savings_goal,
        ),
    ]
}

fn compound_interest(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let growth = 1.0 + inputs.number("rate") / 100.0;
    let amount = inputs.number("principal") * growth.powf(inputs.number("time"));
    SimulationOutput::new(ResultLine::fixed("Amount", amount, 2, " $"))
}

fn simple_interest(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let interest =
        (inputs.number("principal") * inputs.number("rate") * inputs.number("time")) / 100.0;
    SimulationOutput::new(ResultLine::fixed("Interest", interest, 2, " $"))
}

/// Annuity payment. A zero rate divides zero by zero and shows `NaN`.
fn loan_payment(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let monthly_rate = inputs.number("interestRate") / 100.0 / 12.0;
    let payments = inputs.number("loanTerm") * 12.0;
    let payment = (inputs.number("loanAmount") * monthly_rate)
        / (1.0 - (1.0 + monthly_rate).powf(-payments));
    SimulationOutput::new(ResultLine::fixed("Monthly Payment", payment, 2, " $"))
}

fn roi_calculator(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let initial = inputs.number("initialInvestment");
    let gain = inputs.number("finalValue") - initial - inputs.number("additionalCosts");
    SimulationOutput::new(ResultLine::fixed("ROI", gain / initial * 100.0, 2, "%"))
}

fn monthly_budget(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let savings = inputs.number("income") - inputs.number("expenses");
    SimulationOutput::new(ResultLine::fixed("Savings", savings, 2, " $"))
}

fn savings_goal(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let monthly = inputs.number("goalAmount") / inputs.number("timeFrame");
    let line = ResultLine::fixed("Monthly Savings Needed", monthly, 2, " $");
    SimulationOutput::new(line)
}
