//! Business strategy calculators
//!
//! Three of these refuse a zero denominator outright and report an
//! `Undefined (...)` message instead of a non-finite number.

use crate::{ResultLine, SimulationDefinition, SimulationInputs, SimulationOutput};
use simuhub_types::InputField;

pub const BREAK_EVEN_UNDEFINED: &str =
    "Undefined (Selling Price must be greater than Variable Costs)";
pub const CAC_UNDEFINED: &str = "Undefined (Must have new customers)";
pub const TIMEFRAME_UNDEFINED: &str = "Undefined (Monthly Sales cannot be 0)";

pub fn simulations() -> Vec<SimulationDefinition> {
    vec![
        SimulationDefinition::new(
            "break-even-analysis",
            "Break-Even Analysis",
            "Calculate the break-even point where total revenue equals total costs, helping businesses understand when they will start making a profit.",
            vec![
                InputField::number("fixedCosts", "Fixed Costs ($)", 1000.0),
                InputField::number("variableCosts", "Variable Costs ($/unit)", 5.0),
                InputField::number("sellingPrice", "Selling Price ($/unit)", 10.0),
            ],
            break_even_analysis,
        ),
        SimulationDefinition::new(
            "profit-margin",
            "Profit Margin",
            "Calculate the profit margin percentage to understand how much profit you make from each sale after covering costs.",
            vec![
                InputField::number("revenue", "Revenue ($)", 5000.0),
                InputField::number("costs", "Costs ($)", 3000.0),
            ],
            profit_margin,
        ),
        SimulationDefinition::new(
            "roi-analysis",
            "Return on Investment (ROI) Analysis",
            "Analyze the return on investment (ROI) to understand the profitability of your business investments.",
            vec![
                InputField::number("investment", "Investment ($)", 10000.0),
                InputField::number("return", "Return ($)", 12000.0),
            ],
            roi_analysis,
        ),
        SimulationDefinition::new(
            "customer-acquisition-cost",
            "Customer Acquisition Cost (CAC)",
            "Calculate the cost of acquiring a new customer, which is important for understanding the effectiveness of marketing strategies.",
            vec![
                InputField::number("marketingCosts", "Marketing Costs ($)", 2000.0),
                InputField::number("newCustomers", "New Customers", 100.0),
            ],
            customer_acquisition_cost,
        ),
        SimulationDefinition::new(
            "breakeven-timeframe",
            "Break-Even Timeframe",
            "Estimate the time required to reach the break-even point based on the business's current performance and assumptions.",
            vec![
                InputField::number("monthlySales", "Monthly Sales ($)", 2000.0),
                InputField::number("fixedCosts", "Fixed Costs ($)", 10000.0),
            ],
            breakeven_timeframe,
        ),
        SimulationDefinition::new(
            "net-present-value",
            "Net Present Value (NPV)",
            "Calculate the Net Present Value (NPV) of future cash flows to determine the profitability of a business project.",
            vec![
                InputField::number("initialInvestment", "Initial Investment ($)", 10000.0),
                InputField::number("cashFlows", "Future Cash Flows ($)", 5000.0),
                InputField::number("discountRate", "Discount Rate (%)", 5.0),
                InputField::number("years", "Number of Years", 5.0),
            ],
            net_present_value,
        ),
    ]
}

/// `numerator / denominator`, or `NaN` when the denominator is exactly zero.
fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        f64::NAN
    }
}

fn break_even_analysis(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let margin = inputs.number("sellingPrice") - inputs.number("variableCosts");
    let units = guarded_ratio(inputs.number("fixedCosts"), margin);
    SimulationOutput::new(ResultLine::fixed_or_undefined(
        "Break-Even Point",
        units,
        2,
        BREAK_EVEN_UNDEFINED,
        " units",
    ))
}

fn profit_margin(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let revenue = inputs.number("revenue");
    let margin = (revenue - inputs.number("costs")) / revenue * 100.0;
    SimulationOutput::new(ResultLine::fixed("Profit Margin", margin, 2, "%"))
}

fn roi_analysis(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let investment = inputs.number("investment");
    let roi = (inputs.number("return") - investment) / investment * 100.0;
    SimulationOutput::new(ResultLine::fixed("ROI", roi, 2, "%"))
}

fn customer_acquisition_cost(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let customers = inputs.number("newCustomers");
    let cac = guarded_ratio(inputs.number("marketingCosts"), customers);
    SimulationOutput::new(ResultLine::fixed_or_undefined(
        "Customer Acquisition Cost",
        cac,
        2,
        CAC_UNDEFINED,
        " $",
    ))
}

fn breakeven_timeframe(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let months = guarded_ratio(inputs.number("fixedCosts"), inputs.number("monthlySales"));
    SimulationOutput::new(ResultLine::fixed_or_undefined(
        "Break-Even Timeframe",
        months,
        2,
        TIMEFRAME_UNDEFINED,
        " months",
    ))
}

fn net_present_value(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let rate = inputs.number("discountRate") / 100.0;
    let discount = (1.0 + rate).powf(inputs.number("years"));
    let npv = inputs.number("cashFlows") / discount - inputs.number("initialInvestment");
    SimulationOutput::new(ResultLine::fixed("Net Present Value", npv, 2, " $"))
}
